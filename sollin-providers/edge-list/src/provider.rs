//! Edge-list provider implementation and tokenizer.
use std::{
    fs::File,
    io::{self, BufRead, BufReader, Cursor, Lines},
    path::Path,
    str::FromStr,
    vec,
};

use sollin_core::{Edge, Graph, Weight};

use crate::errors::EdgeListError;

/// Upper bound on edges reserved up front from an untrusted header.
const MAX_PREALLOCATED_EDGES: usize = 1 << 20;

/// A named graph loaded from an edge-list source.
#[derive(Debug, Clone)]
pub struct EdgeListProvider<W> {
    name: String,
    graph: Graph<W>,
}

impl<W> EdgeListProvider<W>
where
    W: Weight + FromStr,
{
    /// Loads a graph from the file at `path`.
    ///
    /// # Errors
    /// Returns [`EdgeListError::Io`] when the file cannot be opened or read,
    /// and the errors of [`EdgeListProvider::try_from_reader`] otherwise.
    pub fn try_from_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, EdgeListError> {
        let file = File::open(path)?;
        Self::try_from_reader(name, BufReader::new(file))
    }

    /// Loads a graph from an in-memory string.
    ///
    /// # Errors
    /// Returns the same errors as [`EdgeListProvider::try_from_reader`].
    ///
    /// # Examples
    /// ```
    /// use sollin_providers_edge_list::EdgeListProvider;
    ///
    /// let provider = EdgeListProvider::<u32>::try_from_str("demo", "3 2\n0 1 4\n1 2 7\n")?;
    /// assert_eq!(provider.name(), "demo");
    /// assert_eq!(provider.graph().vertex_count(), 3);
    /// assert_eq!(provider.graph().edge_count(), 2);
    /// # Ok::<(), sollin_providers_edge_list::EdgeListError>(())
    /// ```
    pub fn try_from_str(name: impl Into<String>, text: &str) -> Result<Self, EdgeListError> {
        Self::try_from_reader(name, Cursor::new(text))
    }

    /// Loads a graph from a buffered reader.
    ///
    /// # Errors
    /// Returns [`EdgeListError::MissingHeader`] when the `V E` header is
    /// absent, [`EdgeListError::InvalidToken`] for the first unparsable token,
    /// [`EdgeListError::Truncated`] when fewer edges than declared are present,
    /// [`EdgeListError::TrailingData`] when tokens follow the last edge, and
    /// [`EdgeListError::Graph`] when the edges fail graph validation.
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, EdgeListError> {
        let mut tokens = Tokens::new(reader);
        let vertex_count: usize = tokens
            .next_token()?
            .ok_or(EdgeListError::MissingHeader)?
            .parse("a vertex count")?;
        let declared: usize = tokens
            .next_token()?
            .ok_or(EdgeListError::MissingHeader)?
            .parse("an edge count")?;

        let mut edges = Vec::with_capacity(declared.min(MAX_PREALLOCATED_EDGES));
        for found in 0..declared {
            let truncated = || EdgeListError::Truncated { declared, found };
            let source = tokens.next_token()?.ok_or_else(truncated)?.parse("a source vertex")?;
            let target = tokens.next_token()?.ok_or_else(truncated)?.parse("a target vertex")?;
            let weight = tokens.next_token()?.ok_or_else(truncated)?.parse("an edge weight")?;
            edges.push(Edge::new(source, target, weight));
        }

        if let Some(extra) = tokens.next_token()? {
            return Err(EdgeListError::TrailingData { line: extra.line });
        }

        let graph = Graph::with_declared_edge_count(vertex_count, declared, edges)?;
        Ok(Self {
            name: name.into(),
            graph,
        })
    }
}

impl<W> EdgeListProvider<W> {
    /// Returns the provider name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the loaded graph.
    #[must_use]
    pub const fn graph(&self) -> &Graph<W> {
        &self.graph
    }

    /// Consumes the provider and returns the loaded graph.
    #[must_use]
    pub fn into_graph(self) -> Graph<W> {
        self.graph
    }
}

struct Token {
    line: usize,
    text: String,
}

impl Token {
    fn parse<T: FromStr>(self, expected: &'static str) -> Result<T, EdgeListError> {
        self.text.parse().map_err(|_| EdgeListError::InvalidToken {
            line: self.line,
            token: self.text,
            expected,
        })
    }
}

/// Whitespace tokenizer that remembers the line each token came from.
struct Tokens<R> {
    lines: Lines<R>,
    line: usize,
    pending: vec::IntoIter<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
            pending: Vec::new().into_iter(),
        }
    }

    fn next_token(&mut self) -> io::Result<Option<Token>> {
        loop {
            if let Some(text) = self.pending.next() {
                return Ok(Some(Token {
                    line: self.line,
                    text,
                }));
            }
            let Some(next) = self.lines.next().transpose()? else {
                return Ok(None);
            };
            self.line += 1;
            self.pending = next
                .split_whitespace()
                .map(str::to_owned)
                .collect::<Vec<_>>()
                .into_iter();
        }
    }
}
