use sollin_core::GraphError;
use thiserror::Error;

/// Errors raised while loading an edge-list file.
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// The input ended before the `V E` header was complete.
    #[error("input is missing the `V E` header")]
    MissingHeader,
    /// A token could not be parsed as the value expected at its position.
    #[error("line {line}: expected {expected} but found `{token}`")]
    InvalidToken {
        /// One-based line number of the token.
        line: usize,
        /// The raw token text.
        token: String,
        /// Description of the expected value.
        expected: &'static str,
    },
    /// The input ended before every declared edge was read.
    #[error("header declared {declared} edges but only {found} were complete")]
    Truncated {
        /// Edge count announced by the header.
        declared: usize,
        /// Number of complete edges read.
        found: usize,
    },
    /// Tokens follow the last declared edge.
    #[error("line {line}: unexpected data after the last declared edge")]
    TrailingData {
        /// One-based line number of the first extra token.
        line: usize,
    },
    /// The parsed edges do not form a valid graph.
    #[error("invalid graph: {0}")]
    Graph(#[from] GraphError),
    /// Reading the input failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl EdgeListError {
    /// Returns a stable, machine-readable code for the error.
    ///
    /// Graph validation failures reuse the core's graph error codes.
    ///
    /// # Examples
    /// ```
    /// use sollin_providers_edge_list::EdgeListError;
    ///
    /// assert_eq!(EdgeListError::MissingHeader.code(), "EDGE_LIST_MISSING_HEADER");
    /// ```
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingHeader => "EDGE_LIST_MISSING_HEADER",
            Self::InvalidToken { .. } => "EDGE_LIST_INVALID_TOKEN",
            Self::Truncated { .. } => "EDGE_LIST_TRUNCATED",
            Self::TrailingData { .. } => "EDGE_LIST_TRAILING_DATA",
            Self::Graph(err) => err.code().as_str(),
            Self::Io(_) => "EDGE_LIST_IO",
        }
    }
}
