//! Immutable weighted graph handed to every worker.
//!
//! Edges are identified by their position in the edge list. The list is
//! validated once, in parallel, before any worker starts, so the engine never
//! re-checks vertex ranges or weights.

use rayon::prelude::*;

use crate::{error::GraphError, weight::Weight};

/// Position of an edge in [`Graph::edges`].
pub type EdgeId = usize;

/// An undirected weighted edge `(source, target, weight)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge<W> {
    source: usize,
    target: usize,
    weight: W,
}

impl<W: Weight> Edge<W> {
    /// Creates an edge. Endpoint order carries no meaning.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: W) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> W { self.weight }

    /// Returns `true` when both endpoints coincide.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// A validated, immutable weighted undirected graph.
///
/// Self-loops and parallel edges are accepted; the engine never selects a
/// self-loop and treats parallel edges as extra candidates.
///
/// # Examples
/// ```
/// use sollin_core::{Edge, Graph, GraphError};
///
/// let graph = Graph::new(3, vec![Edge::new(0, 1, 2_u32), Edge::new(1, 2, 1)])?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
///
/// let err = Graph::new(2, vec![Edge::new(0, 2, 1_u32)]).unwrap_err();
/// assert!(matches!(err, GraphError::InvalidVertex { edge: 0, vertex: 2, .. }));
/// # Ok::<(), GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Graph<W> {
    vertex_count: usize,
    edges: Vec<Edge<W>>,
}

impl<W: Weight> Graph<W> {
    /// Validates `edges` against `vertex_count` and builds the graph.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when `vertex_count == 0`,
    /// [`GraphError::InvalidVertex`] for the first edge that references a
    /// vertex `>= vertex_count`, and [`GraphError::InvalidWeight`] for the first
    /// edge whose weight is not totally ordered.
    pub fn new(vertex_count: usize, edges: Vec<Edge<W>>) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::EmptyGraph);
        }

        let first_error = edges
            .par_iter()
            .enumerate()
            .find_map_first(|(id, edge)| validate_edge(id, edge, vertex_count).err());
        if let Some(err) = first_error {
            return Err(err);
        }

        Ok(Self {
            vertex_count,
            edges,
        })
    }

    /// Builds the graph after checking that exactly `declared` edges were
    /// supplied.
    ///
    /// Loaders call this with the edge count announced by their input header
    /// so truncated inputs are rejected instead of producing a partial graph.
    ///
    /// # Errors
    /// Returns [`GraphError::EdgeCountMismatch`] when `edges.len() != declared`,
    /// otherwise the same errors as [`Graph::new`].
    pub fn with_declared_edge_count(
        vertex_count: usize,
        declared: usize,
        edges: Vec<Edge<W>>,
    ) -> Result<Self, GraphError> {
        if edges.len() != declared {
            return Err(GraphError::EdgeCountMismatch {
                declared,
                found: edges.len(),
            });
        }
        Self::new(vertex_count, edges)
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the edge list in id order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<W>] { &self.edges }

    /// Returns the edge with the given id, if present.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge<W>> {
        self.edges.get(id)
    }
}

fn validate_edge<W: Weight>(
    id: EdgeId,
    edge: &Edge<W>,
    vertex_count: usize,
) -> Result<(), GraphError> {
    for vertex in [edge.source, edge.target] {
        if vertex >= vertex_count {
            return Err(GraphError::InvalidVertex {
                edge: id,
                vertex,
                vertex_count,
            });
        }
    }
    if !edge.weight.is_valid() {
        return Err(GraphError::InvalidWeight { edge: id });
    }
    Ok(())
}
