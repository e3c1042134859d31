//! Per-component cheapest-edge vectors and the operator that reduces them.
//!
//! A vector slot indexed by a component representative holds the cheapest
//! known edge leaving that component, or `None`. Edges are ranked by
//! `(weight, edge id)`, which makes [`CheapestEdgeReducer::combine`] a
//! selection of the minimum under a total order: associative, commutative, and
//! with `None` as identity. Any reduction tree therefore yields the same vector.

use std::cmp::Ordering;

use crate::{
    graph::{EdgeId, Graph},
    weight::Weight,
};

/// Cheapest crossing edge per component representative.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CheapestEdges {
    slots: Vec<Option<EdgeId>>,
}

impl CheapestEdges {
    /// Creates a vector of `vertex_count` empty slots.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            slots: vec![None; vertex_count],
        }
    }

    /// Returns the slots indexed by vertex id.
    #[must_use]
    #[rustfmt::skip]
    pub fn slots(&self) -> &[Option<EdgeId>] { &self.slots }

    /// Returns the slot for `component`, or `None` when it is empty or out of
    /// range.
    #[must_use]
    pub fn get(&self, component: usize) -> Option<EdgeId> {
        self.slots.get(component).copied().flatten()
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Option<EdgeId>] {
        &mut self.slots
    }

    /// Empties every slot.
    pub fn reset(&mut self) {
        self.slots.fill(None);
    }
}

/// Combines cheapest-edge candidates using weights from an injected graph.
///
/// # Examples
/// ```
/// use sollin_core::{CheapestEdgeReducer, Edge, Graph};
///
/// let graph = Graph::new(3, vec![Edge::new(0, 1, 5_u32), Edge::new(1, 2, 3), Edge::new(0, 2, 3)])?;
/// let reducer = CheapestEdgeReducer::new(&graph);
/// assert_eq!(reducer.combine(Some(0), Some(1)), Some(1));
/// assert_eq!(reducer.combine(Some(2), Some(1)), Some(1));
/// assert_eq!(reducer.combine(None, Some(0)), Some(0));
/// assert_eq!(reducer.combine(None, None), None);
/// # Ok::<(), sollin_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct CheapestEdgeReducer<'g, W> {
    graph: &'g Graph<W>,
}

impl<'g, W: Weight> CheapestEdgeReducer<'g, W> {
    /// Binds the reducer to the graph whose edge ids it compares.
    #[must_use]
    pub const fn new(graph: &'g Graph<W>) -> Self {
        Self { graph }
    }

    /// Returns whichever candidate ranks first by `(weight, edge id)`.
    ///
    /// # Panics
    /// Panics when an id is not an edge of the bound graph.
    #[must_use]
    pub fn combine(&self, left: Option<EdgeId>, right: Option<EdgeId>) -> Option<EdgeId> {
        match (left, right) {
            (None, other) | (other, None) => other,
            (Some(left), Some(right)) => {
                if self.rank(right, left) == Ordering::Less {
                    Some(right)
                } else {
                    Some(left)
                }
            }
        }
    }

    /// Folds `incoming` into `into` slot by slot.
    ///
    /// # Panics
    /// Panics when a slot holds an id that is not an edge of the bound graph.
    pub fn combine_into(&self, into: &mut CheapestEdges, incoming: &CheapestEdges) {
        for (mine, theirs) in into.slots.iter_mut().zip(&incoming.slots) {
            *mine = self.combine(*mine, *theirs);
        }
    }

    fn rank(&self, left: EdgeId, right: EdgeId) -> Ordering {
        let edges = self.graph.edges();
        edges[left]
            .weight()
            .compare(&edges[right].weight())
            .then_with(|| left.cmp(&right))
    }
}
