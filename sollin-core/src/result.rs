//! Result type for spanning tree computations.

use crate::graph::EdgeId;

/// The output of a successful [`crate::Sollin::run`].
///
/// # Examples
/// ```
/// use sollin_core::{Edge, Graph, SollinBuilder};
///
/// let graph = Graph::new(2, vec![Edge::new(0, 1, 7_u32)])?;
/// let tree = SollinBuilder::new().with_worker_count(1).build()?.run(&graph)?;
/// assert_eq!(tree.total_weight(), 7);
/// assert_eq!(tree.edges(), &[0]);
/// assert_eq!(tree.component_history(), &[2, 1]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<W> {
    total_weight: W,
    edges: Vec<EdgeId>,
    iterations: usize,
    worker_count: usize,
    component_history: Vec<usize>,
}

impl<W: Copy> SpanningTree<W> {
    pub(crate) const fn new(
        total_weight: W,
        edges: Vec<EdgeId>,
        iterations: usize,
        worker_count: usize,
        component_history: Vec<usize>,
    ) -> Self {
        Self {
            total_weight,
            edges,
            iterations,
            worker_count,
            component_history,
        }
    }

    /// Returns the sum of the selected edge weights.
    #[must_use]
    pub const fn total_weight(&self) -> W {
        self.total_weight
    }

    /// Returns the selected edge ids in the order they were merged.
    ///
    /// Empty when edge recording was disabled on the builder.
    #[must_use]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Returns the number of iterations the run needed.
    #[must_use]
    pub const fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the number of workers that took part.
    #[must_use]
    pub const fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Returns the component count before the first iteration followed by the
    /// count after each iteration.
    #[must_use]
    pub fn component_history(&self) -> &[usize] {
        &self.component_history
    }
}
