//! Parallel Borůvka iteration executed by every worker of a collective group.
//!
//! One iteration has exactly three collective points:
//!
//! 1. the leader broadcasts its parent array;
//! 2. every worker scans its edge range and the per-component candidates are
//!    reduced to the leader;
//! 3. the leader merges, then broadcasts the remaining component count.
//!
//! Every worker applies the same termination check to the same broadcast
//! count, so the group stops together without an extra message.

mod dsu;
mod merge;
mod reduce;
mod scan;

use std::num::NonZeroUsize;

use tracing::{debug, debug_span, warn};

use crate::{
    Result,
    error::SollinError,
    graph::Graph,
    partition::edge_range,
    result::SpanningTree,
    transport::Collective,
    weight::Weight,
};

pub use self::{
    dsu::DisjointSetForest,
    reduce::{CheapestEdgeReducer, CheapestEdges},
};

use self::{merge::MergeCoordinator, scan::find_cheapest_edges};

/// Returns `⌈log2 vertex_count⌉`, the most iterations a connected graph can
/// need. Zero and one vertex need none.
///
/// # Examples
/// ```
/// use sollin_core::iteration_bound;
///
/// assert_eq!(iteration_bound(1), 0);
/// assert_eq!(iteration_bound(2), 1);
/// assert_eq!(iteration_bound(7), 3);
/// assert_eq!(iteration_bound(8), 3);
/// assert_eq!(iteration_bound(9), 4);
/// ```
#[must_use]
pub const fn iteration_bound(vertex_count: usize) -> usize {
    if vertex_count <= 1 {
        0
    } else {
        (usize::BITS - (vertex_count - 1).leading_zeros()) as usize
    }
}

/// Returns the fewest components a graph with `edge_count` edges can have.
///
/// Each edge joins at most two components, so a graph with fewer than
/// `vertex_count - 1` edges is disconnected before any state is allocated.
const fn fewest_components(vertex_count: usize, edge_count: usize) -> usize {
    let fewest = vertex_count.saturating_sub(edge_count);
    if fewest == 0 { 1 } else { fewest }
}

/// Runs this member's share of the MST computation over `graph`.
///
/// All members of the group must call this with the same graph and the same
/// `record_edges` flag. The leader returns the spanning tree; every other
/// member returns `None`.
///
/// # Errors
/// Returns [`SollinError::DisconnectedGraph`] on every member when the graph
/// has more than one component, [`SollinError::WeightOverflow`] on the leader
/// when the tree weight does not fit `W`, and [`SollinError::Transport`] when
/// a collective fails. A graph with fewer than `V - 1` edges is rejected after
/// zero iterations, and `remaining` is then `V - E`, a lower bound on its
/// component count.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use sollin_core::{Edge, Graph, SharedMemoryMember, run_worker};
///
/// let graph = Graph::new(3, vec![Edge::new(0, 1, 2_u32), Edge::new(1, 2, 3), Edge::new(0, 2, 9)])?;
/// let members = SharedMemoryMember::group(NonZeroUsize::MIN);
/// let tree = run_worker(&members[0], &graph, true)?.expect("the leader returns the tree");
/// assert_eq!(tree.total_weight(), 5);
/// assert_eq!(tree.edges(), &[0, 1]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn run_worker<C, W>(
    collective: &C,
    graph: &Graph<W>,
    record_edges: bool,
) -> Result<Option<SpanningTree<W>>>
where
    C: Collective,
    W: Weight,
{
    let size = collective.size();
    let worker_count =
        NonZeroUsize::new(size).ok_or(SollinError::InvalidWorkerCount { got: size })?;
    let range = edge_range(graph.edge_count(), worker_count, collective.rank())?;
    let span = debug_span!(
        "worker",
        rank = collective.rank(),
        start = range.start,
        end = range.end
    );
    let _entered = span.enter();

    let vertex_count = graph.vertex_count();
    let fewest = fewest_components(vertex_count, graph.edge_count());
    if fewest > 1 {
        if collective.is_leader() {
            warn!(
                remaining = fewest,
                iterations = 0,
                "graph is disconnected, stopping"
            );
        }
        return Err(SollinError::DisconnectedGraph {
            remaining: fewest,
            iterations: 0,
        });
    }

    let bound = iteration_bound(vertex_count);
    let reducer = CheapestEdgeReducer::new(graph);
    let mut forest = DisjointSetForest::new(vertex_count);
    let mut cheapest = CheapestEdges::new(vertex_count);
    let mut coordinator = collective
        .is_leader()
        .then(|| MergeCoordinator::<W>::new(vertex_count, record_edges));
    let mut remaining = [vertex_count];
    let mut history = vec![vertex_count];
    let mut iterations = 0;

    while remaining[0] > 1 {
        iterations += 1;
        collective.broadcast_from_leader(forest.parents_mut())?;

        cheapest.reset();
        find_cheapest_edges(graph, range.clone(), &mut forest, &mut cheapest)?;
        collective.reduce_to_leader(cheapest.slots_mut(), |left, right| {
            reducer.combine(*left, *right)
        })?;

        if let Some(leader) = coordinator.as_mut() {
            let merged = leader.merge(graph, &mut forest, &cheapest, iterations)?;
            remaining[0] = leader.remaining();
            debug!(
                iteration = iterations,
                merged,
                remaining = remaining[0],
                weight = %leader.total_weight(),
                "merged components"
            );
            #[cfg(feature = "metrics")]
            {
                metrics::counter!("sollin_iterations_total").increment(1);
                metrics::counter!("sollin_merges_total")
                    .increment(u64::try_from(merged).unwrap_or(u64::MAX));
            }
        }

        let previous = history.last().copied().unwrap_or(vertex_count);
        collective.broadcast_from_leader(&mut remaining)?;
        history.push(remaining[0]);

        if remaining[0] > 1 && (remaining[0] == previous || iterations >= bound) {
            if collective.is_leader() {
                warn!(
                    remaining = remaining[0],
                    iterations,
                    "graph is disconnected, stopping"
                );
            }
            return Err(SollinError::DisconnectedGraph {
                remaining: remaining[0],
                iterations,
            });
        }
    }

    Ok(coordinator.map(|leader| {
        let total_weight = leader.total_weight();
        SpanningTree::new(
            total_weight,
            leader.into_selected(),
            iterations,
            size,
            history,
        )
    }))
}

#[cfg(test)]
mod property;
