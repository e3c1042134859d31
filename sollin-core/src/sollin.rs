//! Runtime entry point for the Sollin engine.
//!
//! Provides [`Sollin`], which spawns one scoped thread per worker, connects
//! them through an in-process collective group, and collects the leader's
//! spanning tree.

use std::{num::NonZeroUsize, thread};

use tracing::{Dispatch, Span, dispatcher, instrument};

use crate::{
    Result,
    boruvka::run_worker,
    error::SollinError,
    graph::Graph,
    result::SpanningTree,
    transport::{LEADER_RANK, SharedMemoryMember},
    weight::Weight,
};

type WorkerOutcome<W> = Result<Option<SpanningTree<W>>>;

/// Entry point for computing minimum spanning trees.
///
/// # Examples
/// ```
/// use sollin_core::{Edge, Graph, SollinBuilder};
///
/// let graph = Graph::new(
///     3,
///     vec![Edge::new(0, 1, 1.5_f64), Edge::new(1, 2, 0.5), Edge::new(0, 2, 3.0)],
/// )?;
/// let sollin = SollinBuilder::new()
///     .with_worker_count(2)
///     .build()
///     .expect("builder must succeed");
/// let tree = sollin.run(&graph)?;
/// assert_eq!(tree.total_weight(), 2.0);
/// assert_eq!(tree.worker_count(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Sollin {
    worker_count: NonZeroUsize,
    record_edges: bool,
}

impl Sollin {
    pub(crate) const fn new(worker_count: NonZeroUsize, record_edges: bool) -> Self {
        Self {
            worker_count,
            record_edges,
        }
    }

    /// Returns the number of workers each run uses.
    #[must_use]
    pub const fn worker_count(&self) -> NonZeroUsize {
        self.worker_count
    }

    /// Returns `true` when runs record the selected edge ids.
    #[must_use]
    pub const fn records_edges(&self) -> bool {
        self.record_edges
    }

    /// Computes the minimum spanning tree of `graph`.
    ///
    /// # Errors
    /// Returns [`SollinError::DisconnectedGraph`] when the graph has more than
    /// one component, [`SollinError::WeightOverflow`] when the tree weight does
    /// not fit `W`, and [`SollinError::WorkerPanicked`] or
    /// [`SollinError::Transport`] when a worker fails.
    #[instrument(
        name = "core.run",
        err,
        skip(self, graph),
        fields(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            workers = self.worker_count.get(),
        ),
    )]
    pub fn run<W: Weight>(&self, graph: &Graph<W>) -> Result<SpanningTree<W>> {
        let members = SharedMemoryMember::group(self.worker_count);
        let dispatch = dispatcher::get_default(Dispatch::clone);
        let parent = Span::current();
        let record_edges = self.record_edges;

        let outcomes: Vec<WorkerOutcome<W>> = thread::scope(|scope| {
            let handles: Vec<_> = members
                .into_iter()
                .map(|member| {
                    let dispatch = dispatch.clone();
                    let parent = parent.clone();
                    scope.spawn(move || {
                        dispatcher::with_default(&dispatch, || {
                            parent.in_scope(|| {
                                let outcome = run_worker(&member, graph, record_edges);
                                if outcome.is_err() {
                                    member.abort();
                                }
                                outcome
                            })
                        })
                    })
                })
                .collect();
            handles
                .into_iter()
                .enumerate()
                .map(|(rank, handle)| {
                    handle
                        .join()
                        .unwrap_or_else(|_| Err(SollinError::WorkerPanicked { rank }))
                })
                .collect()
        });

        collect_tree(outcomes)
    }
}

/// Picks the leader's tree, or the error that caused the run to fail.
///
/// Errors that only report a failed peer are passed over in favour of the
/// failure that triggered them.
fn collect_tree<W>(outcomes: Vec<WorkerOutcome<W>>) -> Result<SpanningTree<W>> {
    let mut first_error = None;
    let mut tree = None;
    for outcome in outcomes {
        match outcome {
            Ok(Some(found)) => tree = Some(found),
            Ok(None) => {}
            Err(err) => match &first_error {
                None => first_error = Some(err),
                Some(current) if current.is_secondary() && !err.is_secondary() => {
                    first_error = Some(err);
                }
                Some(_) => {}
            },
        }
    }

    if let Some(err) = first_error {
        return Err(err);
    }
    tree.ok_or(SollinError::InvariantViolation {
        invariant: "leader must return the spanning tree",
        index: LEADER_RANK,
        bound: 1,
    })
}
