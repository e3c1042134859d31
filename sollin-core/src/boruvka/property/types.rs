//! Fixture types for the Sollin property tests.

use crate::{Edge, Graph};

/// Shape of the generated graph and its weights.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Weights drawn from a wide range, so ties are rare.
    Unique,
    /// Every weight comes from a pool of one to three values, stressing
    /// tie-breaking in the scan and the reduction.
    ManyIdentical,
    /// A random spanning path plus roughly `0.5n` to `n` extra edges.
    Sparse,
    /// Edge probability between 0.7 and 0.95 over all vertex pairs.
    Dense,
    /// Two to four components with no edges between them.
    Disconnected,
}

/// Generated input for one property case.
#[derive(Clone, Debug)]
pub(super) struct SollinFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Edges as `(source, target, weight)` in edge-id order.
    pub edges: Vec<(usize, usize, u64)>,
    /// Worker count to run the engine with.
    pub worker_count: usize,
    /// Distribution used during generation.
    pub distribution: WeightDistribution,
}

impl SollinFixture {
    /// Builds the validated graph for this fixture.
    pub(super) fn graph(&self) -> Result<Graph<u64>, String> {
        self.graph_from_edges(self.edges.iter().copied())
    }

    /// Builds the graph with the edge list in reverse order.
    pub(super) fn reversed_graph(&self) -> Result<Graph<u64>, String> {
        self.graph_from_edges(self.edges.iter().rev().copied())
    }

    /// Describes the fixture for failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}, workers={}",
            self.distribution,
            self.vertex_count,
            self.edges.len(),
            self.worker_count,
        )
    }

    fn graph_from_edges(
        &self,
        edges: impl Iterator<Item = (usize, usize, u64)>,
    ) -> Result<Graph<u64>, String> {
        Graph::new(
            self.vertex_count,
            edges
                .map(|(source, target, weight)| Edge::new(source, target, weight))
                .collect(),
        )
        .map_err(|err| format!("fixture graph is invalid: {err} ({})", self.describe()))
    }
}
