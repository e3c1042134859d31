use sollin_core::{Edge, Graph};
use sollin_test_support::graphs::ReferenceGraph;

/// Builds the core graph for a shared reference graph.
#[must_use]
pub fn graph(reference: &ReferenceGraph) -> Graph<u64> {
    Graph::new(
        reference.vertex_count,
        reference
            .edges
            .iter()
            .map(|&(source, target, weight)| Edge::new(source, target, weight))
            .collect(),
    )
    .expect("reference graph must be valid")
}
