//! Shared test utilities for `sollin-core`.

use proptest::test_runner::Config as ProptestConfig;
use sollin_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::{Edge, Graph};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `SOLLIN_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a graph from `(source, target, weight)` triples.
///
/// # Panics
/// Panics when the triples do not form a valid graph.
#[must_use]
pub(crate) fn graph_from(vertex_count: usize, edges: &[(usize, usize, u64)]) -> Graph<u64> {
    Graph::new(
        vertex_count,
        edges
            .iter()
            .map(|&(source, target, weight)| Edge::new(source, target, weight))
            .collect(),
    )
    .expect("test graph must be valid")
}

/// The four-vertex graph used throughout the unit tests; its MST weighs 19.
#[must_use]
pub(crate) fn four_vertex_graph() -> Graph<u64> {
    graph_from(
        4,
        &[(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)],
    )
}
