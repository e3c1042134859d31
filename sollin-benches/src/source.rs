//! Synthetic graphs for benchmarking.
//!
//! Provides [`generate_graph`], which builds a seeded random connected graph:
//! a random spanning tree that guarantees connectivity, plus extra random
//! edges to give every component a choice of outgoing edges.

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
use sollin_core::{Edge, Graph, GraphError};

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The requested maximum weight was zero.
    #[error("maximum weight must be greater than zero")]
    ZeroMaxWeight,
    /// The generated edges were rejected by graph validation.
    #[error("generated graph is invalid: {0}")]
    Graph(#[from] GraphError),
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices to generate.
    pub vertex_count: usize,
    /// Random edges added per vertex on top of the spanning tree.
    pub extra_edges_per_vertex: usize,
    /// Weights are drawn uniformly from `1..=max_weight`.
    pub max_weight: u64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates a connected graph from the given configuration.
///
/// The graph has `vertex_count - 1 + vertex_count * extra_edges_per_vertex`
/// edges. The edge list is shuffled so tree edges are spread across every
/// worker partition.
///
/// # Errors
///
/// Returns [`SyntheticError::ZeroVertices`] if `vertex_count` is zero and
/// [`SyntheticError::ZeroMaxWeight`] if `max_weight` is zero.
///
/// # Examples
///
/// ```
/// use sollin_benches::source::{SyntheticGraphConfig, generate_graph};
///
/// let config = SyntheticGraphConfig {
///     vertex_count: 10,
///     extra_edges_per_vertex: 2,
///     max_weight: 100,
///     seed: 42,
/// };
/// let graph = generate_graph(&config).expect("valid config");
/// assert_eq!(graph.vertex_count(), 10);
/// assert_eq!(graph.edge_count(), 29);
/// ```
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<Graph<u64>, SyntheticError> {
    if config.vertex_count == 0 {
        return Err(SyntheticError::ZeroVertices);
    }
    if config.max_weight == 0 {
        return Err(SyntheticError::ZeroMaxWeight);
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let extra = config
        .vertex_count
        .saturating_mul(config.extra_edges_per_vertex);
    let mut edges = Vec::with_capacity(config.vertex_count.saturating_sub(1).saturating_add(extra));

    for vertex in 1..config.vertex_count {
        let parent = rng.gen_range(0..vertex);
        edges.push(Edge::new(
            parent,
            vertex,
            rng.gen_range(1..=config.max_weight),
        ));
    }
    for _ in 0..extra {
        let source = rng.gen_range(0..config.vertex_count);
        let target = rng.gen_range(0..config.vertex_count);
        edges.push(Edge::new(
            source,
            target,
            rng.gen_range(1..=config.max_weight),
        ));
    }

    edges.shuffle(&mut rng);
    Ok(Graph::new(config.vertex_count, edges)?)
}
