//! Benchmark parameter types.

use std::fmt;

/// Parameters for one engine benchmark run.
#[derive(Clone, Debug)]
pub struct SollinBenchParams {
    /// Number of vertices in the synthetic graph.
    pub vertex_count: usize,
    /// Number of workers in the group.
    pub worker_count: usize,
}

impl fmt::Display for SollinBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}", self.vertex_count, self.worker_count)
    }
}
