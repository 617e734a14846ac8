//! Benchmark parameter types.

use std::fmt;

/// Parameters for a graph benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the graph.
    pub point_count: usize,
    /// Coordinates per point.
    pub dimensions: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.point_count, self.dimensions)
    }
}
