//! Benchmark parameter types.

use std::fmt;

use partree_core::Linkage;

/// Parameters for one merge loop benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct MstBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Root linkage strategy under test.
    pub linkage: Linkage,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},{}", self.vertex_count, self.linkage.as_str())
    }
}
