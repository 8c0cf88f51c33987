//! Configuration options and statistics for the induction solver.

use serde::{Deserialize, Serialize};

/// Configuration for the induction solver.
///
/// Backward induction is correct single-threaded; the knobs here only trade
/// wall-clock time. Nodes made ready within the same pass are mutually
/// independent, so wide trees can evaluate them in parallel.
///
/// # Example
/// ```
/// use induction_solver::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert!(!config.parallel); // single-threaded by default
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Evaluate each pass's ready set in parallel with rayon.
    ///
    /// Resolution writes are still applied sequentially after the pass's
    /// evaluations complete, so readiness checks never observe a write in
    /// flight. Results are identical to the single-threaded run.
    pub parallel: bool,

    /// Minimum ready-set size before parallel evaluation kicks in.
    ///
    /// Below this, fan-out overhead outweighs the work per node and the pass
    /// is evaluated sequentially even when `parallel` is set.
    pub parallel_threshold: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            parallel_threshold: 64,
        }
    }
}

impl SolverConfig {
    /// Create a new config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: enable or disable parallel pass evaluation.
    pub fn with_parallel(mut self, enable: bool) -> Self {
        self.parallel = enable;
        self
    }

    /// Builder method: set the parallel ready-set threshold.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}

/// Statistics tracked during a solve.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolveStats {
    /// Fixed-point passes executed, including the final no-change pass.
    pub passes: usize,

    /// Decision nodes the solver resolved.
    pub nodes_resolved: usize,

    /// Total nodes in the tree at solve time.
    pub total_nodes: usize,

    /// Wall-clock solve time in seconds.
    pub elapsed_seconds: f64,
}

impl SolveStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }
}
