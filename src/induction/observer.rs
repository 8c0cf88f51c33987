//! Solver observation interface.
//!
//! The solver reports its state transitions to an injectable observer rather
//! than printing them, keeping the core decoupled from any output medium.
//! Observers are adapters: [`NullObserver`] discards everything,
//! [`LogObserver`] forwards to the `log` facade, and [`ProgressObserver`]
//! draws an indicatif progress bar while large trees resolve.

use indicatif::{ProgressBar, ProgressStyle};

use crate::induction::config::SolveStats;
use crate::induction::tree::Payoff;

/// Receives solver progress events.
///
/// All methods default to no-ops, so an implementation only overrides the
/// events it cares about.
///
/// # Event Sequence
///
/// 1. `on_solve_start` — once, before the first pass
/// 2. For each pass: `on_pass_start`, then `on_node_resolved` per resolution,
///    then `on_pass_end`
/// 3. `on_solve_end` — once, whether the fixed point completed or stalled
pub trait SolveObserver {
    /// Called once before the first pass.
    fn on_solve_start(&mut self, _total_nodes: usize, _unresolved: usize) {}

    /// Called at the start of each fixed-point pass (1-based).
    fn on_pass_start(&mut self, _pass: usize) {}

    /// Called for every node a pass resolved, in deterministic order.
    fn on_node_resolved(&mut self, _id: &str, _chosen_action: &str, _payoff: Payoff) {}

    /// Called after each pass with the number of nodes it resolved.
    fn on_pass_end(&mut self, _pass: usize, _newly_resolved: usize) {}

    /// Called once when solving finishes, whether complete or stalled.
    fn on_solve_end(&mut self, _stats: &SolveStats) {}
}

/// Observer that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SolveObserver for NullObserver {}

/// Observer forwarding solver events to the `log` facade.
///
/// Per-node and per-pass events go to `debug`, the summary to `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SolveObserver for LogObserver {
    fn on_solve_start(&mut self, total_nodes: usize, unresolved: usize) {
        log::debug!("solving {total_nodes} node(s), {unresolved} unresolved");
    }

    fn on_node_resolved(&mut self, id: &str, chosen_action: &str, payoff: Payoff) {
        log::debug!("resolved '{id}': chose '{chosen_action}', payoff {payoff}");
    }

    fn on_pass_end(&mut self, pass: usize, newly_resolved: usize) {
        log::debug!("pass {pass}: {newly_resolved} node(s) resolved");
    }

    fn on_solve_end(&mut self, stats: &SolveStats) {
        log::info!(
            "solve finished: {}/{} node(s) resolved in {} pass(es), {:.3}s",
            stats.nodes_resolved,
            stats.total_nodes,
            stats.passes,
            stats.elapsed_seconds
        );
    }
}

/// Observer drawing an indicatif progress bar over the unresolved node count.
#[derive(Debug, Default)]
pub struct ProgressObserver {
    bar: Option<ProgressBar>,
}

impl ProgressObserver {
    /// Create a progress observer. The bar appears when solving starts.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SolveObserver for ProgressObserver {
    fn on_solve_start(&mut self, _total_nodes: usize, unresolved: usize) {
        let bar = ProgressBar::new(unresolved as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} nodes resolved")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        self.bar = Some(bar);
    }

    fn on_node_resolved(&mut self, _id: &str, _chosen_action: &str, _payoff: Payoff) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    fn on_solve_end(&mut self, stats: &SolveStats) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(format!("{} pass(es)", stats.passes));
        }
    }
}
