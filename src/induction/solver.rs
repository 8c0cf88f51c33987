//! Backward-induction solver.
//!
//! Resolves every node's best response by propagating payoffs from terminal
//! nodes upward through the tree as a level-by-level fixed point:
//!
//! 1. Terminal nodes start resolved; they form the initial frontier
//! 2. Each pass finds every *ready* node — an unresolved node whose
//!    transition children are all resolved — and evaluates it: the owner
//!    takes, for each action in declared order, their own component of the
//!    child's resolved payoff, and keeps the first strict maximum
//! 3. The chosen child's full payoff pair (both components) propagates to the
//!    node, which becomes resolved with that chosen action
//! 4. A pass resolving nothing while unresolved nodes remain is a stall: the
//!    input contains a cycle or a subgraph cut off from every terminal, and
//!    solving aborts with [`SolveError::Unsolvable`]
//!
//! Readiness depends only on the dependency structure, never on storage
//! order, and ties are broken toward the first declared action, so repeated
//! solves of the same tree yield identical chosen actions.

use std::collections::BTreeSet;
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::induction::config::{SolveStats, SolverConfig};
use crate::induction::error::SolveError;
use crate::induction::observer::{NullObserver, SolveObserver};
use crate::induction::tree::{GameTree, Node, Payoff};

/// The equilibrium plan artifact handed to the rendering collaborator.
///
/// Covers the best response at *every* decision node, not just the realized
/// path; the realized line of play is extracted separately by
/// [`extract_path`](crate::induction::path::extract_path).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Ids of every resolved decision node (nodes with a chosen action).
    pub optimal_nodes: BTreeSet<String>,

    /// Directed `(from, to)` edges selected by each node's chosen action.
    pub optimal_edges: BTreeSet<(String, String)>,
}

/// One pending resolution computed during a pass. Buffered so that writes
/// land only after the pass's evaluations finish.
#[derive(Debug, Clone)]
struct Decision {
    id: String,
    chosen_action: String,
    payoff: Payoff,
}

/// The backward-induction solver.
///
/// The tree is exclusively borrowed for the duration of one solve call; the
/// only state mutated is each node's resolution, monotonically from
/// `Unresolved` to `Resolved`.
///
/// # Example
/// ```ignore
/// use induction_solver::{InductionSolver, SolverConfig};
///
/// let mut solver = InductionSolver::new(SolverConfig::default());
/// let solution = solver.solve(&mut tree)?;
/// println!("resolved in {} passes", solver.stats().passes);
/// ```
#[derive(Debug, Default)]
pub struct InductionSolver {
    /// Configuration for the solver.
    config: SolverConfig,

    /// Statistics from the most recent solve.
    stats: SolveStats,
}

impl InductionSolver {
    /// Create a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            stats: SolveStats::new(),
        }
    }

    /// Solve the tree in place.
    ///
    /// On success every node is resolved and the returned [`Solution`] holds
    /// the optimal node and edge sets. On a stall, nodes resolved before the
    /// stall keep their state so the unresolved remainder can be diagnosed.
    ///
    /// Solving an already-solved tree is a no-op that returns the same
    /// solution.
    pub fn solve(&mut self, tree: &mut GameTree) -> Result<Solution, SolveError> {
        self.solve_observed(tree, &mut NullObserver)
    }

    /// Solve the tree, reporting every state transition to `observer`.
    pub fn solve_observed(
        &mut self,
        tree: &mut GameTree,
        observer: &mut dyn SolveObserver,
    ) -> Result<Solution, SolveError> {
        let start_time = Instant::now();
        self.stats = SolveStats::new();
        self.stats.total_nodes = tree.len();
        observer.on_solve_start(tree.len(), tree.unresolved_ids().len());

        loop {
            self.stats.passes += 1;
            observer.on_pass_start(self.stats.passes);

            let decisions = self.evaluate_ready(tree);
            if decisions.is_empty() {
                observer.on_pass_end(self.stats.passes, 0);
                break;
            }

            let newly_resolved = decisions.len();
            for decision in decisions {
                tree.resolve(&decision.id, decision.chosen_action.clone(), decision.payoff)?;
                self.stats.nodes_resolved += 1;
                observer.on_node_resolved(&decision.id, &decision.chosen_action, decision.payoff);
            }
            observer.on_pass_end(self.stats.passes, newly_resolved);
        }

        self.stats.elapsed_seconds = start_time.elapsed().as_secs_f64();
        observer.on_solve_end(&self.stats);

        let mut unresolved = tree.unresolved_ids();
        if !unresolved.is_empty() {
            unresolved.sort();
            return Err(SolveError::Unsolvable { unresolved });
        }
        Ok(Self::collect_solution(tree))
    }

    /// Statistics from the most recent solve.
    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    /// The solver's configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Evaluate every ready node of one pass without touching the tree.
    ///
    /// Ready nodes of a pass are mutually independent, so the evaluation may
    /// fan out; the caller applying the buffered decisions afterwards is the
    /// barrier that keeps readiness checks honest.
    fn evaluate_ready(&self, tree: &GameTree) -> Vec<Decision> {
        let ready: Vec<&Node> = tree
            .iter()
            .filter(|node| !node.is_resolved() && Self::is_ready(tree, node))
            .collect();

        if self.config.parallel && ready.len() >= self.config.parallel_threshold {
            ready
                .par_iter()
                .filter_map(|node| Self::evaluate(tree, node))
                .collect()
        } else {
            ready
                .iter()
                .filter_map(|node| Self::evaluate(tree, node))
                .collect()
        }
    }

    /// A node is ready once every transition child exists and is resolved.
    ///
    /// A missing child can never become resolved, so the node stays unready
    /// until the stall check reports it.
    fn is_ready(tree: &GameTree, node: &Node) -> bool {
        node.actions().iter().all(|action| {
            node.child(action)
                .and_then(|target| tree.get(target))
                .is_some_and(Node::is_resolved)
        })
    }

    /// Pick the owner's best action at a ready node.
    ///
    /// Strict-improvement scan over the declared action order: exact payoff
    /// ties keep the earlier action, so the choice is reproducible.
    fn evaluate(tree: &GameTree, node: &Node) -> Option<Decision> {
        let owner = node.owner()?;
        let mut best: Option<(&str, Payoff)> = None;
        for action in node.actions() {
            let payoff = node
                .child(action)
                .and_then(|target| tree.get(target))
                .and_then(Node::payoff)?;
            let improved = match best {
                Some((_, incumbent)) => payoff.for_player(owner) > incumbent.for_player(owner),
                None => true,
            };
            if improved {
                best = Some((action.as_str(), payoff));
            }
        }
        best.map(|(action, payoff)| Decision {
            id: node.id().to_string(),
            chosen_action: action.to_string(),
            payoff,
        })
    }

    /// Gather the optimal node and edge sets from a fully resolved tree.
    fn collect_solution(tree: &GameTree) -> Solution {
        let mut solution = Solution::default();
        for node in tree.iter() {
            if let Some(action) = node.chosen_action() {
                solution.optimal_nodes.insert(node.id().to_string());
                if let Some(target) = node.child(action) {
                    solution
                        .optimal_edges
                        .insert((node.id().to_string(), target.to_string()));
                }
            }
        }
        solution
    }
}
