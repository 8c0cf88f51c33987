//! Backward-Induction Solver Module.
//!
//! This module implements subgame-perfect solving of finite two-player
//! sequential games by backward induction.
//!
//! # Overview
//!
//! Backward induction resolves a game tree from its leaves toward the root:
//! 1. Terminal nodes carry fixed payoff pairs and start resolved
//! 2. A decision node becomes *ready* once every child it can reach is resolved
//! 3. A ready node's owner picks the action maximizing their own payoff
//!    component; the chosen child's full payoff pair propagates upward
//! 4. Repeat until no node changes in a full pass
//!
//! A pass that resolves nothing while unresolved nodes remain means the tree
//! contains a cycle or a subgraph cut off from every terminal; solving aborts
//! with [`SolveError::Unsolvable`] and the partial resolution is kept for
//! diagnosis.
//!
//! # Determinism
//!
//! Resolution is independent of node storage order: readiness depends only on
//! the dependency structure, and payoff ties are broken toward the action
//! declared first at the node. Solving the same tree twice yields identical
//! chosen actions.
//!
//! # Usage
//!
//! 1. Parse a description with [`TreeBuilder`] (or assemble [`Node`]s directly)
//! 2. Create an [`InductionSolver`] and call `solve()`
//! 3. Extract the realized line of play with [`extract_path`]
//! 4. Hand [`SolveOutput`] to a rendering tool
//!
//! # Example
//!
//! ```ignore
//! use induction_solver::induction::{InductionSolver, SolverConfig, TreeBuilder};
//!
//! let mut builder = TreeBuilder::new();
//! let mut tree = builder.parse(&description)?;
//!
//! let mut solver = InductionSolver::new(SolverConfig::default());
//! let solution = solver.solve(&mut tree)?;
//! println!("equilibrium edges: {:?}", solution.optimal_edges);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod output;
pub mod path;
pub mod solver;
pub mod tree;

// Re-export main types for convenient access
pub use builder::TreeBuilder;
pub use config::{SolveStats, SolverConfig};
pub use error::{BuildError, BuildWarning, PathError, SolveError, TreeError};
pub use observer::{LogObserver, NullObserver, ProgressObserver, SolveObserver};
pub use output::{EdgeData, NodeData, SolveOutput};
pub use path::{extract_path, PathStep, PlayPath};
pub use solver::{InductionSolver, Solution};
pub use tree::{GameTree, Node, Payoff, Player, Resolution};
