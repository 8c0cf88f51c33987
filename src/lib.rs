//! # Induction Solver
//!
//! A backward-induction solver for finite, perfect-information, two-player
//! sequential games represented as extensive-form game trees.
//!
//! ## Features
//!
//! - **Text-to-Tree Builder**: Parses a line-oriented block description into a
//!   validated game tree
//! - **Backward-Induction Core**: Resolves every node's best response with a
//!   deterministic, first-declared-action tie-break
//! - **Path Extraction**: Walks the realized equilibrium line of play
//! - **Injectable Observation**: Progress bars, logging, or custom observers
//!   receive every resolution event
//! - **Render Artifacts**: Plain serializable node/edge data for downstream
//!   visualization tools
//!
//! ## Quick Start
//!
//! ```
//! use induction_solver::{extract_path, InductionSolver, SolverConfig, TreeBuilder};
//!
//! let description = "\
//! Node: N0
//! Player: A
//! Actions: [L, R]
//! L -> T1
//! R -> T2
//!
//! Terminal: T1
//! Payoff: A gets 3, B gets 1
//!
//! Terminal: T2
//! Payoff: A gets 1, B gets 4
//! ";
//!
//! let mut builder = TreeBuilder::new();
//! let mut tree = builder.parse(description)?;
//!
//! let mut solver = InductionSolver::new(SolverConfig::default());
//! let solution = solver.solve(&mut tree)?;
//! assert!(solution.optimal_nodes.contains("N0"));
//!
//! let path = extract_path(&tree, "N0")?;
//! assert_eq!(path.terminal_id, "T1");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Modules
//!
//! - [`induction`]: Tree data model, builder, solver, and path extractor
//! - [`games`]: Example game descriptions with known subgame-perfect outcomes
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────────┐
//! │ TreeBuilder │ ──> │  GameTree   │ ──> │ InductionSolver  │
//! │ (text in)   │     │ (registry)  │     │ (resolves nodes) │
//! └─────────────┘     └─────────────┘     └────────┬─────────┘
//!                                                  │
//!                            ┌─────────────────────┼──────────────┐
//!                            ▼                     ▼              ▼
//!                     ┌────────────┐        ┌────────────┐  ┌───────────┐
//!                     │ Solution   │        │ PlayPath   │  │ observers │
//!                     │ (plan set) │        │ (realized) │  │ (events)  │
//!                     └────────────┘        └────────────┘  └───────────┘
//! ```

#![warn(missing_docs)]

/// Backward-induction solver module.
///
/// This is the core module containing the tree model and the algorithm.
pub mod induction;

/// Example game descriptions.
///
/// Contains small sequential games with known equilibria for testing and
/// validation.
pub mod games;

// Re-export commonly used types at crate root for convenience
pub use induction::{
    extract_path, BuildError, BuildWarning, GameTree, InductionSolver, LogObserver, Node,
    NullObserver, PathError, PathStep, Payoff, PlayPath, Player, ProgressObserver, Resolution,
    SolveError, SolveObserver, SolveOutput, SolveStats, Solution, SolverConfig, TreeBuilder,
    TreeError,
};
