//! Error and warning taxonomy for construction, solving, and path extraction.
//!
//! Construction failures ([`BuildError`]) abort the build entirely; no partial
//! tree is returned. A stalled fixed point ([`SolveError::Unsolvable`]) aborts
//! solving but keeps nodes resolved before the stall, so callers can inspect
//! which nodes failed to resolve and why. Path failures ([`PathError`]) are
//! fatal only to that traversal, never to the tree. Nothing is retried
//! automatically; retrying construction on corrected input belongs to the
//! caller.

use std::fmt;

use thiserror::Error;

use crate::induction::path::PathStep;

/// Errors raised by the node registry itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A node with this id is already present in the tree.
    #[error("duplicate node id '{id}'")]
    DuplicateId {
        /// The colliding node id.
        id: String,
    },

    /// No node with this id exists in the tree.
    #[error("no node with id '{id}'")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },
}

/// Errors that abort tree construction.
#[derive(Error, Debug)]
pub enum BuildError {
    /// A block is missing a required line.
    #[error("node '{id}': missing {field}")]
    MissingField {
        /// Id of the offending block.
        id: String,
        /// Which line was expected.
        field: &'static str,
    },

    /// A payoff token could not be interpreted as a number.
    #[error("terminal '{id}': malformed payoff token '{token}'")]
    MalformedPayoff {
        /// Id of the offending terminal block.
        id: String,
        /// The digit run that failed to parse.
        token: String,
    },

    /// Two blocks declared the same node id.
    #[error("duplicate node id '{id}'")]
    DuplicateId {
        /// The colliding node id.
        id: String,
    },

    /// The same action label is declared twice at one node.
    #[error("node '{id}': action '{action}' declared more than once")]
    DuplicateAction {
        /// Id of the offending decision block.
        id: String,
        /// The repeated action label.
        action: String,
    },

    /// A declared action has no transition line.
    #[error("node '{id}': action '{action}' has no transition")]
    DanglingAction {
        /// Id of the offending decision block.
        id: String,
        /// The action left without a child.
        action: String,
    },

    /// A transition line names an action absent from the declared list.
    #[error("node '{id}': transition for undeclared action '{action}'")]
    UndeclaredAction {
        /// Id of the offending decision block.
        id: String,
        /// The undeclared action label.
        action: String,
    },

    /// A transition points at a node id that was never defined.
    #[error("node '{id}': action '{action}' references unknown node '{target}'")]
    UnknownReference {
        /// Id of the referencing node.
        id: String,
        /// The action whose transition is broken.
        action: String,
        /// The missing child id.
        target: String,
    },

    /// Reading the input file failed.
    #[error("failed to read '{path}': {source}")]
    Io {
        /// Path that could not be read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Recoverable construction diagnostics. The build still succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildWarning {
    /// A terminal payoff line yielded fewer than two numbers; (0, 0) was used.
    DefaultedPayoff {
        /// Id of the terminal whose payoff was defaulted.
        id: String,
        /// How many numbers the line actually yielded.
        found: usize,
    },
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildWarning::DefaultedPayoff { id, found } => write!(
                f,
                "terminal '{id}': payoff line yielded {found} number(s), defaulting to (0, 0)"
            ),
        }
    }
}

/// Errors raised while solving.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The fixed point stalled: a full pass resolved nothing while nodes
    /// remain unresolved. The tree contains a cycle or a subgraph from which
    /// no terminal is reachable. Nodes resolved before the stall keep their
    /// state.
    #[error("induction stalled with {} unresolved node(s): {}", .unresolved.len(), .unresolved.join(", "))]
    Unsolvable {
        /// Ids of the nodes left unresolved, sorted.
        unresolved: Vec<String>,
    },

    /// A registry operation failed mid-solve.
    #[error(transparent)]
    Registry(#[from] TreeError),
}

/// Errors raised during path extraction. The partial path walked before the
/// failure is always reported.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// The start node does not exist in the tree.
    #[error("start node '{id}' does not exist")]
    UnknownStart {
        /// The requested start id.
        id: String,
    },

    /// A visited non-terminal node has no chosen action.
    #[error("node '{id}' has no chosen action after {} step(s)", .partial.len())]
    Unresolved {
        /// The node where the walk stopped.
        id: String,
        /// Steps taken before the failure.
        partial: Vec<PathStep>,
    },

    /// A chosen action points at a node missing from the tree.
    #[error("chosen action at '{id}' leads to missing node '{target}' after {} step(s)", .partial.len())]
    MissingNode {
        /// The node whose chosen transition is broken.
        id: String,
        /// The missing child id.
        target: String,
        /// Steps taken before the failure.
        partial: Vec<PathStep>,
    },

    /// The walk exceeded the tree's node count: the chosen-action graph is
    /// corrupted and contains a cycle.
    #[error("walk from '{start}' exceeded {limit} node(s); chosen-action graph contains a cycle")]
    CycleDetected {
        /// The start node of the walk.
        start: String,
        /// The traversal bound (node count of the tree).
        limit: usize,
        /// Steps taken before the bound was hit.
        partial: Vec<PathStep>,
    },
}
