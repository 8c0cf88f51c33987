//! Realized-path extraction from a solved tree.
//!
//! Given a solved [`GameTree`] and a start node, repeatedly follow each
//! node's chosen action until a terminal is reached, accumulating the ordered
//! line of play. The walk is iterative and bounded by the tree's node count,
//! so a corrupted chosen-action graph surfaces as
//! [`PathError::CycleDetected`] instead of unbounded recursion.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::induction::error::PathError;
use crate::induction::tree::{GameTree, Payoff};

/// One step of the realized line of play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    /// Node where the decision was taken.
    pub node_id: String,
    /// Action its owner chose.
    pub action: String,
}

/// The realized path of play under the computed equilibrium.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayPath {
    /// Decision steps from the start node, in order.
    pub steps: Vec<PathStep>,
    /// Terminal node the play ends at.
    pub terminal_id: String,
    /// Payoff pair realized at that terminal.
    pub payoff: Payoff,
}

impl fmt::Display for PlayPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            write!(f, "{} --{}--> ", step.node_id, step.action)?;
        }
        write!(
            f,
            "{}: A = {}, B = {}",
            self.terminal_id, self.payoff.a, self.payoff.b
        )
    }
}

/// Walk the solved tree from `start_id`, following each chosen action until a
/// terminal node is reached.
///
/// Failures carry the partial path walked so far: a visited non-terminal
/// without a chosen action yields [`PathError::Unresolved`] (the solver did
/// not run, or stalled, or the start lies outside the solved component), and
/// a walk longer than the tree's node count yields
/// [`PathError::CycleDetected`].
pub fn extract_path(tree: &GameTree, start_id: &str) -> Result<PlayPath, PathError> {
    let mut node = tree.get(start_id).ok_or_else(|| PathError::UnknownStart {
        id: start_id.to_string(),
    })?;

    let limit = tree.len();
    let mut steps: Vec<PathStep> = Vec::new();

    loop {
        if node.is_terminal() {
            return match node.payoff() {
                Some(payoff) => Ok(PlayPath {
                    steps,
                    terminal_id: node.id().to_string(),
                    payoff,
                }),
                None => Err(PathError::Unresolved {
                    id: node.id().to_string(),
                    partial: steps,
                }),
            };
        }

        let Some(action) = node.chosen_action() else {
            return Err(PathError::Unresolved {
                id: node.id().to_string(),
                partial: steps,
            });
        };
        steps.push(PathStep {
            node_id: node.id().to_string(),
            action: action.to_string(),
        });
        if steps.len() > limit {
            return Err(PathError::CycleDetected {
                start: start_id.to_string(),
                limit,
                partial: steps,
            });
        }

        // The transition key set equals the action list, so the chosen action
        // always has a target; a missing target node is still reported rather
        // than assumed.
        let Some(target) = node.child(action) else {
            return Err(PathError::Unresolved {
                id: node.id().to_string(),
                partial: steps,
            });
        };
        node = match tree.get(target) {
            Some(next) => next,
            None => {
                return Err(PathError::MissingNode {
                    id: node.id().to_string(),
                    target: target.to_string(),
                    partial: steps,
                })
            }
        };
    }
}
