//! Plain-data artifact for the rendering collaborator.
//!
//! Visualization lives outside this crate. The core's entire contribution to
//! it is [`SolveOutput`]: the full node and edge sets, the optimal node and
//! edge sets from the [`Solution`], and the realized [`PlayPath`], flattened
//! into serializable values with no presentation logic attached.

use serde::{Deserialize, Serialize};

use crate::induction::path::PlayPath;
use crate::induction::solver::Solution;
use crate::induction::tree::{GameTree, Payoff, Player};

/// Flattened view of one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    /// The node's id.
    pub id: String,
    /// Deciding player, `None` for terminals.
    pub owner: Option<Player>,
    /// Whether the node is a terminal outcome.
    pub terminal: bool,
    /// Resolved payoff pair, if the node is resolved.
    pub payoff: Option<Payoff>,
    /// Chosen action, for resolved decision nodes.
    pub chosen_action: Option<String>,
}

/// One labeled edge of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeData {
    /// Parent node id.
    pub from: String,
    /// Action label on the edge.
    pub action: String,
    /// Child node id.
    pub to: String,
}

/// Everything a rendering tool needs to draw the solved game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveOutput {
    /// Every node, in insertion order.
    pub nodes: Vec<NodeData>,
    /// Every labeled edge, in declared action order per node.
    pub edges: Vec<EdgeData>,
    /// The equilibrium plan: optimal node and edge sets.
    pub solution: Solution,
    /// Realized path from the chosen start node, when one was extracted.
    pub path: Option<PlayPath>,
}

impl SolveOutput {
    /// Flatten a solved tree and its artifacts into plain data.
    pub fn collect(tree: &GameTree, solution: &Solution, path: Option<&PlayPath>) -> Self {
        let mut nodes = Vec::with_capacity(tree.len());
        let mut edges = Vec::new();
        for node in tree.iter() {
            nodes.push(NodeData {
                id: node.id().to_string(),
                owner: node.owner(),
                terminal: node.is_terminal(),
                payoff: node.payoff(),
                chosen_action: node.chosen_action().map(str::to_string),
            });
            for action in node.actions() {
                if let Some(target) = node.child(action) {
                    edges.push(EdgeData {
                        from: node.id().to_string(),
                        action: action.clone(),
                        to: target.to_string(),
                    });
                }
            }
        }
        Self {
            nodes,
            edges,
            solution: solution.clone(),
            path: path.cloned(),
        }
    }

    /// Serialize to pretty JSON, the exchange format for downstream tools.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
