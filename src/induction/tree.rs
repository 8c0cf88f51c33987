//! Extensive-form game tree data model.
//!
//! A [`GameTree`] owns every [`Node`] of one game, keyed by id. Decision nodes
//! belong to one of the two [`Player`]s and offer an ordered list of actions,
//! each mapping to a child id; terminal nodes carry a fixed [`Payoff`] pair
//! and no actions. Nodes are created once during construction; afterwards the
//! only mutation is the solver driving [`Resolution`] monotonically from
//! `Unresolved` to `Resolved`.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::induction::error::{BuildError, TreeError};

/// One of the two players of a sequential game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The first mover's side; reads the first payoff component.
    A,
    /// The second side; reads the second payoff component.
    B,
}

impl Player {
    /// Index of this player's component in a payoff pair.
    pub fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }

    /// Recognize a player marker inside an owner line of the text format.
    ///
    /// The marker is the single uppercase letter `A` or `B`; `A` wins if a
    /// line somehow contains both.
    pub fn from_marker(line: &str) -> Option<Player> {
        if line.contains('A') {
            Some(Player::A)
        } else if line.contains('B') {
            Some(Player::B)
        } else {
            None
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::A => write!(f, "A"),
            Player::B => write!(f, "B"),
        }
    }
}

/// A payoff pair: player A's utility and player B's utility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Payoff {
    /// Player A's utility.
    pub a: f64,
    /// Player B's utility.
    pub b: f64,
}

impl Payoff {
    /// Create a payoff pair.
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// The component relevant to the given player.
    pub fn for_player(self, player: Player) -> f64 {
        match player {
            Player::A => self.a,
            Player::B => self.b,
        }
    }
}

impl fmt::Display for Payoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

/// Resolution state of a node.
///
/// The transition `Unresolved -> Resolved` is irreversible; terminal nodes
/// start `Resolved` with no chosen action.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Not yet decided by the solver.
    Unresolved,
    /// Decided: the propagated payoff and, for decision nodes, the action
    /// chosen by the owner. `chosen_action` is `None` exactly for terminals.
    Resolved {
        /// Action the owner chose, absent for terminal nodes.
        chosen_action: Option<String>,
        /// The propagated (or fixed, for terminals) payoff pair.
        payoff: Payoff,
    },
}

/// A single decision point or terminal outcome in the game tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: String,
    owner: Option<Player>,
    actions: Vec<String>,
    transitions: FxHashMap<String, String>,
    resolution: Resolution,
}

impl Node {
    /// Construct a decision node.
    ///
    /// The transition key set must exactly equal the declared action list;
    /// mismatches are rejected here, at construction time, never discovered
    /// at solve time.
    pub fn decision(
        id: impl Into<String>,
        owner: Player,
        actions: Vec<String>,
        transitions: FxHashMap<String, String>,
    ) -> Result<Self, BuildError> {
        let id = id.into();
        if actions.is_empty() {
            return Err(BuildError::MissingField { id, field: "actions" });
        }
        for (i, action) in actions.iter().enumerate() {
            if actions[..i].contains(action) {
                return Err(BuildError::DuplicateAction {
                    id: id.clone(),
                    action: action.clone(),
                });
            }
            if !transitions.contains_key(action) {
                return Err(BuildError::DanglingAction {
                    id: id.clone(),
                    action: action.clone(),
                });
            }
        }
        for action in transitions.keys() {
            if !actions.contains(action) {
                return Err(BuildError::UndeclaredAction {
                    id: id.clone(),
                    action: action.clone(),
                });
            }
        }
        Ok(Self {
            id,
            owner: Some(owner),
            actions,
            transitions,
            resolution: Resolution::Unresolved,
        })
    }

    /// Construct a terminal node. Terminals start resolved.
    pub fn terminal(id: impl Into<String>, payoff: Payoff) -> Self {
        Self {
            id: id.into(),
            owner: None,
            actions: Vec::new(),
            transitions: FxHashMap::default(),
            resolution: Resolution::Resolved {
                chosen_action: None,
                payoff,
            },
        }
    }

    /// The node's stable identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The deciding player, `None` for terminals.
    pub fn owner(&self) -> Option<Player> {
        self.owner
    }

    /// Actions available at this node, in declared order.
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    /// Child id reached by taking `action` here.
    pub fn child(&self, action: &str) -> Option<&str> {
        self.transitions.get(action).map(String::as_str)
    }

    /// The action-to-child mapping.
    pub fn transitions(&self) -> &FxHashMap<String, String> {
        &self.transitions
    }

    /// Whether this node is a terminal outcome.
    pub fn is_terminal(&self) -> bool {
        self.owner.is_none()
    }

    /// Whether the solver (or terminal construction) has resolved this node.
    pub fn is_resolved(&self) -> bool {
        matches!(self.resolution, Resolution::Resolved { .. })
    }

    /// The node's resolution state.
    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    /// The resolved payoff pair, if any.
    pub fn payoff(&self) -> Option<Payoff> {
        match &self.resolution {
            Resolution::Resolved { payoff, .. } => Some(*payoff),
            Resolution::Unresolved => None,
        }
    }

    /// The action chosen by the owner, once resolved. Always `None` for
    /// terminals and unresolved nodes.
    pub fn chosen_action(&self) -> Option<&str> {
        match &self.resolution {
            Resolution::Resolved { chosen_action, .. } => chosen_action.as_deref(),
            Resolution::Unresolved => None,
        }
    }

    /// Resolve this node. Only the solver drives this, exactly once per node.
    pub(crate) fn resolve(&mut self, chosen_action: String, payoff: Payoff) {
        debug_assert!(!self.is_resolved(), "node '{}' resolved twice", self.id);
        self.resolution = Resolution::Resolved {
            chosen_action: Some(chosen_action),
            payoff,
        };
    }
}

/// Registry owning every node of one game tree.
///
/// Lookup is O(1); iteration follows insertion order so debugging output is
/// stable run to run. The designated start node is supplied externally to
/// solve and path extraction, never inferred from the registry.
#[derive(Debug, Clone, Default)]
pub struct GameTree {
    nodes: FxHashMap<String, Node>,
    order: Vec<String>,
}

impl GameTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, rejecting duplicate ids.
    pub fn insert(&mut self, node: Node) -> Result<(), TreeError> {
        if self.nodes.contains_key(node.id()) {
            return Err(TreeError::DuplicateId {
                id: node.id().to_string(),
            });
        }
        self.order.push(node.id().to_string());
        self.nodes.insert(node.id().to_string(), node);
        Ok(())
    }

    /// Look up a node, failing if absent.
    pub fn node(&self, id: &str) -> Result<&Node, TreeError> {
        self.nodes.get(id).ok_or_else(|| TreeError::NotFound {
            id: id.to_string(),
        })
    }

    /// Option-flavored lookup.
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Whether a node with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Ids of nodes still unresolved, in insertion order.
    pub fn unresolved_ids(&self) -> Vec<String> {
        self.iter()
            .filter(|node| !node.is_resolved())
            .map(|node| node.id().to_string())
            .collect()
    }

    /// Whether every node is resolved.
    pub fn is_fully_resolved(&self) -> bool {
        self.iter().all(Node::is_resolved)
    }

    /// Reference post-pass: every transition target must exist in the tree.
    ///
    /// Run after all blocks are inserted, not per line, so forward references
    /// between blocks are legal.
    pub fn validate(&self) -> Result<(), BuildError> {
        for node in self.iter() {
            for action in node.actions() {
                if let Some(target) = node.child(action) {
                    if !self.contains(target) {
                        return Err(BuildError::UnknownReference {
                            id: node.id().to_string(),
                            action: action.clone(),
                            target: target.to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Apply a resolution computed by the solver.
    pub(crate) fn resolve(
        &mut self,
        id: &str,
        chosen_action: String,
        payoff: Payoff,
    ) -> Result<(), TreeError> {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.resolve(chosen_action, payoff);
                Ok(())
            }
            None => Err(TreeError::NotFound {
                id: id.to_string(),
            }),
        }
    }
}
