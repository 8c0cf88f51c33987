//! Text-to-tree construction.
//!
//! Parses the line-oriented, block-structured tree description into a
//! validated [`GameTree`]. Two block kinds exist:
//!
//! ```text
//! Node: N0           decision block: id, owner, declared actions,
//! Player: A          then one `action -> child` line per action
//! Actions: [L, R]    (until a blank line or the next block)
//! L -> N1
//! R -> T3
//!
//! Terminal: T3       terminal block: id, then a payoff line whose two
//! Payoff: A 2, B 2   numbers are recovered by digit-scanning
//! ```
//!
//! Construction either returns a tree satisfying every registry invariant or
//! a [`BuildError`] naming the offending block; no partial tree escapes.
//! A terminal payoff line yielding fewer than two numbers is the one
//! recoverable case: the payoff defaults to `(0, 0)` and a
//! [`BuildWarning::DefaultedPayoff`] is recorded.

use std::path::Path;

use rustc_hash::FxHashMap;

use crate::induction::error::{BuildError, BuildWarning};
use crate::induction::tree::{GameTree, Node, Payoff, Player};

/// Keyword opening a decision-node block.
const NODE_KEYWORD: &str = "Node:";

/// Keyword opening a terminal-node block.
const TERMINAL_KEYWORD: &str = "Terminal:";

/// Builds a validated [`GameTree`] from its serialized description.
///
/// The builder never solves or renders; it only constructs. Warnings from the
/// most recent parse are retrievable via [`TreeBuilder::warnings`] and are
/// also emitted through the `log` facade.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    warnings: Vec<BuildWarning>,
}

impl TreeBuilder {
    /// Create a builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a serialized tree description.
    ///
    /// Blocks may reference each other in any order; the reference check is a
    /// post-pass over the whole tree, so forward references are legal.
    pub fn parse(&mut self, input: &str) -> Result<GameTree, BuildError> {
        self.warnings.clear();
        let lines: Vec<&str> = input.lines().map(str::trim).collect();
        let mut tree = GameTree::new();

        let mut i = 0;
        while i < lines.len() {
            let line = lines[i];
            if let Some(id) = line.strip_prefix(NODE_KEYWORD) {
                i = self.parse_decision(&lines, i, id.trim(), &mut tree)?;
            } else if let Some(id) = line.strip_prefix(TERMINAL_KEYWORD) {
                i = self.parse_terminal(&lines, i, id.trim(), &mut tree)?;
            } else {
                i += 1;
            }
        }

        tree.validate()?;
        Ok(tree)
    }

    /// Parse a description from a file on disk.
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> Result<GameTree, BuildError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|source| BuildError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.parse(&input)
    }

    /// Warnings recorded by the most recent parse.
    pub fn warnings(&self) -> &[BuildWarning] {
        &self.warnings
    }

    /// Parse one decision block starting at `start`; returns the index of the
    /// first line after the block.
    fn parse_decision(
        &mut self,
        lines: &[&str],
        start: usize,
        id: &str,
        tree: &mut GameTree,
    ) -> Result<usize, BuildError> {
        if id.is_empty() {
            return Err(BuildError::MissingField {
                id: "(unnamed)".to_string(),
                field: "id",
            });
        }

        let owner_line = lines.get(start + 1).copied().unwrap_or("");
        let owner = Player::from_marker(owner_line).ok_or_else(|| BuildError::MissingField {
            id: id.to_string(),
            field: "player",
        })?;

        let actions_line = lines.get(start + 2).copied().unwrap_or("");
        let actions = parse_actions(actions_line).ok_or_else(|| BuildError::MissingField {
            id: id.to_string(),
            field: "actions",
        })?;

        let mut transitions = FxHashMap::default();
        let mut next = start + 3;
        while next < lines.len() {
            let line = lines[next];
            if line.is_empty()
                || line.starts_with(NODE_KEYWORD)
                || line.starts_with(TERMINAL_KEYWORD)
            {
                break;
            }
            // Lines without an arrow inside the transition run are ignored
            if let Some((action, target)) = line.split_once("->") {
                transitions.insert(action.trim().to_string(), target.trim().to_string());
            }
            next += 1;
        }

        let node = Node::decision(id, owner, actions, transitions)?;
        tree.insert(node).map_err(|_| BuildError::DuplicateId {
            id: id.to_string(),
        })?;
        Ok(next)
    }

    /// Parse one terminal block starting at `start`; returns the index of the
    /// first line after the block.
    fn parse_terminal(
        &mut self,
        lines: &[&str],
        start: usize,
        id: &str,
        tree: &mut GameTree,
    ) -> Result<usize, BuildError> {
        if id.is_empty() {
            return Err(BuildError::MissingField {
                id: "(unnamed)".to_string(),
                field: "id",
            });
        }

        // The payoff line is the next line, unless the block is truncated by
        // end of input or the next block header.
        let raw = lines.get(start + 1).copied().unwrap_or("");
        let (payoff_line, consumed) =
            if raw.starts_with(NODE_KEYWORD) || raw.starts_with(TERMINAL_KEYWORD) {
                ("", 1)
            } else {
                (raw, 2)
            };

        let numbers = scan_numbers(id, payoff_line)?;
        let payoff = if numbers.len() >= 2 {
            Payoff::new(numbers[0], numbers[1])
        } else {
            let warning = BuildWarning::DefaultedPayoff {
                id: id.to_string(),
                found: numbers.len(),
            };
            log::warn!("{warning}");
            self.warnings.push(warning);
            Payoff::new(0.0, 0.0)
        };

        tree.insert(Node::terminal(id, payoff))
            .map_err(|_| BuildError::DuplicateId {
                id: id.to_string(),
            })?;
        Ok(start + consumed)
    }
}

/// Parse an `<label>: [a, b, c]` action list line.
fn parse_actions(line: &str) -> Option<Vec<String>> {
    let (_, rest) = line.split_once(':')?;
    let rest = rest.trim().strip_prefix('[')?.strip_suffix(']')?;
    let actions: Vec<String> = rest
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect();
    if actions.is_empty() {
        None
    } else {
        Some(actions)
    }
}

/// Recover the numbers embedded in a payoff line by scanning digit runs,
/// ignoring arbitrary surrounding text.
fn scan_numbers(id: &str, line: &str) -> Result<Vec<f64>, BuildError> {
    let mut numbers = Vec::new();
    let mut run = String::new();
    for ch in line.chars().chain(std::iter::once(' ')) {
        if ch.is_ascii_digit() {
            run.push(ch);
        } else if !run.is_empty() {
            let value: u64 = run.parse().map_err(|_| BuildError::MalformedPayoff {
                id: id.to_string(),
                token: run.clone(),
            })?;
            numbers.push(value as f64);
            run.clear();
        }
    }
    Ok(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::induction::tree::Player;

    const DESCRIPTION: &str = "\
Node: N0
Player: A
Actions: [L, R]
L -> N1
R -> T3

Node: N1
Player: B
Actions: [l, r]
l -> T1
r -> T2

Terminal: T1
Payoff: A gets 3, B gets 1

Terminal: T2
Payoff: A gets 1, B gets 4

Terminal: T3
Payoff: A gets 2, B gets 2
";

    #[test]
    fn test_parse_full_description() {
        let mut builder = TreeBuilder::new();
        let tree = builder.parse(DESCRIPTION).unwrap();

        assert_eq!(tree.len(), 5);
        assert!(builder.warnings().is_empty());

        let root = tree.node("N0").unwrap();
        assert_eq!(root.owner(), Some(Player::A));
        assert_eq!(root.actions(), ["L".to_string(), "R".to_string()]);
        assert_eq!(root.child("L"), Some("N1"));
        assert_eq!(root.child("R"), Some("T3"));
        assert!(!root.is_resolved());

        let inner = tree.node("N1").unwrap();
        assert_eq!(inner.owner(), Some(Player::B));
        assert_eq!(inner.child("r"), Some("T2"));

        let leaf = tree.node("T2").unwrap();
        assert!(leaf.is_terminal());
        assert_eq!(leaf.payoff(), Some(Payoff::new(1.0, 4.0)));
    }

    #[test]
    fn test_payoff_digit_scanning_ignores_surrounding_text() {
        let input = "\
Terminal: T1
The incumbent earns 10 while the entrant collects 7
";
        let mut builder = TreeBuilder::new();
        let tree = builder.parse(input).unwrap();
        assert_eq!(
            tree.node("T1").unwrap().payoff(),
            Some(Payoff::new(10.0, 7.0))
        );
        assert!(builder.warnings().is_empty());
    }

    #[test]
    fn test_single_number_payoff_defaults_with_warning() {
        let input = "\
Terminal: T1
Payoff: only 7 here
";
        let mut builder = TreeBuilder::new();
        let tree = builder.parse(input).unwrap();
        assert_eq!(tree.node("T1").unwrap().payoff(), Some(Payoff::new(0.0, 0.0)));
        assert_eq!(
            builder.warnings(),
            [BuildWarning::DefaultedPayoff {
                id: "T1".to_string(),
                found: 1,
            }]
        );
    }

    #[test]
    fn test_terminal_truncated_by_next_block_defaults_with_warning() {
        let input = "\
Terminal: T1
Terminal: T2
Payoff: A gets 1, B gets 2
";
        let mut builder = TreeBuilder::new();
        let tree = builder.parse(input).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.node("T1").unwrap().payoff(), Some(Payoff::new(0.0, 0.0)));
        assert_eq!(tree.node("T2").unwrap().payoff(), Some(Payoff::new(1.0, 2.0)));
        assert_eq!(builder.warnings().len(), 1);
    }

    #[test]
    fn test_dangling_action_fails_fast() {
        let input = "\
Node: N0
Player: A
Actions: [L, R]
L -> T1

Terminal: T1
Payoff: 1 and 2
";
        let mut builder = TreeBuilder::new();
        let err = builder.parse(input);
        assert!(matches!(
            err,
            Err(BuildError::DanglingAction { id, action }) if id == "N0" && action == "R"
        ));
    }

    #[test]
    fn test_undeclared_action_rejected() {
        let input = "\
Node: N0
Player: A
Actions: [L]
L -> T1
R -> T1

Terminal: T1
Payoff: 1 and 2
";
        let mut builder = TreeBuilder::new();
        let err = builder.parse(input);
        assert!(matches!(
            err,
            Err(BuildError::UndeclaredAction { action, .. }) if action == "R"
        ));
    }

    #[test]
    fn test_unknown_reference_caught_in_post_pass() {
        let input = "\
Node: N0
Player: A
Actions: [L]
L -> T9
";
        let mut builder = TreeBuilder::new();
        let err = builder.parse(input);
        assert!(matches!(
            err,
            Err(BuildError::UnknownReference { target, .. }) if target == "T9"
        ));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let input = "\
Terminal: T1
Payoff: 1 and 2

Terminal: T1
Payoff: 3 and 4
";
        let mut builder = TreeBuilder::new();
        let err = builder.parse(input);
        assert!(matches!(
            err,
            Err(BuildError::DuplicateId { id }) if id == "T1"
        ));
    }

    #[test]
    fn test_missing_player_rejected() {
        let input = "\
Node: N0
Decider: ?
Actions: [L]
L -> T1

Terminal: T1
Payoff: 1 and 2
";
        let mut builder = TreeBuilder::new();
        let err = builder.parse(input);
        assert!(matches!(
            err,
            Err(BuildError::MissingField { field: "player", .. })
        ));
    }

    #[test]
    fn test_missing_actions_rejected() {
        let input = "\
Node: N0
Player: B
";
        let mut builder = TreeBuilder::new();
        let err = builder.parse(input);
        assert!(matches!(
            err,
            Err(BuildError::MissingField { field: "actions", .. })
        ));
    }

    #[test]
    fn test_payoff_overflow_is_malformed() {
        let input = "\
Terminal: T1
Payoff: 99999999999999999999999999 and 2
";
        let mut builder = TreeBuilder::new();
        let err = builder.parse(input);
        assert!(matches!(err, Err(BuildError::MalformedPayoff { .. })));
    }

    #[test]
    fn test_multiword_action_labels() {
        let input = "\
Node: N0
Player: A
Actions: [Stay Out, Enter]
Stay Out -> T1
Enter -> T2

Terminal: T1
Payoff: 1 and 4

Terminal: T2
Payoff: 2 and 2
";
        let mut builder = TreeBuilder::new();
        let tree = builder.parse(input).unwrap();
        assert_eq!(tree.node("N0").unwrap().child("Stay Out"), Some("T1"));
    }

    #[test]
    fn test_parse_file_missing_path_is_io_error() {
        let mut builder = TreeBuilder::new();
        let err = builder.parse_file("/definitely/not/here.txt");
        assert!(matches!(err, Err(BuildError::Io { .. })));
    }
}
