//! Market entry deterrence game.
//!
//! The textbook two-stage sequential game: a potential entrant (player A)
//! decides whether to enter a market; if it enters, the incumbent (player B)
//! decides whether to fight a price war or accommodate.
//!
//! ## Game Tree
//!
//! ```text
//! E0 (A)
//! ├── Stay Out ─────────────> (1, 4)   incumbent keeps its monopoly
//! └── Enter
//!     └── E1 (B)
//!         ├── Fight ───────> (0, 0)   price war hurts both
//!         └── Accommodate ─> (2, 2)   duopoly profits
//! ```
//!
//! ## Subgame-Perfect Outcome
//!
//! Fighting is an empty threat: once entry happens, B prefers 2 over 0 and
//! accommodates. Anticipating that, A compares 2 (enter) against 1 (stay
//! out) and enters. Realized play: Enter, Accommodate, payoff (2, 2).

/// Start node id.
pub const START: &str = "E0";

/// Serialized description of the game.
pub const DESCRIPTION: &str = "\
Node: E0
Player: A
Actions: [Stay Out, Enter]
Stay Out -> OUT
Enter -> E1

Node: E1
Player: B
Actions: [Fight, Accommodate]
Fight -> WAR
Accommodate -> SHARE

Terminal: OUT
Payoff: entrant 1, incumbent 4

Terminal: WAR
Payoff: entrant 0, incumbent 0

Terminal: SHARE
Payoff: entrant 2, incumbent 2
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::induction::{extract_path, InductionSolver, Payoff, SolverConfig, TreeBuilder};

    #[test]
    fn test_entry_deterrence_equilibrium() {
        let mut builder = TreeBuilder::new();
        let mut tree = builder.parse(DESCRIPTION).unwrap();
        assert!(builder.warnings().is_empty());

        let solution = InductionSolver::new(SolverConfig::default())
            .solve(&mut tree)
            .unwrap();

        // The incumbent's threat to fight is not credible
        assert_eq!(tree.node("E1").unwrap().chosen_action(), Some("Accommodate"));
        // So the entrant enters
        assert_eq!(tree.node("E0").unwrap().chosen_action(), Some("Enter"));

        assert!(solution
            .optimal_edges
            .contains(&("E1".to_string(), "SHARE".to_string())));

        let path = extract_path(&tree, START).unwrap();
        assert_eq!(path.terminal_id, "SHARE");
        assert_eq!(path.payoff, Payoff::new(2.0, 2.0));
        assert_eq!(
            path.to_string(),
            "E0 --Enter--> E1 --Accommodate--> SHARE: A = 2, B = 2"
        );
    }
}
