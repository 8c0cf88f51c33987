//! One-shot ultimatum bargaining game.
//!
//! Player A proposes how to split a pie of 10: an even split or a split
//! keeping most of it. Player B accepts or rejects each proposal; rejection
//! destroys the pie.
//!
//! ## Game Tree
//!
//! ```text
//! U0 (A)
//! ├── Even
//! │   └── U1 (B)
//! │       ├── Accept ─> (5, 5)
//! │       └── Reject ─> (0, 5)   B's outside option equals the even share
//! └── Greedy
//!     └── U2 (B)
//!         ├── Accept ─> (8, 2)
//!         └── Reject ─> (0, 0)
//! ```
//!
//! ## Subgame-Perfect Outcome
//!
//! At U1 both responses pay B exactly 5 — an exact tie, resolved toward the
//! first declared action, Accept. At U2, B accepts (2 over 0). A then
//! compares 5 against 8 and proposes the greedy split. Realized play:
//! Greedy, Accept, payoff (8, 2). The tie at U1 makes this game a fixture
//! for the deterministic tie-break.

/// Start node id.
pub const START: &str = "U0";

/// Serialized description of the game.
pub const DESCRIPTION: &str = "\
Node: U0
Player: A
Actions: [Even, Greedy]
Even -> U1
Greedy -> U2

Node: U1
Player: B
Actions: [Accept, Reject]
Accept -> EVEN
Reject -> SPITE

Node: U2
Player: B
Actions: [Accept, Reject]
Accept -> SKEW
Reject -> BURN

Terminal: EVEN
Payoff: A takes 5, B takes 5

Terminal: SPITE
Payoff: A gets 0, B gets 5

Terminal: SKEW
Payoff: A takes 8, B takes 2

Terminal: BURN
Payoff: A gets 0, B gets 0
";
