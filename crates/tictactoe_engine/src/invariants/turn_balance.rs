//! Turn balance invariant: the human moves first and players alternate.

use super::super::{GameState, Occupant};
use super::Invariant;

/// Invariant: human marks minus opponent marks is 0 or 1.
pub struct TurnBalanceInvariant;

impl Invariant<GameState> for TurnBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let human = state.grid().count(Occupant::Human);
        let opponent = state.grid().count(Occupant::Opponent);
        human == opponent || human == opponent + 1
    }

    fn description() -> &'static str {
        "Human and opponent marks alternate, human first"
    }
}
