//! History consistency invariant: history matches the grid.

use super::super::GameState;
use super::Invariant;

/// Invariant: history length equals the number of occupied cells, and every
/// recorded move still shows its occupant on the grid.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().len() == state.grid().occupied_count()
            && state
                .history()
                .iter()
                .all(|m| state.grid().at(m.position) == m.occupant)
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Occupant, Phase, Position};

    #[test]
    fn test_full_alternating_history_holds() {
        let mut state = GameState::new();
        for (i, index) in [0, 1, 2, 4, 3, 5, 7, 6, 8].into_iter().enumerate() {
            let occupant = if i % 2 == 0 {
                state.phase = Phase::HumanTurn;
                Occupant::Human
            } else {
                state.phase = Phase::OpponentTurn;
                Occupant::Opponent
            };
            state.apply_move(index, occupant).unwrap();
            assert!(HistoryConsistentInvariant::holds(&state));
        }
        assert_eq!(state.history().len(), 9);
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut state = GameState::new();
        state.apply_move(4, Occupant::Human).unwrap();
        state.grid.set(Position::Center, Occupant::Opponent);
        assert!(!HistoryConsistentInvariant::holds(&state));
    }
}
