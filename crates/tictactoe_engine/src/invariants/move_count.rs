//! Move count invariant: the counter matches the marked cells.

use super::super::{CELL_COUNT, GameState};
use super::Invariant;

/// Invariant: move count equals the number of marked cells and never
/// exceeds the board size.
pub struct MoveCountInvariant;

impl Invariant<GameState> for MoveCountInvariant {
    fn holds(state: &GameState) -> bool {
        state.move_count() <= CELL_COUNT && state.move_count() == state.grid().occupied_count()
    }

    fn description() -> &'static str {
        "Move count matches number of occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Occupant, Position};

    #[test]
    fn test_holds_after_moves() {
        let mut state = GameState::new();
        state.apply_move(0, Occupant::Human).unwrap();
        assert!(MoveCountInvariant::holds(&state));
    }

    #[test]
    fn test_mark_without_count_violates() {
        let mut state = GameState::new();
        state.grid.set(Position::TopLeft, Occupant::Human);
        assert!(!MoveCountInvariant::holds(&state));
    }
}
