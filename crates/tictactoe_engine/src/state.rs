//! The four pieces of game state, kept together.

use super::action::{Move, MoveError};
use super::{Grid, Line, Occupant, Phase, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Grid, move count, phase and winning line of one game.
///
/// These are created and replaced as a unit; there is no way to reset one
/// without the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) grid: Grid,
    pub(crate) move_count: usize,
    pub(crate) phase: Phase,
    pub(crate) winning_line: Option<Line>,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Start-of-game state: empty grid, no moves, human to play.
    pub fn new() -> Self {
        Self::default()
    }

    /// The grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Moves applied so far.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Line that decided the game, present only in a win phase.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Applied moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Marks `index` for `occupant` and bumps the move count.
    ///
    /// Requires the matching turn phase and an empty in-range cell.
    /// Leaves the phase alone; the engine decides the transition.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub(crate) fn apply_move(
        &mut self,
        index: usize,
        occupant: Occupant,
    ) -> Result<Position, MoveError> {
        let expected = match occupant {
            Occupant::Human => Phase::HumanTurn,
            Occupant::Opponent => Phase::OpponentTurn,
            Occupant::Empty => return Err(MoveError::EmptyOccupant),
        };
        if self.phase != expected {
            return Err(MoveError::WrongPhase {
                occupant,
                phase: self.phase,
            });
        }
        let pos = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        if !self.grid.at(pos).is_empty() {
            return Err(MoveError::CellOccupied(pos));
        }

        self.grid.set(pos, occupant);
        self.move_count += 1;
        self.history.push(Move::new(occupant, pos));
        Ok(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_move_marks_cell_and_counts() {
        let mut state = GameState::new();
        let pos = state.apply_move(4, Occupant::Human).unwrap();
        assert_eq!(pos, Position::Center);
        assert_eq!(state.grid().at(Position::Center), Occupant::Human);
        assert_eq!(state.move_count(), 1);
        assert_eq!(state.phase(), Phase::HumanTurn);
    }

    #[test]
    fn test_rejections_leave_state_untouched() {
        let mut state = GameState::new();
        state.apply_move(0, Occupant::Human).unwrap();
        let before = state.clone();

        assert_eq!(
            state.apply_move(1, Occupant::Opponent),
            Err(MoveError::WrongPhase {
                occupant: Occupant::Opponent,
                phase: Phase::HumanTurn
            })
        );
        assert_eq!(
            state.apply_move(0, Occupant::Human),
            Err(MoveError::CellOccupied(Position::TopLeft))
        );
        assert_eq!(
            state.apply_move(9, Occupant::Human),
            Err(MoveError::OutOfRange(9))
        );
        assert_eq!(
            state.apply_move(2, Occupant::Empty),
            Err(MoveError::EmptyOccupant)
        );
        assert_eq!(state, before);
    }
}
