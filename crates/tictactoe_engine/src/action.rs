//! Moves and move rejection.

use super::{Occupant, Phase, Position};
use serde::{Deserialize, Serialize};

/// A mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Who placed the mark.
    pub occupant: Occupant,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.occupant, self.position.label())
    }
}

/// Why a move was refused. The state is unchanged when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Index is not on the board.
    #[display("Index {_0} is outside the board (0-8)")]
    OutOfRange(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("{_0} is already occupied")]
    CellOccupied(#[error(not(source))] Position),

    /// Not this occupant's turn.
    #[display("{occupant:?} cannot move during {phase:?}")]
    WrongPhase {
        /// Occupant that tried to move.
        occupant: Occupant,
        /// Phase at the time.
        phase: Phase,
    },

    /// `Empty` is not a player.
    #[display("Empty cannot place a mark")]
    EmptyOccupant,
}
