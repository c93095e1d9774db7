//! Game rules for tic-tac-toe.
//!
//! Pure functions over a grid. Nothing here mutates state, so the
//! engine can evaluate after every move without side effects.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};

use super::{CELL_COUNT, Grid, Outcome, Verdict};
use tracing::{instrument, trace};

/// Inconsistent input to [`evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RuleError {
    /// More moves than cells.
    #[display("Move count {_0} exceeds board capacity")]
    MoveCountOutOfRange(#[error(not(source))] usize),
    /// Move count disagrees with the number of marked cells.
    #[display("Move count {move_count} does not match {occupied} occupied cells")]
    MoveCountMismatch {
        /// Count supplied by the caller.
        move_count: usize,
        /// Marked cells actually on the grid.
        occupied: usize,
    },
}

/// Decides whether the game on `grid` is over.
///
/// Lines are checked in [`LINES`] order and the first complete one wins,
/// even before the board is full. Without a line, a count of 9 is a draw.
/// `Ok(None)` means play continues.
#[instrument(skip(grid))]
pub fn evaluate(grid: &Grid, move_count: usize) -> Result<Option<Outcome>, RuleError> {
    if move_count > CELL_COUNT {
        return Err(RuleError::MoveCountOutOfRange(move_count));
    }
    let occupied = grid.occupied_count();
    if occupied != move_count {
        return Err(RuleError::MoveCountMismatch {
            move_count,
            occupied,
        });
    }

    let decided = winning_line(grid)
        .and_then(|(occupant, line)| Verdict::for_winner(occupant).map(|v| (v, line)));
    if let Some((verdict, line)) = decided {
        trace!(?verdict, ?line, "Line completed");
        return Ok(Some(Outcome::new(verdict, Some(line))));
    }

    if move_count == CELL_COUNT {
        return Ok(Some(Outcome::new(Verdict::Draw, None)));
    }

    Ok(None)
}
