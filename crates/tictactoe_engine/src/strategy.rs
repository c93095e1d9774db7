//! The opponent seam.

use super::Grid;

/// Picks the automated player's move.
///
/// The engine only calls this during [`Phase::OpponentTurn`](crate::Phase::OpponentTurn),
/// with at least one empty cell and `move_count < 9`. The returned index must
/// name an empty cell of `grid`; anything else puts the engine in
/// [`Phase::Error`](crate::Phase::Error).
pub trait OpponentStrategy {
    /// Returns the board index (0-8) to mark.
    fn select_move(&mut self, grid: &Grid, move_count: usize) -> usize;

    /// Display name for logs and status lines.
    fn name(&self) -> &str {
        "opponent"
    }
}

impl<T: OpponentStrategy + ?Sized> OpponentStrategy for Box<T> {
    fn select_move(&mut self, grid: &Grid, move_count: usize) -> usize {
        (**self).select_move(grid, move_count)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: OpponentStrategy + ?Sized> OpponentStrategy for &mut T {
    fn select_move(&mut self, grid: &Grid, move_count: usize) -> usize {
        (**self).select_move(grid, move_count)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
