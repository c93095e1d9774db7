//! Opponent that takes the first empty cell.

use tictactoe_engine::{CELL_COUNT, Grid, OpponentStrategy};
use tracing::debug;

/// Picks the lowest-index empty cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAvailable;

impl OpponentStrategy for FirstAvailable {
    fn select_move(&mut self, grid: &Grid, move_count: usize) -> usize {
        // A full grid yields an off-board index, which the engine rejects.
        let choice = grid.empty_indices().next().unwrap_or(CELL_COUNT);
        debug!(move_count, choice, "First available cell");
        choice
    }

    fn name(&self) -> &str {
        "first-available"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{Occupant, Position};

    #[test]
    fn test_skips_occupied_cells() {
        let grid = Grid::new()
            .with(Position::TopLeft, Occupant::Human)
            .with(Position::TopCenter, Occupant::Opponent);
        assert_eq!(FirstAvailable.select_move(&grid, 2), 2);
    }
}
