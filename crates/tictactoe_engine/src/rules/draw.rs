//! Draw detection.

use super::super::{CELL_COUNT, Grid};
use super::win::check_winner;

/// Checks if every cell is marked.
pub fn is_full(grid: &Grid) -> bool {
    grid.occupied_count() == CELL_COUNT
}

/// A full grid without a winning line.
pub fn is_draw(grid: &Grid) -> bool {
    is_full(grid) && check_winner(grid).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Occupant, Position};

    #[test]
    fn test_partial_grid_not_full() {
        let grid = Grid::new().with(Position::Center, Occupant::Human);
        assert!(!is_full(&grid));
        assert!(!is_draw(&grid));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let grid = Grid::from_cells([
            Occupant::Human,
            Occupant::Opponent,
            Occupant::Human,
            Occupant::Human,
            Occupant::Opponent,
            Occupant::Opponent,
            Occupant::Opponent,
            Occupant::Human,
            Occupant::Human,
        ]);
        assert!(is_draw(&grid));
    }

    #[test]
    fn test_full_grid_with_line_is_not_draw() {
        let grid = Grid::from_cells([Occupant::Human; CELL_COUNT]);
        assert!(is_full(&grid));
        assert!(!is_draw(&grid));
    }
}
