//! Win detection.

use super::super::{Grid, Line, Occupant, Position};

/// The 8 winning lines in priority order: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// First line held entirely by one player, with that player.
pub fn winning_line(grid: &Grid) -> Option<(Occupant, Line)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        let occ = grid.at(a);
        if !occ.is_empty() && occ == grid.at(b) && occ == grid.at(c) {
            Some((occ, line))
        } else {
            None
        }
    })
}

/// The player holding a complete line, if any.
pub fn check_winner(grid: &Grid) -> Option<Occupant> {
    winning_line(grid).map(|(occ, _)| occ)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_grid() {
        assert_eq!(check_winner(&Grid::new()), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let grid = line
                .iter()
                .fold(Grid::new(), |g, p| g.with(*p, Occupant::Opponent));
            assert_eq!(winning_line(&grid), Some((Occupant::Opponent, line)));
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let grid = Grid::new()
            .with(Position::TopLeft, Occupant::Human)
            .with(Position::TopCenter, Occupant::Opponent)
            .with(Position::TopRight, Occupant::Human);
        assert_eq!(check_winner(&grid), None);
    }

    #[test]
    fn test_rows_take_priority_over_columns() {
        // Top row and left column both full of X; the row comes first.
        let grid = Grid::new()
            .with(Position::TopLeft, Occupant::Human)
            .with(Position::TopCenter, Occupant::Human)
            .with(Position::TopRight, Occupant::Human)
            .with(Position::MiddleLeft, Occupant::Human)
            .with(Position::BottomLeft, Occupant::Human);
        assert_eq!(winning_line(&grid).map(|(_, l)| l), Some(LINES[0]));
    }
}
