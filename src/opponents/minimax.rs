//! Perfect-play opponent.

use tictactoe_engine::{CELL_COUNT, Grid, Occupant, OpponentStrategy, Position, rules};
use tracing::{debug, instrument};

/// Full-depth negamax for the opponent.
///
/// Wins sooner and loses later when it has the choice. Equal scores go to
/// the lowest index, so play is deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax;

/// Score of a finished game, before the depth adjustment.
const WIN: i32 = 10;

impl Minimax {
    /// Value of `grid` for `to_move`, searching to the end of the game.
    fn negamax(grid: Grid, to_move: Occupant, depth: i32) -> i32 {
        // Only the player who just moved can have completed a line.
        if rules::check_winner(&grid).is_some() {
            return depth - WIN;
        }
        if rules::is_full(&grid) {
            return 0;
        }

        Position::valid_moves(&grid)
            .into_iter()
            .map(|pos| -Self::negamax(grid.with(pos, to_move), to_move.opponent(), depth + 1))
            .max()
            .unwrap_or(0)
    }

    /// Best cell for the opponent with its score.
    fn best(grid: &Grid) -> Option<(Position, i32)> {
        let mut best: Option<(Position, i32)> = None;
        for pos in Position::valid_moves(grid) {
            let child = grid.with(pos, Occupant::Opponent);
            let score = -Self::negamax(child, Occupant::Human, 1);
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((pos, score));
            }
        }
        best
    }
}

impl OpponentStrategy for Minimax {
    #[instrument(skip(self, grid))]
    fn select_move(&mut self, grid: &Grid, move_count: usize) -> usize {
        match Self::best(grid) {
            Some((pos, score)) => {
                debug!(position = %pos, score, "Minimax choice");
                pos.to_index()
            }
            None => CELL_COUNT,
        }
    }

    fn name(&self) -> &str {
        "minimax"
    }
}
