//! Opponent that plays a uniformly random empty cell.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tictactoe_engine::{CELL_COUNT, Grid, OpponentStrategy};
use tracing::debug;

/// Uniform choice among empty cells.
///
/// Seeded instances replay the same choices for the same games.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Seeded from the OS.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl OpponentStrategy for RandomStrategy {
    fn select_move(&mut self, grid: &Grid, move_count: usize) -> usize {
        let empty: Vec<usize> = grid.empty_indices().collect();
        let choice = empty.choose(&mut self.rng).copied().unwrap_or(CELL_COUNT);
        debug!(move_count, choice, candidates = empty.len(), "Random cell");
        choice
    }

    fn name(&self) -> &str {
        "random"
    }
}
