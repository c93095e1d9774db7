//! Concrete opponent strategies.

mod first_available;
mod minimax;
mod random;

pub use first_available::FirstAvailable;
pub use minimax::Minimax;
pub use random::RandomStrategy;

use serde::{Deserialize, Serialize};
use tictactoe_engine::OpponentStrategy;
use tracing::instrument;

/// Selectable opponent, by name.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StrategyKind {
    /// [`FirstAvailable`]
    FirstAvailable,
    /// [`RandomStrategy`]
    Random,
    /// [`Minimax`]
    #[default]
    Minimax,
}

impl StrategyKind {
    /// One-line description for listings.
    pub fn description(self) -> &'static str {
        match self {
            Self::FirstAvailable => "Takes the lowest-numbered empty cell",
            Self::Random => "Plays a random empty cell",
            Self::Minimax => "Plays perfectly; never loses",
        }
    }

    /// Builds the strategy. `seed` only affects [`StrategyKind::Random`].
    #[instrument]
    pub fn build(self, seed: Option<u64>) -> Box<dyn OpponentStrategy + Send> {
        match self {
            Self::FirstAvailable => Box::new(FirstAvailable),
            Self::Random => Box::new(
                seed.map_or_else(RandomStrategy::new, RandomStrategy::with_seed),
            ),
            Self::Minimax => Box::new(Minimax),
        }
    }
}
