//! Tic-tac-toe game-state engine: one human against a pluggable opponent.
//!
//! # Architecture
//!
//! - **Grid**: [`Grid`] of 9 [`Occupant`]s, addressed by [`Position`]
//! - **Rules**: pure win/draw detection ([`rules::evaluate`])
//! - **Engine**: the turn state machine ([`Engine`]) moving through [`Phase`]s
//! - **Strategy**: the opponent seam ([`OpponentStrategy`])
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Engine, Grid, OpponentStrategy, Phase};
//!
//! struct FirstEmpty;
//!
//! impl OpponentStrategy for FirstEmpty {
//!     fn select_move(&mut self, grid: &Grid, _move_count: usize) -> usize {
//!         grid.empty_indices().next().unwrap_or_default()
//!     }
//! }
//!
//! let mut engine = Engine::new(FirstEmpty);
//! assert_eq!(engine.handle_human_select(4), Phase::HumanTurn);
//! assert_eq!(engine.move_count(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod state;
mod strategy;
mod types;

pub use action::{Move, MoveError};
pub use engine::{Engine, Snapshot};
pub use phases::{Line, Outcome, Phase, Verdict};
pub use position::Position;
pub use rules::{RuleError, evaluate};
pub use state::GameState;
pub use strategy::OpponentStrategy;
pub use types::{CELL_COUNT, Grid, Occupant};
