//! Tic-tac-toe against an AI opponent.
//!
//! # Architecture
//!
//! - **Engine**: the game-state engine lives in the `tictactoe_engine` crate
//!   and is re-exported here
//! - **Opponents**: concrete [`OpponentStrategy`] implementations
//! - **Config**: TOML settings and command-line parsing
//! - **TUI**: a `ratatui` host that renders the engine and feeds it input
//! - **Headless**: scripted play for automation
//!
//! # Example
//!
//! ```
//! use tictactoe_vs_ai::{Engine, Phase, opponents::Minimax};
//!
//! let mut engine = Engine::new(Minimax);
//! engine.handle_human_select(4);
//! assert_eq!(engine.phase(), Phase::HumanTurn);
//! assert_eq!(engine.move_count(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod headless;
pub mod opponents;
pub mod tui;

pub use config::{ConfigError, GameConfig};
pub use opponents::StrategyKind;

pub use tictactoe_engine::{
    CELL_COUNT, Engine, GameState, Grid, Line, Move, MoveError, Occupant, OpponentStrategy,
    Outcome, Phase, Position, RuleError, Snapshot, Verdict, evaluate,
};
