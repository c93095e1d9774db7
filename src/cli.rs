//! Command-line interface for tictactoe_vs_ai.

use crate::opponents::StrategyKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "tictactoe.toml";

/// Tic-tac-toe against an AI opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe_vs_ai")]
#[command(about = "Play tic-tac-toe against a pluggable AI opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by every game-playing command.
#[derive(Args, Debug, Clone)]
pub struct GameArgs {
    /// Path to a TOML config file
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Opponent strategy (first-available, random, minimax)
    #[arg(short, long)]
    pub strategy: Option<StrategyKind>,

    /// Seed for the random opponent
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for GameArgs {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG),
            strategy: None,
            seed: None,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui {
        /// Game options
        #[command(flatten)]
        game: GameArgs,
    },

    /// Play a scripted list of human moves and print the result
    Play {
        /// Cells to select, 0-8, comma separated (e.g. 4,0,8)
        #[arg(long, value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,

        /// Game options
        #[command(flatten)]
        game: GameArgs,
    },

    /// List the available opponent strategies
    Strategies,
}
