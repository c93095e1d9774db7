//! tictactoe_vs_ai - command-line entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strum::IntoEnumIterator;
use tictactoe_vs_ai::cli::{Cli, Command, GameArgs};
use tictactoe_vs_ai::headless::{render_report, run_script};
use tictactoe_vs_ai::{Engine, GameConfig, StrategyKind, tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Tui {
        game: GameArgs::default(),
    }) {
        Command::Tui { game } => tui::run_tui(load_config(&game)?).await,
        Command::Play { moves, json, game } => run_play(&game, &moves, json),
        Command::Strategies => {
            list_strategies();
            Ok(())
        }
    }
}

/// Reads the config file named by `game` and applies flag overrides.
fn load_config(game: &GameArgs) -> Result<GameConfig> {
    let config = GameConfig::load(Some(game.config.as_path()))?;
    Ok(config.with_overrides(game.strategy, game.seed))
}

/// Plays scripted moves and prints the final board.
#[instrument(skip(game))]
fn run_play(game: &GameArgs, moves: &[usize], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(game)?;
    info!(strategy = %config.strategy(), "Running scripted game");

    let mut engine = Engine::new(config.strategy().build(*config.seed()));
    run_script(&mut engine, moves);

    if json {
        println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
    } else {
        println!("{}", render_report(&engine));
    }
    Ok(())
}

fn list_strategies() {
    for kind in StrategyKind::iter() {
        let marker = if kind == StrategyKind::default() {
            " (default)"
        } else {
            ""
        };
        println!("{:<16} {}{}", kind.to_string(), kind.description(), marker);
    }
}
