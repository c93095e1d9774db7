//! Terminal UI host.

mod app;
mod input;
mod ui;

pub use app::{App, Control};
pub use input::{Action, action_for, move_cursor};

use crate::config::GameConfig;
use anyhow::{Context, Result, bail};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tictactoe_engine::OpponentStrategy;
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant, sleep_until};
use tracing::{error, info, instrument, warn};

/// Runs the interactive game until the player quits.
pub async fn run_tui(config: GameConfig) -> Result<()> {
    // Log to a file so output does not corrupt the screen.
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(strategy = %config.strategy(), "Starting terminal game");

    enable_raw_mode()?;
    let mut terminal = match enter_terminal() {
        Ok(terminal) => terminal,
        Err(err) => {
            error!(error = ?err, "Terminal setup failed");
            let _ = disable_raw_mode();
            let _ = leave_screen(&mut io::stdout());
            return Err(err);
        }
    };

    let app = App::new(config.strategy().build(*config.seed()));
    let delay = Duration::from_millis(*config.opponent_delay_ms());
    let res = run_loop(&mut terminal, app, delay).await;

    disable_raw_mode()?;
    leave_screen(terminal.backend_mut())?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal game closed");
    res
}

/// Switches to the alternate screen and builds the terminal.
fn enter_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Leaves the alternate screen and stops mouse capture on `out`.
fn leave_screen<W: io::Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture)
}

/// What woke the event loop.
enum Wake {
    OpponentDue,
    Key(Option<KeyCode>),
}

/// Draw, then wait for a key or for the pending opponent move; repeat.
///
/// Keys keep flowing to the app while the opponent's reply is pending, so
/// quit and reset stay live and selections hit the engine's turn check
/// instead of queueing up behind the delay.
#[instrument(skip_all)]
async fn run_loop<S: OpponentStrategy>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App<S>,
    delay: Duration,
) -> Result<()> {
    let mut keys = spawn_key_reader();
    let mut opponent_due: Option<Instant> = None;

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        let wake = if app.opponent_pending() {
            let due = *opponent_due.get_or_insert_with(|| Instant::now() + delay);
            tokio::select! {
                _ = sleep_until(due) => Wake::OpponentDue,
                key = keys.recv() => Wake::Key(key),
            }
        } else {
            opponent_due = None;
            Wake::Key(keys.recv().await)
        };

        match wake {
            Wake::OpponentDue => {
                opponent_due = None;
                app.opponent_step();
            }
            Wake::Key(None) => bail!("Terminal input closed"),
            Wake::Key(Some(first)) => {
                let queued = std::iter::from_fn(|| keys.try_recv().ok());
                let batch: Vec<KeyCode> = std::iter::once(first).chain(queued).collect();
                if app.handle_keys(batch) == Control::Quit {
                    info!("User quit");
                    return Ok(());
                }
            }
        }
    }
}

/// Reads key presses on a blocking thread until the receiver is dropped.
fn spawn_key_reader() -> mpsc::UnboundedReceiver<KeyCode> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match event::poll(Duration::from_millis(100)) {
                Ok(false) => {}
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        if tx.send(key.code).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(err) => {
                        warn!(error = %err, "Failed to read terminal event");
                        break;
                    }
                },
                Err(err) => {
                    warn!(error = %err, "Failed to poll terminal events");
                    break;
                }
            }
        }
    });
    rx
}
