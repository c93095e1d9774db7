//! Application state: the engine plus a cursor.

use super::input::{self, Action};
use crossterm::event::KeyCode;
use tictactoe_engine::{Engine, OpponentStrategy, Phase, Position};
use tracing::debug;

/// Whether the event loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Exit the loop.
    Quit,
}

/// Main application state.
///
/// The engine is only touched through its presentation methods; rendering
/// reads it through [`App::engine`].
pub struct App<S> {
    engine: Engine<S>,
    cursor: Position,
}

impl<S: OpponentStrategy> App<S> {
    /// Creates a new application around a fresh game.
    pub fn new(strategy: S) -> Self {
        Self {
            engine: Engine::new(strategy),
            cursor: Position::Center,
        }
    }

    /// The engine, for rendering.
    pub fn engine(&self) -> &Engine<S> {
        &self.engine
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True while the opponent's reply is pending.
    pub fn opponent_pending(&self) -> bool {
        self.engine.phase() == Phase::OpponentTurn
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match input::action_for(self.cursor, key) {
            Action::Cursor(pos) => self.cursor = pos,
            Action::Select(index) => self.select(index),
            Action::Reset => self.restart(),
            Action::Quit => return Control::Quit,
            Action::None => {}
        }
        Control::Continue
    }

    /// Handles key presses in arrival order, stopping at the first quit.
    ///
    /// Selections made while the opponent is pending are refused by the
    /// engine's turn check, so they never carry over into the next turn.
    pub fn handle_keys(&mut self, keys: impl IntoIterator<Item = KeyCode>) -> Control {
        for key in keys {
            if self.handle_key(key) == Control::Quit {
                return Control::Quit;
            }
        }
        Control::Continue
    }

    /// Plays the human move at `index`; the opponent answers on
    /// [`App::opponent_step`].
    pub fn select(&mut self, index: usize) {
        match self.engine.place_human(index) {
            Ok(phase) => {
                debug!(index, %phase, "Human selection applied");
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
            }
            Err(err) => debug!(index, error = %err, "Selection ignored"),
        }
    }

    /// Runs the pending opponent move, if any.
    pub fn opponent_step(&mut self) -> Phase {
        self.engine.step()
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.engine.reset();
        self.cursor = Position::Center;
    }
}
