//! Turn state machine.
//!
//! The engine owns one [`GameState`] and one [`OpponentStrategy`]. Every
//! mutation goes through its methods:
//!
//! - [`Engine::place_human`] applies a human move and settles the phase
//!   (terminal, or `OpponentTurn`).
//! - [`Engine::step`] runs the opponent when the phase is `OpponentTurn`.
//! - [`Engine::handle_human_select`] does both, synchronously, and swallows
//!   invalid input.
//! - [`Engine::reset`] replaces the whole state.
//!
//! Each applied move is followed immediately by an invariant check and an
//! [`evaluate`](crate::rules::evaluate), so a decided board is never left
//! in a turn phase.

use super::action::MoveError;
use super::invariants::{GameInvariants, InvariantSet};
use super::rules;
use super::{CELL_COUNT, GameState, Grid, Line, Move, Occupant, OpponentStrategy, Phase};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Game engine for one human against one strategy.
#[derive(Debug, Clone)]
pub struct Engine<S> {
    state: GameState,
    strategy: S,
}

impl<S: OpponentStrategy> Engine<S> {
    /// Creates an engine at the start of a game.
    #[instrument(skip(strategy), fields(strategy = strategy.name()))]
    pub fn new(strategy: S) -> Self {
        info!("New game");
        Self {
            state: GameState::new(),
            strategy,
        }
    }

    /// The full game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The grid.
    pub fn grid(&self) -> &Grid {
        self.state.grid()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Moves applied so far.
    pub fn move_count(&self) -> usize {
        self.state.move_count()
    }

    /// The deciding line of a won game.
    pub fn winning_line(&self) -> Option<Line> {
        self.state.winning_line()
    }

    /// Applied moves in order.
    pub fn history(&self) -> &[Move] {
        self.state.history()
    }

    /// The opponent strategy.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Applies a human move and settles the phase.
    ///
    /// On success the phase is terminal or `OpponentTurn`; the opponent is
    /// not run. A rejected move leaves everything unchanged.
    #[instrument(skip(self), fields(phase = ?self.state.phase))]
    pub fn place_human(&mut self, index: usize) -> Result<Phase, MoveError> {
        let pos = self.state.apply_move(index, Occupant::Human)?;
        debug!(position = %pos, "Human moved");
        Ok(self.settle(Phase::OpponentTurn))
    }

    /// Runs the opponent if it is the opponent's turn.
    ///
    /// Any other phase is returned unchanged. A strategy answer that is off
    /// the board or names a marked cell ends the game in `Error`.
    #[instrument(skip(self), fields(phase = ?self.state.phase, strategy = self.strategy.name()))]
    pub fn step(&mut self) -> Phase {
        if self.state.phase != Phase::OpponentTurn {
            return self.state.phase;
        }
        if self.state.move_count >= CELL_COUNT {
            warn!(
                move_count = self.state.move_count,
                "Opponent turn on a full board"
            );
            return self.fail();
        }

        let choice = self
            .strategy
            .select_move(&self.state.grid, self.state.move_count);

        match self.state.apply_move(choice, Occupant::Opponent) {
            Ok(pos) => {
                debug!(position = %pos, "Opponent moved");
                self.settle(Phase::HumanTurn)
            }
            Err(err) => {
                warn!(choice, error = %err, "Opponent strategy broke its contract");
                self.fail()
            }
        }
    }

    /// Presentation entry point for a human cell selection.
    ///
    /// Ignored unless it is the human's turn and `index` names an empty
    /// cell. Otherwise applies the move and, if play continues, the
    /// opponent's reply.
    #[instrument(skip(self))]
    pub fn handle_human_select(&mut self, index: usize) -> Phase {
        match self.place_human(index) {
            Ok(Phase::OpponentTurn) => self.step(),
            Ok(phase) => phase,
            Err(err) => {
                debug!(error = %err, "Ignoring selection");
                self.state.phase
            }
        }
    }

    /// Starts over from an empty grid, whatever the current phase.
    #[instrument(skip(self), fields(phase = ?self.state.phase))]
    pub fn reset(&mut self) {
        info!("Game reset");
        self.state = GameState::new();
    }

    /// Serializable view of the game for hosts.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.state)
    }

    /// Checks invariants, evaluates the board, and moves to the resulting
    /// phase, or to `next` when play continues.
    fn settle(&mut self, next: Phase) -> Phase {
        if let Err(violations) = GameInvariants::check_all(&self.state) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(violations = %descriptions, "Invariant violated");
            return self.fail();
        }

        match rules::evaluate(&self.state.grid, self.state.move_count) {
            Ok(Some(outcome)) => {
                self.state.phase = outcome.verdict().into();
                self.state.winning_line = outcome.line();
                info!(%outcome, line = ?outcome.line_indices(), "Game over");
            }
            Ok(None) => self.state.phase = next,
            Err(err) => {
                warn!(error = %err, "Board evaluation failed");
                return self.fail();
            }
        }
        self.state.phase
    }

    fn fail(&mut self) -> Phase {
        self.state.phase = Phase::Error;
        self.state.winning_line = None;
        Phase::Error
    }
}

/// Read-only view of a game, as a host renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cell symbols in board order ("X", "O" or "").
    pub cells: Vec<String>,
    /// Current phase.
    pub phase: Phase,
    /// Status label for the phase.
    pub status: String,
    /// Winning line indices; empty unless won.
    pub winning_line: Vec<usize>,
    /// Moves applied so far.
    pub move_count: usize,
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        Self {
            cells: state
                .grid()
                .cells()
                .iter()
                .map(|c| c.symbol().to_string())
                .collect(),
            phase: state.phase(),
            status: state.phase().status_label(),
            winning_line: state
                .winning_line()
                .map(|line| line.iter().map(|p| p.to_index()).collect())
                .unwrap_or_default(),
            move_count: state.move_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    /// Plays a fixed list of indices, then keeps answering the last one.
    struct Scripted {
        moves: Vec<usize>,
        next: usize,
    }

    impl Scripted {
        fn new(moves: Vec<usize>) -> Self {
            Self { moves, next: 0 }
        }
    }

    impl OpponentStrategy for Scripted {
        fn select_move(&mut self, _grid: &Grid, _move_count: usize) -> usize {
            let choice = self.moves[self.next.min(self.moves.len() - 1)];
            self.next += 1;
            choice
        }
    }

    #[test]
    fn test_place_human_defers_opponent() {
        let mut engine = Engine::new(Scripted::new(vec![0]));
        assert_eq!(engine.place_human(4), Ok(Phase::OpponentTurn));
        assert_eq!(engine.grid().at(Position::Center), Occupant::Human);
        assert_eq!(engine.move_count(), 1);
    }

    #[test]
    fn test_step_outside_opponent_turn_is_noop() {
        let mut engine = Engine::new(Scripted::new(vec![0]));
        assert_eq!(engine.step(), Phase::HumanTurn);
        assert_eq!(engine.move_count(), 0);
    }

    #[test]
    fn test_human_select_runs_opponent() {
        let mut engine = Engine::new(Scripted::new(vec![0]));
        assert_eq!(engine.handle_human_select(4), Phase::HumanTurn);
        assert_eq!(engine.grid().at(Position::TopLeft), Occupant::Opponent);
        assert_eq!(engine.move_count(), 2);
    }

    #[test]
    fn test_out_of_range_strategy_answer_is_error() {
        let mut engine = Engine::new(Scripted::new(vec![42]));
        assert_eq!(engine.handle_human_select(4), Phase::Error);
        assert_eq!(engine.move_count(), 1);
        assert_eq!(engine.winning_line(), None);
    }

    #[test]
    fn test_opponent_win_is_detected_after_its_move() {
        // Opponent fills the left column while the human scatters.
        let mut engine = Engine::new(Scripted::new(vec![0, 3, 6]));
        engine.handle_human_select(4);
        engine.handle_human_select(2);
        assert_eq!(engine.handle_human_select(8), Phase::OpponentWon);
        assert_eq!(
            engine.winning_line(),
            Some([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft])
        );
    }

    #[test]
    fn test_snapshot() {
        let mut engine = Engine::new(Scripted::new(vec![0]));
        engine.handle_human_select(4);
        let snap = engine.snapshot();
        assert_eq!(snap.cells[0], "O");
        assert_eq!(snap.cells[4], "X");
        assert_eq!(snap.cells[1], "");
        assert_eq!(snap.status, "Your Turn");
        assert!(snap.winning_line.is_empty());
        assert_eq!(snap.move_count, 2);
    }

    #[test]
    fn test_snapshot_serializes_for_hosts() {
        let mut engine = Engine::new(Scripted::new(vec![3, 4]));
        engine.handle_human_select(0);
        engine.handle_human_select(1);
        engine.handle_human_select(2);
        let json = serde_json::to_value(engine.snapshot()).unwrap();
        assert_eq!(json["phase"], "HumanWon");
        assert_eq!(json["status"], "You Won!");
        assert_eq!(json["winning_line"], serde_json::json!([0, 1, 2]));
    }
}
