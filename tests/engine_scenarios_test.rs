//! End-to-end scenarios for the turn state machine.

use tictactoe_vs_ai::opponents::{FirstAvailable, Minimax};
use tictactoe_vs_ai::{
    CELL_COUNT, Engine, Grid, Occupant, OpponentStrategy, Phase, Position, evaluate,
};

/// Answers from a fixed list, then repeats the last answer.
struct Scripted {
    moves: Vec<usize>,
    calls: usize,
}

impl Scripted {
    fn new(moves: &[usize]) -> Self {
        Self {
            moves: moves.to_vec(),
            calls: 0,
        }
    }
}

impl OpponentStrategy for Scripted {
    fn select_move(&mut self, _grid: &Grid, _move_count: usize) -> usize {
        let choice = self.moves[self.calls.min(self.moves.len() - 1)];
        self.calls += 1;
        choice
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

fn assert_fresh<S: OpponentStrategy>(engine: &Engine<S>) {
    assert_eq!(engine.grid(), &Grid::new());
    assert_eq!(engine.move_count(), 0);
    assert_eq!(engine.phase(), Phase::HumanTurn);
    assert_eq!(engine.winning_line(), None);
    assert!(engine.history().is_empty());
}

#[test]
fn test_human_center_opening_hands_over_to_opponent() {
    let mut engine = Engine::new(FirstAvailable);
    assert_eq!(engine.place_human(4), Ok(Phase::OpponentTurn));
    assert_eq!(engine.grid().at(Position::Center), Occupant::Human);
    assert_eq!(engine.move_count(), 1);
}

#[test]
fn test_human_completes_top_row() {
    // Reaches [X, X, _, O, O, _, _, _, _] with four moves applied.
    let mut engine = Engine::new(Scripted::new(&[3, 4]));
    engine.handle_human_select(0);
    engine.handle_human_select(1);
    assert_eq!(engine.move_count(), 4);
    assert_eq!(
        engine.grid().cells()[..5],
        [
            Occupant::Human,
            Occupant::Human,
            Occupant::Empty,
            Occupant::Opponent,
            Occupant::Opponent
        ]
    );

    assert_eq!(engine.handle_human_select(2), Phase::HumanWon);
    assert_eq!(
        engine.winning_line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
    let outcome = evaluate(engine.grid(), engine.move_count())
        .unwrap()
        .unwrap();
    assert_eq!(outcome.line_indices(), vec![0, 1, 2]);
}

#[test]
fn test_nine_moves_without_line_is_draw() {
    // Final board: X O X / X O O / O X X
    let mut engine = Engine::new(Scripted::new(&[1, 4, 5, 6]));
    for index in [0, 2, 3, 7] {
        assert_eq!(engine.handle_human_select(index), Phase::HumanTurn);
    }
    assert_eq!(engine.handle_human_select(8), Phase::Draw);
    assert_eq!(engine.move_count(), CELL_COUNT);
    assert_eq!(engine.winning_line(), None);
    assert_eq!(engine.snapshot().winning_line, Vec::<usize>::new());
}

#[test]
fn test_strategy_answering_occupied_cell_is_fatal() {
    let mut engine = Engine::new(Scripted::new(&[4]));
    assert_eq!(engine.handle_human_select(4), Phase::Error);
    assert_eq!(engine.phase().status_label(), "Error");

    let grid = *engine.grid();
    for index in 0..CELL_COUNT {
        assert_eq!(engine.handle_human_select(index), Phase::Error);
    }
    assert_eq!(engine.grid(), &grid);
    assert_eq!(engine.move_count(), 1);

    engine.reset();
    assert_fresh(&engine);
}

#[test]
fn test_selection_during_opponent_turn_changes_nothing() {
    let mut engine = Engine::new(FirstAvailable);
    engine.place_human(4).unwrap();
    let before = engine.state().clone();

    assert_eq!(engine.handle_human_select(0), Phase::OpponentTurn);
    assert!(engine.place_human(8).is_err());
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_move_count_tracks_occupied_cells() {
    let mut engine = Engine::new(FirstAvailable);
    for index in [8, 7, 6, 5] {
        engine.handle_human_select(index);
        assert_eq!(engine.move_count(), engine.grid().occupied_count());
        assert_eq!(engine.move_count(), engine.history().len());
    }
}

#[test]
fn test_reset_from_every_reachable_phase() {
    // HumanTurn
    let mut engine = Engine::new(Scripted::new(&[3, 4, 5]));
    engine.reset();
    assert_fresh(&engine);

    // OpponentTurn
    engine.place_human(0).unwrap();
    engine.reset();
    assert_fresh(&engine);

    // HumanWon
    for index in [0, 1, 2] {
        engine.handle_human_select(index);
    }
    assert_eq!(engine.phase(), Phase::HumanWon);
    engine.reset();
    assert_fresh(&engine);

    // OpponentWon: scripted opponent keeps answering 3, 4, 5.
    let mut engine = Engine::new(Scripted::new(&[3, 4, 5]));
    for index in [0, 1, 8] {
        engine.handle_human_select(index);
    }
    assert_eq!(engine.phase(), Phase::OpponentWon);
    engine.reset();
    assert_fresh(&engine);

    // Error
    let mut engine = Engine::new(Scripted::new(&[CELL_COUNT]));
    engine.handle_human_select(0);
    assert_eq!(engine.phase(), Phase::Error);
    engine.reset();
    assert_fresh(&engine);
}

#[test]
fn test_game_continues_after_reset() {
    let mut engine = Engine::new(Minimax);
    engine.handle_human_select(4);
    engine.reset();
    assert_eq!(engine.handle_human_select(0), Phase::HumanTurn);
    assert_eq!(engine.move_count(), 2);
}
