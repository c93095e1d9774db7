//! Non-interactive play: feed a list of human selections to an engine.

use tictactoe_engine::{Engine, OpponentStrategy, Phase};
use tracing::{info, instrument};

/// Plays `moves` as human selections, in order.
///
/// Selections the engine ignores (occupied cells, finished games) are
/// skipped, just as a click on such a cell would be. Returns the final phase.
#[instrument(skip(engine), fields(strategy = engine.strategy().name()))]
pub fn run_script<S: OpponentStrategy>(engine: &mut Engine<S>, moves: &[usize]) -> Phase {
    for &index in moves {
        let before = engine.move_count();
        let phase = engine.handle_human_select(index);
        if engine.move_count() == before {
            info!(index, %phase, "Selection ignored");
        }
    }
    engine.phase()
}

/// Plain-text report of an engine: board, status, winning line.
pub fn render_report<S: OpponentStrategy>(engine: &Engine<S>) -> String {
    let mut report = format!("{}\n\nStatus: {}", engine.grid(), engine.phase());
    if let Some(line) = engine.winning_line() {
        let cells: Vec<String> = line.iter().map(|p| p.to_index().to_string()).collect();
        report.push_str(&format!("\nWinning line: {}", cells.join(", ")));
    }
    report.push_str(&format!("\nMoves: {}", engine.move_count()));
    report
}
