//! Winning line invariant: a line is recorded exactly for win phases.

use super::super::GameState;
use super::Invariant;

/// Invariant: the winning line is present iff the phase is a win, and
/// then all three of its cells belong to the winner.
pub struct WinningLineInvariant;

impl Invariant<GameState> for WinningLineInvariant {
    fn holds(state: &GameState) -> bool {
        match (state.phase().is_win(), state.winning_line()) {
            (true, Some(line)) => {
                let first = state.grid().at(line[0]);
                !first.is_empty() && line.iter().all(|p| state.grid().at(*p) == first)
            }
            (false, None) => true,
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Winning line is recorded only for a won game"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Phase, Position};

    #[test]
    fn test_stale_line_violates() {
        let mut state = GameState::new();
        state.winning_line = Some([Position::TopLeft, Position::TopCenter, Position::TopRight]);
        assert!(!WinningLineInvariant::holds(&state));
    }

    #[test]
    fn test_win_without_line_violates() {
        let mut state = GameState::new();
        state.phase = Phase::OpponentWon;
        assert!(!WinningLineInvariant::holds(&state));
    }
}
