//! Game phases and terminal outcomes.

use super::position::Position;
use super::types::Occupant;
use serde::{Deserialize, Serialize};

/// The three cells of a line, in board order.
pub type Line = [Position; 3];

/// Stage of the turn state machine.
///
/// `Display` yields the status label shown to the player.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Phase {
    /// Waiting for the human to pick a cell.
    #[default]
    #[display("Your Turn")]
    HumanTurn,
    /// The opponent strategy is due to move.
    #[display("AI Turn")]
    OpponentTurn,
    /// The human completed a line.
    #[display("You Won!")]
    HumanWon,
    /// The opponent completed a line.
    #[display("AI WON!")]
    OpponentWon,
    /// Board full, no line.
    #[display("Draw")]
    Draw,
    /// An invariant or strategy contract was broken. Only reset leaves it.
    #[display("Error")]
    Error,
}

impl Phase {
    /// Terminal phases accept no further moves.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Phase::HumanWon | Phase::OpponentWon | Phase::Draw | Phase::Error
        )
    }

    /// True for the two win phases.
    pub fn is_win(self) -> bool {
        matches!(self, Phase::HumanWon | Phase::OpponentWon)
    }

    /// Status label for the host UI.
    pub fn status_label(self) -> String {
        self.to_string()
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Human has three in a row.
    HumanWon,
    /// Opponent has three in a row.
    OpponentWon,
    /// Board is full without a line.
    Draw,
}

impl Verdict {
    /// Win verdict for the holder of a complete line; `None` for an empty one.
    pub fn for_winner(occupant: Occupant) -> Option<Self> {
        match occupant {
            Occupant::Human => Some(Verdict::HumanWon),
            Occupant::Opponent => Some(Verdict::OpponentWon),
            Occupant::Empty => None,
        }
    }
}

impl From<Verdict> for Phase {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::HumanWon => Phase::HumanWon,
            Verdict::OpponentWon => Phase::OpponentWon,
            Verdict::Draw => Phase::Draw,
        }
    }
}

/// Result of evaluating a finished board.
///
/// `line` is present for wins and absent for draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Outcome {
    verdict: Verdict,
    line: Option<Line>,
}

impl Outcome {
    /// How the game ended.
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// The winning line, if any.
    pub fn line(&self) -> Option<Line> {
        self.line
    }

    /// Winning line as board indices; empty for a draw.
    pub fn line_indices(&self) -> Vec<usize> {
        self.line
            .map(|line| line.iter().map(|p| p.to_index()).collect())
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.verdict {
            Verdict::HumanWon => write!(f, "Human wins"),
            Verdict::OpponentWon => write!(f, "Opponent wins"),
            Verdict::Draw => write!(f, "Draw"),
        }
    }
}
