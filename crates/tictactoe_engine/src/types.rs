//! Core domain types: cell occupants and the 3x3 grid.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Who holds a cell.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Occupant {
    /// Unmarked cell.
    #[default]
    Empty,
    /// Marked by the human player.
    Human,
    /// Marked by the automated opponent.
    Opponent,
}

impl Occupant {
    /// Symbol drawn for this occupant.
    pub fn symbol(self) -> &'static str {
        match self {
            Occupant::Human => "X",
            Occupant::Opponent => "O",
            Occupant::Empty => "",
        }
    }

    /// Returns true for an unmarked cell.
    pub fn is_empty(self) -> bool {
        self == Occupant::Empty
    }

    /// The other player. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Occupant::Human => Occupant::Opponent,
            Occupant::Opponent => Occupant::Human,
            Occupant::Empty => Occupant::Empty,
        }
    }
}

/// 3x3 grid, stored row-major (0-8).
///
/// The engine owns the only mutable grid of a game. Everything outside the
/// engine sees `&Grid` or works on its own copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    cells: [Occupant; CELL_COUNT],
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a grid from explicit cell contents.
    pub fn from_cells(cells: [Occupant; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Occupant at `index`, or `None` when the index is off the board.
    pub fn get(&self, index: usize) -> Option<Occupant> {
        self.cells.get(index).copied()
    }

    /// Occupant at a known-valid position.
    pub fn at(&self, pos: Position) -> Occupant {
        self.cells[pos.to_index()]
    }

    /// True when `index` is on the board and unmarked.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Occupant::Empty))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Occupant; CELL_COUNT] {
        &self.cells
    }

    /// Number of cells holding `occupant`.
    pub fn count(&self, occupant: Occupant) -> usize {
        self.cells.iter().filter(|c| **c == occupant).count()
    }

    /// Number of marked cells.
    pub fn occupied_count(&self) -> usize {
        CELL_COUNT - self.count(Occupant::Empty)
    }

    /// Indices of unmarked cells, ascending.
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
    }

    /// Copy of this grid with `pos` set to `occupant`.
    pub fn with(mut self, pos: Position, occupant: Occupant) -> Self {
        self.cells[pos.to_index()] = occupant;
        self
    }

    pub(crate) fn set(&mut self, pos: Position, occupant: Occupant) {
        self.cells[pos.to_index()] = occupant;
    }
}

impl std::fmt::Display for Grid {
    /// Renders the board as text; empty cells show their 1-based number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Occupant::Empty => write!(f, "{}", pos + 1)?,
                    occupant => write!(f, "{}", occupant.symbol())?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
