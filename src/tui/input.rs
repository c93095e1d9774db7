//! Keyboard mapping for the board.

use crossterm::event::KeyCode;
use tictactoe_engine::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor to a new cell.
    Cursor(Position),
    /// Select a cell by board index.
    Select(usize),
    /// Start a new game.
    Reset,
    /// Leave the application.
    Quit,
    /// Key has no meaning here.
    None,
}

/// Maps a key to an [`Action`] given the current cursor.
pub fn action_for(cursor: Position, key: KeyCode) -> Action {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Action::Cursor(move_cursor(cursor, key))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Action::Select(cursor.to_index()),
        KeyCode::Char(c @ '1'..='9') => match c.to_digit(10) {
            Some(digit) => Action::Select(digit as usize - 1),
            None => Action::None,
        },
        KeyCode::Char('r') | KeyCode::Char('R') => Action::Reset,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Right), Position::TopRight);
        assert_eq!(move_cursor(Position::BottomLeft, KeyCode::Down), Position::BottomLeft);
    }

    #[test]
    fn test_key_actions() {
        assert_eq!(action_for(Position::Center, KeyCode::Enter), Action::Select(4));
        assert_eq!(action_for(Position::Center, KeyCode::Char('1')), Action::Select(0));
        assert_eq!(action_for(Position::Center, KeyCode::Char('9')), Action::Select(8));
        assert_eq!(action_for(Position::Center, KeyCode::Char('0')), Action::None);
        assert_eq!(action_for(Position::Center, KeyCode::Char('r')), Action::Reset);
        assert_eq!(action_for(Position::Center, KeyCode::Esc), Action::Quit);
    }
}
