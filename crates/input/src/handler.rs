//! Keyboard cursor over the card grid.
//!
//! Arrow keys, `hjkl` and `wasd` move the cursor; Enter or Space selects the
//! slot under it. The cursor clamps at the grid edges.

use crossterm::event::KeyCode;

use crate::map::handle_key_event;
use crate::types::{row_col, GameAction, GRID_COLS, GRID_ROWS, TOTAL_SLOTS};

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Up,
    Down,
}

impl CursorMove {
    pub fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Left
            | KeyCode::Char('h')
            | KeyCode::Char('H')
            | KeyCode::Char('a')
            | KeyCode::Char('A') => Some(CursorMove::Left),
            KeyCode::Right
            | KeyCode::Char('l')
            | KeyCode::Char('L')
            | KeyCode::Char('d')
            | KeyCode::Char('D') => Some(CursorMove::Right),
            KeyCode::Up
            | KeyCode::Char('k')
            | KeyCode::Char('K')
            | KeyCode::Char('w')
            | KeyCode::Char('W') => Some(CursorMove::Up),
            KeyCode::Down
            | KeyCode::Char('j')
            | KeyCode::Char('J')
            | KeyCode::Char('s')
            | KeyCode::Char('S') => Some(CursorMove::Down),
            _ => None,
        }
    }
}

/// Tracks the keyboard cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputHandler {
    cursor: usize,
}

impl InputHandler {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor to a slot (used after mouse clicks). Out-of-range is ignored.
    pub fn set_cursor(&mut self, index: usize) {
        if index < TOTAL_SLOTS {
            self.cursor = index;
        }
    }

    /// Returns true if the cursor moved.
    pub fn move_cursor(&mut self, dir: CursorMove) -> bool {
        let (row, col) = row_col(self.cursor);
        let (row, col) = match dir {
            CursorMove::Left => (row, col.saturating_sub(1)),
            CursorMove::Right => (row, (col + 1).min(GRID_COLS - 1)),
            CursorMove::Up => (row.saturating_sub(1), col),
            CursorMove::Down => ((row + 1).min(GRID_ROWS - 1), col),
        };
        let next = row * GRID_COLS + col;
        let moved = next != self.cursor;
        self.cursor = next;
        moved
    }

    /// Handle a key press. Cursor keys move the cursor and yield no action.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        if let Some(dir) = CursorMove::from_key(code) {
            self.move_cursor(dir);
            return None;
        }
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Select(self.cursor)),
            other => handle_key_event(other.into()),
        }
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_and_clamps() {
        let mut ih = InputHandler::new();
        assert!(!ih.move_cursor(CursorMove::Left));
        assert!(!ih.move_cursor(CursorMove::Up));

        assert!(ih.move_cursor(CursorMove::Right));
        assert!(ih.move_cursor(CursorMove::Down));
        assert_eq!(ih.cursor(), 6);

        for _ in 0..10 {
            ih.move_cursor(CursorMove::Right);
            ih.move_cursor(CursorMove::Down);
        }
        assert_eq!(ih.cursor(), TOTAL_SLOTS - 1);
    }

    #[test]
    fn test_cursor_does_not_wrap_rows() {
        let mut ih = InputHandler::new();
        ih.set_cursor(4);
        assert!(!ih.move_cursor(CursorMove::Right));
        assert_eq!(ih.cursor(), 4);
    }

    #[test]
    fn test_select_uses_cursor() {
        let mut ih = InputHandler::new();
        assert_eq!(ih.handle_key_press(KeyCode::Char('l')), None);
        assert_eq!(ih.handle_key_press(KeyCode::Char('j')), None);
        assert_eq!(ih.handle_key_press(KeyCode::Enter), Some(GameAction::Select(6)));
        assert_eq!(
            ih.handle_key_press(KeyCode::Char(' ')),
            Some(GameAction::Select(6))
        );
    }

    #[test]
    fn test_other_keys_fall_through_to_map() {
        let mut ih = InputHandler::new();
        assert_eq!(
            ih.handle_key_press(KeyCode::Char('r')),
            Some(GameAction::Restart)
        );
        assert_eq!(
            ih.handle_key_press(KeyCode::Char('m')),
            Some(GameAction::ToggleSound)
        );
        assert_eq!(ih.handle_key_press(KeyCode::Tab), None);
    }

    #[test]
    fn test_set_cursor_ignores_out_of_range() {
        let mut ih = InputHandler::new();
        ih.set_cursor(12);
        ih.set_cursor(99);
        assert_eq!(ih.cursor(), 12);
        ih.reset();
        assert_eq!(ih.cursor(), 0);
    }
}
