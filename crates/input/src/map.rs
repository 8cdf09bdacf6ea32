//! Mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map keyboard input to actions that do not depend on the cursor.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(GameAction::ToggleSound),
        _ => None,
    }
}

/// Map a left click to a slot selection.
///
/// `hit` converts terminal coordinates into a slot index; clicks that miss the
/// grid produce nothing.
pub fn handle_mouse_event<F>(mouse: MouseEvent, hit: F) -> Option<GameAction>
where
    F: Fn(u16, u16) -> Option<usize>,
{
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            hit(mouse.column, mouse.row).map(GameAction::Select)
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
