//! Terminal input module.
//!
//! This module is intentionally independent of any rendering code. It maps
//! `crossterm` key and mouse events into [`crate::types::GameAction`] and keeps
//! a keyboard cursor over the grid so the game is playable without a mouse.

pub mod handler;
pub mod map;

pub use pair_a_gone_types as types;

pub use handler::{CursorMove, InputHandler};
pub use map::{handle_key_event, handle_mouse_event, should_quit};
