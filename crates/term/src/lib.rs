//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout libraries and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing pure so frames can be asserted on in tests
//! - Share one layout between drawing and mouse hit-testing

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screen;

pub use pair_a_gone_core as core;
pub use pair_a_gone_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{card_color, card_label, AnchorY, FrameLayout, GameView, Viewport};
pub use renderer::{install_panic_hook, restore_terminal, TerminalRenderer};
pub use screen::TermScreen;
