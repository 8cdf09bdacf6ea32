//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and timing logic.
//! It has **zero dependencies** on terminals, files or audio devices, making it:
//!
//! - **Deterministic**: Same seed produces identical deals and refills
//! - **Testable**: Time is injected, so every delay can be stepped in tests
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 5x4 card grid with adjacency, slide and refill
//! - [`judge`]: Classifies a two-card selection
//! - [`type_pool`]: Card types in play as matches accumulate
//! - [`scoring`]: Combo multiplier with decay, score and best score
//! - [`game_state`]: Turn state machine and the timed match resolution
//! - [`snapshot`]: Read-only view handed to renderers
//! - [`ports`]: Renderer, sound, settings and clock seams
//! - [`controller`]: Binds a game to its ports
//! - [`rng`]: Seedable random source
//!
//! # Game Rules
//!
//! - **Pairs**: Two equal cards in touching slots (diagonals count) form a match
//! - **Resolution**: Matched cards show for 400ms, then vanish; the rest slide
//!   toward the top-left, pause 100ms, empty slots refill, pause 100ms
//! - **Refill**: New cards avoid types already sitting next to them
//! - **Game Over**: The board has no touching pair after a refill
//! - **Scoring**: `round(10 * multiplier)` per match; each match adds 0.5 to the
//!   multiplier (max 5.0), a miss resets it, and it decays over time
//! - **Type Pool**: Starts with 5 card types, one more every 5 matches (max 10)
//!
//! # Example
//!
//! ```
//! use pair_a_gone_core::{Board, GameState, SelectOutcome};
//!
//! let board = Board::from_layout("00... ..... ..... .....").unwrap();
//! let mut game = GameState::with_board(12345, 0, board);
//!
//! assert_eq!(game.select(0, 0), SelectOutcome::Selected);
//! assert_eq!(game.select(1, 0), SelectOutcome::Matched);
//!
//! // The pair is removed once its 400ms animation is over.
//! game.update(400);
//! assert_eq!(game.score(), 15);
//! ```

pub mod board;
pub mod controller;
pub mod game_state;
pub mod judge;
pub mod ports;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod type_pool;

pub use pair_a_gone_types as types;

// Re-export commonly used types for convenience
pub use board::{adjacent, neighbors, Board};
pub use controller::Controller;
pub use game_state::{GameEvent, GameState, Phase, ResolveStage, SelectOutcome};
pub use judge::{judge, MatchOutcome};
pub use ports::{
    Clock, ManualClock, MemorySettingsStore, RecordingRenderer, RecordingSound,
    Renderer, SettingsStore, SoundPlayer, SystemClock,
};
pub use rng::GameRng;
pub use scoring::{Multiplier, ScoreBoard};
pub use snapshot::GameSnapshot;
pub use type_pool::{available_types, type_count};
