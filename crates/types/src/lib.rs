//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed 5x4 grid of card slots:
//!
//! - **Columns**: 5 (indexed 0-4)
//! - **Rows**: 4 (indexed 0-3)
//! - **Slots**: 20, row-major (`row * GRID_COLS + col`)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MATCH_ANIMATION_MS` | 400 | Matched cards stay marked before removal |
//! | `SLIDE_PAUSE_MS` | 100 | Pause between slide and refill |
//! | `REFILL_PAUSE_MS` | 100 | Pause between refill and the end-of-game check |
//! | `INVALID_FLASH_MS` | 300 | Mismatched pair flash duration |
//! | `DECAY_TICK_MS` | 100 | Multiplier decay interval |
//! | `HIGH_SCORE_CUE_DELAY_MS` | 500 | Fanfare delay after game over |
//!
//! # Examples
//!
//! ```
//! use pair_a_gone_types::{CardType, GameAction, SoundCue, CARD_TYPES, TOTAL_SLOTS};
//!
//! assert_eq!(CARD_TYPES.len(), 10);
//! assert_eq!(TOTAL_SLOTS, 20);
//!
//! let star = CardType::from_name("star").unwrap();
//! assert_eq!(star.glyph, "⭐");
//!
//! assert_eq!(GameAction::ToggleSound.as_str(), "toggleSound");
//! assert_eq!(SoundCue::ComboLost.as_str(), "comboLost");
//! ```

/// Grid width in slots (5 columns)
pub const GRID_COLS: usize = 5;

/// Grid height in slots (4 rows)
pub const GRID_ROWS: usize = 4;

/// Total number of card slots (20)
pub const TOTAL_SLOTS: usize = GRID_COLS * GRID_ROWS;

/// Base points for one matched pair, before the multiplier.
pub const POINTS_PER_MATCH: u32 = 10;

/// Number of card types in play at the start of a game.
pub const BASE_TYPE_COUNT: usize = 5;

/// One more card type joins the pool every this many matches.
pub const MATCHES_PER_NEW_TYPE: u32 = 5;

/// How long a matched pair stays marked before it is removed (400ms).
pub const MATCH_ANIMATION_MS: u64 = 400;

/// Pause after sliding, before empty slots are refilled (100ms).
pub const SLIDE_PAUSE_MS: u64 = 100;

/// Pause after refilling, before the valid-move check (100ms).
pub const REFILL_PAUSE_MS: u64 = 100;

/// How long a mismatched pair is flagged invalid (300ms).
pub const INVALID_FLASH_MS: u64 = 300;

/// Delay between the game-over cue and the high score fanfare (500ms).
pub const HIGH_SCORE_CUE_DELAY_MS: u64 = 500;

/// Multiplier decay tick interval (100ms).
pub const DECAY_TICK_MS: u64 = 100;

/// Multiplier floor.
pub const MULTIPLIER_MIN: f64 = 1.0;

/// Multiplier ceiling.
pub const MULTIPLIER_MAX: f64 = 5.0;

/// Multiplier gain per successful match.
pub const MULTIPLIER_STEP: f64 = 0.5;

/// Multiplier decay per second at combo 0.
pub const MULTIPLIER_DECAY_PER_SEC: f64 = 0.075;

/// Extra decay speed per combo step (10% per consecutive match).
pub const COMBO_DECAY_FACTOR: f64 = 0.1;

/// Combo count from which the `combo` cue fires.
pub const COMBO_CUE_THRESHOLD: u32 = 2;


/// A matchable card symbol.
///
/// Two cards match when their names are equal; the glyph is presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardType {
    pub name: &'static str,
    pub glyph: &'static str,
}

impl CardType {
    pub const fn new(name: &'static str, glyph: &'static str) -> Self {
        Self { name, glyph }
    }

    /// Look up a roster entry by name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        CARD_TYPES
            .iter()
            .copied()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Position of this type in [`CARD_TYPES`].
    ///
    /// Types outside the roster report `CARD_TYPES.len()`.
    pub fn ordinal(&self) -> usize {
        CARD_TYPES
            .iter()
            .position(|t| t.name == self.name)
            .unwrap_or(CARD_TYPES.len())
    }

    /// Whether two cards form a pair.
    pub fn same_kind(&self, other: &CardType) -> bool {
        self.name == other.name
    }
}

/// Size of the full card roster.
pub const CARD_TYPE_COUNT: usize = 10;

/// The fixed, ordered card roster.
///
/// The active pool is always a prefix of this list (see `type_pool` in core).
pub const CARD_TYPES: [CardType; CARD_TYPE_COUNT] = [
    CardType::new("Mario", "🧢"),
    CardType::new("Mushroom", "🍄"),
    CardType::new("Fire Flower", "🌸"),
    CardType::new("Star", "⭐"),
    CardType::new("Cloud", "☁️"),
    CardType::new("Luigi", "💚"),
    CardType::new("Goomba", "🟤"),
    CardType::new("Bowser", "🐢"),
    CardType::new("Boo", "👻"),
    CardType::new("Yoshi", "🦖"),
];

/// A slot on the grid
///
/// - `None`: Empty slot
/// - `Some(CardType)`: Slot holding a card
pub type Slot = Option<CardType>;

/// Visual state of a slot, reported to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SlotMark {
    #[default]
    Normal,
    /// First card of a pending pair.
    Selected,
    /// Part of a matched pair waiting to be removed.
    Matched,
    /// Part of a rejected pair (short flash).
    Invalid,
}

/// Player actions that can be applied to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Select (or deselect) the card in a slot
    Select(usize),
    /// Start a fresh game
    Restart,
    /// Flip the sound setting
    ToggleSound,
}

impl GameAction {
    /// camelCase name, used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Select(_) => "select",
            GameAction::Restart => "restart",
            GameAction::ToggleSound => "toggleSound",
        }
    }
}

/// Discrete sound cues emitted by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Select,
    Match,
    Invalid,
    Slide,
    Deal,
    GameOver,
    Combo,
    ComboLost,
    HighScore,
}

impl SoundCue {
    pub const ALL: [SoundCue; 9] = [
        SoundCue::Select,
        SoundCue::Match,
        SoundCue::Invalid,
        SoundCue::Slide,
        SoundCue::Deal,
        SoundCue::GameOver,
        SoundCue::Combo,
        SoundCue::ComboLost,
        SoundCue::HighScore,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Select => "select",
            SoundCue::Match => "match",
            SoundCue::Invalid => "invalid",
            SoundCue::Slide => "slide",
            SoundCue::Deal => "deal",
            SoundCue::GameOver => "gameover",
            SoundCue::Combo => "combo",
            SoundCue::ComboLost => "comboLost",
            SoundCue::HighScore => "highscore",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        SoundCue::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

/// Convert a slot index into `(row, col)`.
///
/// # Examples
///
/// ```
/// use pair_a_gone_types::row_col;
///
/// assert_eq!(row_col(0), (0, 0));
/// assert_eq!(row_col(7), (1, 2));
/// assert_eq!(row_col(19), (3, 4));
/// ```
#[inline]
pub fn row_col(index: usize) -> (usize, usize) {
    (index / GRID_COLS, index % GRID_COLS)
}
