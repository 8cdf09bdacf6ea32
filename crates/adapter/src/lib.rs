//! Adapter module - connects the game to the host machine.
//!
//! - [`config`]: `AppConfig` from environment variables and command-line flags
//! - [`store`]: settings persisted as a JSON file
//! - [`sound`]: terminal bell sound cues
//!
//! # Environment Variables
//!
//! - `PAIR_A_GONE_SEED`: Fixed RNG seed (default: time-based)
//! - `PAIR_A_GONE_DATA_DIR`: Directory holding `settings.json`
//!   (default: `$XDG_DATA_HOME/pair-a-gone` or `~/.local/share/pair-a-gone`)
//! - `PAIR_A_GONE_LOG`: Log file path; logging is off when unset
//! - `PAIR_A_GONE_MUTE`: Set to "1" or "true" to silence the bell
//!
//! Command-line flags `--seed`, `--data-dir`, `--log` and `--mute` override
//! the environment.

pub mod config;
pub mod sound;
pub mod store;

pub use pair_a_gone_core as core;
pub use pair_a_gone_types as types;

pub use config::AppConfig;
pub use sound::{bell_count, BellSoundPlayer};
pub use store::{FileSettingsStore, Settings, StoreError};
