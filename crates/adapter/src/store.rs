//! JSON settings file behind the core `SettingsStore` port.
//!
//! The file is a flat JSON object. Each key is read on its own: a missing or
//! malformed value falls back to its default without touching the other one.
//! Keys this program does not know are preserved on save.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::SettingsStore;

pub const HIGH_SCORE_KEY: &str = "pairAGoneHighScore";
pub const SOUND_ENABLED_KEY: &str = "pairAGoneSoundEnabled";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("settings io error: {0}")]
    Io(#[from] io::Error),

    #[error("settings json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("settings file is not a JSON object")]
    NotAnObject,
}

/// Values found in the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair_a_gone_high_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair_a_gone_sound_enabled: Option<bool>,
}

impl Settings {
    /// Pick each known key out of a JSON object, ignoring bad values.
    pub fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            pair_a_gone_high_score: obj
                .get(HIGH_SCORE_KEY)
                .and_then(|v| serde_json::from_value(v.clone()).ok()),
            pair_a_gone_sound_enabled: obj
                .get(SOUND_ENABLED_KEY)
                .and_then(|v| serde_json::from_value(v.clone()).ok()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_object(&self) -> Result<Map<String, Value>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => return Err(err.into()),
        };
        match serde_json::from_str::<Value>(&text)? {
            Value::Object(obj) => Ok(obj),
            _ => Err(StoreError::NotAnObject),
        }
    }

    /// Read the stored settings.
    pub fn read(&self) -> Result<Settings, StoreError> {
        Ok(Settings::from_object(&self.read_object()?))
    }

    /// Merge `settings` into the file, creating it (and its directory) if needed.
    ///
    /// An unreadable existing file is replaced.
    pub fn write(&self, settings: &Settings) -> Result<(), StoreError> {
        let mut obj = self.read_object().unwrap_or_default();
        if let Value::Object(update) = serde_json::to_value(settings)? {
            obj.extend(update);
        }

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let text = serde_json::to_string_pretty(&Value::Object(obj))?;
        fs::write(&self.path, text)?;
        debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }

    fn load_or_default(&self) -> Settings {
        self.read().unwrap_or_else(|err| {
            warn!(path = %self.path.display(), error = %err, "settings unreadable, using defaults");
            Settings::default()
        })
    }

    fn save_or_warn(&self, settings: Settings) {
        if let Err(err) = self.write(&settings) {
            warn!(path = %self.path.display(), error = %err, "failed to save settings");
        }
    }
}

impl SettingsStore for FileSettingsStore {
    fn load_high_score(&self) -> u32 {
        self.load_or_default().pair_a_gone_high_score.unwrap_or(0)
    }

    fn save_high_score(&mut self, score: u32) {
        self.save_or_warn(Settings {
            pair_a_gone_high_score: Some(score),
            ..Settings::default()
        });
    }

    fn load_sound_enabled(&self) -> bool {
        self.load_or_default()
            .pair_a_gone_sound_enabled
            .unwrap_or(true)
    }

    fn save_sound_enabled(&mut self, enabled: bool) {
        self.save_or_warn(Settings {
            pair_a_gone_sound_enabled: Some(enabled),
            ..Settings::default()
        });
    }
}
