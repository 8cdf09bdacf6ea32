//! Runtime configuration: environment first, then command-line flags.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

/// Settings file name inside the data directory.
pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Fixed RNG seed; a time-based seed is used when unset.
    pub seed: Option<u64>,
    pub data_dir: PathBuf,
    /// Log file; logging is off when unset.
    pub log_path: Option<PathBuf>,
    /// Never ring the bell, whatever the stored sound setting says.
    pub mute: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            data_dir: default_data_dir(|k| env::var(k).ok()),
            log_path: None,
            mute: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |k: &str| {
            var(k)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let seed = non_empty("PAIR_A_GONE_SEED").and_then(|s| s.parse().ok());
        let data_dir = non_empty("PAIR_A_GONE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| default_data_dir(&var));
        let log_path = non_empty("PAIR_A_GONE_LOG").map(PathBuf::from);
        let mute = non_empty("PAIR_A_GONE_MUTE")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            seed,
            data_dir,
            log_path,
            mute,
        }
    }

    /// Apply command-line flags (program name already stripped).
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    let seed = v
                        .parse::<u64>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                    self.seed = Some(seed);
                }
                "--data-dir" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --data-dir"))?;
                    self.data_dir = PathBuf::from(v);
                }
                "--log" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --log"))?;
                    self.log_path = Some(PathBuf::from(v));
                }
                "--mute" => self.mute = true,
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }
        Ok(())
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE)
    }

    /// The configured seed, or one taken from the wall clock.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(1)
        })
    }
}

/// `$XDG_DATA_HOME/pair-a-gone`, else `$HOME/.local/share/pair-a-gone`, else `./.pair-a-gone`.
fn default_data_dir<F>(var: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(xdg) = var("XDG_DATA_HOME").filter(|s| !s.is_empty()) {
        return PathBuf::from(xdg).join("pair-a-gone");
    }
    if let Some(home) = var("HOME").filter(|s| !s.is_empty()) {
        return PathBuf::from(home).join(".local/share/pair-a-gone");
    }
    PathBuf::from(".pair-a-gone")
}
