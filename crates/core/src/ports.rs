//! Ports - the seams between game logic and the outside world.
//!
//! The [`Controller`](crate::controller::Controller) talks to rendering, audio,
//! persistence and time only through these traits. Front-ends provide real
//! implementations; the in-memory ones here serve tests and headless runs.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use crate::snapshot::GameSnapshot;
use crate::types::SoundCue;

/// Draws a frame from a snapshot.
pub trait Renderer {
    fn render(&mut self, snapshot: &GameSnapshot);
}

/// Plays sound cues. Failures are the player's problem, never the game's.
pub trait SoundPlayer {
    fn play(&mut self, cue: SoundCue);
}

/// Persistent player settings.
///
/// Loads fall back to defaults (0 / sound on) when nothing usable is stored.
pub trait SettingsStore {
    fn load_high_score(&self) -> u32;
    fn save_high_score(&mut self, score: u32);
    fn load_sound_enabled(&self) -> bool;
    fn save_sound_enabled(&mut self, enabled: bool);
}

/// Monotonic millisecond clock.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Settings kept in memory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemorySettingsStore {
    pub high_score: u32,
    pub sound_enabled: bool,
}

impl Default for MemorySettingsStore {
    fn default() -> Self {
        Self {
            high_score: 0,
            sound_enabled: true,
        }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load_high_score(&self) -> u32 {
        self.high_score
    }

    fn save_high_score(&mut self, score: u32) {
        self.high_score = score;
    }

    fn load_sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    fn save_sound_enabled(&mut self, enabled: bool) {
        self.sound_enabled = enabled;
    }
}

/// Keeps every cue it is asked to play.
#[derive(Debug, Clone, Default)]
pub struct RecordingSound {
    pub played: Vec<SoundCue>,
}

impl SoundPlayer for RecordingSound {
    fn play(&mut self, cue: SoundCue) {
        self.played.push(cue);
    }
}

/// Keeps the latest frame and counts renders.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub frames: usize,
    pub last: Option<GameSnapshot>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, snapshot: &GameSnapshot) {
        self.frames += 1;
        self.last = Some(*snapshot);
    }
}
