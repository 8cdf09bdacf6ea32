//! Terminal bell as a sound device.

use std::io::{self, Write};

use crate::core::SoundPlayer;
use crate::types::SoundCue;

/// Number of bell rings for a cue. Frequent cues stay silent.
pub fn bell_count(cue: SoundCue) -> u8 {
    match cue {
        SoundCue::Select | SoundCue::Slide | SoundCue::Deal | SoundCue::ComboLost => 0,
        SoundCue::Match | SoundCue::Invalid | SoundCue::Combo => 1,
        SoundCue::GameOver => 2,
        SoundCue::HighScore => 3,
    }
}

/// Rings the terminal bell (BEL) on stdout. Write errors are ignored.
pub struct BellSoundPlayer<W: Write = io::Stdout> {
    out: W,
    muted: bool,
}

impl BellSoundPlayer {
    pub fn new(muted: bool) -> Self {
        Self::with_writer(io::stdout(), muted)
    }
}

impl<W: Write> BellSoundPlayer<W> {
    pub fn with_writer(out: W, muted: bool) -> Self {
        Self { out, muted }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write> SoundPlayer for BellSoundPlayer<W> {
    fn play(&mut self, cue: SoundCue) {
        if self.muted {
            return;
        }
        for _ in 0..bell_count(cue) {
            let _ = self.out.write_all(b"\x07");
        }
        let _ = self.out.flush();
    }
}
