//! Scoring module - combo multiplier and score keeping
//!
//! Rules:
//! - A match adds 0.5 to the multiplier (capped at 5.0), bumps the combo and
//!   awards `round(10 * multiplier)` points.
//! - A miss drops the multiplier to 1.0 and the combo to 0.
//! - While the decay timer runs, every 100ms the multiplier loses
//!   `0.075 * (1 + combo * 0.1) * 0.1`, never going below 1.0. The timer
//!   starts on the first match and runs until explicitly stopped.

use crate::types::{
    COMBO_DECAY_FACTOR, DECAY_TICK_MS, MULTIPLIER_DECAY_PER_SEC, MULTIPLIER_MAX, MULTIPLIER_MIN,
    MULTIPLIER_STEP, POINTS_PER_MATCH,
};

/// Points for one match at the given multiplier
pub fn points_for(multiplier: f64) -> u32 {
    (POINTS_PER_MATCH as f64 * multiplier).round() as u32
}

/// Multiplier lost per decay tick at the given combo
pub fn decay_per_tick(combo: u32) -> f64 {
    MULTIPLIER_DECAY_PER_SEC
        * (1.0 + combo as f64 * COMBO_DECAY_FACTOR)
        * (DECAY_TICK_MS as f64 / 1000.0)
}

/// Combo multiplier with its decay timer
#[derive(Debug, Clone, PartialEq)]
pub struct Multiplier {
    value: f64,
    combo: u32,
    /// Due time of the next decay tick; `None` while the timer is stopped.
    next_tick_ms: Option<u64>,
}

impl Multiplier {
    pub fn new() -> Self {
        Self {
            value: MULTIPLIER_MIN,
            combo: 0,
            next_tick_ms: None,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn decay_active(&self) -> bool {
        self.next_tick_ms.is_some()
    }

    /// Register a successful match and return the points it earns.
    ///
    /// Starts the decay timer if it is not running yet.
    pub fn on_match(&mut self, now_ms: u64) -> u32 {
        self.combo = self.combo.saturating_add(1);
        self.value = (self.value + MULTIPLIER_STEP).min(MULTIPLIER_MAX);
        if self.next_tick_ms.is_none() {
            self.next_tick_ms = Some(now_ms.saturating_add(DECAY_TICK_MS));
        }
        points_for(self.value)
    }

    /// Register a failed match. Returns the combo that was lost.
    ///
    /// The decay timer keeps running; it has no effect at the floor.
    pub fn on_miss(&mut self) -> u32 {
        let lost = self.combo;
        self.value = MULTIPLIER_MIN;
        self.combo = 0;
        lost
    }

    /// Apply a single decay tick
    pub fn tick(&mut self) {
        self.value = (self.value - decay_per_tick(self.combo)).max(MULTIPLIER_MIN);
    }

    /// Run every decay tick due at or before `now_ms`.
    ///
    /// Returns true if the value changed.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        let Some(due) = self.next_tick_ms else {
            return false;
        };
        if now_ms < due {
            return false;
        }

        let ticks = (now_ms - due) / DECAY_TICK_MS + 1;
        let before = self.value;
        for _ in 0..ticks {
            if self.value <= MULTIPLIER_MIN {
                break;
            }
            self.tick();
        }
        self.next_tick_ms = Some(due + ticks * DECAY_TICK_MS);
        self.value != before
    }

    /// Stop the decay timer (game over / reset)
    pub fn stop(&mut self) {
        self.next_tick_ms = None;
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::new()
    }
}

/// Score, match count and best score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    score: u32,
    matches: u32,
    high_score: u32,
}

impl ScoreBoard {
    pub fn new(high_score: u32) -> Self {
        Self {
            score: 0,
            matches: 0,
            high_score,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn matches(&self) -> u32 {
        self.matches
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Record one matched pair worth `points`.
    ///
    /// Returns true if the high score moved.
    pub fn award(&mut self, points: u32) -> bool {
        self.score = self.score.saturating_add(points);
        self.matches = self.matches.saturating_add(1);
        if self.score > self.high_score {
            self.high_score = self.score;
            return true;
        }
        false
    }

    /// Whether the current score is the best on record
    pub fn is_record(&self) -> bool {
        self.score > 0 && self.score >= self.high_score
    }

    /// Start a new game, keeping the high score
    pub fn reset(&mut self) {
        self.score = 0;
        self.matches = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_points_rounding() {
        assert_eq!(points_for(1.0), 10);
        assert_eq!(points_for(1.5), 15);
        assert_eq!(points_for(1.96), 20);
        assert_eq!(points_for(5.0), 50);
        assert_eq!(points_for(1.04), 10);
        assert_eq!(points_for(1.06), 11);
    }

    #[test]
    fn test_decay_rate_grows_with_combo() {
        assert!(approx(decay_per_tick(0), 0.0075));
        assert!(approx(decay_per_tick(10), 0.015));
        assert!(decay_per_tick(3) > decay_per_tick(2));
    }

    #[test]
    fn test_two_consecutive_matches() {
        let mut m = Multiplier::new();
        assert_eq!(m.on_match(0), 15);
        assert!(approx(m.value(), 1.5));
        assert_eq!(m.on_match(0), 20);
        assert!(approx(m.value(), 2.0));
        assert_eq!(m.combo(), 2);
        assert!(m.decay_active());
    }

    #[test]
    fn test_miss_resets() {
        let mut m = Multiplier::new();
        m.on_match(0);
        m.on_match(0);
        assert_eq!(m.on_miss(), 2);
        assert!(approx(m.value(), 1.0));
        assert_eq!(m.combo(), 0);
        // Timer keeps running after a miss.
        assert!(m.decay_active());
    }

    #[test]
    fn test_capped_at_five() {
        let mut m = Multiplier::new();
        for _ in 0..20 {
            m.on_match(0);
        }
        assert!(approx(m.value(), MULTIPLIER_MAX));
        assert_eq!(points_for(m.value()), 50);
    }

    #[test]
    fn test_advance_runs_due_ticks() {
        let mut m = Multiplier::new();
        m.on_match(1000);

        assert!(!m.advance(1099));
        assert!(approx(m.value(), 1.5));

        assert!(m.advance(1100));
        assert!(approx(m.value(), 1.5 - decay_per_tick(1)));

        // Three more ticks due at 1200, 1300, 1400.
        m.advance(1450);
        assert!(approx(m.value(), 1.5 - 4.0 * decay_per_tick(1)));
    }

    #[test]
    fn test_decay_floors_and_keeps_running() {
        let mut m = Multiplier::new();
        m.on_match(0);
        m.advance(60_000);
        assert!(approx(m.value(), MULTIPLIER_MIN));
        assert!(m.decay_active());
        assert!(!m.advance(60_100));
    }

    #[test]
    fn test_stop_freezes_value() {
        let mut m = Multiplier::new();
        m.on_match(0);
        m.stop();
        assert!(!m.advance(10_000));
        assert!(approx(m.value(), 1.5));
    }

    #[test]
    fn test_idle_timer_does_nothing() {
        let mut m = Multiplier::new();
        assert!(!m.decay_active());
        assert!(!m.advance(5_000));
    }

    #[test]
    fn test_scoreboard_high_score() {
        let mut s = ScoreBoard::new(20);
        assert!(!s.award(15));
        assert!(!s.is_record());
        assert!(s.award(20));
        assert_eq!(s.high_score(), 35);
        assert_eq!(s.matches(), 2);
        assert!(s.is_record());

        s.reset();
        assert_eq!(s.score(), 0);
        assert_eq!(s.high_score(), 35);
        assert!(!s.is_record());
    }
}
