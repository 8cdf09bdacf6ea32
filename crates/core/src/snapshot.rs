use crate::game_state::Phase;
use crate::types::{Slot, SlotMark, BASE_TYPE_COUNT, MULTIPLIER_MIN, TOTAL_SLOTS};

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub slots: [Slot; TOTAL_SLOTS],
    pub marks: [SlotMark; TOTAL_SLOTS],
    pub selected: Option<usize>,
    pub phase: Phase,
    pub score: u32,
    pub matches: u32,
    pub high_score: u32,
    pub multiplier: f64,
    pub combo: u32,
    pub type_count: usize,
    pub game_over: bool,
    pub new_high_score: bool,
    pub sound_enabled: bool,
    pub episode_id: u32,
    pub seed: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.slots = [None; TOTAL_SLOTS];
        self.marks = [SlotMark::Normal; TOTAL_SLOTS];
        self.selected = None;
        self.phase = Phase::AwaitingFirst;
        self.score = 0;
        self.matches = 0;
        self.high_score = 0;
        self.multiplier = MULTIPLIER_MIN;
        self.combo = 0;
        self.type_count = BASE_TYPE_COUNT;
        self.game_over = false;
        self.new_high_score = false;
        self.sound_enabled = true;
        self.episode_id = 0;
        self.seed = 0;
    }

    /// Whether clicks would currently be accepted
    pub fn playable(&self) -> bool {
        !self.game_over && !matches!(self.phase, Phase::Resolving { .. })
    }

    /// Text offered for sharing on the game over screen.
    pub fn share_message(&self) -> String {
        format!(
            "I scored {} points with {} matches in Pair-a-Gone!",
            self.score, self.matches
        )
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            slots: [None; TOTAL_SLOTS],
            marks: [SlotMark::Normal; TOTAL_SLOTS],
            selected: None,
            phase: Phase::AwaitingFirst,
            score: 0,
            matches: 0,
            high_score: 0,
            multiplier: MULTIPLIER_MIN,
            combo: 0,
            type_count: BASE_TYPE_COUNT,
            game_over: false,
            new_high_score: false,
            sound_enabled: true,
            episode_id: 0,
            seed: 0,
        };
        s.clear();
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_message_format() {
        let snap = GameSnapshot {
            score: 235,
            matches: 12,
            ..GameSnapshot::default()
        };
        assert_eq!(
            snap.share_message(),
            "I scored 235 points with 12 matches in Pair-a-Gone!"
        );
    }

    #[test]
    fn resolving_is_not_playable() {
        let mut snap = GameSnapshot::default();
        assert!(snap.playable());
        snap.phase = Phase::Resolving {
            first: 0,
            second: 1,
            stage: crate::game_state::ResolveStage::Marking,
            due_ms: 400,
        };
        assert!(!snap.playable());
    }
}
