//! Game state module - manages the complete game state
//!
//! This module ties together the board, RNG, match judge and scoring. It owns
//! the turn state machine:
//!
//! ```text
//! AwaitingFirst --select--> AwaitingSecond --reselect/mismatch--> AwaitingFirst
//!                                 |
//!                               match
//!                                 v
//!     Resolving(Marking) -400ms-> Resolving(Sliding) -100ms-> Resolving(Refilling) -100ms-+
//!                                                                                         |
//!             AwaitingFirst <------------------- has_valid_move ---------------------------+
//!             GameOver      <------------------- no valid move ----------------------------+
//! ```
//!
//! Time is passed in by the caller (`now_ms`); nothing here reads a clock, so the
//! resolution chain and the multiplier decay can be driven step by step in tests.

use tracing::{debug, info};

use crate::board::Board;
use crate::judge::{judge, MatchOutcome};
use crate::rng::GameRng;
use crate::scoring::{Multiplier, ScoreBoard};
use crate::snapshot::GameSnapshot;
use crate::type_pool::{available_types, type_count};
use crate::types::*;

/// Stage of a running match resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolveStage {
    /// Matched cards are shown marked; removal, scoring and slide happen when due.
    Marking,
    /// Cards have slid; empty slots are refilled when due.
    Sliding,
    /// Board is refilled; the valid-move check runs when due.
    Refilling,
}

/// Turn phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    AwaitingFirst,
    AwaitingSecond {
        selected: usize,
    },
    /// Input is locked until the sequence completes.
    Resolving {
        first: usize,
        second: usize,
        stage: ResolveStage,
        due_ms: u64,
    },
    GameOver,
}

/// What a selection did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Empty slot, out of range, input locked or game over.
    Ignored,
    Selected,
    Deselected,
    Matched,
    Mismatched,
}

/// Side effects for the outside world, drained by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Cue(SoundCue),
    /// The best score moved and should be persisted.
    HighScoreChanged(u32),
    GameOver { score: u32, new_high_score: bool },
}

/// Flagged mismatched pair and when the flag clears
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InvalidFlash {
    first: usize,
    second: usize,
    until_ms: u64,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    rng: GameRng,
    phase: Phase,
    scores: ScoreBoard,
    multiplier: Multiplier,
    invalid: Option<InvalidFlash>,
    /// Cue scheduled for later (the high score fanfare).
    pending_cue: Option<(SoundCue, u64)>,
    events: Vec<GameEvent>,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    started: bool,
    new_high_score: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed and stored high score
    pub fn new(seed: u64, high_score: u32) -> Self {
        Self {
            board: Board::new(),
            rng: GameRng::new(seed),
            phase: Phase::AwaitingFirst,
            scores: ScoreBoard::new(high_score),
            multiplier: Multiplier::new(),
            invalid: None,
            pending_cue: None,
            events: Vec::new(),
            episode_id: 0,
            started: false,
            new_high_score: false,
        }
    }

    /// Create a started game on a prepared board.
    ///
    /// The board is taken as is, even if it has no valid move.
    pub fn with_board(seed: u64, high_score: u32, board: Board) -> Self {
        let mut state = Self::new(seed, high_score);
        state.board = board;
        state.started = true;
        state
    }

    /// Deal the first board
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.deal_until_playable();
    }

    /// Throw away the current game and deal a new one.
    ///
    /// The new episode is seeded from the old RNG stream, so a run of games is
    /// still reproducible from the first seed. The high score is kept.
    pub fn restart(&mut self) {
        self.multiplier.stop();
        let seed = self.rng.next_seed();
        self.rng = GameRng::new(seed);
        self.multiplier = Multiplier::new();
        self.scores.reset();
        self.phase = Phase::AwaitingFirst;
        self.invalid = None;
        self.pending_cue = None;
        self.new_high_score = false;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.started = true;
        self.deal_until_playable();
        info!(episode = self.episode_id, seed, "game restarted");
    }

    /// Stop timers. Called when the session is torn down.
    pub fn stop(&mut self) {
        self.multiplier.stop();
        self.pending_cue = None;
    }

    fn deal_until_playable(&mut self) {
        let types = available_types(self.scores.matches());
        let mut attempts = 0u32;
        loop {
            self.board.deal(types, &mut self.rng);
            attempts += 1;
            if self.board.has_valid_move() {
                break;
            }
        }
        debug!(attempts, "dealt board");
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Whether a match resolution holds the input lock
    pub fn is_processing(&self) -> bool {
        matches!(self.phase, Phase::Resolving { .. })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected(&self) -> Option<usize> {
        match self.phase {
            Phase::AwaitingSecond { selected } => Some(selected),
            _ => None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.scores.score()
    }

    pub fn matches(&self) -> u32 {
        self.scores.matches()
    }

    pub fn high_score(&self) -> u32 {
        self.scores.high_score()
    }

    pub fn multiplier(&self) -> &Multiplier {
        &self.multiplier
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn new_high_score(&self) -> bool {
        self.new_high_score
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Take all events raised since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn cue(&mut self, cue: SoundCue) {
        self.events.push(GameEvent::Cue(cue));
    }

    /// Handle a click on slot `index`
    pub fn select(&mut self, index: usize, now_ms: u64) -> SelectOutcome {
        if !self.started || !self.board.is_occupied(index) {
            return SelectOutcome::Ignored;
        }

        let outcome = match self.phase {
            Phase::Resolving { .. } | Phase::GameOver => SelectOutcome::Ignored,
            Phase::AwaitingFirst => {
                self.phase = Phase::AwaitingSecond { selected: index };
                self.cue(SoundCue::Select);
                SelectOutcome::Selected
            }
            Phase::AwaitingSecond { selected } => match judge(&self.board, selected, index) {
                None => SelectOutcome::Ignored,
                Some(MatchOutcome::Reselect) => {
                    self.phase = Phase::AwaitingFirst;
                    SelectOutcome::Deselected
                }
                Some(MatchOutcome::Match) => {
                    self.phase = Phase::Resolving {
                        first: selected,
                        second: index,
                        stage: ResolveStage::Marking,
                        due_ms: now_ms.saturating_add(MATCH_ANIMATION_MS),
                    };
                    self.cue(SoundCue::Match);
                    SelectOutcome::Matched
                }
                Some(MatchOutcome::Mismatch) => {
                    let lost = self.multiplier.on_miss();
                    self.cue(SoundCue::Invalid);
                    if lost >= COMBO_CUE_THRESHOLD {
                        self.cue(SoundCue::ComboLost);
                    }
                    self.invalid = Some(InvalidFlash {
                        first: selected,
                        second: index,
                        until_ms: now_ms.saturating_add(INVALID_FLASH_MS),
                    });
                    self.phase = Phase::AwaitingFirst;
                    SelectOutcome::Mismatched
                }
            },
        };

        debug!(index, ?outcome, "select");
        outcome
    }

    /// Advance timers to `now_ms`.
    ///
    /// Runs every resolution stage that has come due (each stage is scheduled
    /// from the previous stage's due time, not from `now_ms`), expires the
    /// mismatch flash, fires scheduled cues and applies multiplier decay.
    /// Returns true if anything visible changed.
    pub fn update(&mut self, now_ms: u64) -> bool {
        if !self.started {
            return false;
        }

        let mut changed = false;

        while let Phase::Resolving {
            first,
            second,
            stage,
            due_ms,
        } = self.phase
        {
            if now_ms < due_ms {
                break;
            }
            self.run_stage(first, second, stage, due_ms);
            changed = true;
        }

        if let Some(flash) = self.invalid {
            if now_ms >= flash.until_ms {
                self.invalid = None;
                changed = true;
            }
        }

        if let Some((cue, due)) = self.pending_cue {
            if now_ms >= due {
                self.pending_cue = None;
                self.cue(cue);
            }
        }

        changed |= self.multiplier.advance(now_ms);
        changed
    }

    fn run_stage(&mut self, first: usize, second: usize, stage: ResolveStage, due_ms: u64) {
        match stage {
            ResolveStage::Marking => {
                self.board.take(first);
                self.board.take(second);

                self.multiplier.advance(due_ms);
                let points = self.multiplier.on_match(due_ms);
                if self.scores.award(points) {
                    self.events
                        .push(GameEvent::HighScoreChanged(self.scores.high_score()));
                }
                if self.multiplier.combo() >= COMBO_CUE_THRESHOLD {
                    self.cue(SoundCue::Combo);
                }

                self.board.slide();
                self.cue(SoundCue::Slide);

                debug!(
                    points,
                    score = self.scores.score(),
                    combo = self.multiplier.combo(),
                    "pair resolved"
                );

                self.phase = Phase::Resolving {
                    first,
                    second,
                    stage: ResolveStage::Sliding,
                    due_ms: due_ms + SLIDE_PAUSE_MS,
                };
            }
            ResolveStage::Sliding => {
                let types = available_types(self.scores.matches());
                self.board.fill_empty(types, &mut self.rng);
                self.cue(SoundCue::Deal);

                self.phase = Phase::Resolving {
                    first,
                    second,
                    stage: ResolveStage::Refilling,
                    due_ms: due_ms + REFILL_PAUSE_MS,
                };
            }
            ResolveStage::Refilling => {
                if self.board.has_valid_move() {
                    self.phase = Phase::AwaitingFirst;
                } else {
                    self.end_game(due_ms);
                }
            }
        }
    }

    fn end_game(&mut self, now_ms: u64) {
        self.phase = Phase::GameOver;
        self.multiplier.stop();
        self.invalid = None;
        self.new_high_score = self.scores.is_record();

        self.cue(SoundCue::GameOver);
        if self.new_high_score {
            self.pending_cue = Some((
                SoundCue::HighScore,
                now_ms.saturating_add(HIGH_SCORE_CUE_DELAY_MS),
            ));
        }
        self.events.push(GameEvent::GameOver {
            score: self.scores.score(),
            new_high_score: self.new_high_score,
        });

        info!(
            score = self.scores.score(),
            matches = self.scores.matches(),
            new_high_score = self.new_high_score,
            "game over"
        );
    }

    /// Visual state of every slot
    pub fn marks(&self) -> [SlotMark; TOTAL_SLOTS] {
        let mut marks = [SlotMark::Normal; TOTAL_SLOTS];

        if let Some(flash) = self.invalid {
            marks[flash.first] = SlotMark::Invalid;
            marks[flash.second] = SlotMark::Invalid;
        }

        match self.phase {
            Phase::AwaitingSecond { selected } => marks[selected] = SlotMark::Selected,
            Phase::Resolving {
                first,
                second,
                stage: ResolveStage::Marking,
                ..
            } => {
                marks[first] = SlotMark::Matched;
                marks[second] = SlotMark::Matched;
            }
            _ => {}
        }

        marks
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.slots = *self.board.slots();
        out.marks = self.marks();
        out.selected = self.selected();
        out.phase = self.phase;
        out.score = self.scores.score();
        out.matches = self.scores.matches();
        out.high_score = self.scores.high_score();
        out.multiplier = self.multiplier.value();
        out.combo = self.multiplier.combo();
        out.type_count = type_count(self.scores.matches());
        out.game_over = self.game_over();
        out.new_high_score = self.new_high_score;
        out.episode_id = self.episode_id;
        out.seed = self.rng.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1, 0)
    }
}
