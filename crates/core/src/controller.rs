//! Controller - binds a [`GameState`] to its ports.
//!
//! Owns the game plus a renderer, a sound player, a settings store and a clock.
//! Every entry point reads the clock once, advances the game to that time,
//! applies the request, dispatches raised events and re-renders on change.

use tracing::{debug, info};

use crate::game_state::{GameEvent, GameState, SelectOutcome};
use crate::ports::{Clock, Renderer, SettingsStore, SoundPlayer};
use crate::snapshot::GameSnapshot;
use crate::types::GameAction;

pub struct Controller<R, S, P, C> {
    game: GameState,
    renderer: R,
    sound: S,
    store: P,
    clock: C,
    sound_enabled: bool,
}

impl<R, S, P, C> Controller<R, S, P, C>
where
    R: Renderer,
    S: SoundPlayer,
    P: SettingsStore,
    C: Clock,
{
    /// Load settings, deal the first board and render it.
    pub fn new(seed: u64, renderer: R, sound: S, store: P, clock: C) -> Self {
        let high_score = store.load_high_score();
        let sound_enabled = store.load_sound_enabled();

        let mut game = GameState::new(seed, high_score);
        game.start();
        info!(seed, high_score, sound_enabled, "game started");

        let mut controller = Self {
            game,
            renderer,
            sound,
            store,
            clock,
            sound_enabled,
        };
        controller.render();
        controller
    }

    /// Apply a player action. Returns true if it had any effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        let now = self.clock.now_ms();
        let advanced = self.game.update(now);
        debug!(action = action.as_str(), now, "action");

        let applied = match action {
            GameAction::Select(index) => self.game.select(index, now) != SelectOutcome::Ignored,
            GameAction::Restart => {
                self.game.restart();
                true
            }
            GameAction::ToggleSound => {
                self.sound_enabled = !self.sound_enabled;
                self.store.save_sound_enabled(self.sound_enabled);
                debug!(enabled = self.sound_enabled, "sound toggled");
                true
            }
        };

        self.dispatch_events();
        if advanced || applied {
            self.render();
        }
        applied
    }

    /// Advance timers to the clock's current time. Returns true if a frame was drawn.
    pub fn update(&mut self) -> bool {
        let now = self.clock.now_ms();
        let changed = self.game.update(now);
        self.dispatch_events();
        if changed {
            self.render();
        }
        changed
    }

    /// Redraw unconditionally (e.g. after a terminal resize).
    pub fn refresh(&mut self) {
        self.render();
    }

    /// Stop timers before the session goes away.
    pub fn shutdown(&mut self) {
        self.game.stop();
        let _ = self.game.take_events();
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn sound(&self) -> &S {
        &self.sound
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = self.game.snapshot();
        snap.sound_enabled = self.sound_enabled;
        snap
    }

    fn dispatch_events(&mut self) {
        for event in self.game.take_events() {
            match event {
                GameEvent::Cue(cue) => {
                    if self.sound_enabled {
                        self.sound.play(cue);
                    }
                }
                GameEvent::HighScoreChanged(score) => self.store.save_high_score(score),
                GameEvent::GameOver {
                    score,
                    new_high_score,
                } => {
                    debug!(score, new_high_score, "game over dispatched");
                }
            }
        }
    }

    fn render(&mut self) {
        let snap = self.snapshot();
        self.renderer.render(&snap);
    }
}
