//! Controller tests - ports wired to recording fakes and a real settings file

use pair_a_gone::adapter::FileSettingsStore;
use pair_a_gone::core::{
    Controller, ManualClock, MemorySettingsStore, RecordingRenderer, RecordingSound,
    SettingsStore,
};
use pair_a_gone::types::{GameAction, SoundCue};

#[test]
fn test_high_score_written_to_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let clock = ManualClock::new(0);

    let mut c = Controller::new(
        11,
        RecordingRenderer::default(),
        RecordingSound::default(),
        FileSettingsStore::new(&path),
        clock.clone(),
    );

    let (a, b) = c.game().board().find_valid_move().unwrap();
    c.apply_action(GameAction::Select(a));
    c.apply_action(GameAction::Select(b));
    clock.advance(600);
    c.update();

    let score = c.game().score();
    assert!(score >= 15);

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["pairAGoneHighScore"], score);

    // A second session picks the stored best up.
    let again = Controller::new(
        12,
        RecordingRenderer::default(),
        RecordingSound::default(),
        FileSettingsStore::new(&path),
        ManualClock::new(0),
    );
    assert_eq!(again.game().high_score(), score);
}

#[test]
fn test_sound_setting_round_trips_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut c = Controller::new(
        3,
        RecordingRenderer::default(),
        RecordingSound::default(),
        FileSettingsStore::new(&path),
        ManualClock::new(0),
    );
    assert!(c.sound_enabled());
    c.apply_action(GameAction::ToggleSound);

    let store = FileSettingsStore::new(&path);
    assert!(!store.load_sound_enabled());
    assert_eq!(store.load_high_score(), 0);
}

#[test]
fn test_cues_reach_the_sound_port_in_order() {
    let clock = ManualClock::new(0);
    let mut c = Controller::new(
        99,
        RecordingRenderer::default(),
        RecordingSound::default(),
        MemorySettingsStore::default(),
        clock.clone(),
    );

    let (a, b) = c.game().board().find_valid_move().unwrap();
    c.apply_action(GameAction::Select(a));
    c.apply_action(GameAction::Select(b));
    clock.advance(400);
    c.update();
    clock.advance(100);
    c.update();

    assert_eq!(
        c.sound().played,
        vec![
            SoundCue::Select,
            SoundCue::Match,
            SoundCue::Slide,
            SoundCue::Deal
        ]
    );
}

#[test]
fn test_input_locked_while_resolving() {
    let clock = ManualClock::new(0);
    let mut c = Controller::new(
        5,
        RecordingRenderer::default(),
        RecordingSound::default(),
        MemorySettingsStore::default(),
        clock.clone(),
    );

    let (a, b) = c.game().board().find_valid_move().unwrap();
    c.apply_action(GameAction::Select(a));
    c.apply_action(GameAction::Select(b));
    assert!(c.game().is_processing());

    clock.advance(100);
    assert!(!c.apply_action(GameAction::Select(a)));
    assert!(!c.renderer().last.unwrap().playable());

    clock.advance(500);
    c.update();
    assert!(!c.game().is_processing());
    assert_eq!(
        c.renderer().last.unwrap().playable(),
        !c.game().game_over()
    );
}

#[test]
fn test_restart_keeps_best_and_clears_score() {
    let clock = ManualClock::new(0);
    let mut c = Controller::new(
        8,
        RecordingRenderer::default(),
        RecordingSound::default(),
        MemorySettingsStore::default(),
        clock.clone(),
    );
    let (a, b) = c.game().board().find_valid_move().unwrap();
    c.apply_action(GameAction::Select(a));
    c.apply_action(GameAction::Select(b));
    clock.advance(600);
    c.update();
    let best = c.game().high_score();

    c.apply_action(GameAction::Restart);
    let snap = c.renderer().last.unwrap();
    assert_eq!(snap.score, 0);
    assert_eq!(snap.matches, 0);
    assert_eq!(snap.high_score, best);
    assert_eq!(c.store().high_score, best);
}
