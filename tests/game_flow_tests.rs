//! Game flow scenarios - scoring, combos and the timed resolution chain

use pair_a_gone::core::{Board, GameEvent, GameState, Phase, ResolveStage, SelectOutcome};
use pair_a_gone::types::{SlotMark, SoundCue, MULTIPLIER_MIN, TOTAL_SLOTS};

fn cues(events: Vec<GameEvent>) -> Vec<SoundCue> {
    events
        .into_iter()
        .filter_map(|e| match e {
            GameEvent::Cue(c) => Some(c),
            _ => None,
        })
        .collect()
}

/// Match the pair at `(a, b)` at time `t` and run the whole resolution.
fn match_and_resolve(state: &mut GameState, a: usize, b: usize, t: u64) -> Vec<GameEvent> {
    assert_eq!(state.select(a, t), SelectOutcome::Selected);
    assert_eq!(state.select(b, t), SelectOutcome::Matched);
    state.update(t + 600);
    state.take_events()
}

#[test]
fn test_two_matches_then_a_miss() {
    // Two Mario pairs stacked in columns 0-1; after the first slide the second
    // pair moves up to slots 0/1 again.
    let board = Board::from_layout("00123 00412 34123 41234").unwrap();
    let mut state = GameState::with_board(5, 0, board);

    let first = cues(match_and_resolve(&mut state, 0, 1, 0));
    assert_eq!(state.score(), 15);
    assert!(!first.contains(&SoundCue::Combo));

    // Slide packs "123" from row 0 ahead of row 1, so the second Mario pair is
    // now at slots 3/4.
    assert_eq!(state.board().card(3), state.board().card(4));
    let second = cues(match_and_resolve(&mut state, 3, 4, 600));
    assert_eq!(state.score(), 35);
    assert_eq!(state.multiplier().combo(), 2);
    assert!(second.contains(&SoundCue::Combo));

    // Any non-adjacent pick is a miss.
    state.select(0, 2_000);
    assert_eq!(state.select(19, 2_000), SelectOutcome::Mismatched);
    let miss = cues(state.take_events());
    assert_eq!(
        miss,
        vec![SoundCue::Select, SoundCue::Invalid, SoundCue::ComboLost]
    );
    assert_eq!(state.multiplier().value(), MULTIPLIER_MIN);
    assert_eq!(state.multiplier().combo(), 0);
    assert_eq!(state.score(), 35);
}

#[test]
fn test_resolution_order_of_cues() {
    let board = Board::from_layout("00... ..... ..... .....").unwrap();
    let mut state = GameState::with_board(5, 100, board);

    state.select(0, 0);
    state.select(1, 0);
    assert_eq!(cues(state.take_events()), vec![SoundCue::Select, SoundCue::Match]);

    state.update(400);
    assert_eq!(cues(state.take_events()), vec![SoundCue::Slide]);
    state.update(500);
    assert_eq!(cues(state.take_events()), vec![SoundCue::Deal]);
}

#[test]
fn test_marks_follow_phases() {
    let board = Board::from_layout("00... ..... ..... .....").unwrap();
    let mut state = GameState::with_board(5, 0, board);

    state.select(0, 0);
    assert_eq!(state.marks()[0], SlotMark::Selected);
    state.select(1, 0);
    assert_eq!(state.marks()[0], SlotMark::Matched);
    assert_eq!(state.marks()[1], SlotMark::Matched);

    state.update(400);
    assert!(matches!(
        state.phase(),
        Phase::Resolving {
            stage: ResolveStage::Sliding,
            ..
        }
    ));
    assert!(state.marks().iter().all(|&m| m == SlotMark::Normal));
}

#[test]
fn test_board_without_pairs_ends_after_refill() {
    // No pair anywhere: the only way in is a prepared board, and the game only
    // notices at the end of a refill cycle. Match something first.
    let board = Board::from_layout("55012 34234 01401 23123").unwrap();
    let mut state = GameState::with_board(9, 0, board);

    let events = match_and_resolve(&mut state, 0, 1, 0);
    assert!(state.game_over());
    assert!(events.contains(&GameEvent::GameOver {
        score: 15,
        new_high_score: true
    }));
    assert!(!state.board().has_valid_move());
}

#[test]
fn test_matches_grow_type_pool() {
    let mut state = GameState::new(77, 0);
    state.start();
    let mut t = 0u64;
    while state.matches() < 5 && !state.game_over() {
        let (a, b) = state.board().find_valid_move().unwrap();
        match_and_resolve(&mut state, a, b, t);
        t += 1_000;
    }
    assert!(!state.game_over());
    assert_eq!(state.matches(), 5);
    assert_eq!(state.snapshot().type_count, 6);
}

#[test]
fn test_playthrough_keeps_board_full_between_turns() {
    let mut state = GameState::new(31337, 0);
    state.start();
    let mut t = 0u64;
    for _ in 0..50 {
        if state.game_over() {
            break;
        }
        let (a, b) = state.board().find_valid_move().unwrap();
        match_and_resolve(&mut state, a, b, t);
        t += 1_000;
        assert_eq!(state.board().occupied_count(), TOTAL_SLOTS);
    }
    assert!(state.score() >= 15);
    assert!(state.high_score() >= state.score());
}
