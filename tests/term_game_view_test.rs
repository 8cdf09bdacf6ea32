use pair_a_gone::core::{Board, GameState};
use pair_a_gone::term::{card_color, AnchorY, GameView, Viewport};
use pair_a_gone::types::{SlotMark, CARD_TYPES};

fn all_text(fb: &pair_a_gone::term::FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1, 0).snapshot();
    let view = GameView::default();

    // 5 slots * 7 columns + border = 37 wide, 4 * 3 rows + border = 14 tall.
    let fb = view.render(&snap, Viewport::new(37, 14));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(36, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 13).unwrap().ch, '└');
    assert_eq!(fb.get(36, 13).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_card_label_in_type_colour() {
    let board = Board::from_layout("3.... ..... ..... .....").unwrap();
    let snap = GameState::with_board(1, 0, board).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(37, 14));

    // Slot 0 tile spans x 1..=6, y 1..=3; the label sits on the middle row.
    assert_eq!(fb.get(3, 2).unwrap().ch, 'S');
    assert_eq!(fb.get(4, 2).unwrap().ch, 'T');
    assert_eq!(fb.get(1, 1).unwrap().style.bg, card_color(CARD_TYPES[3]));
    // Empty slot 1 shows a dot.
    assert_eq!(fb.get(11, 2).unwrap().ch, '·');
}

#[test]
fn term_view_highlights_selected_and_invalid() {
    let board = Board::from_layout("01... ..... ..... .....").unwrap();
    let mut snap = GameState::with_board(1, 0, board).snapshot();
    snap.marks[0] = SlotMark::Selected;
    snap.marks[1] = SlotMark::Invalid;

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(37, 14));
    let selected = fb.get(1, 1).unwrap().style.bg;
    let invalid = fb.get(8, 1).unwrap().style.bg;
    assert_ne!(selected, card_color(CARD_TYPES[0]));
    assert_ne!(invalid, card_color(CARD_TYPES[1]));
    assert_ne!(selected, invalid);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut gs = GameState::new(1, 0);
    gs.start();
    let mut snap = gs.snapshot();
    snap.score = 1234;
    snap.multiplier = 2.5;
    snap.sound_enabled = false;

    let fb = GameView::default().render(&snap, Viewport::new(80, 20));
    let all = all_text(&fb);
    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("MATCHES"));
    assert!(all.contains("BEST"));
    assert!(all.contains("x2.5"));
    assert!(all.contains("OFF"));
}

#[test]
fn term_view_game_over_overlay() {
    let mut snap = GameState::new(1, 0).snapshot();
    snap.game_over = true;
    snap.new_high_score = true;
    snap.score = 235;
    snap.matches = 12;

    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    let all = all_text(&fb);
    assert!(all.contains("GAME OVER"));
    assert!(all.contains("NEW HIGH SCORE!"));
    assert!(all.contains("I scored 235 points with 12 matches in Pair-a-Gone!"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameState::new(1, 0).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(37, 30));

    // start_y = (30 - 14) / 2 = 8.
    assert_eq!(fb.get(0, 8).unwrap().ch, '┌');
}

#[test]
fn term_view_hit_test_matches_drawing() {
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let layout = view.layout(vp);

    // Centre of the last tile.
    let x = layout.start_x + 1 + 4 * 7 + 3;
    let y = layout.start_y + 1 + 3 * 3 + 1;
    assert_eq!(view.slot_at(vp, x, y), Some(19));
    assert_eq!(view.slot_at(vp, 0, 0), None);
}
