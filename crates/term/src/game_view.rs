//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Card glyphs are double-width in most terminals, so cards are drawn as
//! two-letter labels on a per-type colour instead.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CardType, SlotMark, CARD_TYPE_COUNT, GRID_COLS, GRID_ROWS, TOTAL_SLOTS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the grid frame sits inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    pub start_x: u16,
    pub start_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

const LABELS: [&str; CARD_TYPE_COUNT] = ["MA", "MU", "FF", "ST", "CL", "LU", "GO", "BW", "BO", "YO"];

const CARD_COLORS: [Rgb; CARD_TYPE_COUNT] = [
    Rgb::new(220, 60, 60),
    Rgb::new(235, 120, 160),
    Rgb::new(255, 150, 40),
    Rgb::new(245, 215, 60),
    Rgb::new(170, 200, 235),
    Rgb::new(80, 200, 90),
    Rgb::new(150, 100, 60),
    Rgb::new(60, 150, 110),
    Rgb::new(200, 200, 215),
    Rgb::new(120, 220, 120),
];

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Label shown for a card.
pub fn card_label(card: CardType) -> &'static str {
    LABELS.get(card.ordinal()).copied().unwrap_or("??")
}

/// Colour used for a card's tile.
pub fn card_color(card: CardType) -> Rgb {
    CARD_COLORS
        .get(card.ordinal())
        .copied()
        .unwrap_or(Rgb::new(180, 180, 180))
}

/// A lightweight terminal renderer for the card grid.
pub struct GameView {
    /// Slot width in terminal columns, including one column of gap.
    cell_w: u16,
    /// Slot height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 7,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn layout(&self, viewport: Viewport) -> FrameLayout {
        let frame_w = (GRID_COLS as u16) * self.cell_w + 2;
        let frame_h = (GRID_ROWS as u16) * self.cell_h + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        FrameLayout {
            start_x,
            start_y,
            frame_w,
            frame_h,
        }
    }

    /// Slot under terminal position `(x, y)`, if any.
    pub fn slot_at(&self, viewport: Viewport, x: u16, y: u16) -> Option<usize> {
        let l = self.layout(viewport);
        let ox = l.start_x + 1;
        let oy = l.start_y + 1;
        if x < ox || y < oy {
            return None;
        }
        let col = ((x - ox) / self.cell_w) as usize;
        let row = ((y - oy) / self.cell_h) as usize;
        if col >= GRID_COLS || row >= GRID_ROWS {
            return None;
        }
        Some(row * GRID_COLS + col)
    }

    /// Render a frame into an existing framebuffer.
    ///
    /// `cursor` is the keyboard cursor slot, drawn as brackets around the tile.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.reset(viewport.width, viewport.height, CellStyle::default());

        let l = self.layout(viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let bg = CellStyle::new(Rgb::new(80, 80, 90), BOARD_BG);

        fb.fill_rect(
            l.start_x + 1,
            l.start_y + 1,
            l.frame_w.saturating_sub(2),
            l.frame_h.saturating_sub(2),
            ' ',
            bg,
        );
        fb.draw_box(l.start_x, l.start_y, l.frame_w, l.frame_h, border);

        for index in 0..TOTAL_SLOTS {
            match snap.slots[index] {
                Some(card) => self.draw_card(fb, &l, index, card, snap.marks[index]),
                None => self.draw_empty(fb, &l, index),
            }
        }

        if let Some(c) = cursor.filter(|&c| c < TOTAL_SLOTS) {
            self.draw_cursor(fb, &l, c);
        }

        self.draw_side_panel(fb, snap, viewport, &l);

        if snap.game_over {
            self.draw_game_over(fb, snap, &l);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, None, viewport, &mut fb);
        fb
    }

    fn tile_origin(&self, l: &FrameLayout, index: usize) -> (u16, u16) {
        let row = (index / GRID_COLS) as u16;
        let col = (index % GRID_COLS) as u16;
        (
            l.start_x + 1 + col * self.cell_w,
            l.start_y + 1 + row * self.cell_h,
        )
    }

    fn draw_card(
        &self,
        fb: &mut FrameBuffer,
        l: &FrameLayout,
        index: usize,
        card: CardType,
        mark: SlotMark,
    ) {
        let (px, py) = self.tile_origin(l, index);
        let tile_w = self.cell_w - 1;

        let base = card_color(card);
        let (fg, bg) = match mark {
            SlotMark::Normal => (Rgb::new(20, 20, 20), base),
            SlotMark::Selected => (Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)),
            SlotMark::Matched => (Rgb::new(255, 255, 255), Rgb::new(40, 160, 60)),
            SlotMark::Invalid => (Rgb::new(255, 255, 255), Rgb::new(190, 30, 30)),
        };
        let mut style = CellStyle::new(fg, bg).bold();
        if mark == SlotMark::Matched {
            style = style.dim();
        }

        fb.fill_rect(px, py, tile_w, self.cell_h, ' ', style);
        let label_x = px + tile_w.saturating_sub(2) / 2;
        let label_y = py + self.cell_h / 2;
        fb.put_str(label_x, label_y, card_label(card), style);
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, l: &FrameLayout, index: usize) {
        let (px, py) = self.tile_origin(l, index);
        let style = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
        fb.put_char(px + (self.cell_w - 1) / 2, py + self.cell_h / 2, '·', style);
    }

    fn draw_cursor(&self, fb: &mut FrameBuffer, l: &FrameLayout, index: usize) {
        let (px, py) = self.tile_origin(l, index);
        let y = py + self.cell_h / 2;
        let keep_bg = |fb: &FrameBuffer, x: u16| fb.get(x, y).map(|c| c.style.bg).unwrap_or(BOARD_BG);

        let left_bg = keep_bg(fb, px);
        let right_bg = keep_bg(fb, px + self.cell_w - 2);
        let arrow = CellStyle::new(Rgb::new(255, 255, 255), BOARD_BG).bold();
        fb.put_char(px, y, '▶', arrow.on(left_bg));
        fb.put_char(px + self.cell_w - 2, y, '◀', arrow.on(right_bg));
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        l: &FrameLayout,
    ) {
        let panel_x = l.start_x.saturating_add(l.frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = l.start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MATCHES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.matches, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.high_score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MULTIPLIER", label);
        y = y.saturating_add(1);
        fb.put_multiplier(panel_x, y, snap.multiplier as f32, value);
        if snap.combo >= 2 && panel_w >= 16 {
            let hot = CellStyle::new(Rgb::new(255, 200, 60), PANEL_BG).bold();
            fb.put_str(panel_x + 7, y, "COMBO", hot);
            fb.put_u32(panel_x + 13, y, snap.combo, hot);
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SOUND", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, if snap.sound_enabled { "ON" } else { "OFF" }, value);
        y = y.saturating_add(2);

        if y < viewport.height {
            let dim = value.dim();
            fb.put_str(panel_x, y, "enter pick  r new", dim);
            fb.put_str(panel_x, y.saturating_add(1), "m sound  q quit", dim);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, l: &FrameLayout) {
        let title = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let gold = CellStyle::new(Rgb::new(255, 210, 60), PANEL_BG).bold();
        let note = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mid_y = l.start_y.saturating_add(l.frame_h / 2);
        let top = mid_y.saturating_sub(1);

        fb.put_centered(l.start_x, l.frame_w, top, "GAME OVER", title);
        if snap.new_high_score {
            fb.put_centered(l.start_x, l.frame_w, top + 1, "NEW HIGH SCORE!", gold);
        }
        fb.put_centered(l.start_x, l.frame_w, top + 2, "press r to play again", note);

        let below = l.start_y.saturating_add(l.frame_h);
        let share = snap.share_message();
        let x = l.start_x;
        fb.put_str(x, below, &share, note);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CARD_TYPES;

    #[test]
    fn labels_cover_roster() {
        for (i, card) in CARD_TYPES.iter().enumerate() {
            assert_eq!(card_label(*card), LABELS[i]);
            assert_eq!(card_label(*card).chars().count(), 2);
        }
    }

    #[test]
    fn slot_at_inverts_tile_origin() {
        let view = GameView::default();
        let vp = Viewport::new(80, 24);
        let l = view.layout(vp);
        for index in 0..TOTAL_SLOTS {
            let (x, y) = view.tile_origin(&l, index);
            assert_eq!(view.slot_at(vp, x, y), Some(index));
            assert_eq!(view.slot_at(vp, x + 3, y + 2), Some(index));
        }
        assert_eq!(view.slot_at(vp, l.start_x, l.start_y), None);
        assert_eq!(view.slot_at(vp, 79, 23), None);
    }
}
