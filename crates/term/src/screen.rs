//! TermScreen: the terminal front-end behind the core `Renderer` port.
//!
//! Holds the view, a reusable framebuffer and the keyboard cursor. Draw errors
//! are logged and swallowed so a broken pipe never takes the game down.

use anyhow::Result;
use tracing::warn;

use crate::core::{GameSnapshot, Renderer};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

pub struct TermScreen {
    out: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
    viewport: Viewport,
    cursor: Option<usize>,
}

impl TermScreen {
    pub fn new(view: GameView, viewport: Viewport) -> Self {
        Self {
            out: TerminalRenderer::new(),
            view,
            fb: FrameBuffer::new(viewport.width, viewport.height),
            viewport,
            cursor: None,
        }
    }

    /// Switch the terminal into game mode (raw, alternate screen, mouse).
    pub fn enter(&mut self) -> Result<()> {
        self.out.enter()
    }

    /// Restore the terminal.
    pub fn exit(&mut self) -> Result<()> {
        self.out.exit()
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::new(width, height);
        self.out.invalidate();
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_cursor(&mut self, cursor: Option<usize>) {
        self.cursor = cursor;
    }

    /// Slot under a mouse position.
    pub fn slot_at(&self, x: u16, y: u16) -> Option<usize> {
        self.view.slot_at(self.viewport, x, y)
    }
}

impl Renderer for TermScreen {
    fn render(&mut self, snapshot: &GameSnapshot) {
        self.view
            .render_into(snapshot, self.cursor, self.viewport, &mut self.fb);
        if let Err(err) = self.out.present(&mut self.fb) {
            warn!(error = %err, "terminal draw failed");
        }
    }
}
