//! TerminalRenderer: owns the real terminal while a game session runs.
//!
//! Each frame is encoded against the frame shown before it, so a card flip
//! only rewrites the tiles that changed. Without a usable previous frame
//! (first draw, resize) the screen is cleared and every row is sent.
//!
//! The terminal is restored by [`TerminalRenderer::exit`], on drop, and by the
//! hook from [`install_panic_hook`] when a panic aborts the process.

use std::io::{self, Write};
use std::ops::Range;
use std::sync::Once;

use anyhow::Result;

use crossterm::{
    cursor, event,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    shown: Option<FrameBuffer>,
    buf: Vec<u8>,
    active: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            buf: Vec::with_capacity(16 * 1024),
            active: false,
        }
    }

    /// Raw mode, alternate screen, mouse reporting, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(event::EnableMouseCapture)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.write_buf()?;
        self.shown = None;
        Ok(())
    }

    /// Undo [`enter`](Self::enter). Does nothing when the terminal is not held.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        restore_terminal(&mut self.stdout)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Drop the remembered frame so the next present redraws everything.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Show `fb` on the terminal.
    ///
    /// The buffer is exchanged with the one shown before, so on return `fb`
    /// holds stale cells. The game view resets it before every draw.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let shown = self.shown.take().filter(|prev| prev.same_size(fb));

        self.buf.clear();
        encode_frame(shown.as_ref(), fb, &mut self.buf)?;
        self.write_buf()?;

        let mut old = shown.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
        std::mem::swap(&mut old, fb);
        self.shown = Some(old);
        Ok(())
    }

    fn write_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Put the terminal back the way a shell expects it.
///
/// Safe to call when the terminal was never entered.
pub fn restore_terminal(out: &mut impl Write) -> Result<()> {
    let mut seq = Vec::with_capacity(64);
    queue_restore(&mut seq)?;
    out.write_all(&seq)?;
    out.flush()?;
    terminal::disable_raw_mode()?;
    Ok(())
}

/// Restore the terminal before the panic message is printed.
///
/// Release builds abort on panic, so destructors never get a chance to run.
pub fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal(&mut io::stdout());
            previous(info);
        }));
    });
}

fn queue_restore(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(terminal::EnableLineWrap)?;
    out.queue(cursor::Show)?;
    out.queue(event::DisableMouseCapture)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Encode `next` as terminal commands.
///
/// With `shown` of the same size only changed runs are written; otherwise the
/// screen is cleared and every row is written.
fn encode_frame(shown: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let shown = shown.filter(|prev| prev.same_size(next));
    if shown.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut pen: Option<CellStyle> = None;
    for y in 0..next.height() {
        let row = next.row(y);
        let old = shown.map(|prev| prev.row(y));
        let mut from = 0;
        while let Some(run) = changed_run(old, row, from) {
            out.queue(cursor::MoveTo(run.start as u16, y))?;
            for cell in &row[run.clone()] {
                if pen != Some(cell.style) {
                    set_pen(out, cell.style)?;
                    pen = Some(cell.style);
                }
                out.queue(Print(cell.ch))?;
            }
            from = run.end;
        }
    }

    if pen.is_some() {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

/// Next run of cells at or after `from` that differ from `old`.
///
/// With no old row the whole remainder is one run.
fn changed_run(old: Option<&[Cell]>, row: &[Cell], from: usize) -> Option<Range<usize>> {
    let differs = |x: usize| old.map_or(true, |o| o.get(x) != Some(&row[x]));
    let start = (from..row.len()).find(|&x| differs(x))?;
    let end = (start + 1..row.len())
        .find(|&x| !differs(x))
        .unwrap_or(row.len());
    Some(start..end)
}

fn set_pen(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    // SGR reset also clears colours, so it goes first.
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    out.queue(SetForegroundColor(color(style.fg)))?;
    out.queue(SetBackgroundColor(color(style.bg)))?;
    Ok(())
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(shown: Option<&FrameBuffer>, next: &FrameBuffer) -> String {
        let mut out = Vec::new();
        encode_frame(shown, next, &mut out).unwrap();
        String::from_utf8_lossy(&out).into_owned()
    }

    #[test]
    fn first_frame_clears_and_writes_every_label() {
        let mut fb = FrameBuffer::new(4, 2);
        let style = CellStyle::default();
        fb.put_str(0, 0, "MA", style);
        fb.put_str(0, 1, "LU", style);

        let text = encode(None, &fb);
        assert!(text.contains("\x1b[2J"));
        assert!(text.contains("MA"));
        assert!(text.contains("LU"));
    }

    #[test]
    fn unchanged_frame_encodes_nothing() {
        let mut fb = FrameBuffer::new(6, 3);
        fb.put_str(1, 1, "GO", CellStyle::default());
        assert!(encode(Some(&fb.clone()), &fb).is_empty());
    }

    #[test]
    fn changed_tile_writes_only_its_run() {
        let style = CellStyle::default();
        let shown = FrameBuffer::new(8, 2);
        let mut next = shown.clone();
        next.put_str(2, 1, "YO", style);

        let text = encode(Some(&shown), &next);
        assert!(!text.contains("\x1b[2J"));
        // Row 2, column 3 in 1-based terminal coordinates.
        assert!(text.contains("\x1b[2;3H"));
        assert!(text.contains("YO"));
    }

    #[test]
    fn size_change_falls_back_to_full_redraw() {
        let shown = FrameBuffer::new(4, 2);
        let next = FrameBuffer::new(5, 2);
        assert!(encode(Some(&shown), &next).contains("\x1b[2J"));
    }

    #[test]
    fn runs_coalesce_adjacent_cells() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(6, 1);
        let mut b = a.clone();
        b.put_str(1, 0, "XXX", style);
        b.put_char(5, 0, 'Y', style);

        let old = Some(a.row(0));
        let row = b.row(0);
        assert_eq!(changed_run(old, row, 0), Some(1..4));
        assert_eq!(changed_run(old, row, 4), Some(5..6));
        assert_eq!(changed_run(old, row, 6), None);
        assert_eq!(changed_run(None, row, 2), Some(2..6));
    }

    #[test]
    fn restore_sequence_leaves_alternate_screen() {
        let mut seq = Vec::new();
        queue_restore(&mut seq).unwrap();
        let text = String::from_utf8_lossy(&seq);
        assert!(text.contains("\x1b[?25h"));
        assert!(text.contains("\x1b[?1049l"));
    }

    #[test]
    fn exit_without_enter_is_a_no_op() {
        let mut term = TerminalRenderer::new();
        assert!(!term.is_active());
        term.exit().unwrap();
        assert!(!term.is_active());
    }
}
