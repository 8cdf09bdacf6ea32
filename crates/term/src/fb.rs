//! Character-cell canvas the game view draws into.
//!
//! Coordinates are terminal columns and rows. Every write is clipped to the
//! canvas, so callers can place text near edges without bounds checks.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Foreground, background and the two attributes tiles use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    /// Same attributes on another background.
    pub const fn on(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const fn blank(style: CellStyle) -> Self {
        Self { ch: ' ', style }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(CellStyle::default())
    }
}

/// Row-major grid of styled cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn same_size(&self, other: &FrameBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Resize and blank every cell. The allocation is reused.
    pub fn reset(&mut self, width: u16, height: u16, style: CellStyle) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(width as usize * height as usize, Cell::blank(style));
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        (x < self.width && y < self.height)
            .then(|| self.cells[y as usize * self.width as usize + x as usize])
    }

    /// One row of cells; empty when `y` is past the bottom.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        if x < self.width && y < self.height {
            self.cells[y as usize * self.width as usize + x as usize] = Cell { ch, style };
        }
    }

    /// Write text left to right. Returns the number of columns used.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let mut used = 0u16;
        for ch in s.chars() {
            let cx = x.saturating_add(used);
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            used += 1;
        }
        used
    }

    /// Write text centred inside the span `[x, x + span)`.
    pub fn put_centered(&mut self, x: u16, span: u16, y: u16, s: &str, style: CellStyle) {
        let len = s.chars().count().min(u16::MAX as usize) as u16;
        self.put_str(x.saturating_add(span.saturating_sub(len) / 2), y, s, style);
    }

    /// Write a number in decimal without allocating. Returns the width written.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) -> u16 {
        let mut digits = [b'0'; 10];
        let mut n = value;
        let mut start = digits.len();
        loop {
            start -= 1;
            digits[start] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        let mut used = 0u16;
        for &d in &digits[start..] {
            self.put_char(x.saturating_add(used), y, d as char, style);
            used += 1;
        }
        used
    }

    /// Write a multiplier as `x<int>.<tenth>`. Returns the width written.
    pub fn put_multiplier(&mut self, x: u16, y: u16, value: f32, style: CellStyle) -> u16 {
        let tenths = (value.max(0.0) * 10.0).round() as u32;
        self.put_char(x, y, 'x', style);
        let mut used = 1 + self.put_u32(x.saturating_add(1), y, tenths / 10, style);
        self.put_char(x.saturating_add(used), y, '.', style);
        used += 1;
        used + self.put_u32(x.saturating_add(used), y, tenths % 10, style)
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for row in y..y.saturating_add(h).min(self.height) {
            for col in x..x.saturating_add(w).min(self.width) {
                self.put_char(col, row, ch, style);
            }
        }
    }

    /// Single-line box outline. Boxes smaller than 2x2 are skipped.
    pub fn draw_box(&mut self, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        for col in x.saturating_add(1)..right {
            self.put_char(col, y, '─', style);
            self.put_char(col, bottom, '─', style);
        }
        for row in y.saturating_add(1)..bottom {
            self.put_char(x, row, '│', style);
            self.put_char(right, row, '│', style);
        }
        self.put_char(x, y, '┌', style);
        self.put_char(right, y, '┐', style);
        self.put_char(x, bottom, '└', style);
        self.put_char(right, bottom, '┘', style);
    }

    /// The characters of one row, trailing spaces included.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|c| c.ch).collect()
    }
}
