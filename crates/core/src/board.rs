//! Board module - manages the card grid
//!
//! The board is a 5x4 grid where each slot can be empty or hold a card.
//! Uses a flat array (row-major, `row * GRID_COLS + col`) for zero-allocation
//! scans. Adjacency is the 8-neighbourhood: diagonals count.

use arrayvec::ArrayVec;

use crate::rng::GameRng;
use crate::types::{
    row_col, CardType, Slot, CARD_TYPES, CARD_TYPE_COUNT, GRID_COLS, GRID_ROWS, TOTAL_SLOTS,
};

/// Whether two slots touch (including diagonally).
///
/// Symmetric and irreflexive; out-of-range indices are never adjacent.
pub fn adjacent(a: usize, b: usize) -> bool {
    if a == b || a >= TOTAL_SLOTS || b >= TOTAL_SLOTS {
        return false;
    }
    let (ra, ca) = row_col(a);
    let (rb, cb) = row_col(b);
    ra.abs_diff(rb) <= 1 && ca.abs_diff(cb) <= 1
}

/// All in-bounds neighbours of a slot, in row-major order.
pub fn neighbors(index: usize) -> ArrayVec<usize, 8> {
    let mut out = ArrayVec::new();
    if index >= TOTAL_SLOTS {
        return out;
    }
    let (row, col) = row_col(index);
    for r in row.saturating_sub(1)..=(row + 1).min(GRID_ROWS - 1) {
        for c in col.saturating_sub(1)..=(col + 1).min(GRID_COLS - 1) {
            if r == row && c == col {
                continue;
            }
            out.push(r * GRID_COLS + c);
        }
    }
    out
}

/// Generate `count` cards made of pairs.
///
/// Builds `ceil(count / 2)` pairs cycling through `types`, shuffles them and
/// truncates to `count`, so every type appears an even number of times except
/// possibly one when `count` is odd. Partners may land far apart.
pub fn generate(count: usize, types: &[CardType], rng: &mut GameRng) -> Vec<CardType> {
    if types.is_empty() {
        return Vec::new();
    }

    let pairs = (count + 1) / 2;
    let mut cards = Vec::with_capacity(pairs * 2);
    for i in 0..pairs {
        let kind = types[i % types.len()];
        cards.push(kind);
        cards.push(kind);
    }

    rng.shuffle(&mut cards);
    cards.truncate(count);
    cards
}

/// The card grid - 5 columns x 4 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of slots, row-major order
    slots: [Slot; TOTAL_SLOTS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            slots: [None; TOTAL_SLOTS],
        }
    }

    pub fn from_slots(slots: [Slot; TOTAL_SLOTS]) -> Self {
        Self { slots }
    }

    /// Build a board from a compact layout string.
    ///
    /// Each non-whitespace character is one slot in row-major order: a digit
    /// `0`-`9` is the card type at that roster position and `.` is empty.
    /// Returns `None` unless exactly 20 slots are described.
    ///
    /// ```
    /// use pair_a_gone_core::Board;
    ///
    /// let board = Board::from_layout("00... ..... ..... .....").unwrap();
    /// assert!(board.has_valid_move());
    /// assert_eq!(board.occupied_count(), 2);
    /// ```
    pub fn from_layout(layout: &str) -> Option<Self> {
        let mut slots = [None; TOTAL_SLOTS];
        let mut n = 0usize;
        for ch in layout.chars().filter(|c| !c.is_whitespace()) {
            if n >= TOTAL_SLOTS {
                return None;
            }
            slots[n] = match ch {
                '.' => None,
                d => Some(CARD_TYPES[d.to_digit(10)? as usize]),
            };
            n += 1;
        }
        (n == TOTAL_SLOTS).then_some(Self { slots })
    }

    /// Inverse of [`Board::from_layout`], one row per line.
    pub fn to_layout(&self) -> String {
        let mut out = String::with_capacity(TOTAL_SLOTS + GRID_ROWS);
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 && i % GRID_COLS == 0 {
                out.push('\n');
            }
            match slot {
                Some(card) => out.push_str(&card.ordinal().to_string()),
                None => out.push('.'),
            }
        }
        out
    }

    /// Get the slot at `index`
    /// Returns None if out of bounds
    pub fn get(&self, index: usize) -> Option<Slot> {
        self.slots.get(index).copied()
    }

    /// Card at `index`, if the slot exists and is occupied
    pub fn card(&self, index: usize) -> Option<CardType> {
        self.get(index).flatten()
    }

    /// Set the slot at `index`
    /// Returns false if out of bounds
    pub fn set(&mut self, index: usize, slot: Slot) -> bool {
        match self.slots.get_mut(index) {
            Some(s) => {
                *s = slot;
                true
            }
            None => false,
        }
    }

    /// Empty a slot and return what it held
    pub fn take(&mut self, index: usize) -> Slot {
        self.slots.get_mut(index).and_then(Option::take)
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        self.card(index).is_some()
    }

    pub fn slots(&self) -> &[Slot; TOTAL_SLOTS] {
        &self.slots
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn empty_count(&self) -> usize {
        TOTAL_SLOTS - self.occupied_count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.slots = [None; TOTAL_SLOTS];
    }

    /// Replace every slot with a freshly generated, shuffled set of pairs.
    pub fn deal(&mut self, types: &[CardType], rng: &mut GameRng) {
        let cards = generate(TOTAL_SLOTS, types, rng);
        for (i, slot) in self.slots.iter_mut().enumerate() {
            *slot = cards.get(i).copied();
        }
    }

    /// Slide phase 1: within each row, pack cards to the left.
    ///
    /// Order inside a row is preserved and trailing slots become empty.
    pub fn compact_rows(&mut self) {
        for row in self.slots.chunks_exact_mut(GRID_COLS) {
            let cards: ArrayVec<CardType, GRID_COLS> = row.iter().flatten().copied().collect();
            for (col, slot) in row.iter_mut().enumerate() {
                *slot = cards.get(col).copied();
            }
        }
    }

    /// Slide phase 2: repack every card from slot 0 in row-major order.
    pub fn repack(&mut self) {
        let cards: ArrayVec<CardType, TOTAL_SLOTS> = self.slots.iter().flatten().copied().collect();
        for (i, slot) in self.slots.iter_mut().enumerate() {
            *slot = cards.get(i).copied();
        }
    }

    /// Slide cards into the gaps: rows compact left, then everything repacks
    /// toward the top-left.
    ///
    /// Afterwards no empty slot precedes an occupied one.
    pub fn slide(&mut self) {
        self.compact_rows();
        self.repack();
    }

    /// Fill every empty slot, avoiding types that already sit next to it.
    ///
    /// Slots are filled in index order, so earlier refills count as neighbours
    /// for later ones. When every available type is taken by a neighbour, any
    /// available type may be picked. Returns the number of slots filled.
    pub fn fill_empty(&mut self, types: &[CardType], rng: &mut GameRng) -> usize {
        if types.is_empty() {
            return 0;
        }

        let mut filled = 0usize;
        for i in 0..TOTAL_SLOTS {
            if self.slots[i].is_some() {
                continue;
            }

            let taken: ArrayVec<&'static str, 8> = neighbors(i)
                .into_iter()
                .filter_map(|n| self.slots[n].map(|c| c.name))
                .collect();

            let safe: ArrayVec<CardType, CARD_TYPE_COUNT> = types
                .iter()
                .filter(|t| !taken.contains(&t.name))
                .take(CARD_TYPE_COUNT)
                .copied()
                .collect();

            let pool: &[CardType] = if safe.is_empty() { types } else { &safe };
            self.slots[i] = Some(pool[rng.index(pool.len())]);
            filled += 1;
        }
        filled
    }

    /// First adjacent pair of equal cards, scanning slot pairs in index order.
    pub fn find_valid_move(&self) -> Option<(usize, usize)> {
        for i in 0..TOTAL_SLOTS {
            let Some(a) = self.slots[i] else {
                continue;
            };
            for j in (i + 1)..TOTAL_SLOTS {
                let Some(b) = self.slots[j] else {
                    continue;
                };
                if a.same_kind(&b) && adjacent(i, j) {
                    return Some((i, j));
                }
            }
        }
        None
    }

    /// Whether any adjacent pair of equal cards exists
    pub fn has_valid_move(&self) -> bool {
        self.find_valid_move().is_some()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
