//! In-memory character display.
//!
//! Keeps the cell grid, uploaded glyphs, cursor state and a log of every draw call, and feeds
//! scripted input to the screen one poll at a time. Tests drive screens through it; hosts can
//! mirror its grid onto another output.

use std::collections::VecDeque;

use crate::core::display::{Display, GlyphBitmap, GLYPH_SLOTS};
use crate::core::input_event::InputEvent;
use crate::core::text::graphemes;

/// Content of one display cell.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Cell {
    Char(char),
    Glyph(u8),
}

/// A recorded draw call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DrawOp {
    Text { x: u8, y: u8, text: String },
    Glyph { x: u8, y: u8, slot: u8 },
}

pub struct MemoryDisplay {
    columns: u8,
    rows: u8,
    cells: Vec<Vec<Cell>>,
    glyphs: [Option<GlyphBitmap>; GLYPH_SLOTS as usize],
    input: VecDeque<InputEvent>,
    draws: Vec<DrawOp>,
    clear_count: usize,
    cursor: (u8, u8),
    cursor_visible: bool,
    blink: bool,
}

impl MemoryDisplay {
    pub fn new(columns: u8, rows: u8) -> Self {
        Self {
            columns,
            rows,
            cells: blank_grid(columns, rows),
            glyphs: [None; GLYPH_SLOTS as usize],
            input: VecDeque::new(),
            draws: Vec::new(),
            clear_count: 0,
            cursor: (0, 0),
            cursor_visible: false,
            blink: false,
        }
    }

    pub fn columns(&self) -> u8 {
        self.columns
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Queue input for the next poll. Everything queued between two polls is folded into one
    /// event, the way an encoder accumulates detents between reads.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push_back(event);
    }

    pub fn pending_input(&self) -> usize {
        self.input.len()
    }

    pub fn cell(&self, x: u8, y: u8) -> Option<Cell> {
        self.cells
            .get(usize::from(y))
            .and_then(|row| row.get(usize::from(x)))
            .cloned()
    }

    /// Row contents as text. Glyph cells render as `glyph_char`.
    pub fn row_text_with(&self, y: u8, glyph_char: impl Fn(u8) -> char) -> String {
        let Some(row) = self.cells.get(usize::from(y)) else {
            return String::new();
        };
        row.iter()
            .map(|cell| match cell {
                Cell::Char(ch) => *ch,
                Cell::Glyph(slot) => glyph_char(*slot),
            })
            .collect()
    }

    /// Row contents as text. Glyph cells render as `*`.
    pub fn row_text(&self, y: u8) -> String {
        self.row_text_with(y, |_| '*')
    }

    /// Every row, top to bottom.
    pub fn snapshot(&self) -> Vec<String> {
        (0..self.rows).map(|y| self.row_text(y)).collect()
    }

    pub fn draws(&self) -> &[DrawOp] {
        &self.draws
    }

    pub fn take_draws(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.draws)
    }

    /// Rows touched by recorded draw calls, ascending and deduplicated.
    pub fn drawn_rows(&self) -> Vec<u8> {
        let mut rows: Vec<u8> = self
            .draws
            .iter()
            .map(|op| match op {
                DrawOp::Text { y, .. } | DrawOp::Glyph { y, .. } => *y,
            })
            .collect();
        rows.sort_unstable();
        rows.dedup();
        rows
    }

    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    pub fn glyph(&self, slot: u8) -> Option<GlyphBitmap> {
        self.glyphs.get(usize::from(slot)).copied().flatten()
    }

    pub fn cursor(&self) -> (u8, u8) {
        self.cursor
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn blink(&self) -> bool {
        self.blink
    }

    fn put(&mut self, x: u8, y: u8, cell: Cell) {
        if let Some(slot) = self
            .cells
            .get_mut(usize::from(y))
            .and_then(|row| row.get_mut(usize::from(x)))
        {
            *slot = cell;
        }
    }
}

fn blank_grid(columns: u8, rows: u8) -> Vec<Vec<Cell>> {
    vec![vec![Cell::Char(' '); usize::from(columns)]; usize::from(rows)]
}

impl Display for MemoryDisplay {
    fn poll_input(&mut self) -> InputEvent {
        let mut event = InputEvent::default();
        for pending in self.input.drain(..) {
            event.merge(pending);
        }
        event
    }

    fn clear(&mut self) {
        self.cells = blank_grid(self.columns, self.rows);
        self.clear_count += 1;
    }

    fn define_glyph(&mut self, slot: u8, bitmap: &GlyphBitmap) {
        if let Some(entry) = self.glyphs.get_mut(usize::from(slot)) {
            *entry = Some(*bitmap);
        }
    }

    fn draw_text(&mut self, x: u8, y: u8, text: &str) {
        self.draws.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
        });
        let mut column = x;
        for grapheme in graphemes(text) {
            if column >= self.columns {
                break;
            }
            let ch = grapheme.chars().next().unwrap_or(' ');
            self.put(column, y, Cell::Char(ch));
            column = column.saturating_add(1);
        }
    }

    fn draw_glyph(&mut self, x: u8, y: u8, slot: u8) {
        self.draws.push(DrawOp::Glyph { x, y, slot });
        self.put(x, y, Cell::Glyph(slot));
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }

    fn set_blink(&mut self, blink: bool) {
        self.blink = blink;
    }

    fn move_cursor(&mut self, x: u8, y: u8) {
        self.cursor = (x.min(self.columns.saturating_sub(1)), y.min(self.rows.saturating_sub(1)));
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, DrawOp, MemoryDisplay};
    use crate::core::display::{Display, CHECKMARK};
    use crate::core::input_event::InputEvent;

    #[test]
    fn draws_never_wrap() {
        let mut display = MemoryDisplay::new(4, 2);
        display.draw_text(2, 0, "abcdef");
        assert_eq!(display.snapshot(), vec!["  ab".to_string(), "    ".to_string()]);
    }

    #[test]
    fn clear_blanks_grid_and_counts() {
        let mut display = MemoryDisplay::new(3, 1);
        display.draw_text(0, 0, "abc");
        display.clear();
        assert_eq!(display.row_text(0), "   ");
        assert_eq!(display.clear_count(), 1);
        assert_eq!(display.draws().len(), 1);
    }

    #[test]
    fn glyphs_are_stored_and_drawn() {
        let mut display = MemoryDisplay::new(3, 1);
        display.define_glyph(7, &CHECKMARK);
        display.define_glyph(9, &CHECKMARK);
        display.draw_glyph(1, 0, 7);
        assert_eq!(display.glyph(7), Some(CHECKMARK));
        assert_eq!(display.glyph(9), None);
        assert_eq!(display.cell(1, 0), Some(Cell::Glyph(7)));
        assert_eq!(display.row_text_with(0, |_| 'v'), " v ");
        assert_eq!(display.take_draws(), vec![DrawOp::Glyph { x: 1, y: 0, slot: 7 }]);
        assert!(display.draws().is_empty());
    }

    #[test]
    fn scripted_input_is_returned_once() {
        let mut display = MemoryDisplay::new(1, 1);
        display.push_input(InputEvent::scroll(1));
        assert_eq!(display.pending_input(), 1);
        assert_eq!(display.poll_input(), InputEvent::scroll(1));
        assert!(display.poll_input().is_empty());
    }

    #[test]
    fn pending_input_is_accumulated_per_poll() {
        let mut display = MemoryDisplay::new(1, 1);
        display.push_input(InputEvent::scroll(1));
        display.push_input(InputEvent::scroll(2));
        display.push_input(InputEvent::new(-1, 0, false, false));
        display.push_input(InputEvent::select());
        assert_eq!(display.pending_input(), 4);
        assert_eq!(display.poll_input(), InputEvent::new(-1, 3, true, false));
        assert_eq!(display.pending_input(), 0);
        assert!(display.poll_input().is_empty());
    }

    #[test]
    fn cursor_moves_are_clamped() {
        let mut display = MemoryDisplay::new(16, 2);
        display.move_cursor(30, 5);
        assert_eq!(display.cursor(), (15, 1));
    }
}
