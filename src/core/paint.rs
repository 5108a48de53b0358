//! Paint-pass context handed to components.

use crate::core::component::ComponentId;
use crate::core::display::Display;
use crate::core::text::{cell_width, clip_cells};

/// Display access for one paint pass.
///
/// Every write is clipped to the display bounds: rows outside the display are skipped, cells
/// left of column 0 or right of the last column are dropped. Nothing ever wraps.
pub struct PaintContext<'a> {
    display: &'a mut dyn Display,
    columns: u8,
    rows: u8,
    focus: Option<ComponentId>,
    cursor: (u8, u8),
    clip: (i32, i32),
}

impl<'a> PaintContext<'a> {
    pub fn new(
        display: &'a mut dyn Display,
        columns: u8,
        rows: u8,
        focus: Option<ComponentId>,
        cursor: (u8, u8),
    ) -> Self {
        Self {
            display,
            columns,
            rows,
            focus,
            cursor,
            clip: (0, i32::from(rows) - 1),
        }
    }

    pub fn columns(&self) -> u8 {
        self.columns
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Identity of the current focus holder.
    pub fn focus(&self) -> Option<ComponentId> {
        self.focus
    }

    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focus == Some(id)
    }

    pub fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        let Some(row) = self.row(y) else {
            return;
        };
        let columns = i32::from(self.columns);
        if x >= columns || text.is_empty() {
            return;
        }
        let skip = usize::try_from(x.min(0).unsigned_abs()).unwrap_or(usize::MAX);
        let column = x.max(0);
        let room = usize::try_from(columns - column).unwrap_or(0);
        let clipped = if skip == 0 && cell_width(text) <= room {
            text.to_string()
        } else {
            clip_cells(text, skip, room)
        };
        if clipped.is_empty() {
            return;
        }
        self.display.draw_text(column as u8, row, &clipped);
    }

    /// Draws `count` blank cells starting at `(x, y)`.
    pub fn blank(&mut self, x: i32, y: i32, count: usize) {
        if count == 0 {
            return;
        }
        self.draw_text(x, y, &" ".repeat(count));
    }

    pub fn draw_glyph(&mut self, x: i32, y: i32, slot: u8) {
        let Some(row) = self.row(y) else {
            return;
        };
        if x < 0 || x >= i32::from(self.columns) {
            return;
        }
        self.display.draw_glyph(x as u8, row, slot);
    }

    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.display.set_cursor_visible(visible);
    }

    pub fn set_blink(&mut self, blink: bool) {
        self.display.set_blink(blink);
    }

    /// Request the hardware cursor position pushed at the end of the tick.
    pub fn set_cursor_location(&mut self, x: i32, y: i32) {
        self.cursor = (clamp_cell(x, self.columns), clamp_cell(y, self.rows));
    }

    pub fn cursor_location(&self) -> (u8, u8) {
        self.cursor
    }

    /// Narrow writes to rows `top..=bottom` (within the current clip). Returns the previous clip
    /// for [`PaintContext::restore_clip`].
    pub fn clip_rows(&mut self, top: i32, bottom: i32) -> (i32, i32) {
        let previous = self.clip;
        self.clip = (previous.0.max(top), previous.1.min(bottom));
        previous
    }

    pub fn restore_clip(&mut self, clip: (i32, i32)) {
        self.clip = clip;
    }

    fn row(&self, y: i32) -> Option<u8> {
        if y < 0 || y >= i32::from(self.rows) || y < self.clip.0 || y > self.clip.1 {
            None
        } else {
            Some(y as u8)
        }
    }
}

pub(crate) fn clamp_cell(value: i32, extent: u8) -> u8 {
    let max = i32::from(extent.saturating_sub(1));
    value.clamp(0, max) as u8
}
