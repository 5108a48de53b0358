//! TextField widget: character-by-character text entry with an encoder.

use crate::core::component::{Component, Node};
use crate::core::input_event::InputEvent;
use crate::core::paint::PaintContext;
use crate::core::text::{cell_width, graphemes};
use crate::widgets::charset::CharacterSet;
use crate::widgets::text::{Decoration, TextContent};

/// Fixed-width text entry.
///
/// Flow:
/// - select while released: capture input, cursor on the first cell, moving mode;
/// - in moving mode, vertical deltas move the cursor; moving past either end releases capture;
/// - select while captured toggles between moving and selecting mode;
/// - in selecting mode, vertical deltas step the cell under the cursor through the character set;
/// - cancel while captured restores the text held when capture began and releases.
pub struct TextField {
    node: Node,
    content: TextContent,
    cells: Vec<String>,
    charset: CharacterSet,
    position: usize,
    selecting: bool,
    captured: bool,
    saved: Vec<String>,
}

impl TextField {
    pub fn new(text: impl Into<String>, charset: CharacterSet) -> Self {
        let mut field = Self {
            node: Node::new(0, 1),
            content: TextContent::default(),
            cells: Vec::new(),
            charset,
            position: 0,
            selecting: false,
            captured: false,
            saved: Vec::new(),
        };
        field.set_text(text);
        field
    }

    pub fn text(&self) -> &str {
        self.content.as_str()
    }

    /// Replace the text. The field width follows the new text; editing state resets.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.cells = graphemes(&text);
        self.content.set(&mut self.node, text);
        self.position = 0;
        self.selecting = false;
    }

    pub fn charset(&self) -> &CharacterSet {
        &self.charset
    }

    /// Cell index of the edit cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    /// True while vertical deltas change the character under the cursor.
    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn move_cursor(&mut self, delta: i32) {
        let target = self.position as i64 + i64::from(delta);
        if target < 0 || target >= self.cell_count() as i64 {
            self.captured = false;
            self.selecting = false;
        } else {
            self.position = target as usize;
        }
    }

    fn cycle_character(&mut self, delta: i32) {
        let Some(cell) = self.cells.get_mut(self.position) else {
            return;
        };
        let current = cell.chars().next().unwrap_or(' ');
        *cell = self.charset.step(current, delta).to_string();
        self.sync_text();
    }

    /// Rebuild the text from its cells. Stepping can swap a wide cell for a narrow one, so the
    /// node is resized as well.
    fn sync_text(&mut self) {
        let text = self.cells.concat();
        self.content.set(&mut self.node, text);
    }
}

impl Component for TextField {
    fn node(&self) -> &Node {
        &self.node
    }

    fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }

    fn accepts_focus(&self) -> bool {
        true
    }

    fn handle_input_event(&mut self, event: &InputEvent) -> bool {
        if self.captured && event.dy != 0 {
            if self.selecting {
                self.cycle_character(event.dy);
            } else {
                self.move_cursor(event.dy);
            }
            self.node.mark_dirty();
        }

        if event.select {
            if self.captured {
                self.selecting = !self.selecting;
            } else {
                self.captured = true;
                self.position = 0;
                self.selecting = false;
                self.saved = self.cells.clone();
            }
            self.node.mark_dirty();
        } else if event.cancel && self.captured {
            self.cells = std::mem::take(&mut self.saved);
            self.sync_text();
            self.captured = false;
            self.selecting = false;
        }
        self.captured
    }

    fn paint(&mut self, ctx: &mut PaintContext<'_>) {
        let decoration = Decoration::Focusable {
            focused: ctx.is_focused(self.node.id()),
            captured: self.captured,
        };
        self.content.paint(&self.node, ctx, decoration);
        ctx.set_cursor_visible(self.captured && self.selecting);
        ctx.set_blink(self.captured && !self.selecting);
        let offset = self.cells[..self.position.min(self.cells.len())]
            .iter()
            .map(|cell| cell_width(cell))
            .sum::<usize>();
        ctx.set_cursor_location(
            i32::from(self.node.x()) + 1 + offset as i32,
            i32::from(self.node.y()),
        );
        self.node.clear_dirty();
    }
}
