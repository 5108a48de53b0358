//! Checkbox widget.

use crate::core::component::{Component, Node};
use crate::core::display::CHECKMARK_SLOT;
use crate::core::input_event::InputEvent;
use crate::core::paint::PaintContext;
use crate::widgets::text::{Decoration, TextContent};

/// On/off toggle. Select flips the state; the checked state is drawn with the checkmark glyph
/// the screen reserves in slot 7.
pub struct Checkbox {
    node: Node,
    content: TextContent,
    checked: bool,
}

impl Checkbox {
    pub fn new() -> Self {
        let mut node = Node::new(0, 1);
        let mut content = TextContent::default();
        content.set(&mut node, " ");
        Self {
            node,
            content,
            checked: false,
        }
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        if self.checked != checked {
            self.checked = checked;
            self.node.mark_dirty();
        }
    }
}

impl Default for Checkbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Checkbox {
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
        if event.select {
            self.set_checked(!self.checked);
        }
        false
    }

    fn paint(&mut self, ctx: &mut PaintContext<'_>) {
        let decoration = Decoration::Focusable {
            focused: ctx.is_focused(self.node.id()),
            captured: false,
        };
        self.content.paint(&self.node, ctx, decoration);
        if self.checked {
            ctx.draw_glyph(i32::from(self.node.x()) + 1, i32::from(self.node.y()), CHECKMARK_SLOT);
        }
        self.node.clear_dirty();
    }
}
