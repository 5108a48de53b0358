//! Button widget.

use crate::core::component::{Component, Node};
use crate::core::input_event::InputEvent;
use crate::core::paint::PaintContext;
use crate::widgets::text::{Decoration, TextContent};

/// Focusable text. `pressed()` is true for the tick in which select was clicked while the
/// button held focus. A button never captures input.
pub struct Button {
    node: Node,
    content: TextContent,
    pressed: bool,
}

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        let mut node = Node::new(0, 1);
        let mut content = TextContent::default();
        content.set(&mut node, text);
        Self {
            node,
            content,
            pressed: false,
        }
    }

    pub fn text(&self) -> &str {
        self.content.as_str()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content.set(&mut self.node, text);
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }
}

impl Component for Button {
    fn node(&self) -> &Node {
        &self.node
    }

    fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }

    fn accepts_focus(&self) -> bool {
        true
    }

    fn update(&mut self, _tick: u64) {
        self.pressed = false;
    }

    fn handle_input_event(&mut self, event: &InputEvent) -> bool {
        self.pressed = event.select;
        false
    }

    fn paint(&mut self, ctx: &mut PaintContext<'_>) {
        let decoration = Decoration::Focusable {
            focused: ctx.is_focused(self.node.id()),
            captured: false,
        };
        self.content.paint(&self.node, ctx, decoration);
        self.node.clear_dirty();
    }
}
