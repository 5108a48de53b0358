//! Label widget: static text.

use crate::core::component::{Component, Node};
use crate::core::paint::PaintContext;
use crate::widgets::text::{Decoration, TextContent};

pub struct Label {
    node: Node,
    content: TextContent,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        let mut node = Node::new(0, 1);
        let mut content = TextContent::default();
        content.set(&mut node, text);
        Self { node, content }
    }

    pub fn text(&self) -> &str {
        self.content.as_str()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content.set(&mut self.node, text);
    }
}

impl Component for Label {
    fn node(&self) -> &Node {
        &self.node
    }

    fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }

    fn paint(&mut self, ctx: &mut PaintContext<'_>) {
        self.content.paint(&self.node, ctx, Decoration::Plain);
        self.node.clear_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::Label;
    use crate::core::component::Component;
    use crate::core::paint::PaintContext;
    use crate::platform::memory_display::MemoryDisplay;

    #[test]
    fn label_sizes_to_text_and_never_takes_focus() {
        let label = Label::new("Volume");
        assert_eq!(label.size(), (6, 1));
        assert!(!label.accepts_focus());
        assert_eq!(label.text(), "Volume");
    }

    #[test]
    fn set_text_schedules_repaint() {
        let mut label = Label::new("Volume");
        let mut display = MemoryDisplay::new(16, 2);
        {
            let mut ctx = PaintContext::new(&mut display, 16, 2, None, (0, 0));
            label.paint(&mut ctx);
        }
        assert!(!label.dirty());

        label.set_text("Vol");
        assert!(label.dirty());
        {
            let mut ctx = PaintContext::new(&mut display, 16, 2, None, (0, 0));
            label.paint(&mut ctx);
        }
        assert_eq!(display.row_text(0), format!("Vol{}", " ".repeat(13)));
    }
}
