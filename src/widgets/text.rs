//! Shared single-line text rendering used by every text widget.

use crate::core::component::Node;
use crate::core::paint::PaintContext;
use crate::core::text::cell_width_u8;

/// How a text run is framed on screen.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Decoration {
    /// Text drawn as-is at the node's location.
    Plain,
    /// Text drawn one cell in, framed by a focus indicator: `[text]` unfocused, `<text>`
    /// focused, `>text<` focused while capturing input.
    Focusable { focused: bool, captured: bool },
}

impl Decoration {
    fn brackets(self) -> Option<(&'static str, &'static str)> {
        match self {
            Decoration::Plain => None,
            Decoration::Focusable {
                focused: false, ..
            } => Some(("[", "]")),
            Decoration::Focusable {
                focused: true,
                captured: false,
            } => Some(("<", ">")),
            Decoration::Focusable {
                focused: true,
                captured: true,
            } => Some((">", "<")),
        }
    }
}

/// Text plus the width it occupied when it was last painted.
///
/// When the text shrinks, the cells the longer text used are blanked on the next paint.
#[derive(Debug, Default)]
pub struct TextContent {
    text: String,
    stale_width: u8,
}

impl TextContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            stale_width: 0,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn width(&self) -> u8 {
        cell_width_u8(&self.text)
    }

    /// Replace the text and resize `node` to fit it. Marks `node` dirty.
    pub fn set(&mut self, node: &mut Node, text: impl Into<String>) {
        self.text = text.into();
        let width = self.width();
        if width < node.width() {
            self.stale_width = self.stale_width.max(node.width());
        }
        node.set_size(width, node.height().max(1));
        node.mark_dirty();
    }

    pub fn paint(&mut self, node: &Node, ctx: &mut PaintContext<'_>, decoration: Decoration) {
        let x = i32::from(node.x());
        let y = i32::from(node.y());
        let width = i32::from(node.width());

        match decoration.brackets() {
            Some((open, close)) => {
                ctx.draw_text(x, y, open);
                ctx.draw_text(x + 1, y, &self.text);
                ctx.draw_text(x + width + 1, y, close);
            }
            None => ctx.draw_text(x, y, &self.text),
        }

        if self.stale_width > node.width() {
            let inset = if decoration.brackets().is_some() { 2 } else { 0 };
            let count = usize::from(self.stale_width - node.width());
            ctx.blank(x + width + inset, y, count);
        }
        self.stale_width = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::{Decoration, TextContent};
    use crate::core::component::Node;
    use crate::core::paint::PaintContext;
    use crate::platform::memory_display::MemoryDisplay;

    fn render(content: &mut TextContent, node: &Node, decoration: Decoration) -> String {
        let mut display = MemoryDisplay::new(12, 1);
        {
            let mut ctx = PaintContext::new(&mut display, 12, 1, None, (0, 0));
            content.paint(node, &mut ctx, decoration);
        }
        display.row_text(0)
    }

    #[test]
    fn decorations() {
        let mut node = Node::new(0, 1);
        let mut content = TextContent::new("");
        content.set(&mut node, "OK");
        node.set_location(1, 0);

        assert_eq!(render(&mut content, &node, Decoration::Plain), " OK         ");
        let unfocused = Decoration::Focusable {
            focused: false,
            captured: false,
        };
        assert_eq!(render(&mut content, &node, unfocused), " [OK]       ");
        let focused = Decoration::Focusable {
            focused: true,
            captured: false,
        };
        assert_eq!(render(&mut content, &node, focused), " <OK>       ");
        let captured = Decoration::Focusable {
            focused: true,
            captured: true,
        };
        assert_eq!(render(&mut content, &node, captured), " >OK<       ");
    }

    #[test]
    fn shrinking_text_blanks_the_stale_tail() {
        let mut node = Node::new(0, 1);
        let mut content = TextContent::new("");
        content.set(&mut node, "Cancel");
        assert_eq!(node.width(), 6);

        let mut display = MemoryDisplay::new(12, 1);
        {
            let mut ctx = PaintContext::new(&mut display, 12, 1, None, (0, 0));
            content.paint(&node, &mut ctx, Decoration::Plain);
            content.set(&mut node, "OK");
            content.paint(&node, &mut ctx, Decoration::Plain);
        }
        assert_eq!(node.width(), 2);
        assert!(node.is_dirty());
        assert_eq!(display.row_text(0), "OK          ");
    }

    #[test]
    fn shrinking_framed_text_blanks_past_the_bracket() {
        let mut node = Node::new(0, 1);
        let mut content = TextContent::new("");
        content.set(&mut node, "Cancel");
        let framed = Decoration::Focusable {
            focused: false,
            captured: false,
        };

        let mut display = MemoryDisplay::new(12, 1);
        {
            let mut ctx = PaintContext::new(&mut display, 12, 1, None, (0, 0));
            content.paint(&node, &mut ctx, framed);
            content.set(&mut node, "No");
            content.paint(&node, &mut ctx, framed);
        }
        assert_eq!(display.row_text(0), "[No]        ");
    }
}
