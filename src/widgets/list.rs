//! List widget: pick one of a bounded set of items.

use crate::core::component::{Component, Node};
use crate::core::input_event::InputEvent;
use crate::core::paint::PaintContext;
use crate::error::WidgetError;
use crate::widgets::text::{Decoration, TextContent};

/// Shows the selected item. Select captures input; while captured, vertical deltas move the
/// selection (clamped, no wraparound). Select again commits and releases; cancel restores the
/// item selected when capture began and releases.
pub struct List {
    node: Node,
    content: TextContent,
    items: Vec<String>,
    capacity: usize,
    selected_index: usize,
    committed_index: usize,
    captured: bool,
}

impl List {
    pub fn new(capacity: usize) -> Self {
        Self {
            node: Node::new(0, 1),
            content: TextContent::default(),
            items: Vec::with_capacity(capacity),
            capacity,
            selected_index: 0,
            committed_index: 0,
            captured: false,
        }
    }

    pub fn add_item(&mut self, item: impl Into<String>) -> Result<(), WidgetError> {
        if self.items.len() >= self.capacity {
            return Err(WidgetError::ListFull {
                capacity: self.capacity,
            });
        }
        self.items.push(item.into());
        if self.items.len() == 1 {
            self.show_selected();
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.items.get(self.selected_index).map(String::as_str)
    }

    /// Select `index`, clamped to the last item.
    pub fn set_selected_index(&mut self, index: usize) {
        self.selected_index = index.min(self.items.len().saturating_sub(1));
        self.show_selected();
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    fn show_selected(&mut self) {
        let text = self.selected_item().unwrap_or_default().to_string();
        self.content.set(&mut self.node, text);
    }

    fn step(&mut self, delta: i32) {
        let last = self.items.len().saturating_sub(1) as i64;
        let target = (self.selected_index as i64 + i64::from(delta)).clamp(0, last);
        self.set_selected_index(target as usize);
    }
}

impl Component for List {
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
            self.step(event.dy);
        }
        if event.select {
            self.captured = !self.captured;
            self.committed_index = self.selected_index;
            self.node.mark_dirty();
        } else if event.cancel && self.captured {
            self.captured = false;
            self.set_selected_index(self.committed_index);
        }
        self.captured
    }

    fn paint(&mut self, ctx: &mut PaintContext<'_>) {
        let decoration = Decoration::Focusable {
            focused: ctx.is_focused(self.node.id()),
            captured: self.captured,
        };
        self.content.paint(&self.node, ctx, decoration);
        self.node.clear_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::List;
    use crate::core::component::Component;
    use crate::core::input_event::InputEvent;
    use crate::error::WidgetError;

    fn abc() -> List {
        let mut list = List::new(3);
        for item in ["A", "B", "C"] {
            list.add_item(item).unwrap();
        }
        list
    }

    #[test]
    fn first_item_is_shown() {
        let list = abc();
        assert_eq!(list.selected_item(), Some("A"));
        assert_eq!(list.size(), (1, 1));
        assert!(List::new(2).selected_item().is_none());
    }

    #[test]
    fn over_capacity_is_rejected() {
        let mut list = abc();
        assert_eq!(list.add_item("D"), Err(WidgetError::ListFull { capacity: 3 }));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn deltas_are_ignored_until_captured() {
        let mut list = abc();
        assert!(!list.handle_input_event(&InputEvent::scroll(1)));
        assert_eq!(list.selected_index(), 0);
    }

    #[test]
    fn selection_is_clamped_while_captured() {
        let mut list = abc();
        assert!(list.handle_input_event(&InputEvent::select()));
        assert!(list.handle_input_event(&InputEvent::scroll(1)));
        assert!(list.handle_input_event(&InputEvent::scroll(1)));
        assert_eq!(list.selected_index(), 2);
        assert!(list.handle_input_event(&InputEvent::scroll(1)));
        assert_eq!(list.selected_index(), 2);
        assert!(list.handle_input_event(&InputEvent::scroll(-10)));
        assert_eq!(list.selected_index(), 0);

        assert!(!list.handle_input_event(&InputEvent::select()));
        assert!(!list.is_captured());
    }

    #[test]
    fn cancel_restores_and_releases() {
        let mut list = abc();
        list.set_selected_index(1);
        assert!(list.handle_input_event(&InputEvent::select()));
        assert!(list.handle_input_event(&InputEvent::scroll(1)));
        assert_eq!(list.selected_item(), Some("C"));

        assert!(!list.handle_input_event(&InputEvent::cancel()));
        assert_eq!(list.selected_item(), Some("B"));
        assert!(!list.is_captured());
    }

    #[test]
    fn index_stays_in_range_for_any_delta_sequence() {
        let deltas = [3, -1, -7, 2, 2, 2, -1, 100, -100, 1];
        let mut list = abc();
        list.handle_input_event(&InputEvent::select());
        for delta in deltas {
            list.handle_input_event(&InputEvent::scroll(delta));
            assert!(list.selected_index() < list.len());
        }
    }

    #[test]
    fn set_selected_index_clamps() {
        let mut list = abc();
        list.set_selected_index(9);
        assert_eq!(list.selected_index(), 2);
        let mut empty = List::new(1);
        empty.set_selected_index(4);
        assert_eq!(empty.selected_index(), 0);
    }
}
