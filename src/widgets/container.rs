//! Container: an ordered set of owned child components.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::component::{Component, ComponentId, ComponentRc, Node};
use crate::core::paint::PaintContext;

/// Ordered children. Insertion order is both paint order and focus-cycle order.
pub struct Container {
    node: Node,
    children: Vec<ComponentRc>,
}

impl Container {
    pub fn new() -> Self {
        Self::with_size(0, 0)
    }

    pub fn with_size(width: u8, height: u8) -> Self {
        Self {
            node: Node::new(width, height),
            children: Vec::new(),
        }
    }

    /// Add a child at an absolute location. The child is scheduled for painting.
    pub fn add(&mut self, component: ComponentRc, x: i8, y: i8) {
        {
            let mut child = component.borrow_mut();
            child.set_location(x, y);
            child.repaint();
        }
        self.children.push(component);
    }

    pub fn children(&self) -> &[ComponentRc] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether `id` is a descendant of this container.
    pub fn contains(&self, id: ComponentId) -> bool {
        self.find(id).is_some()
    }

    /// Shared handle to the descendant with `id`.
    pub fn find(&self, id: ComponentId) -> Option<ComponentRc> {
        for child in &self.children {
            let Ok(component) = child.try_borrow() else {
                continue;
            };
            if component.id() == id {
                return Some(Rc::clone(child));
            }
            if let Some(container) = component.as_container() {
                if let Some(found) = container.find(id) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Next focus-eligible leaf after `current` in depth-first order, or before it when
    /// `reverse` is set.
    ///
    /// With `current == None` the first eligible leaf in walk order is returned. When the walk
    /// runs off the end after `current` the result is `None`; callers that want wraparound
    /// call again with `None`.
    pub fn next_focus_holder(
        &self,
        current: Option<ComponentId>,
        reverse: bool,
    ) -> Option<ComponentRc> {
        let mut current_found = false;
        self.next_focus_holder_from(current, reverse, &mut current_found)
    }

    fn next_focus_holder_from(
        &self,
        current: Option<ComponentId>,
        reverse: bool,
        current_found: &mut bool,
    ) -> Option<ComponentRc> {
        let visit = |child: &ComponentRc, current_found: &mut bool| -> Option<ComponentRc> {
            let component = child.try_borrow().ok()?;
            if let Some(container) = component.as_container() {
                return container.next_focus_holder_from(current, reverse, current_found);
            }
            if !component.accepts_focus() {
                return None;
            }
            match current {
                None => Some(Rc::clone(child)),
                Some(_) if *current_found => Some(Rc::clone(child)),
                Some(id) => {
                    if component.id() == id {
                        *current_found = true;
                    }
                    None
                }
            }
        };

        if reverse {
            self.children
                .iter()
                .rev()
                .find_map(|child| visit(child, current_found))
        } else {
            self.children
                .iter()
                .find_map(|child| visit(child, current_found))
        }
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Container {
    fn node(&self) -> &Node {
        &self.node
    }

    fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }

    fn offset_y(&mut self, delta: i32) {
        self.node.offset_y(delta);
        for child in &self.children {
            child.borrow_mut().offset_y(delta);
        }
    }

    fn update(&mut self, tick: u64) {
        for child in &self.children {
            child.borrow_mut().update(tick);
        }
    }

    /// Paints dirty children only.
    fn paint(&mut self, ctx: &mut PaintContext<'_>) {
        self.node.clear_dirty();
        for child in &self.children {
            let mut component = child.borrow_mut();
            if component.dirty() {
                component.paint(ctx);
            }
        }
    }

    fn as_container(&self) -> Option<&Container> {
        Some(self)
    }

    fn dirty(&self) -> bool {
        self.children.iter().any(|child| child.borrow().dirty())
    }

    fn repaint(&mut self) {
        for child in &self.children {
            child.borrow_mut().repaint();
        }
    }

    fn clear_dirty(&mut self) {
        self.node.clear_dirty();
        for child in &self.children {
            child.borrow_mut().clear_dirty();
        }
    }
}
