//! ScrollContainer: a fixed-height window over rows of children.
//!
//! Children are added with locations relative to the container's own frame and may extend
//! below its height. Whenever focus moves to a descendant outside the window, every child is
//! shifted by the minimum number of rows that brings it into view.

use crate::core::component::{Component, ComponentId, ComponentRc, Node};
use crate::core::focus::FocusHandle;
use crate::core::paint::PaintContext;
use crate::widgets::container::Container;

pub struct ScrollContainer {
    container: Container,
    focus: FocusHandle,
    last_focus: Option<ComponentId>,
    layout_applied: bool,
    scroll_offset: i32,
}

impl ScrollContainer {
    /// `focus` is the screen's focus handle; scrolling follows its holder.
    pub fn new(focus: &FocusHandle, width: u8, height: u8) -> Self {
        Self {
            container: Container::with_size(width, height),
            focus: focus.clone(),
            last_focus: None,
            layout_applied: false,
            scroll_offset: 0,
        }
    }

    /// Add a child at a location relative to this container.
    pub fn add(&mut self, component: ComponentRc, x: i8, y: i8) {
        self.container.add(component.clone(), x, y);
        if self.layout_applied {
            let delta = i32::from(self.container.y()) + self.scroll_offset;
            component.borrow_mut().offset_y(delta);
        }
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Rows the content has been scrolled up by.
    pub fn scroll_offset(&self) -> i32 {
        -self.scroll_offset
    }

    /// First and last absolute row of the viewport.
    pub fn viewport(&self) -> (i32, i32) {
        let top = i32::from(self.container.y());
        let bottom = top + i32::from(self.container.node().height()) - 1;
        (top, bottom)
    }

    /// Absolute row of the focus holder when it is a descendant that changed since the last
    /// scroll and sits outside the viewport.
    fn scroll_target(&self) -> Option<i32> {
        let focus_id = self.focus.id()?;
        if self.last_focus == Some(focus_id) {
            return None;
        }
        let holder = self.container.find(focus_id)?;
        let focus_y = i32::from(holder.try_borrow().ok()?.y());
        let (top, bottom) = self.viewport();
        if focus_y < top || focus_y > bottom {
            Some(focus_y)
        } else {
            None
        }
    }

    pub fn scroll_needed(&self) -> bool {
        self.scroll_target().is_some()
    }

    fn offset_children(&mut self, delta: i32) {
        for child in self.container.children() {
            child.borrow_mut().offset_y(delta);
        }
    }

    fn in_viewport(&self, y: i8) -> bool {
        let (top, bottom) = self.viewport();
        (top..=bottom).contains(&i32::from(y))
    }
}

impl Component for ScrollContainer {
    fn node(&self) -> &Node {
        self.container.node()
    }

    fn node_mut(&mut self) -> &mut Node {
        self.container.node_mut()
    }

    fn offset_y(&mut self, delta: i32) {
        if self.layout_applied {
            self.container.offset_y(delta);
        } else {
            // Children are still in local rows; the first update places them.
            self.container.node_mut().offset_y(delta);
        }
    }

    fn update(&mut self, tick: u64) {
        if !self.layout_applied {
            let origin = i32::from(self.container.y());
            self.offset_children(origin);
            self.layout_applied = true;
        }
        self.container.update(tick);
    }

    fn paint(&mut self, ctx: &mut PaintContext<'_>) {
        self.container.node_mut().clear_dirty();
        if let Some(focus_y) = self.scroll_target() {
            let (top, bottom) = self.viewport();
            let x = i32::from(self.container.x());
            let width = usize::from(self.container.node().width());
            for row in top..=bottom {
                ctx.blank(x, row, width);
            }

            let delta = if focus_y > bottom {
                bottom - focus_y
            } else {
                top - focus_y
            };
            self.offset_children(delta);
            self.scroll_offset += delta;
            self.last_focus = self.focus.id();

            // Content entering the window was cleared above; redraw all of it.
            self.container.repaint();
        }

        // Nested containers may straddle the window; the clip keeps their rows inside it.
        let (top, bottom) = self.viewport();
        let clip = ctx.clip_rows(top, bottom);
        for child in self.container.children() {
            let mut component = child.borrow_mut();
            let visible = component.is_container() || self.in_viewport(component.y());
            if component.dirty() && visible {
                component.paint(ctx);
            } else {
                component.clear_dirty();
            }
        }
        ctx.restore_clip(clip);
    }

    fn as_container(&self) -> Option<&Container> {
        Some(&self.container)
    }

    fn dirty(&self) -> bool {
        self.container.dirty() || self.scroll_needed()
    }

    fn repaint(&mut self) {
        self.container.repaint();
    }

    fn clear_dirty(&mut self) {
        self.container.clear_dirty();
    }
}
