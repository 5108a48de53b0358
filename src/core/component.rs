//! Component trait and the node state every component embeds.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::input_event::InputEvent;
use crate::core::paint::PaintContext;
use crate::widgets::container::Container;

/// Shared handle to a component in the tree.
pub type ComponentRc = Rc<RefCell<dyn Component>>;

/// Non-owning handle to a component in the tree.
pub type WeakComponent = Weak<RefCell<dyn Component>>;

/// Stable identifier for a component.
///
/// Semantics:
/// - IDs are unique within the process.
/// - IDs are never reused.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ComponentId(u64);

impl ComponentId {
    fn next() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Location, size and dirty state of a component.
///
/// `x` and `y` are zero based, absolute character cells. They are signed because a scroll
/// container moves children above its viewport.
#[derive(Debug)]
pub struct Node {
    id: ComponentId,
    x: i8,
    y: i8,
    width: u8,
    height: u8,
    dirty: bool,
}

impl Node {
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            id: ComponentId::next(),
            x: 0,
            y: 0,
            width,
            height,
            dirty: false,
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn set_location(&mut self, x: i8, y: i8) {
        self.x = x;
        self.y = y;
    }

    pub fn set_size(&mut self, width: u8, height: u8) {
        self.width = width;
        self.height = height;
    }

    /// Moves the node by a row delta, saturating at the `i8` range.
    pub fn offset_y(&mut self, delta: i32) {
        self.y = saturate_i8(i32::from(self.y) + delta);
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

pub(crate) fn saturate_i8(value: i32) -> i8 {
    value.clamp(i32::from(i8::MIN), i32::from(i8::MAX)) as i8
}

/// Capability contract shared by every widget and container.
pub trait Component {
    fn node(&self) -> &Node;

    fn node_mut(&mut self) -> &mut Node;

    fn id(&self) -> ComponentId {
        self.node().id()
    }

    fn x(&self) -> i8 {
        self.node().x()
    }

    fn y(&self) -> i8 {
        self.node().y()
    }

    /// `(width, height)` in character cells.
    fn size(&self) -> (u8, u8) {
        (self.node().width(), self.node().height())
    }

    /// Set the absolute location of this component. Only the owning container should call this.
    fn set_location(&mut self, x: i8, y: i8) {
        self.node_mut().set_location(x, y);
    }

    /// Move by `delta` rows. Containers move their whole subtree.
    fn offset_y(&mut self, delta: i32) {
        self.node_mut().offset_y(delta);
    }

    /// Whether the focus subsystem may hand focus to this component. Only focus-eligible
    /// components receive input events.
    fn accepts_focus(&self) -> bool {
        false
    }

    /// First step of the tick. Reset or advance per-tick state here, before input and paint.
    fn update(&mut self, _tick: u64) {}

    /// Called while this component holds focus and an input event arrives.
    ///
    /// Returns true to keep exclusive capture of input, false to release it and resume focus
    /// navigation.
    fn handle_input_event(&mut self, _event: &InputEvent) -> bool {
        false
    }

    /// Draw at the component's location without overflowing its size. Implementations must
    /// leave the component clean.
    fn paint(&mut self, ctx: &mut PaintContext<'_>);

    /// Structural tag used for tree traversal.
    fn as_container(&self) -> Option<&Container> {
        None
    }

    fn is_container(&self) -> bool {
        self.as_container().is_some()
    }

    fn dirty(&self) -> bool {
        self.node().is_dirty()
    }

    /// Schedule this component to be painted on the next tick.
    fn repaint(&mut self) {
        self.node_mut().mark_dirty();
    }

    /// Drop pending paint work without painting.
    fn clear_dirty(&mut self) {
        self.node_mut().clear_dirty();
    }
}
