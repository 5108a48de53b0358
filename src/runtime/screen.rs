//! Screen: the root container and the input dispatch loop.

use crate::config::EnvConfig;
use crate::core::component::{Component, ComponentId, ComponentRc};
use crate::core::display::{Display, GlyphBitmap, CHECKMARK, CHECKMARK_SLOT, GLYPH_ROW_MASK, GLYPH_SLOTS};
use crate::core::focus::FocusHandle;
use crate::core::input_event::{Axis, InputEvent};
use crate::core::paint::{clamp_cell, PaintContext};
use crate::error::ScreenError;
use crate::logging::{DebugLog, TraceEvent};
use crate::widgets::container::Container;

/// A full screen of components on one display.
///
/// Build the tree with [`Screen::add`], then call [`Screen::update`] once per host loop
/// iteration. After each call every component has processed the input it received and can be
/// queried for its data.
///
/// Input dispatch is a two-state machine. While navigating, vertical deltas move focus between
/// focus-eligible components (wrapping at both ends) and select is delivered to the focus
/// holder. Once the holder returns true from `handle_input_event` it captures input: every
/// event goes to it until it returns false.
pub struct Screen<D: Display> {
    root: Container,
    display: D,
    focus: FocusHandle,
    captured: bool,
    cursor: (u8, u8),
    cleared: bool,
    first_frame_repainted: bool,
    navigation_axis: Axis,
    tick: u64,
    trace: DebugLog,
}

impl<D: Display> Screen<D> {
    /// Screen configured from the process environment (see [`EnvConfig`]).
    pub fn new(display: D, columns: u8, rows: u8) -> Self {
        Self::with_config(display, columns, rows, EnvConfig::process())
    }

    pub fn with_config(mut display: D, columns: u8, rows: u8, config: &EnvConfig) -> Self {
        display.define_glyph(CHECKMARK_SLOT, &CHECKMARK);
        Self {
            root: Container::with_size(columns, rows),
            display,
            focus: FocusHandle::new(),
            captured: false,
            cursor: (0, 0),
            cleared: false,
            first_frame_repainted: false,
            navigation_axis: config.navigation_axis,
            tick: 0,
            trace: DebugLog::from_config(config),
        }
    }

    /// Add a component at an absolute location.
    pub fn add(&mut self, component: ComponentRc, x: i8, y: i8) {
        self.root.add(component, x, y);
    }

    pub fn root(&self) -> &Container {
        &self.root
    }

    pub fn columns(&self) -> u8 {
        self.root.node().width()
    }

    pub fn rows(&self) -> u8 {
        self.root.node().height()
    }

    /// Number of completed update calls.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    /// Focus handle to pass to components that follow focus, such as scroll containers.
    pub fn focus_handle(&self) -> &FocusHandle {
        &self.focus
    }

    pub fn focus_holder(&self) -> Option<ComponentRc> {
        self.focus.component()
    }

    pub fn focus_holder_id(&self) -> Option<ComponentId> {
        self.focus.id()
    }

    /// Make `component` the focus holder, e.g. to pick the default button before the first
    /// update. Returns false (and changes nothing) when the component is not focus-eligible or
    /// not part of this screen. A capturing holder receives a cancel event first, so it restores
    /// and releases like a user cancel would.
    pub fn set_focus_holder(&mut self, component: &ComponentRc) -> bool {
        let (id, eligible) = match component.try_borrow() {
            Ok(component) => (component.id(), component.accepts_focus()),
            Err(_) => return false,
        };
        if !eligible || !self.root.contains(id) {
            return false;
        }
        let previous = self.focus.id();
        if let Some(holder) = self.focus.component() {
            if let Ok(mut holder) = holder.try_borrow_mut() {
                if self.captured {
                    // The holder must drop its own capture state along with the screen's.
                    holder.handle_input_event(&InputEvent::cancel());
                }
                holder.repaint();
            }
        }
        self.focus.set(id, component);
        component.borrow_mut().repaint();
        self.set_captured(false);
        if previous != Some(id) {
            self.trace.record(TraceEvent::FocusMoved {
                tick: self.tick,
                from: previous.map(ComponentId::raw),
                to: Some(id.raw()),
            });
        }
        true
    }

    /// Whether the focus holder is capturing all input.
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    pub fn navigation_axis(&self) -> Axis {
        self.navigation_axis
    }

    pub fn set_navigation_axis(&mut self, axis: Axis) {
        self.navigation_axis = axis;
    }

    pub fn cursor_location(&self) -> (u8, u8) {
        self.cursor
    }

    /// Position the hardware cursor. Clamped to the display.
    pub fn set_cursor_location(&mut self, x: u8, y: u8) {
        self.cursor = (
            clamp_cell(i32::from(x), self.columns()),
            clamp_cell(i32::from(y), self.rows()),
        );
    }

    /// Upload a user glyph. Slot 7 holds the checkmark and cannot be replaced.
    pub fn define_glyph(&mut self, slot: u8, bitmap: &GlyphBitmap) -> Result<(), ScreenError> {
        if slot >= GLYPH_SLOTS {
            return Err(ScreenError::GlyphSlotOutOfRange {
                slot,
                slots: GLYPH_SLOTS,
            });
        }
        if slot == CHECKMARK_SLOT {
            return Err(ScreenError::ReservedGlyphSlot { slot });
        }
        if let Some((row, bits)) = bitmap
            .iter()
            .enumerate()
            .find(|(_, bits)| **bits & !GLYPH_ROW_MASK != 0)
        {
            return Err(ScreenError::GlyphRowTooWide { row, bits: *bits });
        }
        self.display.define_glyph(slot, bitmap);
        Ok(())
    }

    pub fn set_debug_log(&mut self, trace: DebugLog) {
        self.trace = trace;
    }

    pub fn contains(&self, id: ComponentId) -> bool {
        self.root.contains(id)
    }

    pub fn dirty(&self) -> bool {
        self.root.dirty()
    }

    /// Schedule every component for painting on the next update.
    pub fn repaint(&mut self) {
        self.root.repaint();
    }

    /// Run one tick: update, poll input, dispatch, paint.
    pub fn update(&mut self) {
        if !self.cleared {
            self.display.clear();
            self.cleared = true;
        }

        self.root.update(self.tick);

        let event = self.display.poll_input();
        let previous_holder = self.focus.component();
        let previous = self.focus.id();
        if !event.is_empty() {
            self.dispatch(&event);
        }

        if self.focus.id().is_none() {
            if let Some(first) = self.root.next_focus_holder(None, false) {
                self.focus_on(&first);
            }
        }

        let current = self.focus.id();
        if previous != current {
            self.trace.record(TraceEvent::FocusMoved {
                tick: self.tick,
                from: previous.map(ComponentId::raw),
                to: current.map(ComponentId::raw),
            });
            if let Some(holder) = previous_holder {
                holder.borrow_mut().repaint();
            }
            if let Some(holder) = self.focus.component() {
                holder.borrow_mut().repaint();
            }
        }

        self.paint();

        // The first dirty-only pass after the initial clear does not reliably show up on real
        // controllers. Painting the whole tree again on the second tick does.
        if !self.first_frame_repainted {
            self.root.repaint();
            self.first_frame_repainted = true;
            self.trace
                .record(TraceEvent::FirstFrameRepaint { tick: self.tick });
        }

        self.tick += 1;
    }

    fn dispatch(&mut self, event: &InputEvent) {
        if self.captured || event.select {
            let captured = self.deliver(event);
            self.set_captured(captured);
            return;
        }

        let delta = self.navigation_axis.delta(event);
        if delta != 0 {
            self.advance_focus(delta < 0);
        }
    }

    fn deliver(&mut self, event: &InputEvent) -> bool {
        let Some(holder) = self.focus.component() else {
            self.trace.record(TraceEvent::EventDiscarded { tick: self.tick });
            return false;
        };
        let Ok(mut holder) = holder.try_borrow_mut() else {
            return false;
        };
        holder.handle_input_event(event)
    }

    fn advance_focus(&mut self, reverse: bool) {
        let current = self.focus.id();
        // Running off the end yields None once per cycle; one retry from the start wraps.
        let next = self
            .root
            .next_focus_holder(current, reverse)
            .or_else(|| self.root.next_focus_holder(None, reverse));
        match next {
            Some(next) => self.focus_on(&next),
            None => self.focus.clear(),
        }
    }

    fn focus_on(&mut self, component: &ComponentRc) {
        let id = component.borrow().id();
        self.focus.set(id, component);
    }

    fn set_captured(&mut self, captured: bool) {
        if self.captured != captured {
            self.captured = captured;
            self.trace.record(TraceEvent::CaptureChanged {
                tick: self.tick,
                holder: self.focus.id().map(ComponentId::raw),
                captured,
            });
        }
    }

    fn paint(&mut self) {
        let columns = self.columns();
        let rows = self.rows();
        let mut ctx = PaintContext::new(
            &mut self.display,
            columns,
            rows,
            self.focus.id(),
            self.cursor,
        );
        self.root.paint(&mut ctx);
        self.cursor = ctx.cursor_location();
        let (x, y) = self.cursor;
        self.display.move_cursor(x, y);
    }
}
