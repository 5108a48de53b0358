//! Retained-mode widgets for character-cell displays driven by a rotary encoder.
//!
//! Invariant: single output gate. Components draw only through the
//! [`core::paint::PaintContext`] the screen hands them, so every write is clipped to the
//! display and nothing wraps.
//!
//! # Public API Overview
//! - Build a [`Screen`] over any [`Display`] and add widgets to it.
//! - Call [`Screen::update`] once per loop iteration; it polls input, moves focus or delivers
//!   the event to the focus holder, then repaints dirty components.
//! - Wrap long forms in a [`ScrollContainer`] so focus movement scrolls them into view.
//! - Drive tests and hosted previews with [`MemoryDisplay`].

pub mod config;
pub mod error;
pub mod logging;

pub mod core;
pub mod platform;
pub mod runtime;
pub mod widgets;

/// Component contract and identity.
pub use crate::core::component::{Component, ComponentId, ComponentRc, Node, WeakComponent};
/// Display driver seam and glyph constants.
pub use crate::core::display::{Display, GlyphBitmap, CHECKMARK, CHECKMARK_SLOT, GLYPH_SLOTS};
pub use crate::core::focus::FocusHandle;
pub use crate::core::input_event::{Axis, InputEvent};
pub use crate::core::paint::PaintContext;

/// Built-in widgets.
pub use crate::widgets::{
    Button, CharacterSet, Checkbox, Container, Label, List, ScrollContainer, TextField,
};

pub use crate::config::EnvConfig;
pub use crate::error::{ScreenError, WidgetError};
pub use crate::logging::{DebugLog, TraceEvent};
pub use crate::platform::memory_display::MemoryDisplay;
pub use crate::runtime::screen::Screen;

/// Cell width helper used for widget sizing.
pub use crate::core::text::cell_width;
