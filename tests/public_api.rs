#![allow(unused_imports)]

use charcell_ui::{
    cell_width, Axis, Button, CharacterSet, Checkbox, Component, ComponentId, ComponentRc,
    Container, DebugLog, Display, EnvConfig, FocusHandle, GlyphBitmap, InputEvent, Label, List,
    MemoryDisplay, Node, PaintContext, Screen, ScreenError, ScrollContainer, TextField,
    TraceEvent, WeakComponent, WidgetError, CHECKMARK, CHECKMARK_SLOT, GLYPH_SLOTS,
};

#[test]
fn public_api_exports_compile() {}
