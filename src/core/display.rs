//! Display trait: the hardware collaborator a screen drives.

use crate::core::input_event::InputEvent;

/// Number of programmable glyph slots on HD44780-style controllers.
pub const GLYPH_SLOTS: u8 = 8;

/// Slot the screen reserves for the checkmark drawn by checkboxes.
pub const CHECKMARK_SLOT: u8 = 7;

/// Highest bit pattern a glyph row may carry (5 pixels wide).
pub const GLYPH_ROW_MASK: u8 = 0b1_1111;

/// Eight rows of 5-bit patterns, top row first.
pub type GlyphBitmap = [u8; 8];

pub const CHECKMARK: GlyphBitmap = [
    0b00000,
    0b00000,
    0b00001,
    0b00010,
    0b10100,
    0b01000,
    0b00000,
    0b00000,
];

/// Minimal character display interface.
///
/// Coordinates are zero based column/row cells. Implementations must not wrap text onto the
/// next row; the screen never asks for writes beyond its configured size.
pub trait Display {
    /// Input accumulated since the previous poll. Edges fire once per press.
    fn poll_input(&mut self) -> InputEvent;

    /// Blank the entire display.
    fn clear(&mut self);

    /// Upload a programmable glyph into `slot` (`0..GLYPH_SLOTS`).
    fn define_glyph(&mut self, slot: u8, bitmap: &GlyphBitmap);

    fn draw_text(&mut self, x: u8, y: u8, text: &str);

    fn draw_glyph(&mut self, x: u8, y: u8, slot: u8);

    fn set_cursor_visible(&mut self, visible: bool);

    fn set_blink(&mut self, blink: bool);

    fn move_cursor(&mut self, x: u8, y: u8);
}

impl<D: Display + ?Sized> Display for Box<D> {
    fn poll_input(&mut self) -> InputEvent {
        (**self).poll_input()
    }

    fn clear(&mut self) {
        (**self).clear();
    }

    fn define_glyph(&mut self, slot: u8, bitmap: &GlyphBitmap) {
        (**self).define_glyph(slot, bitmap);
    }

    fn draw_text(&mut self, x: u8, y: u8, text: &str) {
        (**self).draw_text(x, y, text);
    }

    fn draw_glyph(&mut self, x: u8, y: u8, slot: u8) {
        (**self).draw_glyph(x, y, slot);
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        (**self).set_cursor_visible(visible);
    }

    fn set_blink(&mut self, blink: bool) {
        (**self).set_blink(blink);
    }

    fn move_cursor(&mut self, x: u8, y: u8) {
        (**self).move_cursor(x, y);
    }
}
