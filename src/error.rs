use thiserror::Error;

/// Misconfiguration of a widget by the host program.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WidgetError {
    #[error("list is full: capacity is {capacity} items")]
    ListFull { capacity: usize },

    #[error("character set '{name}' has no ranges")]
    EmptyCharacterSet { name: String },

    #[error("character set '{name}' has an inverted range {low:?}..={high:?}")]
    InvalidRange { name: String, low: char, high: char },
}

/// Misuse of the screen's hardware-facing operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScreenError {
    #[error("glyph slot {slot} is reserved for the checkmark")]
    ReservedGlyphSlot { slot: u8 },

    #[error("glyph slot {slot} is out of range; displays have {slots} slots")]
    GlyphSlotOutOfRange { slot: u8, slots: u8 },

    #[error("glyph row {row} is {bits:#07b}; rows are 5 pixels wide")]
    GlyphRowTooWide { row: usize, bits: u8 },
}
