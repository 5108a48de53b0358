//! Display implementations.

pub mod memory_display;

pub use memory_display::{Cell, DrawOp, MemoryDisplay};
