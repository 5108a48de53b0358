//! Core interfaces and types.

pub mod component;
pub mod display;
pub mod focus;
pub mod input_event;
pub mod paint;
pub mod text;
