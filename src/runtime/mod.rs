//! Runtime orchestration.

pub mod screen;

pub use screen::Screen;
