//! Built-in widgets.

pub mod button;
pub mod charset;
pub mod checkbox;
pub mod container;
pub mod label;
pub mod list;
pub mod scroll_container;
pub mod text;
pub mod text_field;

pub use button::Button;
pub use charset::CharacterSet;
pub use checkbox::Checkbox;
pub use container::Container;
pub use label::Label;
pub use list::List;
pub use scroll_container::ScrollContainer;
pub use text_field::TextField;
