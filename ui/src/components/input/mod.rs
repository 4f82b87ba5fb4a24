//! Input components bound to draft list fields

pub mod button_selector;
pub mod color_selector;
pub mod label_input;
pub mod member_selector;
pub mod palette_selector;
pub mod radio_input;
pub mod simple_input;

pub use button_selector::*;
pub use color_selector::*;
pub use label_input::*;
pub use member_selector::*;
pub use palette_selector::*;
pub use radio_input::*;
pub use simple_input::*;
