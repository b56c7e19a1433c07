//! Keyboard, mouse and scroll handling.

pub mod input_data;
pub mod input_operations;

pub use input_data::InputState;
pub use input_operations::{apply, handle_cursor_moved, handle_keyboard, handle_scroll};
