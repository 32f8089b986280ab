//! Input routing: keyboard and mouse events.

pub mod keys;
pub mod mouse;

pub use keys::handle_key_event;
pub use mouse::handle_mouse_event;
