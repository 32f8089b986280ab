//! Seat-map operations: painting, bulk fill, and summary counts.

pub mod bulk_fill;
pub mod painter;
pub mod summary;

pub use painter::{begin_drag, continue_drag, DragSession, PaintAction, SeatChange};
pub use summary::Summary;
