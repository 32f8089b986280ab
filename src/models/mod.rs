//! Core data model: seats, groups, and the assignment mapping.

pub mod group;
pub mod seat;
pub mod seat_map;

pub use group::Group;
pub use seat::SeatId;
pub use seat_map::SeatMap;
