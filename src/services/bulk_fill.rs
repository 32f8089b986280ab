//! Bulk column fill for the distinguished group.
//!
//! Given a column count N, every seat whose full-span column index is
//! at most N is assigned group A; past N, seats are cleared only if
//! they currently carry A. Seats held by other groups are never
//! touched.

use crate::models::{Group, SeatId, SeatMap};

/// Applies the column fill. Returns the number of seats that changed.
///
/// Counts above the full column span behave as "fill everything".
pub fn fill_columns(map: &mut SeatMap, col_count: u32) -> usize {
    let mut changed = 0;
    for seat in SeatId::all() {
        let inside = u32::from(seat.span_col()) <= col_count;
        let did_change = if inside {
            map.set(seat, Some(Group::A))
        } else if map.get(seat) == Some(Group::A) {
            map.set(seat, None)
        } else {
            false
        };
        if did_change {
            changed += 1;
        }
    }
    changed
}

/// Parses the bulk input field and applies the fill.
///
/// Non-numeric or negative input is a silent no-op; the input widget
/// surfaces no error.
pub fn fill_from_input(map: &mut SeatMap, input: &str) -> Option<usize> {
    let col_count: u32 = input.trim().parse().ok()?;
    Some(fill_columns(map, col_count))
}
