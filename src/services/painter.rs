//! Drag-paint state machine.
//!
//! Translates pointer press/move/release sequences into seat
//! assignments. The paint-vs-erase action is decided once, when the
//! drag starts, and held for the whole session:
//!
//! - erase, if the first seat already carries the active group;
//! - paint otherwise.
//!
//! A plain click is a one-seat drag. Painting the bulk-fill group
//! directly is a no-op by design; that group only accepts the column
//! fill.

use crate::models::{Group, SeatId, SeatMap};

/// The action held for the duration of a drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintAction {
    /// Assign the active group to seats that do not already carry it.
    Paint,
    /// Clear seats that still carry the active group.
    Erase,
}

/// A drag in progress: the held action and duplicate suppression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    action: PaintAction,
    /// Last seat processed; move events without seat change repeat it.
    last_seat: SeatId,
}

impl DragSession {
    /// The action fixed at drag start.
    #[must_use]
    pub const fn action(&self) -> PaintAction {
        self.action
    }
}

/// Outcome of one pointer event against the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatChange {
    /// The seat's assignment changed.
    Applied,
    /// Nothing to do (duplicate event, no-op rules, or already in the target state).
    Unchanged,
}

/// Starts a drag on `seat` and processes it as the first event.
///
/// Returns `None` without touching the map when no group is selected
/// or the selected group is the bulk-fill group.
pub fn begin_drag(
    map: &mut SeatMap,
    active: Option<Group>,
    seat: SeatId,
) -> Option<(DragSession, SeatChange)> {
    let group = active?;
    if group.is_bulk_fill() {
        return None;
    }

    let action = if map.get(seat) == Some(group) {
        PaintAction::Erase
    } else {
        PaintAction::Paint
    };

    let session = DragSession {
        action,
        last_seat: seat,
    };
    let change = apply(map, group, action, seat);
    Some((session, change))
}

/// Processes a subsequent event within a drag.
///
/// Repeats on the same seat as the immediately previous event are
/// skipped; pointer-move without a seat change produces them.
pub fn continue_drag(
    map: &mut SeatMap,
    session: &mut DragSession,
    active: Option<Group>,
    seat: SeatId,
) -> SeatChange {
    if seat == session.last_seat {
        return SeatChange::Unchanged;
    }
    session.last_seat = seat;

    // The group cannot be deselected mid-drag through the UI, but the
    // contract stays a no-op if it somehow is.
    let Some(group) = active else {
        return SeatChange::Unchanged;
    };

    apply(map, group, session.action, seat)
}

/// Applies the held action to one seat.
fn apply(map: &mut SeatMap, group: Group, action: PaintAction, seat: SeatId) -> SeatChange {
    let changed = match action {
        // Paint overwrites other groups but re-painting is idempotent.
        PaintAction::Paint => map.get(seat) != Some(group) && map.set(seat, Some(group)),
        // Erase only clears the seat if it still carries the active group.
        PaintAction::Erase => map.get(seat) == Some(group) && map.set(seat, None),
    };

    if changed {
        SeatChange::Applied
    } else {
        SeatChange::Unchanged
    }
}
