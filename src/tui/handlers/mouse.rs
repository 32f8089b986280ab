//! Mouse input handler: the click/drag paint surface.
//!
//! Left-button down over a seat starts a drag session and processes
//! that seat; drag-move events over seats are subsequent events;
//! button up ends the session wherever it happens. Events over labels,
//! the aisle, or empty space are ignored. Clicking a group button in
//! the group bar selects it.

use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::group_bar::GroupBar;
use crate::tui::seat_grid::GridGeometry;
use crate::tui::{AppLayout, AppState};

/// Handle a mouse event against the current screen layout.
pub fn handle_mouse_event(
    state: &mut AppState,
    mouse: MouseEvent,
    layout: &AppLayout,
) -> Result<()> {
    let (x, y) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let grid = GridGeometry::new(layout.grid);
            if let Some(seat) = grid.seat_at(x, y) {
                state.press_seat(seat);
            } else if let Some(group) = GroupBar::group_at(layout.groups, x, y) {
                state.select_group(group);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if state.drag.is_some() {
                let grid = GridGeometry::new(layout.grid);
                if let Some(seat) = grid.seat_at(x, y) {
                    state.drag_to(seat);
                }
            }
        }
        // Button up anywhere ends the session.
        MouseEventKind::Up(MouseButton::Left) => state.release_drag(),
        _ => {}
    }

    Ok(())
}
