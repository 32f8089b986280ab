//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod group_bar;
pub mod handlers;
pub mod seat_grid;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::{Group, SeatId, SeatMap};
use crate::services::{self, bulk_fill, DragSession, Summary};
use crate::sync::{SyncEvent, SyncState};

pub use group_bar::GroupBar;
pub use seat_grid::SeatGrid;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// Seat assignments - the sole persisted state
    pub map: SeatMap,
    /// Per-group counts, recomputed on every mutation
    pub summary: Summary,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Currently selected group (if any)
    pub active_group: Option<Group>,
    /// Keyboard cursor position in the grid
    pub cursor: SeatId,
    /// Drag session in progress (if any)
    pub drag: Option<DragSession>,
    /// Column-count text for the bulk-fill input
    pub bulk_input: String,
    /// Transient status bar message
    pub status_message: String,

    // System resources
    /// Application configuration
    pub config: Config,
    /// Remote sync state
    pub sync: SyncState,
}

impl AppState {
    /// Creates a new `AppState` from the loaded configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        let sync = SyncState::new(config.sync.endpoint.clone(), config.sync.debounce_delay());

        // The grid always has a top-left seat.
        let cursor = SeatId {
            block: 1,
            row: 1,
            col: 1,
        };

        Self {
            map: SeatMap::new(),
            summary: Summary::default(),
            theme,
            active_group: None,
            cursor,
            drag: None,
            bulk_input: String::new(),
            status_message: String::new(),
            config,
            sync,
        }
    }

    /// Whether the bulk-fill column input is visible and focused.
    #[must_use]
    pub fn bulk_input_active(&self) -> bool {
        self.active_group.is_some_and(Group::is_bulk_fill)
    }

    /// Selects a group. Switching away from the bulk-fill group counts
    /// as the input losing focus, so a pending count commits first.
    pub fn select_group(&mut self, group: Group) {
        if self.bulk_input_active() && self.active_group != Some(group) {
            self.commit_bulk_input();
            self.bulk_input.clear();
        }
        self.active_group = Some(group);
        self.status_message.clear();
    }

    /// Applies the bulk column fill from the input field.
    ///
    /// Non-numeric or negative input is a silent no-op.
    pub fn commit_bulk_input(&mut self) {
        let input = self.bulk_input.clone();
        if let Some(changed) = bulk_fill::fill_from_input(&mut self.map, &input) {
            if changed > 0 {
                self.after_mutation();
            }
        }
    }

    /// Pointer press on a seat: starts a drag and processes the seat.
    pub fn press_seat(&mut self, seat: SeatId) {
        if let Some((session, change)) =
            services::begin_drag(&mut self.map, self.active_group, seat)
        {
            self.drag = Some(session);
            if change == services::SeatChange::Applied {
                self.after_mutation();
            }
        }
    }

    /// Pointer moved onto a seat while a drag is active.
    pub fn drag_to(&mut self, seat: SeatId) {
        let Some(mut session) = self.drag else {
            return;
        };
        let change = services::continue_drag(&mut self.map, &mut session, self.active_group, seat);
        self.drag = Some(session);
        if change == services::SeatChange::Applied {
            self.after_mutation();
        }
    }

    /// Pointer released: ends the drag session.
    pub fn release_drag(&mut self) {
        self.drag = None;
    }

    /// A plain click: press and release on one seat.
    pub fn click_seat(&mut self, seat: SeatId) {
        self.press_seat(seat);
        self.release_drag();
    }

    /// Toggles the seat under the keyboard cursor (click semantics).
    pub fn toggle_cursor_seat(&mut self) {
        self.click_seat(self.cursor);
    }

    /// Moves the keyboard cursor, clamping at the grid edges. Left and
    /// right travel across the aisle between the two blocks.
    pub fn move_cursor(&mut self, dx: i16, dy: i16) {
        let span = i16::from(self.cursor.span_col()) + dx;
        let row = i16::from(self.cursor.row) + dy;
        let (Ok(span), Ok(row)) = (u8::try_from(span), u8::try_from(row)) else {
            return;
        };
        if let Some(seat) = SeatId::from_span_col(row, span) {
            self.cursor = seat;
        }
    }

    /// Replaces local state wholesale with the pulled remote mapping.
    ///
    /// Does not schedule a push: remote state is already remote.
    pub fn apply_remote(&mut self, map: SeatMap) {
        self.map = map;
        self.summary = Summary::compute(&self.map);
    }

    /// Post-mutation bookkeeping: recompute the summary synchronously
    /// and reset the debounced push timer.
    fn after_mutation(&mut self) {
        self.summary = Summary::compute(&self.map);
        self.sync.note_mutation(Instant::now());
    }
}

/// Screen regions for the main UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Title bar
    pub title: Rect,
    /// Seat grid
    pub grid: Rect,
    /// Group selector bar
    pub groups: Rect,
    /// Status bar
    pub status: Rect,
}

/// Splits the terminal area into the fixed UI regions.
///
/// Pure function of the area; the renderer and the mouse handler both
/// rely on it producing identical regions for the same size.
#[must_use]
pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title bar
            Constraint::Min(12),    // Seat grid (9 rows + labels + borders)
            Constraint::Length(4),  // Group bar
            Constraint::Length(4),  // Status bar
        ])
        .split(area);

    AppLayout {
        title: chunks[0],
        grid: chunks[1],
        groups: chunks[2],
        status: chunks[3],
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    // The grid is fully constructed before the pull is issued, so
    // incoming remote state always has seats to land on.
    state.sync.start_pull();

    loop {
        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if handlers::handle_key_event(state, key)? {
                        break; // User quit
                    }
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let layout = compute_layout(Rect::new(0, 0, size.width, size.height));
                    handlers::handle_mouse_event(state, mouse, &layout)?;
                }
                // Terminal resized, will re-render on next loop
                _ => {}
            }
        }

        // Apply completed network calls
        while let Some(sync_event) = state.sync.poll() {
            match sync_event {
                SyncEvent::RemoteState(map) => state.apply_remote(map),
                SyncEvent::StatusChanged => {}
            }
        }

        // Fire the debounced push if it is due
        state.sync.tick(Instant::now(), &state.map);
    }

    // Flush a pending push so the last edits are not lost. Best effort:
    // push failures are never retried.
    let _ = state.sync.flush_blocking(&state.map);

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let layout = compute_layout(f.area());

    render_title_bar(f, layout.title, state);
    SeatGrid::render(f, layout.grid, state);
    GroupBar::render(f, layout.groups, state);
    StatusBar::render(f, layout.status, state, &state.theme);
}

/// Render title bar with the assigned-seat total
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = format!(" {} - {} seats assigned ", APP_NAME, state.map.len());

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}
