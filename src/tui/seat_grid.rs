//! Seat grid widget and its screen geometry.
//!
//! The grid is a fixed 9x44 layout split into two blocks with an aisle
//! between them, plus row and column header labels. The same geometry
//! computation drives both rendering and mouse hit-testing, so a click
//! always lands on the seat it visually covers.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::{COLS_PER_BLOCK, COL_LABEL_BASE, ROWS, TOTAL_COLS};
use crate::models::SeatId;

use super::AppState;

/// Width of the row-label gutter, in terminal cells.
const LABEL_W: u16 = 4;
/// Width of one seat cell.
const CELL_W: u16 = 2;
/// Width of the aisle between the two blocks.
const AISLE_W: u16 = 2;

/// Screen geometry of the seat grid inside its widget area.
///
/// Pure function of the area rectangle; recomputed on demand by the
/// renderer and the mouse handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    inner: Rect,
}

impl GridGeometry {
    /// Builds the geometry for the widget's outer area (border included).
    #[must_use]
    pub fn new(area: Rect) -> Self {
        // One cell of border on every side; the first inner row holds
        // the column labels, seat rows follow.
        let inner = Rect {
            x: area.x.saturating_add(1),
            y: area.y.saturating_add(1),
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };
        Self { inner }
    }

    /// Horizontal offset of a full-span column from the gutter edge.
    fn col_offset(span_col: u8) -> u16 {
        let base = u16::from(span_col - 1) * CELL_W;
        if span_col > COLS_PER_BLOCK {
            base + AISLE_W
        } else {
            base
        }
    }

    /// Screen position of a seat's cell, if it fits in the area.
    #[must_use]
    pub fn seat_origin(&self, seat: SeatId) -> Option<(u16, u16)> {
        let x = self
            .inner
            .x
            .checked_add(LABEL_W + Self::col_offset(seat.span_col()))?;
        let y = self.inner.y.checked_add(u16::from(seat.row))?;
        let fits = x + CELL_W <= self.inner.x + self.inner.width
            && y < self.inner.y + self.inner.height;
        fits.then_some((x, y))
    }

    /// The seat under a screen coordinate, if any.
    ///
    /// Labels, the aisle, borders, and anything outside the grid all
    /// return `None`; drags over them are ignored.
    #[must_use]
    pub fn seat_at(&self, x: u16, y: u16) -> Option<SeatId> {
        if x < self.inner.x
            || y <= self.inner.y
            || x >= self.inner.x + self.inner.width
            || y >= self.inner.y + self.inner.height
        {
            return None;
        }

        let row = u8::try_from(y - self.inner.y).ok()?;
        if row > ROWS {
            return None;
        }

        let rel = x.checked_sub(self.inner.x + LABEL_W)?;
        let block1_w = u16::from(COLS_PER_BLOCK) * CELL_W;
        let span_col = if rel < block1_w {
            u8::try_from(rel / CELL_W).ok()? + 1
        } else if rel < block1_w + AISLE_W {
            return None; // the aisle
        } else {
            let rel2 = rel - block1_w - AISLE_W;
            if rel2 >= u16::from(COLS_PER_BLOCK) * CELL_W {
                return None;
            }
            u8::try_from(rel2 / CELL_W).ok()? + COLS_PER_BLOCK + 1
        };

        SeatId::from_span_col(row, span_col)
    }
}

/// Seat grid widget.
pub struct SeatGrid;

impl SeatGrid {
    /// Render the seat grid with header labels.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;

        // The span widths below must stay in lockstep with GridGeometry:
        // a 4-cell gutter, 2-cell seats, and a 2-cell aisle.
        let mut lines: Vec<Line> = Vec::with_capacity(usize::from(ROWS) + 1);
        lines.push(Self::column_label_line(state));

        for row in 1..=ROWS {
            let mut spans: Vec<Span> = Vec::with_capacity(usize::from(TOTAL_COLS) + 2);

            // Row headers count down from the top.
            let row_label = ROWS - row + 1;
            spans.push(Span::styled(
                format!("{row_label:>3} "),
                Style::default().fg(theme.text_muted),
            ));

            for span_col in 1..=TOTAL_COLS {
                if span_col == COLS_PER_BLOCK + 1 {
                    spans.push(Span::raw("  ")); // the aisle
                }
                let Some(seat) = SeatId::from_span_col(row, span_col) else {
                    continue;
                };
                spans.push(Self::seat_span(state, seat));
            }

            lines.push(Line::from(spans));
        }

        let grid = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .title(" Seats ")
                    .borders(Borders::ALL)
                    .style(Style::default().fg(theme.primary).bg(theme.background)),
            );

        f.render_widget(grid, area);
    }

    /// One 2-wide cell for a seat: its group letter or an empty marker.
    fn seat_span(state: &AppState, seat: SeatId) -> Span<'static> {
        let theme = &state.theme;
        let group = state.map.get(seat);

        let text = match group {
            Some(g) => format!("{} ", g.label()),
            None => "\u{b7} ".to_string(),
        };

        let mut style = match group {
            Some(g) => Style::default().fg(theme.group_color(g)),
            None => Style::default().fg(theme.text_muted),
        };
        if seat == state.cursor {
            style = style.bg(theme.highlight_bg).add_modifier(Modifier::BOLD);
        }

        Span::styled(text, style)
    }

    /// Column header labels, numbered from the fixed base offset.
    ///
    /// Cells are two characters wide, so labels show their last two
    /// digits; the full range appears in the widget title elsewhere.
    fn column_label_line(state: &AppState) -> Line<'static> {
        let theme = &state.theme;
        let mut spans: Vec<Span> = Vec::with_capacity(usize::from(TOTAL_COLS) + 2);
        spans.push(Span::raw("    "));

        for span_col in 1..=TOTAL_COLS {
            if span_col == COLS_PER_BLOCK + 1 {
                spans.push(Span::raw("  "));
            }
            let label = (COL_LABEL_BASE + u16::from(span_col)) % 100;
            spans.push(Span::styled(
                format!("{label:<2}"),
                Style::default().fg(theme.text_muted),
            ));
        }

        Line::from(spans)
    }
}
