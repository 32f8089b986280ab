//! Group selector bar with live occupancy counts.
//!
//! One button per group, selectable by keyboard (1-8 / a-h) or mouse
//! click. When the bulk-fill group is active, a numeric column-count
//! input is shown in place of the hint line.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Group;

use super::AppState;

/// Fixed width of one group button, in terminal cells.
const BUTTON_W: u16 = 9;

/// Group selector bar widget.
pub struct GroupBar;

impl GroupBar {
    /// Render the group buttons, counts, and the bulk input field.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;

        let mut button_spans: Vec<Span> = Vec::new();
        for group in Group::ALL {
            let count = state.summary.count(group);
            let is_active = state.active_group == Some(group);

            let text = format!(
                " {}:{} {:<3} ",
                group.index() + 1,
                group.label(),
                count
            );
            let mut style = Style::default().fg(theme.group_color(group));
            if is_active {
                style = style
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD);
            }
            button_spans.push(Span::styled(text, style));
        }
        button_spans.push(Span::styled(
            format!("  Total B-H: {}", state.summary.total_regular),
            Style::default().fg(theme.text),
        ));

        let second_line = if state.bulk_input_active() {
            Line::from(vec![
                Span::styled("Fill columns: ", Style::default().fg(theme.accent)),
                Span::styled(
                    format!("{}\u{2588}", state.bulk_input),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    "  (Enter: apply, applies on leaving too)",
                    Style::default().fg(theme.text_muted),
                ),
            ])
        } else {
            match state.active_group {
                Some(group) => Line::from(vec![
                    Span::styled("Active: ", Style::default().fg(theme.text_muted)),
                    Span::styled(
                        format!("group {}", group.label()),
                        Style::default().fg(theme.group_color(group)),
                    ),
                ]),
                None => Line::from(Span::styled(
                    "No group selected - pick one with 1-8",
                    Style::default().fg(theme.text_muted),
                )),
            }
        };

        let bar = Paragraph::new(vec![Line::from(button_spans), second_line])
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .title(" Groups ")
                    .borders(Borders::ALL)
                    .style(Style::default().fg(theme.primary).bg(theme.background)),
            );

        f.render_widget(bar, area);
    }

    /// The group button under a screen coordinate, if any.
    ///
    /// Buttons sit on the first inner row, each `BUTTON_W` cells wide,
    /// matching the spans built in [`Self::render`].
    #[must_use]
    pub fn group_at(area: Rect, x: u16, y: u16) -> Option<Group> {
        let inner_x = area.x.saturating_add(1);
        let inner_y = area.y.saturating_add(1);
        if y != inner_y || x < inner_x {
            return None;
        }
        let index = usize::from((x - inner_x) / BUTTON_W);
        Group::from_index(index)
    }
}
