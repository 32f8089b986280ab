//! Status bar widget: sync indicator, status messages, and key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::sync::SyncStatus;

use super::{AppState, Theme};

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with the sync indicator and hints.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let sync_color = match state.sync.status {
            SyncStatus::Idle => theme.success,
            SyncStatus::Loading | SyncStatus::Saving => theme.warning,
            SyncStatus::Error => theme.error,
        };

        let mut first_line = vec![
            Span::styled("Sync: ", Style::default().fg(theme.primary)),
            Span::styled(state.sync.status.to_string(), Style::default().fg(sync_color)),
        ];
        if !state.sync.last_message.is_empty() {
            first_line.push(Span::raw("  "));
            first_line.push(Span::styled(
                state.sync.last_message.clone(),
                Style::default().fg(theme.text_muted),
            ));
        }
        if !state.status_message.is_empty() {
            first_line.push(Span::raw("  "));
            first_line.push(Span::styled(
                state.status_message.clone(),
                Style::default().fg(theme.text),
            ));
        }

        let help_line = Self::help_line(theme);

        let status = Paragraph::new(vec![Line::from(first_line), help_line])
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    fn help_line(theme: &Theme) -> Line<'static> {
        let hints: [(&str, &str); 5] = [
            ("1-8", "select group"),
            ("click/drag", "paint or erase"),
            ("arrows", "move cursor"),
            ("Space", "toggle seat"),
            ("q", "quit"),
        ];

        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled("Help: ", Style::default().fg(theme.primary)));
        for (i, (key, action)) in hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::raw(action));
        }

        Line::from(spans)
    }
}
