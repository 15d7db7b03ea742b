//! Status bar widget for the computed value and key hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the result line and the key hints
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let result_line = match &state.result {
            Ok(result) => Line::from(vec![
                Span::styled("Resistance: ", Style::default().fg(theme.frame)),
                Span::styled(
                    result.formatted.clone(),
                    Style::default()
                        .fg(theme.focus)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("   "),
                Span::styled("Tolerance: ", Style::default().fg(theme.frame)),
                Span::styled(result.tolerance_display(), Style::default().fg(theme.text)),
            ]),
            Err(err) => Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(err.to_string()),
            ]),
        };

        let help_line = Self::help_line(theme);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.frame));

        f.render_widget(Paragraph::new(vec![result_line, help_line]).block(block), area);
    }

    fn help_line(theme: &Theme) -> Line<'static> {
        let key = Style::default().fg(theme.focus);
        let text = Style::default().fg(theme.hint);
        Line::from(vec![
            Span::styled("↑↓", key),
            Span::styled(" band  ", text),
            Span::styled("←→", key),
            Span::styled(" color  ", text),
            Span::styled("4/5/m", key),
            Span::styled(" mode  ", text),
            Span::styled("q", key),
            Span::styled(" quit", text),
        ])
    }
}
