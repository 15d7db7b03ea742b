//! Resistor body widget.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Theme;
use crate::models::{Band, ResistorConfiguration};

/// Width of each lead wire in cells.
const LEAD_WIDTH: usize = 6;

/// Draws the resistor body with its colored bands.
pub struct ResistorView;

impl ResistorView {
    /// Render the resistor for a configuration
    pub fn render(f: &mut Frame, area: Rect, config: &ResistorConfiguration, theme: &Theme) {
        let body = Self::body_spans(config);
        let blank = " ".repeat(LEAD_WIDTH);
        let lead = "━".repeat(LEAD_WIDTH);
        let lead_style = Style::default().fg(theme.hint);

        let edge_row = || {
            let mut spans = vec![Span::raw(blank.clone())];
            spans.extend(body.iter().cloned());
            spans.push(Span::raw(blank.clone()));
            Line::from(spans)
        };

        let mut wire_row = vec![Span::styled(lead.clone(), lead_style)];
        wire_row.extend(body.iter().cloned());
        wire_row.push(Span::styled(lead.clone(), lead_style));

        let lines = vec![edge_row(), Line::from(wire_row), edge_row()];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} Resistor ", config.mode()))
            .border_style(Style::default().fg(theme.frame));

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(paragraph, area);
    }

    /// Body cells: padding in the body color, two cells per band, and a wider
    /// gap before the tolerance band.
    fn body_spans(config: &ResistorConfiguration) -> Vec<Span<'static>> {
        let body = Style::default().bg(config.mode().body_color().to_ratatui_color());
        let bands: Vec<Band> = config.bands().collect();
        let last = bands.len().saturating_sub(1);

        let mut spans = vec![Span::styled("  ", body)];
        for (index, band) in bands.iter().enumerate() {
            let gap = if index == last { "   " } else { " " };
            if index > 0 {
                spans.push(Span::styled(gap, body));
            }
            let fill = band
                .color
                .attributes()
                .swatch
                .map_or(body, |swatch| Style::default().bg(swatch.to_ratatui_color()));
            spans.push(Span::styled("  ", fill));
        }
        spans.push(Span::styled("  ", body));
        spans
    }
}
