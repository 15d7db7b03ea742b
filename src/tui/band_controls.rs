//! Band selection controls, one row per visible band.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, BandSlot, Theme};

/// Band controls widget
pub struct BandControls;

impl BandControls {
    /// Render the controls for every visible band slot
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let lines: Vec<Line> = state
            .visible_slots()
            .into_iter()
            .map(|slot| Self::slot_line(state, slot, theme))
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Bands ")
            .border_style(Style::default().fg(theme.frame));

        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn slot_line(state: &AppState, slot: BandSlot, theme: &Theme) -> Line<'static> {
        let color = state.selections.get(slot);
        let attrs = color.attributes();
        let focused = state.focused == slot;

        let label_style = if focused {
            Style::default()
                .fg(theme.focus)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        let swatch_style = match attrs.swatch {
            Some(swatch) => Style::default()
                .bg(swatch.to_ratatui_color())
                .fg(attrs.text.to_ratatui_color()),
            None => Style::default().fg(theme.hint),
        };
        let (left, right) = if focused { ("◀ ", " ▶") } else { ("  ", "  ") };

        let mut line = Line::from(vec![
            Span::styled(format!("{:<12}", slot.label()), label_style),
            Span::styled(left, Style::default().fg(theme.focus)),
            Span::styled(format!(" {:<7}", color.label()), swatch_style),
            Span::styled(right, Style::default().fg(theme.focus)),
        ]);
        if focused {
            line = line.style(Style::default().bg(theme.selection_bg));
        }
        line
    }
}
