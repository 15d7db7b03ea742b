//! Terminal user interface: the interactive calculator.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and the widgets using Ratatui. Every selection change rebuilds an
//! immutable [`ResistorConfiguration`] and recalculates.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

pub mod band_controls;
pub mod resistor_view;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout as RatatuiLayout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::debug;

use crate::config::{Config, DefaultsConfig};
use crate::constants::APP_NAME;
use crate::error::InvalidBandError;
use crate::models::{BandColor, BandRole, ResistorConfiguration, ResistorMode};
use crate::services::{calculate, CalculationResult};

pub use band_controls::BandControls;
pub use resistor_view::ResistorView;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// One selectable band position in the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandSlot {
    /// First digit
    Band1,
    /// Second digit
    Band2,
    /// Third digit, five-band mode only
    Band3,
    /// Multiplier
    Multiplier,
    /// Tolerance
    Tolerance,
}

impl BandSlot {
    const ALL: [Self; 5] = [
        Self::Band1,
        Self::Band2,
        Self::Band3,
        Self::Multiplier,
        Self::Tolerance,
    ];

    /// Role of the band in this slot.
    #[must_use]
    pub const fn role(self) -> BandRole {
        match self {
            Self::Band1 | Self::Band2 | Self::Band3 => BandRole::Digit,
            Self::Multiplier => BandRole::Multiplier,
            Self::Tolerance => BandRole::Tolerance,
        }
    }

    /// Control label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Band1 => "Band 1",
            Self::Band2 => "Band 2",
            Self::Band3 => "Band 3",
            Self::Multiplier => "Multiplier",
            Self::Tolerance => "Tolerance",
        }
    }
}

/// Current color in every slot, including band 3 while it is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selections {
    /// First digit
    pub band1: BandColor,
    /// Second digit
    pub band2: BandColor,
    /// Third digit
    pub band3: BandColor,
    /// Multiplier
    pub multiplier: BandColor,
    /// Tolerance
    pub tolerance: BandColor,
}

impl Selections {
    /// Reads one slot.
    #[must_use]
    pub const fn get(&self, slot: BandSlot) -> BandColor {
        match slot {
            BandSlot::Band1 => self.band1,
            BandSlot::Band2 => self.band2,
            BandSlot::Band3 => self.band3,
            BandSlot::Multiplier => self.multiplier,
            BandSlot::Tolerance => self.tolerance,
        }
    }

    /// Writes one slot.
    pub fn set(&mut self, slot: BandSlot, color: BandColor) {
        match slot {
            BandSlot::Band1 => self.band1 = color,
            BandSlot::Band2 => self.band2 = color,
            BandSlot::Band3 => self.band3 = color,
            BandSlot::Multiplier => self.multiplier = color,
            BandSlot::Tolerance => self.tolerance = color,
        }
    }
}

impl From<&DefaultsConfig> for Selections {
    fn from(defaults: &DefaultsConfig) -> Self {
        Self {
            band1: defaults.band1,
            band2: defaults.band2,
            band3: defaults.band3,
            multiplier: defaults.multiplier,
            tolerance: defaults.tolerance,
        }
    }
}

/// Application state for the interactive calculator.
#[derive(Debug)]
pub struct AppState {
    /// Four- or five-band layout
    pub mode: ResistorMode,
    /// Band selections
    pub selections: Selections,
    /// Slot receiving color changes
    pub focused: BandSlot,
    /// Active color theme
    pub theme: Theme,
    /// Result of the latest calculation
    pub result: Result<CalculationResult, InvalidBandError>,
    /// Set when the user asks to quit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the initial state from the configured defaults.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let mode = config.defaults.mode;
        let selections = Selections::from(&config.defaults);
        let configuration = Self::build_configuration(mode, &selections);

        Self {
            mode,
            selections,
            focused: BandSlot::Band1,
            theme: Theme::from_mode(config.ui.theme_mode),
            result: calculate(&configuration),
            should_quit: false,
        }
    }

    /// Slots shown in the current mode, in band order.
    #[must_use]
    pub fn visible_slots(&self) -> Vec<BandSlot> {
        BandSlot::ALL
            .into_iter()
            .filter(|slot| self.mode == ResistorMode::FiveBand || *slot != BandSlot::Band3)
            .collect()
    }

    /// The configuration the current selections describe.
    #[must_use]
    pub fn configuration(&self) -> ResistorConfiguration {
        Self::build_configuration(self.mode, &self.selections)
    }

    fn build_configuration(mode: ResistorMode, selections: &Selections) -> ResistorConfiguration {
        match mode {
            ResistorMode::FourBand => ResistorConfiguration::four_band(
                selections.band1,
                selections.band2,
                selections.multiplier,
                selections.tolerance,
            ),
            ResistorMode::FiveBand => ResistorConfiguration::five_band(
                selections.band1,
                selections.band2,
                selections.band3,
                selections.multiplier,
                selections.tolerance,
            ),
        }
    }

    fn recalculate(&mut self) {
        self.result = calculate(&self.configuration());
    }

    /// Switches between four- and five-band layouts.
    pub fn set_mode(&mut self, mode: ResistorMode) {
        self.mode = mode;
        // Band 3 disappears in four-band mode
        if !self.visible_slots().contains(&self.focused) {
            self.focused = BandSlot::Band2;
        }
        debug!(%mode, "switched mode");
        self.recalculate();
    }

    /// Moves focus by `delta` visible slots, wrapping around.
    pub fn move_focus(&mut self, delta: isize) {
        let slots = self.visible_slots();
        let current = slots
            .iter()
            .position(|slot| *slot == self.focused)
            .unwrap_or(0);
        let next = wrap_index(current, delta, slots.len());
        self.focused = slots[next];
    }

    /// Steps the focused slot through its role's options, wrapping around.
    pub fn cycle_color(&mut self, delta: isize) {
        let options = self.focused.role().options();
        let current = self.selections.get(self.focused);
        let index = options
            .iter()
            .position(|color| *color == current)
            .unwrap_or(0);
        let color = options[wrap_index(index, delta, options.len())];

        self.selections.set(self.focused, color);
        debug!(slot = self.focused.label(), %color, "changed band");
        self.recalculate();
    }
}

#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
fn wrap_index(index: usize, delta: isize, len: usize) -> usize {
    (index as isize + delta).rem_euclid(len as isize) as usize
}

/// Setup terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Runs the interactive calculator until the user quits.
pub fn launch(config: &Config) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let mut state = AppState::new(config);

    let result = run_tui(&mut state, &mut terminal);

    // Restore terminal before surfacing any loop error
    restore_terminal(terminal)?;
    result
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(state, key)? {
                    break;
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
pub fn render(f: &mut Frame, state: &AppState) {
    let theme = &state.theme;
    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(5), // Resistor body
            Constraint::Min(7),    // Band controls
            Constraint::Length(4), // Result and help
        ])
        .split(f.area());

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            APP_NAME,
            Style::default()
                .fg(theme.frame)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  [{}]", state.mode),
            Style::default().fg(theme.hint),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.frame)),
    );
    f.render_widget(title, chunks[0]);

    ResistorView::render(f, chunks[1], &state.configuration(), theme);
    BandControls::render(f, chunks[2], state, theme);
    StatusBar::render(f, chunks[3], state, theme);
}

/// Handles one key press. Returns `true` when the app should quit.
fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.kind != KeyEventKind::Press {
        return Ok(false);
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.should_quit = true;
        }
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => state.move_focus(-1),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => state.move_focus(1),
        KeyCode::Left | KeyCode::Char('h') => state.cycle_color(-1),
        KeyCode::Right | KeyCode::Char('l') => state.cycle_color(1),
        KeyCode::Char('4') => state.set_mode(ResistorMode::FourBand),
        KeyCode::Char('5') => state.set_mode(ResistorMode::FiveBand),
        KeyCode::Char('m') => state.set_mode(state.mode.toggled()),
        _ => {}
    }

    Ok(state.should_quit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeMode;
    use ratatui::backend::TestBackend;

    fn test_state() -> AppState {
        let mut config = Config::default();
        config.ui.theme_mode = ThemeMode::Dark;
        AppState::new(&config)
    }

    fn press(state: &mut AppState, code: KeyCode) -> bool {
        handle_key_event(state, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    fn rendered_text(state: &AppState) -> String {
        let backend = TestBackend::new(60, 22);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_initial_state_from_defaults() {
        let state = test_state();
        assert_eq!(state.mode, ResistorMode::FourBand);
        assert_eq!(state.focused, BandSlot::Band1);
        let result = state.result.as_ref().unwrap();
        assert_eq!(result.formatted, "1 kΩ");
        assert_eq!(result.tolerance_display(), "± 5%");
    }

    #[test]
    fn test_visible_slots_follow_mode() {
        let mut state = test_state();
        assert_eq!(state.visible_slots().len(), 4);
        assert!(!state.visible_slots().contains(&BandSlot::Band3));

        state.set_mode(ResistorMode::FiveBand);
        assert_eq!(state.visible_slots().len(), 5);
        assert_eq!(state.result.as_ref().unwrap().formatted, "10 kΩ");
    }

    #[test]
    fn test_focus_wraps() {
        let mut state = test_state();
        press(&mut state, KeyCode::Up);
        assert_eq!(state.focused, BandSlot::Tolerance);
        press(&mut state, KeyCode::Down);
        assert_eq!(state.focused, BandSlot::Band1);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Down);
        // Band 3 is skipped in four-band mode
        assert_eq!(state.focused, BandSlot::Multiplier);
    }

    #[test]
    fn test_cycle_color_recalculates() {
        let mut state = test_state();
        press(&mut state, KeyCode::Right);
        assert_eq!(state.selections.band1, BandColor::Red);
        assert_eq!(state.result.as_ref().unwrap().formatted, "2 kΩ");

        press(&mut state, KeyCode::Left);
        press(&mut state, KeyCode::Left);
        assert_eq!(state.selections.band1, BandColor::Black);
        assert_eq!(state.result.as_ref().unwrap().formatted, "0 Ω");

        // Wraps from the first option to the last
        press(&mut state, KeyCode::Left);
        assert_eq!(state.selections.band1, BandColor::White);
    }

    #[test]
    fn test_cycle_stays_within_role_options() {
        let mut state = test_state();
        state.focused = BandSlot::Tolerance;
        for _ in 0..20 {
            press(&mut state, KeyCode::Right);
            assert!(BandRole::Tolerance.permits(state.selections.tolerance));
            assert!(state.result.is_ok());
        }
    }

    #[test]
    fn test_hiding_band3_moves_focus() {
        let mut state = test_state();
        state.set_mode(ResistorMode::FiveBand);
        state.focused = BandSlot::Band3;
        press(&mut state, KeyCode::Char('m'));
        assert_eq!(state.mode, ResistorMode::FourBand);
        assert_eq!(state.focused, BandSlot::Band2);
    }

    #[test]
    fn test_band3_kept_while_hidden() {
        let mut state = test_state();
        state.set_mode(ResistorMode::FiveBand);
        state.focused = BandSlot::Band3;
        press(&mut state, KeyCode::Right);
        assert_eq!(state.selections.band3, BandColor::Brown);

        press(&mut state, KeyCode::Char('4'));
        press(&mut state, KeyCode::Char('5'));
        assert_eq!(state.selections.band3, BandColor::Brown);
        assert_eq!(state.result.as_ref().unwrap().formatted, "10.10 kΩ");
    }

    #[test]
    fn test_quit_keys() {
        let mut state = test_state();
        assert!(press(&mut state, KeyCode::Char('q')));

        let mut state = test_state();
        assert!(press(&mut state, KeyCode::Esc));

        let mut state = test_state();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_key_event(&mut state, ctrl_c).unwrap());
    }

    #[test]
    fn test_render_shows_controls_and_result() {
        let state = test_state();
        let text = rendered_text(&state);
        assert!(text.contains("Band 1"));
        assert!(text.contains("Multiplier"));
        assert!(!text.contains("Band 3"));
        assert!(text.contains("1 kΩ"));
        assert!(text.contains("± 5%"));
    }

    #[test]
    fn test_render_five_band() {
        let mut state = test_state();
        state.set_mode(ResistorMode::FiveBand);
        let text = rendered_text(&state);
        assert!(text.contains("Band 3"));
        assert!(text.contains("5-band"));
    }
}
