//! Palettes for the calculator screen.
//!
//! One palette covers the four panels: the resistor drawing, the band
//! selectors, the result line and the key hints. `ThemeMode::Auto` asks the
//! OS for its appearance once, when the screen opens.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Colors the calculator panels draw with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Panel borders, titles and result labels
    pub frame: Color,
    /// Focused band row, selector arrows and the resistance value
    pub focus: Color,
    /// Rejected band message
    pub error: Color,

    /// Band names and the tolerance value
    pub text: Color,
    /// Key hints, lead wires and transparent bands
    pub hint: Color,

    /// Fill behind every panel
    pub background: Color,
    /// Background of the focused band row
    pub selection_bg: Color,
}

impl Theme {
    /// Palette matching the OS appearance; dark when it cannot be read.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Palette for the configured `ui.theme_mode`.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Palette for dark terminals.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            frame: Color::Cyan,
            focus: Color::Yellow,
            error: Color::LightRed,

            text: Color::White,
            hint: Color::DarkGray,

            background: Color::Black,
            selection_bg: Color::Rgb(40, 44, 52),
        }
    }

    /// Palette for light terminals.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            frame: Color::Blue,
            // Yellow washes out on white
            focus: Color::Rgb(180, 100, 0),
            error: Color::Red,

            text: Color::Black,
            hint: Color::Gray,

            background: Color::White,
            selection_bg: Color::Rgb(225, 228, 235),
        }
    }
}
