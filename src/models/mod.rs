//! Data models for band colors and resistor configurations.
//!
//! This module contains the static color table and the value types passed
//! into the calculator. Models are independent of UI and business logic.

pub mod color_table;
pub mod resistor;
pub mod rgb;

// Re-export all model types
pub use color_table::{attributes_of, BandColor, BandRole, ColorAttributes};
pub use resistor::{Band, ResistorConfiguration, ResistorMode};
pub use rgb::RgbColor;
