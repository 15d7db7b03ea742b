//! Resistor color-code calculator.
//!
//! This library decodes the colored bands of four- and five-band resistors
//! into a resistance and tolerance, and formats the result for display.
//! The color table and calculator are pure; the CLI and terminal UI are
//! thin presentation layers over them.
//!
//! ```
//! use rescode::models::ResistorConfiguration;
//! use rescode::services::calculate;
//!
//! let config = ResistorConfiguration::from_names(&["yellow", "violet", "red", "gold"]).unwrap();
//! let result = calculate(&config).unwrap();
//! assert_eq!(result.formatted, "4.70 kΩ");
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;
#[cfg(feature = "ratatui")]
pub mod tui;

pub use error::{BandCountError, Error, InvalidBandError, UnknownColorError};
