//! CLI command handlers.
//!
//! This module provides headless, scriptable access to the calculator
//! for automation and testing.

pub mod calc;
pub mod colors;
pub mod common;
pub mod config;
pub mod format;

// Re-export types used by main.rs and tests
pub use calc::CalcArgs;
pub use colors::ColorsArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use format::FormatArgs;
