//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and config locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Resistor Color Code";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "rescode";

/// Directory name under the platform config dir.
pub const APP_DIR_NAME: &str = "ResistorCode";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "RESCODE_CONFIG_DIR";
