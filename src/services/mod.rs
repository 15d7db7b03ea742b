//! Service layer for business logic.
//!
//! This module contains the pure calculation services that turn band
//! selections into resistance values.

pub mod calculator;

// Re-export commonly used types and functions
pub use calculator::{calculate, format_resistance, format_tolerance, CalculationResult};
