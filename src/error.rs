//! Error types for color lookup and resistance calculation.
//!
//! Every failure here is a caller-contract violation: the calculator never
//! substitutes a default for a band it cannot decode.

use thiserror::Error;

use crate::models::{BandColor, BandRole};

/// A color identifier that is not one of the fixed band colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color '{name}'")]
pub struct UnknownColorError {
    /// The text that failed to resolve.
    pub name: String,
}

impl UnknownColorError {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A known color placed in a band whose role it cannot fill.
///
/// Raised when the color is not among the role's legal selections, or when
/// it lacks the attribute the role reads (digit, multiplier or tolerance).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("band {position} ({role}) cannot be {color}")]
pub struct InvalidBandError {
    /// 1-based position of the band in physical order.
    pub position: usize,
    /// Role the band plays in the configuration.
    pub role: BandRole,
    /// The offending color.
    pub color: BandColor,
}

/// A band sequence that is neither four nor five bands long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected 4 or 5 bands, got {found}")]
pub struct BandCountError {
    /// Number of bands supplied.
    pub found: usize,
}

/// Any error produced by the library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// See [`UnknownColorError`].
    #[error(transparent)]
    UnknownColor(#[from] UnknownColorError),

    /// See [`InvalidBandError`].
    #[error(transparent)]
    InvalidBand(#[from] InvalidBandError),

    /// See [`BandCountError`].
    #[error(transparent)]
    BandCount(#[from] BandCountError),
}
