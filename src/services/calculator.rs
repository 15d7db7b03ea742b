//! Band-to-value decoding and resistance formatting.
//!
//! Calculation is a pure function of a [`ResistorConfiguration`]: the same
//! configuration always yields the same [`CalculationResult`].

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::InvalidBandError;
use crate::models::{BandColor, BandRole, ColorAttributes, ResistorConfiguration};

/// Magnitude thresholds, largest first.
const SCALES: [(f64, &str); 3] = [(1e9, "GΩ"), (1e6, "MΩ"), (1e3, "kΩ")];

/// Outcome of decoding one configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    /// Integer formed by the digit bands.
    pub significand: u32,
    /// Resistance in ohms.
    pub resistance: f64,
    /// Tolerance in percent.
    pub tolerance: f64,
    /// Resistance scaled to a readable unit ("4.70 kΩ").
    pub formatted: String,
}

impl CalculationResult {
    /// Tolerance as shown to the user ("± 5%").
    #[must_use]
    pub fn tolerance_display(&self) -> String {
        format_tolerance(self.tolerance)
    }
}

/// Decodes a configuration into its resistance and tolerance.
///
/// Every band must be a legal selection for its role and carry the attribute
/// that role reads; otherwise the band is reported in an [`InvalidBandError`].
///
/// # Examples
///
/// ```
/// use rescode::models::{BandColor, ResistorConfiguration};
/// use rescode::services::calculate;
///
/// let config = ResistorConfiguration::four_band(
///     BandColor::Brown,
///     BandColor::Black,
///     BandColor::Red,
///     BandColor::Gold,
/// );
/// let result = calculate(&config).unwrap();
/// assert_eq!(result.formatted, "1 kΩ");
/// assert_eq!(result.tolerance_display(), "± 5%");
/// ```
pub fn calculate(config: &ResistorConfiguration) -> Result<CalculationResult, InvalidBandError> {
    let mut significand: u32 = 0;
    for (index, &color) in config.digits().iter().enumerate() {
        let digit = read_band(index + 1, BandRole::Digit, color, |attrs| attrs.digit)?;
        significand = significand * 10 + u32::from(digit);
    }

    let multiplier_position = config.digits().len() + 1;
    let multiplier = read_band(
        multiplier_position,
        BandRole::Multiplier,
        config.multiplier(),
        |attrs| attrs.multiplier,
    )?;
    let tolerance = read_band(
        multiplier_position + 1,
        BandRole::Tolerance,
        config.tolerance(),
        |attrs| attrs.tolerance,
    )?;

    let resistance = f64::from(significand) * multiplier;
    let formatted = format_resistance(resistance);
    debug!(significand, resistance, tolerance, %formatted, "calculated resistance");

    Ok(CalculationResult {
        significand,
        resistance,
        tolerance,
        formatted,
    })
}

/// Reads the attribute a role needs from one band.
fn read_band<T>(
    position: usize,
    role: BandRole,
    color: BandColor,
    read: impl FnOnce(ColorAttributes) -> Option<T>,
) -> Result<T, InvalidBandError> {
    let value = if role.permits(color) {
        read(color.attributes())
    } else {
        None
    };

    value.ok_or_else(|| {
        warn!(position, %role, %color, "rejected band selection");
        InvalidBandError {
            position,
            role,
            color,
        }
    })
}

/// Formats a resistance with a magnitude suffix and two decimals.
///
/// A trailing ".00" is dropped; other decimals are kept as they are. Exact
/// halves round away from zero ("1.13 kΩ" for 1125 Ω).
///
/// # Examples
///
/// ```
/// use rescode::services::format_resistance;
///
/// assert_eq!(format_resistance(100.0), "100 Ω");
/// assert_eq!(format_resistance(1500.0), "1.50 kΩ");
/// assert_eq!(format_resistance(1e9), "1 GΩ");
/// ```
#[must_use]
pub fn format_resistance(ohms: f64) -> String {
    // Folds -0.0 into 0.0
    let ohms = ohms + 0.0;
    let (value, unit) = SCALES
        .iter()
        .find(|(threshold, _)| ohms >= *threshold)
        .map_or((ohms, "Ω"), |&(threshold, unit)| (ohms / threshold, unit));

    let fixed = fixed_two_places(value);
    let number = fixed.strip_suffix(".00").unwrap_or(&fixed);
    format!("{number} {unit}")
}

/// Two-decimal rendering that rounds exact halves away from zero.
///
/// `{:.2}` rounds the exact binary value and sends ties to even. A tie at the
/// second decimal is an odd multiple of 1/8, so those are the only values
/// nudged; everything else already rounds the same way.
fn fixed_two_places(value: f64) -> String {
    let eighths = value * 8.0;
    let is_tie = eighths.fract() == 0.0 && (eighths % 2.0).abs() == 1.0;
    if is_tie {
        format!("{:.2}", value + 0.005_f64.copysign(value))
    } else {
        format!("{value:.2}")
    }
}

/// Formats a tolerance percentage ("± 0.25%").
#[must_use]
pub fn format_tolerance(percent: f64) -> String {
    format!("± {percent}%")
}
