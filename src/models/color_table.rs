//! The resistor color table.
//!
//! Each of the thirteen band colors has one canonical [`ColorAttributes`]
//! record. Which colors may occupy which band is decided separately by the
//! per-role option lists on [`BandRole`], never by which attributes a color
//! happens to carry.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::RgbColor;
use crate::error::UnknownColorError;

/// One of the fixed band color identifiers.
///
/// Deserializes through [`FromStr`], so config files accept the same
/// spellings as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BandColor {
    /// Digit 0, ×1
    Black,
    /// Digit 1, ×10, ±1%
    Brown,
    /// Digit 2, ×100, ±2%
    Red,
    /// Digit 3, ×1k
    Orange,
    /// Digit 4, ×10k
    Yellow,
    /// Digit 5, ×100k, ±0.5%
    Green,
    /// Digit 6, ×1M, ±0.25%
    Blue,
    /// Digit 7, ×10M, ±0.1%
    Violet,
    /// Digit 8, ×100M, ±0.05%
    Grey,
    /// Digit 9, ×1G
    White,
    /// ×0.1, ±5%
    Gold,
    /// ×0.01, ±10%
    Silver,
    /// No band, ±20%
    None,
}

/// Attributes of a single band color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorAttributes {
    /// Digit value (0-9), absent for gold, silver and none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digit: Option<u8>,
    /// Scale factor applied to the significand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<f64>,
    /// Tolerance in percent of nominal resistance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
    /// Display color of the band; `None` is drawn transparent.
    pub swatch: Option<RgbColor>,
    /// Readable foreground color for labels drawn on the swatch.
    pub text: RgbColor,
}

const fn entry(
    digit: Option<u8>,
    multiplier: Option<f64>,
    tolerance: Option<f64>,
    swatch: Option<RgbColor>,
    text: RgbColor,
) -> ColorAttributes {
    ColorAttributes {
        digit,
        multiplier,
        tolerance,
        swatch,
        text,
    }
}

/// Indexed by `BandColor as usize`.
const COLOR_TABLE: [ColorAttributes; 13] = [
    entry(Some(0), Some(1.0), None, Some(RgbColor::new(0x00, 0x00, 0x00)), RgbColor::WHITE),
    entry(Some(1), Some(10.0), Some(1.0), Some(RgbColor::new(0x5D, 0x40, 0x37)), RgbColor::WHITE),
    entry(Some(2), Some(100.0), Some(2.0), Some(RgbColor::new(0xEF, 0x44, 0x44)), RgbColor::WHITE),
    entry(Some(3), Some(1_000.0), None, Some(RgbColor::new(0xF9, 0x73, 0x16)), RgbColor::BLACK),
    entry(Some(4), Some(10_000.0), None, Some(RgbColor::new(0xEA, 0xB3, 0x08)), RgbColor::BLACK),
    entry(Some(5), Some(100_000.0), Some(0.5), Some(RgbColor::new(0x22, 0xC5, 0x5E)), RgbColor::BLACK),
    entry(Some(6), Some(1_000_000.0), Some(0.25), Some(RgbColor::new(0x3B, 0x82, 0xF6)), RgbColor::WHITE),
    entry(Some(7), Some(10_000_000.0), Some(0.1), Some(RgbColor::new(0x8B, 0x5C, 0xF6)), RgbColor::WHITE),
    entry(Some(8), Some(100_000_000.0), Some(0.05), Some(RgbColor::new(0x64, 0x74, 0x8B)), RgbColor::WHITE),
    entry(Some(9), Some(1_000_000_000.0), None, Some(RgbColor::new(0xFF, 0xFF, 0xFF)), RgbColor::BLACK),
    entry(None, Some(0.1), Some(5.0), Some(RgbColor::new(0xD4, 0xAF, 0x37)), RgbColor::BLACK),
    entry(None, Some(0.01), Some(10.0), Some(RgbColor::new(0xC0, 0xC0, 0xC0)), RgbColor::BLACK),
    entry(None, None, Some(20.0), None, RgbColor::BLACK),
];

impl BandColor {
    /// Every color in table order.
    pub const ALL: [Self; 13] = [
        Self::Black,
        Self::Brown,
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Violet,
        Self::Grey,
        Self::White,
        Self::Gold,
        Self::Silver,
        Self::None,
    ];

    /// Looks up this color's record in the table.
    #[must_use]
    pub const fn attributes(self) -> ColorAttributes {
        COLOR_TABLE[self as usize]
    }

    /// Lowercase identifier, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Brown => "brown",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Violet => "violet",
            Self::Grey => "grey",
            Self::White => "white",
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::None => "none",
        }
    }

    /// Capitalized name for option lists ("Brown", "Gold").
    #[must_use]
    pub fn label(self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl fmt::Display for BandColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BandColor {
    type Err = UnknownColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "gray" {
            return Ok(Self::Grey);
        }
        Self::ALL
            .into_iter()
            .find(|color| color.name() == lower)
            .ok_or_else(|| UnknownColorError::new(s))
    }
}

impl<'de> Deserialize<'de> for BandColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Looks up the attributes of a color by identifier.
///
/// # Examples
///
/// ```
/// use rescode::models::attributes_of;
///
/// let red = attributes_of("red").unwrap();
/// assert_eq!(red.digit, Some(2));
/// assert_eq!(red.multiplier, Some(100.0));
/// assert!(attributes_of("teal").is_err());
/// ```
pub fn attributes_of(name: &str) -> Result<ColorAttributes, UnknownColorError> {
    Ok(name.parse::<BandColor>()?.attributes())
}

/// The part a band plays in a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandRole {
    /// A significant digit band
    Digit,
    /// The multiplier band
    Multiplier,
    /// The tolerance band
    Tolerance,
}

const DIGIT_OPTIONS: [BandColor; 10] = [
    BandColor::Black,
    BandColor::Brown,
    BandColor::Red,
    BandColor::Orange,
    BandColor::Yellow,
    BandColor::Green,
    BandColor::Blue,
    BandColor::Violet,
    BandColor::Grey,
    BandColor::White,
];

const MULTIPLIER_OPTIONS: [BandColor; 10] = [
    BandColor::Black,
    BandColor::Brown,
    BandColor::Red,
    BandColor::Orange,
    BandColor::Yellow,
    BandColor::Green,
    BandColor::Blue,
    BandColor::Violet,
    BandColor::Gold,
    BandColor::Silver,
];

const TOLERANCE_OPTIONS: [BandColor; 8] = [
    BandColor::Brown,
    BandColor::Red,
    BandColor::Green,
    BandColor::Blue,
    BandColor::Violet,
    BandColor::Grey,
    BandColor::Gold,
    BandColor::Silver,
];

impl BandRole {
    /// All roles, in band order.
    pub const ALL: [Self; 3] = [Self::Digit, Self::Multiplier, Self::Tolerance];

    /// The colors a user may select for this role, in display order.
    #[must_use]
    pub const fn options(self) -> &'static [BandColor] {
        match self {
            Self::Digit => &DIGIT_OPTIONS,
            Self::Multiplier => &MULTIPLIER_OPTIONS,
            Self::Tolerance => &TOLERANCE_OPTIONS,
        }
    }

    /// Whether `color` is a legal selection for this role.
    #[must_use]
    pub fn permits(self, color: BandColor) -> bool {
        self.options().contains(&color)
    }

    /// Lowercase role name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Digit => "digit",
            Self::Multiplier => "multiplier",
            Self::Tolerance => "tolerance",
        }
    }
}

impl fmt::Display for BandRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BandRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "digit" => Ok(Self::Digit),
            "multiplier" => Ok(Self::Multiplier),
            "tolerance" => Ok(Self::Tolerance),
            other => Err(format!(
                "unknown band role '{other}' (expected digit, multiplier or tolerance)"
            )),
        }
    }
}
