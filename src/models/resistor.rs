//! Resistor configurations: which colors sit on which bands.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{BandColor, BandRole, RgbColor};
use crate::error::{BandCountError, Error};

/// Number of bands on the resistor body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResistorMode {
    /// Two significant digits (carbon film)
    #[default]
    FourBand,
    /// Three significant digits (metal film)
    FiveBand,
}

impl ResistorMode {
    /// Number of significant-digit bands.
    #[must_use]
    pub const fn digit_count(self) -> usize {
        match self {
            Self::FourBand => 2,
            Self::FiveBand => 3,
        }
    }

    /// Total number of bands, digits plus multiplier and tolerance.
    #[must_use]
    pub const fn band_count(self) -> usize {
        self.digit_count() + 2
    }

    /// Body color: beige carbon film or blue metal film.
    #[must_use]
    pub const fn body_color(self) -> RgbColor {
        match self {
            Self::FourBand => RgbColor::new(0xE8, 0xD4, 0xAA),
            Self::FiveBand => RgbColor::new(0x7F, 0xB3, 0xE0),
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::FourBand => Self::FiveBand,
            Self::FiveBand => Self::FourBand,
        }
    }
}

impl fmt::Display for ResistorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FourBand => "4-band",
            Self::FiveBand => "5-band",
        })
    }
}

/// One band of a configuration, in physical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Band {
    /// 1-based position on the body.
    pub position: usize,
    /// Role the band plays.
    pub role: BandRole,
    /// Selected color.
    pub color: BandColor,
}

/// An immutable set of band selections for one calculation.
///
/// The digit list always holds two or three entries; the constructors are
/// the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResistorConfiguration {
    digits: Vec<BandColor>,
    multiplier: BandColor,
    tolerance: BandColor,
}

impl ResistorConfiguration {
    /// Two digit bands, multiplier, tolerance.
    #[must_use]
    pub fn four_band(
        first: BandColor,
        second: BandColor,
        multiplier: BandColor,
        tolerance: BandColor,
    ) -> Self {
        Self {
            digits: vec![first, second],
            multiplier,
            tolerance,
        }
    }

    /// Three digit bands, multiplier, tolerance.
    #[must_use]
    pub fn five_band(
        first: BandColor,
        second: BandColor,
        third: BandColor,
        multiplier: BandColor,
        tolerance: BandColor,
    ) -> Self {
        Self {
            digits: vec![first, second, third],
            multiplier,
            tolerance,
        }
    }

    /// Builds a configuration from bands in physical order.
    ///
    /// The last two bands are the multiplier and tolerance; everything before
    /// them is a digit band.
    pub fn from_bands(bands: &[BandColor]) -> Result<Self, BandCountError> {
        match *bands {
            [first, second, multiplier, tolerance] => {
                Ok(Self::four_band(first, second, multiplier, tolerance))
            }
            [first, second, third, multiplier, tolerance] => {
                Ok(Self::five_band(first, second, third, multiplier, tolerance))
            }
            _ => Err(BandCountError { found: bands.len() }),
        }
    }

    /// Builds a configuration from color names in physical order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rescode::models::{ResistorConfiguration, ResistorMode};
    ///
    /// let config = ResistorConfiguration::from_names(&["brown", "black", "red", "gold"]).unwrap();
    /// assert_eq!(config.mode(), ResistorMode::FourBand);
    /// ```
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, Error> {
        let bands = names
            .iter()
            .map(|name| name.as_ref().parse::<BandColor>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_bands(&bands)?)
    }

    /// Four- or five-band, from the digit count.
    #[must_use]
    pub fn mode(&self) -> ResistorMode {
        if self.digits.len() == 3 {
            ResistorMode::FiveBand
        } else {
            ResistorMode::FourBand
        }
    }

    /// Digit bands, most significant first.
    #[must_use]
    pub fn digits(&self) -> &[BandColor] {
        &self.digits
    }

    /// Multiplier band.
    #[must_use]
    pub const fn multiplier(&self) -> BandColor {
        self.multiplier
    }

    /// Tolerance band.
    #[must_use]
    pub const fn tolerance(&self) -> BandColor {
        self.tolerance
    }

    /// Every band with its position and role.
    pub fn bands(&self) -> impl Iterator<Item = Band> + '_ {
        let digit_bands = self.digits.iter().map(|&color| (BandRole::Digit, color));
        digit_bands
            .chain([
                (BandRole::Multiplier, self.multiplier),
                (BandRole::Tolerance, self.tolerance),
            ])
            .enumerate()
            .map(|(index, (role, color))| Band {
                position: index + 1,
                role,
                color,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use BandColor::{Black, Brown, Gold, Red, Violet};

    #[test]
    fn test_from_bands_four() {
        let config = ResistorConfiguration::from_bands(&[Brown, Black, Red, Gold]).unwrap();
        assert_eq!(config.mode(), ResistorMode::FourBand);
        assert_eq!(config.digits(), &[Brown, Black]);
        assert_eq!(config.multiplier(), Red);
        assert_eq!(config.tolerance(), Gold);
    }

    #[test]
    fn test_from_bands_five() {
        let config = ResistorConfiguration::from_bands(&[Brown, Black, Black, Red, Gold]).unwrap();
        assert_eq!(config.mode(), ResistorMode::FiveBand);
        assert_eq!(config.digits(), &[Brown, Black, Black]);
    }

    #[test]
    fn test_from_bands_wrong_count() {
        assert_eq!(
            ResistorConfiguration::from_bands(&[Brown, Black, Red]),
            Err(BandCountError { found: 3 })
        );
        assert_eq!(
            ResistorConfiguration::from_bands(&[]),
            Err(BandCountError { found: 0 })
        );
    }

    #[test]
    fn test_from_names_unknown_color() {
        let err = ResistorConfiguration::from_names(&["brown", "teal", "red", "gold"]).unwrap_err();
        assert!(matches!(err, Error::UnknownColor(ref e) if e.name == "teal"));
    }

    #[test]
    fn test_bands_positions_and_roles() {
        let config = ResistorConfiguration::five_band(Red, Violet, Black, Brown, Brown);
        let bands: Vec<Band> = config.bands().collect();
        assert_eq!(bands.len(), 5);
        assert_eq!(bands[0].position, 1);
        assert_eq!(bands[2].role, BandRole::Digit);
        assert_eq!(bands[3].role, BandRole::Multiplier);
        assert_eq!(bands[4].role, BandRole::Tolerance);
        assert_eq!(bands[4].position, 5);
    }

    #[test]
    fn test_mode_helpers() {
        assert_eq!(ResistorMode::FourBand.band_count(), 4);
        assert_eq!(ResistorMode::FiveBand.band_count(), 5);
        assert_eq!(ResistorMode::FourBand.toggled(), ResistorMode::FiveBand);
        assert_ne!(
            ResistorMode::FourBand.body_color(),
            ResistorMode::FiveBand.body_color()
        );
        assert_eq!(ResistorMode::FiveBand.to_string(), "5-band");
    }
}
