//! Raw sample to percentage mapping

use crate::config::{ConfigError, CALIBRATION_HIGH, CALIBRATION_LOW};

/// Two raw-sample bounds mapping the input linearly onto 0-100%
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    low: u8,
    high: u8,
}

impl Calibration {
    /// Firmware calibration
    pub const DEFAULT: Self = Self {
        low: CALIBRATION_LOW,
        high: CALIBRATION_HIGH,
    };

    /// Create a calibration; `low` must be below `high`
    pub const fn new(low: u8, high: u8) -> Result<Self, ConfigError> {
        if low >= high {
            return Err(ConfigError::InvertedCalibration);
        }
        Ok(Self { low, high })
    }

    /// Map a raw sample to 0-100%
    ///
    /// At or below `low` is 0%, at or above `high` is 100%, linear (rounded
    /// down) in between.
    pub fn percent(&self, raw: u8) -> u8 {
        if raw <= self.low {
            return 0;
        }
        if raw >= self.high {
            return 100;
        }
        let span = (self.high - self.low) as u16;
        ((raw - self.low) as u16 * 100 / span) as u8
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::DEFAULT
    }
}
