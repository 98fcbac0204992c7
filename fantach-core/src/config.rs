//! Build-time configuration
//!
//! Nothing here is runtime-configurable. The values are grouped into
//! validated types so the state machine can be driven with short epochs in
//! tests while firmware uses the defaults.

/// Frequency of the multiplex timer interrupt
pub const TIMER_TICK_HZ: u32 = 25_000;

/// Timer ticks per digit refresh (25 kHz / 104 ≈ 240 Hz)
pub const REFRESH_DIVIDER: u8 = 104;

/// Timer ticks per pulse-counting epoch (one second)
pub const EPOCH_TICKS: u32 = TIMER_TICK_HZ;

/// Tachometer edges per physical fan revolution
pub const EDGES_PER_REVOLUTION: u16 = 2;

/// Raw sample at or below which the input reads 0%
pub const CALIBRATION_LOW: u8 = 147;

/// Raw sample at or above which the input reads 100%
pub const CALIBRATION_HIGH: u8 = 247;

/// How long the startup banner stays up, in timer ticks (half a second)
pub const BANNER_TICKS: u32 = TIMER_TICK_HZ / 2;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Refresh divider of zero would never refresh
    ZeroDivider,
    /// Epoch of zero ticks
    ZeroEpoch,
    /// Epoch shorter than one refresh period
    EpochTooShort,
    /// Calibration low bound not strictly below the high bound
    InvertedCalibration,
}

/// Tick-derived timing of the sampling state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    refresh_divider: u8,
    epoch_ticks: u32,
}

impl Timing {
    /// Firmware timing: ~240 Hz refresh, one-second epochs
    pub const DEFAULT: Self = Self {
        refresh_divider: REFRESH_DIVIDER,
        epoch_ticks: EPOCH_TICKS,
    };

    /// Create a timing configuration
    pub const fn new(refresh_divider: u8, epoch_ticks: u32) -> Result<Self, ConfigError> {
        if refresh_divider == 0 {
            return Err(ConfigError::ZeroDivider);
        }
        if epoch_ticks == 0 {
            return Err(ConfigError::ZeroEpoch);
        }
        if epoch_ticks < refresh_divider as u32 {
            return Err(ConfigError::EpochTooShort);
        }
        Ok(Self {
            refresh_divider,
            epoch_ticks,
        })
    }

    /// Timer ticks per digit refresh
    pub const fn refresh_divider(&self) -> u8 {
        self.refresh_divider
    }

    /// Timer ticks per epoch
    pub const fn epoch_ticks(&self) -> u32 {
        self.epoch_ticks
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}
