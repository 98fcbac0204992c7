//! RP2040-specific HAL for the fan tachometer display
//!
//! Implements the `fantach-hal` traits on embassy-rp types:
//!
//! - Shift register bus lines on flexible GPIOs
//! - Signal-based ADC trigger plus the async conversion that answers it
//! - Tachometer edge waiting
//! - The fixed board pin map

#![no_std]

pub mod adc;
pub mod gpio;
pub mod pins;

// Re-export shared traits from fantach-hal for convenience
pub use fantach_hal::{AdcTrigger, ConfigurablePin, Edge, OutputPin, PinDirection};
