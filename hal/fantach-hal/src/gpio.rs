//! GPIO pin abstractions
//!
//! The display bus needs three push-pull outputs (serial data, shift clock,
//! latch clock). The tachometer input is only configured once, so the edge it
//! triggers on is a setup-time choice rather than runtime state.

/// Direction of a GPIO pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinDirection {
    /// High-impedance input
    Input,
    /// Push-pull output
    Output,
}

/// Signal edge that counts as one tachometer pulse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Low to high transition
    Rising,
    /// High to low transition
    Falling,
}

/// Digital output pin
///
/// Writes are plain register accesses and cannot fail.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Drive the pin to a level
    fn set_pin(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently driven high
    fn is_set_high(&self) -> bool;
}

/// Output pin whose direction is configured at startup
pub trait ConfigurablePin: OutputPin {
    /// Switch the pin between input and output
    fn set_direction(&mut self, direction: PinDirection);
}
