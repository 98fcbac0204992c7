//! GPIO implementations for RP2040

use embassy_rp::gpio::{Flex, Input};
use fantach_hal::gpio::{ConfigurablePin, Edge, OutputPin, PinDirection};

/// One line of the shift register bus
///
/// Wraps a flexible pin so direction can be set at startup through
/// [`ConfigurablePin`].
pub struct BusPin<'d> {
    pin: Flex<'d>,
}

impl<'d> BusPin<'d> {
    /// Wrap a pin. It stays an input until configured.
    pub fn new(pin: Flex<'d>) -> Self {
        Self { pin }
    }
}

impl OutputPin for BusPin<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

impl ConfigurablePin for BusPin<'_> {
    fn set_direction(&mut self, direction: PinDirection) {
        match direction {
            PinDirection::Input => self.pin.set_as_input(),
            PinDirection::Output => self.pin.set_as_output(),
        }
    }
}

/// Wait for the next tachometer edge
pub async fn wait_for_edge(input: &mut Input<'_>, edge: Edge) {
    match edge {
        Edge::Rising => input.wait_for_rising_edge().await,
        Edge::Falling => input.wait_for_falling_edge().await,
    }
}
