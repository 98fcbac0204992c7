//! ADC for the sensor input
//!
//! RP2040 conversions are 12-bit; the sampling core keeps the high byte.
//! The timer task requests a conversion through a signal and the ADC task
//! runs it, so the request itself never waits.

use embassy_rp::adc::{Adc, Async, Channel};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use fantach_hal::adc::{high_byte, AdcTrigger};

/// RP2040 ADC resolution
pub const ADC_RESOLUTION_BITS: u8 = 12;

/// Conversion request shared between the trigger and the ADC task
pub type ConversionRequest = Signal<CriticalSectionRawMutex, ()>;

/// Fire-and-forget trigger backed by a signal
pub struct SignalAdcTrigger<'a> {
    request: &'a ConversionRequest,
}

impl<'a> SignalAdcTrigger<'a> {
    /// Create a trigger raising `request`
    pub fn new(request: &'a ConversionRequest) -> Self {
        Self { request }
    }
}

impl AdcTrigger for SignalAdcTrigger<'_> {
    fn start_conversion(&mut self) {
        self.request.signal(());
    }
}

/// Sensor channel on the RP2040 ADC
pub struct SensorAdc<'d> {
    adc: Adc<'d, Async>,
    channel: Channel<'d>,
}

impl<'d> SensorAdc<'d> {
    /// Wrap an ADC and the sensor's channel
    pub fn new(adc: Adc<'d, Async>, channel: Channel<'d>) -> Self {
        Self { adc, channel }
    }

    /// Run one conversion, returning its high byte
    ///
    /// `None` if the ADC reported an error; the caller keeps its last sample.
    pub async fn convert(&mut self) -> Option<u8> {
        self.adc
            .read(&mut self.channel)
            .await
            .ok()
            .map(|raw| high_byte(raw, ADC_RESOLUTION_BITS))
    }
}
