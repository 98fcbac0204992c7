//! Statics shared between the handler tasks and the main loop
//!
//! The sampling state uses `CriticalSectionRawMutex`: every access runs with
//! interrupts disabled, which is what makes the paired sample read and the
//! epoch read-and-reset atomic.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use fantach_core::config::Timing;
use fantach_core::display::DisplayBuffer;
use fantach_core::sampling::SharedState;
use fantach_hal_rp2040::adc::ConversionRequest;

/// Display buffer, cursor, sample pair, pulse counter and epoch state
pub static SHARED: SharedState<CriticalSectionRawMutex> =
    SharedState::new(Timing::DEFAULT, DisplayBuffer::BANNER);

/// Raised after the timer task refreshes a digit
pub static ADC_REQUEST: ConversionRequest = Signal::new();

/// Wakes the main loop (ADC complete, epoch closed)
pub static WAKE: Signal<CriticalSectionRawMutex, ()> = Signal::new();
