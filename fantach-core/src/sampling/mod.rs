//! Interrupt-synchronized sampling
//!
//! Three handlers and a main loop share one [`SharedState`]:
//!
//! - Timer tick: advances the multiplex cursor, refreshes one digit, starts
//!   an ADC conversion and closes pulse-counting epochs.
//! - ADC complete: pushes the new sample into the current/previous pair.
//! - Tachometer edge: counts one pulse.
//! - Main loop ([`MainLoop`]): on wake, decides between a fresh sensor level
//!   and the last epoch's revolution count, renders it and publishes it.

pub mod calibration;
pub mod main_loop;
pub mod pulses;
pub mod samples;
pub mod shared;

pub use calibration::Calibration;
pub use main_loop::MainLoop;
pub use pulses::PulseAccumulator;
pub use samples::SampleState;
pub use shared::{SharedState, TickOutcome};
