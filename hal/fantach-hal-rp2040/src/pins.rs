//! Board pin map
//!
//! Pin assignments are fixed at build time:
//!
//! | Signal        | GPIO |
//! |---------------|------|
//! | Serial data   | 2    |
//! | Shift clock   | 3    |
//! | Latch clock   | 4    |
//! | Tachometer    | 5    |
//! | Sensor (ADC0) | 26   |

use embassy_rp::peripherals::{ADC, PIN_2, PIN_26, PIN_3, PIN_4, PIN_5};
use embassy_rp::{Peri, Peripherals};
use fantach_hal::gpio::Edge;

/// Tachometer edge that counts as one pulse
pub const TACH_EDGE: Edge = Edge::Rising;

/// Pins and peripherals the firmware uses
pub struct BoardPins {
    pub serial_data: Peri<'static, PIN_2>,
    pub shift_clock: Peri<'static, PIN_3>,
    pub latch_clock: Peri<'static, PIN_4>,
    pub tach: Peri<'static, PIN_5>,
    pub sensor: Peri<'static, PIN_26>,
    pub adc: Peri<'static, ADC>,
}

impl BoardPins {
    /// Take the board's pins out of the peripherals
    pub fn split(p: Peripherals) -> Self {
        Self {
            serial_data: p.PIN_2,
            shift_clock: p.PIN_3,
            latch_clock: p.PIN_4,
            tach: p.PIN_5,
            sensor: p.PIN_26,
            adc: p.ADC,
        }
    }
}
