//! Seven-segment display pipeline
//!
//! ```text
//! DisplayedValue ─▶ encode_bcd ─▶ render ─▶ DisplayBuffer ─▶ refresh ─▶ 74HC595 x2
//!                    (bcd)        (render)   (shared state)   (refresh)
//! ```
//!
//! Encoding and rendering run in the main loop; refresh runs from the timer
//! handler, one digit per multiplex tick.

pub mod bcd;
pub mod glyph;
pub mod refresh;
pub mod render;

pub use bcd::{encode_bcd, PackedBcd, MAX_ENCODABLE};
pub use glyph::SegmentPattern;
pub use refresh::{DigitIndex, DigitSelect, ShiftRegisterBus, TransmissionWord};
pub use render::{render, DisplayBuffer, DisplayedValue, DIGIT_COUNT};
