//! ADC abstractions
//!
//! Conversions are requested from the timer handler and complete
//! asynchronously, so starting one is fire-and-forget. Only the 8 high-order
//! bits of a result are kept; the rest is noise on this input.

/// Starts an ADC conversion on the sensor channel
pub trait AdcTrigger {
    /// Request a conversion. Completion is reported by the chip's
    /// ADC-complete handler, not by this call.
    fn start_conversion(&mut self);
}

/// Keep the 8 high-order bits of a `resolution_bits`-wide conversion result
///
/// Results narrower than 8 bits are returned unchanged.
pub const fn high_byte(raw: u16, resolution_bits: u8) -> u8 {
    if resolution_bits <= 8 {
        raw as u8
    } else {
        (raw >> (resolution_bits - 8)) as u8
    }
}
