//! Digit rendering
//!
//! Turns a [`DisplayedValue`] into the four patterns the refresh driver
//! shifts out. Rendering is pure; publishing the result into the shared
//! buffer is the caller's job.

use super::bcd::{encode_bcd, MAX_ENCODABLE};
use super::glyph::{self, SegmentPattern, OVERFLOW};
use super::refresh::DigitIndex;

/// Number of digit positions on the display
pub const DIGIT_COUNT: usize = 4;

/// Value the main loop asks the display to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayedValue {
    /// Plain number (revolutions per epoch)
    Number(u16),
    /// Calibrated sensor level, 0-100
    Percent(u8),
}

impl DisplayedValue {
    /// Numeric magnitude to encode
    pub fn magnitude(self) -> u16 {
        match self {
            DisplayedValue::Number(n) => n,
            DisplayedValue::Percent(p) => p as u16,
        }
    }
}

/// Patterns for all four positions, index 0 = rightmost digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayBuffer([SegmentPattern; DIGIT_COUNT]);

impl DisplayBuffer {
    /// Nothing lit
    pub const BLANK: Self = Self([SegmentPattern::BLANK; DIGIT_COUNT]);

    /// Startup banner, reads "tFAn" left to right
    pub const BANNER: Self = Self([
        glyph::LETTER_N,
        glyph::LETTER_A,
        glyph::LETTER_F,
        glyph::LETTER_T,
    ]);

    /// Create a buffer from patterns, index 0 = rightmost digit
    pub const fn new(patterns: [SegmentPattern; DIGIT_COUNT]) -> Self {
        Self(patterns)
    }

    /// Pattern at a digit position
    pub const fn get(&self, index: DigitIndex) -> SegmentPattern {
        self.0[index.get()]
    }

    /// All patterns, index 0 = rightmost digit
    pub const fn patterns(&self) -> &[SegmentPattern; DIGIT_COUNT] {
        &self.0
    }
}

/// Render a value into display patterns
///
/// Values above 9999 show "9.9.9.9."; otherwise leading zeros are blanked
/// and zero itself shows a single rightmost '0'.
pub fn render(displayed: DisplayedValue) -> DisplayBuffer {
    let magnitude = displayed.magnitude();
    if magnitude > MAX_ENCODABLE {
        return DisplayBuffer([OVERFLOW; DIGIT_COUNT]);
    }

    let bcd = encode_bcd(magnitude);
    let mut patterns = [SegmentPattern::BLANK; DIGIT_COUNT];
    let mut shown = false;

    for position in (0..DIGIT_COUNT).rev() {
        let digit = bcd.digit(position);
        if digit > 0 || shown {
            patterns[position] = glyph::glyph_for(digit);
            shown = true;
        }
    }

    if !shown {
        patterns[0] = glyph::glyph_for(0);
    }

    DisplayBuffer(patterns)
}
