//! Segment patterns
//!
//! A single digit is laid out as follows:
//!
//! ```text
//!       A
//!      ---
//!   F |   | B
//!      -G-
//!   E |   | C
//!      ---   .
//!       D    H
//! ```
//!
//! The pattern byte holds segments A..H from MSB to LSB, matching the wiring
//! of the segment shift register. Outputs are active-low: a cleared bit
//! lights its segment.

/// Segment bit masks
pub const SEG_A: u8 = 1 << 7;
pub const SEG_B: u8 = 1 << 6;
pub const SEG_C: u8 = 1 << 5;
pub const SEG_D: u8 = 1 << 4;
pub const SEG_E: u8 = 1 << 3;
pub const SEG_F: u8 = 1 << 2;
pub const SEG_G: u8 = 1 << 1;
pub const SEG_H: u8 = 1 << 0;

/// Active-low segment pattern for one digit position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentPattern(u8);

impl SegmentPattern {
    /// All segments dark
    pub const BLANK: Self = Self(0xFF);

    /// Pattern lighting exactly the given `SEG_*` segments
    pub const fn lit(segments: u8) -> Self {
        Self(!segments)
    }

    /// Raw byte as shifted out to the hardware
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Same pattern with the decimal dot lit
    pub const fn with_dot(self) -> Self {
        Self(self.0 & !SEG_H)
    }

    /// Whether a segment mask is lit in this pattern
    pub const fn is_lit(self, segment: u8) -> bool {
        self.0 & segment == 0
    }
}

/// Index of the overflow glyph in [`DIGIT_TABLE`]
pub const OVERFLOW_INDEX: u8 = 10;

/// Digits 0-9 followed by the overflow glyph ("9.")
pub const DIGIT_TABLE: [SegmentPattern; 11] = [
    SegmentPattern::lit(SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F),
    SegmentPattern::lit(SEG_B | SEG_C),
    SegmentPattern::lit(SEG_A | SEG_B | SEG_G | SEG_E | SEG_D),
    SegmentPattern::lit(SEG_A | SEG_B | SEG_C | SEG_D | SEG_G),
    SegmentPattern::lit(SEG_B | SEG_C | SEG_F | SEG_G),
    SegmentPattern::lit(SEG_A | SEG_F | SEG_G | SEG_C | SEG_D),
    SegmentPattern::lit(SEG_A | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G),
    SegmentPattern::lit(SEG_A | SEG_B | SEG_C),
    SegmentPattern::lit(SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G),
    SegmentPattern::lit(SEG_A | SEG_B | SEG_C | SEG_D | SEG_F | SEG_G),
    SegmentPattern::lit(SEG_A | SEG_B | SEG_C | SEG_D | SEG_F | SEG_G).with_dot(),
];

/// Overflow glyph ("9.")
pub const OVERFLOW: SegmentPattern = DIGIT_TABLE[OVERFLOW_INDEX as usize];

/// Look up a digit (0-9) or [`OVERFLOW_INDEX`]
///
/// Indices above [`OVERFLOW_INDEX`] are a caller bug.
pub fn glyph_for(index: u8) -> SegmentPattern {
    debug_assert!(index <= OVERFLOW_INDEX);
    DIGIT_TABLE[index as usize]
}

// Banner letters
pub const LETTER_T: SegmentPattern = SegmentPattern::lit(SEG_D | SEG_E | SEG_F | SEG_G);
pub const LETTER_F: SegmentPattern = SegmentPattern::lit(SEG_A | SEG_E | SEG_F | SEG_G);
pub const LETTER_A: SegmentPattern =
    SegmentPattern::lit(SEG_A | SEG_B | SEG_C | SEG_E | SEG_F | SEG_G);
pub const LETTER_N: SegmentPattern = SegmentPattern::lit(SEG_C | SEG_E | SEG_G);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_patterns() {
        assert_eq!(DIGIT_TABLE[0].bits(), 0b0000_0011);
        assert_eq!(DIGIT_TABLE[1].bits(), 0b1001_1111);
        assert_eq!(DIGIT_TABLE[8].bits(), 0b0000_0001);
        assert_eq!(DIGIT_TABLE[9].bits(), 0b0000_1001);
        assert_eq!(OVERFLOW.bits(), 0b0000_1000);
    }

    #[test]
    fn test_table_is_distinct() {
        for (i, a) in DIGIT_TABLE.iter().enumerate() {
            for b in &DIGIT_TABLE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_no_digit_is_blank_or_dotted() {
        for pattern in &DIGIT_TABLE[..OVERFLOW_INDEX as usize] {
            assert_ne!(*pattern, SegmentPattern::BLANK);
            assert!(!pattern.is_lit(SEG_H));
        }
    }

    #[test]
    fn test_overflow_is_nine_with_dot() {
        assert!(OVERFLOW.is_lit(SEG_H));
        assert_eq!(OVERFLOW.bits() | SEG_H, DIGIT_TABLE[9].bits());
        assert_eq!(glyph_for(OVERFLOW_INDEX), OVERFLOW);
    }

    #[test]
    fn test_blank_lights_nothing() {
        for segment in [SEG_A, SEG_B, SEG_C, SEG_D, SEG_E, SEG_F, SEG_G, SEG_H] {
            assert!(!SegmentPattern::BLANK.is_lit(segment));
        }
    }
}
