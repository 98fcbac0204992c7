//! Packed BCD encoding (double-dabble)

/// Largest value [`encode_bcd`] accepts
pub const MAX_ENCODABLE: u16 = 9999;

/// Bits in the binary input
const INPUT_BITS: u32 = u16::BITS;

/// Four decimal digits packed into nibbles, most significant digit on top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PackedBcd(u16);

impl PackedBcd {
    /// Wrap already packed nibbles
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Packed nibbles
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Digit at `position`, where 0 is the least significant
    pub const fn digit(self, position: usize) -> u8 {
        ((self.0 >> (4 * position)) & 0xF) as u8
    }

    /// Recombine the digits into a binary value
    pub fn to_decimal(self) -> u16 {
        (0..4)
            .rev()
            .fold(0, |acc, position| acc * 10 + self.digit(position) as u16)
    }
}

/// Convert a binary value into packed BCD
///
/// The value starts in the low half of a 32-bit register. Each of the 16
/// iterations adds 3 to every result nibble that is 5 or more, then shifts
/// the register left by one. The top half ends up holding the digits.
///
/// # Preconditions
///
/// `value` must not exceed [`MAX_ENCODABLE`]; callers clamp first. Larger
/// inputs produce meaningless nibbles.
pub fn encode_bcd(value: u16) -> PackedBcd {
    debug_assert!(value <= MAX_ENCODABLE);

    let mut reg = value as u32;
    for _ in 0..INPUT_BITS {
        for nibble in 4..8 {
            let shift = 4 * nibble;
            if (reg >> shift) & 0xF >= 5 {
                reg = reg.wrapping_add(3 << shift);
            }
        }
        reg <<= 1;
    }

    PackedBcd((reg >> INPUT_BITS) as u16)
}
