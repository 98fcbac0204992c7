//! Display refresh driver
//!
//! Two 74HC595s are chained on three lines: serial data, shift clock and
//! latch clock. The first register selects the active digit, the second
//! holds that digit's segment pattern. Every multiplex tick shifts one
//! 16-bit word MSB-first and latches it, so both bytes change together.
//!
//! ```text
//!  bit 15 ... bit 8   bit 7 ... bit 0
//! ┌─────────────────┬─────────────────┐
//! │ digit select    │ segment pattern │
//! │ one-hot, MSB=d0 │ A..H, active-low│
//! └─────────────────┴─────────────────┘
//! ```

use fantach_hal::gpio::{ConfigurablePin, OutputPin, PinDirection};

use super::glyph::SegmentPattern;
use super::render::{DisplayBuffer, DIGIT_COUNT};

/// Position of one digit, 0 = rightmost
///
/// Doubles as the multiplex cursor: [`DigitIndex::next`] wraps 3 → 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitIndex(u8);

impl DigitIndex {
    /// Rightmost digit
    pub const FIRST: Self = Self(0);

    /// Leftmost digit
    pub const LAST: Self = Self(DIGIT_COUNT as u8 - 1);

    /// Create an index, `None` if out of range
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < DIGIT_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Position as an array index
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// Following position in refresh order
    pub const fn next(self) -> Self {
        Self((self.0 + 1) & (DIGIT_COUNT as u8 - 1))
    }
}

/// Digit-select byte with exactly one bit set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitSelect(u8);

impl DigitSelect {
    /// Select byte for a single digit, MSB = digit 0
    pub const fn one_hot(index: DigitIndex) -> Self {
        Self(0x80 >> index.0)
    }

    /// Raw byte
    pub const fn bits(self) -> u8 {
        self.0
    }
}

/// Word shifted into the register chain for one multiplex tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransmissionWord(u16);

impl TransmissionWord {
    /// Combine a digit selection with its segment pattern
    pub const fn new(select: DigitSelect, pattern: SegmentPattern) -> Self {
        Self(((select.bits() as u16) << 8) | pattern.bits() as u16)
    }

    /// Raw 16-bit word, transmitted MSB first
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// High byte
    pub const fn select(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Low byte
    pub const fn pattern(self) -> u8 {
        self.0 as u8
    }
}

/// Bit-banged driver for the two chained shift registers
///
/// Runs from the timer handler. Each refresh is 16 data/clock pairs plus
/// one latch pulse: constant time, no allocation, no failure channel.
pub struct ShiftRegisterBus<D, S, L> {
    data: D,
    shift_clock: S,
    latch_clock: L,
}

impl<D: OutputPin, S: OutputPin, L: OutputPin> ShiftRegisterBus<D, S, L> {
    /// Create a bus from pins already configured as outputs
    ///
    /// Both clocks start low so the first rising edge is a real one.
    pub fn new(data: D, mut shift_clock: S, mut latch_clock: L) -> Self {
        shift_clock.set_low();
        latch_clock.set_low();
        Self {
            data,
            shift_clock,
            latch_clock,
        }
    }

    /// Show one digit of `buffer`
    pub fn refresh(&mut self, index: DigitIndex, buffer: &DisplayBuffer) {
        self.transmit(TransmissionWord::new(
            DigitSelect::one_hot(index),
            buffer.get(index),
        ));
    }

    /// Shift a word out MSB-first and latch it
    pub fn transmit(&mut self, word: TransmissionWord) {
        let bits = word.bits();
        for bit in (0..u16::BITS).rev() {
            self.data.set_pin(bits & (1 << bit) != 0);
            self.shift_clock.set_high();
            self.shift_clock.set_low();
        }

        self.latch_clock.set_high();
        // Latch hold: one cycle
        core::hint::spin_loop();
        self.latch_clock.set_low();
    }

    /// Give the pins back
    pub fn release(self) -> (D, S, L) {
        (self.data, self.shift_clock, self.latch_clock)
    }
}

impl<D, S, L> ShiftRegisterBus<D, S, L>
where
    D: ConfigurablePin,
    S: ConfigurablePin,
    L: ConfigurablePin,
{
    /// Switch all three lines to outputs, then create the bus
    pub fn with_configured_pins(mut data: D, mut shift_clock: S, mut latch_clock: L) -> Self {
        data.set_direction(PinDirection::Output);
        shift_clock.set_direction(PinDirection::Output);
        latch_clock.set_direction(PinDirection::Output);
        Self::new(data, shift_clock, latch_clock)
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! Simulated 74HC595 chain driven through mock pins

    use core::cell::RefCell;
    use std::rc::Rc;

    use fantach_hal::gpio::{ConfigurablePin, OutputPin, PinDirection};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Line {
        Data,
        ShiftClock,
        LatchClock,
    }

    #[derive(Default)]
    pub struct Chain {
        data: bool,
        shift: u16,
        pub shifted_bits: u32,
        pub latched: Vec<u16>,
        pub outputs: Vec<Line>,
    }

    impl Chain {
        fn drive(&mut self, line: Line, was_high: bool, high: bool) {
            match line {
                Line::Data => self.data = high,
                Line::ShiftClock if !was_high && high => {
                    self.shift = (self.shift << 1) | self.data as u16;
                    self.shifted_bits += 1;
                }
                Line::LatchClock if !was_high && high => self.latched.push(self.shift),
                _ => {}
            }
        }
    }

    pub struct MockPin {
        line: Line,
        high: bool,
        chain: Rc<RefCell<Chain>>,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.chain.borrow_mut().drive(self.line, self.high, true);
            self.high = true;
        }

        fn set_low(&mut self) {
            self.chain.borrow_mut().drive(self.line, self.high, false);
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    impl ConfigurablePin for MockPin {
        fn set_direction(&mut self, direction: PinDirection) {
            if direction == PinDirection::Output {
                self.chain.borrow_mut().outputs.push(self.line);
            }
        }
    }

    pub type MockBus = super::ShiftRegisterBus<MockPin, MockPin, MockPin>;

    /// Bus wired to a fresh chain; clocks idle high to catch missing resets
    pub fn bus() -> (MockBus, Rc<RefCell<Chain>>) {
        let chain = Rc::new(RefCell::new(Chain::default()));
        let pin = |line| MockPin {
            line,
            high: true,
            chain: chain.clone(),
        };
        let bus = super::ShiftRegisterBus::with_configured_pins(
            pin(Line::Data),
            pin(Line::ShiftClock),
            pin(Line::LatchClock),
        );
        (bus, chain)
    }
}
