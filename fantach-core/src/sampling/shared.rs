//! State shared between the interrupt handlers and the main loop
//!
//! Every field lives behind one blocking mutex. On the target the raw mutex
//! is `CriticalSectionRawMutex`, so each `lock` disables interrupts for the
//! duration of its closure and restores them on every exit path.
//!
//! | Field         | Written by          | Read by            |
//! |---------------|---------------------|--------------------|
//! | `buffer`      | main loop (publish) | timer tick         |
//! | `cursor`      | timer tick          | timer tick, snapshot |
//! | `tick`        | timer tick          | timer tick         |
//! | `epoch_ticks` | timer tick, main loop (restart) | timer tick |
//! | `samples`     | ADC complete, main loop (take) | main loop |
//! | `pulses`      | edge, timer tick (epoch), main loop (restart) | timer tick |
//! | `rate`        | timer tick, main loop (take/restart) | main loop |

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use fantach_hal::adc::AdcTrigger;
use fantach_hal::gpio::OutputPin;

use super::pulses::{revolutions, PulseAccumulator};
use super::samples::SampleState;
use crate::config::Timing;
use crate::display::refresh::{DigitIndex, DigitSelect, ShiftRegisterBus, TransmissionWord};
use crate::display::render::DisplayBuffer;

/// What a timer tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickOutcome {
    /// Digit refreshed on this tick (an ADC conversion was started right after)
    pub refreshed: Option<DigitIndex>,
    /// Revolutions counted in the epoch that closed on this tick
    pub epoch_revolutions: Option<u16>,
}

impl TickOutcome {
    /// Whether the main loop has something new to look at
    pub fn should_wake(&self) -> bool {
        self.epoch_revolutions.is_some()
    }
}

struct Shared {
    buffer: DisplayBuffer,
    cursor: DigitIndex,
    tick: u8,
    epoch_ticks: u32,
    samples: SampleState,
    pulses: PulseAccumulator,
    rate: Option<u16>,
}

/// Interrupt-shared display and sampling state
pub struct SharedState<M: RawMutex> {
    timing: Timing,
    inner: Mutex<M, RefCell<Shared>>,
}

impl<M: RawMutex> SharedState<M> {
    /// Create the state with `initial` on the display
    ///
    /// The cursor starts on the last digit so the first refresh shows digit 0.
    pub const fn new(timing: Timing, initial: DisplayBuffer) -> Self {
        Self {
            timing,
            inner: Mutex::new(RefCell::new(Shared {
                buffer: initial,
                cursor: DigitIndex::LAST,
                tick: 0,
                epoch_ticks: 0,
                samples: SampleState::new(),
                pulses: PulseAccumulator::new(),
                rate: None,
            })),
        }
    }

    /// Timing this state was built with
    pub const fn timing(&self) -> Timing {
        self.timing
    }

    /// Timer interrupt handler
    ///
    /// Every `refresh_divider` ticks: advance the cursor, shift that digit
    /// out, then start an ADC conversion once the bus is quiet. Every
    /// `epoch_ticks` ticks: read-and-reset the pulse counter and raise the
    /// rate for the main loop.
    ///
    /// Worst case is one 16-bit shift-out plus one latch pulse. Never
    /// blocks or allocates.
    pub fn on_timer_tick<D, S, L, A>(
        &self,
        bus: &mut ShiftRegisterBus<D, S, L>,
        adc: &mut A,
    ) -> TickOutcome
    where
        D: OutputPin,
        S: OutputPin,
        L: OutputPin,
        A: AdcTrigger,
    {
        // Critical section: tick, cursor, buffer, epoch, pulses, rate
        let (word, outcome) = self.inner.lock(|cell| {
            let mut shared = cell.borrow_mut();
            let mut outcome = TickOutcome::default();
            let mut word = None;

            shared.tick += 1;
            if shared.tick >= self.timing.refresh_divider() {
                shared.tick = 0;
                shared.cursor = shared.cursor.next();
                let cursor = shared.cursor;
                word = Some(TransmissionWord::new(
                    DigitSelect::one_hot(cursor),
                    shared.buffer.get(cursor),
                ));
                outcome.refreshed = Some(cursor);
            }

            shared.epoch_ticks += 1;
            if shared.epoch_ticks >= self.timing.epoch_ticks() {
                shared.epoch_ticks = 0;
                let count = revolutions(shared.pulses.take());
                shared.rate = Some(count);
                outcome.epoch_revolutions = Some(count);
            }

            (word, outcome)
        });

        if let Some(word) = word {
            bus.transmit(word);
            adc.start_conversion();
        }

        outcome
    }

    /// ADC-complete interrupt handler
    ///
    /// `sample` is the high byte of the conversion.
    pub fn on_adc_complete(&self, sample: u8) {
        // Critical section: samples
        self.inner.lock(|cell| cell.borrow_mut().samples.record(sample));
    }

    /// Tachometer edge interrupt handler
    pub fn on_edge(&self) {
        // Critical section: pulses
        self.inner.lock(|cell| cell.borrow_mut().pulses.record_edge());
    }

    /// Replace the displayed patterns in one step
    pub fn publish(&self, buffer: DisplayBuffer) {
        // Critical section: buffer
        self.inner.lock(|cell| cell.borrow_mut().buffer = buffer);
    }

    /// Read the sample pair as one consistent view and consume the update
    ///
    /// Returns the new sample if it differs from the previous one.
    pub fn take_sample_change(&self) -> Option<u8> {
        // Critical section: samples
        self.inner.lock(|cell| cell.borrow_mut().samples.take_change())
    }

    /// Latest sample, `None` before the first conversion completes
    pub fn current_sample(&self) -> Option<u8> {
        // Critical section: samples
        self.inner.lock(|cell| {
            let shared = cell.borrow();
            shared
                .samples
                .is_primed()
                .then_some(shared.samples.current())
        })
    }

    /// Consume the last epoch's revolution count, if one is pending
    pub fn take_rate(&self) -> Option<u16> {
        // Critical section: rate
        self.inner.lock(|cell| cell.borrow_mut().rate.take())
    }

    /// Start a new epoch now, discarding pulses and any pending rate
    pub fn restart_epoch(&self) {
        // Critical section: epoch_ticks, pulses, rate
        self.inner.lock(|cell| {
            let mut shared = cell.borrow_mut();
            shared.epoch_ticks = 0;
            shared.pulses.take();
            shared.rate = None;
        });
    }

    /// Cursor and displayed patterns as of now
    pub fn snapshot(&self) -> (DigitIndex, DisplayBuffer) {
        // Critical section: cursor, buffer
        self.inner.lock(|cell| {
            let shared = cell.borrow();
            (shared.cursor, shared.buffer)
        })
    }

    /// Edges counted in the running epoch
    pub fn pending_edges(&self) -> u16 {
        // Critical section: pulses
        self.inner.lock(|cell| cell.borrow().pulses.edges())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::glyph::DIGIT_TABLE;
    use crate::display::refresh::mock;
    use crate::display::render::{render, DisplayedValue};
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    #[derive(Default)]
    struct CountingAdc {
        started: u32,
    }

    impl AdcTrigger for CountingAdc {
        fn start_conversion(&mut self) {
            self.started += 1;
        }
    }

    fn state(divider: u8, epoch: u32) -> SharedState<NoopRawMutex> {
        SharedState::new(
            Timing::new(divider, epoch).unwrap(),
            DisplayBuffer::BLANK,
        )
    }

    #[test]
    fn test_refresh_every_divider_ticks() {
        let shared = state(4, 1000);
        let (mut bus, chain) = mock::bus();
        let mut adc = CountingAdc::default();

        let mut refreshed = Vec::new();
        for _ in 0..12 {
            if let Some(index) = shared.on_timer_tick(&mut bus, &mut adc).refreshed {
                refreshed.push(index.get());
            }
        }

        assert_eq!(refreshed, [0, 1, 2]);
        assert_eq!(chain.borrow().latched.len(), 3);
        assert_eq!(adc.started, 3);
    }

    #[test]
    fn test_cursor_cycles_without_skips() {
        let shared = state(1, 1000);
        let (mut bus, chain) = mock::bus();
        let mut adc = CountingAdc::default();

        for _ in 0..400 {
            shared.on_timer_tick(&mut bus, &mut adc);
        }

        let chain = chain.borrow();
        for (n, word) in chain.latched.iter().enumerate() {
            let select = (word >> 8) as u8;
            assert_eq!(select, 0x80 >> (n % 4));
        }
        assert_eq!(chain.latched.len(), 400);
    }

    #[test]
    fn test_refresh_shows_published_buffer() {
        let shared = state(1, 1000);
        let (mut bus, chain) = mock::bus();
        let mut adc = CountingAdc::default();

        shared.publish(render(DisplayedValue::Number(7)));
        shared.on_timer_tick(&mut bus, &mut adc);

        assert_eq!(
            chain.borrow().latched,
            [0x8000 | DIGIT_TABLE[7].bits() as u16]
        );
        assert_eq!(shared.snapshot().0, DigitIndex::FIRST);
    }

    #[test]
    fn test_epoch_halves_edges() {
        let shared = state(4, 100);
        let (mut bus, _chain) = mock::bus();
        let mut adc = CountingAdc::default();

        for _ in 0..20 {
            shared.on_edge();
        }
        assert_eq!(shared.pending_edges(), 20);

        let mut closed = None;
        for _ in 0..100 {
            let outcome = shared.on_timer_tick(&mut bus, &mut adc);
            if outcome.epoch_revolutions.is_some() {
                assert!(outcome.should_wake());
                closed = outcome.epoch_revolutions;
            }
        }

        assert_eq!(closed, Some(10));
        assert_eq!(shared.pending_edges(), 0);
        assert_eq!(shared.take_rate(), Some(10));
        assert_eq!(shared.take_rate(), None);
    }

    #[test]
    fn test_restart_epoch_discards_window() {
        let shared = state(4, 100);
        let (mut bus, _chain) = mock::bus();
        let mut adc = CountingAdc::default();

        for _ in 0..99 {
            shared.on_timer_tick(&mut bus, &mut adc);
        }
        shared.on_edge();
        shared.on_edge();
        shared.restart_epoch();

        // Full epoch needed again after a restart
        for _ in 0..99 {
            assert_eq!(shared.on_timer_tick(&mut bus, &mut adc).epoch_revolutions, None);
        }
        assert_eq!(
            shared.on_timer_tick(&mut bus, &mut adc).epoch_revolutions,
            Some(0)
        );
    }

    #[test]
    fn test_adc_pair_consistency() {
        let shared = state(4, 100);
        assert_eq!(shared.current_sample(), None);

        shared.on_adc_complete(10);
        assert_eq!(shared.current_sample(), Some(10));
        assert_eq!(shared.take_sample_change(), None);

        shared.on_adc_complete(42);
        assert_eq!(shared.take_sample_change(), Some(42));
        assert_eq!(shared.take_sample_change(), None);
    }

    #[test]
    fn test_initial_buffer_is_shown() {
        let shared = SharedState::<NoopRawMutex>::new(Timing::DEFAULT, DisplayBuffer::BANNER);
        let (index, buffer) = shared.snapshot();
        assert_eq!(index, DigitIndex::LAST);
        assert_eq!(buffer, DisplayBuffer::BANNER);
        assert_eq!(shared.timing(), Timing::DEFAULT);
    }
}
