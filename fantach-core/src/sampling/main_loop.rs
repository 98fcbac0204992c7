//! Main-loop display policy
//!
//! Runs at the lowest priority whenever a handler wakes it. A changed sensor
//! level always wins: it restarts the epoch so the stale rate is not shown
//! right after the change. With no change, a freshly closed epoch shows its
//! revolution count.

use embassy_sync::blocking_mutex::raw::RawMutex;

use super::calibration::Calibration;
use super::shared::SharedState;
use crate::display::render::{render, DisplayedValue};

/// Decides what the display shows next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MainLoop {
    calibration: Calibration,
}

impl MainLoop {
    /// Create the loop with fixed calibration bounds
    pub const fn new(calibration: Calibration) -> Self {
        Self { calibration }
    }

    /// Decide what to show after a wake-up, if anything
    pub fn poll<M: RawMutex>(&self, shared: &SharedState<M>) -> Option<DisplayedValue> {
        if let Some(sample) = shared.take_sample_change() {
            shared.restart_epoch();
            return Some(DisplayedValue::Percent(self.calibration.percent(sample)));
        }

        shared.take_rate().map(DisplayedValue::Number)
    }

    /// Poll, then render and publish the result
    pub fn step<M: RawMutex>(&self, shared: &SharedState<M>) -> Option<DisplayedValue> {
        let displayed = self.poll(shared)?;
        shared.publish(render(displayed));
        Some(displayed)
    }

    /// Show the current sensor level unconditionally
    ///
    /// Used once after the startup banner. Reads 0% if no conversion has
    /// completed yet.
    pub fn show_current<M: RawMutex>(&self, shared: &SharedState<M>) -> DisplayedValue {
        let sample = shared.current_sample().unwrap_or(0);
        let displayed = DisplayedValue::Percent(self.calibration.percent(sample));
        shared.publish(render(displayed));
        displayed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Timing;
    use crate::display::refresh::mock;
    use crate::display::render::DisplayBuffer;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use fantach_hal::adc::AdcTrigger;

    struct NullAdc;

    impl AdcTrigger for NullAdc {
        fn start_conversion(&mut self) {}
    }

    fn state(epoch: u32) -> SharedState<NoopRawMutex> {
        SharedState::new(Timing::new(4, epoch).unwrap(), DisplayBuffer::BANNER)
    }

    #[test]
    fn test_sample_sequence_renders_on_transitions() {
        let shared = state(1000);
        let main_loop = MainLoop::new(Calibration::new(147, 247).unwrap());

        let mut renders = Vec::new();
        for sample in [10, 10, 42, 42, 5] {
            shared.on_adc_complete(sample);
            if let Some(displayed) = main_loop.step(&shared) {
                renders.push(displayed);
            }
        }

        assert_eq!(
            renders,
            [DisplayedValue::Percent(0), DisplayedValue::Percent(0)]
        );
    }

    #[test]
    fn test_percent_from_calibration() {
        let shared = state(1000);
        let main_loop = MainLoop::new(Calibration::DEFAULT);

        shared.on_adc_complete(150);
        shared.on_adc_complete(197);

        assert_eq!(main_loop.step(&shared), Some(DisplayedValue::Percent(50)));
        assert_eq!(shared.snapshot().1, render(DisplayedValue::Number(50)));
    }

    #[test]
    fn test_repeated_wakes_render_once() {
        let shared = state(1000);
        let main_loop = MainLoop::new(Calibration::DEFAULT);

        shared.on_adc_complete(150);
        shared.on_adc_complete(200);

        assert!(main_loop.step(&shared).is_some());
        assert_eq!(main_loop.step(&shared), None);
        assert_eq!(main_loop.step(&shared), None);
    }

    #[test]
    fn test_rate_shown_when_input_steady() {
        let shared = state(100);
        let main_loop = MainLoop::new(Calibration::DEFAULT);
        let (mut bus, _chain) = mock::bus();

        shared.on_adc_complete(150);
        for _ in 0..20 {
            shared.on_edge();
        }
        for _ in 0..100 {
            shared.on_timer_tick(&mut bus, &mut NullAdc);
        }

        assert_eq!(main_loop.step(&shared), Some(DisplayedValue::Number(10)));
        assert_eq!(shared.snapshot().1, render(DisplayedValue::Number(10)));
        assert_eq!(main_loop.step(&shared), None);
    }

    #[test]
    fn test_change_suppresses_pending_rate() {
        let shared = state(100);
        let main_loop = MainLoop::new(Calibration::DEFAULT);
        let (mut bus, _chain) = mock::bus();

        shared.on_adc_complete(150);
        for _ in 0..8 {
            shared.on_edge();
        }
        for _ in 0..100 {
            shared.on_timer_tick(&mut bus, &mut NullAdc);
        }
        // Rate is pending, but the input moved
        shared.on_adc_complete(247);

        assert_eq!(main_loop.step(&shared), Some(DisplayedValue::Percent(100)));
        assert_eq!(main_loop.step(&shared), None);
    }

    #[test]
    fn test_show_current_after_banner() {
        let shared = state(1000);
        let main_loop = MainLoop::new(Calibration::DEFAULT);

        assert_eq!(main_loop.show_current(&shared), DisplayedValue::Percent(0));
        assert_eq!(shared.snapshot().1, render(DisplayedValue::Number(0)));

        shared.on_adc_complete(247);
        assert_eq!(main_loop.show_current(&shared), DisplayedValue::Percent(100));
    }
}
