//! Multiplex timer task
//!
//! Ticks at `TIMER_TICK_HZ`. Every tick runs the timer handler: one digit
//! refresh plus ADC request every `REFRESH_DIVIDER` ticks, and an epoch
//! rollover once a second.

use defmt::*;
use embassy_time::{Duration, Ticker};

use fantach_core::config::TIMER_TICK_HZ;
use fantach_core::display::ShiftRegisterBus;
use fantach_hal_rp2040::adc::SignalAdcTrigger;
use fantach_hal_rp2040::gpio::BusPin;

use crate::channels::{ADC_REQUEST, SHARED, WAKE};

/// Shift register bus on the board's three output lines
pub type DisplayBus = ShiftRegisterBus<BusPin<'static>, BusPin<'static>, BusPin<'static>>;

/// Timer task - refreshes the display and closes epochs
#[embassy_executor::task]
pub async fn timer_task(mut bus: DisplayBus) {
    info!("Timer task started");

    let mut adc = SignalAdcTrigger::new(&ADC_REQUEST);
    let mut ticker = Ticker::every(Duration::from_hz(TIMER_TICK_HZ as u64));

    loop {
        ticker.next().await;

        let outcome = SHARED.on_timer_tick(&mut bus, &mut adc);
        if let Some(revolutions) = outcome.epoch_revolutions {
            debug!("Epoch closed: {} revolutions", revolutions);
        }
        if outcome.should_wake() {
            WAKE.signal(());
        }
    }
}
