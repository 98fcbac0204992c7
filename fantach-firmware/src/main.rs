//! Fantach - Fan Tachometer Display Firmware
//!
//! Samples an analog sensor, counts fan tachometer pulses and shows the
//! result on a 4-digit seven-segment display behind two 74HC595s.
//!
//! Three tasks play the interrupt handlers (multiplex timer, ADC complete,
//! tachometer edge). The main task is the low-priority loop: it sleeps until
//! woken, then re-renders only when there is something new to show.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Flex, Input, Pull};
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use fantach_core::config::{BANNER_TICKS, TIMER_TICK_HZ};
use fantach_core::display::ShiftRegisterBus;
use fantach_core::sampling::{Calibration, MainLoop};
use fantach_hal_rp2040::adc::SensorAdc;
use fantach_hal_rp2040::gpio::BusPin;
use fantach_hal_rp2040::pins::BoardPins;

use crate::channels::{SHARED, WAKE};

mod channels;
mod tasks;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Fantach firmware starting...");

    let p = embassy_rp::init(Default::default());
    let pins = BoardPins::split(p);
    info!("Peripherals initialized");

    // Display bus: serial data, shift clock, latch clock
    let bus = ShiftRegisterBus::with_configured_pins(
        BusPin::new(Flex::new(pins.serial_data)),
        BusPin::new(Flex::new(pins.shift_clock)),
        BusPin::new(Flex::new(pins.latch_clock)),
    );
    info!("Display bus initialized");

    // Sensor on ADC0; digital input is disabled by the channel setup
    let adc = Adc::new(pins.adc, Irqs, embassy_rp::adc::Config::default());
    let sensor = SensorAdc::new(adc, Channel::new_pin(pins.sensor, Pull::None));

    // Tachometer input, externally pulled
    let tach = Input::new(pins.tach, Pull::None);

    spawner.spawn(tasks::timer_task(bus).unwrap());
    spawner.spawn(tasks::adc_task(sensor).unwrap());
    spawner.spawn(tasks::edge_task(tach).unwrap());
    info!("All tasks spawned");

    // Banner stays up while the first samples come in
    let banner_us = BANNER_TICKS as u64 * 1_000_000 / TIMER_TICK_HZ as u64;
    Timer::after(Duration::from_micros(banner_us)).await;

    let main_loop = MainLoop::new(Calibration::DEFAULT);
    let initial = main_loop.show_current(&SHARED);
    info!("Showing {}", initial);

    loop {
        WAKE.wait().await;
        if let Some(displayed) = main_loop.step(&SHARED) {
            debug!("Showing {}", displayed);
        }
    }
}
