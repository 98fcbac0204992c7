//! ADC-complete task
//!
//! Waits for a conversion request from the timer task, runs the conversion
//! and hands the high byte to the sampling state.

use defmt::*;

use fantach_hal_rp2040::adc::SensorAdc;

use crate::channels::{ADC_REQUEST, SHARED, WAKE};

/// ADC task - one conversion per refresh
#[embassy_executor::task]
pub async fn adc_task(mut sensor: SensorAdc<'static>) {
    info!("ADC task started");

    loop {
        ADC_REQUEST.wait().await;

        match sensor.convert().await {
            Some(sample) => {
                SHARED.on_adc_complete(sample);
                WAKE.signal(());
            }
            None => warn!("ADC conversion failed, keeping previous sample"),
        }
    }
}
