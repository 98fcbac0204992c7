//! Tachometer edge task

use defmt::*;
use embassy_rp::gpio::Input;

use fantach_hal_rp2040::gpio::wait_for_edge;
use fantach_hal_rp2040::pins::TACH_EDGE;

use crate::channels::SHARED;

/// Edge task - counts one pulse per configured edge
///
/// Pulses only matter at epoch rollover, so this never wakes the main loop.
#[embassy_executor::task]
pub async fn edge_task(mut tach: Input<'static>) {
    info!("Edge task started ({:?} edges)", TACH_EDGE);

    loop {
        wait_for_edge(&mut tach, TACH_EDGE).await;
        SHARED.on_edge();
    }
}
