//! Embassy tasks standing in for the three interrupt handlers
//!
//! Each task only touches [`crate::channels::SHARED`] through its handler
//! method and wakes the main loop when there is something to render.

pub mod adc;
pub mod edge;
pub mod timer;

pub use adc::adc_task;
pub use edge::edge_task;
pub use timer::{timer_task, DisplayBus};
