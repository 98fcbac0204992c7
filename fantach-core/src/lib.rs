//! Board-agnostic core logic for the fan tachometer display
//!
//! This crate contains all logic that does not depend on a specific chip:
//!
//! - Double-dabble BCD encoding and seven-segment rendering
//! - The multiplexed refresh driver for two chained shift registers
//! - The interrupt-shared sampling state (ADC pair, pulse counter, epochs)
//! - The main-loop policy deciding what to show next
//! - Build-time timing and calibration constants

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod display;
pub mod sampling;
