//! Fantach Hardware Abstraction Layer
//!
//! This crate defines the hardware capabilities the display and sampling
//! core consumes. Chip-specific crates implement them; the core never
//! touches clocks, prescalers or registers directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  fantach-firmware                       │
//! └─────────────────────────────────────────┘
//!            │                    │
//!            ▼                    ▼
//! ┌────────────────────┐  ┌────────────────────┐
//! │  fantach-core      │─▶│  fantach-hal       │
//! │  (display, sample) │  │  (this crate)      │
//! └────────────────────┘  └────────────────────┘
//!                                 ▲
//!                                 │
//!                      ┌────────────────────┐
//!                      │ fantach-hal-rp2040 │
//!                      └────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::ConfigurablePin`] - Shift register bus lines
//! - [`adc::AdcTrigger`] - Fire-and-forget conversion requests
//!
//! Enabling and disabling interrupts is not a trait here: the core takes its
//! critical sections through `embassy_sync` raw mutexes, which the chip crate
//! backs with a `critical-section` implementation.

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use adc::{high_byte, AdcTrigger};
pub use gpio::{ConfigurablePin, Edge, OutputPin, PinDirection};
