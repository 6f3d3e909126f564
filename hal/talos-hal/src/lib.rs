//! Talos Hardware Abstraction Layer
//!
//! This crate defines the hardware interfaces the controller core drives.
//! The firmware crate implements them over the real board peripherals;
//! `talos-core`'s simulator implements them for host testing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Controller core (talos-core)           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  talos-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ talos-firmware│       │ talos-core    │
//! │  (RP2040)     │       │  ::sim (host) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`adc::AnalogReader`] - Analog sampling (pressure, PWM sense)
//! - [`indicator::IndicatorStrip`] - RGB status indicators
//! - [`timer::PulseScheduler`] - Periodic stepper pulsing for the mist pump

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod indicator;
pub mod timer;

// Re-export key traits at crate root for convenience
pub use adc::AnalogReader;
pub use gpio::{InputPin, OutputPin};
pub use indicator::{IndicatorStrip, Rgb};
pub use timer::PulseScheduler;
