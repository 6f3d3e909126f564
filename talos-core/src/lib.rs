//! Board-agnostic control logic for the Talos router/laser controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Machine mode and interlock timestamp state
//! - Command dispatch (mode-gated, advisory writes)
//! - Safety enforcement (the last writer every tick)
//! - Status snapshot assembly
//! - Simulated I/O endpoints for host testing

#![no_std]
#![deny(unsafe_code)]

pub mod controller;
pub mod io;
pub mod safety;
pub mod sim;
pub mod state;

pub use controller::Controller;
pub use io::MachineIo;
pub use state::{InterlockState, InvalidMode, MachineMode};
