//! Inter-task communication channels
//!
//! Defines the static signals used for communication between Embassy
//! tasks. The controller tick owns all machine state; these signals only
//! carry hardware side requests outward.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use talos_hal::indicator::{Rgb, INDICATOR_COUNT};

/// Mist pump stepping interval (updated by the controller tick)
///
/// `Some(ms)` arms periodic stepping, `None` disarms it.
pub static PUMP_INTERVAL: Signal<CriticalSectionRawMutex, Option<u16>> = Signal::new();

/// Indicator colors to commit to the WS2812 strip
pub static LED_STATE: Signal<CriticalSectionRawMutex, [Rgb; INDICATOR_COUNT]> = Signal::new();
