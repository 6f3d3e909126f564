//! Status report snapshot and rendering
//!
//! The `status` command returns the full observable state as `key=value`
//! lines in a fixed order. Sensor fields are reported inverted per the
//! active-low wiring: `door=1` means the door switch is engaged (closed).

use core::fmt;

use heapless::String;
use talos_hal::indicator::{Rgb, INDICATOR_COUNT};

/// Capacity of the free-text diagnostic field
pub const MAX_DEBUG: usize = 32;

/// Read-only snapshot of the controller's observable state
///
/// Building a report never mutates controller state; `status` is
/// idempotent by construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusReport {
    /// Machine mode as its wire integer
    pub mode: u8,
    /// Door switch engaged (raw level inverted)
    pub door: bool,
    /// Laser head present (raw level inverted)
    pub laser_head: bool,
    /// Vacuum hold-down force sensed (raw level inverted)
    pub force_vacuum: bool,
    /// Vacuum output latch
    pub vacuum: bool,
    /// Fume hood output latch
    pub hood: bool,
    /// Raw air pressure sample
    pub pressure: u16,
    /// Raw laser PWM sense sample
    pub pwm: u16,
    /// Spindle output latch
    pub spindle: bool,
    /// Laser output latch
    pub laser: bool,
    /// Air assist output latch
    pub air: bool,
    /// Current mist pump interval (0 = disabled)
    pub pump_interval_ms: u16,
    /// Indicator shadow values
    pub leds: [Rgb; INDICATOR_COUNT],
    /// Free-text diagnostic, normally empty
    pub debug: String<MAX_DEBUG>,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "mode={}", self.mode)?;
        writeln!(f, "door={}", u8::from(self.door))?;
        writeln!(f, "laser_head={}", u8::from(self.laser_head))?;
        writeln!(f, "force_vacuum={}", u8::from(self.force_vacuum))?;
        writeln!(f, "vacuum={}", u8::from(self.vacuum))?;
        writeln!(f, "hood={}", u8::from(self.hood))?;
        writeln!(f, "pressure={}", self.pressure)?;
        writeln!(f, "pwm={}", self.pwm)?;
        writeln!(f, "spindle={}", u8::from(self.spindle))?;
        writeln!(f, "laser={}", u8::from(self.laser))?;
        writeln!(f, "air={}", u8::from(self.air))?;
        writeln!(f, "pump_interval_ms={}", self.pump_interval_ms)?;
        for (i, led) in self.leds.iter().enumerate() {
            writeln!(f, "led{}={},{},{}", i, led.r, led.g, led.b)?;
        }
        writeln!(f, "debug={}", self.debug)
    }
}
