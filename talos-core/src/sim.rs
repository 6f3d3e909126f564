//! Simulated I/O endpoints for host testing
//!
//! Plain-state implementations of the HAL traits with inspectable fields.
//! Kept as a regular module (not test-gated) so integration tests and
//! host tools can drive a full controller without hardware.

use talos_hal::adc::AnalogReader;
use talos_hal::gpio::{InputPin, OutputPin};
use talos_hal::indicator::{IndicatorStrip, Rgb, INDICATOR_COUNT};
use talos_hal::timer::PulseScheduler;

use crate::io::MachineIo;

/// Simulated output pin; the latch is directly inspectable
#[derive(Debug, Clone, Copy, Default)]
pub struct SimPin {
    high: bool,
}

impl OutputPin for SimPin {
    fn set_high(&mut self) {
        self.high = true;
    }

    fn set_low(&mut self) {
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Simulated sensor input; set `level` to the raw electrical level
///
/// The interlock sensors are active-low, so `level = false` means the
/// sensor is engaged (door closed, head present, force detected).
#[derive(Debug, Clone, Copy)]
pub struct SimInput {
    /// Raw level; defaults to HIGH (inactive/open)
    pub level: bool,
}

impl Default for SimInput {
    fn default() -> Self {
        Self { level: true }
    }
}

impl SimInput {
    /// Engage or release the active-low sensor
    pub fn set_active(&mut self, active: bool) {
        self.level = !active;
    }
}

impl InputPin for SimInput {
    fn is_high(&self) -> bool {
        self.level
    }
}

/// Simulated ADC with per-channel preset samples
#[derive(Debug, Clone, Copy, Default)]
pub struct SimAdc {
    pub samples: [u16; 4],
}

impl AnalogReader for SimAdc {
    fn sample(&mut self, channel: u8) -> u16 {
        self.samples.get(channel as usize).copied().unwrap_or(0)
    }
}

/// Simulated indicator strip recording the last pushed colors
#[derive(Debug, Clone, Copy, Default)]
pub struct SimStrip {
    pub colors: [Rgb; INDICATOR_COUNT],
    pub pushes: u32,
}

impl IndicatorStrip for SimStrip {
    fn push(&mut self, colors: &[Rgb; INDICATOR_COUNT]) {
        self.colors = *colors;
        self.pushes += 1;
    }
}

/// Simulated pulse scheduler recording the armed interval
#[derive(Debug, Clone, Copy, Default)]
pub struct SimPump {
    /// Currently armed interval, `None` when disarmed
    pub interval: Option<u16>,
}

impl PulseScheduler for SimPump {
    fn arm(&mut self, interval_ms: u16) {
        self.interval = Some(interval_ms);
    }

    fn disarm(&mut self) {
        self.interval = None;
    }
}

/// A full simulated machine
pub type SimIo = MachineIo<SimPin, SimInput, SimAdc, SimStrip, SimPump>;

/// Fresh simulated machine: all outputs low, all sensors released
pub fn sim_io() -> SimIo {
    MachineIo {
        spindle: SimPin::default(),
        laser: SimPin::default(),
        air: SimPin::default(),
        vacuum: SimPin::default(),
        hood: SimPin::default(),
        pump_enable: SimPin::default(),
        door: SimInput::default(),
        laser_head: SimInput::default(),
        force_vacuum: SimInput::default(),
        adc: SimAdc::default(),
        leds: SimStrip::default(),
        pump_timer: SimPump::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sim_pin_latch_readback() {
        let mut pin = SimPin::default();
        assert!(pin.is_set_low());
        pin.set_high();
        assert!(pin.is_set_high());
        pin.set_state(false);
        assert!(pin.is_set_low());
    }

    #[test]
    fn test_sim_input_active_low() {
        let mut input = SimInput::default();
        assert!(!input.is_active());
        input.set_active(true);
        assert!(input.is_low());
        assert!(input.is_active());
    }

    #[test]
    fn test_sim_adc_unmapped_channel_reads_zero() {
        let mut adc = SimAdc::default();
        adc.samples[1] = 123;
        assert_eq!(adc.sample(1), 123);
        assert_eq!(adc.sample(9), 0);
    }
}
