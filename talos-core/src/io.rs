//! Physical I/O bundle
//!
//! Groups the concrete HAL endpoints the controller drives. Writes take
//! effect on the hardware immediately - there is no double buffering, so
//! within one tick the safety enforcement pass can overwrite a value the
//! dispatcher just set, and the later write wins.

use talos_hal::adc::AnalogReader;
use talos_hal::gpio::{InputPin, OutputPin};
use talos_hal::indicator::IndicatorStrip;
use talos_hal::timer::PulseScheduler;

/// All hardware endpoints for one machine
///
/// Output pins share one type `O` (they are the same peripheral kind on
/// any real board), likewise the sensor inputs `I`.
pub struct MachineIo<O, I, A, L, P>
where
    O: OutputPin,
    I: InputPin,
    A: AnalogReader,
    L: IndicatorStrip,
    P: PulseScheduler,
{
    /// Router spindle contactor
    pub spindle: O,
    /// Laser enable line
    pub laser: O,
    /// Air assist valve
    pub air: O,
    /// Hold-down vacuum contactor
    pub vacuum: O,
    /// Fume hood fan
    pub hood: O,
    /// Mist pump stepper driver enable
    pub pump_enable: O,

    /// Door switch (active-low: raw LOW = closed)
    pub door: I,
    /// Laser head presence switch (active-low)
    pub laser_head: I,
    /// Vacuum hold-down force switch (active-low)
    pub force_vacuum: I,

    /// Analog sampler (pressure, PWM sense)
    pub adc: A,
    /// RGB status indicators
    pub leds: L,
    /// Mist pump pulse timer
    pub pump_timer: P,
}
