//! Board wiring for the reference RP2040 build
//!
//! Pin map:
//!
//! | Function            | Pin     |
//! |---------------------|---------|
//! | Host UART TX/RX     | GPIO0/1 |
//! | Spindle contactor   | GPIO2   |
//! | Laser enable        | GPIO3   |
//! | Air assist valve    | GPIO4   |
//! | Vacuum contactor    | GPIO5   |
//! | Fume hood fan       | GPIO6   |
//! | Pump driver enable  | GPIO7   |
//! | Door switch         | GPIO10  |
//! | Laser head switch   | GPIO11  |
//! | Vacuum force switch | GPIO12  |
//! | Pump step pulse     | GPIO14  |
//! | WS2812 indicators   | GPIO16  |
//! | Pressure ADC        | GPIO26  |
//! | PWM sense ADC       | GPIO27  |
//!
//! The wrapper types adapt `embassy_rp` peripherals to the `talos-hal`
//! traits (newtypes are required by the orphan rule). The indicator strip
//! and pump timer endpoints publish to signals consumed by their tasks,
//! so the controller tick never blocks on hardware.

use embassy_rp::adc::{Adc, Blocking, Channel as AdcPin};
use embassy_rp::gpio::{Input, Output};

use talos_core::io::MachineIo;
use talos_hal::adc::{AnalogReader, CHANNEL_PRESSURE, CHANNEL_PWM_SENSE};
use talos_hal::gpio::{InputPin, OutputPin};
use talos_hal::indicator::{IndicatorStrip, Rgb, INDICATOR_COUNT};
use talos_hal::timer::PulseScheduler;

use crate::channels::{LED_STATE, PUMP_INTERVAL};

/// Actuator output pin
pub struct BoardOutput {
    pin: Output<'static>,
}

impl BoardOutput {
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl OutputPin for BoardOutput {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Sensor input pin (external switches, pulled up, active-low)
pub struct BoardInput {
    pin: Input<'static>,
}

impl BoardInput {
    pub fn new(pin: Input<'static>) -> Self {
        Self { pin }
    }
}

impl InputPin for BoardInput {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

/// Blocking ADC sampler for the two analog channels
pub struct BoardAdc {
    adc: Adc<'static, Blocking>,
    pressure: AdcPin<'static>,
    pwm_sense: AdcPin<'static>,
}

impl BoardAdc {
    pub fn new(
        adc: Adc<'static, Blocking>,
        pressure: AdcPin<'static>,
        pwm_sense: AdcPin<'static>,
    ) -> Self {
        Self {
            adc,
            pressure,
            pwm_sense,
        }
    }
}

impl AnalogReader for BoardAdc {
    fn sample(&mut self, channel: u8) -> u16 {
        let result = match channel {
            CHANNEL_PRESSURE => self.adc.blocking_read(&mut self.pressure),
            CHANNEL_PWM_SENSE => self.adc.blocking_read(&mut self.pwm_sense),
            _ => return 0,
        };
        result.unwrap_or(0)
    }
}

/// Indicator endpoint: hands colors to the LED task
pub struct SignalStrip;

impl IndicatorStrip for SignalStrip {
    fn push(&mut self, colors: &[Rgb; INDICATOR_COUNT]) {
        LED_STATE.signal(*colors);
    }
}

/// Pump timer endpoint: hands the interval to the pump task
pub struct SignalPump;

impl PulseScheduler for SignalPump {
    fn arm(&mut self, interval_ms: u16) {
        PUMP_INTERVAL.signal(Some(interval_ms));
    }

    fn disarm(&mut self) {
        PUMP_INTERVAL.signal(None);
    }
}

/// The fully wired machine
pub type BoardIo = MachineIo<BoardOutput, BoardInput, BoardAdc, SignalStrip, SignalPump>;
