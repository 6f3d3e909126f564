//! Main controller: command dispatch, safety enforcement, tick composition
//!
//! One tick = drain available input (at most one command completes and is
//! dispatched, strictly in arrival order) -> write the single reply ->
//! safety enforcement -> timestamp bookkeeping. Enforcement runs
//! unconditionally and is the last writer each tick: any output the
//! dispatcher set is advisory and can be overwritten before the tick ends.

use heapless::String;
use talos_hal::adc::{AnalogReader, CHANNEL_PRESSURE, CHANNEL_PWM_SENSE};
use talos_hal::gpio::{InputPin, OutputPin};
use talos_hal::indicator::{IndicatorStrip, Rgb, INDICATOR_COUNT};
use talos_hal::timer::PulseScheduler;
use talos_protocol::command::{Actuator, Command, ParseError};
use talos_protocol::line::{Line, LineAssembler};
use talos_protocol::reply::Reply;
use talos_protocol::status::{StatusReport, MAX_DEBUG};

use crate::io::MachineIo;
use crate::safety::{
    crossed, LASER_OFF_TO_AIR_OFF_MS, LASER_OFF_TO_HOOD_OFF_MS, PUMP_INTERVAL_MAX_MS,
    SPINDLE_OFF_TO_MIST_OFF_MS, SPINDLE_OFF_TO_VACUUM_OFF_MS,
};
use crate::state::{InterlockState, MachineMode};

/// Central controller state threaded through every tick
///
/// Owns the line assembler, the interlock bookkeeping, the indicator
/// shadow, and the pump interval. All physical effects go through the
/// [`MachineIo`] passed into each call.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    assembler: LineAssembler,
    state: InterlockState,
    leds: [Rgb; INDICATOR_COUNT],
    pump_interval_ms: u16,
    debug: String<MAX_DEBUG>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current operating mode
    pub fn mode(&self) -> MachineMode {
        self.state.mode
    }

    /// Interlock bookkeeping (read-only)
    pub fn interlock(&self) -> &InterlockState {
        &self.state
    }

    /// Replace the free-text diagnostic reported in the status block
    pub fn set_debug(&mut self, text: &str) {
        self.debug.clear();
        let _ = self.debug.push_str(text);
    }

    /// Feed one received byte into the line assembler
    pub fn feed(&mut self, byte: u8) -> Option<Line> {
        self.assembler.feed(byte)
    }

    /// Run one full tick
    ///
    /// Pulls bytes from `next_byte` (a non-blocking poll of the transport)
    /// until a line completes or input runs dry, dispatches at most one
    /// command, then runs safety enforcement. Returns the reply to send,
    /// if a command was dispatched.
    pub fn tick<O, I, A, L, P, F>(
        &mut self,
        mut next_byte: F,
        io: &mut MachineIo<O, I, A, L, P>,
        now_ms: u32,
    ) -> Option<Reply>
    where
        O: OutputPin,
        I: InputPin,
        A: AnalogReader,
        L: IndicatorStrip,
        P: PulseScheduler,
        F: FnMut() -> Option<u8>,
    {
        let mut reply = None;
        while let Some(byte) = next_byte() {
            if let Some(line) = self.feed(byte) {
                reply = Some(self.dispatch(&line, io, now_ms));
                break;
            }
        }
        self.enforce(io, now_ms);
        reply
    }

    /// Dispatch one completed command line
    ///
    /// The dispatcher's writes are advisory: safety enforcement runs after
    /// it in the same tick and has final authority over every output.
    pub fn dispatch<O, I, A, L, P>(
        &mut self,
        line: &str,
        io: &mut MachineIo<O, I, A, L, P>,
        now_ms: u32,
    ) -> Reply
    where
        O: OutputPin,
        I: InputPin,
        A: AnalogReader,
        L: IndicatorStrip,
        P: PulseScheduler,
    {
        let command = match talos_protocol::parse(line) {
            Ok(command) => command,
            Err(ParseError::UnknownCommand) => return Reply::Unknown,
            Err(ParseError::BadArguments) => return Reply::ArgsError,
        };

        match command {
            // Always allowed, never mutates
            Command::Status => Reply::Status(self.status(io)),

            // Always allowed; the only way the mode changes
            Command::SetMode { value } => match MachineMode::try_from(value) {
                Ok(mode) => {
                    self.state.mode = mode;
                    self.state.mode_set_at = Some(now_ms);
                    Reply::Done
                }
                Err(_) => Reply::ArgsError,
            },

            // Idle gates every remaining command
            _ if self.state.mode.gates_commands() => Reply::Unknown,

            Command::SetLed { index, color } => {
                self.leds[usize::from(index)] = color;
                io.leds.push(&self.leds);
                Reply::Done
            }

            Command::SetActuator { which, on } => {
                match which {
                    Actuator::Spindle => io.spindle.set_state(on),
                    Actuator::Laser => io.laser.set_state(on),
                    Actuator::Air => io.air.set_state(on),
                    Actuator::Vacuum => io.vacuum.set_state(on),
                    Actuator::Hood => io.hood.set_state(on),
                }
                Reply::Done
            }

            Command::SetPumpInterval { ms } => {
                if ms == 0 {
                    io.pump_enable.set_low();
                    io.pump_timer.disarm();
                    self.pump_interval_ms = 0;
                    Reply::Done
                } else if ms > PUMP_INTERVAL_MAX_MS {
                    // Out of range: the pump stays fully off and exactly
                    // one reply goes out
                    io.pump_enable.set_low();
                    io.pump_timer.disarm();
                    self.pump_interval_ms = 0;
                    Reply::ArgsError
                } else {
                    io.pump_enable.set_high();
                    io.pump_timer.arm(ms as u16);
                    self.pump_interval_ms = ms as u16;
                    Reply::Done
                }
            }
        }
    }

    /// Safety enforcement pass; runs every tick after dispatch
    ///
    /// The laser rule is the non-negotiable interlock: in Laser mode the
    /// output follows the door switch and nothing else; in any other mode
    /// it is held low. No command can bypass this.
    pub fn enforce<O, I, A, L, P>(&mut self, io: &mut MachineIo<O, I, A, L, P>, now_ms: u32)
    where
        O: OutputPin,
        I: InputPin,
        A: AnalogReader,
        L: IndicatorStrip,
        P: PulseScheduler,
    {
        let pwm = io.adc.sample(CHANNEL_PWM_SENSE);

        // Observe what is actually running before overriding anything
        let laser_is_on = io.laser.is_set_high() && pwm > 0;
        if laser_is_on {
            self.state.laser_on_at = Some(now_ms);
        }
        let spindle_is_on = io.spindle.is_set_high() && pwm > 0;
        if spindle_is_on {
            self.state.spindle_on_at = Some(now_ms);
        }

        let mode = self.state.mode;
        if !mode.spindle_allowed() {
            io.spindle.set_low();
        }
        if !mode.laser_allowed() {
            io.laser.set_low();
        } else {
            // Door interlock: fire only while the switch reads closed
            io.laser.set_state(io.door.is_active());
        }
        if mode.laser_allowed() && laser_is_on {
            io.air.set_high();
            io.hood.set_high();
        }

        // Edge-triggered delayed shutoffs; each fires exactly once per
        // threshold crossing so a later activation can re-raise the output
        let prev = self.state.prev_tick_at;
        if crossed(now_ms, prev, self.state.laser_on_at, LASER_OFF_TO_AIR_OFF_MS) {
            io.air.set_low();
        }
        if crossed(now_ms, prev, self.state.laser_on_at, LASER_OFF_TO_HOOD_OFF_MS) {
            io.hood.set_low();
        }
        if crossed(
            now_ms,
            prev,
            self.state.spindle_on_at,
            SPINDLE_OFF_TO_VACUUM_OFF_MS,
        ) {
            io.vacuum.set_low();
        }
        if crossed(
            now_ms,
            prev,
            self.state.spindle_on_at,
            SPINDLE_OFF_TO_MIST_OFF_MS,
        ) {
            io.pump_enable.set_low();
            io.pump_timer.disarm();
            self.pump_interval_ms = 0;
        }

        self.state.prev_tick_at = now_ms;
    }

    /// Assemble the full status snapshot
    ///
    /// Read-only apart from taking fresh ADC samples; sensor fields are
    /// inverted per the active-low wiring.
    pub fn status<O, I, A, L, P>(&self, io: &mut MachineIo<O, I, A, L, P>) -> StatusReport
    where
        O: OutputPin,
        I: InputPin,
        A: AnalogReader,
        L: IndicatorStrip,
        P: PulseScheduler,
    {
        StatusReport {
            mode: self.state.mode.as_u8(),
            door: io.door.is_active(),
            laser_head: io.laser_head.is_active(),
            force_vacuum: io.force_vacuum.is_active(),
            vacuum: io.vacuum.is_set_high(),
            hood: io.hood.is_set_high(),
            pressure: io.adc.sample(CHANNEL_PRESSURE),
            pwm: io.adc.sample(CHANNEL_PWM_SENSE),
            spindle: io.spindle.is_set_high(),
            laser: io.laser.is_set_high(),
            air: io.air.is_set_high(),
            pump_interval_ms: self.pump_interval_ms,
            leds: self.leds,
            debug: self.debug.clone(),
        }
    }
}
