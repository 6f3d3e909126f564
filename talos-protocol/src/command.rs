//! Command grammar and parsing
//!
//! Commands are recognized by literal, case-sensitive prefix. Payloads are
//! parsed by a strict tokenizer: a recognized prefix with a malformed
//! payload yields [`ParseError::BadArguments`] rather than garbage values.

use talos_hal::indicator::Rgb;

/// Binary actuators addressable by direct on/off commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Actuator {
    Spindle,
    Laser,
    Air,
    Vacuum,
    Hood,
}

/// A parsed host command
///
/// Numeric range validation (mode variants, pump interval bounds) is the
/// dispatcher's job; the parser only guarantees well-formed integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Full state snapshot request
    Status,
    /// Mode change; `value` is the raw integer, validated downstream
    SetMode { value: u32 },
    /// Indicator update; channel values wrap to 8 bits like the hardware
    SetLed { index: u8, color: Rgb },
    /// Direct actuator write; any nonzero payload means "on"
    SetActuator { which: Actuator, on: bool },
    /// Mist pump stepping interval; 0 disables the pump
    SetPumpInterval { ms: u32 },
}

/// Errors produced while parsing a command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// No recognized command prefix
    UnknownCommand,
    /// Recognized prefix with a malformed payload
    BadArguments,
}

/// Parse one command line
pub fn parse(line: &str) -> Result<Command, ParseError> {
    if line == "status" {
        return Ok(Command::Status);
    }
    if let Some(rest) = line.strip_prefix("mode=") {
        return Ok(Command::SetMode {
            value: parse_u32(rest)?,
        });
    }
    if let Some(rest) = line.strip_prefix("led0=") {
        return parse_led(0, rest);
    }
    if let Some(rest) = line.strip_prefix("led1=") {
        return parse_led(1, rest);
    }
    if let Some(rest) = line.strip_prefix("led2=") {
        return parse_led(2, rest);
    }
    if let Some(rest) = line.strip_prefix("spindle=") {
        return parse_actuator(Actuator::Spindle, rest);
    }
    if let Some(rest) = line.strip_prefix("laser=") {
        return parse_actuator(Actuator::Laser, rest);
    }
    if let Some(rest) = line.strip_prefix("air=") {
        return parse_actuator(Actuator::Air, rest);
    }
    if let Some(rest) = line.strip_prefix("vacuum=") {
        return parse_actuator(Actuator::Vacuum, rest);
    }
    if let Some(rest) = line.strip_prefix("hood=") {
        return parse_actuator(Actuator::Hood, rest);
    }
    if let Some(rest) = line.strip_prefix("pump_interval_ms=") {
        return Ok(Command::SetPumpInterval {
            ms: parse_u32(rest)?,
        });
    }
    Err(ParseError::UnknownCommand)
}

fn parse_actuator(which: Actuator, payload: &str) -> Result<Command, ParseError> {
    let value = parse_u32(payload)?;
    Ok(Command::SetActuator {
        which,
        on: value != 0,
    })
}

fn parse_led(index: u8, payload: &str) -> Result<Command, ParseError> {
    let mut parts = payload.split(',');
    let r = parse_u32(parts.next().ok_or(ParseError::BadArguments)?)?;
    let g = parse_u32(parts.next().ok_or(ParseError::BadArguments)?)?;
    let b = parse_u32(parts.next().ok_or(ParseError::BadArguments)?)?;
    if parts.next().is_some() {
        return Err(ParseError::BadArguments);
    }
    // Out-of-range channel values pass through to the 8-bit hardware
    // channel, wrapping silently
    Ok(Command::SetLed {
        index,
        color: Rgb::new(r as u8, g as u8, b as u8),
    })
}

/// Strict unsigned decimal parse: nonempty, digits only, no overflow
fn parse_u32(s: &str) -> Result<u32, ParseError> {
    if s.is_empty() {
        return Err(ParseError::BadArguments);
    }
    let mut value: u32 = 0;
    for byte in s.bytes() {
        let digit = match byte {
            b'0'..=b'9' => (byte - b'0') as u32,
            _ => return Err(ParseError::BadArguments),
        };
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .ok_or(ParseError::BadArguments)?;
    }
    Ok(value)
}
