//! Analog input abstractions
//!
//! The controller samples two analog channels: the air-pressure transducer
//! and the laser PWM sense line. Channel numbers are board-assigned.

/// Analog channel carrying the air-pressure transducer signal
pub const CHANNEL_PRESSURE: u8 = 0;

/// Analog channel carrying the laser PWM sense signal
pub const CHANNEL_PWM_SENSE: u8 = 1;

/// Multi-channel analog sampler
///
/// Implementations map channel numbers to physical ADC inputs. Reads are
/// blocking and must complete well within one control tick.
pub trait AnalogReader {
    /// Take one sample from the given channel
    ///
    /// Returns the raw conversion value (12-bit on the reference board,
    /// so 0-4095). Unmapped channels read as 0.
    fn sample(&mut self, channel: u8) -> u16;
}
