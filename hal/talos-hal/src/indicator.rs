//! RGB indicator abstractions
//!
//! Three RGB indicators report machine status to the operator. They are
//! purely informational: only explicit `ledN=` commands change them.

/// Number of indicator positions on the strip
pub const INDICATOR_COUNT: usize = 3;

/// One RGB triple
///
/// Channels are raw 8-bit values; out-of-range command payloads wrap to
/// the low byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Black / off
    pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Physical indicator strip
///
/// `push` commits all three colors at once, like a NeoPixel `show()`.
pub trait IndicatorStrip {
    /// Commit the three indicator colors to the hardware
    fn push(&mut self, colors: &[Rgb; INDICATOR_COUNT]);
}
