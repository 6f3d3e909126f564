//! Line assembly for the serial command stream
//!
//! Accumulates bytes into newline-terminated command lines. The buffer is
//! bounded; an oversized line is discarded wholesale rather than reported,
//! trading robustness for minimal protocol surface.

use heapless::String;

/// Maximum command line length in bytes (terminator excluded)
pub const MAX_LINE: usize = 64;

/// A completed command line
pub type Line = String<MAX_LINE>;

/// Incremental assembler for newline-terminated command lines
///
/// Feed bytes as they arrive; a completed line is returned by value and
/// the internal buffer cleared. On overflow the whole oversized line is
/// silently dropped: everything up to and including its terminator is
/// discarded, and the terminator itself produces no line. The next line
/// is assembled with no memory of the discarded one.
#[derive(Debug, Clone, Default)]
pub struct LineAssembler {
    buffer: Line,
    discarding: bool,
}

impl LineAssembler {
    /// Create a new, empty assembler
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            discarding: false,
        }
    }

    /// Discard any partially assembled line
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.discarding = false;
    }

    /// Feed a single byte
    ///
    /// Returns `Some(line)` when a line terminator completes the current
    /// line, `None` otherwise. Carriage returns are stripped; control
    /// bytes other than CR/LF are dropped rather than buffered.
    pub fn feed(&mut self, byte: u8) -> Option<Line> {
        match byte {
            b'\n' => {
                if self.discarding {
                    // Terminator of an oversized line: swallow it
                    self.discarding = false;
                    None
                } else {
                    Some(core::mem::take(&mut self.buffer))
                }
            }
            b'\r' => None,
            0x20..=0x7e => {
                if !self.discarding && self.buffer.push(byte as char).is_err() {
                    // Overflow: drop the accumulated prefix and keep
                    // dropping until the line's terminator goes by
                    self.buffer.clear();
                    self.discarding = true;
                }
                None
            }
            _ => None,
        }
    }
}
