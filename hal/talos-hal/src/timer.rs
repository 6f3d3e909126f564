//! Periodic pulse scheduling
//!
//! The mist pump is a small stepper driven by a fixed-width pulse emitted
//! once per interval. Pulse generation runs outside the control tick (a
//! hardware timer or dedicated task) and must touch only the step pin -
//! it is never allowed back into controller state.

/// Periodic step-pulse scheduler
pub trait PulseScheduler {
    /// Start (or retune) periodic pulsing at the given interval
    ///
    /// Re-arming with a new interval takes effect from the next pulse.
    fn arm(&mut self, interval_ms: u16);

    /// Stop pulsing
    ///
    /// Idempotent; disarming an idle scheduler is a no-op.
    fn disarm(&mut self);
}
