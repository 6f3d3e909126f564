//! Safety timing rules
//!
//! Delay constants and the elapsed-time arithmetic behind the delayed
//! auxiliary shutoffs. All math is wrapping-u32: the monotonic clock rolls
//! over after ~49.7 days and unsigned subtraction stays correct across
//! the boundary as long as it is applied consistently.

/// Air assist runs this long after the laser was last seen firing
pub const LASER_OFF_TO_AIR_OFF_MS: u32 = 10_000;

/// Fume hood runs this long after the laser was last seen firing
pub const LASER_OFF_TO_HOOD_OFF_MS: u32 = 60_000;

/// Hold-down vacuum runs this long after the spindle was last seen running
pub const SPINDLE_OFF_TO_VACUUM_OFF_MS: u32 = 30_000;

/// Mist pump runs this long after the spindle was last seen running
pub const SPINDLE_OFF_TO_MIST_OFF_MS: u32 = 10_000;

/// Upper bound for `pump_interval_ms` payloads
pub const PUMP_INTERVAL_MAX_MS: u32 = 1_000;

/// Milliseconds elapsed from `since` to `now`, wrap-safe
pub fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}

/// Edge-triggered threshold crossing
///
/// True exactly when elapsed time since `since` reaches `delay_ms` between
/// the previous tick and this one. A level check would re-suppress the
/// auxiliary every tick once past the delay; the crossing test fires the
/// transition once, so a later activation can raise the output again.
/// `None` (never activated) never fires.
pub fn crossed(now: u32, prev_tick: u32, since: Option<u32>, delay_ms: u32) -> bool {
    match since {
        Some(t) => elapsed_ms(now, t) >= delay_ms && elapsed_ms(prev_tick, t) < delay_ms,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_simple() {
        assert_eq!(elapsed_ms(1_500, 1_000), 500);
        assert_eq!(elapsed_ms(1_000, 1_000), 0);
    }

    #[test]
    fn test_elapsed_across_wraparound() {
        // 100ms before rollover to 400ms after = 500ms elapsed
        let since = u32::MAX - 99;
        assert_eq!(elapsed_ms(400, since), 500);
    }

    #[test]
    fn test_crossing_fires_once() {
        let on_at = Some(1_000);
        let delay = 10_000;

        // Still inside the delay window
        assert!(!crossed(5_000, 4_000, on_at, delay));
        // Crosses between prev and now
        assert!(crossed(11_200, 10_900, on_at, delay));
        // Already past on both sides - must not re-fire
        assert!(!crossed(12_000, 11_200, on_at, delay));
    }

    #[test]
    fn test_crossing_exactly_at_threshold() {
        let on_at = Some(0);
        assert!(crossed(10_000, 9_990, on_at, 10_000));
        assert!(!crossed(10_010, 10_000, on_at, 10_000));
    }

    #[test]
    fn test_never_sentinel_never_fires() {
        assert!(!crossed(1_000_000, 999_000, None, 10));
    }

    #[test]
    fn test_crossing_across_wraparound() {
        // Activation shortly before the clock rolls over; the threshold
        // is crossed after the rollover
        let on_at = Some(u32::MAX - 5_000);
        let prev = u32::MAX - 100;
        let now = 5_001u32; // elapsed = 10_001
        assert!(crossed(now, prev, on_at, 10_000));
        // And it does not re-fire on the following tick
        assert!(!crossed(5_100, now, on_at, 10_000));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Stepping the clock forward in arbitrary increments, the
            /// crossing fires exactly once iff the total elapsed time
            /// reaches the delay.
            #[test]
            fn fires_exactly_once_per_activation(
                start in any::<u32>(),
                delay in 1u32..100_000,
                steps in proptest::collection::vec(1u32..5_000, 1..100),
            ) {
                let on_at = Some(start);
                let mut prev = start;
                let mut now = start;
                let mut fired = 0u32;
                let mut total = 0u32;

                for step in steps {
                    now = now.wrapping_add(step);
                    total += step;
                    if crossed(now, prev, on_at, delay) {
                        fired += 1;
                    }
                    prev = now;
                }

                let expected = u32::from(total >= delay);
                prop_assert_eq!(fired, expected);
            }
        }
    }
}
