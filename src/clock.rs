//! Wall-clock seam used by the playlist engine.
//!
//! All timing state in the engine is a pure function of the clock reading
//! and stored timestamps, so swapping in a manual clock makes every timing
//! query deterministic under test.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of "now" readings, in seconds since the Unix epoch.
pub trait Clock {
    fn now(&self) -> f64;
}

/// The real system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct WallClock;

impl Clock for WallClock {
    fn now(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_clock_reads_a_plausible_epoch_time() {
        // 2020-01-01 in epoch seconds; any machine running these tests is past it.
        assert!(WallClock.now() > 1_577_836_800.0);
    }

    #[test]
    fn wall_clock_never_goes_backwards_between_reads() {
        let a = WallClock.now();
        let b = WallClock.now();
        assert!(b >= a);
    }
}
