use std::time::{SystemTime, UNIX_EPOCH};

use crate::constants::{NANOS_PER_TICK, UNIX_EPOCH_TICKS};

/// A source of tick counts, used to seed a mixer when no seed is given.
///
/// A tick is 100 nanoseconds, counted from midnight on 0001-01-01 UTC.
/// The value only has to be roughly increasing; nothing relies on it being
/// monotonic.
pub trait Clock {
    fn ticks(&self) -> i64;
}

/// Reads ticks from the system wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn ticks(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => {
                let since_epoch = (elapsed.as_nanos() / NANOS_PER_TICK) as i64;
                UNIX_EPOCH_TICKS.wrapping_add(since_epoch)
            }
            // A clock set before 1970 still gets a usable value.
            Err(_) => UNIX_EPOCH_TICKS,
        }
    }
}

/// A clock pinned to a single tick value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn ticks(&self) -> i64 {
        self.0
    }
}
