//! Time source for entity timestamps and notice deadlines.

use crate::model::timestamp::{truncate_to_millis, Timestamp};
use chrono::{TimeDelta, Utc};
use std::cell::Cell;

/// Supplies the current instant, truncated to milliseconds.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        truncate_to_millis(Utc::now())
    }
}

/// Hand-driven clock for deterministic callers and tests.
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<Timestamp>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: Cell::new(truncate_to_millis(start)),
        }
    }

    pub fn set(&self, value: Timestamp) {
        self.now.set(truncate_to_millis(value));
    }

    pub fn advance(&self, delta: TimeDelta) {
        self.now.set(self.now.get() + delta);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, ManualClock, SystemClock};
    use chrono::{TimeDelta, TimeZone, Timelike, Utc};

    #[test]
    fn manual_clock_advances_by_delta() {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        clock.advance(TimeDelta::milliseconds(1500));
        assert_eq!(
            clock.now(),
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 1).unwrap() + TimeDelta::milliseconds(500)
        );
    }

    #[test]
    fn system_clock_has_millisecond_precision() {
        assert_eq!(SystemClock.now().nanosecond() % 1_000_000, 0);
    }
}
