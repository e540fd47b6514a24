//! Fixed-interval tick accumulator.

use std::time::Duration;

/// Converts elapsed wall time into whole ticks.
///
/// Leftover time below one interval is kept for the next call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickClock {
    interval: Duration,
    pending_nanos: u128,
}

const NANOS_PER_SEC: u128 = 1_000_000_000;

impl TickClock {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending_nanos: 0,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time accumulated toward the next tick.
    #[must_use]
    pub fn pending(&self) -> Duration {
        let secs = u64::try_from(self.pending_nanos / NANOS_PER_SEC).unwrap_or(u64::MAX);
        Duration::new(secs, (self.pending_nanos % NANOS_PER_SEC) as u32)
    }

    /// Add `elapsed` and take out the whole ticks it completes.
    ///
    /// A zero interval never ticks. Ticks beyond `u64::MAX` stay pending and
    /// come out on later calls.
    pub fn accumulate(&mut self, elapsed: Duration) -> u64 {
        let interval = self.interval.as_nanos();
        if interval == 0 {
            return 0;
        }

        let total = self.pending_nanos.saturating_add(elapsed.as_nanos());
        let ticks = u64::try_from(total / interval).unwrap_or(u64::MAX);
        self.pending_nanos = total - u128::from(ticks) * interval;

        ticks
    }

    /// Drop any accumulated time.
    pub fn clear(&mut self) {
        self.pending_nanos = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_ticks_and_carry() {
        let mut clock = TickClock::new(Duration::from_secs(1));

        assert_eq!(clock.accumulate(Duration::from_millis(400)), 0);
        assert_eq!(clock.accumulate(Duration::from_millis(700)), 1);
        assert_eq!(clock.pending(), Duration::from_millis(100));

        assert_eq!(clock.accumulate(Duration::from_millis(2900)), 3);
        assert_eq!(clock.pending(), Duration::ZERO);
    }

    #[test]
    fn test_clear() {
        let mut clock = TickClock::new(Duration::from_secs(1));
        clock.accumulate(Duration::from_millis(900));
        clock.clear();
        assert_eq!(clock.accumulate(Duration::from_millis(200)), 0);
    }

    #[test]
    fn test_tick_count_beyond_u32() {
        let mut clock = TickClock::new(Duration::from_nanos(1));
        let expected = u64::from(u32::MAX) + 1000;

        assert_eq!(clock.accumulate(Duration::from_nanos(expected)), expected);
        assert_eq!(clock.pending(), Duration::ZERO);
    }

    #[test]
    fn test_overflowing_ticks_carry_over() {
        let mut clock = TickClock::new(Duration::from_nanos(1));

        assert_eq!(clock.accumulate(Duration::MAX), u64::MAX);
        assert!(clock.pending() > Duration::ZERO);
        // The surplus is still owed.
        assert_eq!(clock.accumulate(Duration::ZERO), u64::MAX);
    }

    #[test]
    fn test_zero_interval() {
        let mut clock = TickClock::new(Duration::ZERO);
        assert_eq!(clock.accumulate(Duration::from_secs(10)), 0);
    }
}
