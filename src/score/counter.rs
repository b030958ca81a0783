//! Fixed-interval periodic task.
//!
//! The counter does not sleep or spawn anything. The host feeds it elapsed
//! wall-clock time; it carries the remainder between calls so the firing
//! cadence is independent of frame rate.

use std::time::Duration;

/// Lifecycle of a periodic task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskStatus {
    /// Created but never started.
    Idle,
    /// Accumulating time and firing.
    Running,
    /// Stopped for good. Further time is ignored.
    Cancelled,
}

/// Fires once per `interval` of accumulated time while running.
#[derive(Clone, Debug)]
pub struct ScoreCounter {
    interval: Duration,
    carry: Duration,
    fired: u64,
    status: TaskStatus,
}

impl ScoreCounter {
    /// Create an idle counter.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        assert!(!interval.is_zero(), "Score interval must be non-zero");

        Self {
            interval,
            carry: Duration::ZERO,
            fired: 0,
            status: TaskStatus::Idle,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn status(&self) -> TaskStatus {
        self.status
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == TaskStatus::Running
    }

    /// Total number of times the task has fired.
    #[must_use]
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Start the task. Returns `false` if it was not idle.
    pub fn start(&mut self) -> bool {
        if self.status != TaskStatus::Idle {
            return false;
        }
        self.status = TaskStatus::Running;
        true
    }

    /// Cancel the task. Idempotent; a cancelled task never restarts.
    pub fn cancel(&mut self) {
        self.status = TaskStatus::Cancelled;
        self.carry = Duration::ZERO;
    }

    /// Feed `elapsed` time and return how many intervals completed.
    ///
    /// Returns 0 unless running.
    pub fn advance(&mut self, elapsed: Duration) -> u64 {
        if !self.is_running() {
            return 0;
        }

        let total = self.carry.saturating_add(elapsed);
        let interval_nanos = self.interval.as_nanos();
        let fires = total.as_nanos() / interval_nanos;
        let remainder = total.as_nanos() % interval_nanos;

        // remainder < interval, so it fits back into a Duration
        self.carry = Duration::from_nanos(remainder as u64);
        let fires = u64::try_from(fires).unwrap_or(u64::MAX);
        self.fired = self.fired.saturating_add(fires);
        fires
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_ignores_time() {
        let mut counter = ScoreCounter::new(Duration::from_secs(1));
        assert_eq!(counter.status(), TaskStatus::Idle);
        assert_eq!(counter.advance(Duration::from_secs(10)), 0);
        assert_eq!(counter.fired(), 0);
    }

    #[test]
    fn test_three_and_a_half_seconds() {
        let mut counter = ScoreCounter::new(Duration::from_secs(1));
        assert!(counter.start());

        let fires: u64 = (0..7).map(|_| counter.advance(Duration::from_millis(500))).sum();
        assert_eq!(fires, 3);
        assert_eq!(counter.fired(), 3);
    }

    #[test]
    fn test_long_tick_fires_many() {
        let mut counter = ScoreCounter::new(Duration::from_millis(100));
        counter.start();
        assert_eq!(counter.advance(Duration::from_millis(1050)), 10);
        assert_eq!(counter.advance(Duration::from_millis(50)), 1);
    }

    #[test]
    fn test_start_only_once() {
        let mut counter = ScoreCounter::new(Duration::from_secs(1));
        assert!(counter.start());
        assert!(!counter.start());
        counter.cancel();
        assert!(!counter.start());
        assert_eq!(counter.status(), TaskStatus::Cancelled);
    }

    #[test]
    fn test_cancel_stops_firing() {
        let mut counter = ScoreCounter::new(Duration::from_secs(1));
        counter.start();
        counter.advance(Duration::from_millis(900));
        counter.cancel();
        assert_eq!(counter.advance(Duration::from_secs(5)), 0);
        assert_eq!(counter.fired(), 0);
    }

    #[test]
    #[should_panic(expected = "Score interval must be non-zero")]
    fn test_zero_interval() {
        let _ = ScoreCounter::new(Duration::ZERO);
    }
}
