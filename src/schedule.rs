//! Fixed-interval polling
//!
//! Explicit scheduled-task state polled from the event loop: fires once
//! immediately, then every `interval`. Single-flight - while a fetch is
//! pending, ticks are skipped rather than queued, so slow responses never
//! pile up concurrent requests. `trigger` forces the next tick early
//! (cache invalidation wants its refetch now, not at the next interval).

use std::time::{Duration, Instant};

/// How often the notification list is refetched
pub const NOTIFICATION_POLL_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug)]
pub struct PollTask {
    interval: Duration,
    last_started: Option<Instant>,
    in_flight: bool,
    forced: bool,
}

impl PollTask {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_started: None,
            in_flight: false,
            forced: false,
        }
    }

    /// Should a fetch start now?
    pub fn due(&self, now: Instant) -> bool {
        if self.in_flight {
            return false;
        }
        if self.forced {
            return true;
        }
        match self.last_started {
            None => true,
            Some(started) => now.duration_since(started) >= self.interval,
        }
    }

    pub fn mark_started(&mut self, now: Instant) {
        self.in_flight = true;
        self.forced = false;
        self.last_started = Some(now);
    }

    pub fn mark_finished(&mut self) {
        self.in_flight = false;
    }

    /// Force the next `due` check to fire regardless of the interval.
    pub fn trigger(&mut self) {
        self.forced = true;
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> PollTask {
        PollTask::new(Duration::from_secs(30))
    }

    #[test]
    fn test_fires_immediately_on_start() {
        let task = task();
        assert!(task.due(Instant::now()));
    }

    #[test]
    fn test_waits_full_interval_between_ticks() {
        let mut task = task();
        let start = Instant::now();

        task.mark_started(start);
        task.mark_finished();

        assert!(!task.due(start + Duration::from_secs(29)));
        assert!(task.due(start + Duration::from_secs(30)));
    }

    #[test]
    fn test_single_flight_skips_ticks_while_pending() {
        let mut task = task();
        let start = Instant::now();

        task.mark_started(start);

        // Interval has long passed, but the fetch is still in flight
        assert!(!task.due(start + Duration::from_secs(120)));

        task.mark_finished();
        assert!(task.due(start + Duration::from_secs(120)));
    }

    #[test]
    fn test_trigger_overrides_interval() {
        let mut task = task();
        let start = Instant::now();

        task.mark_started(start);
        task.mark_finished();
        assert!(!task.due(start + Duration::from_secs(1)));

        task.trigger();
        assert!(task.due(start + Duration::from_secs(1)));
    }

    #[test]
    fn test_trigger_does_not_break_single_flight() {
        let mut task = task();
        let start = Instant::now();

        task.mark_started(start);
        task.trigger();

        assert!(!task.due(start + Duration::from_secs(1)));
    }

    #[test]
    fn test_mark_started_consumes_trigger() {
        let mut task = task();
        let start = Instant::now();

        task.trigger();
        task.mark_started(start);
        task.mark_finished();

        assert!(!task.due(start + Duration::from_secs(1)));
    }

    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// A task is never due while in flight, whatever the elapsed time.
        #[test]
        fn prop_never_due_in_flight(elapsed_secs in 0u64..10_000) {
            let mut task = PollTask::new(Duration::from_secs(30));
            let start = Instant::now();
            task.mark_started(start);

            prop_assert!(!task.due(start + Duration::from_secs(elapsed_secs)));
        }
    }
}
