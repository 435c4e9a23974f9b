//! Repeating timers behind a small trait so the step clock can be driven by
//! wall-clock time in the app and by hand in tests.

use std::time::Duration;

/// Identifies one scheduled repeating timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Something that can fire a timer every `interval`.
///
/// Firing is reported back to whoever owns the [`Clock`](crate::sequencing::Clock)
/// as the handle that came due; the scheduler itself holds no callbacks.
pub trait Scheduler {
    fn schedule_repeating(&mut self, interval: Duration) -> TimerHandle;

    /// Cancel a timer. Unknown or already-cancelled handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

/// Shortest period a timer may have; keeps a zero interval from spinning.
const MIN_INTERVAL: Duration = Duration::from_micros(1);

#[derive(Debug, Clone, Copy)]
struct Timer {
    handle: TimerHandle,
    interval: Duration,
    next_due: Duration,
}

/// Fixed-interval scheduler driven by an explicit clock reading.
///
/// Time is a `Duration` since some origin chosen by the caller: the app
/// passes `Instant::elapsed()`, tests pass whatever they like. Each timer is
/// first due one interval after it was scheduled, then every interval after
/// that. Late readings are caught up period by period, in order; nothing is
/// skipped or merged.
#[derive(Debug, Default)]
pub struct IntervalScheduler {
    now: Duration,
    next_id: u64,
    timers: Vec<Timer>,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest time this scheduler has been advanced to.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of live timers.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|timer| timer.handle == handle)
    }

    /// When the earliest live timer is next due.
    pub fn next_due(&self) -> Option<Duration> {
        self.timers.iter().map(|timer| timer.next_due).min()
    }

    /// How long from `now` until the next timer fires (zero if overdue).
    pub fn time_until_next(&self, now: Duration) -> Option<Duration> {
        self.next_due().map(|due| due.saturating_sub(now))
    }

    /// Move time forward to `now` and return every firing that came due, in
    /// chronological order. Readings earlier than the current time are
    /// treated as "no time has passed".
    pub fn advance_to(&mut self, now: Duration) -> Vec<TimerHandle> {
        let now = now.max(self.now);
        let mut fired = Vec::new();

        loop {
            let due = self
                .timers
                .iter_mut()
                .filter(|timer| timer.next_due <= now)
                .min_by_key(|timer| timer.next_due);

            match due {
                Some(timer) => {
                    fired.push(timer.handle);
                    timer.next_due += timer.interval;
                }
                None => break,
            }
        }

        self.now = now;
        fired
    }

    pub fn advance_by(&mut self, delta: Duration) -> Vec<TimerHandle> {
        self.advance_to(self.now + delta)
    }
}

impl Scheduler for IntervalScheduler {
    fn schedule_repeating(&mut self, interval: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;

        let interval = interval.max(MIN_INTERVAL);
        self.timers.push(Timer {
            handle,
            interval,
            next_due: self.now + interval,
        });

        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.retain(|timer| timer.handle != handle);
    }
}
