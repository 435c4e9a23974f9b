//! Clock - advances the step cursor once per sixteenth note
//!
//! The clock owns at most one repeating timer. Each time that timer fires
//! the current step is handed to a callback and the cursor moves on,
//! wrapping after the last step.

use std::time::Duration;

use super::pattern::STEPS;
use crate::engine::scheduler::{Scheduler, TimerHandle};

#[derive(Debug, Default)]
pub struct Clock {
    timer: Option<TimerHandle>,
    interval: Duration,
    current_step: usize,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Length of one step (a sixteenth note) at `bpm`.
    ///
    /// `(60 / bpm) * 0.25` seconds; 120 BPM gives 125 ms. Tempos below 1 BPM
    /// are treated as 1.
    pub fn step_interval(bpm: u32) -> Duration {
        let beat = 60.0 / bpm.max(1) as f64;
        Duration::from_secs_f64(beat * 0.25)
    }

    /// Start firing at `bpm`, replacing any timer already running.
    pub fn start<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S, bpm: u32) {
        self.stop(scheduler);

        self.interval = Self::step_interval(bpm);
        self.timer = Some(scheduler.schedule_repeating(self.interval));
    }

    /// Cancel the pending timer. Position is kept; calling twice is harmless.
    pub fn stop<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.timer.take() {
            scheduler.cancel(handle);
        }
    }

    /// Handle a timer firing.
    ///
    /// Firings from any timer other than the clock's current one are
    /// ignored and return `None`. Otherwise `on_step` runs with the current
    /// step, the cursor advances, and the step that was played is returned.
    pub fn on_timer<F: FnOnce(usize)>(&mut self, handle: TimerHandle, on_step: F) -> Option<usize> {
        if self.timer != Some(handle) {
            return None;
        }

        let step = self.current_step;
        on_step(step);
        self.current_step = (step + 1) % STEPS;

        Some(step)
    }

    /// Move the cursor back to the first step.
    pub fn reset(&mut self) {
        self.current_step = 0;
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn timer(&self) -> Option<TimerHandle> {
        self.timer
    }

    /// Interval of the running (or most recently running) timer.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
