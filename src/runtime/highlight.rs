//! Which grid cells are flashing because they just played.

use std::time::Duration;

use crate::sequencing::{Track, STEPS, TRACK_COUNT};

/// How long a cell stays lit after its step plays.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(150);

/// Per-cell highlight deadlines, in the session's clock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlights {
    until: [[Option<Duration>; STEPS]; TRACK_COUNT],
}

impl Highlights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Light a cell from `now` for [`HIGHLIGHT_DURATION`].
    pub fn mark(&mut self, track: Track, step: usize, now: Duration) {
        self.until[track.index()][step] = Some(now + HIGHLIGHT_DURATION);
    }

    /// Put out every cell whose time is up at `now`.
    pub fn expire(&mut self, now: Duration) {
        for deadline in self.until.iter_mut().flatten() {
            if deadline.is_some_and(|until| until <= now) {
                *deadline = None;
            }
        }
    }

    pub fn clear(&mut self) {
        self.until = Default::default();
    }

    pub fn is_lit(&self, track: Track, step: usize) -> bool {
        self.until[track.index()][step].is_some()
    }

    /// The earliest deadline still pending.
    pub fn next_expiry(&self) -> Option<Duration> {
        self.until.iter().flatten().flatten().min().copied()
    }
}
