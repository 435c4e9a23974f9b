//! Pattern - which steps of which tracks are switched on
//!
//! A pattern is a fixed 2 × 16 grid of booleans. Step order is playback
//! order: index 0 is the downbeat, index 15 the last sixteenth of the bar.

use super::track::{Track, TRACK_COUNT};

/// Steps per pattern (one bar of sixteenth notes).
pub const STEPS: usize = 16;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pattern {
    cells: [[bool; STEPS]; TRACK_COUNT],
}

impl Pattern {
    /// An empty pattern with every step off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one cell and return its new value.
    ///
    /// # Panics
    ///
    /// Panics if `step >= STEPS`.
    pub fn toggle(&mut self, track: Track, step: usize) -> bool {
        let cell = &mut self.cells[track.index()][step];
        *cell = !*cell;
        *cell
    }

    /// Set one cell explicitly.
    ///
    /// # Panics
    ///
    /// Panics if `step >= STEPS`.
    pub fn set(&mut self, track: Track, step: usize, active: bool) {
        self.cells[track.index()][step] = active;
    }

    /// # Panics
    ///
    /// Panics if `step >= STEPS`.
    pub fn get(&self, track: Track, step: usize) -> bool {
        self.cells[track.index()][step]
    }

    /// Switch every step of every track off.
    pub fn clear(&mut self) {
        self.cells = [[false; STEPS]; TRACK_COUNT];
    }

    /// The full row for one track.
    pub fn steps(&self, track: Track) -> &[bool; STEPS] {
        &self.cells[track.index()]
    }

    /// Tracks that should sound on `step`, in grid order.
    pub fn active_tracks(&self, step: usize) -> impl Iterator<Item = Track> + '_ {
        Track::ALL
            .into_iter()
            .filter(move |&track| self.get(track, step))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| !cell)
    }
}
