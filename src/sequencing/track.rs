use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of sequencer tracks.
pub const TRACK_COUNT: usize = 2;

/// One row of the step grid, each with its own voice.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    Bass,
    Snare,
}

impl Track {
    /// All tracks in grid order (top row first).
    pub const ALL: [Track; TRACK_COUNT] = [Track::Bass, Track::Snare];

    /// Row index into per-track arrays.
    pub fn index(self) -> usize {
        match self {
            Track::Bass => 0,
            Track::Snare => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Track::Bass => "bass",
            Track::Snare => "snare",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
