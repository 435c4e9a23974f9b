//! Step sequencing: the grid, the tracks on it, their sound parameters, and
//! the clock that walks across it.

pub mod clock;
pub mod params;
pub mod pattern;
pub mod track;

pub use clock::Clock;
pub use params::{ToneParams, VoiceParams};
pub use pattern::{Pattern, STEPS};
pub use track::{Track, TRACK_COUNT};
