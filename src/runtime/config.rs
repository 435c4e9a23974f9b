use std::num::NonZeroU32;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sequencing::{Pattern, ToneParams, Track, VoiceParams};

/// Starting state for a [`Session`](super::Session).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Tempo in beats per minute.
    pub bpm: u32,
    pub params: VoiceParams,
    /// Steps switched on before playback starts.
    #[cfg_attr(feature = "serde", serde(default))]
    pub steps: Vec<(Track, usize)>,
}

impl SessionConfig {
    pub const DEFAULT_BPM: u32 = 120;

    pub fn new() -> Self {
        Self {
            bpm: Self::DEFAULT_BPM,
            params: VoiceParams::default(),
            steps: Vec::new(),
        }
    }

    /// Set the tempo in beats per minute
    pub fn bpm(mut self, bpm: u32) -> Self {
        self.bpm = bpm;
        self
    }

    pub fn bass(mut self, tone: ToneParams) -> Self {
        self.params.bass = tone;
        self
    }

    pub fn snare(mut self, tone: ToneParams) -> Self {
        self.params.snare = tone;
        self
    }

    pub fn burst_length(mut self, burst_ms: NonZeroU32) -> Self {
        self.params.snare_burst_ms = burst_ms;
        self
    }

    /// Switch a step on in the starting pattern.
    pub fn step(mut self, track: Track, step: usize) -> Self {
        self.steps.push((track, step));
        self
    }

    /// The starting pattern.
    ///
    /// # Panics
    ///
    /// If any configured step is outside the grid.
    pub fn pattern(&self) -> Pattern {
        let mut pattern = Pattern::new();
        for &(track, step) in &self.steps {
            pattern.set(track, step, true);
        }
        pattern
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = SessionConfig::new()
            .bpm(90)
            .bass(ToneParams::new(0.5, 45.0, 150.0))
            .burst_length(NonZeroU32::new(80).unwrap())
            .step(Track::Snare, 4)
            .step(Track::Snare, 12);

        assert_eq!(config.bpm, 90);
        assert_eq!(config.params.bass.pitch_hz, 45.0);
        assert_eq!(config.params.snare, VoiceParams::default().snare);
        assert_eq!(config.params.snare_burst_ms.get(), 80);

        let pattern = config.pattern();
        assert!(pattern.get(Track::Snare, 4) && pattern.get(Track::Snare, 12));
        assert!(!pattern.get(Track::Bass, 4));
    }

    #[test]
    fn default_is_an_empty_grid_at_120() {
        let config = SessionConfig::default();
        assert_eq!(config.bpm, 120);
        assert!(config.pattern().is_empty());
    }
}
