//! Per-track sound-shaping parameters.
//!
//! These are plain values read at the moment a step fires. Changing one
//! affects the next voice that is triggered; voices already sounding keep
//! the values they were built with.

use std::num::NonZeroU32;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::track::Track;

/// Default snare noise-burst length in milliseconds.
pub const DEFAULT_BURST_MS: NonZeroU32 = match NonZeroU32::new(200) {
    Some(ms) => ms,
    None => panic!("burst length must be non-zero"),
};

/// Settings shared by both voices.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneParams {
    /// Output level as a fraction, nominally 0.0 to 1.0.
    pub volume: f32,
    /// Oscillator frequency in Hz.
    pub pitch_hz: f32,
    /// Filter cutoff (bass) or centre (snare) in Hz.
    pub cutoff_hz: f32,
}

impl ToneParams {
    pub const fn new(volume: f32, pitch_hz: f32, cutoff_hz: f32) -> Self {
        Self {
            volume,
            pitch_hz,
            cutoff_hz,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceParams {
    pub bass: ToneParams,
    pub snare: ToneParams,
    /// Length of the snare's noise burst.
    pub snare_burst_ms: NonZeroU32,
}

impl Default for VoiceParams {
    fn default() -> Self {
        Self {
            bass: ToneParams::new(0.8, 60.0, 200.0),
            snare: ToneParams::new(0.7, 200.0, 1_000.0),
            snare_burst_ms: DEFAULT_BURST_MS,
        }
    }
}

impl VoiceParams {
    pub fn tone(&self, track: Track) -> &ToneParams {
        match track {
            Track::Bass => &self.bass,
            Track::Snare => &self.snare,
        }
    }

    pub fn tone_mut(&mut self, track: Track) -> &mut ToneParams {
        match track {
            Track::Bass => &mut self.bass,
            Track::Snare => &mut self.snare,
        }
    }

    pub fn volume(&self, track: Track) -> f32 {
        self.tone(track).volume
    }

    pub fn pitch(&self, track: Track) -> f32 {
        self.tone(track).pitch_hz
    }

    pub fn cutoff(&self, track: Track) -> f32 {
        self.tone(track).cutoff_hz
    }

    pub fn burst_length_ms(&self) -> NonZeroU32 {
        self.snare_burst_ms
    }

    pub fn set_volume(&mut self, track: Track, volume: f32) {
        self.tone_mut(track).volume = volume;
    }

    pub fn set_pitch(&mut self, track: Track, pitch_hz: f32) {
        self.tone_mut(track).pitch_hz = pitch_hz;
    }

    pub fn set_cutoff(&mut self, track: Track, cutoff_hz: f32) {
        self.tone_mut(track).cutoff_hz = cutoff_hz;
    }

    pub fn set_burst_length(&mut self, burst_ms: NonZeroU32) {
        self.snare_burst_ms = burst_ms;
    }
}
