//! Snare drum voice.
//!
//! A burst of band-passed noise for the wires, with a short triangle click
//! on top for the stick hitting the head.
//!
//! # How It Works
//!
//! 1. A white-noise buffer exactly as long as the burst length is rendered
//! 2. Band-pass filter at the track cutoff (Q = 1) colours the noise
//! 3. Noise envelope: linear to `0.6 × volume`, exponential to the floor
//! 4. Triangle click at the track pitch with its own, much shorter envelope
//!    peaking at `0.3 × volume`
//! 5. The two layers are summed
//!
//! Envelope times scale with the burst length so that short bursts compress
//! the whole hit instead of being cut off mid-attack:
//!
//! | segment      | time                       |
//! | ------------ | -------------------------- |
//! | noise attack | min(10 ms, 10 % of burst)  |
//! | noise end    | min(150 ms, 75 % of burst) |
//! | click attack | min(1 ms, 5 % of burst)    |
//! | click end    | min(50 ms, 25 % of burst)  |
//!
//! # Variations
//!
//! - Higher cutoff = brighter, more sizzle
//! - Longer burst = looser snare wires
//! - Higher pitch = sharper crack

use std::num::NonZeroU32;

use crate::{
    dsp::{envelope::AttackDecay, noise::NoiseBuffer},
    graph::{
        envelope::EnvNode, extensions::NodeExt, filter::FilterNode, noise::NoiseNode,
        oscillator::OscNode, GraphNode,
    },
    sequencing::ToneParams,
};

/// Noise envelope peak as a fraction of track volume.
pub const NOISE_PEAK: f32 = 0.6;
/// Click envelope peak as a fraction of track volume.
pub const CLICK_PEAK: f32 = 0.3;
/// Band-pass resonance for the noise layer.
pub const NOISE_Q: f32 = 1.0;

const NOISE_ATTACK_MAX: f32 = 0.01;
const NOISE_ATTACK_SHARE: f32 = 0.1;
const NOISE_END_MAX: f32 = 0.15;
const NOISE_END_SHARE: f32 = 0.75;
const CLICK_ATTACK_MAX: f32 = 0.001;
const CLICK_ATTACK_SHARE: f32 = 0.05;
const CLICK_END_MAX: f32 = 0.05;
const CLICK_END_SHARE: f32 = 0.25;

/// Everything needed to render one snare hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnareVoice {
    pub pitch_hz: f32,
    pub cutoff_hz: f32,
    pub volume: f32,
    pub burst_ms: NonZeroU32,
}

impl SnareVoice {
    pub fn from_params(params: &ToneParams, burst_ms: NonZeroU32) -> Self {
        Self {
            pitch_hz: params.pitch_hz,
            cutoff_hz: params.cutoff_hz,
            volume: params.volume,
            burst_ms,
        }
    }

    /// Burst length in seconds.
    pub fn burst_seconds(&self) -> f32 {
        self.burst_ms.get() as f32 / 1_000.0
    }

    pub fn noise_envelope(&self) -> AttackDecay {
        let burst = self.burst_seconds();
        AttackDecay::new(
            NOISE_PEAK * self.volume,
            NOISE_ATTACK_MAX.min(burst * NOISE_ATTACK_SHARE),
            NOISE_END_MAX.min(burst * NOISE_END_SHARE),
        )
    }

    pub fn click_envelope(&self) -> AttackDecay {
        let burst = self.burst_seconds();
        AttackDecay::new(
            CLICK_PEAK * self.volume,
            CLICK_ATTACK_MAX.min(burst * CLICK_ATTACK_SHARE),
            CLICK_END_MAX.min(burst * CLICK_END_SHARE),
        )
    }

    /// The click stops when its decay lands.
    pub fn click_duration(&self) -> f32 {
        self.click_envelope().end
    }

    /// The whole hit lasts as long as the noise burst.
    pub fn duration(&self) -> f32 {
        self.burst_seconds().max(self.click_duration())
    }

    /// Build the node graph for this hit around a burst-length `noise` buffer.
    pub fn build(&self, noise: NoiseBuffer) -> impl GraphNode {
        self.rattle(noise).sum(self.click())
    }

    fn rattle(&self, noise: NoiseBuffer) -> impl GraphNode {
        NoiseNode::new(noise)
            .through(FilterNode::bandpass(self.cutoff_hz).with_q(NOISE_Q))
            .amplify(EnvNode::new(self.noise_envelope()))
            .gate(self.burst_seconds())
    }

    fn click(&self) -> impl GraphNode {
        OscNode::triangle(self.pitch_hz)
            .amplify(EnvNode::new(self.click_envelope()))
            .gate(self.click_duration())
    }
}
