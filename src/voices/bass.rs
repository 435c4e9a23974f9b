//! Bass voice.
//!
//! A short, round sub-bass thump: a pure sine, darkened by a low-pass filter
//! and shaped by a fast attack with a long exponential tail.
//!
//! # How It Works
//!
//! 1. Sine oscillator at the track pitch provides the body
//! 2. Low-pass filter at the track cutoff removes any edge
//! 3. Envelope ramps linearly to `0.8 × volume` in 10 ms, then decays
//!    exponentially to the 0.01 floor, landing at 300 ms
//! 4. The voice is gated to exactly 300 ms
//!
//! # Variations
//!
//! - Lower cutoff = softer, more felt than heard
//! - Higher pitch = closer to a tom
//! - Cutoff below pitch = very quiet; the filter eats the fundamental

use crate::{
    dsp::envelope::AttackDecay,
    graph::{
        envelope::EnvNode, extensions::NodeExt, filter::FilterNode, oscillator::OscNode, GraphNode,
    },
    sequencing::ToneParams,
};

/// Total length of a bass hit in seconds.
pub const BASS_DURATION: f32 = 0.3;
/// Attack ramp length in seconds.
pub const BASS_ATTACK: f32 = 0.01;
/// Envelope peak as a fraction of track volume.
pub const BASS_PEAK: f32 = 0.8;

/// Everything needed to render one bass hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BassVoice {
    pub pitch_hz: f32,
    pub cutoff_hz: f32,
    pub volume: f32,
}

impl BassVoice {
    pub fn from_params(params: &ToneParams) -> Self {
        Self {
            pitch_hz: params.pitch_hz,
            cutoff_hz: params.cutoff_hz,
            volume: params.volume,
        }
    }

    pub fn envelope(&self) -> AttackDecay {
        AttackDecay::new(BASS_PEAK * self.volume, BASS_ATTACK, BASS_DURATION)
    }

    pub fn duration(&self) -> f32 {
        BASS_DURATION
    }

    /// Build the node graph for this hit.
    pub fn build(&self) -> impl GraphNode {
        OscNode::sine(self.pitch_hz)
            .through(FilterNode::lowpass(self.cutoff_hz))
            .amplify(EnvNode::new(self.envelope()))
            .gate(BASS_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RenderCtx;

    #[test]
    fn envelope_peaks_at_scaled_volume() {
        let voice = BassVoice::from_params(&ToneParams::new(0.5, 60.0, 200.0));
        let env = voice.envelope();

        assert_eq!(env.peak, 0.4);
        assert_eq!(env.attack, 0.01);
        assert_eq!(env.end, 0.3);
    }

    #[test]
    fn renders_exactly_three_hundred_ms() {
        let sample_rate = 48_000.0;
        let ctx = RenderCtx::new(sample_rate);
        // Cutoff well above pitch so the body is audible to the last frame
        let mut node = BassVoice::from_params(&ToneParams::new(1.0, 110.0, 2_000.0)).build();
        node.note_on(&ctx);

        let mut buffer = vec![0.0f32; 16_000];
        node.render_block(&mut buffer, &ctx);

        let last_sound = buffer.iter().rposition(|&s| s != 0.0).unwrap_or(0);
        assert!(last_sound < 14_400, "sounded past 300 ms at frame {last_sound}");
        assert!(last_sound > 14_300, "stopped early at frame {last_sound}");
        assert!(!node.is_active());
    }
}
