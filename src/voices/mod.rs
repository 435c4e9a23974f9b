//! The two sequencer voices.
//!
//! A voice is described by a small `Copy` value taken from the track's
//! parameters at the moment its step fires. The description is what travels
//! to the audio thread; the node graph is only built there, when the voice
//! starts. After that nobody keeps a handle to it: it plays out and is
//! dropped by the renderer.
//!
//! # Example
//!
//! ```ignore
//! use saavy_step::{sequencing::VoiceParams, Track, VoiceSpec};
//!
//! let params = VoiceParams::default();
//! let hit = VoiceSpec::for_track(Track::Snare, &params);
//! assert_eq!(hit.track(), Track::Snare);
//! ```

mod bass;
mod snare;

pub use bass::{BassVoice, BASS_ATTACK, BASS_DURATION, BASS_PEAK};
pub use snare::{SnareVoice, CLICK_PEAK, NOISE_PEAK, NOISE_Q};

use rand::Rng;

use crate::{
    dsp::noise::NoiseBuffer,
    graph::GraphNode,
    sequencing::{Track, VoiceParams},
};

/// A request to play one hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VoiceSpec {
    Bass(BassVoice),
    Snare(SnareVoice),
}

impl VoiceSpec {
    /// Snapshot `track`'s current parameters into a voice description.
    pub fn for_track(track: Track, params: &VoiceParams) -> Self {
        match track {
            Track::Bass => VoiceSpec::Bass(BassVoice::from_params(&params.bass)),
            Track::Snare => VoiceSpec::Snare(SnareVoice::from_params(
                &params.snare,
                params.snare_burst_ms,
            )),
        }
    }

    pub fn track(&self) -> Track {
        match self {
            VoiceSpec::Bass(_) => Track::Bass,
            VoiceSpec::Snare(_) => Track::Snare,
        }
    }

    /// How long the hit sounds, in seconds.
    pub fn duration(&self) -> f32 {
        match self {
            VoiceSpec::Bass(voice) => voice.duration(),
            VoiceSpec::Snare(voice) => voice.duration(),
        }
    }

    /// Build the node graph for this hit. The caller still has to trigger it.
    pub fn build<R: Rng + ?Sized>(&self, sample_rate: f32, rng: &mut R) -> Box<dyn GraphNode> {
        match self {
            VoiceSpec::Bass(voice) => Box::new(voice.build()),
            VoiceSpec::Snare(voice) => {
                let noise = NoiseBuffer::generate(voice.burst_seconds(), sample_rate, rng);
                Box::new(voice.build(noise))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RenderCtx;
    use rand::{rngs::SmallRng, SeedableRng};
    use std::num::NonZeroU32;

    #[test]
    fn snapshot_reads_live_parameters() {
        let mut params = VoiceParams::default();
        let before = VoiceSpec::for_track(Track::Snare, &params);

        params.set_volume(Track::Snare, 0.1);
        params.set_burst_length(NonZeroU32::MIN);
        let after = VoiceSpec::for_track(Track::Snare, &params);

        match (before, after) {
            (VoiceSpec::Snare(before), VoiceSpec::Snare(after)) => {
                assert_eq!(before.volume, 0.7);
                assert_eq!(before.burst_ms.get(), 200);
                assert_eq!(after.volume, 0.1);
                assert_eq!(after.burst_ms.get(), 1);
            }
            other => panic!("expected two snare voices, got {other:?}"),
        }
    }

    #[test]
    fn each_track_gets_its_own_voice() {
        let params = VoiceParams::default();
        for track in Track::ALL {
            assert_eq!(VoiceSpec::for_track(track, &params).track(), track);
        }
        assert_eq!(VoiceSpec::for_track(Track::Bass, &params).duration(), 0.3);
        assert_eq!(VoiceSpec::for_track(Track::Snare, &params).duration(), 0.2);
    }

    #[test]
    fn built_graphs_box_for_the_renderer() {
        let sample_rate = 48_000.0;
        let ctx = RenderCtx::new(sample_rate);
        let mut rng = SmallRng::seed_from_u64(3);
        let params = VoiceParams::default();

        let mut voices: Vec<Box<dyn GraphNode>> = Track::ALL
            .iter()
            .map(|&track| VoiceSpec::for_track(track, &params).build(sample_rate, &mut rng))
            .collect();

        let mut buffer = vec![0.0f32; 512];
        for voice in &mut voices {
            voice.note_on(&ctx);
            voice.render_block(&mut buffer, &ctx);
            assert!(buffer.iter().any(|&s| s != 0.0));
            assert!(voice.is_active());
        }
    }
}
