//! Audio engine: the renderer, the voice hand-off and the step timer.

pub mod renderer;
pub mod scheduler;
pub mod sink;

pub use renderer::Renderer;
pub use scheduler::{IntervalScheduler, Scheduler, TimerHandle};
pub use sink::{AudioError, VoiceReceiver, VoiceSink};

/// Settings for the audio side of the sequencer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Used when rendering offline; a live stream takes the device rate.
    pub sample_rate: f32,
    /// Gain applied to the sum of all voices.
    pub master_gain: f32,
    /// Voices preallocated on the audio thread.
    pub voice_capacity: usize,
    /// Slots in the control-to-audio voice queue.
    pub queue_size: usize,
    /// Seed for snare noise.
    pub noise_seed: u64,
}

impl EngineConfig {
    pub const DEFAULT_MASTER_GAIN: f32 = 0.7;

    pub fn with_sample_rate(self, sample_rate: f32) -> Self {
        Self {
            sample_rate,
            ..self
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48_000.0,
            master_gain: Self::DEFAULT_MASTER_GAIN,
            voice_capacity: 32,
            queue_size: 256,
            noise_seed: 0x5EED,
        }
    }
}
