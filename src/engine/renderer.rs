//! Renderer - owns every sounding voice and mixes them to the master bus
//!
//! Runs on the audio thread. Voices arrive as descriptions, are built and
//! triggered on arrival, mixed until they fall silent, then dropped.

use rand::{rngs::SmallRng, SeedableRng};

use super::{
    sink::{AudioError, VoiceReceiver, VoiceSink},
    EngineConfig,
};
use crate::{
    graph::{GraphNode, RenderCtx},
    voices::VoiceSpec,
    MAX_BLOCK_SIZE,
};

pub struct Renderer {
    ctx: RenderCtx,
    master_gain: f32,
    voices: Vec<Box<dyn GraphNode>>,
    temp_buffer: Vec<f32>,
    rng: SmallRng,
    frame_counter: u64,
}

impl Renderer {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            ctx: RenderCtx::new(config.sample_rate),
            master_gain: config.master_gain,
            voices: Vec::with_capacity(config.voice_capacity),
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
            rng: SmallRng::seed_from_u64(config.noise_seed),
            frame_counter: 0,
        }
    }

    /// Build and trigger a voice; it starts on the next rendered frame.
    pub fn start_voice(&mut self, spec: VoiceSpec) {
        let mut voice = spec.build(self.ctx.sample_rate, &mut self.rng);
        voice.note_on(&self.ctx);
        self.voices.push(voice);
    }

    /// Start every voice waiting in `rx`.
    pub fn poll<R: VoiceReceiver + ?Sized>(&mut self, rx: &mut R) {
        while let Some(spec) = rx.pop() {
            self.start_voice(spec);
        }
    }

    /// Mix all sounding voices into `out`, replacing its contents.
    pub fn render_block(&mut self, out: &mut [f32]) {
        out.fill(0.0);

        for chunk in out.chunks_mut(MAX_BLOCK_SIZE) {
            let frames = chunk.len();

            for voice in &mut self.voices {
                let scratch = &mut self.temp_buffer[..frames];
                scratch.fill(0.0);
                voice.render_block(scratch, &self.ctx);

                for (o, v) in chunk.iter_mut().zip(scratch.iter()) {
                    *o += v;
                }
            }

            for sample in chunk.iter_mut() {
                *sample *= self.master_gain;
            }

            self.voices.retain(|voice| voice.is_active());
            self.frame_counter += frames as u64;
        }
    }

    /// Voices still sounding.
    pub fn active_voices(&self) -> usize {
        self.voices.len()
    }

    /// Frames rendered since creation.
    pub fn frames_rendered(&self) -> u64 {
        self.frame_counter
    }

    pub fn sample_rate(&self) -> f32 {
        self.ctx.sample_rate
    }

    pub fn master_gain(&self) -> f32 {
        self.master_gain
    }
}

/// Offline use: submitting starts the voice immediately.
impl VoiceSink for Renderer {
    fn submit(&mut self, voice: VoiceSpec) -> Result<(), AudioError> {
        self.start_voice(voice);
        Ok(())
    }
}
