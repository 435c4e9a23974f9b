use rand::Rng;

/// A pre-rendered block of white noise.
///
/// Samples are uniformly distributed in [-1, 1]. The buffer is filled once
/// when the burst is created; playback just reads it front to back.
pub struct NoiseBuffer {
    samples: Vec<f32>,
}

impl NoiseBuffer {
    /// Length in frames for a burst of `seconds` at `sample_rate`.
    ///
    /// Fractional frames are dropped, but a burst is never empty.
    pub fn frames_for(seconds: f32, sample_rate: f32) -> usize {
        ((sample_rate * seconds) as usize).max(1)
    }

    pub fn generate<R: Rng + ?Sized>(seconds: f32, sample_rate: f32, rng: &mut R) -> Self {
        let len = Self::frames_for(seconds, sample_rate);
        let samples = (0..len).map(|_| rng.gen_range(-1.0f32..=1.0)).collect();
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }
}
