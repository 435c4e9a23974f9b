use std::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::graph::node::RenderCtx;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OscillatorWaveform {
    Sine,
    Triangle,
}

/// Phase-accumulating tone generator.
///
/// Phase is kept in cycles (0.0..1.0) so both waveforms start at zero and
/// rise, matching the shape of a freshly started oscillator.
pub struct OscillatorBlock {
    waveform: OscillatorWaveform,
    phase: f32,
}

impl OscillatorBlock {
    pub fn new(waveform: OscillatorWaveform) -> Self {
        Self {
            waveform,
            phase: 0.0,
        }
    }

    pub fn sine() -> Self {
        Self::new(OscillatorWaveform::Sine)
    }

    pub fn triangle() -> Self {
        Self::new(OscillatorWaveform::Triangle)
    }

    pub fn waveform(&self) -> OscillatorWaveform {
        self.waveform
    }

    #[inline]
    fn shape(&self, phase: f32) -> f32 {
        match self.waveform {
            OscillatorWaveform::Sine => (TAU * phase).sin(),
            OscillatorWaveform::Triangle => {
                // 0 → +1 at a quarter cycle, -1 at three quarters, back to 0
                if phase < 0.25 {
                    4.0 * phase
                } else if phase < 0.75 {
                    2.0 - 4.0 * phase
                } else {
                    4.0 * phase - 4.0
                }
            }
        }
    }

    /// Fill `destination` with the waveform at `frequency` Hz.
    pub fn render(&mut self, destination: &mut [f32], frequency: f32, ctx: &RenderCtx) {
        let increment = frequency / ctx.sample_rate;
        for sample in destination.iter_mut() {
            *sample = self.shape(self.phase);
            self.phase = (self.phase + increment).rem_euclid(1.0);
        }
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_hits_its_corners() {
        // 4 samples per cycle lands exactly on 0, +1, 0, -1
        let ctx = RenderCtx::new(400.0);
        let mut osc = OscillatorBlock::triangle();
        let mut buffer = [0.0f32; 8];
        osc.render(&mut buffer, 100.0, &ctx);

        let expected = [0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0, -1.0];
        for (actual, expected) in buffer.iter().zip(expected) {
            assert!((actual - expected).abs() < 1e-5, "{buffer:?}");
        }
    }

    #[test]
    fn negative_frequency_stays_in_range() {
        let ctx = RenderCtx::new(48_000.0);
        let mut osc = OscillatorBlock::sine();
        let mut buffer = vec![0.0f32; 256];
        osc.render(&mut buffer, -440.0, &ctx);

        assert!(buffer.iter().all(|s| s.is_finite() && s.abs() <= 1.0));
    }
}
