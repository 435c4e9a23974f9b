use crate::dsp::oscillator::OscillatorBlock;
use crate::graph::node::{GraphNode, RenderCtx};

/*
Tone Oscillator
===============

The pitched sources in the sequencer are deliberately simple:

Sine: a single frequency with no harmonics. Under a low-pass filter it is
  the round, sub-heavy body of the bass voice.

Triangle: odd harmonics falling off as 1/n². Bright enough to cut through a
  noise burst for a millisecond or two, which makes it a good "click" at the
  front of the snare.

Drum voices don't track a keyboard, so every oscillator here runs at a fixed
frequency taken from the track's pitch parameter at trigger time.

Example usage:
  let body = OscNode::sine(60.0)
      .through(FilterNode::lowpass(200.0))
      .amplify(EnvNode::new(AttackDecay::new(0.64, 0.01, 0.3)));
*/

pub struct OscNode {
    osc: OscillatorBlock,
    frequency: f32,
}

impl OscNode {
    fn new(osc: OscillatorBlock, frequency: f32) -> Self {
        Self { osc, frequency }
    }

    pub fn sine(frequency: f32) -> Self {
        Self::new(OscillatorBlock::sine(), frequency)
    }

    pub fn triangle(frequency: f32) -> Self {
        Self::new(OscillatorBlock::triangle(), frequency)
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }
}

impl GraphNode for OscNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.osc.render(out, self.frequency, ctx);
    }

    fn note_on(&mut self, _ctx: &RenderCtx) {
        self.osc.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    #[test]
    fn valid_sine() {
        let sample_rate = 48_000.0;
        let ctx = RenderCtx::new(sample_rate);
        let mut osc = OscNode::sine(440.0);

        let mut buffer = vec![0.0f32; 128];
        osc.note_on(&ctx);
        osc.render_block(&mut buffer, &ctx);

        // sample n should be sin(2pi f n / sr)
        let sample_index = 12;
        let expected = (TAU * 440.0 * sample_index as f32 / sample_rate).sin();
        let actual = buffer[sample_index];
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn retrigger_restarts_phase() {
        let ctx = RenderCtx::new(48_000.0);
        let mut osc = OscNode::triangle(200.0);

        let mut first = vec![0.0f32; 64];
        osc.note_on(&ctx);
        osc.render_block(&mut first, &ctx);

        let mut second = vec![0.0f32; 64];
        osc.note_on(&ctx);
        osc.render_block(&mut second, &ctx);

        assert_eq!(first, second);
    }
}
