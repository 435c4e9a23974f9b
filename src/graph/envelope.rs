use crate::{
    dsp::envelope::{AttackDecay, Envelope},
    graph::node::{GraphNode, RenderCtx},
};

/// Graph wrapper around a percussive [`Envelope`].
///
/// Usually used as the modulator side of `.amplify()`.
pub struct EnvNode {
    env: Envelope,
    sample_rate: f32,
}

impl EnvNode {
    pub fn new(shape: AttackDecay) -> Self {
        Self {
            env: Envelope::new(shape),
            sample_rate: 0.0,
        }
    }

    pub fn shape(&self) -> AttackDecay {
        self.env.shape()
    }

    pub fn level(&self) -> f32 {
        self.env.level()
    }
}

impl GraphNode for EnvNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.sample_rate = ctx.sample_rate;
        self.env.render(out, ctx);
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        self.sample_rate = ctx.sample_rate;
        self.env.note_on();
    }

    fn is_active(&self) -> bool {
        self.env.is_active(&RenderCtx::new(self.sample_rate))
    }
}
