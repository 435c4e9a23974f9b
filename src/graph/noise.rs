use crate::dsp::noise::NoiseBuffer;
use crate::graph::node::{GraphNode, RenderCtx};

/// One-shot playback of a pre-rendered noise burst.
///
/// The burst plays once from the start on `note_on`, then falls silent.
pub struct NoiseNode {
    buffer: NoiseBuffer,
    position: usize,
}

impl NoiseNode {
    pub fn new(buffer: NoiseBuffer) -> Self {
        Self {
            buffer,
            // Parked at the end until triggered
            position: usize::MAX,
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl GraphNode for NoiseNode {
    fn render_block(&mut self, out: &mut [f32], _ctx: &RenderCtx) {
        let samples = self.buffer.samples();
        let start = self.position.min(samples.len());
        let available = &samples[start..];
        let frames = available.len().min(out.len());

        out[..frames].copy_from_slice(&available[..frames]);
        out[frames..].fill(0.0);

        self.position = start + frames;
    }

    fn note_on(&mut self, _ctx: &RenderCtx) {
        self.position = 0;
    }

    fn is_active(&self) -> bool {
        self.position < self.buffer.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn burst_plays_once_then_silence() {
        let ctx = RenderCtx::new(1_000.0);
        let mut rng = SmallRng::seed_from_u64(3);
        let mut node = NoiseNode::new(NoiseBuffer::generate(0.05, 1_000.0, &mut rng));
        assert!(!node.is_active());

        node.note_on(&ctx);
        assert!(node.is_active());

        let mut buffer = vec![0.0f32; 64];
        node.render_block(&mut buffer, &ctx);

        assert!(buffer[..50].iter().any(|&s| s != 0.0));
        assert!(buffer[50..].iter().all(|&s| s == 0.0));
        assert!(!node.is_active());
    }
}
