use crate::{
    graph::node::{GraphNode, RenderCtx},
    MAX_BLOCK_SIZE,
};

/*
Parallel Layering (Sum)
=======================

Sum plays two nodes side by side and adds their outputs at unity gain:

  [A] ────┬──→ (+) ──→ output
  [B] ────┘

Unlike a crossfade, neither layer is turned down to make room for the other.
Each layer is expected to carry its own envelope, so their levels are set
where they are built. The snare uses this to stack a tonal click on top of its
noise burst, each with its own attack, decay and stop time.

Both layers receive the trigger. The sum is active while either layer is.
*/

pub struct Sum<A, B> {
    pub source_a: A,
    pub source_b: B,
    temp_buffer: Vec<f32>,
}

impl<A, B> Sum<A, B> {
    pub fn new(source_a: A, source_b: B) -> Self {
        Sum {
            source_a,
            source_b,
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }
}

impl<A: GraphNode, B: GraphNode> GraphNode for Sum<A, B> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.source_a.render_block(out, ctx);

        for chunk in out.chunks_mut(MAX_BLOCK_SIZE) {
            let frames = &mut self.temp_buffer[..chunk.len()];
            frames.fill(0.0);
            self.source_b.render_block(frames, ctx);

            for (o, b) in chunk.iter_mut().zip(frames.iter()) {
                *o += *b;
            }
        }
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        self.source_a.note_on(ctx);
        self.source_b.note_on(ctx);
    }

    fn is_active(&self) -> bool {
        self.source_a.is_active() || self.source_b.is_active()
    }
}
