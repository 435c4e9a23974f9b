use crate::graph::node::{GraphNode, RenderCtx};

/// Hard start/stop boundary around a node.
///
/// The inner node is heard for exactly `duration` seconds after `note_on`
/// and is silent afterwards. This is what gives each voice layer its fixed
/// stop time, independent of how its envelope or filter would otherwise
/// ring on.
pub struct Gate<N> {
    inner: N,
    duration: f32,
    remaining: usize,
}

impl<N> Gate<N> {
    pub fn new(inner: N, duration: f32) -> Self {
        Self {
            inner,
            duration: duration.max(0.0),
            remaining: 0,
        }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn remaining_frames(&self) -> usize {
        self.remaining
    }
}

impl<N: GraphNode> GraphNode for Gate<N> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        if self.remaining == 0 {
            out.fill(0.0);
            return;
        }

        let open = self.remaining.min(out.len());
        self.inner.render_block(&mut out[..open], ctx);
        out[open..].fill(0.0);

        self.remaining -= open;
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        self.remaining = ctx.frames(self.duration);
        self.inner.note_on(ctx);
    }

    fn is_active(&self) -> bool {
        self.remaining > 0
    }
}
