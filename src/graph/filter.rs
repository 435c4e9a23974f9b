use crate::{
    dsp::filter::{FilterType, SVFilter},
    graph::node::{GraphNode, RenderCtx},
};

/*
State-Variable Filter (SVF)
===========================

Both sequencer voices are subtractive: start with something harmonically
rich (or pure noise) and remove what you don't want.

Lowpass (LP): passes frequencies BELOW the cutoff.
  - The bass voice runs its sine through a low-pass so the cutoff control
    can darken it further or open it up.
  - Runs at a gentle Q (≈1.12): a 1 dB bump right at the cutoff.

Bandpass (BP): passes frequencies AROUND the cutoff.
  - The snare's noise burst goes through a band-pass; the cutoff picks the
    "colour" of the rattle, from a papery 200 Hz to a sizzling 5 kHz.
  - Fixed Q = 1 with unity gain at the centre frequency.

Cutoff (Hz) is read from the track parameters when the voice is triggered
and stays fixed for the life of that voice.
*/

pub struct FilterNode {
    filter: SVFilter,
}

impl FilterNode {
    pub fn lowpass(cutoff_hz: f32) -> Self {
        Self {
            filter: SVFilter::lowpass(cutoff_hz),
        }
    }

    pub fn bandpass(cutoff_hz: f32) -> Self {
        Self {
            filter: SVFilter::bandpass(cutoff_hz),
        }
    }

    pub fn with_q(mut self, q: f32) -> Self {
        self.filter.set_q(q);
        self
    }

    pub fn cutoff(&self) -> f32 {
        self.filter.cutoff_hz
    }

    pub fn q(&self) -> f32 {
        self.filter.q
    }

    pub fn filter_type(&self) -> FilterType {
        self.filter.filter_type()
    }
}

impl GraphNode for FilterNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.filter.render(out, ctx);
    }

    fn note_on(&mut self, _ctx: &RenderCtx) {
        self.filter.reset();
    }

    /// A filter produces nothing by itself; its source decides.
    fn is_active(&self) -> bool {
        false
    }
}
