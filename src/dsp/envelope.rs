use crate::{graph::node::RenderCtx, MIN_TIME};

/*
Percussive Attack/Decay Envelope
================================

Drum hits do not have a sustain phase - they are struck, bloom, and die away.
This envelope models exactly that with two automation segments measured from
the moment the voice is triggered.

Vocabulary
----------

  peak        The level reached at the end of the attack ramp.

  attack      Seconds from trigger until the envelope reaches `peak`.

  end         Seconds from trigger until the decay ramp lands on `floor`.
              Note this is an absolute time, not a duration after attack.

  floor       Where the decay ramp lands. Exponential curves can never reach
              zero, so the decay targets a small positive value instead.


The Shape
---------

  Level
   peak ┐   ╱╲
        │  ╱  ╲
        │ ╱    `.
        │╱       `-._
  floor ┤             `--.______   (held until the voice is gated off)
    0.0 └──┴────────────┴───────→ Time
        0  attack       end

  Attack is a straight line from 0 to peak. Decay is exponential:

    level(t) = peak * (floor / peak) ^ ((t - attack) / (end - attack))

  which is a straight line on a decibel scale - the way struck things fade.


Edge Cases
----------

  - peak == 0     Nothing to decay from; the envelope stays at 0.
  - peak < floor  The decay would have to rise. We target `peak` instead so
                  the envelope never exceeds its peak.
  - end <= attack The decay collapses into an instant step to floor.

Levels are computed from elapsed time rather than accumulated increments so
the sample that lands on `end` is exactly `floor`, with no drift.
*/

/// Floor used by every exponential decay in the sequencer voices.
pub const DECAY_FLOOR: f32 = 0.01;

/// Static description of a linear-attack, exponential-decay curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackDecay {
    pub peak: f32,
    pub attack: f32,
    pub end: f32,
    pub floor: f32,
}

impl AttackDecay {
    pub fn new(peak: f32, attack: f32, end: f32) -> Self {
        Self {
            peak,
            attack,
            end,
            floor: DECAY_FLOOR,
        }
    }

    /// Length of the decay ramp in seconds.
    pub fn decay_time(&self) -> f32 {
        (self.end - self.attack).max(0.0)
    }

    fn decay_target(&self) -> f32 {
        if self.peak <= 0.0 {
            self.peak
        } else {
            self.floor.min(self.peak)
        }
    }

    /// Envelope level `t` seconds after the trigger.
    pub fn level_at(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }

        if t < self.attack {
            return self.peak * (t / self.attack);
        }

        let target = self.decay_target();
        let decay = self.decay_time();
        if decay <= MIN_TIME || t >= self.end {
            return target;
        }

        if self.peak <= 0.0 {
            return self.peak;
        }

        let progress = (t - self.attack) / decay;
        self.peak * (target / self.peak).powf(progress)
    }
}

/// Sample-by-sample player for an [`AttackDecay`] curve.
pub struct Envelope {
    shape: AttackDecay,
    elapsed_samples: u64,
    level: f32,
    triggered: bool,
}

impl Envelope {
    pub fn new(shape: AttackDecay) -> Self {
        Self {
            shape,
            elapsed_samples: 0,
            level: 0.0,
            triggered: false,
        }
    }

    /// Restart the curve from zero.
    pub fn note_on(&mut self) {
        self.elapsed_samples = 0;
        self.level = 0.0;
        self.triggered = true;
    }

    /// Advance the envelope by one sample. Called once per sample.
    pub fn next_sample(&mut self, ctx: &RenderCtx) -> f32 {
        if !self.triggered {
            self.level = 0.0;
            return self.level;
        }

        let t = (self.elapsed_samples as f64 / ctx.sample_rate as f64) as f32;
        self.level = self.shape.level_at(t);
        self.elapsed_samples = self.elapsed_samples.saturating_add(1);

        self.level
    }

    /// Render a block of envelope values into the buffer.
    pub fn render(&mut self, buffer: &mut [f32], ctx: &RenderCtx) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample(ctx);
        }
    }

    /// True until the decay ramp has landed on its floor.
    pub fn is_active(&self, ctx: &RenderCtx) -> bool {
        let end_samples = (self.shape.end.max(self.shape.attack) * ctx.sample_rate).ceil() as u64;
        self.triggered && self.elapsed_samples <= end_samples
    }

    pub fn reset(&mut self) {
        self.elapsed_samples = 0;
        self.level = 0.0;
        self.triggered = false;
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn shape(&self) -> AttackDecay {
        self.shape
    }
}
