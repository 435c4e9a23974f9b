//! Benchmarks for the attack/decay envelope.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_step::dsp::envelope::{AttackDecay, Envelope};
use saavy_step::graph::RenderCtx;

use crate::BLOCK_SIZES;

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");
    let ctx = RenderCtx::new(48_000.0);
    let shape = AttackDecay::new(0.8, 0.01, 0.3);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // First block after a trigger (linear ramp)
        let mut env = Envelope::new(shape);
        group.bench_with_input(BenchmarkId::new("attack", size), &size, |b, _| {
            b.iter(|| {
                env.note_on();
                env.render(black_box(&mut buffer), black_box(&ctx));
            })
        });

        // Inside the exponential decay
        let mut env = Envelope::new(shape);
        env.note_on();
        for _ in 0..2_400 {
            env.next_sample(&ctx);
        }
        group.bench_with_input(BenchmarkId::new("decay", size), &size, |b, _| {
            b.iter(|| {
                env.render(black_box(&mut buffer), black_box(&ctx));
            })
        });
    }

    group.finish();
}
