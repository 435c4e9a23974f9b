//! Benchmarks for the sine and triangle oscillators.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_step::dsp::oscillator::OscillatorBlock;
use saavy_step::graph::RenderCtx;

use crate::BLOCK_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");
    let ctx = RenderCtx::new(48_000.0);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        let mut sine = OscillatorBlock::sine();
        group.bench_with_input(BenchmarkId::new("sine", size), &size, |b, _| {
            b.iter(|| {
                sine.render(black_box(&mut buffer), black_box(60.0), black_box(&ctx));
            })
        });

        let mut triangle = OscillatorBlock::triangle();
        group.bench_with_input(BenchmarkId::new("triangle", size), &size, |b, _| {
            b.iter(|| {
                triangle.render(black_box(&mut buffer), black_box(200.0), black_box(&ctx));
            })
        });
    }

    group.finish();
}
