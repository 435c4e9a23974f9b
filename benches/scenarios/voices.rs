//! Benchmarks for complete voice graphs.
//!
//! Graphs are built the same way the renderer builds them when a step fires.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use rand::{rngs::SmallRng, SeedableRng};
use saavy_step::{
    graph::{GraphNode, RenderCtx},
    sequencing::VoiceParams,
    Track, VoiceSpec,
};

use crate::BLOCK_SIZES;

pub fn bench_voices(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voices");
    let sample_rate = 48_000.0;
    let ctx = RenderCtx::new(sample_rate);
    let params = VoiceParams::default();
    let mut rng = SmallRng::seed_from_u64(7);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // === BASS ===
        // sine → lowpass → envelope, first block after the trigger
        let bass = VoiceSpec::for_track(Track::Bass, &params);
        let mut voice = bass.build(sample_rate, &mut rng);
        group.bench_with_input(BenchmarkId::new("bass", size), &size, |b, _| {
            b.iter(|| {
                voice.note_on(&ctx);
                voice.render_block(black_box(&mut buffer), black_box(&ctx));
            })
        });

        // === SNARE ===
        // bandpassed noise + triangle click
        let snare = VoiceSpec::for_track(Track::Snare, &params);
        let mut voice = snare.build(sample_rate, &mut rng);
        group.bench_with_input(BenchmarkId::new("snare", size), &size, |b, _| {
            b.iter(|| {
                voice.note_on(&ctx);
                voice.render_block(black_box(&mut buffer), black_box(&ctx));
            })
        });
    }

    // Building a snare renders its whole noise burst up front
    let snare = VoiceSpec::for_track(Track::Snare, &params);
    group.bench_function("snare_build", |b| {
        b.iter(|| black_box(snare.build(sample_rate, &mut rng)))
    });

    group.finish();
}
