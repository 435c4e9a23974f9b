//! Benchmarks for the renderer mixing overlapping hits.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_step::{sequencing::VoiceParams, EngineConfig, Renderer, Track, VoiceSpec};

use crate::BLOCK_SIZES;

/// Simultaneous hits: a fast pattern at high tempo overlaps a few of each
const OVERLAPPING_HITS: usize = 4;

pub fn bench_renderer(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/renderer");
    let params = VoiceParams::default();
    let bass = VoiceSpec::for_track(Track::Bass, &params);
    let snare = VoiceSpec::for_track(Track::Snare, &params);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        group.bench_with_input(BenchmarkId::new("overlapping", size), &size, |b, _| {
            b.iter_batched_ref(
                || {
                    let mut renderer = Renderer::new(&EngineConfig::default());
                    for _ in 0..OVERLAPPING_HITS {
                        renderer.start_voice(bass);
                        renderer.start_voice(snare);
                    }
                    renderer
                },
                |renderer| renderer.render_block(black_box(&mut buffer)),
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}
