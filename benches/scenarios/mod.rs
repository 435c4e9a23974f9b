//! Scenario benchmarks.
//!
//! Complete voice graphs as the sequencer builds them, and the renderer
//! mixing several overlapping hits.

mod renderer;
mod voices;

pub use renderer::bench_renderer;
pub use voices::bench_voices;
