//! Composable building blocks for constructing audio-processing graphs.
//!
//! Graph nodes wrap the low-level DSP primitives with what voice design
//! needs: a trigger, block-based rendering and an activity flag. The
//! `extensions` module adds fluent helpers so voices read as a signal chain.

/// Multiply two signals together (envelope-controlled amplitude).
pub mod amplify;
/// Percussive envelope node.
pub mod envelope;
/// Fluent combinators (`.amplify()`, `.through()`, `.sum()`, `.gate()`).
pub mod extensions;
/// State-variable filter node.
pub mod filter;
/// Fixed-length start/stop window around a node.
pub mod gate;
/// Core traits shared by all graph nodes.
pub mod node;
/// One-shot noise burst playback.
pub mod noise;
/// Fixed-frequency tone oscillators.
pub mod oscillator;
/// Unity-gain parallel layering.
pub mod sum;
/// Serial chaining of two nodes (source → effect).
pub mod through;

pub use node::{GraphNode, RenderCtx};
