//! Low-level DSP primitives used by the higher level graph nodes.
//!
//! These components stay focused on the signal-processing math; graph nodes
//! layer note triggering and block rendering on top.

/// Linear-attack, exponential-decay envelope for percussive voices.
pub mod envelope;
/// State-variable filter with low-pass and band-pass responses.
pub mod filter;
/// Pre-rendered white noise bursts.
pub mod noise;
/// Sine and triangle tone generators.
pub mod oscillator;

pub use envelope::{AttackDecay, DECAY_FLOOR};
