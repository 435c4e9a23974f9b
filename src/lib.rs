pub mod dsp;
pub mod engine; // Audio-thread rendering and timer scheduling
pub mod graph; // Composable audio graph nodes
pub mod runtime; // Session object driven by the front end
pub mod sequencing; // Steps, tracks, parameters and the step clock
pub mod voices; // Bass and snare voice descriptors

pub use engine::{AudioError, EngineConfig, Renderer, VoiceSink};
pub use runtime::{Command, Session, SessionConfig, StepReport};
pub use sequencing::{Track, STEPS};
pub use voices::VoiceSpec;

pub const MAX_BLOCK_SIZE: usize = 2048;
pub(crate) const MIN_TIME: f32 = 1.0 / 48_000.0;
