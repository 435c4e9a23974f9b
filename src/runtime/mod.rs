//! Runtime: the sequencer session and everything a front end drives it with.
//!
//! A [`Session`] owns the transport, the pattern and the voice parameters.
//! It is handed a [`Scheduler`](crate::engine::Scheduler) for its step timer
//! and a [`VoiceSink`](crate::engine::VoiceSink) for the voices it triggers,
//! so the same session runs against a live audio stream or entirely offline.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use saavy_step::{engine::IntervalScheduler, Session, SessionConfig, Track, VoiceSpec};
//!
//! let config = SessionConfig::new().bpm(120).step(Track::Bass, 0);
//! let mut session = Session::new(config, IntervalScheduler::new(), Vec::<VoiceSpec>::new());
//!
//! session.play();
//! session.advance_to(Duration::from_secs(2));
//! assert_eq!(session.sink().len(), 1);
//! ```

mod command;
mod config;
mod highlight;
mod session;

pub use command::Command;
pub use config::SessionConfig;
pub use highlight::{Highlights, HIGHLIGHT_DURATION};
pub use session::{Session, StepReport};
