use std::num::NonZeroU32;

use crate::sequencing::Track;

/// Everything a front end can ask of a session.
///
/// Key bindings, buttons and sliders all translate into one of these and go
/// through [`Session::apply`](super::Session::apply).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Play if paused, pause if playing.
    TogglePlay,
    Play,
    /// Stop the clock, keep the position.
    Pause,
    /// Stop the clock and rewind to the first step.
    Stop,
    /// Switch every step of every track off.
    Clear,
    ToggleStep(Track, usize),
    SetTempo(u32),
    SetVolume(Track, f32),
    SetPitch(Track, f32),
    SetCutoff(Track, f32),
    SetBurstLength(NonZeroU32),
}
