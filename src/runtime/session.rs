//! Session - the sequencer's transport, grid and sound settings in one place
//!
//! All state lives here and every change goes through a method on it. The
//! session never waits on audio: voices are handed to the sink and
//! forgotten, and a sink that fails is remembered and shown, never fatal.

use std::{num::NonZeroU32, time::Duration};

use super::{command::Command, config::SessionConfig, highlight::Highlights};
use crate::{
    engine::{AudioError, IntervalScheduler, Scheduler, TimerHandle, VoiceSink},
    sequencing::{Clock, Pattern, Track, VoiceParams},
    voices::VoiceSpec,
};

/// What happened on one clock tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// The step that played.
    pub step: usize,
    /// Tracks whose voice was triggered on it.
    pub triggered: Vec<Track>,
}

pub struct Session<S: Scheduler, K: VoiceSink> {
    scheduler: S,
    sink: K,
    clock: Clock,
    pattern: Pattern,
    params: VoiceParams,
    tempo: u32,
    highlights: Highlights,
    now: Duration,
    audio_error: Option<AudioError>,
}

impl<S: Scheduler, K: VoiceSink> Session<S, K> {
    pub fn new(config: SessionConfig, scheduler: S, sink: K) -> Self {
        Self {
            scheduler,
            sink,
            clock: Clock::new(),
            pattern: config.pattern(),
            params: config.params,
            tempo: config.bpm.max(1),
            highlights: Highlights::new(),
            now: Duration::ZERO,
            audio_error: None,
        }
    }

    /// Start the clock from the current step.
    ///
    /// Audio is (re)started first. If that fails the error is kept for
    /// [`audio_error`](Self::audio_error) and the clock runs anyway; the
    /// grid keeps moving in silence until audio comes back.
    pub fn play(&mut self) {
        if self.is_playing() {
            return;
        }

        match self.sink.resume() {
            Ok(()) => self.audio_error = None,
            Err(err) => self.audio_error = Some(err),
        }

        self.clock.start(&mut self.scheduler, self.tempo);
    }

    /// Stop the clock; the next play continues from where it left off.
    pub fn pause(&mut self) {
        self.clock.stop(&mut self.scheduler);
    }

    pub fn toggle_play(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Stop the clock and rewind to step 0. Voices already sounding play out.
    pub fn stop(&mut self) {
        self.pause();
        self.clock.reset();
        self.highlights.clear();
    }

    /// Switch every step off.
    pub fn clear(&mut self) {
        self.pattern.clear();
    }

    /// Flip one cell of the grid and return its new state.
    ///
    /// # Panics
    ///
    /// If `step` is not below [`STEPS`](crate::STEPS).
    pub fn toggle_step(&mut self, track: Track, step: usize) -> bool {
        self.pattern.toggle(track, step)
    }

    pub fn step(&self, track: Track, step: usize) -> bool {
        self.pattern.get(track, step)
    }

    /// Change the tempo. Below 1 BPM is treated as 1.
    ///
    /// While playing, the timer is replaced at once so the new interval
    /// applies from the next tick. The step position is kept rather than
    /// rewound to step 0, and setting the current tempo again is a no-op.
    pub fn set_tempo(&mut self, bpm: u32) {
        let bpm = bpm.max(1);
        if bpm == self.tempo {
            return;
        }

        self.tempo = bpm;
        if self.is_playing() {
            self.clock.start(&mut self.scheduler, bpm);
        }
    }

    pub fn set_volume(&mut self, track: Track, volume: f32) {
        self.params.set_volume(track, volume);
    }

    pub fn set_pitch(&mut self, track: Track, pitch_hz: f32) {
        self.params.set_pitch(track, pitch_hz);
    }

    pub fn set_cutoff(&mut self, track: Track, cutoff_hz: f32) {
        self.params.set_cutoff(track, cutoff_hz);
    }

    pub fn set_burst_length(&mut self, burst_ms: NonZeroU32) {
        self.params.set_burst_length(burst_ms);
    }

    /// Handle a firing of the scheduler's timer at `now`.
    ///
    /// Stale firings (from a timer that has since been replaced or
    /// cancelled) are ignored. Otherwise the current step's active tracks
    /// are each sent a voice built from their parameters as they stand
    /// right now, their cells light up, and the clock moves on.
    pub fn on_timer(&mut self, handle: TimerHandle, now: Duration) -> Option<StepReport> {
        self.now = self.now.max(now);

        let Self {
            clock,
            pattern,
            params,
            sink,
            highlights,
            audio_error,
            ..
        } = self;

        let mut triggered = Vec::new();
        let step = clock.on_timer(handle, |step| {
            highlights.clear();

            for track in pattern.active_tracks(step) {
                if let Err(err) = sink.submit(VoiceSpec::for_track(track, params)) {
                    *audio_error = Some(err);
                }
                highlights.mark(track, step, now);
                triggered.push(track);
            }
        })?;

        Some(StepReport { step, triggered })
    }

    /// Let highlights run out up to `now`.
    pub fn expire_highlights(&mut self, now: Duration) {
        self.now = self.now.max(now);
        self.highlights.expire(self.now);
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::TogglePlay => self.toggle_play(),
            Command::Play => self.play(),
            Command::Pause => self.pause(),
            Command::Stop => self.stop(),
            Command::Clear => self.clear(),
            Command::ToggleStep(track, step) => {
                self.toggle_step(track, step);
            }
            Command::SetTempo(bpm) => self.set_tempo(bpm),
            Command::SetVolume(track, volume) => self.set_volume(track, volume),
            Command::SetPitch(track, pitch) => self.set_pitch(track, pitch),
            Command::SetCutoff(track, cutoff) => self.set_cutoff(track, cutoff),
            Command::SetBurstLength(burst) => self.set_burst_length(burst),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.clock.is_running()
    }

    /// The step that plays on the next tick.
    pub fn current_step(&self) -> usize {
        self.clock.current_step()
    }

    pub fn tempo(&self) -> u32 {
        self.tempo
    }

    /// Time between ticks at the current tempo.
    pub fn step_interval(&self) -> Duration {
        Clock::step_interval(self.tempo)
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn params(&self) -> &VoiceParams {
        &self.params
    }

    pub fn highlights(&self) -> &Highlights {
        &self.highlights
    }

    pub fn is_lit(&self, track: Track, step: usize) -> bool {
        self.highlights.is_lit(track, step)
    }

    /// The last audio failure, cleared when audio resumes successfully.
    pub fn audio_error(&self) -> Option<&AudioError> {
        self.audio_error.as_ref()
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl<K: VoiceSink> Session<IntervalScheduler, K> {
    /// Run every tick due up to `now`, oldest first, then expire highlights.
    pub fn advance_to(&mut self, now: Duration) -> Vec<StepReport> {
        let mut reports = Vec::new();
        for handle in self.scheduler.advance_to(now) {
            let fired_at = self.scheduler.now();
            if let Some(report) = self.on_timer(handle, fired_at) {
                reports.push(report);
            }
        }

        self.expire_highlights(now);
        reports
    }

    /// How long a front end may sleep before something changes on its own.
    pub fn time_until_next(&self, now: Duration) -> Option<Duration> {
        let tick = self.scheduler.time_until_next(now);
        let light = self
            .highlights
            .next_expiry()
            .map(|until| until.saturating_sub(now));

        match (tick, light) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}
