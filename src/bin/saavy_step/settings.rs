//! Per-track settings modal - which field is selected and how sliders move

use std::{num::NonZeroU32, ops::RangeInclusive};

use saavy_step::{sequencing::VoiceParams, Command, Track};

/// Tempo slider range in BPM
pub const TEMPO_RANGE: RangeInclusive<u32> = 60..=200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Volume,
    Pitch,
    Cutoff,
    Burst,
}

impl Field {
    pub fn label(self, track: Track) -> &'static str {
        match (self, track) {
            (Field::Volume, _) => "Volume",
            (Field::Pitch, _) => "Pitch",
            (Field::Cutoff, Track::Bass) => "Filter",
            (Field::Cutoff, Track::Snare) => "Tone",
            (Field::Burst, _) => "Burst",
        }
    }

    /// Slider range and step, in display units (percent, Hz, ms)
    fn slider(self, track: Track) -> (f32, f32, f32) {
        match (self, track) {
            (Field::Volume, _) => (0.0, 100.0, 1.0),
            (Field::Pitch, Track::Bass) => (30.0, 200.0, 1.0),
            (Field::Pitch, Track::Snare) => (100.0, 500.0, 5.0),
            (Field::Cutoff, Track::Bass) => (50.0, 1_000.0, 10.0),
            (Field::Cutoff, Track::Snare) => (200.0, 5_000.0, 50.0),
            (Field::Burst, _) => (10.0, 1_000.0, 10.0),
        }
    }
}

/// The settings modal for one track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub track: Track,
    selected: usize,
}

impl Settings {
    pub fn new(track: Track) -> Self {
        Self { track, selected: 0 }
    }

    pub fn fields(&self) -> &'static [Field] {
        match self.track {
            Track::Bass => &[Field::Volume, Field::Pitch, Field::Cutoff],
            Track::Snare => &[Field::Volume, Field::Pitch, Field::Cutoff, Field::Burst],
        }
    }

    pub fn selected(&self) -> Field {
        self.fields()[self.selected]
    }

    /// Move the selection up (negative) or down, wrapping.
    pub fn select(&mut self, delta: isize) {
        let len = self.fields().len() as isize;
        self.selected = (self.selected as isize + delta).rem_euclid(len) as usize;
    }

    /// Current value of `field` in display units.
    pub fn value(&self, field: Field, params: &VoiceParams) -> f32 {
        match field {
            Field::Volume => params.volume(self.track) * 100.0,
            Field::Pitch => params.pitch(self.track),
            Field::Cutoff => params.cutoff(self.track),
            Field::Burst => params.burst_length_ms().get() as f32,
        }
    }

    /// Value formatted the way the modal shows it.
    pub fn display(&self, field: Field, params: &VoiceParams) -> String {
        let value = self.value(field, params);
        match field {
            Field::Volume => format!("{value:.0}%"),
            Field::Pitch | Field::Cutoff => format!("{value:.0} Hz"),
            Field::Burst => format!("{value:.0} ms"),
        }
    }

    /// Where `field` sits on its slider, 0.0 to 1.0.
    pub fn position(&self, field: Field, params: &VoiceParams) -> f64 {
        let (min, max, _) = field.slider(self.track);
        (((self.value(field, params) - min) / (max - min)) as f64).clamp(0.0, 1.0)
    }

    /// Nudge the selected slider by `notches` steps.
    pub fn adjust(&self, notches: i32, params: &VoiceParams) -> Command {
        let field = self.selected();
        let (min, max, step) = field.slider(self.track);
        let value = (self.value(field, params) + notches as f32 * step).clamp(min, max);

        match field {
            Field::Volume => Command::SetVolume(self.track, value / 100.0),
            Field::Pitch => Command::SetPitch(self.track, value),
            Field::Cutoff => Command::SetCutoff(self.track, value),
            Field::Burst => {
                let ms = NonZeroU32::new(value.round() as u32).unwrap_or(NonZeroU32::MIN);
                Command::SetBurstLength(ms)
            }
        }
    }
}

/// Nudge the tempo slider.
pub fn nudge_tempo(bpm: u32, delta: i32) -> u32 {
    bpm.saturating_add_signed(delta)
        .clamp(*TEMPO_RANGE.start(), *TEMPO_RANGE.end())
}
