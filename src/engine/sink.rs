//! The boundary between the sequencer and whatever makes sound.

use std::{error::Error, fmt};

#[cfg(feature = "rtrb")]
use rtrb::{Consumer, Producer};

use crate::voices::VoiceSpec;

/// Why audio could not be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    /// The host has no output device to open.
    NoOutputDevice,
    /// The device refused the configuration or could not be queried.
    Device(String),
    /// The output stream could not be built, started or kept running.
    Stream(String),
    /// The audio thread is not draining voices fast enough.
    QueueFull,
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::NoOutputDevice => f.write_str("no default output device available"),
            AudioError::Device(reason) => write!(f, "audio device error: {reason}"),
            AudioError::Stream(reason) => write!(f, "audio stream error: {reason}"),
            AudioError::QueueFull => f.write_str("voice queue is full; hit dropped"),
        }
    }
}

impl Error for AudioError {}

/// Control-side end: where triggered voices are sent.
pub trait VoiceSink {
    /// Hand a voice over for playback. Fire and forget.
    fn submit(&mut self, voice: VoiceSpec) -> Result<(), AudioError>;

    /// Make sure audio is running, starting it if it has not been yet.
    ///
    /// Called on every play; must be cheap when audio is already running.
    fn resume(&mut self) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Audio-side end: where the renderer picks voices up.
pub trait VoiceReceiver {
    fn pop(&mut self) -> Option<VoiceSpec>;
}

/// Recording sink, handy for inspecting what a session triggered.
impl VoiceSink for Vec<VoiceSpec> {
    fn submit(&mut self, voice: VoiceSpec) -> Result<(), AudioError> {
        self.push(voice);
        Ok(())
    }
}

impl<K: VoiceSink + ?Sized> VoiceSink for &mut K {
    fn submit(&mut self, voice: VoiceSpec) -> Result<(), AudioError> {
        (**self).submit(voice)
    }

    fn resume(&mut self) -> Result<(), AudioError> {
        (**self).resume()
    }
}

#[cfg(feature = "rtrb")]
impl VoiceSink for Producer<VoiceSpec> {
    fn submit(&mut self, voice: VoiceSpec) -> Result<(), AudioError> {
        self.push(voice).map_err(|_| AudioError::QueueFull)
    }
}

#[cfg(feature = "rtrb")]
impl VoiceReceiver for Consumer<VoiceSpec> {
    fn pop(&mut self) -> Option<VoiceSpec> {
        Consumer::pop(self).ok()
    }
}

#[cfg(all(test, feature = "rtrb"))]
mod tests {
    use super::*;
    use crate::sequencing::{Track, VoiceParams};
    use rtrb::RingBuffer;

    #[test]
    fn ring_buffer_carries_voices_in_order() {
        let (mut tx, mut rx) = RingBuffer::<VoiceSpec>::new(4);
        let params = VoiceParams::default();

        tx.submit(VoiceSpec::for_track(Track::Bass, &params)).unwrap();
        tx.submit(VoiceSpec::for_track(Track::Snare, &params)).unwrap();

        assert_eq!(VoiceReceiver::pop(&mut rx).map(|v| v.track()), Some(Track::Bass));
        assert_eq!(VoiceReceiver::pop(&mut rx).map(|v| v.track()), Some(Track::Snare));
        assert_eq!(VoiceReceiver::pop(&mut rx), None);
    }

    #[test]
    fn full_queue_reports_instead_of_blocking() {
        let (mut tx, _rx) = RingBuffer::<VoiceSpec>::new(1);
        let voice = VoiceSpec::for_track(Track::Bass, &VoiceParams::default());

        assert_eq!(tx.submit(voice), Ok(()));
        assert_eq!(tx.submit(voice), Err(AudioError::QueueFull));
    }
}
