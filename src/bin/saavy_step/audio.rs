//! Output stream - opened on the first play, fed through a ring buffer

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::{Consumer, Producer, PushError, RingBuffer};

use saavy_step::{
    engine::{AudioError, EngineConfig, Renderer, VoiceSink},
    VoiceSpec, MAX_BLOCK_SIZE,
};

/// Oscilloscope window length in samples
pub const SCOPE_LEN: usize = 1024;
/// Capacity in scope windows for the audio→UI ring
const SCOPE_RING_BLOCKS: usize = 16;

/// What the audio callback takes ownership of once the stream is built.
struct Pending {
    device: cpal::Device,
    config: cpal::SupportedStreamConfig,
    voice_rx: Consumer<VoiceSpec>,
    scope_tx: Producer<f32>,
}

/// Voice sink backed by a cpal output stream.
///
/// The stream is not opened until the sequencer first asks for audio, so a
/// missing or busy device only matters once the user presses play.
pub struct StreamSink {
    engine: EngineConfig,
    voice_tx: Producer<VoiceSpec>,
    pending: Option<Pending>,
    stream: Option<cpal::Stream>,
    sample_rate: Option<f32>,
    device_error: Option<AudioError>,
}

impl StreamSink {
    /// Find the default output device and prepare the queues.
    ///
    /// Never fails: if there is no usable device, the error is kept and
    /// reported on every attempt to start audio.
    pub fn open(engine: EngineConfig) -> (Self, Consumer<f32>) {
        let (voice_tx, voice_rx) = RingBuffer::<VoiceSpec>::new(engine.queue_size);
        let (scope_tx, scope_rx) = RingBuffer::<f32>::new(SCOPE_LEN * SCOPE_RING_BLOCKS);

        let mut sink = Self {
            engine,
            voice_tx,
            pending: None,
            stream: None,
            sample_rate: None,
            device_error: None,
        };

        match default_output() {
            Ok((device, config)) => {
                sink.sample_rate = Some(config.sample_rate().0 as f32);
                sink.pending = Some(Pending {
                    device,
                    config,
                    voice_rx,
                    scope_tx,
                });
            }
            Err(err) => sink.device_error = Some(err),
        }

        (sink, scope_rx)
    }

    /// Device sample rate, if a device was found.
    pub fn sample_rate(&self) -> Option<f32> {
        self.sample_rate
    }

    pub fn is_running(&self) -> bool {
        self.stream.is_some()
    }

    fn start(&mut self) -> Result<(), AudioError> {
        if let Some(err) = &self.device_error {
            return Err(err.clone());
        }

        let Some(pending) = self.pending.take() else {
            return Err(AudioError::Stream("output stream was lost".into()));
        };

        let stream = build_stream(pending, &self.engine).inspect_err(|err| {
            self.device_error = Some(err.clone());
        })?;

        // Keep the stream even if it will not start yet; the next play retries
        let started = stream
            .play()
            .map_err(|err| AudioError::Stream(err.to_string()));
        self.stream = Some(stream);
        started
    }
}

impl VoiceSink for StreamSink {
    fn submit(&mut self, voice: VoiceSpec) -> Result<(), AudioError> {
        if self.stream.is_none() {
            // Nothing would drain the queue; drop the hit instead of
            // letting it play late once audio starts.
            return Err(self
                .device_error
                .clone()
                .unwrap_or_else(|| AudioError::Stream("audio not started".into())));
        }
        self.voice_tx.submit(voice)
    }

    fn resume(&mut self) -> Result<(), AudioError> {
        match &self.stream {
            Some(stream) => stream
                .play()
                .map_err(|err| AudioError::Stream(err.to_string())),
            None => self.start(),
        }
    }
}

fn default_output() -> Result<(cpal::Device, cpal::SupportedStreamConfig), AudioError> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or(AudioError::NoOutputDevice)?;
    let config = device
        .default_output_config()
        .map_err(|err| AudioError::Device(err.to_string()))?;

    if config.sample_format() != cpal::SampleFormat::F32 {
        return Err(AudioError::Device(format!(
            "unsupported sample format {:?} (only f32 supported)",
            config.sample_format()
        )));
    }

    Ok((device, config))
}

fn build_stream(pending: Pending, engine: &EngineConfig) -> Result<cpal::Stream, AudioError> {
    let Pending {
        device,
        config,
        mut voice_rx,
        mut scope_tx,
    } = pending;

    let sample_rate = config.sample_rate().0 as f32;
    let channels = config.channels() as usize;
    let mut renderer = Renderer::new(&engine.with_sample_rate(sample_rate));
    let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

    device
        .build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                renderer.poll(&mut voice_rx);

                let total_frames = data.len() / channels;
                let mut frames_written = 0;
                while frames_written < total_frames {
                    let frames_remaining = total_frames - frames_written;
                    let frames_to_render = frames_remaining.min(MAX_BLOCK_SIZE);

                    let block = &mut render_buf[..frames_to_render];
                    renderer.render_block(block);

                    // Duplicate mono to all channels and write to device
                    let out_off = frames_written * channels;
                    for (i, &s) in block.iter().enumerate() {
                        for ch in 0..channels {
                            data[out_off + i * channels + ch] = s;
                        }
                    }

                    // Push mono block to the scope, drop on overflow
                    for &s in block.iter() {
                        if let Err(PushError::Full(_)) = scope_tx.push(s) {
                            break;
                        }
                    }

                    frames_written += frames_to_render;
                }
            },
            |err| eprintln!("Audio error: {}", err),
            None,
        )
        .map_err(|err| AudioError::Stream(err.to_string()))
}
