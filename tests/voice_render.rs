use std::{num::NonZeroU32, time::Duration};

use saavy_step::{
    engine::IntervalScheduler,
    sequencing::{ToneParams, VoiceParams},
    voices::{BASS_PEAK, CLICK_PEAK, NOISE_PEAK},
    EngineConfig, Renderer, Session, SessionConfig, Track, VoiceSpec,
};

const SAMPLE_RATE: f32 = 48_000.0;

fn peak(buffer: &[f32]) -> f32 {
    buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()))
}

fn render(renderer: &mut Renderer, frames: usize) -> Vec<f32> {
    let mut out = vec![0.0f32; frames];
    renderer.render_block(&mut out);
    out
}

#[test]
fn bass_hit_lasts_300_ms_and_respects_its_peak() {
    let volume = 0.9;
    let params = VoiceParams {
        bass: ToneParams::new(volume, 110.0, 5_000.0),
        ..VoiceParams::default()
    };
    let mut renderer = Renderer::new(&EngineConfig::default());
    renderer.start_voice(VoiceSpec::for_track(Track::Bass, &params));

    let out = render(&mut renderer, 24_000);
    let last_sound = out.iter().rposition(|&s| s != 0.0).unwrap_or(0);

    assert!(last_sound < 14_400, "sounded past 300 ms at frame {last_sound}");
    assert!(last_sound > 14_300, "stopped early at frame {last_sound}");
    assert_eq!(renderer.active_voices(), 0);

    // A little headroom over the envelope for the filter's passband ripple
    let ceiling = BASS_PEAK * volume * EngineConfig::DEFAULT_MASTER_GAIN;
    assert!(peak(&out) <= ceiling * 1.05, "peak {} over {ceiling}", peak(&out));
    assert!(peak(&out) > ceiling * 0.5);
}

#[test]
fn snare_follows_its_burst_length() {
    let mut params = VoiceParams::default();
    params.set_burst_length(NonZeroU32::new(50).unwrap());

    let mut renderer = Renderer::new(&EngineConfig::default());
    renderer.start_voice(VoiceSpec::for_track(Track::Snare, &params));
    let out = render(&mut renderer, 4_800);

    let last_sound = out.iter().rposition(|&s| s != 0.0).unwrap_or(0);
    assert!(last_sound < 2_400, "sounded past the 50 ms burst at frame {last_sound}");
    assert_eq!(renderer.active_voices(), 0);

    let ceiling = (NOISE_PEAK + CLICK_PEAK) * params.snare.volume * 0.7;
    assert!(peak(&out) <= ceiling * 1.5);
}

#[test]
fn fast_retriggers_superimpose() {
    let params = VoiceParams::default();
    let spec = VoiceSpec::for_track(Track::Bass, &params);

    let mut renderer = Renderer::new(&EngineConfig::default());
    renderer.start_voice(spec);
    render(&mut renderer, 2_400);
    renderer.start_voice(spec);

    // First hit still has 250 ms left; both are sounding
    assert_eq!(renderer.active_voices(), 2);
    render(&mut renderer, 12_000);
    assert_eq!(renderer.active_voices(), 1);
    render(&mut renderer, 2_400);
    assert_eq!(renderer.active_voices(), 0);
}

#[test]
fn session_drives_an_offline_renderer() {
    let config = SessionConfig::new()
        .bpm(120)
        .step(Track::Bass, 0)
        .step(Track::Snare, 4);
    let renderer = Renderer::new(&EngineConfig::default());
    let mut session = Session::new(config, IntervalScheduler::new(), renderer);
    session.play();

    // One 125 ms block per tick
    let mut output = Vec::new();
    for tick in 1..=8u64 {
        session.advance_to(Duration::from_millis(125 * tick));
        let block = render(session.sink_mut(), 6_000);
        output.push(peak(&block));
    }

    assert!(output[0] > 0.0, "bass on step 0");
    assert!(output[2] > 0.0, "bass tail still ringing");
    assert_eq!(output[3], 0.0, "bass done before step 3 ends");
    assert!(output[4] > 0.0, "snare on step 4");
    assert_eq!(output[6], 0.0);
}
