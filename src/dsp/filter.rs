use std::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::graph::node::RenderCtx;

/*
| type      | passes          | rejects      | peak gain |
| --------- | --------------- | ------------ | --------- |
| low-pass  | below cutoff    | above cutoff | Q         |
| band-pass | around cutoff   | both sides   | 0 dB      |

The band-pass output is scaled by k = 1/Q so its centre gain stays at unity
regardless of Q.
*/

/// Low-pass resonance: a 1 dB peak at the cutoff, 10^(1/20) as linear gain.
pub const LOWPASS_Q: f32 = 1.122_018_5;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
    LowPass,
    BandPass,
}

pub struct FilterOutputs {
    pub lowpass: f32,
    pub bandpass: f32,
}

/// Topology-preserving state-variable filter.
pub struct SVFilter {
    ic1eq: f32, // First integrator's memory
    ic2eq: f32, // Second integrator's memory

    pub cutoff_hz: f32,
    pub q: f32,
    filter_type: FilterType,
}

impl SVFilter {
    pub fn new(filter_type: FilterType, cutoff_hz: f32, q: f32) -> Self {
        Self {
            ic1eq: 0.0,
            ic2eq: 0.0,
            cutoff_hz,
            q,
            filter_type,
        }
    }

    pub fn lowpass(cutoff_hz: f32) -> Self {
        Self::new(FilterType::LowPass, cutoff_hz, LOWPASS_Q)
    }

    pub fn bandpass(cutoff_hz: f32) -> Self {
        Self::new(FilterType::BandPass, cutoff_hz, 1.0)
    }

    pub fn filter_type(&self) -> FilterType {
        self.filter_type
    }

    #[inline]
    fn compute_g(&self, ctx: &RenderCtx) -> f32 {
        // Keep the prewarp away from DC and Nyquist where tan() blows up
        let cutoff = self.cutoff_hz.clamp(1.0, ctx.sample_rate * 0.49);
        (TAU * cutoff / (2.0 * ctx.sample_rate)).tan()
    }

    #[inline]
    fn compute_k(&self) -> f32 {
        1.0 / self.q.max(0.01)
    }

    pub fn next_sample(&mut self, sample: f32, k: f32, g: f32) -> FilterOutputs {
        let h = 1.0 / (1.0 + g * (g + k));
        let v3 = sample - self.ic2eq;
        let v1 = h * (self.ic1eq + g * v3);
        let v2 = self.ic2eq + g * v1;

        self.ic1eq = 2.0 * v1 - self.ic1eq;
        self.ic2eq = 2.0 * v2 - self.ic2eq;

        FilterOutputs {
            lowpass: v2,
            bandpass: k * v1,
        }
    }

    pub fn render(&mut self, buffer: &mut [f32], ctx: &RenderCtx) {
        let g = self.compute_g(ctx);
        let k = self.compute_k();

        for sample in buffer.iter_mut() {
            let outputs = self.next_sample(*sample, k, g);

            *sample = match self.filter_type {
                FilterType::LowPass => outputs.lowpass,
                FilterType::BandPass => outputs.bandpass,
            }
        }
    }

    pub fn reset(&mut self) {
        self.ic1eq = 0.0;
        self.ic2eq = 0.0;
    }

    pub fn set_cutoff(&mut self, cutoff: f32) {
        self.cutoff_hz = cutoff;
    }

    pub fn set_q(&mut self, q: f32) {
        self.q = q;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::oscillator::OscillatorBlock;

    fn peak_after_transient(buffer: &[f32]) -> f32 {
        let skip = buffer.len().min(1_024);
        buffer
            .get(skip..)
            .unwrap_or(buffer)
            .iter()
            .fold(0.0f32, |acc, &x| acc.max(x.abs()))
    }

    fn filtered_sine_peak(filter: &mut SVFilter, freq: f32) -> f32 {
        let ctx = RenderCtx::new(48_000.0);
        let mut osc = OscillatorBlock::sine();
        let mut buffer = vec![0.0f32; 4_096];
        osc.render(&mut buffer, freq, &ctx);
        filter.reset();
        filter.render(&mut buffer, &ctx);
        peak_after_transient(&buffer)
    }

    #[test]
    fn test_lowpass_passes_dc() {
        let mut filter = SVFilter::lowpass(500.0);
        let mut buffer = vec![1.0; 512];
        let ctx = RenderCtx::new(48_000.0);

        filter.render(&mut buffer, &ctx);

        assert!(buffer[511] > 0.99, "got {}", buffer[511]);
    }

    #[test]
    fn test_lowpass_filters_high_freq() {
        let mut filter = SVFilter::lowpass(200.0);
        let peak = filtered_sine_peak(&mut filter, 2_000.0);

        // Two octaves and change above cutoff at 12 dB/octave
        assert!(peak < 0.05, "Expected high freq attenuation, got peak: {peak}");
    }

    #[test]
    fn test_lowpass_bumps_one_db_at_cutoff() {
        let mut filter = SVFilter::lowpass(200.0);
        let at_cutoff = filtered_sine_peak(&mut filter, 200.0);
        assert!((at_cutoff - LOWPASS_Q).abs() < 0.03, "gain at cutoff {at_cutoff}");
    }

    #[test]
    fn test_bandpass_has_unity_centre_gain() {
        let mut filter = SVFilter::bandpass(1_000.0);
        let centre = filtered_sine_peak(&mut filter, 1_000.0);
        assert!((centre - 1.0).abs() < 0.05, "centre gain {centre}");
    }

    #[test]
    fn test_bandpass_rejects_far_frequencies() {
        let mut filter = SVFilter::bandpass(1_000.0);
        let centre = filtered_sine_peak(&mut filter, 1_000.0);
        let low = filtered_sine_peak(&mut filter, 100.0);
        let high = filtered_sine_peak(&mut filter, 10_000.0);

        assert!(centre > low * 5.0, "centre={centre}, low={low}");
        assert!(centre > high * 5.0, "centre={centre}, high={high}");
    }

    #[test]
    fn test_cutoff_above_nyquist_is_stable() {
        let mut filter = SVFilter::lowpass(100_000.0);
        let peak = filtered_sine_peak(&mut filter, 440.0);
        assert!(peak.is_finite());
        assert!(peak <= LOWPASS_Q);
    }

    #[test]
    fn test_set_cutoff_affects_filtering() {
        let mut filter = SVFilter::lowpass(200.0);
        let peak_low_cutoff = filtered_sine_peak(&mut filter, 1_000.0);

        filter.set_cutoff(5_000.0);
        let peak_high_cutoff = filtered_sine_peak(&mut filter, 1_000.0);

        assert!(
            peak_high_cutoff > peak_low_cutoff * 2.0,
            "High cutoff should pass more signal: high={}, low={}",
            peak_high_cutoff,
            peak_low_cutoff
        );
    }

    #[test]
    fn test_higher_q_narrows_bandpass() {
        let mut wide = SVFilter::bandpass(1_000.0);
        let mut narrow = SVFilter::bandpass(1_000.0);
        narrow.set_q(8.0);

        let wide_off = filtered_sine_peak(&mut wide, 500.0);
        let narrow_off = filtered_sine_peak(&mut narrow, 500.0);

        assert!(narrow_off < wide_off * 0.5, "wide={wide_off}, narrow={narrow_off}");
    }
}
