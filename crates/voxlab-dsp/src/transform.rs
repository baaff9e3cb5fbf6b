//! Demo-mode voice transforms.
//!
//! These are placeholders that stand in for the remote CycleGAN-VC and
//! StarGAN-VC models when the inference service is unreachable. They
//! carry no research validity: a crude floor-index resample, a gain
//! change, and a little noise. Callers must surface them as
//! demo-grade output; the fallback engine labels them explicitly.
//!
//! All noise is drawn from a caller-seeded PCG32 so output is
//! reproducible.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::buffer::SampleBuffer;

/// Pitch-shift ratio of the CycleGAN stub.
const PITCH_SHIFT_RATIO: f64 = 1.05;

/// Gain applied by both stubs.
const DEMO_GAIN: f64 = 0.85;

/// Peak amplitude of the additive uniform noise.
const NOISE_SPAN: f64 = 0.05;

/// Decay rate of the CycleGAN stub's envelope (1/s).
const DEMO_DECAY: f64 = 0.1;

/// CycleGAN-style demo transform.
///
/// Resamples by floor-index lookup at a fixed 1.05x ratio (a crude
/// pitch-up), scales by 0.85, adds uniform noise in
/// `[-0.025, 0.025)`, and applies an `exp(-0.1 t)` decay. Indices
/// past the input's end become silence.
pub fn cyclegan_demo(buffer: &SampleBuffer, rng: &mut Pcg32) -> SampleBuffer {
    let data = &buffer.samples;
    let dt = 1.0 / buffer.sample_rate as f64;

    let samples = (0..data.len())
        .map(|i| {
            let src = (i as f64 * PITCH_SHIFT_RATIO).floor() as usize;
            let resampled = if src < data.len() { data[src] } else { 0.0 };
            let noise = (rng.gen::<f64>() - 0.5) * NOISE_SPAN;
            let t = i as f64 * dt;
            (resampled * DEMO_GAIN + noise) * (-DEMO_DECAY * t).exp()
        })
        .collect();

    SampleBuffer {
        samples,
        sample_rate: buffer.sample_rate,
    }
}

/// StarGAN-style demo transform.
///
/// Scales by 0.85 and adds uniform noise in `[-0.025, 0.025)`. No
/// pitch shift, no envelope.
pub fn stargan_demo(buffer: &SampleBuffer, rng: &mut Pcg32) -> SampleBuffer {
    let samples = buffer
        .samples
        .iter()
        .map(|&s| s * DEMO_GAIN + (rng.gen::<f64>() - 0.5) * NOISE_SPAN)
        .collect();

    SampleBuffer {
        samples,
        sample_rate: buffer.sample_rate,
    }
}
