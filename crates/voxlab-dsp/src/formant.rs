//! Formant synthesis and its analytic magnitude model.
//!
//! The synthesizer is a deliberate simplification: instead of an IIR
//! resonator bank it shapes a 10-harmonic additive source with three
//! multiplicative amplitude-modulation factors, one per formant. The
//! companion [`magnitude_at`] model is an independent closed-form
//! picture of the spectral envelope used for display; it is not
//! derived from the synthesized waveform.
//!
//! The bandwidth parameters `b1`/`b2` only influence the magnitude
//! model, never the time-domain output, and `b2` covers both the
//! second and third formants. Both quirks are part of the contract.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::buffer::SampleBuffer;
use crate::error::{DspError, DspResult};

/// Number of harmonics in the additive source.
pub const NUM_HARMONICS: usize = 10;

/// Amplitude-modulation depth per formant (F1, F2, F3).
const AM_DEPTHS: [f64; 3] = [0.3, 0.2, 0.1];

/// Fixed exponential decay rate of the output envelope (1/s).
const ENVELOPE_DECAY: f64 = 2.0;

/// Fixed output gain.
const OUTPUT_GAIN: f64 = 0.3;

/// Half-width of the harmonic spike window in the magnitude model, Hz.
const HARMONIC_WINDOW_HZ: f64 = 50.0;

/// Decay constant of harmonic spikes in the magnitude model, Hz.
const HARMONIC_DECAY_HZ: f64 = 10.0;

/// Source and vocal-tract parameters for one synthesis call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormantParams {
    /// Fundamental (source pitch) in Hz.
    pub f0: f64,
    /// First formant center frequency in Hz.
    pub f1: f64,
    /// Second formant center frequency in Hz.
    pub f2: f64,
    /// Third formant center frequency in Hz.
    pub f3: f64,
    /// Bandwidth of the first formant region in Hz.
    pub b1: f64,
    /// Bandwidth shared by the second and third formant regions in Hz.
    pub b2: f64,
}

impl FormantParams {
    /// Checks that every field is a positive, finite frequency.
    pub fn validate(&self) -> DspResult<()> {
        let fields = [
            ("f0", self.f0),
            ("f1", self.f1),
            ("f2", self.f2),
            ("f3", self.f3),
            ("b1", self.b1),
            ("b2", self.b2),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(DspError::invalid_param(
                    name,
                    format!("must be a positive frequency, got {value}"),
                ));
            }
        }
        Ok(())
    }
}

impl Default for FormantParams {
    /// Defaults of the synthesis panel: a neutral male-ish voice.
    fn default() -> Self {
        Self {
            f0: 150.0,
            f1: 700.0,
            f2: 1200.0,
            f3: 2500.0,
            b1: 100.0,
            b2: 150.0,
        }
    }
}

/// Synthesizes a formant tone.
///
/// Per sample at time `t`: a 10-harmonic sum with `1/k` amplitudes is
/// shaped by `(1 + 0.3 sin 2πf1t)(1 + 0.2 sin 2πf2t)(1 + 0.1 sin 2πf3t)`,
/// then scaled by the fixed `exp(-2t)` envelope and output gain 0.3.
/// Pure and deterministic.
///
/// # Errors
/// Parameter validation failures, [`DspError::InvalidDuration`] for a
/// non-positive duration, [`DspError::InvalidSampleRate`] for a zero
/// rate.
pub fn synthesize(
    params: &FormantParams,
    duration_seconds: f64,
    sample_rate: u32,
) -> DspResult<SampleBuffer> {
    params.validate()?;
    if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
        return Err(DspError::InvalidDuration {
            duration: duration_seconds,
        });
    }
    if sample_rate == 0 {
        return Err(DspError::InvalidSampleRate { rate: sample_rate });
    }

    let num_samples = (duration_seconds * sample_rate as f64).floor() as usize;
    if num_samples == 0 {
        return Err(DspError::InvalidDuration {
            duration: duration_seconds,
        });
    }

    let dt = 1.0 / sample_rate as f64;
    let two_pi = 2.0 * PI;
    let mut samples = Vec::with_capacity(num_samples);

    for i in 0..num_samples {
        let t = i as f64 * dt;

        let mut h = 0.0;
        for k in 1..=NUM_HARMONICS {
            h += (two_pi * params.f0 * k as f64 * t).sin() / k as f64;
        }

        h *= 1.0 + AM_DEPTHS[0] * (two_pi * params.f1 * t).sin();
        h *= 1.0 + AM_DEPTHS[1] * (two_pi * params.f2 * t).sin();
        h *= 1.0 + AM_DEPTHS[2] * (two_pi * params.f3 * t).sin();

        samples.push(h * (-ENVELOPE_DECAY * t).exp() * OUTPUT_GAIN);
    }

    SampleBuffer::new(samples, sample_rate)
}

/// Analytic magnitude of the formant model at one frequency.
///
/// Sums a Gaussian resonance bump per formant
/// (`0.5 · exp(-((freq - fi) / bw)²)`, with `b1` for F1 and `b2` for
/// F2 and F3) and a spike per harmonic of `f0` within 50 Hz
/// (`(0.3/h) · exp(-|freq - h·f0| / 10)`).
pub fn magnitude_at(freq: f64, params: &FormantParams) -> f64 {
    let mut magnitude = 0.0;

    for (formant, bandwidth) in [
        (params.f1, params.b1),
        (params.f2, params.b2),
        (params.f3, params.b2),
    ] {
        let diff = (freq - formant) / bandwidth;
        magnitude += 0.5 * (-diff * diff).exp();
    }

    for h in 1..=NUM_HARMONICS {
        let diff = (freq - params.f0 * h as f64).abs();
        if diff < HARMONIC_WINDOW_HZ {
            magnitude += (0.3 / h as f64) * (-diff / HARMONIC_DECAY_HZ).exp();
        }
    }

    magnitude
}

/// Samples the analytic magnitude model on a DFT-style bin grid.
///
/// Returns `(frequencies, magnitudes)` for bins `[0, fft_size / 2)`.
pub fn magnitude_curve(
    params: &FormantParams,
    sample_rate: u32,
    fft_size: usize,
) -> DspResult<(Vec<f64>, Vec<f64>)> {
    params.validate()?;
    if fft_size == 0 || fft_size % 2 != 0 {
        return Err(DspError::OddFrameLength { len: fft_size });
    }

    let mut frequencies = Vec::with_capacity(fft_size / 2);
    let mut magnitudes = Vec::with_capacity(fft_size / 2);
    for k in 0..fft_size / 2 {
        let freq = k as f64 * sample_rate as f64 / fft_size as f64;
        frequencies.push(freq);
        magnitudes.push(magnitude_at(freq, params));
    }
    Ok((frequencies, magnitudes))
}
