//! Spectral analysis.
//!
//! Two magnitude paths with identical output (up to floating-point
//! rounding):
//!
//! - [`dft_magnitude`] is the definitional O(N²) transform. Frame
//!   sizes stay small (≤ 4096) in this application, so the direct form
//!   is affordable and serves as the reference.
//! - [`fft_magnitude`] computes the same magnitudes with rustfft and
//!   backs the multi-frame spectrogram path. Only magnitudes are
//!   consumed downstream, which makes the substitution safe.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;
use serde::Serialize;

use crate::buffer::SampleBuffer;
use crate::error::{DspError, DspResult};
use crate::window::WindowType;

/// Frequency in Hz of spectrum bin `k` for an `n`-point transform.
pub fn bin_frequency(k: usize, n: usize, sample_rate: u32) -> f64 {
    k as f64 * sample_rate as f64 / n as f64
}

/// Display transform for magnitudes: `20 * log10(m + 1)`.
///
/// Presentation helper; the analysis contract is linear magnitude.
pub fn log_magnitude_db(magnitude: f64) -> f64 {
    20.0 * (magnitude + 1.0).log10()
}

fn check_frame(frame: &[f64]) -> DspResult<()> {
    if frame.is_empty() {
        return Err(DspError::EmptyBuffer);
    }
    if frame.len() % 2 != 0 {
        return Err(DspError::OddFrameLength { len: frame.len() });
    }
    Ok(())
}

/// Magnitude spectrum of one frame by explicit sinusoid correlation.
///
/// For each bin `k` in `[0, N/2)`:
/// `real = Σ frame[n]·cos(-2πkn/N)`, `imag = Σ frame[n]·sin(-2πkn/N)`,
/// `magnitude[k] = sqrt(real² + imag²)`.
///
/// # Errors
/// [`DspError::OddFrameLength`] for odd `N`, [`DspError::EmptyBuffer`]
/// for an empty frame.
pub fn dft_magnitude(frame: &[f64]) -> DspResult<Vec<f64>> {
    check_frame(frame)?;

    let n = frame.len();
    let mut magnitudes = Vec::with_capacity(n / 2);

    for k in 0..n / 2 {
        let mut real = 0.0;
        let mut imag = 0.0;
        for (i, &sample) in frame.iter().enumerate() {
            let angle = -2.0 * std::f64::consts::PI * k as f64 * i as f64 / n as f64;
            real += sample * angle.cos();
            imag += sample * angle.sin();
        }
        magnitudes.push((real * real + imag * imag).sqrt());
    }

    Ok(magnitudes)
}

/// Magnitude spectrum of one frame via rustfft.
///
/// Same contract and output as [`dft_magnitude`].
pub fn fft_magnitude(frame: &[f64]) -> DspResult<Vec<f64>> {
    check_frame(frame)?;

    let n = frame.len();
    let mut spectrum: Vec<Complex<f64>> = frame.iter().map(|&s| Complex::new(s, 0.0)).collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut spectrum);

    Ok(spectrum[..n / 2].iter().map(|c| c.norm()).collect())
}

/// A time-frequency magnitude grid with its axes.
#[derive(Debug, Clone, Serialize)]
pub struct Spectrogram {
    /// Magnitude frames, outer index = time step, inner = frequency bin.
    pub frames: Vec<Vec<f64>>,
    /// Center time of each frame in seconds.
    pub times: Vec<f64>,
    /// Frequency of each bin in Hz.
    pub frequencies: Vec<f64>,
    /// Transform size used.
    pub fft_size: usize,
    /// Window applied to each frame.
    pub window: WindowType,
}

/// Computes a windowed magnitude spectrogram.
///
/// Frames of `fft_size` samples advance by `fft_size / 2` (50%
/// overlap); only complete frames are analyzed.
///
/// # Errors
/// [`DspError::OddFrameLength`] for odd sizes,
/// [`DspError::FrameTooShort`] when the buffer holds less than one
/// frame.
pub fn spectrogram(
    buffer: &SampleBuffer,
    fft_size: usize,
    window: WindowType,
) -> DspResult<Spectrogram> {
    if fft_size == 0 || fft_size % 2 != 0 {
        return Err(DspError::OddFrameLength { len: fft_size });
    }
    if buffer.len() < fft_size {
        return Err(DspError::FrameTooShort {
            len: buffer.len(),
            required: fft_size,
        });
    }

    let hop = fft_size / 2;
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(fft_size);

    let mut frames = Vec::new();
    let mut times = Vec::new();

    for (step, frame) in buffer.frames(fft_size, hop).enumerate() {
        let shaped = window.apply(frame);
        let mut spectrum: Vec<Complex<f64>> =
            shaped.iter().map(|&s| Complex::new(s, 0.0)).collect();
        fft.process(&mut spectrum);

        frames.push(spectrum[..fft_size / 2].iter().map(|c| c.norm()).collect());
        let center = (step * hop + fft_size / 2) as f64 / buffer.sample_rate as f64;
        times.push(center);
    }

    let frequencies = (0..fft_size / 2)
        .map(|k| bin_frequency(k, fft_size, buffer.sample_rate))
        .collect();

    Ok(Spectrogram {
        frames,
        times,
        frequencies,
        fft_size,
        window,
    })
}

/// Power spectrum of the first `fft_size` samples of a buffer.
///
/// Matches the single-shot power spectrum of the analysis API: linear
/// magnitudes plus the frequency axis.
pub fn power_spectrum(
    buffer: &SampleBuffer,
    fft_size: usize,
) -> DspResult<(Vec<f64>, Vec<f64>)> {
    if buffer.len() < fft_size {
        return Err(DspError::FrameTooShort {
            len: buffer.len(),
            required: fft_size,
        });
    }
    let magnitudes = fft_magnitude(&buffer.samples[..fft_size])?;
    let freq_axis = (0..fft_size / 2)
        .map(|k| bin_frequency(k, fft_size, buffer.sample_rate))
        .collect();
    Ok((magnitudes, freq_axis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn sine(freq: f64, sample_rate: u32, len: usize) -> Vec<f64> {
        (0..len)
            .map(|i| (2.0 * PI * freq * i as f64 / sample_rate as f64).sin())
            .collect()
    }

    fn peak_bin(magnitudes: &[f64]) -> usize {
        magnitudes
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap()
    }

    #[test]
    fn test_dft_output_length() {
        let frame = sine(440.0, 44100, 1024);
        let mags = dft_magnitude(&frame).unwrap();
        assert_eq!(mags.len(), 512);
        assert!(mags.iter().all(|&m| m >= 0.0));
    }

    #[test]
    fn test_dft_rejects_odd_length() {
        let frame = vec![0.0; 1023];
        assert!(matches!(
            dft_magnitude(&frame),
            Err(DspError::OddFrameLength { len: 1023 })
        ));
    }

    #[test]
    fn test_dft_rejects_empty() {
        assert!(matches!(dft_magnitude(&[]), Err(DspError::EmptyBuffer)));
    }

    #[test]
    fn test_dft_peak_at_sine_frequency() {
        let sample_rate = 16000;
        let n = 1024;
        let freq = 1000.0;
        let frame = sine(freq, sample_rate, n);
        let mags = dft_magnitude(&frame).unwrap();

        let expected = (freq * n as f64 / sample_rate as f64).round() as usize;
        assert_eq!(peak_bin(&mags), expected);
    }

    #[test]
    fn test_fft_matches_dft() {
        let frame = sine(700.0, 16000, 512);
        let dft = dft_magnitude(&frame).unwrap();
        let fft = fft_magnitude(&frame).unwrap();

        assert_eq!(dft.len(), fft.len());
        for (a, b) in dft.iter().zip(fft.iter()) {
            assert!((a - b).abs() < 1e-6, "dft {} vs fft {}", a, b);
        }
    }

    #[test]
    fn test_bin_frequency() {
        assert_eq!(bin_frequency(0, 1024, 16000), 0.0);
        assert!((bin_frequency(512, 1024, 16000) - 8000.0).abs() < 1e-9);
    }

    #[test]
    fn test_log_magnitude_of_zero_is_zero() {
        assert_eq!(log_magnitude_db(0.0), 0.0);
    }

    #[test]
    fn test_spectrogram_shape() {
        let sample_rate = 16000;
        let buffer = SampleBuffer::new(sine(440.0, sample_rate, 4096), sample_rate).unwrap();
        let spec = spectrogram(&buffer, 512, WindowType::Hann).unwrap();

        // Frames at hop 256 while pos + 512 <= 4096
        assert_eq!(spec.frames.len(), (4096 - 512) / 256 + 1);
        assert_eq!(spec.frequencies.len(), 256);
        assert_eq!(spec.times.len(), spec.frames.len());
        for frame in &spec.frames {
            assert_eq!(frame.len(), 256);
        }
    }

    #[test]
    fn test_spectrogram_too_short() {
        let buffer = SampleBuffer::new(vec![0.0; 100], 16000).unwrap();
        assert!(matches!(
            spectrogram(&buffer, 512, WindowType::Hann),
            Err(DspError::FrameTooShort { .. })
        ));
    }

    #[test]
    fn test_power_spectrum_peak() {
        let sample_rate = 16000;
        let freq = 2000.0;
        let buffer = SampleBuffer::new(sine(freq, sample_rate, 2048), sample_rate).unwrap();
        let (mags, axis) = power_spectrum(&buffer, 1024).unwrap();

        let peak = peak_bin(&mags);
        assert!((axis[peak] - freq).abs() < bin_frequency(1, 1024, sample_rate));
    }
}
