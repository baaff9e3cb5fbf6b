//! Spectrum command implementation
//!
//! Single-frame DFT magnitudes by default, or a full windowed
//! spectrogram with `--spectrogram`. The spectrogram JSON matches the
//! shape of the remote `/spectrum/analyze` response.

use anyhow::{bail, Result};
use colored::Colorize;
use serde_json::json;
use std::process::ExitCode;

use voxlab_dsp::{spectrum, WindowType};
use voxlab_remote::{Engine, NoRemote};

use crate::input;

/// Run the spectrum command
///
/// # Arguments
/// * `input_path` - Path to the input WAV file
/// * `fft_size` - Transform size in samples (must be even)
/// * `window_name` - Analysis window name (rect, hann, hamming)
/// * `full_spectrogram` - Compute the windowed spectrogram instead of
///   a single leading frame
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(
    input_path: &str,
    fft_size: usize,
    window_name: &str,
    full_spectrogram: bool,
    json_output: bool,
) -> Result<ExitCode> {
    let window = match WindowType::from_name(window_name) {
        Some(w) => w,
        None => bail!("unknown window type: {window_name}"),
    };

    let audio = input::read_wav(input_path)?;

    if full_spectrogram {
        run_spectrogram(input_path, &audio, fft_size, window, json_output)
    } else {
        run_single_frame(input_path, &audio, fft_size, json_output)
    }
}

fn run_single_frame(
    input_path: &str,
    audio: &voxlab_dsp::SampleBuffer,
    fft_size: usize,
    json_output: bool,
) -> Result<ExitCode> {
    if audio.len() < fft_size {
        bail!(
            "input too short: {} samples, need at least {fft_size}",
            audio.len()
        );
    }

    let magnitudes = spectrum::dft_magnitude(&audio.samples[..fft_size])?;
    let frequencies: Vec<f64> = (0..magnitudes.len())
        .map(|k| spectrum::bin_frequency(k, fft_size, audio.sample_rate))
        .collect();

    if json_output {
        let envelope = json!({
            "fft_size": fft_size,
            "sample_rate": audio.sample_rate,
            "frequencies": frequencies,
            "magnitudes": magnitudes,
        });
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Spectrum of:".cyan().bold(), input_path);
    println!(
        "  {} {} bins over {:.0} Hz",
        "Resolution:".dimmed(),
        magnitudes.len(),
        audio.sample_rate as f64 / 2.0
    );

    let peak = magnitudes
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1));
    if let Some((bin, magnitude)) = peak {
        println!(
            "  {} {:.1} Hz (bin {}, magnitude {:.2})",
            "Peak:".dimmed(),
            frequencies[bin],
            bin,
            magnitude
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn run_spectrogram(
    input_path: &str,
    audio: &voxlab_dsp::SampleBuffer,
    fft_size: usize,
    window: WindowType,
    json_output: bool,
) -> Result<ExitCode> {
    // Same orchestration the remote path uses; offline it labels the
    // result as a local fallback and matches the service's shape.
    let engine: Engine<NoRemote> = Engine::offline();
    let outcome = engine.analyze_spectrum(audio, fft_size, window)?;
    let resp = outcome.value;

    if json_output {
        let envelope = json!({
            "source": outcome.source,
            "fft_size": fft_size,
            "window": window.name(),
            "spectrogram": resp.spectrogram,
            "times": resp.times,
            "frequencies": resp.frequencies,
            "power_spectrum": resp.power_spectrum,
            "freq_axis": resp.freq_axis,
        });
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Spectrogram of:".cyan().bold(), input_path);
    println!(
        "  {} {} frames x {} bins ({} window, hop {})",
        "Size:".dimmed(),
        resp.times.len(),
        resp.frequencies.len(),
        window.name(),
        fft_size / 2
    );
    if let (Some(first), Some(last)) = (resp.times.first(), resp.times.last()) {
        println!(
            "  {} {:.3} s .. {:.3} s",
            "Time span:".dimmed(),
            first,
            last
        );
    }

    Ok(ExitCode::SUCCESS)
}
