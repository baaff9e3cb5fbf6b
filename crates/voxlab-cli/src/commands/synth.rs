//! Synth command implementation
//!
//! Synthesizes a vowel-like tone from formant parameters and writes it
//! to a WAV file. `--spectrum-json` additionally dumps the analytic
//! spectral envelope of the same parameters.

use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use std::process::ExitCode;

use voxlab_dsp::{formant, FormantParams};

use crate::input;

/// Run the synth command
///
/// # Arguments
/// * `params` - Formant synthesis parameters
/// * `duration` - Requested duration in seconds
/// * `sample_rate` - Output sample rate in Hz
/// * `output` - Output WAV path
/// * `spectrum_json` - Also dump the analytic spectral envelope
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(
    params: &FormantParams,
    duration: f64,
    sample_rate: u32,
    output: &str,
    spectrum_json: bool,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(params, duration, sample_rate, output, spectrum_json)
    } else {
        run_human(params, duration, sample_rate, output, spectrum_json)
    }
}

fn run_human(
    params: &FormantParams,
    duration: f64,
    sample_rate: u32,
    output: &str,
    spectrum_json: bool,
) -> Result<ExitCode> {
    println!("{}", "Formant synthesis:".cyan().bold());
    println!(
        "  {} {:.1} Hz   {} {:.1} / {:.1} / {:.1} Hz",
        "F0:".dimmed(),
        params.f0,
        "Formants:".dimmed(),
        params.f1,
        params.f2,
        params.f3
    );
    println!(
        "  {} {:.1} / {:.1} Hz   {} {:.3} s @ {} Hz",
        "Bandwidths:".dimmed(),
        params.b1,
        params.b2,
        "Duration:".dimmed(),
        duration,
        sample_rate
    );

    let buffer = formant::synthesize(params, duration, sample_rate)?;
    let result = input::write_wav(output, &buffer)?;

    println!("\n{} {}", "Wrote:".green().bold(), output);
    println!("  {} {}", "Samples:".dimmed(), result.num_samples);
    println!("  {} {}", "PCM hash:".dimmed(), &result.pcm_hash[..16]);

    if spectrum_json {
        let (frequencies, magnitudes) = formant::magnitude_curve(params, sample_rate, 512)?;
        let envelope = json!({
            "frequencies": frequencies,
            "magnitudes": magnitudes,
        });
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    }

    Ok(ExitCode::SUCCESS)
}

fn run_json(
    params: &FormantParams,
    duration: f64,
    sample_rate: u32,
    output: &str,
    spectrum_json: bool,
) -> Result<ExitCode> {
    let buffer = formant::synthesize(params, duration, sample_rate)?;
    let result = input::write_wav(output, &buffer)?;

    let mut envelope = json!({
        "params": params,
        "duration": duration,
        "sample_rate": sample_rate,
        "output": output,
        "num_samples": result.num_samples,
        "pcm_hash": result.pcm_hash,
    });
    if spectrum_json {
        let (frequencies, magnitudes) = formant::magnitude_curve(params, sample_rate, 512)?;
        envelope["spectrum"] = json!({
            "frequencies": frequencies,
            "magnitudes": magnitudes,
        });
    }

    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(ExitCode::SUCCESS)
}
