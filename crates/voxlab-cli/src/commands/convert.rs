//! Convert command implementation
//!
//! Runs the demo-grade CycleGAN/StarGAN stand-in transforms on a WAV
//! file. These approximate nothing about the real models; the output
//! is always labeled as demo quality.

use anyhow::{bail, Result};
use colored::Colorize;
use serde_json::json;
use std::process::ExitCode;

use voxlab_remote::{ConversionMethod, ConversionRequest, Engine, NoRemote, Source};

use crate::input;

/// Run the convert command
///
/// # Arguments
/// * `input_path` - Path to the input WAV file
/// * `method_name` - Conversion method (cyclegan, stargan)
/// * `seed` - Seed for the demo noise
/// * `output` - Output WAV path
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(
    input_path: &str,
    method_name: &str,
    seed: u32,
    output: &str,
    json_output: bool,
) -> Result<ExitCode> {
    let method = match method_name {
        "cyclegan" => ConversionMethod::CycleGan,
        "stargan" => ConversionMethod::StarGan,
        "autovc" => ConversionMethod::AutoVc,
        "wavenet" => ConversionMethod::WaveNet,
        _ => bail!("unknown conversion method: {method_name}"),
    };

    let audio = input::read_wav(input_path)?;
    let engine: Engine<NoRemote> = Engine::offline().with_demo_seed(seed);
    let outcome = engine.convert(method, &audio, &ConversionRequest::default())?;
    let result = input::write_wav(output, &outcome.value)?;

    if json_output {
        let envelope = json!({
            "method": method.name(),
            "source": outcome.source,
            "seed": seed,
            "output": output,
            "num_samples": result.num_samples,
            "pcm_hash": result.pcm_hash,
        });
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} {} ({})",
        "Converting:".cyan().bold(),
        input_path,
        method.name()
    );
    println!("  {} {}", "Seed:".dimmed(), seed);
    println!("\n{} {}", "Wrote:".green().bold(), output);
    println!("  {} {}", "Samples:".dimmed(), result.num_samples);
    println!("  {} {}", "PCM hash:".dimmed(), &result.pcm_hash[..16]);

    if outcome.source == Source::Demo {
        println!(
            "\n{} {}",
            "demo mode:".yellow().bold(),
            "this transform only gestures at the method; it has no research validity"
        );
    }

    Ok(ExitCode::SUCCESS)
}
