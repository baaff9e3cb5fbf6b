//! Pitch command implementation
//!
//! Estimates the frame-by-frame F0 contour of a WAV file and reports
//! voiced-frame statistics. The JSON output matches the shape of the
//! remote `/f0/analyze` response.

use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use std::process::ExitCode;

use voxlab_dsp::contour;

use crate::input;

/// Run the pitch command
///
/// # Arguments
/// * `input_path` - Path to the input WAV file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input_path: &str, json_output: bool) -> Result<ExitCode> {
    let audio = input::read_wav(input_path)?;
    let contour = contour::build_contour(&audio);
    let stats = contour.stats();

    if json_output {
        let envelope = match &stats {
            Some(s) => json!({
                "f0_values": contour.values,
                "mean": s.mean,
                "min": s.min,
                "max": s.max,
                "std": s.std,
            }),
            None => json!({
                "f0_values": contour.values,
                "mean": null,
                "min": null,
                "max": null,
                "std": null,
            }),
        };
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Analyzing:".cyan().bold(), input_path);
    println!(
        "  {} {:.3} s @ {} Hz",
        "Duration:".dimmed(),
        audio.duration_seconds(),
        audio.sample_rate
    );
    println!(
        "  {} {} ({} voiced, {:.0}%)",
        "Frames:".dimmed(),
        contour.len(),
        contour.values.iter().filter(|&&v| v > 0.0).count(),
        contour.voiced_ratio() * 100.0
    );

    match stats {
        Some(s) => {
            println!("\n{}", "Voiced F0 statistics:".cyan().bold());
            println!("  {} {:.1} Hz", "Mean:".dimmed(), s.mean);
            println!(
                "  {} {:.1} Hz   {} {:.1} Hz",
                "Min:".dimmed(),
                s.min,
                "Max:".dimmed(),
                s.max
            );
            println!("  {} {:.1} Hz", "Std:".dimmed(), s.std);
        }
        None => {
            println!("\n{}", "No voiced frames detected.".yellow());
        }
    }

    Ok(ExitCode::SUCCESS)
}
