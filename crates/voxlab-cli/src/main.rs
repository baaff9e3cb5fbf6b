//! Voxlab CLI - voice analysis, synthesis, and demo conversion
//!
//! This binary exposes the local DSP core: formant synthesis, F0
//! contour estimation, spectral analysis, and the demo-grade voice
//! conversion stand-ins. Heavy model inference stays with the remote
//! service and is not reachable from here.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use voxlab_dsp::FormantParams;

mod commands;
mod input;

/// Voxlab - voice conversion research toolkit
#[derive(Parser)]
#[command(name = "voxlab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a vowel-like tone from formant parameters
    Synth {
        /// Fundamental frequency in Hz
        #[arg(long, default_value = "150.0")]
        f0: f64,

        /// First formant in Hz
        #[arg(long, default_value = "700.0")]
        f1: f64,

        /// Second formant in Hz
        #[arg(long, default_value = "1200.0")]
        f2: f64,

        /// Third formant in Hz
        #[arg(long, default_value = "2500.0")]
        f3: f64,

        /// First formant bandwidth in Hz
        #[arg(long, default_value = "100.0")]
        b1: f64,

        /// Second/third formant bandwidth in Hz
        #[arg(long, default_value = "150.0")]
        b2: f64,

        /// Duration in seconds
        #[arg(short, long, default_value = "1.0")]
        duration: f64,

        /// Output sample rate in Hz
        #[arg(long, default_value = "16000")]
        sample_rate: u32,

        /// Output WAV path
        #[arg(short, long, default_value = "synth.wav")]
        output: String,

        /// Also dump the analytic spectral envelope as JSON
        #[arg(long)]
        spectrum_json: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Estimate the F0 contour and voiced statistics of a WAV file
    Pitch {
        /// Path to the input WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Analyze the spectrum of a WAV file
    Spectrum {
        /// Path to the input WAV file
        #[arg(short, long)]
        input: String,

        /// Transform size in samples (must be even)
        #[arg(long, default_value = "512")]
        fft_size: usize,

        /// Analysis window (rect, hann, hamming)
        #[arg(long, default_value = "hann", value_parser = ["rect", "hann", "hamming"])]
        window: String,

        /// Full windowed spectrogram instead of a single leading frame
        #[arg(long)]
        spectrogram: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Convert a recording with a demo-grade voice conversion method
    Convert {
        /// Path to the input WAV file
        #[arg(short, long)]
        input: String,

        /// Conversion method
        #[arg(short, long, value_parser = ["cyclegan", "stargan", "autovc", "wavenet"])]
        method: String,

        /// Seed for the demo noise
        #[arg(long, default_value = "0")]
        seed: u32,

        /// Output WAV path
        #[arg(short, long, default_value = "converted.wav")]
        output: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Synth {
            f0,
            f1,
            f2,
            f3,
            b1,
            b2,
            duration,
            sample_rate,
            output,
            spectrum_json,
            json,
        } => {
            let params = FormantParams {
                f0,
                f1,
                f2,
                f3,
                b1,
                b2,
            };
            commands::synth::run(&params, duration, sample_rate, &output, spectrum_json, json)
        }
        Commands::Pitch { input, json } => commands::pitch::run(&input, json),
        Commands::Spectrum {
            input,
            fft_size,
            window,
            spectrogram,
            json,
        } => commands::spectrum::run(&input, fft_size, &window, spectrogram, json),
        Commands::Convert {
            input,
            method,
            seed,
            output,
            json,
        } => commands::convert::run(&input, &method, seed, &output, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
