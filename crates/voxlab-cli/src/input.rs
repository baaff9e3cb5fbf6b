//! WAV input decoding for the CLI.
//!
//! The core crate only writes WAV; reading arbitrary files (16/24/32
//! bit integer or 32-bit float PCM, any channel count) goes through
//! `hound` here. Multi-channel input keeps channel 0.

use anyhow::{bail, Context, Result};
use std::path::Path;

use voxlab_dsp::SampleBuffer;

/// Reads a WAV file into a mono [`SampleBuffer`].
pub fn read_wav(path: &str) -> Result<SampleBuffer> {
    let reader = hound::WavReader::open(path)
        .with_context(|| format!("failed to open WAV file: {path}"))?;
    let spec = reader.spec();
    let channels = spec.channels as usize;
    if channels == 0 {
        bail!("WAV file reports zero channels: {path}");
    }

    let samples = match spec.sample_format {
        hound::SampleFormat::Float => decode_channel(
            reader.into_samples::<f32>().map(|s| s.map(f64::from)),
            channels,
        ),
        hound::SampleFormat::Int => {
            if spec.bits_per_sample == 0 || spec.bits_per_sample > 32 {
                bail!(
                    "unsupported bit depth {} in {path}",
                    spec.bits_per_sample
                );
            }
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f64;
            decode_channel(
                reader
                    .into_samples::<i32>()
                    .map(|s| s.map(|v| v as f64 / scale)),
                channels,
            )
        }
    }
    .with_context(|| format!("failed to decode samples from {path}"))?;

    SampleBuffer::new(samples, spec.sample_rate)
        .with_context(|| format!("decoded audio is unusable: {path}"))
}

/// Keeps channel 0 of an interleaved sample stream.
fn decode_channel<I>(samples: I, channels: usize) -> hound::Result<Vec<f64>>
where
    I: Iterator<Item = hound::Result<f64>>,
{
    samples
        .enumerate()
        .filter(|(i, _)| i % channels == 0)
        .map(|(_, s)| s)
        .collect()
}

/// Writes a synthesized or converted buffer to a WAV file and returns
/// the encoding result (PCM hash included).
pub fn write_wav(path: &str, buffer: &SampleBuffer) -> Result<voxlab_dsp::WavResult> {
    let result = voxlab_dsp::wav::encode(buffer);
    std::fs::write(Path::new(path), &result.wav_data)
        .with_context(|| format!("failed to write WAV file: {path}"))?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("voxlab-cli-test-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_round_trip_through_own_writer() {
        let samples: Vec<f64> = (0..800)
            .map(|i| (2.0 * std::f64::consts::PI * 200.0 * i as f64 / 8000.0).sin() * 0.5)
            .collect();
        let buffer = SampleBuffer::new(samples, 8000).unwrap();

        let path = temp_path("roundtrip.wav");
        let path_str = path.to_str().unwrap();
        write_wav(path_str, &buffer).unwrap();
        let decoded = read_wav(path_str).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(decoded.sample_rate, 8000);
        assert_eq!(decoded.len(), buffer.len());
        for (a, b) in buffer.samples.iter().zip(&decoded.samples) {
            assert!((a - b).abs() < 1.0 / 32767.0);
        }
    }

    #[test]
    fn test_stereo_keeps_first_channel() {
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let path = temp_path("stereo.wav");
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for i in 0..100i32 {
            writer.write_sample((i * 100) as i16).unwrap(); // left
            writer.write_sample(0i16).unwrap(); // right
        }
        writer.finalize().unwrap();

        let decoded = read_wav(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(decoded.len(), 100);
        assert!((decoded.samples[1] - 100.0 / 32768.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(read_wav("/nonexistent/missing.wav").is_err());
    }
}
