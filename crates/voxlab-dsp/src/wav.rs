//! Deterministic WAV encoder.
//!
//! Writes canonical 16-bit PCM RIFF/WAVE files with no timestamps or
//! variable metadata, so identical input always produces identical
//! bytes. The BLAKE3 hash of the PCM payload is carried alongside the
//! encoded file for determinism checks.
//!
//! There is no decoder here: decoding arbitrary audio containers is
//! the host platform's job, and the core only ever receives already
//! decoded [`SampleBuffer`]s.

use std::io::{self, Write};

use crate::buffer::SampleBuffer;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy)]
pub struct WavFormat {
    /// Number of channels. The core always emits mono.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 for this implementation).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono WAV format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Calculates bytes per sample (per channel).
    fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Calculates block align (bytes per sample frame).
    fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Calculates byte rate (bytes per second).
    fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(44 + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).expect("writing to Vec should not fail");
    buffer
}

/// Converts f64 samples to 16-bit PCM bytes.
///
/// Samples are clamped to `[-1.0, 1.0]` and quantized with an
/// asymmetric scale: negative samples map through 32768, positive
/// through 32767. This keeps the full negative range without
/// wrapping at `+1.0`.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        let clipped = sample.clamp(-1.0, 1.0);
        let pcm_value = if clipped < 0.0 {
            (clipped * 32768.0).round() as i16
        } else {
            (clipped * 32767.0).round() as i16
        };
        pcm.extend_from_slice(&pcm_value.to_le_bytes());
    }

    pcm
}

/// Decodes 16-bit little-endian PCM bytes back to f64 samples.
///
/// Inverse of [`samples_to_pcm16`] up to quantization error; mainly
/// useful for round-trip verification.
pub fn pcm16_to_samples(pcm: &[u8]) -> Vec<f64> {
    pcm.chunks_exact(2)
        .map(|pair| {
            let value = i16::from_le_bytes([pair[0], pair[1]]);
            if value < 0 {
                value as f64 / 32768.0
            } else {
                value as f64 / 32767.0
            }
        })
        .collect()
}

/// Result of WAV encoding.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}

/// Encodes a mono buffer into a canonical PCM16 WAV file.
///
/// Pure function of its input; repeated calls produce byte-identical
/// output.
pub fn encode(buffer: &SampleBuffer) -> WavResult {
    let pcm = samples_to_pcm16(&buffer.samples);
    let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
    let format = WavFormat::mono(buffer.sample_rate);
    let wav_data = write_wav_to_vec(&format, &pcm);

    WavResult {
        wav_data,
        pcm_hash,
        sample_rate: buffer.sample_rate,
        num_samples: buffer.samples.len(),
    }
}

/// Extracts the PCM payload from a WAV file buffer.
///
/// Walks the RIFF chunks to locate `data`; used to compare encodings
/// by audio content alone.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 44 {
        return None;
    }

    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        if chunk_id == b"data" {
            let data_start = pos + 8;
            let data_end = data_start + chunk_size;
            if data_end <= wav_data.len() {
                return Some(&wav_data[data_start..data_end]);
            }
        }

        pos += 8 + chunk_size;
        // Chunks are word-aligned
        if chunk_size % 2 != 0 {
            pos += 1;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(samples: Vec<f64>, rate: u32) -> SampleBuffer {
        SampleBuffer::new(samples, rate).unwrap()
    }

    #[test]
    fn test_wav_format() {
        let mono = WavFormat::mono(44100);
        assert_eq!(mono.channels, 1);
        assert_eq!(mono.byte_rate(), 88200);
        assert_eq!(mono.block_align(), 2);
    }

    #[test]
    fn test_asymmetric_quantization() {
        let pcm = samples_to_pcm16(&[0.0, 1.0, -1.0, 0.5]);

        assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 0);
        // +1.0 scales through 32767
        assert_eq!(i16::from_le_bytes([pcm[2], pcm[3]]), 32767);
        // -1.0 scales through 32768, reaching the full negative range
        assert_eq!(i16::from_le_bytes([pcm[4], pcm[5]]), -32768);
        assert_eq!(i16::from_le_bytes([pcm[6], pcm[7]]), 16384);
    }

    #[test]
    fn test_clipping() {
        let pcm = samples_to_pcm16(&[2.0, -2.0]);

        assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 32767);
        assert_eq!(i16::from_le_bytes([pcm[2], pcm[3]]), -32768);
    }

    #[test]
    fn test_header_layout() {
        let result = encode(&buffer(vec![0.0; 100], 44100));
        let wav = &result.wav_data;

        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(u32::from_le_bytes([wav[4], wav[5], wav[6], wav[7]]), 236); // 36 + 200
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(u32::from_le_bytes([wav[16], wav[17], wav[18], wav[19]]), 16);
        assert_eq!(u16::from_le_bytes([wav[20], wav[21]]), 1); // PCM
        assert_eq!(u16::from_le_bytes([wav[22], wav[23]]), 1); // mono
        assert_eq!(
            u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]),
            44100
        );
        assert_eq!(
            u32::from_le_bytes([wav[28], wav[29], wav[30], wav[31]]),
            88200
        );
        assert_eq!(u16::from_le_bytes([wav[32], wav[33]]), 2); // block align
        assert_eq!(u16::from_le_bytes([wav[34], wav[35]]), 16); // bits
        assert_eq!(&wav[36..40], b"data");
        assert_eq!(u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]), 200);
        assert_eq!(wav.len(), 244);
    }

    #[test]
    fn test_round_trip_within_quantization_error() {
        let samples = vec![0.25, -0.75, 0.9999, -0.9999, 0.0, 0.333];
        let result = encode(&buffer(samples.clone(), 16000));

        let pcm = extract_pcm_data(&result.wav_data).expect("should extract PCM");
        assert_eq!(pcm.len(), samples.len() * 2);

        let decoded = pcm16_to_samples(pcm);
        for (orig, dec) in samples.iter().zip(decoded.iter()) {
            assert!(
                (orig - dec).abs() <= 1.0 / 32767.0,
                "sample {} decoded as {}",
                orig,
                dec
            );
        }
    }

    #[test]
    fn test_encode_determinism() {
        let buf = buffer(vec![0.5, -0.5, 0.3, -0.3], 44100);
        let a = encode(&buf);
        let b = encode(&buf);

        assert_eq!(a.pcm_hash, b.pcm_hash);
        assert_eq!(a.wav_data, b.wav_data);
        assert_eq!(a.pcm_hash.len(), 64); // BLAKE3 produces 64 hex chars
    }

    #[test]
    fn test_sample_rate_preserved() {
        let result = encode(&buffer(vec![0.1; 10], 22050));
        assert_eq!(result.sample_rate, 22050);
        assert_eq!(result.num_samples, 10);
        let rate = u32::from_le_bytes([
            result.wav_data[24],
            result.wav_data[25],
            result.wav_data[26],
            result.wav_data[27],
        ]);
        assert_eq!(rate, 22050);
    }

    #[test]
    fn test_extract_rejects_garbage() {
        assert!(extract_pcm_data(b"not a wav").is_none());
        assert!(extract_pcm_data(&[0u8; 44]).is_none());
    }
}
