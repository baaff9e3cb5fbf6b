//! Mono sample buffers.
//!
//! Every core operation consumes and produces [`SampleBuffer`] values:
//! owned, mono, floating-point audio with an associated sample rate.
//! Transforms return a fresh buffer rather than mutating in place.

use crate::error::{DspError, DspResult};

/// An owned mono audio buffer.
///
/// Samples are nominally in `[-1.0, 1.0]`; the WAV encoder clamps on
/// output, so intermediate stages may overshoot.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    /// Audio samples, one per frame (mono).
    pub samples: Vec<f64>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl SampleBuffer {
    /// Creates a buffer after checking its invariants.
    ///
    /// # Errors
    /// [`DspError::EmptyBuffer`] if `samples` is empty,
    /// [`DspError::InvalidSampleRate`] if `sample_rate` is zero.
    pub fn new(samples: Vec<f64>, sample_rate: u32) -> DspResult<Self> {
        if samples.is_empty() {
            return Err(DspError::EmptyBuffer);
        }
        if sample_rate == 0 {
            return Err(DspError::InvalidSampleRate { rate: sample_rate });
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if the buffer holds no samples.
    ///
    /// A constructed buffer is never empty; this exists for slices
    /// taken out of one.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Iterates fixed-size frames with the given hop.
    ///
    /// Frames start at 0 and advance by `hop_size` while a whole frame
    /// still fits, matching the analysis framing convention.
    pub fn frames(&self, frame_size: usize, hop_size: usize) -> Frames<'_> {
        Frames {
            samples: &self.samples,
            frame_size,
            hop_size,
            pos: 0,
        }
    }
}

/// Iterator over fixed-size analysis frames of a buffer.
#[derive(Debug)]
pub struct Frames<'a> {
    samples: &'a [f64],
    frame_size: usize,
    hop_size: usize,
    pos: usize,
}

impl<'a> Iterator for Frames<'a> {
    type Item = &'a [f64];

    fn next(&mut self) -> Option<&'a [f64]> {
        if self.frame_size == 0 || self.hop_size == 0 {
            return None;
        }
        if self.pos + self.frame_size > self.samples.len() {
            return None;
        }
        let frame = &self.samples[self.pos..self.pos + self.frame_size];
        self.pos += self.hop_size;
        Some(frame)
    }
}
