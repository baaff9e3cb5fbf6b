//! F0 contour extraction and statistics.
//!
//! Slides fixed 25 ms frames with a 10 ms hop across a buffer, runs
//! the autocorrelation estimator on each, and summarizes the voiced
//! frames.

use serde::Serialize;

use crate::buffer::SampleBuffer;
use crate::pitch::{self, UNVOICED};

/// Analysis frame length in seconds (25 ms).
pub const FRAME_SECONDS: f64 = 0.025;

/// Hop between frames in seconds (10 ms).
pub const HOP_SECONDS: f64 = 0.010;

/// Per-frame fundamental-frequency estimates for one buffer.
///
/// A value of `0.0` marks an unvoiced frame. Read-only once built.
#[derive(Debug, Clone, Serialize)]
pub struct F0Contour {
    /// Per-frame F0 estimates in Hz (`0.0` = unvoiced).
    pub values: Vec<f64>,
    /// Frame length in samples.
    pub frame_size: usize,
    /// Hop between frames in samples.
    pub hop_size: usize,
    /// Sample rate of the analyzed buffer.
    pub sample_rate: u32,
}

/// Summary statistics over the voiced frames of a contour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContourStats {
    /// Mean F0 in Hz.
    pub mean: f64,
    /// Minimum voiced F0 in Hz.
    pub min: f64,
    /// Maximum voiced F0 in Hz.
    pub max: f64,
    /// Population standard deviation in Hz.
    pub std: f64,
}

impl F0Contour {
    /// Computes statistics over voiced frames only.
    ///
    /// # Returns
    /// `None` when the contour has no voiced frame; unvoiced-only
    /// input has no meaningful pitch statistics.
    pub fn stats(&self) -> Option<ContourStats> {
        stats(&self.values)
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no frame was analyzed.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fraction of frames that are voiced.
    pub fn voiced_ratio(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let voiced = self.values.iter().filter(|&&v| v > UNVOICED).count();
        voiced as f64 / self.values.len() as f64
    }
}

/// Builds an F0 contour for a whole buffer.
///
/// Frame and hop sizes are fixed at 25 ms / 10 ms of the buffer's
/// sample rate; frames are analyzed while a whole frame still fits.
pub fn build_contour(buffer: &SampleBuffer) -> F0Contour {
    let frame_size = (buffer.sample_rate as f64 * FRAME_SECONDS).round() as usize;
    let hop_size = (buffer.sample_rate as f64 * HOP_SECONDS).round() as usize;

    let values = buffer
        .frames(frame_size, hop_size)
        .map(|frame| pitch::estimate_f0(frame, buffer.sample_rate))
        .collect();

    F0Contour {
        values,
        frame_size,
        hop_size,
        sample_rate: buffer.sample_rate,
    }
}

/// Statistics over the voiced (`> 0`) values of an F0 sequence.
///
/// Uses population variance (divide by count, not count - 1).
pub fn stats(values: &[f64]) -> Option<ContourStats> {
    let voiced: Vec<f64> = values.iter().copied().filter(|&v| v > UNVOICED).collect();
    if voiced.is_empty() {
        return None;
    }

    let count = voiced.len() as f64;
    let mean = voiced.iter().sum::<f64>() / count;
    let min = voiced.iter().copied().fold(f64::INFINITY, f64::min);
    let max = voiced.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let variance = voiced.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;

    Some(ContourStats {
        mean,
        min,
        max,
        std: variance.sqrt(),
    })
}
