//! Analysis window functions.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Window applied to a frame before spectral analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowType {
    /// No shaping (all ones).
    Rect,
    /// Hann window.
    Hann,
    /// Hamming window.
    Hamming,
}

impl WindowType {
    /// Parses the wire-format name used by the spectrum API.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rect" | "rectangular" => Some(WindowType::Rect),
            "hann" | "hanning" => Some(WindowType::Hann),
            "hamming" => Some(WindowType::Hamming),
            _ => None,
        }
    }

    /// Wire-format name.
    pub fn name(&self) -> &'static str {
        match self {
            WindowType::Rect => "rect",
            WindowType::Hann => "hann",
            WindowType::Hamming => "hamming",
        }
    }

    /// Window coefficient at index `i` of an `n`-point window.
    pub fn coefficient(&self, i: usize, n: usize) -> f64 {
        if n <= 1 {
            return 1.0;
        }
        let x = 2.0 * PI * i as f64 / (n - 1) as f64;
        match self {
            WindowType::Rect => 1.0,
            WindowType::Hann => 0.5 - 0.5 * x.cos(),
            WindowType::Hamming => 0.54 - 0.46 * x.cos(),
        }
    }

    /// Applies the window to a frame, returning the shaped copy.
    pub fn apply(&self, frame: &[f64]) -> Vec<f64> {
        let n = frame.len();
        frame
            .iter()
            .enumerate()
            .map(|(i, &s)| s * self.coefficient(i, n))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_is_identity() {
        let frame = vec![0.5, -0.25, 1.0];
        assert_eq!(WindowType::Rect.apply(&frame), frame);
    }

    #[test]
    fn test_hann_endpoints_are_zero() {
        let n = 64;
        assert!(WindowType::Hann.coefficient(0, n).abs() < 1e-12);
        assert!(WindowType::Hann.coefficient(n - 1, n).abs() < 1e-12);
        assert!((WindowType::Hann.coefficient(n / 2, n) - 1.0).abs() < 1e-2);
    }

    #[test]
    fn test_hamming_endpoints() {
        let n = 64;
        assert!((WindowType::Hamming.coefficient(0, n) - 0.08).abs() < 1e-9);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(WindowType::from_name("hamming"), Some(WindowType::Hamming));
        assert_eq!(WindowType::from_name("hanning"), Some(WindowType::Hann));
        assert_eq!(WindowType::from_name("bogus"), None);
    }
}
