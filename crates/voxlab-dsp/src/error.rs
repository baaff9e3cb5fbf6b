//! Error types for the DSP core.

use thiserror::Error;

/// Result type for DSP operations.
pub type DspResult<T> = Result<T, DspError>;

/// Errors that can occur in the DSP core.
///
/// These all describe invalid input; an unvoiced frame is not an error
/// and is reported through the `0.0` sentinel instead.
#[derive(Debug, Error)]
pub enum DspError {
    /// Empty sample buffer.
    #[error("sample buffer is empty")]
    EmptyBuffer,

    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Invalid frequency.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Odd-length frame passed to the spectral transform.
    #[error("spectral transform requires an even frame length, got {len}")]
    OddFrameLength {
        /// The rejected frame length.
        len: usize,
    },

    /// Frame shorter than the operation requires.
    #[error("frame too short: {len} samples, need at least {required}")]
    FrameTooShort {
        /// Actual frame length.
        len: usize,
        /// Minimum required length.
        required: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },
}

impl DspError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Returns a stable error code for machine-readable reporting.
    pub fn code(&self) -> &'static str {
        match self {
            DspError::EmptyBuffer => "DSP_001",
            DspError::InvalidSampleRate { .. } => "DSP_002",
            DspError::InvalidDuration { .. } => "DSP_003",
            DspError::InvalidFrequency { .. } => "DSP_004",
            DspError::OddFrameLength { .. } => "DSP_005",
            DspError::FrameTooShort { .. } => "DSP_006",
            DspError::InvalidParameter { .. } => "DSP_007",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_helper() {
        let err = DspError::invalid_param("f0", "must be positive");
        assert!(err.to_string().contains("f0"));
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            DspError::EmptyBuffer,
            DspError::InvalidSampleRate { rate: 0 },
            DspError::InvalidDuration { duration: -1.0 },
            DspError::InvalidFrequency { freq: -1.0 },
            DspError::OddFrameLength { len: 3 },
            DspError::FrameTooShort { len: 1, required: 2 },
            DspError::invalid_param("x", "y"),
        ];
        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}
