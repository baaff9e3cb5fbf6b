//! Wire types of the remote inference API.
//!
//! These mirror the request and response payloads of the inference
//! service exactly; the service itself is an external collaborator and
//! no transport ships with this crate.

use serde::{Deserialize, Serialize};

use voxlab_dsp::FormantParams;

/// JSON body of `POST /formant/synthesize`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormantSynthesisRequest {
    /// Fundamental frequency in Hz.
    pub f0: f64,
    /// First formant in Hz.
    pub f1: f64,
    /// Second formant in Hz.
    pub f2: f64,
    /// Third formant in Hz.
    pub f3: f64,
    /// First formant bandwidth in Hz.
    pub b1: f64,
    /// Second/third formant bandwidth in Hz.
    pub b2: f64,
    /// Requested duration in seconds.
    pub duration: f64,
}

impl FormantSynthesisRequest {
    /// Builds a request from core parameters and a duration.
    pub fn new(params: FormantParams, duration: f64) -> Self {
        Self {
            f0: params.f0,
            f1: params.f1,
            f2: params.f2,
            f3: params.f3,
            b1: params.b1,
            b2: params.b2,
            duration,
        }
    }

    /// The core-side view of the same parameters.
    pub fn params(&self) -> FormantParams {
        FormantParams {
            f0: self.f0,
            f1: self.f1,
            f2: self.f2,
            f3: self.f3,
            b1: self.b1,
            b2: self.b2,
        }
    }
}

/// JSON response of `POST /f0/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct F0AnalysisResponse {
    /// Per-frame F0 values in Hz (`0.0` = unvoiced).
    pub f0_values: Vec<f64>,
    /// Mean voiced F0 in Hz.
    pub mean: f64,
    /// Minimum voiced F0 in Hz.
    pub min: f64,
    /// Maximum voiced F0 in Hz.
    pub max: f64,
    /// Standard deviation of voiced F0 in Hz.
    pub std: f64,
}

/// Form fields of `POST /spectrum/analyze` (alongside the audio part).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumAnalysisRequest {
    /// Transform size in samples.
    pub fft_size: usize,
    /// Analysis window name (`rect`, `hann`, `hamming`).
    pub window_type: String,
}

/// JSON response of `POST /spectrum/analyze`.
///
/// The spectrogram is frequency-major (`spectrogram[f][t]`), matching
/// the service's layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumAnalysisResponse {
    /// Magnitude grid, outer index = frequency bin, inner = time step.
    pub spectrogram: Vec<Vec<f64>>,
    /// Frame center times in seconds.
    pub times: Vec<f64>,
    /// Bin frequencies in Hz.
    pub frequencies: Vec<f64>,
    /// Single-shot power spectrum of the first frame.
    pub power_spectrum: Vec<f64>,
    /// Frequency axis of `power_spectrum` in Hz.
    pub freq_axis: Vec<f64>,
}

/// JSON body of `POST /tts/synthesize`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TtsRequest {
    /// Text to synthesize.
    pub text: String,
    /// Speaker preset name.
    pub speaker: String,
    /// Speech rate multiplier.
    pub rate: f64,
}

/// JSON body of `POST /vits/synthesize`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitsRequest {
    /// Text to synthesize.
    pub text: String,
    /// Speaker index.
    pub speaker: u32,
    /// KL-divergence loss weight.
    pub lambda_kl: f64,
    /// Adversarial loss weight.
    pub lambda_adv: f64,
    /// Inference noise scale.
    pub noise_scale: f64,
}

/// Form fields of the conversion endpoints (alongside the audio part).
///
/// Each method reads the subset it understands; unused fields are
/// omitted from the form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Cycle-consistency loss weight (CycleGAN, StarGAN).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lambda_cyc: Option<f64>,
    /// Identity loss weight (CycleGAN, StarGAN).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lambda_id: Option<f64>,
    /// Classification loss weight (StarGAN).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lambda_cls: Option<f64>,
    /// Target speaker name (StarGAN).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_speaker: Option<String>,
    /// Content embedding size (AutoVC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_dim: Option<u32>,
    /// Speaker embedding size (AutoVC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker_dim: Option<u32>,
    /// Dilation rates (WaveNet).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dilation_rates: Option<Vec<u32>>,
    /// Residual channels (WaveNet).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub res_channels: Option<u32>,
    /// Skip channels (WaveNet).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_channels: Option<u32>,
}

/// JSON response of `POST /cyclegan/analyze`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionMetrics {
    /// Mel cepstral distortion.
    pub mcd: f64,
    /// Perceptual evaluation of speech quality.
    pub pesq: f64,
    /// Short-time objective intelligibility.
    pub stoi: f64,
}
