//! The transport seam to the remote inference service.
//!
//! The service is an external collaborator: this crate defines the
//! contract a transport must satisfy and nothing else. Implementations
//! own HTTP, multipart encoding, and payload decoding; audio-returning
//! endpoints hand back already decoded [`SampleBuffer`]s.

use thiserror::Error;

use voxlab_dsp::SampleBuffer;

use crate::types::{
    ConversionMetrics, ConversionRequest, F0AnalysisResponse, FormantSynthesisRequest,
    SpectrumAnalysisRequest, SpectrumAnalysisResponse, TtsRequest, VitsRequest,
};

/// Errors a transport can report.
///
/// All of these are recoverable from the engine's point of view: any
/// remote failure triggers the deterministic local fallback where one
/// exists.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The service could not be reached at all.
    #[error("remote service unavailable: {reason}")]
    Unavailable {
        /// Transport-level failure description.
        reason: String,
    },

    /// The service answered with a non-success status.
    #[error("remote service returned status {code}")]
    Status {
        /// HTTP status code.
        code: u16,
    },

    /// The response payload could not be decoded.
    #[error("remote payload could not be decoded: {message}")]
    Payload {
        /// Decode failure description.
        message: String,
    },
}

/// Result type for transport operations.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Voice-conversion methods of the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionMethod {
    /// CycleGAN-VC two-domain conversion.
    CycleGan,
    /// StarGAN-VC many-to-many conversion.
    StarGan,
    /// AutoVC zero-shot conversion.
    AutoVc,
    /// WaveNet vocoder generation.
    WaveNet,
}

impl ConversionMethod {
    /// Display name used in logs and experiment records.
    pub fn name(&self) -> &'static str {
        match self {
            ConversionMethod::CycleGan => "CycleGAN-VC",
            ConversionMethod::StarGan => "StarGAN-VC",
            ConversionMethod::AutoVc => "AutoVC",
            ConversionMethod::WaveNet => "WaveNet",
        }
    }

    /// Whether a (demo-grade) local stand-in exists for this method.
    pub fn has_demo_fallback(&self) -> bool {
        matches!(self, ConversionMethod::CycleGan | ConversionMethod::StarGan)
    }
}

/// One method per remote endpoint; see [`crate::endpoint::Route`] for
/// the corresponding paths.
pub trait RemoteBackend {
    /// `POST /formant/synthesize`, returning the decoded audio.
    fn synthesize_formant(&self, request: &FormantSynthesisRequest)
        -> RemoteResult<SampleBuffer>;

    /// `POST /f0/analyze`.
    fn analyze_f0(&self, audio: &SampleBuffer) -> RemoteResult<F0AnalysisResponse>;

    /// `POST /spectrum/analyze`.
    fn analyze_spectrum(
        &self,
        audio: &SampleBuffer,
        request: &SpectrumAnalysisRequest,
    ) -> RemoteResult<SpectrumAnalysisResponse>;

    /// `POST /tts/synthesize`, returning the decoded audio.
    fn synthesize_tts(&self, request: &TtsRequest) -> RemoteResult<SampleBuffer>;

    /// `POST /vits/synthesize`, returning the decoded audio.
    fn synthesize_vits(&self, request: &VitsRequest) -> RemoteResult<SampleBuffer>;

    /// One of the `/{method}/convert` (or `/wavenet/generate`)
    /// endpoints, returning the decoded audio.
    fn convert(
        &self,
        method: ConversionMethod,
        audio: &SampleBuffer,
        request: &ConversionRequest,
    ) -> RemoteResult<SampleBuffer>;

    /// `POST /cyclegan/analyze`.
    fn conversion_metrics(&self, audio: &SampleBuffer) -> RemoteResult<ConversionMetrics>;
}

/// A transport that never reaches the service.
///
/// Every call reports [`RemoteError::Unavailable`], which routes the
/// engine straight to its local paths. Used where only local
/// processing is wanted, such as the CLI.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRemote;

impl NoRemote {
    fn unavailable<T>() -> RemoteResult<T> {
        Err(RemoteError::Unavailable {
            reason: "no transport configured".to_string(),
        })
    }
}

impl RemoteBackend for NoRemote {
    fn synthesize_formant(
        &self,
        _request: &FormantSynthesisRequest,
    ) -> RemoteResult<SampleBuffer> {
        Self::unavailable()
    }

    fn analyze_f0(&self, _audio: &SampleBuffer) -> RemoteResult<F0AnalysisResponse> {
        Self::unavailable()
    }

    fn analyze_spectrum(
        &self,
        _audio: &SampleBuffer,
        _request: &SpectrumAnalysisRequest,
    ) -> RemoteResult<SpectrumAnalysisResponse> {
        Self::unavailable()
    }

    fn synthesize_tts(&self, _request: &TtsRequest) -> RemoteResult<SampleBuffer> {
        Self::unavailable()
    }

    fn synthesize_vits(&self, _request: &VitsRequest) -> RemoteResult<SampleBuffer> {
        Self::unavailable()
    }

    fn convert(
        &self,
        _method: ConversionMethod,
        _audio: &SampleBuffer,
        _request: &ConversionRequest,
    ) -> RemoteResult<SampleBuffer> {
        Self::unavailable()
    }

    fn conversion_metrics(&self, _audio: &SampleBuffer) -> RemoteResult<ConversionMetrics> {
        Self::unavailable()
    }
}
