//! Remote-first orchestration with deterministic local fallback.
//!
//! Every operation tries the configured transport first and, on any
//! [`RemoteError`], discards the failed attempt and runs the
//! equivalent local core routine. Which path produced a result is
//! never inferred from error handling after the fact: each result
//! carries an explicit [`Source`] tag.
//!
//! Operations with no local equivalent (neural TTS, AutoVC, WaveNet)
//! fail with [`EngineError::RemoteRequired`]; CycleGAN and StarGAN
//! conversion degrade to the clearly labeled demo transforms instead.

use serde::Serialize;
use thiserror::Error;

use voxlab_dsp::contour::{self, ContourStats};
use voxlab_dsp::{formant, rng, spectrum, transform, DspError, SampleBuffer, WindowType};

use crate::backend::{ConversionMethod, RemoteBackend, RemoteError};
use crate::types::{
    ConversionMetrics, ConversionRequest, F0AnalysisResponse, FormantSynthesisRequest,
    SpectrumAnalysisRequest, SpectrumAnalysisResponse, TtsRequest, VitsRequest,
};

/// Where a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
    /// The remote inference service.
    Remote,
    /// The local DSP core, after a remote failure or with no
    /// transport configured.
    LocalFallback,
    /// A demo-grade stand-in with no research validity.
    Demo,
}

/// A result together with its provenance.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome<T> {
    /// The computed value.
    pub value: T,
    /// Which path produced it.
    pub source: Source,
}

impl<T> Outcome<T> {
    fn remote(value: T) -> Self {
        Self {
            value,
            source: Source::Remote,
        }
    }

    fn local(value: T) -> Self {
        Self {
            value,
            source: Source::LocalFallback,
        }
    }

    fn demo(value: T) -> Self {
        Self {
            value,
            source: Source::Demo,
        }
    }

    /// True for demo-grade output that must be surfaced as such.
    pub fn is_demo(&self) -> bool {
        self.source == Source::Demo
    }
}

/// Errors surfaced by the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The operation has no local equivalent and the remote service
    /// did not produce a result.
    #[error("{feature} requires the remote inference service")]
    RemoteRequired {
        /// Human-readable feature name.
        feature: String,
    },

    /// Invalid input reported by the local core.
    #[error(transparent)]
    Dsp(#[from] DspError),
}

/// Result of an F0 analysis, from either path.
#[derive(Debug, Clone, Serialize)]
pub struct F0Analysis {
    /// Per-frame F0 values in Hz (`0.0` = unvoiced).
    pub values: Vec<f64>,
    /// Voiced-frame statistics; `None` when nothing is voiced.
    pub stats: Option<ContourStats>,
}

impl From<F0AnalysisResponse> for F0Analysis {
    fn from(resp: F0AnalysisResponse) -> Self {
        Self {
            values: resp.f0_values,
            stats: Some(ContourStats {
                mean: resp.mean,
                min: resp.min,
                max: resp.max,
                std: resp.std,
            }),
        }
    }
}

/// Remote-first engine over an optional transport.
///
/// With no transport configured every operation goes straight to the
/// local path (or fails with [`EngineError::RemoteRequired`]).
#[derive(Debug)]
pub struct Engine<B> {
    backend: Option<B>,
    demo_seed: u32,
}

impl<B: RemoteBackend> Engine<B> {
    /// Creates an engine over a transport.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Some(backend),
            demo_seed: 0,
        }
    }

    /// Creates an engine with no transport; all work runs locally.
    pub fn offline() -> Self {
        Self {
            backend: None,
            demo_seed: 0,
        }
    }

    /// Sets the seed for demo-transform noise.
    pub fn with_demo_seed(mut self, seed: u32) -> Self {
        self.demo_seed = seed;
        self
    }

    fn try_remote<T>(
        &self,
        call: impl FnOnce(&B) -> Result<T, RemoteError>,
    ) -> Option<T> {
        // Any remote failure is recoverable: drop the partial result
        // and let the caller fall back.
        self.backend.as_ref().and_then(|b| call(b).ok())
    }

    /// Formant synthesis; falls back to the local AM-approximation
    /// synthesizer at `fallback_sample_rate`.
    pub fn synthesize_formant(
        &self,
        request: &FormantSynthesisRequest,
        fallback_sample_rate: u32,
    ) -> Result<Outcome<SampleBuffer>, EngineError> {
        if let Some(audio) = self.try_remote(|b| b.synthesize_formant(request)) {
            return Ok(Outcome::remote(audio));
        }

        let buffer = formant::synthesize(&request.params(), request.duration, fallback_sample_rate)?;
        Ok(Outcome::local(buffer))
    }

    /// F0 analysis; falls back to the local autocorrelation contour.
    pub fn analyze_f0(&self, audio: &SampleBuffer) -> Outcome<F0Analysis> {
        if let Some(resp) = self.try_remote(|b| b.analyze_f0(audio)) {
            return Outcome::remote(resp.into());
        }

        let contour = contour::build_contour(audio);
        let stats = contour.stats();
        Outcome::local(F0Analysis {
            values: contour.values,
            stats,
        })
    }

    /// Spectrum analysis; falls back to the local windowed
    /// spectrogram and power spectrum.
    pub fn analyze_spectrum(
        &self,
        audio: &SampleBuffer,
        fft_size: usize,
        window: WindowType,
    ) -> Result<Outcome<SpectrumAnalysisResponse>, EngineError> {
        let request = SpectrumAnalysisRequest {
            fft_size,
            window_type: window.name().to_string(),
        };
        if let Some(resp) = self.try_remote(|b| b.analyze_spectrum(audio, &request)) {
            return Ok(Outcome::remote(resp));
        }

        let spec = spectrum::spectrogram(audio, fft_size, window)?;
        let (power_spectrum, freq_axis) = spectrum::power_spectrum(audio, fft_size)?;

        // Transpose to the service's frequency-major layout
        let bins = fft_size / 2;
        let mut grid = vec![Vec::with_capacity(spec.frames.len()); bins];
        for frame in &spec.frames {
            for (f, &magnitude) in frame.iter().enumerate() {
                grid[f].push(magnitude);
            }
        }

        Ok(Outcome::local(SpectrumAnalysisResponse {
            spectrogram: grid,
            times: spec.times,
            frequencies: spec.frequencies,
            power_spectrum,
            freq_axis,
        }))
    }

    /// Voice conversion; CycleGAN and StarGAN degrade to demo
    /// transforms, everything else requires the remote service.
    pub fn convert(
        &self,
        method: ConversionMethod,
        audio: &SampleBuffer,
        request: &ConversionRequest,
    ) -> Result<Outcome<SampleBuffer>, EngineError> {
        if let Some(converted) = self.try_remote(|b| b.convert(method, audio, request)) {
            return Ok(Outcome::remote(converted));
        }

        match method {
            ConversionMethod::CycleGan => {
                let mut rng = rng::create_component_rng(self.demo_seed, "cyclegan");
                Ok(Outcome::demo(transform::cyclegan_demo(audio, &mut rng)))
            }
            ConversionMethod::StarGan => {
                let mut rng = rng::create_component_rng(self.demo_seed, "stargan");
                Ok(Outcome::demo(transform::stargan_demo(audio, &mut rng)))
            }
            ConversionMethod::AutoVc | ConversionMethod::WaveNet => {
                Err(EngineError::RemoteRequired {
                    feature: method.name().to_string(),
                })
            }
        }
    }

    /// Neural TTS; remote only.
    pub fn synthesize_tts(
        &self,
        request: &TtsRequest,
    ) -> Result<Outcome<SampleBuffer>, EngineError> {
        self.try_remote(|b| b.synthesize_tts(request))
            .map(Outcome::remote)
            .ok_or_else(|| EngineError::RemoteRequired {
                feature: "Neural TTS".to_string(),
            })
    }

    /// VITS synthesis; remote only.
    pub fn synthesize_vits(
        &self,
        request: &VitsRequest,
    ) -> Result<Outcome<SampleBuffer>, EngineError> {
        self.try_remote(|b| b.synthesize_vits(request))
            .map(Outcome::remote)
            .ok_or_else(|| EngineError::RemoteRequired {
                feature: "VITS synthesis".to_string(),
            })
    }

    /// Conversion quality metrics (MCD/PESQ/STOI); remote only.
    pub fn conversion_metrics(
        &self,
        audio: &SampleBuffer,
    ) -> Result<Outcome<ConversionMetrics>, EngineError> {
        self.try_remote(|b| b.conversion_metrics(audio))
            .map(Outcome::remote)
            .ok_or_else(|| EngineError::RemoteRequired {
                feature: "conversion metrics".to_string(),
            })
    }
}
