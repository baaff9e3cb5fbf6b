//! Remote inference contract and fallback orchestration for voxlab.
//!
//! The heavy models (neural TTS, VITS, CycleGAN-VC, StarGAN-VC,
//! AutoVC, WaveNet) live in a separate inference service. This crate
//! defines that service's wire contract and an [`Engine`] that prefers
//! the remote path but degrades gracefully: analysis and formant
//! synthesis fall back to the deterministic core in `voxlab-dsp`,
//! CycleGAN/StarGAN conversion falls back to clearly labeled
//! demo-grade transforms, and everything else reports that the remote
//! service is required.
//!
//! No HTTP client ships here. A transport implements [`RemoteBackend`]
//! and owns request encoding and payload decoding; the [`endpoint`]
//! module supplies the base-URL and route mapping such a transport
//! needs.
//!
//! ```
//! use voxlab_remote::{Engine, NoRemote, Source};
//! use voxlab_dsp::SampleBuffer;
//!
//! // No transport configured: analysis runs on the local core.
//! let engine: Engine<NoRemote> = Engine::offline();
//! let audio = SampleBuffer::new(vec![0.0; 16000], 16000).unwrap();
//! let outcome = engine.analyze_f0(&audio);
//! assert_eq!(outcome.source, Source::LocalFallback);
//! ```

pub mod backend;
pub mod endpoint;
pub mod engine;
pub mod experiment;
pub mod types;

pub use backend::{ConversionMethod, NoRemote, RemoteBackend, RemoteError, RemoteResult};
pub use endpoint::{ApiBase, Route};
pub use engine::{Engine, EngineError, F0Analysis, Outcome, Source};
pub use experiment::{ExperimentLog, ExperimentRecord};
pub use types::{
    ConversionMetrics, ConversionRequest, F0AnalysisResponse, FormantSynthesisRequest,
    SpectrumAnalysisRequest, SpectrumAnalysisResponse, TtsRequest, VitsRequest,
};
