//! Remote API base-URL selection and routes.

/// Development server base URL, used on recognized local hosts.
const LOCAL_BASE: &str = "http://localhost:5000/api";

/// Relative base used everywhere else (same-origin deployment).
const RELATIVE_BASE: &str = "/api";

/// Base URL of the remote inference API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(String);

impl ApiBase {
    /// Selects the base URL for the host the app is served from.
    ///
    /// `localhost` and `127.0.0.1` target the local development
    /// server; any other host uses the relative `/api` path.
    pub fn for_host(hostname: &str) -> Self {
        if hostname == "localhost" || hostname == "127.0.0.1" {
            Self(LOCAL_BASE.to_string())
        } else {
            Self(RELATIVE_BASE.to_string())
        }
    }

    /// Uses an explicit base URL, trailing slash stripped.
    pub fn custom(base: &str) -> Self {
        Self(base.trim_end_matches('/').to_string())
    }

    /// The base URL string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full URL for a route.
    pub fn route(&self, route: Route) -> String {
        format!("{}{}", self.0, route.path())
    }
}

/// Routes of the remote inference API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Formant synthesis (JSON in, audio out).
    FormantSynthesize,
    /// F0 analysis (multipart audio in, JSON out).
    F0Analyze,
    /// Spectrogram/power-spectrum analysis.
    SpectrumAnalyze,
    /// Neural TTS synthesis.
    TtsSynthesize,
    /// VITS synthesis.
    VitsSynthesize,
    /// CycleGAN-VC conversion.
    CycleGanConvert,
    /// CycleGAN-VC quality metrics.
    CycleGanAnalyze,
    /// StarGAN-VC conversion.
    StarGanConvert,
    /// AutoVC zero-shot conversion.
    AutoVcConvert,
    /// WaveNet vocoder generation.
    WaveNetGenerate,
}

impl Route {
    /// Path component under the API base.
    pub fn path(&self) -> &'static str {
        match self {
            Route::FormantSynthesize => "/formant/synthesize",
            Route::F0Analyze => "/f0/analyze",
            Route::SpectrumAnalyze => "/spectrum/analyze",
            Route::TtsSynthesize => "/tts/synthesize",
            Route::VitsSynthesize => "/vits/synthesize",
            Route::CycleGanConvert => "/cyclegan/convert",
            Route::CycleGanAnalyze => "/cyclegan/analyze",
            Route::StarGanConvert => "/stargan/convert",
            Route::AutoVcConvert => "/autovc/convert",
            Route::WaveNetGenerate => "/wavenet/generate",
        }
    }
}
