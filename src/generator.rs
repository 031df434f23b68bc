//! Render strategies behind one interface.
//!
//! [`LocalGenerator`] renders in-process; [`RemoteGenerator`] posts the
//! record to a render service and falls back to the local strategy on any
//! transport or status failure. [`generator_from_env`] picks the strategy
//! from the deployment environment.

use crate::error::PdfError;
use log::warn;
use remito_render::LocalRenderer;
use remito_types::Remito;

/// Environment variable naming the remote render service.
pub const SERVICE_URL_ENV: &str = "PDF_SERVICE_URL";

/// A strategy turning one remito into one complete PDF buffer.
pub trait RemitoGenerator: Send + Sync {
    fn generate(&self, remito: &Remito) -> Result<Vec<u8>, PdfError>;
}

/// In-process rendering.
pub struct LocalGenerator {
    renderer: LocalRenderer,
}

impl LocalGenerator {
    pub fn new(renderer: LocalRenderer) -> Self {
        Self { renderer }
    }

    /// Local strategy with env-derived issuer profile and the default
    /// font scratch directory.
    pub fn from_env() -> Self {
        Self::new(LocalRenderer::from_env())
    }

    pub fn renderer(&self) -> &LocalRenderer {
        &self.renderer
    }
}

impl RemitoGenerator for LocalGenerator {
    fn generate(&self, remito: &Remito) -> Result<Vec<u8>, PdfError> {
        Ok(self.renderer.render(remito)?)
    }
}

/// Rendering via an external service, with automatic local fallback.
pub struct RemoteGenerator {
    base_url: String,
    client: reqwest::blocking::Client,
    fallback: LocalGenerator,
}

impl RemoteGenerator {
    pub fn new(base_url: impl Into<String>, fallback: LocalGenerator) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::blocking::Client::new(),
            fallback,
        }
    }

    fn request(&self, remito: &Remito) -> Result<Vec<u8>, PdfError> {
        let url = format!("{}/generate", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .json(remito)
            .send()
            .map_err(|e| PdfError::Remote(e.to_string()))?;
        if !response.status().is_success() {
            return Err(PdfError::Remote(format!(
                "{} from {}",
                response.status(),
                url
            )));
        }
        let bytes = response
            .bytes()
            .map_err(|e| PdfError::Remote(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

impl RemitoGenerator for RemoteGenerator {
    fn generate(&self, remito: &Remito) -> Result<Vec<u8>, PdfError> {
        match self.request(remito) {
            Ok(bytes) => Ok(bytes),
            Err(err) => {
                warn!("remote render failed ({err}); falling back to local renderer");
                self.fallback.generate(remito)
            }
        }
    }
}

/// Strategy selection: `PDF_SERVICE_URL` set and non-empty picks the
/// remote service (with local fallback), anything else renders locally.
pub fn generator_from_env() -> Box<dyn RemitoGenerator> {
    match std::env::var(SERVICE_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => {
            Box::new(RemoteGenerator::new(url, LocalGenerator::from_env()))
        }
        _ => Box::new(LocalGenerator::from_env()),
    }
}
