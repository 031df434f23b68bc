use remito_render::RenderError;
use thiserror::Error;

/// Top-level error surface of the facade.
///
/// The HTTP layer maps any variant to a generic "document generation
/// failed" response; partial buffers are never exposed.
#[derive(Error, Debug)]
pub enum PdfError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("remote render service error: {0}")]
    Remote(String),

    #[error("invalid remito payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
