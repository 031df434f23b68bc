use remito_fonts::FontError;
use thiserror::Error;

/// Error surface of one render.
///
/// `Font(FontError::NotFound)` means no metric directory could be located
/// (deployment misconfiguration, operator intervention required); `Draw`
/// means a PDF primitive failed after resources were resolved. Neither is
/// retried and no partial buffer is ever returned.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("font resource error: {0}")]
    Font(#[from] FontError),

    #[error("draw failure: {0}")]
    Draw(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Draw(err.to_string())
    }
}
