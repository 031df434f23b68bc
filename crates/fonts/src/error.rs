use thiserror::Error;

/// Error type for font-resource resolution and loading.
#[derive(Error, Debug, Clone)]
pub enum FontError {
    /// No candidate location (nor the last-resort search) produced the
    /// required metric files. Deployment misconfiguration; not retryable.
    #[error("font resources not found: {0}")]
    NotFound(String),

    #[error("failed to load font resource '{name}': {message}")]
    LoadFailed { name: String, message: String },

    #[error("invalid font metrics in '{name}': {message}")]
    InvalidMetrics { name: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for FontError {
    fn from(err: std::io::Error) -> Self {
        FontError::Io(err.to_string())
    }
}
