//! Loader abstraction binding a render to its metric files.
//!
//! Historically this kind of redirection was done by intercepting the
//! process-wide file-read primitives for the duration of a render, which
//! races under concurrent renders. Instead, every render receives an
//! explicit [`FontSource`] and reads only through it; there is nothing to
//! install or restore.

use crate::FontError;
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Shared resource bytes (reference-counted).
pub type SharedFontData = Arc<Vec<u8>>;

/// A source of font metric files, looked up by bare file name
/// (e.g. `Helvetica.afm`).
pub trait FontSource: Send + Sync + Debug {
    /// Load a metric file by name.
    fn load(&self, name: &str) -> Result<SharedFontData, FontError>;

    /// Check whether a metric file exists without loading it.
    fn exists(&self, name: &str) -> bool;

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;
}

/// Serves metric files from a resolved directory, typically the scratch
/// directory returned by [`crate::FontResolver::resolve`].
///
/// Only bare file names are accepted; anything carrying a path component
/// is rejected so a lookup can never escape the resolved directory.
#[derive(Debug, Clone)]
pub struct DirFontSource {
    dir: PathBuf,
}

impl DirFontSource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn resolve_name(&self, name: &str) -> Option<PathBuf> {
        let candidate = Path::new(name);
        let mut components = candidate.components();
        match (components.next(), components.next()) {
            (Some(std::path::Component::Normal(_)), None) => Some(self.dir.join(name)),
            _ => None,
        }
    }
}

impl FontSource for DirFontSource {
    fn load(&self, name: &str) -> Result<SharedFontData, FontError> {
        let path = self
            .resolve_name(name)
            .ok_or_else(|| FontError::NotFound(format!("{name} (not a bare file name)")))?;
        std::fs::read(&path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FontError::NotFound(name.to_string())
            } else {
                FontError::LoadFailed {
                    name: name.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn exists(&self, name: &str) -> bool {
        self.resolve_name(name).map(|p| p.is_file()).unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "DirFontSource"
    }
}

/// Pre-populated in-memory source, for tests and embedded deployments.
#[derive(Debug, Default)]
pub struct InMemoryFontSource {
    files: std::sync::RwLock<std::collections::HashMap<String, SharedFontData>>,
}

impl InMemoryFontSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a metric file under the given name.
    ///
    /// Returns `LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, name: impl Into<String>, data: Vec<u8>) -> Result<(), FontError> {
        let name = name.into();
        let mut files = self.files.write().map_err(|_| FontError::LoadFailed {
            name: name.clone(),
            message: "font store lock poisoned".to_string(),
        })?;
        files.insert(name, Arc::new(data));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.files.read().map(|f| f.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.files.read().map(|f| f.is_empty()).unwrap_or(true)
    }
}

impl FontSource for InMemoryFontSource {
    fn load(&self, name: &str) -> Result<SharedFontData, FontError> {
        let files = self.files.read().map_err(|_| FontError::LoadFailed {
            name: name.to_string(),
            message: "font store lock poisoned".to_string(),
        })?;
        files
            .get(name)
            .cloned()
            .ok_or_else(|| FontError::NotFound(name.to_string()))
    }

    fn exists(&self, name: &str) -> bool {
        self.files
            .read()
            .map(|f| f.contains_key(name))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryFontSource"
    }
}
