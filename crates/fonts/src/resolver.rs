//! Locates the AFM metric directory across deployment environments.
//!
//! The metric files ship alongside the application, but where they end up
//! depends on how the binary was packaged, and the install location may be
//! read-only at render time. The resolver tries an ordered list of
//! candidate directories and stages whatever it finds into a writable
//! scratch directory, which becomes the resolved location. Resolution is
//! memoized per resolver instance; the scratch directory itself survives
//! across instances since metric files are static content.

use crate::source::DirFontSource;
use crate::FontError;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// File extensions treated as font resources when scanning and copying.
const RESOURCE_EXTS: [&str; 2] = ["afm", "icc"];

/// Depth cutoff for the last-resort recursive search.
const SEARCH_DEPTH: usize = 4;

/// Environment variable naming an explicit metric directory.
pub const AFM_DIR_ENV: &str = "REMITO_AFM_DIR";

/// Finds and stages the AFM metric files.
///
/// The candidate list and scratch directory are fixed at construction so
/// tests can inject their own layout. [`FontResolver::resolve`] is
/// idempotent: the first success is cached, and re-running after
/// [`FontResolver::invalidate`] skips files already staged.
#[derive(Debug)]
pub struct FontResolver {
    scratch: PathBuf,
    candidates: Vec<PathBuf>,
    search_roots: Vec<PathBuf>,
    resolved: Mutex<Option<PathBuf>>,
}

impl FontResolver {
    /// Resolver with the default candidate list and the given scratch
    /// directory.
    pub fn new<P: AsRef<Path>>(scratch: P) -> Self {
        let scratch = scratch.as_ref().to_path_buf();
        let candidates = default_candidates(&scratch);
        let search_roots = default_search_roots();
        Self {
            scratch,
            candidates,
            search_roots,
            resolved: Mutex::new(None),
        }
    }

    /// Resolver staging into a per-user scratch directory under the system
    /// temp dir.
    pub fn with_default_scratch() -> Self {
        Self::new(std::env::temp_dir().join("remito-afm"))
    }

    /// Resolver with an explicit candidate list (and no last-resort
    /// search). Used by tests and embedders that know their layout.
    pub fn with_candidates<P: AsRef<Path>>(scratch: P, candidates: Vec<PathBuf>) -> Self {
        Self {
            scratch: scratch.as_ref().to_path_buf(),
            candidates,
            search_roots: Vec::new(),
            resolved: Mutex::new(None),
        }
    }

    /// The scratch directory this resolver stages into.
    pub fn scratch_dir(&self) -> &Path {
        &self.scratch
    }

    /// Locates the metric files and returns the directory to read them
    /// from (always the scratch directory once staging has happened).
    ///
    /// Candidates are tried in order; the first one containing at least
    /// one `.afm` file wins. A winning candidate other than the scratch
    /// directory is copied into it, skipping files already present. When
    /// every candidate fails, a bounded-depth recursive search under the
    /// configured roots runs as a last resort.
    pub fn resolve(&self) -> Result<PathBuf, FontError> {
        let mut resolved = self
            .resolved
            .lock()
            .map_err(|_| FontError::Io("resolver lock poisoned".to_string()))?;

        if let Some(dir) = resolved.as_ref() {
            if has_metric_files(dir) {
                return Ok(dir.clone());
            }
            // Scratch was cleared behind our back; fall through and re-stage.
            debug!("cached metric dir {} no longer populated", dir.display());
        }

        for candidate in &self.candidates {
            if has_metric_files(candidate) {
                let dir = self.stage(candidate)?;
                info!("AFM metrics located in {}", candidate.display());
                *resolved = Some(dir.clone());
                return Ok(dir);
            }
            debug!("no AFM metrics in candidate {}", candidate.display());
        }

        if !self.search_roots.is_empty() {
            warn!("no metric candidate matched; falling back to recursive search");
            for root in &self.search_roots {
                if let Some(found) = search_for_metrics(root, SEARCH_DEPTH) {
                    let dir = self.stage(&found)?;
                    info!("AFM metrics found by search in {}", found.display());
                    *resolved = Some(dir.clone());
                    return Ok(dir);
                }
            }
        }

        let tried: Vec<String> = self
            .candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        Err(FontError::NotFound(format!(
            "no directory with .afm files among candidates [{}]",
            tried.join(", ")
        )))
    }

    /// Resolves eagerly, discarding the directory. Useful at startup so a
    /// misconfigured deployment fails before the first request.
    pub fn warm(&self) -> Result<(), FontError> {
        self.resolve().map(|_| ())
    }

    /// Drops the memoized result; the next [`FontResolver::resolve`]
    /// re-scans candidates. Staged files are left in place.
    pub fn invalidate(&self) {
        if let Ok(mut resolved) = self.resolved.lock() {
            *resolved = None;
        }
    }

    /// Resolves and binds a [`DirFontSource`] over the resolved directory.
    pub fn source(&self) -> Result<DirFontSource, FontError> {
        self.resolve().map(DirFontSource::new)
    }

    /// Copies resource files from `from` into the scratch directory,
    /// skipping files already present, and returns the scratch path. A
    /// candidate that already is the scratch directory is returned as-is.
    fn stage(&self, from: &Path) -> Result<PathBuf, FontError> {
        if from == self.scratch {
            return Ok(self.scratch.clone());
        }
        fs::create_dir_all(&self.scratch)?;

        let mut copied = 0usize;
        for entry in fs::read_dir(from)? {
            let entry = entry?;
            let path = entry.path();
            if !is_resource_file(&path) {
                continue;
            }
            let Some(name) = path.file_name() else {
                continue;
            };
            let target = self.scratch.join(name);
            if target.exists() {
                continue;
            }
            fs::copy(&path, &target)?;
            copied += 1;
        }
        if copied > 0 {
            debug!(
                "staged {} metric file(s) into {}",
                copied,
                self.scratch.display()
            );
        }
        Ok(self.scratch.clone())
    }
}

fn is_resource_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| RESOURCE_EXTS.contains(&e))
            .unwrap_or(false)
}

fn has_metric_files(dir: &Path) -> bool {
    let Ok(entries) = fs::read_dir(dir) else {
        return false;
    };
    entries.flatten().any(|entry| {
        let path = entry.path();
        path.is_file()
            && path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e == "afm")
                .unwrap_or(false)
    })
}

/// Depth-first search for a directory containing `.afm` files. Depth is
/// cut off at `depth`; breadth is whatever the filesystem holds, which is
/// why this only runs after every known candidate failed.
fn search_for_metrics(root: &Path, depth: usize) -> Option<PathBuf> {
    if has_metric_files(root) {
        return Some(root.to_path_buf());
    }
    if depth == 0 {
        return None;
    }
    let entries = fs::read_dir(root).ok()?;
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if let Some(found) = search_for_metrics(&path, depth - 1) {
                return Some(found);
            }
        }
    }
    None
}

fn default_candidates(scratch: &Path) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Explicit override wins.
    if let Ok(dir) = std::env::var(AFM_DIR_ENV) {
        candidates.push(PathBuf::from(dir));
    }

    // Directories next to the executable.
    if let Ok(exe) = std::env::current_exe() {
        if let Some(exe_dir) = exe.parent() {
            candidates.push(exe_dir.join("afm"));
            candidates.push(exe_dir.join("assets").join("afm"));
        }
    }

    // Working directory of the process.
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join("assets").join("afm"));
    }

    // Well-known deployment paths.
    candidates.push(PathBuf::from("/usr/share/remito-pdf/afm"));
    candidates.push(PathBuf::from("/var/task/assets/afm"));

    // A previously staged scratch directory.
    candidates.push(scratch.to_path_buf());

    candidates
}

fn default_search_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            roots.push(dir.to_path_buf());
        }
    }
    roots
}
