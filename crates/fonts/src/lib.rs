//! Font-metric resources for the remito renderer.
//!
//! The renderer measures and places text with the Adobe core AFM metric
//! files (`Helvetica.afm`, `Helvetica-Bold.afm`). Deployment environments
//! do not guarantee where those files live, and the install location may
//! be read-only, so this crate provides:
//!
//! - [`FontResolver`]: locates a directory holding `.afm` files by trying
//!   an ordered list of candidate locations and materializes them into a
//!   writable scratch directory.
//! - [`FontSource`]: the loader abstraction a render binds to. Each render
//!   carries its own source, so concurrent renders never share mutable
//!   state.
//! - [`AfmMetrics`] / [`FontSet`]: parsed character widths used for text
//!   measurement.

mod afm;
mod error;
mod resolver;
mod source;

pub use afm::{win_ansi_bytes, AfmMetrics, FontSet};
pub use error::FontError;
pub use resolver::FontResolver;
pub use source::{DirFontSource, FontSource, InMemoryFontSource, SharedFontData};

/// Regular face used for every field of the document.
pub const HELVETICA: &str = "Helvetica";
/// Bold face reserved for the document title block.
pub const HELVETICA_BOLD: &str = "Helvetica-Bold";

/// Logical resource file name for a font face.
pub fn afm_file_name(face: &str) -> String {
    format!("{face}.afm")
}
