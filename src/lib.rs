//! PDF generation for Argentine delivery notes (remitos).
//!
//! The facade wires together the member crates:
//!
//! - `remito-types`: the [`Remito`] record and [`Empresa`] issuer profile.
//! - `remito-format`: fail-closed display formatting.
//! - `remito-fonts`: AFM metric resolution and per-render font sources.
//! - `remito-render`: the fixed-layout single-page renderer.
//!
//! Callers hand a validated [`Remito`] to a [`RemitoGenerator`] and get
//! back one contiguous PDF buffer or a typed [`PdfError`]; persistence,
//! validation, and HTTP concerns stay outside this crate.
//!
//! ```no_run
//! use remito_pdf::{generator_from_env, Remito};
//!
//! # fn run(remito: &Remito) -> Result<(), remito_pdf::PdfError> {
//! let generator = generator_from_env();
//! let pdf_bytes = generator.generate(remito)?;
//! # Ok(())
//! # }
//! ```

mod error;
mod generator;

pub use error::PdfError;
pub use generator::{
    generator_from_env, LocalGenerator, RemitoGenerator, RemoteGenerator, SERVICE_URL_ENV,
};

// Re-exports for callers that only depend on the facade.
pub use remito_format::{
    campo, format_cuit, format_fecha, format_medida, format_numero, CAMPO_VACIO,
};
pub use remito_fonts::{
    DirFontSource, FontError, FontResolver, FontSet, FontSource, InMemoryFontSource,
    SharedFontData,
};
pub use remito_render::{LocalRenderer, RenderError};
pub use remito_types::{Empresa, Estado, Remito, RemitoItem, TipoTransporte};
