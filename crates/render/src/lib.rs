//! Fixed-layout PDF rendering for remitos.
//!
//! The document is a single A4 page partitioned into a vertical stack of
//! constant-height boxes drawn at absolute coordinates. Rendering is
//! deterministic: for a given [`remito_types::Remito`] and timestamp, the
//! output bytes are identical across runs.
//!
//! [`LocalRenderer`] is the entry point: it resolves the AFM metric
//! directory, binds a per-render font source, draws the layout into a
//! content stream, and assembles one contiguous PDF buffer.

mod document;
mod error;
pub mod layout;
mod page;
mod renderer;

pub use error::RenderError;
pub use page::{Align, Page, PAGE_HEIGHT, PAGE_WIDTH};
pub use renderer::LocalRenderer;
