//! Data model for the remito document pipeline.
//!
//! A [`Remito`] is the structured record for one delivery note, deserialized
//! from the same camelCase JSON shape the HTTP layer and the remote render
//! service exchange. The renderer treats the record as immutable input and
//! performs no business validation on it.

mod empresa;
mod remito;

pub use empresa::Empresa;
pub use remito::{Estado, Remito, RemitoItem, TipoTransporte};
