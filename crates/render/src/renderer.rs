//! Local render orchestration.

use crate::document;
use crate::error::RenderError;
use crate::layout;
use crate::page::Page;
use chrono::{DateTime, Local};
use log::debug;
use remito_fonts::{FontResolver, FontSet, FontSource};
use remito_types::{Empresa, Remito};
use std::sync::Arc;

/// Renders remitos in-process.
///
/// Holds the font resolver (whose result is memoized for the process
/// lifetime) and the issuer profile. Each render binds its own font
/// source, so concurrent renders share nothing mutable.
#[derive(Debug)]
pub struct LocalRenderer {
    resolver: Arc<FontResolver>,
    empresa: Empresa,
}

impl LocalRenderer {
    pub fn new(resolver: Arc<FontResolver>, empresa: Empresa) -> Self {
        Self { resolver, empresa }
    }

    /// Renderer with the default scratch directory and the env-derived
    /// issuer profile.
    pub fn from_env() -> Self {
        Self::new(
            Arc::new(FontResolver::with_default_scratch()),
            Empresa::from_env(),
        )
    }

    pub fn resolver(&self) -> &FontResolver {
        &self.resolver
    }

    /// Renders one remito to a complete PDF buffer.
    pub fn render(&self, remito: &Remito) -> Result<Vec<u8>, RenderError> {
        self.render_at(remito, Local::now())
    }

    /// Renders with an explicit generation timestamp. Output is
    /// byte-identical across calls with the same record and timestamp.
    pub fn render_at(
        &self,
        remito: &Remito,
        generado: DateTime<Local>,
    ) -> Result<Vec<u8>, RenderError> {
        let source = self.resolver.source()?;
        self.render_with_source(remito, &source, generado)
    }

    /// Renders through an explicit font source, bypassing resolution.
    pub fn render_with_source(
        &self,
        remito: &Remito,
        source: &dyn FontSource,
        generado: DateTime<Local>,
    ) -> Result<Vec<u8>, RenderError> {
        debug!(
            "rendering remito {} via {}",
            remito_label(remito),
            source.name()
        );
        let fonts = FontSet::load(source)?;
        let mut page = Page::new(&fonts);
        layout::draw(&mut page, remito, &self.empresa, &generado);
        document::assemble(page.finish())
    }
}

fn remito_label(remito: &Remito) -> String {
    remito
        .id
        .clone()
        .or_else(|| remito.numero_remito.map(|n| n.to_string()))
        .unwrap_or_else(|| "sin numero".to_string())
}
