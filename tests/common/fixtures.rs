//! Shared fixtures: synthetic AFM metrics, a renderer wired to them, and
//! remito records.

use remito_pdf::{Empresa, FontResolver, LocalRenderer, Remito};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// Builds a synthetic AFM file covering the full single-byte range, with
/// just enough width variety to exercise alignment.
pub fn fixture_afm(font_name: &str) -> String {
    let mut out = String::from("StartFontMetrics 4.1\n");
    out.push_str(&format!("FontName {font_name}\n"));
    out.push_str("StartCharMetrics 224\n");
    for code in 32..=255u32 {
        let width = match code {
            32 => 278,          // space
            73 | 105 => 222,    // I, i
            77 | 87 => 944,     // M, W
            _ => 556,
        };
        out.push_str(&format!("C {code} ; WX {width} ; N c{code} ; B 0 0 0 0 ;\n"));
    }
    out.push_str("EndCharMetrics\nEndFontMetrics\n");
    out
}

/// Writes both document faces into `dir`.
pub fn write_fixture_fonts(dir: &Path) {
    std::fs::write(dir.join("Helvetica.afm"), fixture_afm("Helvetica")).unwrap();
    std::fs::write(
        dir.join("Helvetica-Bold.afm"),
        fixture_afm("Helvetica-Bold"),
    )
    .unwrap();
}

/// A renderer resolving fonts from a fixture install directory through a
/// scratch directory. The returned tempdirs keep the layout alive.
pub fn fixture_renderer() -> (TempDir, TempDir, LocalRenderer) {
    let install = TempDir::new().unwrap();
    let scratch = TempDir::new().unwrap();
    write_fixture_fonts(install.path());

    let resolver = FontResolver::with_candidates(
        scratch.path(),
        vec![
            install.path().to_path_buf(),
            scratch.path().to_path_buf(),
        ],
    );
    let renderer = LocalRenderer::new(Arc::new(resolver), Empresa::default());
    (install, scratch, renderer)
}

/// Record with only required fields populated.
pub fn remito_minimo() -> Remito {
    serde_json::from_value(serde_json::json!({
        "puntoVenta": 13,
        "numeroRemito": 452,
        "fechaEmision": "2025-03-07",
        "codigoTipoRemito": 1,
        "cuitEmisor": "30693787285",
        "cuitReceptor": "20123456783",
        "nombreReceptor": "Cliente SA",
        "domicilioReceptor": "Calle Falsa 123",
        "tipoTransporte": 1,
        "origenDomicilio": "Predio La Nueva",
        "origenLocalidad": "La Cruz",
        "origenProvincia": "Corrientes",
        "origenCodigoPostal": "3346",
        "destinoDomicilio": "Parque Industrial",
        "destinoLocalidad": "Zarate",
        "destinoProvincia": "Buenos Aires",
        "destinoCodigoPostal": "2800",
        "items": [{
            "codigo": "EUC-01",
            "descripcion": "Rollos de eucalipto",
            "cantidad": 28.0,
            "unidadMedida": "TN"
        }]
    }))
    .unwrap()
}

/// Record with every optional field populated.
pub fn remito_completo() -> Remito {
    serde_json::from_value(serde_json::json!({
        "id": "abc123",
        "cae": "71234567890123",
        "vencimientoCae": "2025-03-17",
        "puntoVenta": 13,
        "numeroRemito": 452,
        "fechaEmision": "2025-03-07",
        "codigoTipoRemito": 1,
        "cuitEmisor": "30693787285",
        "nombreEmisor": "Empresas Verdes Argentina S.A.",
        "cuitReceptor": "20123456783",
        "nombreReceptor": "Cliente SA",
        "domicilioReceptor": "Calle Falsa 123",
        "predio": "La Nueva",
        "rodal": "R-14",
        "domicilioFiscal": "Av. Siempreviva 742",
        "condicionIva": "RESPONSABLE INSCRIPTO",
        "tipoTransporte": 2,
        "cuitTransportista": "30709999994",
        "nombreTransportista": "Transporte Sur SRL",
        "dominioVehiculo": "AB 123 CD",
        "dominioAcoplado": "EF 456 GH",
        "conductor": "Juan Perez",
        "dniConductor": "28555444",
        "origenDomicilio": "Predio La Nueva",
        "origenLocalidad": "La Cruz",
        "origenProvincia": "Corrientes",
        "origenCodigoPostal": "3346",
        "destinoDomicilio": "Parque Industrial",
        "destinoLocalidad": "Zarate",
        "destinoProvincia": "Buenos Aires",
        "destinoCodigoPostal": "2800",
        "items": [{
            "codigo": "EUC-01",
            "descripcion": "Rollos de eucalipto",
            "cantidad": 28.0,
            "unidadMedida": "TN",
            "pesoNeto": 27850.5,
            "pesoBruto": 41200.0,
            "especie": "Eucalyptus grandis",
            "largo": 2.4,
            "categoria": "Primera",
            "m3Stereo": 38.75,
            "tara": 13349.5,
            "balanza": "B-02"
        }],
        "observaciones": "Entregar en porteria",
        "estado": "approved"
    }))
    .unwrap()
}
