use serde::{Deserialize, Serialize};

/// One delivery-note record as supplied by the caller.
///
/// Field names serialize in camelCase to match the wire format consumed by
/// the storage layer and the remote render service. Optional fields absent
/// from the record are printed as a fixed placeholder, never omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Remito {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Authorization code, present only once the note is approved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cae: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vencimiento_cae: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero_remito: Option<u32>,
    pub punto_venta: u32,
    /// ISO date string (`YYYY-MM-DD`, optionally with a time suffix).
    pub fecha_emision: String,
    pub codigo_tipo_remito: u8,

    // Emisor
    pub cuit_emisor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre_emisor: Option<String>,

    // Receptor
    pub cuit_receptor: String,
    pub nombre_receptor: String,
    pub domicilio_receptor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rodal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domicilio_fiscal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condicion_iva: Option<String>,

    // Transporte
    pub tipo_transporte: TipoTransporte,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuit_transportista: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre_transportista: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dominio_vehiculo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dominio_acoplado: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conductor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dni_conductor: Option<String>,

    // Origen y destino
    pub origen_domicilio: String,
    pub origen_localidad: String,
    pub origen_provincia: String,
    pub origen_codigo_postal: String,
    pub destino_domicilio: String,
    pub destino_localidad: String,
    pub destino_provincia: String,
    pub destino_codigo_postal: String,

    /// Line items; the fixed single-page layout prints the first one.
    pub items: Vec<RemitoItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estado: Option<Estado>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_creacion: Option<String>,
}

/// One line of goods within a remito.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemitoItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub codigo: String,
    pub descripcion: String,
    pub cantidad: f64,
    /// KG, UN, LT, MT, M2, M3.
    pub unidad_medida: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peso_neto: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peso_bruto: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub especie: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub largo: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub m3_stereo: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tara: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balanza: Option<String>,
}

/// Transport mode. Encoded on the wire as `1` (own fleet) or `2`
/// (third-party carrier); unknown codes fall back to own fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum TipoTransporte {
    Propio,
    Tercero,
}

impl From<u8> for TipoTransporte {
    fn from(code: u8) -> Self {
        match code {
            2 => TipoTransporte::Tercero,
            _ => TipoTransporte::Propio,
        }
    }
}

impl From<TipoTransporte> for u8 {
    fn from(tipo: TipoTransporte) -> Self {
        match tipo {
            TipoTransporte::Propio => 1,
            TipoTransporte::Tercero => 2,
        }
    }
}

/// Lifecycle state of a remito; informational only for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Estado {
    Draft,
    Pending,
    Approved,
    Rejected,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json() -> serde_json::Value {
        serde_json::json!({
            "puntoVenta": 13,
            "fechaEmision": "2025-03-07",
            "codigoTipoRemito": 1,
            "cuitEmisor": "30693787285",
            "cuitReceptor": "20123456783",
            "nombreReceptor": "Cliente SA",
            "domicilioReceptor": "Calle Falsa 123",
            "tipoTransporte": 2,
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
        })
    }

    #[test]
    fn deserializes_minimal_record() {
        let remito: Remito = serde_json::from_value(minimal_json()).unwrap();
        assert_eq!(remito.punto_venta, 13);
        assert_eq!(remito.numero_remito, None);
        assert_eq!(remito.tipo_transporte, TipoTransporte::Tercero);
        assert_eq!(remito.items.len(), 1);
        assert!(remito.items[0].peso_neto.is_none());
    }

    #[test]
    fn unknown_transport_code_falls_back_to_propio() {
        let mut json = minimal_json();
        json["tipoTransporte"] = serde_json::json!(9);
        let remito: Remito = serde_json::from_value(json).unwrap();
        assert_eq!(remito.tipo_transporte, TipoTransporte::Propio);
    }

    #[test]
    fn serializes_camel_case_without_absent_fields() {
        let remito: Remito = serde_json::from_value(minimal_json()).unwrap();
        let value = serde_json::to_value(&remito).unwrap();
        assert_eq!(value["puntoVenta"], 13);
        assert_eq!(value["tipoTransporte"], 2);
        assert!(value.get("numeroRemito").is_none());
        assert!(value.get("cae").is_none());
    }

    #[test]
    fn estado_round_trips_lowercase() {
        let estado: Estado = serde_json::from_str("\"approved\"").unwrap();
        assert_eq!(estado, Estado::Approved);
        assert_eq!(serde_json::to_string(&estado).unwrap(), "\"approved\"");
    }
}
