use std::env;

/// Issuer identity printed in the document header.
///
/// Values come from `EMPRESA_*` environment variables with hard defaults,
/// matching the deployment contract of the surrounding application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Empresa {
    pub nombre: String,
    pub direccion: String,
    pub localidad: String,
    pub cuit: String,
    pub ingresos_brutos: String,
    pub fecha_inicio: String,
    pub condicion_iva: String,
    pub codigo: String,
}

impl Default for Empresa {
    fn default() -> Self {
        Self {
            nombre: "Empresas Verdes Argentina S.A.".to_string(),
            direccion: "2DA. SECCION - PREDIO LA NUEVA".to_string(),
            localidad: "3346 LA CRUZ - CORRIENTES".to_string(),
            cuit: "30-69378728-5".to_string(),
            ingresos_brutos: "30-69378728-5".to_string(),
            fecha_inicio: "NOVIEMBRE 1997".to_string(),
            condicion_iva: "IVA RESPONSABLE INSCRIPTO".to_string(),
            codigo: "091".to_string(),
        }
    }
}

impl Empresa {
    /// Builds the profile from `EMPRESA_*` environment variables, falling
    /// back to the defaults for any variable that is unset.
    pub fn from_env() -> Self {
        let defaults = Empresa::default();
        Self {
            nombre: env_or("EMPRESA_NOMBRE", defaults.nombre),
            direccion: env_or("EMPRESA_DIRECCION", defaults.direccion),
            localidad: env_or("EMPRESA_LOCALIDAD", defaults.localidad),
            cuit: env_or("EMPRESA_CUIT", defaults.cuit),
            ingresos_brutos: env_or("EMPRESA_INGRESOS_BRUTOS", defaults.ingresos_brutos),
            fecha_inicio: env_or("EMPRESA_FECHA_INICIO", defaults.fecha_inicio),
            condicion_iva: env_or("EMPRESA_CONDICION_IVA", defaults.condicion_iva),
            codigo: env_or("EMPRESA_CODIGO", defaults.codigo),
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}
