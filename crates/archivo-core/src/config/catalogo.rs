use serde::{Deserialize, Serialize};

/// Reference-data catalog configuration.
///
/// Defines the closed sets of values accepted for caja locations and
/// expediente types. Operators may override the defaults per deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogoConfig {
    /// Valid caja locations.
    #[serde(default = "default_ubicaciones")]
    pub ubicaciones: Vec<String>,
    /// Valid expediente types.
    #[serde(default = "default_tipos_expediente")]
    pub tipos_expediente: Vec<String>,
}

impl Default for CatalogoConfig {
    fn default() -> Self {
        Self {
            ubicaciones: default_ubicaciones(),
            tipos_expediente: default_tipos_expediente(),
        }
    }
}

fn default_ubicaciones() -> Vec<String> {
    ["Norte", "Sur", "Centro", "Este", "Oeste"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_tipos_expediente() -> Vec<String> {
    ["Histórico", "Día a Día", "Guarda"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
