//! Reference-data catalog.
//!
//! Ubicaciones and tipos de expediente form closed value sets. They are
//! resolved from configuration once at startup and shared read-only for
//! the lifetime of the process.

use archivo_core::config::catalogo::CatalogoConfig;

/// Immutable catalog of accepted ubicaciones and tipos de expediente.
#[derive(Debug, Clone)]
pub struct Catalogo {
    ubicaciones: Vec<String>,
    tipos_expediente: Vec<String>,
}

impl Catalogo {
    /// Build the catalog from configuration.
    pub fn new(config: &CatalogoConfig) -> Self {
        Self {
            ubicaciones: config.ubicaciones.clone(),
            tipos_expediente: config.tipos_expediente.clone(),
        }
    }

    /// All accepted ubicaciones, in configuration order.
    pub fn ubicaciones(&self) -> &[String] {
        &self.ubicaciones
    }

    /// All accepted tipos de expediente, in configuration order.
    pub fn tipos_expediente(&self) -> &[String] {
        &self.tipos_expediente
    }

    /// Check if `valor` is an accepted ubicacion.
    pub fn is_valid_ubicacion(&self, valor: &str) -> bool {
        self.ubicaciones.iter().any(|u| u == valor)
    }

    /// Check if `valor` is an accepted tipo de expediente.
    pub fn is_valid_tipo_expediente(&self, valor: &str) -> bool {
        self.tipos_expediente.iter().any(|t| t == valor)
    }
}

impl Default for Catalogo {
    fn default() -> Self {
        Self::new(&CatalogoConfig::default())
    }
}
