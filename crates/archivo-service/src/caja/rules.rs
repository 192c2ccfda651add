//! Field validation rules for caja payloads.

use std::sync::Arc;

use archivo_core::AppError;
use archivo_core::result::AppResult;
use archivo_entity::Catalogo;

/// Validates the caja fields shared by create and update payloads.
#[derive(Debug, Clone)]
pub struct CajaRules {
    /// Accepted catalog values.
    catalogo: Arc<Catalogo>,
}

impl CajaRules {
    /// Creates the rule set against a catalog.
    pub fn new(catalogo: Arc<Catalogo>) -> Self {
        Self { catalogo }
    }

    /// Check the estado and ubicacion fields.
    ///
    /// Rules run in a fixed order and the first violation is reported.
    pub fn validate(&self, estado: &str, ubicacion_id: &str) -> AppResult<()> {
        if estado.trim().is_empty() {
            return Err(AppError::validation("El estado es obligatorio"));
        }
        if estado.chars().count() != 3 {
            return Err(AppError::validation(
                "El estado debe tener exactamente 3 caracteres",
            ));
        }
        if ubicacion_id.trim().is_empty() {
            return Err(AppError::validation("La ubicación es obligatoria"));
        }
        if !self.catalogo.is_valid_ubicacion(ubicacion_id) {
            return Err(AppError::validation(format!(
                "Ubicación inválida. Valores permitidos: {}",
                self.catalogo.ubicaciones().join(", ")
            )));
        }
        Ok(())
    }
}
