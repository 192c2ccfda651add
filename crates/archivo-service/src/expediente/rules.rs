//! Field validation rules for expediente payloads.

use std::sync::Arc;

use archivo_core::AppError;
use archivo_core::result::AppResult;
use archivo_core::types::CajaId;
use archivo_entity::Catalogo;

/// Maximum accepted length of an employee name, in characters.
const NOMBRE_EMPLEADO_MAX: usize = 100;

/// Validates the expediente fields shared by create and update payloads.
#[derive(Debug, Clone)]
pub struct ExpedienteRules {
    /// Accepted catalog values.
    catalogo: Arc<Catalogo>,
}

impl ExpedienteRules {
    /// Creates the rule set against a catalog.
    pub fn new(catalogo: Arc<Catalogo>) -> Self {
        Self { catalogo }
    }

    /// Check the caja reference, employee name, and tipo fields.
    ///
    /// Rules run in a fixed order and the first violation is reported.
    /// Whether the referenced caja actually exists is the store's call,
    /// not a field rule.
    pub fn validate(
        &self,
        caja_id: CajaId,
        nombre_empleado: &str,
        tipo_expediente: &str,
    ) -> AppResult<()> {
        if caja_id.value() == 0 {
            return Err(AppError::validation("El ID de la caja es obligatorio"));
        }
        if nombre_empleado.trim().is_empty() {
            return Err(AppError::validation("El nombre del empleado es obligatorio"));
        }
        if nombre_empleado.chars().count() > NOMBRE_EMPLEADO_MAX {
            return Err(AppError::validation(
                "El nombre del empleado no puede exceder 100 caracteres",
            ));
        }
        if tipo_expediente.trim().is_empty() {
            return Err(AppError::validation("El tipo de expediente es obligatorio"));
        }
        if !self.catalogo.is_valid_tipo_expediente(tipo_expediente) {
            return Err(AppError::validation(format!(
                "Tipo de expediente inválido. Valores permitidos: {}",
                self.catalogo.tipos_expediente().join(", ")
            )));
        }
        Ok(())
    }
}
