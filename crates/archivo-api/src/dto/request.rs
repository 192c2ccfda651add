//! Request DTOs.
//!
//! Missing or mistyped fields are rejected by the `Json` extractor
//! before a handler runs; the field rules of the service layer judge
//! the content afterwards.

use serde::{Deserialize, Serialize};

use archivo_core::types::{CajaId, ExpedienteId};

/// Create caja request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCajaRequest {
    /// Status code.
    pub estado: String,
    /// Location.
    pub ubicacion_id: String,
}

/// Update caja request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCajaRequest {
    /// Caja id, must match the path.
    pub caja_id: CajaId,
    /// Status code.
    pub estado: String,
    /// Location.
    pub ubicacion_id: String,
}

/// Create expediente request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExpedienteRequest {
    /// Target caja.
    pub caja_id: CajaId,
    /// Employee name.
    pub nombre_empleado: String,
    /// Expediente type.
    pub tipo_expediente: String,
}

/// Update expediente request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateExpedienteRequest {
    /// Expediente id, must match the path.
    pub expediente_id: ExpedienteId,
    /// Target caja.
    pub caja_id: CajaId,
    /// Employee name.
    pub nombre_empleado: String,
    /// Expediente type.
    pub tipo_expediente: String,
}
