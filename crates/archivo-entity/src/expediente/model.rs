//! Expediente entity model.

use archivo_core::types::{CajaId, ExpedienteId};
use serde::{Deserialize, Serialize};

/// An employee document folder filed inside a caja.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expediente {
    /// Unique expediente identifier.
    pub expediente_id: ExpedienteId,
    /// The caja this expediente is filed in.
    pub caja_id: CajaId,
    /// Name of the employee the expediente belongs to.
    pub nombre_empleado: String,
    /// Expediente type (catalog value).
    pub tipo_expediente: String,
}

/// Data required to create a new expediente.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NuevoExpediente {
    /// The caja to file the expediente in.
    pub caja_id: CajaId,
    /// Employee name.
    pub nombre_empleado: String,
    /// Expediente type.
    pub tipo_expediente: String,
}

/// Data accepted when replacing an existing expediente.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CambioExpediente {
    /// Identifier of the expediente being replaced.
    pub expediente_id: ExpedienteId,
    /// Target caja, possibly different from the current one.
    pub caja_id: CajaId,
    /// New employee name.
    pub nombre_empleado: String,
    /// New expediente type.
    pub tipo_expediente: String,
}
