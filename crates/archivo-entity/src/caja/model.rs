//! Caja entity model.

use archivo_core::types::CajaId;
use serde::{Deserialize, Serialize};

/// A physical storage box in the archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caja {
    /// Unique caja identifier.
    pub caja_id: CajaId,
    /// Status code, exactly three characters (e.g. `ACT`, `INA`).
    pub estado: String,
    /// Location where the caja is stored.
    pub ubicacion_id: String,
    /// Number of expedientes currently filed in this caja.
    ///
    /// Derived from the expediente records at read time, never stored
    /// authoritatively.
    pub expedientes_count: usize,
}

impl Caja {
    /// Check if the caja holds no expedientes.
    pub fn is_empty(&self) -> bool {
        self.expedientes_count == 0
    }
}

/// Data required to create a new caja.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NuevaCaja {
    /// Status code.
    pub estado: String,
    /// Location where the caja is stored.
    pub ubicacion_id: String,
}

/// Data accepted when replacing an existing caja.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CambioCaja {
    /// Identifier of the caja being replaced.
    pub caja_id: CajaId,
    /// New status code.
    pub estado: String,
    /// New location.
    pub ubicacion_id: String,
}
