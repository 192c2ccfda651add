//! In-memory store for cajas and expedientes.

use tokio::sync::RwLock;

use archivo_core::AppError;
use archivo_core::result::AppResult;
use archivo_core::types::{CajaId, ExpedienteId};
use archivo_entity::{Caja, CambioCaja, CambioExpediente, Expediente, NuevaCaja, NuevoExpediente};

/// Shared in-memory store of cajas and expedientes.
///
/// All records live behind a single lock, so cross-entity rules (the
/// delete guard and the cascade) are applied atomically. Expediente
/// counts are derived from the expediente list on every read rather
/// than maintained as stored state.
#[derive(Debug)]
pub struct ArchiveStore {
    inner: RwLock<Inner>,
}

#[derive(Debug)]
struct Inner {
    cajas: Vec<Caja>,
    expedientes: Vec<Expediente>,
    next_caja_id: u32,
    next_expediente_id: u32,
}

impl Inner {
    fn new() -> Self {
        Self {
            cajas: Vec::new(),
            expedientes: Vec::new(),
            next_caja_id: 1,
            next_expediente_id: 1,
        }
    }

    fn find_caja(&self, id: CajaId) -> Option<&Caja> {
        self.cajas.iter().find(|c| c.caja_id == id)
    }

    fn count_for(&self, caja_id: CajaId) -> usize {
        self.expedientes
            .iter()
            .filter(|e| e.caja_id == caja_id)
            .count()
    }

    /// Clone a caja with its expedientes count recomputed. Stored counts
    /// are never read back, only the derived value leaves the store.
    fn hydrated(&self, caja: &Caja) -> Caja {
        Caja {
            expedientes_count: self.count_for(caja.caja_id),
            ..caja.clone()
        }
    }
}

impl ArchiveStore {
    /// Create an empty store. Identifier counters start at 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::new()),
        }
    }

    // ── Cajas ────────────────────────────────────────────────────────

    /// List all cajas in insertion order.
    pub async fn list_cajas(&self) -> Vec<Caja> {
        let inner = self.inner.read().await;
        inner.cajas.iter().map(|c| inner.hydrated(c)).collect()
    }

    /// Fetch a single caja by id.
    pub async fn get_caja(&self, id: CajaId) -> AppResult<Caja> {
        let inner = self.inner.read().await;
        inner
            .find_caja(id)
            .map(|c| inner.hydrated(c))
            .ok_or_else(|| caja_not_found(id))
    }

    /// Create a caja with the next available id.
    pub async fn create_caja(&self, nueva: NuevaCaja) -> Caja {
        let mut inner = self.inner.write().await;
        let caja = Caja {
            caja_id: CajaId::new(inner.next_caja_id),
            estado: nueva.estado,
            ubicacion_id: nueva.ubicacion_id,
            expedientes_count: 0,
        };
        inner.next_caja_id += 1;
        inner.cajas.push(caja.clone());
        caja
    }

    /// Replace the mutable fields of an existing caja.
    pub async fn update_caja(&self, cambio: CambioCaja) -> AppResult<Caja> {
        let mut inner = self.inner.write().await;
        let pos = inner
            .cajas
            .iter()
            .position(|c| c.caja_id == cambio.caja_id)
            .ok_or_else(|| caja_not_found(cambio.caja_id))?;

        let caja = &mut inner.cajas[pos];
        caja.estado = cambio.estado;
        caja.ubicacion_id = cambio.ubicacion_id;

        let actualizada = inner.cajas[pos].clone();
        Ok(inner.hydrated(&actualizada))
    }

    /// Delete a caja.
    ///
    /// A caja that still contains expedientes cannot be deleted; the
    /// expedientes must be deleted or moved first.
    pub async fn delete_caja(&self, id: CajaId) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        if inner.find_caja(id).is_none() {
            return Err(caja_not_found(id));
        }
        if inner.count_for(id) > 0 {
            return Err(AppError::conflict(
                "No se puede eliminar una caja que contiene expedientes",
            ));
        }
        inner.cajas.retain(|c| c.caja_id != id);
        Ok(())
    }

    // ── Expedientes ──────────────────────────────────────────────────

    /// List all expedientes in insertion order.
    pub async fn list_expedientes(&self) -> Vec<Expediente> {
        self.inner.read().await.expedientes.clone()
    }

    /// List the expedientes filed in one caja.
    pub async fn list_expedientes_by_caja(&self, caja_id: CajaId) -> AppResult<Vec<Expediente>> {
        let inner = self.inner.read().await;
        if inner.find_caja(caja_id).is_none() {
            return Err(caja_not_found(caja_id));
        }
        Ok(inner
            .expedientes
            .iter()
            .filter(|e| e.caja_id == caja_id)
            .cloned()
            .collect())
    }

    /// Fetch a single expediente by id.
    pub async fn get_expediente(&self, id: ExpedienteId) -> AppResult<Expediente> {
        let inner = self.inner.read().await;
        inner
            .expedientes
            .iter()
            .find(|e| e.expediente_id == id)
            .cloned()
            .ok_or_else(|| expediente_not_found(id))
    }

    /// Create an expediente with the next available id.
    ///
    /// The target caja must exist.
    pub async fn create_expediente(&self, nuevo: NuevoExpediente) -> AppResult<Expediente> {
        let mut inner = self.inner.write().await;
        if inner.find_caja(nuevo.caja_id).is_none() {
            return Err(AppError::conflict("La caja especificada no existe"));
        }
        let expediente = Expediente {
            expediente_id: ExpedienteId::new(inner.next_expediente_id),
            caja_id: nuevo.caja_id,
            nombre_empleado: nuevo.nombre_empleado,
            tipo_expediente: nuevo.tipo_expediente,
        };
        inner.next_expediente_id += 1;
        inner.expedientes.push(expediente.clone());
        Ok(expediente)
    }

    /// Replace the mutable fields of an existing expediente.
    ///
    /// The target caja must exist, also when the expediente stays in the
    /// caja it is already filed in.
    pub async fn update_expediente(&self, cambio: CambioExpediente) -> AppResult<Expediente> {
        let mut inner = self.inner.write().await;
        let pos = inner
            .expedientes
            .iter()
            .position(|e| e.expediente_id == cambio.expediente_id)
            .ok_or_else(|| expediente_not_found(cambio.expediente_id))?;

        if inner.find_caja(cambio.caja_id).is_none() {
            return Err(AppError::conflict("La caja especificada no existe"));
        }

        let expediente = &mut inner.expedientes[pos];
        expediente.caja_id = cambio.caja_id;
        expediente.nombre_empleado = cambio.nombre_empleado;
        expediente.tipo_expediente = cambio.tipo_expediente;
        Ok(expediente.clone())
    }

    /// Delete an expediente.
    ///
    /// Removing the last expediente of a caja also removes the caja, in
    /// the same atomic step. Returns the id of the cascade-deleted caja,
    /// if any.
    pub async fn delete_expediente(&self, id: ExpedienteId) -> AppResult<Option<CajaId>> {
        let mut inner = self.inner.write().await;
        let pos = inner
            .expedientes
            .iter()
            .position(|e| e.expediente_id == id)
            .ok_or_else(|| expediente_not_found(id))?;

        let caja_id = inner.expedientes[pos].caja_id;
        inner.expedientes.remove(pos);

        if inner.count_for(caja_id) == 0 {
            inner.cajas.retain(|c| c.caja_id != caja_id);
            return Ok(Some(caja_id));
        }
        Ok(None)
    }

    /// Count the expedientes filed in one caja. Unknown cajas count zero.
    pub async fn count_expedientes_by_caja(&self, caja_id: CajaId) -> usize {
        self.inner.read().await.count_for(caja_id)
    }
}

impl Default for ArchiveStore {
    fn default() -> Self {
        Self::new()
    }
}

fn caja_not_found(id: CajaId) -> AppError {
    AppError::not_found(format!("Caja con ID {id} no encontrada"))
}

fn expediente_not_found(id: ExpedienteId) -> AppError {
    AppError::not_found(format!("Expediente con ID {id} no encontrado"))
}
