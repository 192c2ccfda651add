//! Caja CRUD operations.

use std::sync::Arc;

use tracing::info;

use archivo_core::AppError;
use archivo_core::result::AppResult;
use archivo_core::types::CajaId;
use archivo_entity::{Caja, CambioCaja, Catalogo, Expediente, NuevaCaja};
use archivo_store::ArchiveStore;

use crate::caja::rules::CajaRules;

/// Manages caja CRUD operations.
#[derive(Debug, Clone)]
pub struct CajaService {
    /// Shared record store.
    store: Arc<ArchiveStore>,
    /// Field validation rules.
    rules: CajaRules,
}

impl CajaService {
    /// Creates a new caja service.
    pub fn new(store: Arc<ArchiveStore>, catalogo: Arc<Catalogo>) -> Self {
        Self {
            store,
            rules: CajaRules::new(catalogo),
        }
    }

    /// Lists all cajas.
    pub async fn list(&self) -> Vec<Caja> {
        self.store.list_cajas().await
    }

    /// Gets a caja by id.
    pub async fn get(&self, id: CajaId) -> AppResult<Caja> {
        self.store.get_caja(id).await
    }

    /// Lists the expedientes filed in one caja.
    pub async fn list_expedientes(&self, id: CajaId) -> AppResult<Vec<Expediente>> {
        self.store.list_expedientes_by_caja(id).await
    }

    /// Creates a new caja.
    pub async fn create(&self, nueva: NuevaCaja) -> AppResult<Caja> {
        self.rules.validate(&nueva.estado, &nueva.ubicacion_id)?;

        let caja = self.store.create_caja(nueva).await;
        info!(
            caja_id = %caja.caja_id,
            ubicacion = %caja.ubicacion_id,
            "Caja creada"
        );
        Ok(caja)
    }

    /// Replaces an existing caja.
    ///
    /// `id` comes from the request path and must match the id carried in
    /// the payload.
    pub async fn update(&self, id: CajaId, cambio: CambioCaja) -> AppResult<Caja> {
        if id != cambio.caja_id {
            return Err(AppError::validation(
                "El ID de la URL no coincide con el ID del cuerpo de la petición",
            ));
        }
        self.rules.validate(&cambio.estado, &cambio.ubicacion_id)?;

        let caja = self.store.update_caja(cambio).await?;
        info!(caja_id = %caja.caja_id, "Caja actualizada");
        Ok(caja)
    }

    /// Deletes a caja. Rejected while the caja still contains expedientes.
    pub async fn delete(&self, id: CajaId) -> AppResult<()> {
        self.store.delete_caja(id).await?;
        info!(caja_id = %id, "Caja eliminada");
        Ok(())
    }
}
