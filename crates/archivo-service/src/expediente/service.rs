//! Expediente CRUD operations.

use std::sync::Arc;

use tracing::info;

use archivo_core::AppError;
use archivo_core::result::AppResult;
use archivo_core::types::ExpedienteId;
use archivo_entity::{CambioExpediente, Catalogo, Expediente, NuevoExpediente};
use archivo_store::ArchiveStore;

use crate::expediente::rules::ExpedienteRules;

/// Manages expediente CRUD operations.
#[derive(Debug, Clone)]
pub struct ExpedienteService {
    /// Shared record store.
    store: Arc<ArchiveStore>,
    /// Field validation rules.
    rules: ExpedienteRules,
}

impl ExpedienteService {
    /// Creates a new expediente service.
    pub fn new(store: Arc<ArchiveStore>, catalogo: Arc<Catalogo>) -> Self {
        Self {
            store,
            rules: ExpedienteRules::new(catalogo),
        }
    }

    /// Lists all expedientes.
    pub async fn list(&self) -> Vec<Expediente> {
        self.store.list_expedientes().await
    }

    /// Gets an expediente by id.
    pub async fn get(&self, id: ExpedienteId) -> AppResult<Expediente> {
        self.store.get_expediente(id).await
    }

    /// Creates a new expediente in an existing caja.
    pub async fn create(&self, nuevo: NuevoExpediente) -> AppResult<Expediente> {
        self.rules
            .validate(nuevo.caja_id, &nuevo.nombre_empleado, &nuevo.tipo_expediente)?;

        let expediente = self.store.create_expediente(nuevo).await?;
        info!(
            expediente_id = %expediente.expediente_id,
            caja_id = %expediente.caja_id,
            "Expediente creado"
        );
        Ok(expediente)
    }

    /// Replaces an existing expediente, possibly moving it to another caja.
    ///
    /// `id` comes from the request path and must match the id carried in
    /// the payload.
    pub async fn update(&self, id: ExpedienteId, cambio: CambioExpediente) -> AppResult<Expediente> {
        if id != cambio.expediente_id {
            return Err(AppError::validation(
                "El ID de la URL no coincide con el ID del cuerpo de la petición",
            ));
        }
        self.rules.validate(
            cambio.caja_id,
            &cambio.nombre_empleado,
            &cambio.tipo_expediente,
        )?;

        let expediente = self.store.update_expediente(cambio).await?;
        info!(
            expediente_id = %expediente.expediente_id,
            caja_id = %expediente.caja_id,
            "Expediente actualizado"
        );
        Ok(expediente)
    }

    /// Deletes an expediente.
    ///
    /// Removing the last expediente of a caja removes the caja as well.
    pub async fn delete(&self, id: ExpedienteId) -> AppResult<()> {
        let cascada = self.store.delete_expediente(id).await?;
        info!(expediente_id = %id, "Expediente eliminado");
        if let Some(caja_id) = cascada {
            info!(caja_id = %caja_id, "Caja vacía eliminada en cascada");
        }
        Ok(())
    }
}
