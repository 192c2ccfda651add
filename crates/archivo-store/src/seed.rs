//! Demo fixture for local development.

use archivo_core::result::AppResult;
use archivo_entity::{NuevaCaja, NuevoExpediente};

use crate::store::ArchiveStore;

/// Populate an empty store with a small demo fixture: three cajas and
/// four expedientes spread over them.
pub async fn seed_demo_data(store: &ArchiveStore) -> AppResult<()> {
    let caja1 = store
        .create_caja(NuevaCaja {
            estado: "ACT".to_string(),
            ubicacion_id: "Norte".to_string(),
        })
        .await;
    let caja2 = store
        .create_caja(NuevaCaja {
            estado: "INA".to_string(),
            ubicacion_id: "Sur".to_string(),
        })
        .await;
    let caja3 = store
        .create_caja(NuevaCaja {
            estado: "ACT".to_string(),
            ubicacion_id: "Centro".to_string(),
        })
        .await;

    store
        .create_expediente(NuevoExpediente {
            caja_id: caja1.caja_id,
            nombre_empleado: "Juan Pérez".to_string(),
            tipo_expediente: "Histórico".to_string(),
        })
        .await?;
    store
        .create_expediente(NuevoExpediente {
            caja_id: caja1.caja_id,
            nombre_empleado: "María García".to_string(),
            tipo_expediente: "Día a Día".to_string(),
        })
        .await?;
    store
        .create_expediente(NuevoExpediente {
            caja_id: caja2.caja_id,
            nombre_empleado: "Carlos López".to_string(),
            tipo_expediente: "Guarda".to_string(),
        })
        .await?;
    store
        .create_expediente(NuevoExpediente {
            caja_id: caja3.caja_id,
            nombre_empleado: "Ana Martínez".to_string(),
            tipo_expediente: "Histórico".to_string(),
        })
        .await?;

    Ok(())
}
