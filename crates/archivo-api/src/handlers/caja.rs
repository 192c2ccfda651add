//! Caja CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use archivo_core::error::AppError;
use archivo_core::types::CajaId;
use archivo_entity::{CambioCaja, Caja, Expediente, NuevaCaja};

use crate::dto::request::{CreateCajaRequest, UpdateCajaRequest};
use crate::state::AppState;

/// GET /cajas
pub async fn list_cajas(State(state): State<AppState>) -> Json<Vec<Caja>> {
    Json(state.caja_service.list().await)
}

/// GET /cajas/{id}
pub async fn get_caja(
    State(state): State<AppState>,
    Path(id): Path<CajaId>,
) -> Result<Json<Caja>, AppError> {
    Ok(Json(state.caja_service.get(id).await?))
}

/// GET /cajas/{id}/expedientes
pub async fn list_expedientes_de_caja(
    State(state): State<AppState>,
    Path(id): Path<CajaId>,
) -> Result<Json<Vec<Expediente>>, AppError> {
    Ok(Json(state.caja_service.list_expedientes(id).await?))
}

/// POST /cajas
pub async fn create_caja(
    State(state): State<AppState>,
    Json(req): Json<CreateCajaRequest>,
) -> Result<impl IntoResponse, AppError> {
    let caja = state
        .caja_service
        .create(NuevaCaja {
            estado: req.estado,
            ubicacion_id: req.ubicacion_id,
        })
        .await?;

    let location = format!("/cajas/{}", caja.caja_id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(caja),
    ))
}

/// PUT /cajas/{id}
pub async fn update_caja(
    State(state): State<AppState>,
    Path(id): Path<CajaId>,
    Json(req): Json<UpdateCajaRequest>,
) -> Result<Json<Caja>, AppError> {
    let caja = state
        .caja_service
        .update(
            id,
            CambioCaja {
                caja_id: req.caja_id,
                estado: req.estado,
                ubicacion_id: req.ubicacion_id,
            },
        )
        .await?;
    Ok(Json(caja))
}

/// DELETE /cajas/{id}
pub async fn delete_caja(
    State(state): State<AppState>,
    Path(id): Path<CajaId>,
) -> Result<StatusCode, AppError> {
    state.caja_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
