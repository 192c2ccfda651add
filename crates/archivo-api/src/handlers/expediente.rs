//! Expediente CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use archivo_core::error::AppError;
use archivo_core::types::ExpedienteId;
use archivo_entity::{CambioExpediente, Expediente, NuevoExpediente};

use crate::dto::request::{CreateExpedienteRequest, UpdateExpedienteRequest};
use crate::state::AppState;

/// GET /expedientes
pub async fn list_expedientes(State(state): State<AppState>) -> Json<Vec<Expediente>> {
    Json(state.expediente_service.list().await)
}

/// GET /expedientes/{id}
pub async fn get_expediente(
    State(state): State<AppState>,
    Path(id): Path<ExpedienteId>,
) -> Result<Json<Expediente>, AppError> {
    Ok(Json(state.expediente_service.get(id).await?))
}

/// POST /expedientes
pub async fn create_expediente(
    State(state): State<AppState>,
    Json(req): Json<CreateExpedienteRequest>,
) -> Result<impl IntoResponse, AppError> {
    let expediente = state
        .expediente_service
        .create(NuevoExpediente {
            caja_id: req.caja_id,
            nombre_empleado: req.nombre_empleado,
            tipo_expediente: req.tipo_expediente,
        })
        .await?;

    let location = format!("/expedientes/{}", expediente.expediente_id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(expediente),
    ))
}

/// PUT /expedientes/{id}
pub async fn update_expediente(
    State(state): State<AppState>,
    Path(id): Path<ExpedienteId>,
    Json(req): Json<UpdateExpedienteRequest>,
) -> Result<Json<Expediente>, AppError> {
    let expediente = state
        .expediente_service
        .update(
            id,
            CambioExpediente {
                expediente_id: req.expediente_id,
                caja_id: req.caja_id,
                nombre_empleado: req.nombre_empleado,
                tipo_expediente: req.tipo_expediente,
            },
        )
        .await?;
    Ok(Json(expediente))
}

/// DELETE /expedientes/{id}
pub async fn delete_expediente(
    State(state): State<AppState>,
    Path(id): Path<ExpedienteId>,
) -> Result<StatusCode, AppError> {
    state.expediente_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
