//! Catalog option handlers.

use axum::Json;
use axum::extract::State;

use crate::state::AppState;

/// GET /opciones/ubicaciones
pub async fn list_ubicaciones(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.opciones_service.ubicaciones())
}

/// GET /opciones/tipos-expediente
pub async fn list_tipos_expediente(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.opciones_service.tipos_expediente())
}
