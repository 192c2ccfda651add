//! Route definitions for the Archivo HTTP API.
//!
//! All routes are organized by domain and mounted at the root.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(caja_routes())
        .merge(expediente_routes())
        .merge(opciones_routes())
        .merge(health_routes())
        .with_state(state)
}

/// Caja CRUD plus the per-caja expediente listing
fn caja_routes() -> Router<AppState> {
    Router::new()
        .route("/cajas", get(handlers::caja::list_cajas))
        .route("/cajas", post(handlers::caja::create_caja))
        .route("/cajas/{id}", get(handlers::caja::get_caja))
        .route("/cajas/{id}", put(handlers::caja::update_caja))
        .route("/cajas/{id}", delete(handlers::caja::delete_caja))
        .route(
            "/cajas/{id}/expedientes",
            get(handlers::caja::list_expedientes_de_caja),
        )
}

/// Expediente CRUD
fn expediente_routes() -> Router<AppState> {
    Router::new()
        .route("/expedientes", get(handlers::expediente::list_expedientes))
        .route("/expedientes", post(handlers::expediente::create_expediente))
        .route("/expedientes/{id}", get(handlers::expediente::get_expediente))
        .route("/expedientes/{id}", put(handlers::expediente::update_expediente))
        .route(
            "/expedientes/{id}",
            delete(handlers::expediente::delete_expediente),
        )
}

/// Catalog listings
fn opciones_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/opciones/ubicaciones",
            get(handlers::opciones::list_ubicaciones),
        )
        .route(
            "/opciones/tipos-expediente",
            get(handlers::opciones::list_tipos_expediente),
        )
}

/// Health endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
