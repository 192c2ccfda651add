//! Application builder: wires router, middleware, and state into an
//! Axum app, and runs the HTTP server.

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::middleware as axum_middleware;
use tower_http::trace::TraceLayer;

use archivo_core::config::AppConfig;
use archivo_core::config::app::CorsConfig;
use archivo_core::error::AppError;
use archivo_entity::Catalogo;
use archivo_service::{CajaService, ExpedienteService, OpcionesService};
use archivo_store::ArchiveStore;

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState, cors_config: &CorsConfig) -> Router {
    build_router(state)
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(
            crate::middleware::logging::request_logging,
        ))
        .layer(axum_middleware::from_fn(
            crate::middleware::request_id::propagate_request_id,
        ))
}

/// Constructs the shared application state from configuration.
pub async fn build_state(config: &AppConfig) -> Result<AppState, AppError> {
    let catalogo = Arc::new(Catalogo::new(&config.catalogo));

    let store = Arc::new(ArchiveStore::new());
    if config.store.seed_demo_data {
        archivo_store::seed_demo_data(&store).await?;
        tracing::info!("Demo fixture loaded into the store");
    }

    let caja_service = Arc::new(CajaService::new(Arc::clone(&store), Arc::clone(&catalogo)));
    let expediente_service = Arc::new(ExpedienteService::new(
        Arc::clone(&store),
        Arc::clone(&catalogo),
    ));
    let opciones_service = Arc::new(OpcionesService::new(Arc::clone(&catalogo)));

    Ok(AppState {
        caja_service,
        expediente_service,
        opciones_service,
        started_at: Instant::now(),
    })
}

/// Runs the Archivo server with the given configuration.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    let state = build_state(&config).await?;
    let app = build_app(state, &config.server.cors);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Archivo server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Archivo server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
