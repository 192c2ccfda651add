//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use archivo_service::{CajaService, ExpedienteService, OpcionesService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All services are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Caja service.
    pub caja_service: Arc<CajaService>,
    /// Expediente service.
    pub expediente_service: Arc<ExpedienteService>,
    /// Opciones service.
    pub opciones_service: Arc<OpcionesService>,
    /// Server start time, for uptime reporting.
    pub started_at: Instant,
}
