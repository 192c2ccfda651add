//! # archivo-api
//!
//! HTTP API layer for Archivo built on Axum.
//!
//! Provides the REST endpoints, middleware (CORS, logging, request ids),
//! DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;
