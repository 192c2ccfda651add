//! Maps domain `AppError` to HTTP responses.
//!
//! The `IntoResponse` impl itself lives next to `AppError` in
//! `archivo_core::error` (the orphan rule requires it in the defining
//! crate); this module re-exports the response body type.

pub use archivo_core::error::ApiErrorResponse;
