//! Response DTOs.
//!
//! Entity endpoints serialize the domain models directly; only the
//! health endpoint has a dedicated response shape.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Uptime.
    pub uptime_seconds: u64,
}
