//! Expediente domain entities.

pub mod model;

pub use model::{CambioExpediente, Expediente, NuevoExpediente};
