//! # archivo-entity
//!
//! Domain entity models for Archivo. Every struct in this crate represents
//! a stored record or a domain value object. All entities derive `Debug`,
//! `Clone`, `Serialize`, and `Deserialize`.

pub mod caja;
pub mod catalogo;
pub mod expediente;

pub use caja::{CambioCaja, Caja, NuevaCaja};
pub use catalogo::Catalogo;
pub use expediente::{CambioExpediente, Expediente, NuevoExpediente};
