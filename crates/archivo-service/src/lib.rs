//! # archivo-service
//!
//! Business logic service layer for Archivo. Each service applies the
//! field validation rules, delegates to the store, and logs the outcome
//! of mutating operations.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod caja;
pub mod expediente;
pub mod opciones;

pub use caja::{CajaRules, CajaService};
pub use expediente::{ExpedienteRules, ExpedienteService};
pub use opciones::OpcionesService;
