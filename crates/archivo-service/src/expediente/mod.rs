//! Expediente management services.

pub mod rules;
pub mod service;

pub use rules::ExpedienteRules;
pub use service::ExpedienteService;
