//! Caja management services.

pub mod rules;
pub mod service;

pub use rules::CajaRules;
pub use service::CajaService;
