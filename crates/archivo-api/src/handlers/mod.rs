//! Route handlers organized by domain.

pub mod caja;
pub mod expediente;
pub mod health;
pub mod opciones;
