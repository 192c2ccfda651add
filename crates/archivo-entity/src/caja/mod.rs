//! Caja domain entities.

pub mod model;

pub use model::{CambioCaja, Caja, NuevaCaja};
