//! # archivo-store
//!
//! In-memory record store for Archivo. Cajas and expedientes live in two
//! ordered lists behind a single `tokio::sync::RwLock`, so every operation
//! observes and mutates a consistent snapshot. Identifiers are assigned
//! from monotonic counters and never reused, even after deletions.

pub mod seed;
pub mod store;

pub use seed::seed_demo_data;
pub use store::ArchiveStore;
