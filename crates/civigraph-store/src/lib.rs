//! # Civigraph Store
//!
//! In-memory fact store with set semantics, provenance tracking and
//! subject/relation/object indices for pattern lookup.

pub mod provenance;
pub mod store;

pub use provenance::Provenance;
pub use store::{FactStore, Matches, StoreStatistics, StoredFact};
