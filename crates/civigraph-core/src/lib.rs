//! # Civigraph Core
//!
//! Typed data model for the fact graph:
//! - `Resource`: IRI-like identifier for entities, classes and relations
//! - `Literal`: typed scalar values (string, boolean, decimal)
//! - `Term`: object position of a fact (resource or literal)
//! - `Fact`: immutable (subject, relation, object) triple
//! - `vocabulary`: reserved RDF/RDFS/OWL schema vocabulary

pub mod model;
pub mod vocabulary;

pub use model::{Fact, Literal, Resource, Term};
