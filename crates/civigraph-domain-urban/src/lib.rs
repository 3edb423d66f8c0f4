//! # Civigraph Urban-Conflict Domain
//!
//! Domain content for the urban-policy conflict knowledge base: the
//! schema axioms (agents, actions, spaces, instruments, consequences,
//! norms) and the case-study instances describing the social-zone
//! protection law versus the lot-merging law.
//!
//! This crate only *asserts* facts into a store; all reasoning, querying
//! and validation happens in the engine crates.

pub mod instances;
pub mod schema;
pub mod vocab;

pub use instances::populate_instances;
pub use schema::build_schema;

use civigraph_core::model::Resource;

/// Classes the consistency validator expects the schema to declare.
pub fn expected_classes() -> Vec<Resource> {
    vec![
        vocab::urban_agent(),
        vocab::public_authority(),
        vocab::community(),
        vocab::market_agent(),
        vocab::urban_action(),
        vocab::propositive_action(),
        vocab::impeditive_action(),
        vocab::policy_instrument(),
        vocab::conflict_space(),
        vocab::urban_harm(),
        vocab::urban_benefit(),
        vocab::norm(),
    ]
}
