//! # Civigraph - Knowledge-Graph Engine for Urban Policy Conflicts
//!
//! Civigraph is an in-memory knowledge-graph stack for analyzing
//! contradictions in urban policy: a provenance-tracking fact store, a
//! schema registry, a forward-chaining inference engine, a pattern
//! query evaluator with analytical templates, and a consistency
//! validator, bundled with the urban-conflict case-study ontology.
//!
//! ## Quick Start
//!
//! ```
//! use civigraph::prelude::*;
//!
//! let mut pipeline = Pipeline::urban_conflict();
//! let stats = pipeline.compute_closure().expect("closure within bounds");
//! assert!(stats.inferred() > 0);
//!
//! let report = pipeline.validate(&civigraph::domain_urban::expected_classes());
//! assert!(report.is_valid());
//!
//! let conflicts = civigraph::query::templates::normative_conflicts(pipeline.store());
//! assert_eq!(conflicts.len(), 1);
//! ```
//!
//! ## Architecture
//!
//! - **`civigraph-core`**: fact/term data model and reserved vocabulary
//! - **`civigraph-store`**: indexed fact store with provenance tracking
//! - **`civigraph-schema`**: class hierarchy and relation metadata
//! - **`civigraph-reasoner`**: forward-chaining closure computation
//! - **`civigraph-query`**: pattern queries and analytical templates
//! - **`civigraph-validate`**: consistency validation and reporting
//! - **`civigraph-domain-urban`**: the urban-conflict ontology and case study
//! - **`civigraph-io`**: JSON snapshot persistence
//! - **`civigraph-cli`**: command-line pipeline driver

pub use civigraph_core as core;
pub use civigraph_domain_urban as domain_urban;
pub use civigraph_io as io;
pub use civigraph_query as query;
pub use civigraph_reasoner as reasoner;
pub use civigraph_schema as schema;
pub use civigraph_store as store;
pub use civigraph_validate as validate;

// Convenience re-exports for common types
pub use civigraph_core::model::{Fact, Literal, Resource, Term};
pub use civigraph_reasoner::{ClosureStats, InferenceEngine, ReasonerConfig, ReasonerError};
pub use civigraph_schema::SchemaRegistry;
pub use civigraph_store::{FactStore, Provenance};
pub use civigraph_validate::{ValidationReport, Validator};

// Commonly used external dependencies
pub use anyhow;
pub use serde;
pub use serde_json;

/// Current version of Civigraph
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
///
/// ```
/// use civigraph::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Pipeline;
    pub use civigraph_core::model::{Fact, Literal, Resource, Term};
    pub use civigraph_core::vocabulary;
    pub use civigraph_query::{pattern, res, var, Constraint, Plan, QueryEngine};
    pub use civigraph_reasoner::{ClosureStats, InferenceEngine, ReasonerConfig};
    pub use civigraph_schema::SchemaRegistry;
    pub use civigraph_store::{FactStore, Provenance};
    pub use civigraph_validate::{ValidationReport, Validator};
}

/// Sequential pipeline over one fact store: populate, close, validate,
/// query. The stages are methods so the order is explicit at the call
/// site; the closure is always computed against a registry scanned from
/// the current store contents.
pub struct Pipeline {
    store: FactStore,
    config: ReasonerConfig,
}

impl Pipeline {
    /// Pipeline over an externally populated store.
    pub fn from_store(store: FactStore) -> Self {
        Pipeline {
            store,
            config: ReasonerConfig::default(),
        }
    }

    /// Pipeline preloaded with the urban-conflict schema and case study.
    pub fn urban_conflict() -> Self {
        let mut store = FactStore::new();
        civigraph_domain_urban::build_schema(&mut store);
        civigraph_domain_urban::populate_instances(&mut store);
        Pipeline::from_store(store)
    }

    pub fn with_config(mut self, config: ReasonerConfig) -> Self {
        self.config = config;
        self
    }

    /// Scan the current store for schema axioms.
    pub fn schema(&self) -> SchemaRegistry {
        SchemaRegistry::from_store(&self.store)
    }

    /// Compute the deductive closure in place.
    pub fn compute_closure(&mut self) -> Result<ClosureStats, ReasonerError> {
        let schema = self.schema();
        InferenceEngine::with_config(&schema, self.config.clone())
            .compute_closure(&mut self.store)
    }

    /// Drop inferred facts and close again, e.g. after editing axioms.
    pub fn recompute_closure(&mut self) -> Result<ClosureStats, ReasonerError> {
        self.store.retain_asserted();
        self.compute_closure()
    }

    /// Validate against the caller's expected-class checklist.
    pub fn validate(&self, expected_classes: &[Resource]) -> ValidationReport {
        let schema = self.schema();
        Validator::new(&self.store, &schema).validate(expected_classes)
    }

    pub fn store(&self) -> &FactStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut FactStore {
        &mut self.store
    }

    pub fn into_store(self) -> FactStore {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_constant_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn empty_pipeline_closure_is_a_no_op() {
        let mut pipeline = Pipeline::from_store(FactStore::new());
        let stats = pipeline.compute_closure().unwrap();
        assert_eq!(stats.inferred(), 0);
        assert!(pipeline.store().is_empty());
    }
}
