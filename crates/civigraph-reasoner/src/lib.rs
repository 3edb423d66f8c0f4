//! # Civigraph Inference Engine
//!
//! Forward-chaining closure over a fact store, driven by schema metadata:
//! - R1: subclass propagation (typed under C ⇒ typed under every ancestor of C)
//! - R2: sub-relation propagation ((x,p,y) and p ⊑ q ⇒ (x,q,y))
//! - R3: symmetric closure ((x,p,y) and p symmetric ⇒ (y,p,x))
//! - R4: transitive closure ((x,p,y), (y,p,z) and p transitive ⇒ (x,p,z))
//! - R5: domain/range typing ((x,p,y) ⇒ x typed domain(p), y typed range(p))
//!
//! The engine runs a semi-naive worklist fixpoint: every fact is used as a
//! triggering fact exactly once, and only facts the store has not seen
//! before re-enter the worklist. The set of derivable facts is bounded by
//! the finite vocabulary already in the store, so the worklist drains in
//! finitely many steps; the configurable iteration cap exists to pin that
//! bound in tests, not to be reached.
//!
//! Missing schema metadata never raises: a rule without its precondition
//! simply does not fire, which narrows what can be inferred.

use civigraph_core::model::{Fact, Term};
use civigraph_core::vocabulary;
use civigraph_schema::SchemaRegistry;
use civigraph_store::{FactStore, Provenance};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};

/// Closure rule names, used as provenance tags on inferred facts.
pub mod rules {
    pub const SUBCLASS: &str = "subclass-propagation";
    pub const SUBRELATION: &str = "subrelation-propagation";
    pub const SYMMETRIC: &str = "symmetric-closure";
    pub const TRANSITIVE: &str = "transitive-closure";
    pub const DOMAIN: &str = "domain-typing";
    pub const RANGE: &str = "range-typing";
}

/// Inference configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReasonerConfig {
    /// Worklist-pop cap. Termination is guaranteed by the finite fact
    /// universe; the cap turns a would-be bug into a reported error.
    pub max_iterations: usize,
}

impl Default for ReasonerConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1_000_000,
        }
    }
}

/// Inference error
#[derive(thiserror::Error, Debug)]
pub enum ReasonerError {
    #[error("closure exceeded the iteration cap of {0} worklist pops")]
    MaxIterationsExceeded(usize),
}

/// Summary of one closure run.
#[derive(Debug, Clone, Serialize)]
pub struct ClosureStats {
    pub facts_before: usize,
    pub facts_after: usize,
    /// Worklist pops performed.
    pub iterations: usize,
    /// Derived-and-new fact counts per rule.
    pub fires_by_rule: BTreeMap<&'static str, usize>,
}

impl ClosureStats {
    pub fn inferred(&self) -> usize {
        self.facts_after - self.facts_before
    }
}

/// Forward-chaining inference engine over an immutable schema registry.
pub struct InferenceEngine<'a> {
    schema: &'a SchemaRegistry,
    config: ReasonerConfig,
}

impl<'a> InferenceEngine<'a> {
    pub fn new(schema: &'a SchemaRegistry) -> Self {
        Self {
            schema,
            config: ReasonerConfig::default(),
        }
    }

    pub fn with_config(schema: &'a SchemaRegistry, config: ReasonerConfig) -> Self {
        Self { schema, config }
    }

    /// Compute the deductive closure of `store` in place.
    ///
    /// Every fact already present seeds the worklist, so re-running on a
    /// closed store derives nothing new (idempotence). Derived facts are
    /// tagged [`Provenance::Inferred`] with the producing rule.
    pub fn compute_closure(&self, store: &mut FactStore) -> Result<ClosureStats, ReasonerError> {
        let facts_before = store.len();
        let mut worklist: VecDeque<Fact> = store.facts().cloned().collect();
        let mut iterations = 0usize;
        let mut fires_by_rule: BTreeMap<&'static str, usize> = BTreeMap::new();

        while let Some(fact) = worklist.pop_front() {
            iterations += 1;
            if iterations > self.config.max_iterations {
                return Err(ReasonerError::MaxIterationsExceeded(
                    self.config.max_iterations,
                ));
            }

            let derived = self.fire_rules(&fact, store);
            for (new_fact, rule) in derived {
                if store.add(new_fact.clone(), Provenance::inferred(rule)) {
                    *fires_by_rule.entry(rule).or_insert(0) += 1;
                    worklist.push_back(new_fact);
                }
            }
        }

        let stats = ClosureStats {
            facts_before,
            facts_after: store.len(),
            iterations,
            fires_by_rule,
        };
        tracing::info!(
            facts_before = stats.facts_before,
            facts_after = stats.facts_after,
            iterations = stats.iterations,
            "closure complete"
        );
        Ok(stats)
    }

    /// Evaluate all five rules with `fact` as the triggering fact.
    fn fire_rules(&self, fact: &Fact, store: &FactStore) -> Vec<(Fact, &'static str)> {
        let mut derived = Vec::new();

        // R1: subclass propagation on type facts.
        if fact.relation.as_str() == vocabulary::RDF_TYPE {
            if let Some(class) = fact.object.as_resource() {
                for ancestor in self.schema.ancestors(class) {
                    derived.push((
                        Fact::new(fact.subject.clone(), vocabulary::rdf_type(), ancestor),
                        rules::SUBCLASS,
                    ));
                }
            }
            return derived;
        }

        let chars = self.schema.characteristics(&fact.relation);

        // R2: sub-relation propagation.
        if let Some(parent) = &chars.parent {
            derived.push((
                Fact::new(
                    fact.subject.clone(),
                    parent.clone(),
                    fact.object.clone(),
                ),
                rules::SUBRELATION,
            ));
        }

        // R3: symmetric closure. Only resource objects can become subjects.
        if chars.symmetric {
            if let Some(object) = fact.object.as_resource() {
                derived.push((
                    Fact::new(
                        object.clone(),
                        fact.relation.clone(),
                        fact.subject.clone(),
                    ),
                    rules::SYMMETRIC,
                ));
            }
        }

        // R4: transitive closure. The triggering fact may be either hop
        // of a chain, so join on both sides.
        if chars.transitive {
            if let Some(object) = fact.object.as_resource() {
                // (x,p,y) + existing (y,p,z) => (x,p,z)
                for onward in store.matching(Some(object), Some(&fact.relation), None) {
                    derived.push((
                        Fact::new(
                            fact.subject.clone(),
                            fact.relation.clone(),
                            onward.object.clone(),
                        ),
                        rules::TRANSITIVE,
                    ));
                }
            }
            // existing (w,p,x) + (x,p,y) => (w,p,y)
            let as_object = Term::Resource(fact.subject.clone());
            for inbound in store.matching(None, Some(&fact.relation), Some(&as_object)) {
                derived.push((
                    Fact::new(
                        inbound.subject.clone(),
                        fact.relation.clone(),
                        fact.object.clone(),
                    ),
                    rules::TRANSITIVE,
                ));
            }
        }

        // R5: domain/range typing.
        if let Some(domain) = &chars.domain {
            derived.push((
                Fact::new(
                    fact.subject.clone(),
                    vocabulary::rdf_type(),
                    domain.clone(),
                ),
                rules::DOMAIN,
            ));
        }
        if let Some(range) = &chars.range {
            if !vocabulary::is_datatype(range) {
                if let Some(object) = fact.object.as_resource() {
                    derived.push((
                        Fact::new(object.clone(), vocabulary::rdf_type(), range.clone()),
                        rules::RANGE,
                    ));
                }
            }
        }

        derived
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civigraph_core::model::Resource;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn r(name: &str) -> Resource {
        Resource::new(format!("http://example.org/{name}"))
    }

    fn fact(s: &str, p: &str, o: &str) -> Fact {
        Fact::new(r(s), r(p), r(o))
    }

    fn typed(s: &str, class: &str) -> Fact {
        Fact::new(r(s), vocabulary::rdf_type(), r(class))
    }

    fn close(store: &mut FactStore) -> ClosureStats {
        let schema = SchemaRegistry::from_store(store);
        InferenceEngine::new(&schema).compute_closure(store).unwrap()
    }

    #[test]
    fn subclass_propagation_reaches_transitive_ancestors() {
        // Scenario 1: Executive < PublicAuthority < UrbanAgent.
        let mut store = FactStore::new();
        store.assert_fact(Fact::new(
            r("Executive"),
            vocabulary::rdfs_subclass_of(),
            r("PublicAuthority"),
        ));
        store.assert_fact(Fact::new(
            r("PublicAuthority"),
            vocabulary::rdfs_subclass_of(),
            r("UrbanAgent"),
        ));
        store.assert_fact(typed("CityHall", "Executive"));

        close(&mut store);

        assert!(store.contains(&typed("CityHall", "PublicAuthority")));
        assert!(store.contains(&typed("CityHall", "UrbanAgent")));
    }

    #[test]
    fn symmetric_closure_adds_reverse() {
        // Scenario 2: conflictsWith is symmetric.
        let mut store = FactStore::new();
        store.assert_fact(Fact::new(
            r("conflictsWith"),
            vocabulary::rdf_type(),
            vocabulary::owl_symmetric_property(),
        ));
        store.assert_fact(fact("LawA", "conflictsWith", "LawB"));

        close(&mut store);

        assert!(store.contains(&fact("LawB", "conflictsWith", "LawA")));
    }

    #[test]
    fn transitive_closure_collapses_chains() {
        // Scenario 3: overlapsWith is transitive.
        let mut store = FactStore::new();
        store.assert_fact(Fact::new(
            r("overlapsWith"),
            vocabulary::rdf_type(),
            vocabulary::owl_transitive_property(),
        ));
        store.assert_fact(fact("X", "overlapsWith", "Y"));
        store.assert_fact(fact("Y", "overlapsWith", "Z"));

        close(&mut store);

        assert!(store.contains(&fact("X", "overlapsWith", "Z")));
    }

    #[test]
    fn transitive_join_works_in_both_directions() {
        // The second hop arrives after the first has already been
        // consumed from the worklist, exercising the inbound join.
        let mut store = FactStore::new();
        store.assert_fact(Fact::new(
            r("overlapsWith"),
            vocabulary::rdf_type(),
            vocabulary::owl_transitive_property(),
        ));
        store.assert_fact(fact("A", "overlapsWith", "B"));
        store.assert_fact(fact("B", "overlapsWith", "C"));
        store.assert_fact(fact("C", "overlapsWith", "D"));

        close(&mut store);

        assert!(store.contains(&fact("A", "overlapsWith", "C")));
        assert!(store.contains(&fact("B", "overlapsWith", "D")));
        assert!(store.contains(&fact("A", "overlapsWith", "D")));
    }

    #[test]
    fn symmetric_and_transitive_combine() {
        let mut store = FactStore::new();
        store.assert_fact(Fact::new(
            r("coincidesWith"),
            vocabulary::rdf_type(),
            vocabulary::owl_symmetric_property(),
        ));
        store.assert_fact(Fact::new(
            r("coincidesWith"),
            vocabulary::rdf_type(),
            vocabulary::owl_transitive_property(),
        ));
        store.assert_fact(fact("IEP", "coincidesWith", "ZEPH"));
        store.assert_fact(fact("ZEPH", "coincidesWith", "Recentro"));

        close(&mut store);

        assert!(store.contains(&fact("IEP", "coincidesWith", "Recentro")));
        assert!(store.contains(&fact("Recentro", "coincidesWith", "IEP")));
        assert!(store.contains(&fact("ZEPH", "coincidesWith", "IEP")));
    }

    #[test]
    fn subrelation_propagates_to_parent() {
        let mut store = FactStore::new();
        store.assert_fact(Fact::new(
            r("directlyCauses"),
            vocabulary::rdfs_subproperty_of(),
            r("produces"),
        ));
        store.assert_fact(fact("Veto", "directlyCauses", "Displacement"));

        close(&mut store);

        assert!(store.contains(&fact("Veto", "produces", "Displacement")));
    }

    #[test]
    fn domain_and_range_typing() {
        let mut store = FactStore::new();
        store.assert_fact(Fact::new(
            r("performs"),
            vocabulary::rdfs_domain(),
            r("Agent"),
        ));
        store.assert_fact(Fact::new(
            r("performs"),
            vocabulary::rdfs_range(),
            r("Action"),
        ));
        store.assert_fact(fact("CityHall", "performs", "ApproveLaw"));

        close(&mut store);

        assert!(store.contains(&typed("CityHall", "Agent")));
        assert!(store.contains(&typed("ApproveLaw", "Action")));
    }

    #[test]
    fn datatype_range_does_not_type_literals() {
        use civigraph_core::model::Literal;

        let mut store = FactStore::new();
        store.assert_fact(Fact::new(
            r("allowsMerge"),
            vocabulary::rdfs_range(),
            Resource::new(vocabulary::XSD_BOOLEAN),
        ));
        store.assert_fact(Fact::new(
            r("ZeisCoque"),
            r("allowsMerge"),
            Literal::boolean(false),
        ));

        let stats = close(&mut store);
        assert_eq!(stats.fires_by_rule.get(rules::RANGE), None);
    }

    #[test]
    fn missing_schema_narrows_inference_without_error() {
        let mut store = FactStore::new();
        store.assert_fact(fact("a", "undeclared", "b"));
        let stats = close(&mut store);
        assert_eq!(stats.inferred(), 0);
    }

    #[test]
    fn closure_is_idempotent() {
        let mut store = FactStore::new();
        store.assert_fact(Fact::new(
            r("conflictsWith"),
            vocabulary::rdf_type(),
            vocabulary::owl_symmetric_property(),
        ));
        store.assert_fact(fact("LawA", "conflictsWith", "LawB"));

        let first = close(&mut store);
        assert!(first.inferred() > 0);

        let second = close(&mut store);
        assert_eq!(second.inferred(), 0);
    }

    #[test]
    fn iteration_cap_is_reported_when_exceeded() {
        let mut store = FactStore::new();
        store.assert_fact(fact("a", "p", "b"));
        store.assert_fact(fact("b", "p", "c"));

        let schema = SchemaRegistry::from_store(&store);
        let engine = InferenceEngine::with_config(
            &schema,
            ReasonerConfig { max_iterations: 1 },
        );
        let err = engine.compute_closure(&mut store).unwrap_err();
        assert!(matches!(err, ReasonerError::MaxIterationsExceeded(1)));
    }

    #[test]
    fn domain_closure_stays_far_below_cap() {
        let mut store = FactStore::new();
        civigraph_domain_urban::build_schema(&mut store);
        civigraph_domain_urban::populate_instances(&mut store);

        let schema = SchemaRegistry::from_store(&store);
        let stats = InferenceEngine::new(&schema)
            .compute_closure(&mut store)
            .unwrap();

        assert!(stats.inferred() > 0);
        assert!(
            stats.iterations < ReasonerConfig::default().max_iterations / 100,
            "realistic input must not approach the cap (used {})",
            stats.iterations
        );
    }

    proptest! {
        /// Monotonicity and idempotence over arbitrary small graphs with
        /// a symmetric+transitive relation in play.
        #[test]
        fn closure_is_monotone_and_idempotent(
            edges in proptest::collection::vec((0u8..5, 0u8..2, 0u8..5), 0..20)
        ) {
            let mut store = FactStore::new();
            store.assert_fact(Fact::new(
                r("rel0"),
                vocabulary::rdf_type(),
                vocabulary::owl_symmetric_property(),
            ));
            store.assert_fact(Fact::new(
                r("rel1"),
                vocabulary::rdf_type(),
                vocabulary::owl_transitive_property(),
            ));
            for (s, p, o) in edges {
                store.assert_fact(fact(
                    &format!("n{s}"),
                    &format!("rel{p}"),
                    &format!("n{o}"),
                ));
            }

            let asserted: HashSet<Fact> = store.asserted_facts().cloned().collect();
            let first = close(&mut store);
            let closed: HashSet<Fact> = store.facts().cloned().collect();

            // Monotonicity: asserted ⊆ closed.
            prop_assert!(asserted.is_subset(&closed));
            prop_assert_eq!(first.facts_after, closed.len());

            // Idempotence: a second run derives nothing.
            let second = close(&mut store);
            prop_assert_eq!(second.inferred(), 0);
        }
    }
}
