//! # Civigraph Validate
//!
//! Consistency validation over a fact store and its schema registry.
//! Validation never interrupts the pipeline: contradictory or missing
//! data turns into report entries. Only two findings are hard errors
//! (an empty store and a missing expected class); everything else is
//! warning-level, including disjointness violations, which the conflict
//! analysis treats as a signal rather than corruption.

use civigraph_core::model::{Resource, Term};
use civigraph_core::vocabulary;
use civigraph_schema::SchemaRegistry;
use civigraph_store::FactStore;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Aggregated validation outcome.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Keyed machine-readable findings backing the messages above.
    pub details: Map<String, Value>,
}

impl ValidationReport {
    /// Pass/fail comes from hard errors only; warnings never fail a run.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}

/// Validator over a store snapshot and the schema extracted from it.
pub struct Validator<'a> {
    store: &'a FactStore,
    schema: &'a SchemaRegistry,
}

impl<'a> Validator<'a> {
    pub fn new(store: &'a FactStore, schema: &'a SchemaRegistry) -> Self {
        Validator { store, schema }
    }

    /// Run every check. `expected_classes` is the caller's checklist of
    /// classes the schema must declare.
    pub fn validate(&self, expected_classes: &[Resource]) -> ValidationReport {
        let mut report = ValidationReport::default();
        self.check_store(&mut report);
        self.check_expected_classes(expected_classes, &mut report);
        self.check_relations(&mut report);
        self.check_disjointness(&mut report);
        self.check_instance_typing(&mut report);
        self.check_disjoint_membership(&mut report);
        report
    }

    fn check_store(&self, report: &mut ValidationReport) {
        report
            .details
            .insert("fact_count".to_string(), json!(self.store.len()));
        if self.store.is_empty() {
            report.error("the store holds no facts");
        }
    }

    fn check_expected_classes(&self, expected: &[Resource], report: &mut ValidationReport) {
        let mut found = Vec::new();
        let mut missing = Vec::new();
        for class in expected {
            if self.schema.is_declared_class(class) {
                found.push(class.local_name().to_string());
            } else {
                missing.push(class.local_name().to_string());
                report.error(format!("expected class not declared: {}", class.local_name()));
            }
        }
        report.details.insert("found_classes".to_string(), json!(found));
        report
            .details
            .insert("missing_classes".to_string(), json!(missing));
    }

    fn check_relations(&self, report: &mut ValidationReport) {
        let mut incomplete = Vec::new();
        let mut total = 0usize;
        for (relation, characteristics) in self.schema.declared_relations() {
            total += 1;
            if characteristics.domain.is_none() {
                report.warning(format!(
                    "relation {} has no declared domain",
                    relation.local_name()
                ));
                incomplete.push(relation.local_name().to_string());
            }
            if characteristics.range.is_none() {
                report.warning(format!(
                    "relation {} has no declared range",
                    relation.local_name()
                ));
                incomplete.push(relation.local_name().to_string());
            }
        }
        incomplete.sort();
        incomplete.dedup();
        report
            .details
            .insert("relation_count".to_string(), json!(total));
        report.details.insert(
            "relations_missing_domain_or_range".to_string(),
            json!(incomplete),
        );
        if total == 0 {
            report.warning("no relations declared");
        }
    }

    fn check_disjointness(&self, report: &mut ValidationReport) {
        let pairs: Vec<[String; 2]> = self
            .schema
            .disjoint_pairs()
            .into_iter()
            .map(|(a, b)| [a.local_name().to_string(), b.local_name().to_string()])
            .collect();
        if pairs.is_empty() {
            report.warning("no disjointness axioms declared");
        }
        report
            .details
            .insert("disjoint_pairs".to_string(), json!(pairs));
    }

    /// Post-closure typing coverage: every resource in subject or object
    /// position of a non-schema fact should carry at least one domain
    /// type.
    fn check_instance_typing(&self, report: &mut ValidationReport) {
        let declared_relation: HashSet<&Resource> = self
            .schema
            .declared_relations()
            .map(|(relation, _)| relation)
            .collect();
        let is_instance = |resource: &Resource| {
            !self.schema.is_declared_class(resource)
                && !declared_relation.contains(resource)
                && !vocabulary::is_schema_kind(resource)
        };

        let mut candidates: BTreeSet<&Resource> = BTreeSet::new();
        for fact in self.store.facts() {
            if is_instance(&fact.subject) {
                candidates.insert(&fact.subject);
            }
            // Objects of reserved relations are classes, relations or
            // labels, never instances.
            if vocabulary::is_reserved_relation(&fact.relation) {
                continue;
            }
            if let Some(object) = fact.object.as_resource() {
                if is_instance(object) {
                    candidates.insert(object);
                }
            }
        }

        let mut untyped = BTreeSet::new();
        let mut instances_by_class: BTreeMap<String, usize> = BTreeMap::new();
        for instance in candidates {
            let mut typed = false;
            for type_fact in self
                .store
                .matching(Some(instance), Some(&vocabulary::rdf_type()), None)
            {
                let Some(class) = type_fact.object.as_resource() else {
                    continue;
                };
                if vocabulary::is_schema_kind(class) {
                    continue;
                }
                typed = true;
                *instances_by_class
                    .entry(class.local_name().to_string())
                    .or_default() += 1;
            }
            if !typed {
                untyped.insert(instance.local_name().to_string());
            }
        }

        if !untyped.is_empty() {
            report.warning(format!("{} resources carry no type", untyped.len()));
        }
        report.details.insert(
            "untyped_resources".to_string(),
            json!(untyped.into_iter().collect::<Vec<_>>()),
        );
        report.details.insert(
            "instances_by_class".to_string(),
            json!(instances_by_class),
        );
    }

    /// Instances typed into both halves of a disjoint pair. Reported as
    /// a warning: in this domain a dual membership is the contradiction
    /// being studied, not a load failure.
    fn check_disjoint_membership(&self, report: &mut ValidationReport) {
        let mut violations: Vec<Value> = Vec::new();
        for (left, right) in self.schema.disjoint_pairs() {
            let left_members: HashSet<&Resource> = self
                .store
                .matching(None, Some(&vocabulary::rdf_type()), Some(&Term::from(&left)))
                .map(|fact| &fact.subject)
                .collect();
            let mut both: Vec<&Resource> = self
                .store
                .matching(None, Some(&vocabulary::rdf_type()), Some(&Term::from(&right)))
                .map(|fact| &fact.subject)
                .filter(|subject| left_members.contains(subject))
                .collect();
            both.sort();

            for member in both {
                report.warning(format!(
                    "{} belongs to disjoint classes {} and {}",
                    member.local_name(),
                    left.local_name(),
                    right.local_name()
                ));
                violations.push(json!({
                    "member": member.as_str(),
                    "classes": [left.as_str(), right.as_str()],
                }));
            }
        }
        report
            .details
            .insert("disjoint_violations".to_string(), json!(violations));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civigraph_core::model::Fact;
    use civigraph_domain_urban::vocab;
    use civigraph_reasoner::InferenceEngine;

    fn closed_domain_store() -> FactStore {
        let mut store = FactStore::new();
        civigraph_domain_urban::build_schema(&mut store);
        civigraph_domain_urban::populate_instances(&mut store);
        let schema = SchemaRegistry::from_store(&store);
        InferenceEngine::new(&schema)
            .compute_closure(&mut store)
            .unwrap();
        store
    }

    #[test]
    fn domain_knowledge_base_passes() {
        let store = closed_domain_store();
        let schema = SchemaRegistry::from_store(&store);
        let report = Validator::new(&store, &schema)
            .validate(&civigraph_domain_urban::expected_classes());

        assert!(report.is_valid(), "errors: {:?}", report.errors);
        assert_eq!(report.details["missing_classes"], json!([] as [String; 0]));
        assert_eq!(
            report.details["disjoint_pairs"].as_array().unwrap().len(),
            3
        );
        assert_eq!(
            report.details["untyped_resources"],
            json!([] as [String; 0])
        );
        assert_eq!(
            report.details["disjoint_violations"],
            json!([] as [String; 0])
        );
    }

    #[test]
    fn empty_store_is_a_hard_error() {
        let store = FactStore::new();
        let schema = SchemaRegistry::from_store(&store);
        let report = Validator::new(&store, &schema).validate(&[]);
        assert!(!report.is_valid());
        assert_eq!(report.details["fact_count"], json!(0));
    }

    #[test]
    fn missing_expected_class_is_a_hard_error() {
        let store = closed_domain_store();
        let schema = SchemaRegistry::from_store(&store);
        let missing = Resource::new("http://civigraph.dev/urban-conflict#NeverDeclared");
        let report = Validator::new(&store, &schema).validate(&[missing]);
        assert!(!report.is_valid());
        assert_eq!(report.details["missing_classes"], json!(["NeverDeclared"]));
    }

    #[test]
    fn relation_without_range_warns_but_passes() {
        let mut store = FactStore::new();
        civigraph_domain_urban::build_schema(&mut store);
        store.assert_fact(Fact::new(
            Resource::new("http://example.org/mystery"),
            vocabulary::rdfs_domain(),
            vocab::urban_agent(),
        ));
        let schema = SchemaRegistry::from_store(&store);
        let report = Validator::new(&store, &schema).validate(&[]);

        assert!(report.is_valid());
        assert!(report
            .warnings
            .iter()
            .any(|warning| warning.contains("mystery")));
    }

    #[test]
    fn disjointness_violation_is_reported_without_failing() {
        let mut store = closed_domain_store();
        // Type one action into both halves of the propositive/impeditive
        // pair; closure is not needed for the dual membership itself.
        store.assert_fact(Fact::new(
            vocab::enact_social_zone_law(),
            vocabulary::rdf_type(),
            vocab::impeditive_action(),
        ));
        let schema = SchemaRegistry::from_store(&store);
        let report = Validator::new(&store, &schema)
            .validate(&civigraph_domain_urban::expected_classes());

        assert!(report.is_valid(), "violations are warning-level");
        let violations = report.details["disjoint_violations"].as_array().unwrap();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0]["member"],
            json!(vocab::enact_social_zone_law().as_str())
        );
        assert!(report
            .warnings
            .iter()
            .any(|warning| warning.contains("disjoint classes")));
    }

    #[test]
    fn untyped_resource_is_flagged() {
        let mut store = closed_domain_store();
        store.assert_fact(Fact::new(
            Resource::new("http://example.org/Stray"),
            vocab::performs_action(),
            vocab::contest_bill_12(),
        ));
        let schema = SchemaRegistry::from_store(&store);
        let report = Validator::new(&store, &schema)
            .validate(&civigraph_domain_urban::expected_classes());

        assert!(report.is_valid());
        assert_eq!(report.details["untyped_resources"], json!(["Stray"]));
    }

    #[test]
    fn untyped_resource_in_object_position_is_flagged() {
        let mut store = closed_domain_store();
        // StrayTarget never appears as a subject; coverage must still
        // see it through the object position.
        store.assert_fact(Fact::new(
            vocab::city_hall(),
            vocab::performs_action(),
            Resource::new("http://example.org/StrayTarget"),
        ));
        let schema = SchemaRegistry::from_store(&store);
        let report = Validator::new(&store, &schema)
            .validate(&civigraph_domain_urban::expected_classes());

        assert!(report.is_valid());
        assert_eq!(report.details["untyped_resources"], json!(["StrayTarget"]));
    }
}
