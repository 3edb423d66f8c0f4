//! # Civigraph Schema Registry
//!
//! Class-hierarchy and relation-characteristic metadata, extracted once
//! from a fact-store snapshot by scanning the reserved schema vocabulary.
//! The registry is an immutable value passed by reference into the
//! inference engine and the query templates; it is never consulted
//! through global state.
//!
//! Forward references are tolerated everywhere: a class or relation used
//! before (or without) a formal declaration yields default metadata,
//! never an error.

use civigraph_core::model::Resource;
use civigraph_core::vocabulary;
use civigraph_store::FactStore;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};

/// Declared kind of a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationKind {
    /// Relates resources to resources.
    Object,
    /// Relates resources to literal values.
    Datatype,
}

/// Characteristics of a single relation. Every field defaults to
/// "not declared".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationCharacteristics {
    pub kind: Option<RelationKind>,
    /// Class every subject of the relation belongs to.
    pub domain: Option<Resource>,
    /// Class (or XSD datatype) every object of the relation belongs to.
    pub range: Option<Resource>,
    pub symmetric: bool,
    pub transitive: bool,
    /// Parent relation (sub-relation-of edge).
    pub parent: Option<Resource>,
}

/// Schema metadata derived from a fact-store snapshot.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    /// Resources declared as classes.
    classes: HashSet<Resource>,
    /// Direct superclass edges. Cycles are not validated against and are
    /// therefore never assumed absent by the traversals below.
    superclasses: HashMap<Resource, HashSet<Resource>>,
    /// Disjoint pairs, stored in both orders.
    disjoint: HashSet<(Resource, Resource)>,
    relations: HashMap<Resource, RelationCharacteristics>,
}

impl SchemaRegistry {
    /// Scan a store snapshot for reserved-vocabulary facts.
    pub fn from_store(store: &FactStore) -> Self {
        let mut registry = SchemaRegistry::default();

        for fact in store.facts() {
            match fact.relation.as_str() {
                vocabulary::RDF_TYPE => {
                    let Some(kind) = fact.object.as_resource() else {
                        continue;
                    };
                    match kind.as_str() {
                        vocabulary::OWL_CLASS => {
                            registry.classes.insert(fact.subject.clone());
                        }
                        vocabulary::OWL_OBJECT_PROPERTY => {
                            registry.relation_mut(&fact.subject).kind =
                                Some(RelationKind::Object);
                        }
                        vocabulary::OWL_DATATYPE_PROPERTY => {
                            registry.relation_mut(&fact.subject).kind =
                                Some(RelationKind::Datatype);
                        }
                        vocabulary::OWL_SYMMETRIC_PROPERTY => {
                            registry.relation_mut(&fact.subject).symmetric = true;
                        }
                        vocabulary::OWL_TRANSITIVE_PROPERTY => {
                            registry.relation_mut(&fact.subject).transitive = true;
                        }
                        _ => {}
                    }
                }
                vocabulary::RDFS_SUBCLASS_OF => {
                    if let Some(parent) = fact.object.as_resource() {
                        registry
                            .superclasses
                            .entry(fact.subject.clone())
                            .or_default()
                            .insert(parent.clone());
                    }
                }
                vocabulary::OWL_DISJOINT_WITH => {
                    if let Some(partner) = fact.object.as_resource() {
                        registry
                            .disjoint
                            .insert((fact.subject.clone(), partner.clone()));
                        registry
                            .disjoint
                            .insert((partner.clone(), fact.subject.clone()));
                    }
                }
                vocabulary::RDFS_DOMAIN => {
                    if let Some(class) = fact.object.as_resource() {
                        registry.relation_mut(&fact.subject).domain = Some(class.clone());
                    }
                }
                vocabulary::RDFS_RANGE => {
                    if let Some(class) = fact.object.as_resource() {
                        registry.relation_mut(&fact.subject).range = Some(class.clone());
                    }
                }
                vocabulary::RDFS_SUBPROPERTY_OF => {
                    if let Some(parent) = fact.object.as_resource() {
                        registry.relation_mut(&fact.subject).parent = Some(parent.clone());
                    }
                }
                _ => {}
            }
        }

        registry
    }

    fn relation_mut(&mut self, relation: &Resource) -> &mut RelationCharacteristics {
        self.relations.entry(relation.clone()).or_default()
    }

    /// All classes reachable from `class` by following subclass-of edges
    /// transitively. Strict: the class itself is not among its ancestors.
    /// Safe on cyclic hierarchies (each class is visited once).
    pub fn ancestors(&self, class: &Resource) -> HashSet<Resource> {
        let mut reached = HashSet::new();
        let mut queue: VecDeque<&Resource> = VecDeque::new();
        queue.push_back(class);

        while let Some(current) = queue.pop_front() {
            if let Some(parents) = self.superclasses.get(current) {
                for parent in parents {
                    if reached.insert(parent.clone()) {
                        queue.push_back(parent);
                    }
                }
            }
        }

        reached.remove(class);
        reached
    }

    /// Direct superclasses only.
    pub fn direct_superclasses(&self, class: &Resource) -> HashSet<Resource> {
        self.superclasses.get(class).cloned().unwrap_or_default()
    }

    /// True iff the pair was declared disjoint, in either order.
    pub fn is_disjoint(&self, c1: &Resource, c2: &Resource) -> bool {
        self.disjoint.contains(&(c1.clone(), c2.clone()))
    }

    /// Declared disjoint pairs, each unordered pair reported once with
    /// its members in lexicographic order.
    pub fn disjoint_pairs(&self) -> Vec<(Resource, Resource)> {
        let mut pairs: Vec<_> = self
            .disjoint
            .iter()
            .filter(|(a, b)| a <= b)
            .cloned()
            .collect();
        pairs.sort();
        pairs
    }

    /// Characteristics of a relation; undeclared relations yield the
    /// all-default value.
    pub fn characteristics(&self, relation: &Resource) -> RelationCharacteristics {
        self.relations.get(relation).cloned().unwrap_or_default()
    }

    /// True iff the resource was declared as a class.
    pub fn is_declared_class(&self, class: &Resource) -> bool {
        self.classes.contains(class)
    }

    pub fn declared_classes(&self) -> impl Iterator<Item = &Resource> {
        self.classes.iter()
    }

    /// Relations with any declared metadata (kind, hierarchy, domain,
    /// range or characteristic flags).
    pub fn declared_relations(&self) -> impl Iterator<Item = (&Resource, &RelationCharacteristics)> {
        self.relations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civigraph_core::model::Fact;

    fn r(name: &str) -> Resource {
        Resource::new(format!("http://example.org/{name}"))
    }

    fn schema_fact(s: &str, p: &Resource, o: &str) -> Fact {
        Fact::new(r(s), p.clone(), r(o))
    }

    fn typed(s: &str, kind: Resource) -> Fact {
        Fact::new(r(s), vocabulary::rdf_type(), kind)
    }

    #[test]
    fn ancestors_are_transitive_and_strict() {
        let mut store = FactStore::new();
        store.assert_fact(schema_fact("Executive", &vocabulary::rdfs_subclass_of(), "PublicAuthority"));
        store.assert_fact(schema_fact("PublicAuthority", &vocabulary::rdfs_subclass_of(), "UrbanAgent"));
        let registry = SchemaRegistry::from_store(&store);

        let ancestors = registry.ancestors(&r("Executive"));
        assert!(ancestors.contains(&r("PublicAuthority")));
        assert!(ancestors.contains(&r("UrbanAgent")));
        assert!(!ancestors.contains(&r("Executive")), "strict by convention");
        assert_eq!(ancestors.len(), 2);
    }

    #[test]
    fn ancestors_terminate_on_cycles() {
        let mut store = FactStore::new();
        store.assert_fact(schema_fact("A", &vocabulary::rdfs_subclass_of(), "B"));
        store.assert_fact(schema_fact("B", &vocabulary::rdfs_subclass_of(), "A"));
        let registry = SchemaRegistry::from_store(&store);

        // A reaches B and, through the cycle, itself; the strict
        // convention removes only the starting class.
        let ancestors = registry.ancestors(&r("A"));
        assert!(ancestors.contains(&r("B")));
        assert!(!ancestors.contains(&r("A")));
    }

    #[test]
    fn disjointness_is_symmetric() {
        let mut store = FactStore::new();
        store.assert_fact(schema_fact("Benefit", &vocabulary::owl_disjoint_with(), "Harm"));
        let registry = SchemaRegistry::from_store(&store);

        assert!(registry.is_disjoint(&r("Benefit"), &r("Harm")));
        assert!(registry.is_disjoint(&r("Harm"), &r("Benefit")));
        assert!(!registry.is_disjoint(&r("Benefit"), &r("Benefit")));
        assert_eq!(registry.disjoint_pairs().len(), 1);
    }

    #[test]
    fn characteristics_accumulate_markers() {
        let mut store = FactStore::new();
        store.assert_fact(typed("overlapsWith", vocabulary::owl_object_property()));
        store.assert_fact(typed("overlapsWith", vocabulary::owl_symmetric_property()));
        store.assert_fact(typed("overlapsWith", vocabulary::owl_transitive_property()));
        store.assert_fact(schema_fact("overlapsWith", &vocabulary::rdfs_domain(), "Space"));
        store.assert_fact(schema_fact("overlapsWith", &vocabulary::rdfs_range(), "Space"));
        store.assert_fact(schema_fact("causes", &vocabulary::rdfs_subproperty_of(), "produces"));
        let registry = SchemaRegistry::from_store(&store);

        let overlaps = registry.characteristics(&r("overlapsWith"));
        assert_eq!(overlaps.kind, Some(RelationKind::Object));
        assert!(overlaps.symmetric);
        assert!(overlaps.transitive);
        assert_eq!(overlaps.domain, Some(r("Space")));
        assert_eq!(overlaps.range, Some(r("Space")));

        let causes = registry.characteristics(&r("causes"));
        assert_eq!(causes.parent, Some(r("produces")));
        assert_eq!(causes.kind, None);
    }

    #[test]
    fn forward_references_yield_defaults() {
        let registry = SchemaRegistry::from_store(&FactStore::new());
        assert_eq!(
            registry.characteristics(&r("neverDeclared")),
            RelationCharacteristics::default()
        );
        assert!(registry.ancestors(&r("neverDeclared")).is_empty());
        assert!(!registry.is_declared_class(&r("neverDeclared")));
    }
}
