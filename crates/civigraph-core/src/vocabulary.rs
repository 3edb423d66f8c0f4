//! Reserved schema vocabulary
//!
//! Facts whose relation belongs to this vocabulary carry schema metadata
//! (class hierarchy, disjointness, relation characteristics) rather than
//! domain content. The registry scans for them; the validator skips them
//! when checking instance typing.

use crate::model::Resource;
use lazy_static::lazy_static;
use std::collections::HashSet;

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
pub const RDFS_SUBPROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";
pub const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";

pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
pub const OWL_THING: &str = "http://www.w3.org/2002/07/owl#Thing";
pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
pub const OWL_SYMMETRIC_PROPERTY: &str = "http://www.w3.org/2002/07/owl#SymmetricProperty";
pub const OWL_TRANSITIVE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#TransitiveProperty";
pub const OWL_DISJOINT_WITH: &str = "http://www.w3.org/2002/07/owl#disjointWith";

pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
pub const XSD_DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";

pub fn rdf_type() -> Resource {
    Resource::new(RDF_TYPE)
}

pub fn rdfs_subclass_of() -> Resource {
    Resource::new(RDFS_SUBCLASS_OF)
}

pub fn rdfs_subproperty_of() -> Resource {
    Resource::new(RDFS_SUBPROPERTY_OF)
}

pub fn rdfs_domain() -> Resource {
    Resource::new(RDFS_DOMAIN)
}

pub fn rdfs_range() -> Resource {
    Resource::new(RDFS_RANGE)
}

pub fn rdfs_label() -> Resource {
    Resource::new(RDFS_LABEL)
}

pub fn owl_class() -> Resource {
    Resource::new(OWL_CLASS)
}

pub fn owl_object_property() -> Resource {
    Resource::new(OWL_OBJECT_PROPERTY)
}

pub fn owl_datatype_property() -> Resource {
    Resource::new(OWL_DATATYPE_PROPERTY)
}

pub fn owl_symmetric_property() -> Resource {
    Resource::new(OWL_SYMMETRIC_PROPERTY)
}

pub fn owl_transitive_property() -> Resource {
    Resource::new(OWL_TRANSITIVE_PROPERTY)
}

pub fn owl_disjoint_with() -> Resource {
    Resource::new(OWL_DISJOINT_WITH)
}

lazy_static! {
    /// Relations that carry schema metadata rather than domain content.
    static ref RESERVED_RELATIONS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert(RDF_TYPE);
        set.insert(RDFS_SUBCLASS_OF);
        set.insert(RDFS_SUBPROPERTY_OF);
        set.insert(RDFS_DOMAIN);
        set.insert(RDFS_RANGE);
        set.insert(RDFS_LABEL);
        set.insert(RDFS_COMMENT);
        set.insert(OWL_DISJOINT_WITH);
        set
    };

    /// Resources that name schema kinds (objects of `rdf:type` schema facts).
    static ref SCHEMA_KINDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert(OWL_CLASS);
        set.insert(OWL_THING);
        set.insert(OWL_OBJECT_PROPERTY);
        set.insert(OWL_DATATYPE_PROPERTY);
        set.insert(OWL_SYMMETRIC_PROPERTY);
        set.insert(OWL_TRANSITIVE_PROPERTY);
        set
    };
}

/// True for relations reserved by the schema vocabulary.
pub fn is_reserved_relation(relation: &Resource) -> bool {
    RESERVED_RELATIONS.contains(relation.as_str())
}

/// True for resources naming a schema kind (`owl:Class`, property markers, ...).
pub fn is_schema_kind(resource: &Resource) -> bool {
    SCHEMA_KINDS.contains(resource.as_str())
}

/// True for XSD datatype IRIs usable as a relation range.
pub fn is_datatype(resource: &Resource) -> bool {
    matches!(resource.as_str(), XSD_STRING | XSD_BOOLEAN | XSD_DECIMAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_membership_is_table_driven() {
        assert!(is_reserved_relation(&rdf_type()));
        assert!(is_reserved_relation(&rdfs_subclass_of()));
        assert!(is_reserved_relation(&owl_disjoint_with()));
        assert!(!is_reserved_relation(&Resource::new(
            "http://civigraph.dev/urban-conflict#performsAction"
        )));
    }

    #[test]
    fn schema_kinds_cover_property_markers() {
        assert!(is_schema_kind(&owl_class()));
        assert!(is_schema_kind(&owl_symmetric_property()));
        assert!(is_schema_kind(&owl_transitive_property()));
        assert!(!is_schema_kind(&Resource::new("http://example.org/C")));
    }

    #[test]
    fn datatypes() {
        assert!(is_datatype(&Resource::new(XSD_BOOLEAN)));
        assert!(!is_datatype(&Resource::new(OWL_CLASS)));
    }
}
