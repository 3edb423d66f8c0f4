//! Schema axioms of the urban-conflict ontology
//!
//! Seven thematic axes: urban agents, urban actions, conflict spaces,
//! policy instruments, urban consequences, and norms with their conflict
//! logic, plus the relation axioms tying them together.

use crate::vocab;
use civigraph_core::model::{Fact, Literal, Resource};
use civigraph_core::vocabulary as v;
use civigraph_store::FactStore;

fn declare_class(store: &mut FactStore, class: Resource, label: &str) {
    store.assert_fact(Fact::new(class.clone(), v::rdf_type(), v::owl_class()));
    store.assert_fact(Fact::new(class, v::rdfs_label(), Literal::string(label)));
}

fn subclass(store: &mut FactStore, sub: Resource, sup: Resource) {
    store.assert_fact(Fact::new(sub, v::rdfs_subclass_of(), sup));
}

fn disjoint(store: &mut FactStore, a: Resource, b: Resource) {
    store.assert_fact(Fact::new(a, v::owl_disjoint_with(), b));
}

fn object_relation(
    store: &mut FactStore,
    relation: Resource,
    domain: Resource,
    range: Resource,
) {
    store.assert_fact(Fact::new(
        relation.clone(),
        v::rdf_type(),
        v::owl_object_property(),
    ));
    store.assert_fact(Fact::new(relation.clone(), v::rdfs_domain(), domain));
    store.assert_fact(Fact::new(relation, v::rdfs_range(), range));
}

fn datatype_relation(
    store: &mut FactStore,
    relation: Resource,
    domain: Resource,
    datatype: &str,
) {
    store.assert_fact(Fact::new(
        relation.clone(),
        v::rdf_type(),
        v::owl_datatype_property(),
    ));
    store.assert_fact(Fact::new(relation.clone(), v::rdfs_domain(), domain));
    store.assert_fact(Fact::new(
        relation,
        v::rdfs_range(),
        Resource::new(datatype),
    ));
}

fn symmetric(store: &mut FactStore, relation: Resource) {
    store.assert_fact(Fact::new(
        relation,
        v::rdf_type(),
        v::owl_symmetric_property(),
    ));
}

fn transitive(store: &mut FactStore, relation: Resource) {
    store.assert_fact(Fact::new(
        relation,
        v::rdf_type(),
        v::owl_transitive_property(),
    ));
}

fn subrelation(store: &mut FactStore, sub: Resource, parent: Resource) {
    store.assert_fact(Fact::new(sub, v::rdfs_subproperty_of(), parent));
}

/// Assert the complete schema into `store`.
pub fn build_schema(store: &mut FactStore) {
    build_agent_classes(store);
    build_action_classes(store);
    build_space_classes(store);
    build_instrument_classes(store);
    build_consequence_classes(store);
    build_norm_classes(store);
    build_relation_axioms(store);
}

/// Axis 1: the players of the conflict, including the fragmented public
/// authority.
fn build_agent_classes(store: &mut FactStore) {
    declare_class(store, vocab::urban_agent(), "Urban Agent");

    declare_class(store, vocab::community(), "Community");
    subclass(store, vocab::community(), vocab::urban_agent());

    declare_class(store, vocab::market_agent(), "Market Agent");
    subclass(store, vocab::market_agent(), vocab::urban_agent());

    declare_class(store, vocab::developer_investor(), "Developer Investor");
    subclass(store, vocab::developer_investor(), vocab::market_agent());
    declare_class(store, vocab::speculative_agent(), "Speculative Agent");
    subclass(store, vocab::speculative_agent(), vocab::market_agent());
    // An agent cannot play the developer and speculator roles at once.
    disjoint(store, vocab::developer_investor(), vocab::speculative_agent());

    declare_class(store, vocab::public_authority(), "Public Authority");
    subclass(store, vocab::public_authority(), vocab::urban_agent());

    declare_class(store, vocab::executive_agency(), "Executive Agency");
    subclass(store, vocab::executive_agency(), vocab::public_authority());
    declare_class(store, vocab::legislative_agency(), "Legislative Agency");
    subclass(store, vocab::legislative_agency(), vocab::public_authority());
    declare_class(store, vocab::preservation_agency(), "Preservation Agency");
    subclass(store, vocab::preservation_agency(), vocab::public_authority());
    declare_class(store, vocab::oversight_agency(), "Oversight Agency");
    subclass(store, vocab::oversight_agency(), vocab::public_authority());
    declare_class(store, vocab::participatory_council(), "Participatory Council");
    subclass(store, vocab::participatory_council(), vocab::public_authority());
}

/// Axis 2: propositive versus impeditive actions.
fn build_action_classes(store: &mut FactStore) {
    declare_class(store, vocab::urban_action(), "Urban Action");

    declare_class(store, vocab::propositive_action(), "Propositive Action");
    subclass(store, vocab::propositive_action(), vocab::urban_action());
    declare_class(store, vocab::impeditive_action(), "Impeditive Action");
    subclass(store, vocab::impeditive_action(), vocab::urban_action());

    disjoint(store, vocab::propositive_action(), vocab::impeditive_action());
}

/// Axis 3: legal geography with overlapping layers.
fn build_space_classes(store: &mut FactStore) {
    declare_class(store, vocab::conflict_space(), "Conflict Space");

    declare_class(store, vocab::social_interest_zone(), "Social Interest Zone");
    subclass(store, vocab::social_interest_zone(), vocab::conflict_space());
    declare_class(store, vocab::idle_center(), "Idle Center");
    subclass(store, vocab::idle_center(), vocab::conflict_space());

    declare_class(store, vocab::preservation_zone(), "Preservation Zone");
    subclass(store, vocab::preservation_zone(), vocab::conflict_space());
    declare_class(store, vocab::heritage_zone(), "Heritage Zone");
    subclass(store, vocab::heritage_zone(), vocab::preservation_zone());
    declare_class(store, vocab::protected_landmark(), "Protected Landmark");
    subclass(store, vocab::protected_landmark(), vocab::preservation_zone());
    declare_class(store, vocab::strict_preservation_sector(), "Strict Preservation Sector");
    subclass(store, vocab::strict_preservation_sector(), vocab::heritage_zone());

    declare_class(store, vocab::instrument_application_zone(), "Instrument Application Zone");
    subclass(store, vocab::instrument_application_zone(), vocab::conflict_space());
    declare_class(store, vocab::revival_incentive_area(), "Revival Incentive Area");
    subclass(store, vocab::revival_incentive_area(), vocab::instrument_application_zone());
    declare_class(store, vocab::rights_ceding_area(), "Rights Ceding Area");
    subclass(store, vocab::rights_ceding_area(), vocab::instrument_application_zone());
    declare_class(store, vocab::rights_receiving_area(), "Rights Receiving Area");
    subclass(store, vocab::rights_receiving_area(), vocab::instrument_application_zone());
    declare_class(store, vocab::bonus_receiving_area(), "Bonus Receiving Area");
    subclass(store, vocab::bonus_receiving_area(), vocab::instrument_application_zone());
}

/// Axis 4: fiscal, financial and physical-ordering
/// instruments.
fn build_instrument_classes(store: &mut FactStore) {
    declare_class(store, vocab::policy_instrument(), "Policy Instrument");

    declare_class(store, vocab::compulsory_utilization(), "Compulsory Utilization");
    subclass(store, vocab::compulsory_utilization(), vocab::policy_instrument());
    declare_class(store, vocab::onerous_grant(), "Onerous Grant of Building Rights");
    subclass(store, vocab::onerous_grant(), vocab::policy_instrument());

    declare_class(store, vocab::fiscal_instrument(), "Fiscal and Financial Instrument");
    subclass(store, vocab::fiscal_instrument(), vocab::policy_instrument());
    declare_class(store, vocab::tax_incentive(), "Tax Incentive");
    subclass(store, vocab::tax_incentive(), vocab::fiscal_instrument());
    declare_class(store, vocab::revival_tax_incentive(), "Center Revival Tax Incentive");
    subclass(store, vocab::revival_tax_incentive(), vocab::tax_incentive());
    declare_class(store, vocab::development_rights_transfer(), "Development Rights Transfer");
    subclass(store, vocab::development_rights_transfer(), vocab::fiscal_instrument());
    declare_class(store, vocab::construction_bonus(), "Construction Bonus");
    subclass(store, vocab::construction_bonus(), vocab::fiscal_instrument());

    declare_class(store, vocab::physical_ordering_instrument(), "Physical Ordering Instrument");
    subclass(store, vocab::physical_ordering_instrument(), vocab::policy_instrument());
    declare_class(store, vocab::lot_merging(), "Lot Merging");
    subclass(store, vocab::lot_merging(), vocab::physical_ordering_instrument());
}

/// Axis 5: consequences of actions, with the harm/benefit disjunction
/// that powers contradiction detection.
fn build_consequence_classes(store: &mut FactStore) {
    declare_class(store, vocab::urban_consequence(), "Urban Consequence");

    declare_class(store, vocab::urban_harm(), "Urban Harm");
    subclass(store, vocab::urban_harm(), vocab::urban_consequence());
    declare_class(store, vocab::functional_chaos(), "Functional Chaos");
    subclass(store, vocab::functional_chaos(), vocab::urban_harm());
    declare_class(store, vocab::lost_revenue(), "Lost Revenue");
    subclass(store, vocab::lost_revenue(), vocab::urban_harm());
    declare_class(store, vocab::disease_and_death(), "Disease and Death");
    subclass(store, vocab::disease_and_death(), vocab::urban_harm());

    declare_class(store, vocab::urban_benefit(), "Urban Benefit");
    subclass(store, vocab::urban_benefit(), vocab::urban_consequence());
    declare_class(store, vocab::functional_order(), "Functional Order");
    subclass(store, vocab::functional_order(), vocab::urban_benefit());
    declare_class(store, vocab::increased_revenue(), "Increased Revenue");
    subclass(store, vocab::increased_revenue(), vocab::urban_benefit());
    declare_class(store, vocab::social_dignity(), "Social Dignity");
    subclass(store, vocab::social_dignity(), vocab::urban_benefit());

    // A consequence cannot be benefit and harm at once.
    disjoint(store, vocab::urban_benefit(), vocab::urban_harm());
}

/// Axis 6: norms, bills and normative
/// categories.
fn build_norm_classes(store: &mut FactStore) {
    declare_class(store, vocab::norm(), "Norm");

    declare_class(store, vocab::urban_legislation(), "Urban Legislation");
    subclass(store, vocab::urban_legislation(), vocab::norm());
    declare_class(store, vocab::bill(), "Bill");
    subclass(store, vocab::bill(), vocab::norm());
    declare_class(store, vocab::law_article(), "Law Article");
    subclass(store, vocab::law_article(), vocab::norm());
    declare_class(store, vocab::legislative_process(), "Legislative Process");
    subclass(store, vocab::legislative_process(), vocab::norm());

    declare_class(store, vocab::normative_category(), "Normative Category");
    subclass(store, vocab::normative_category(), vocab::norm());
    declare_class(store, vocab::social_zone_category(), "Social Zone Category");
    subclass(store, vocab::social_zone_category(), vocab::normative_category());
}

fn build_relation_axioms(store: &mut FactStore) {
    // Agency.
    object_relation(
        store,
        vocab::performs_action(),
        vocab::urban_agent(),
        vocab::urban_action(),
    );
    object_relation(
        store,
        vocab::uses_instrument(),
        vocab::urban_action(),
        vocab::policy_instrument(),
    );
    object_relation(
        store,
        vocab::recommends_action(),
        vocab::oversight_agency(),
        vocab::urban_action(),
    );
    object_relation(
        store,
        vocab::coordinates_with(),
        vocab::executive_agency(),
        vocab::preservation_agency(),
    );
    object_relation(
        store,
        vocab::oversees_space(),
        vocab::preservation_agency(),
        vocab::conflict_space(),
    );
    datatype_relation(
        store,
        vocab::has_legal_mandate(),
        vocab::public_authority(),
        civigraph_core::vocabulary::XSD_STRING,
    );

    // Causality: the generic consequence relation and its two
    // specializations.
    object_relation(
        store,
        vocab::produces_consequence(),
        vocab::urban_action(),
        vocab::urban_consequence(),
    );
    object_relation(
        store,
        vocab::directly_causes(),
        vocab::impeditive_action(),
        vocab::urban_harm(),
    );
    subrelation(store, vocab::directly_causes(), vocab::produces_consequence());
    object_relation(
        store,
        vocab::generates_benefit(),
        vocab::propositive_action(),
        vocab::urban_benefit(),
    );
    subrelation(store, vocab::generates_benefit(), vocab::produces_consequence());
    object_relation(
        store,
        vocab::reverses_harm(),
        vocab::urban_benefit(),
        vocab::urban_harm(),
    );

    // Antagonism between agents is mutual.
    object_relation(
        store,
        vocab::in_antagonism_with(),
        vocab::urban_agent(),
        vocab::urban_agent(),
    );
    symmetric(store, vocab::in_antagonism_with());

    // Legal overlap of zones is mutual and chains.
    object_relation(
        store,
        vocab::coincides_with(),
        vocab::conflict_space(),
        vocab::conflict_space(),
    );
    symmetric(store, vocab::coincides_with());
    transitive(store, vocab::coincides_with());

    datatype_relation(
        store,
        vocab::allows_lot_merging(),
        vocab::conflict_space(),
        civigraph_core::vocabulary::XSD_BOOLEAN,
    );
    object_relation(
        store,
        vocab::under_market_pressure_from(),
        vocab::social_interest_zone(),
        vocab::market_agent(),
    );

    // Instrument mechanics.
    object_relation(
        store,
        vocab::applies_incentive_to(),
        vocab::tax_incentive(),
        vocab::conflict_space(),
    );
    object_relation(
        store,
        vocab::transfers_rights_from(),
        vocab::development_rights_transfer(),
        vocab::rights_ceding_area(),
    );
    object_relation(
        store,
        vocab::transfers_rights_to(),
        vocab::development_rights_transfer(),
        vocab::rights_receiving_area(),
    );
    object_relation(
        store,
        vocab::grants_bonus_to(),
        vocab::construction_bonus(),
        vocab::bonus_receiving_area(),
    );
    datatype_relation(
        store,
        vocab::bonus_multiplier(),
        vocab::construction_bonus(),
        civigraph_core::vocabulary::XSD_DECIMAL,
    );

    // Normative conflict logic.
    object_relation(
        store,
        vocab::establishes(),
        vocab::urban_legislation(),
        Resource::new(civigraph_core::vocabulary::OWL_THING),
    );
    object_relation(store, vocab::conflicts_with(), vocab::norm(), vocab::norm());
    symmetric(store, vocab::conflicts_with());
    object_relation(
        store,
        vocab::permits_exception(),
        vocab::norm(),
        vocab::impeditive_action(),
    );
    object_relation(
        store,
        vocab::bypasses_process_of(),
        vocab::legislative_process(),
        vocab::participatory_council(),
    );
    object_relation(
        store,
        vocab::contested_by(),
        vocab::norm(),
        vocab::oversight_agency(),
    );
    object_relation(
        store,
        vocab::designates(),
        vocab::normative_category(),
        vocab::conflict_space(),
    );
}
