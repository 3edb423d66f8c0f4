//! Case-study instances
//!
//! The concrete conflict: a 1995 social-zone protection law versus a
//! 2020 lot-merging law whose exception clause opens the protected zone
//! to speculative pressure, with the idle historic center and its
//! revival incentives as the second front.

use crate::vocab;
use civigraph_core::model::{Fact, Literal, Resource, Term};
use civigraph_core::vocabulary as v;
use civigraph_store::FactStore;

fn individual(store: &mut FactStore, entity: Resource, class: Resource, label: &str) {
    store.assert_fact(Fact::new(entity.clone(), v::rdf_type(), class));
    store.assert_fact(Fact::new(entity, v::rdfs_label(), Literal::string(label)));
}

fn edge(store: &mut FactStore, subject: Resource, relation: Resource, object: Resource) {
    store.assert_fact(Fact::new(subject, relation, object));
}

fn datum(store: &mut FactStore, subject: Resource, relation: Resource, value: Literal) {
    store.assert_fact(Fact::new(subject, relation, Term::Literal(value)));
}

/// Assert every individual and narrative edge of the case study.
pub fn populate_instances(store: &mut FactStore) {
    populate_agents(store);
    populate_norms(store);
    populate_spaces(store);
    populate_instruments(store);
    populate_actions(store);
    populate_consequences(store);
    connect_narrative(store);
    connect_normative_conflict(store);
}

fn populate_agents(store: &mut FactStore) {
    individual(store, vocab::city_hall(), vocab::executive_agency(), "City Hall");
    individual(store, vocab::city_council(), vocab::legislative_agency(), "City Council");
    individual(store, vocab::coque_community(), vocab::community(), "Coque Community");
    individual(
        store,
        vocab::speculative_market(),
        vocab::speculative_agent(),
        "Speculative Real-Estate Market",
    );
    individual(
        store,
        vocab::heritage_office(),
        vocab::preservation_agency(),
        "Heritage Preservation Office",
    );
    individual(
        store,
        vocab::public_prosecutor(),
        vocab::oversight_agency(),
        "Public Prosecutor's Office",
    );
    individual(
        store,
        vocab::city_assembly(),
        vocab::participatory_council(),
        "City Assembly",
    );
}

fn populate_norms(store: &mut FactStore) {
    individual(
        store,
        vocab::social_zone_law_1995(),
        vocab::urban_legislation(),
        "Social Zone Protection Law (1995)",
    );
    individual(
        store,
        vocab::lot_merging_law_2020(),
        vocab::urban_legislation(),
        "Lot Merging Law (2020)",
    );
    individual(
        store,
        vocab::center_revival_law_2020(),
        vocab::urban_legislation(),
        "Center Revival Law (2020)",
    );
    individual(
        store,
        vocab::bill_12_2024(),
        vocab::bill(),
        "Bill 12/2024 (Lot Merging in Social Zones)",
    );
    individual(
        store,
        vocab::social_zone_category_concept(),
        vocab::social_zone_category(),
        "Social Zone Category (Legal Concept)",
    );
}

fn populate_spaces(store: &mut FactStore) {
    individual(
        store,
        vocab::coque_social_zone(),
        vocab::social_interest_zone(),
        "Coque Social Interest Zone",
    );
    individual(
        store,
        vocab::historic_center(),
        vocab::idle_center(),
        "Historic Center",
    );
    individual(
        store,
        vocab::old_town_heritage_zone(),
        vocab::heritage_zone(),
        "Old Town Heritage Zone",
    );
    individual(
        store,
        vocab::water_tower_landmark(),
        vocab::protected_landmark(),
        "Water Tower Landmark",
    );
    individual(
        store,
        vocab::center_incentive_area(),
        vocab::revival_incentive_area(),
        "Center Revival Incentive Area",
    );

    // Legal overlap chain; transitivity closes landmark over the
    // incentive area.
    edge(
        store,
        vocab::water_tower_landmark(),
        vocab::coincides_with(),
        vocab::old_town_heritage_zone(),
    );
    edge(
        store,
        vocab::old_town_heritage_zone(),
        vocab::coincides_with(),
        vocab::center_incentive_area(),
    );

    // The logical switch of the whole conflict.
    datum(
        store,
        vocab::coque_social_zone(),
        vocab::allows_lot_merging(),
        Literal::boolean(false),
    );
}

fn populate_instruments(store: &mut FactStore) {
    individual(
        store,
        vocab::compulsory_utilization_order(),
        vocab::compulsory_utilization(),
        "Compulsory Utilization Order",
    );
    individual(
        store,
        vocab::center_rights_transfer(),
        vocab::development_rights_transfer(),
        "Center Development Rights Transfer",
    );
    individual(
        store,
        vocab::lot_merging_instrument(),
        vocab::lot_merging(),
        "Lot Merging Instrument",
    );
    individual(
        store,
        vocab::center_tax_incentive(),
        vocab::revival_tax_incentive(),
        "Center Revival Tax Incentive",
    );

    edge(
        store,
        vocab::center_tax_incentive(),
        vocab::applies_incentive_to(),
        vocab::center_incentive_area(),
    );
    edge(
        store,
        vocab::center_rights_transfer(),
        vocab::transfers_rights_from(),
        vocab::center_incentive_area(),
    );
}

fn populate_actions(store: &mut FactStore) {
    individual(
        store,
        vocab::enact_social_zone_law(),
        vocab::propositive_action(),
        "Enact the Social Zone Protection Law",
    );
    individual(
        store,
        vocab::sanction_lot_merging_law(),
        vocab::impeditive_action(),
        "Sanction the Lot Merging Law",
    );
    individual(
        store,
        vocab::neglect_social_zone_oversight(),
        vocab::impeditive_action(),
        "Neglect Social Zone Oversight",
    );
    individual(
        store,
        vocab::apply_compulsory_utilization(),
        vocab::propositive_action(),
        "Apply Compulsory Utilization in the Center",
    );
    individual(
        store,
        vocab::contest_bill_12(),
        vocab::propositive_action(),
        "Contest Bill 12/2024",
    );
}

fn populate_consequences(store: &mut FactStore) {
    individual(
        store,
        vocab::gentrification_risk(),
        vocab::urban_harm(),
        "Gentrification Risk",
    );
    individual(
        store,
        vocab::center_functional_chaos(),
        vocab::functional_chaos(),
        "Functional Chaos in the Center",
    );
    individual(
        store,
        vocab::center_lost_revenue(),
        vocab::lost_revenue(),
        "Lost Revenue in the Center",
    );

    individual(
        store,
        vocab::housing_rights(),
        vocab::urban_benefit(),
        "Right to Housing",
    );
    individual(
        store,
        vocab::center_functional_order(),
        vocab::functional_order(),
        "Functional Order in the Center",
    );
    individual(
        store,
        vocab::center_increased_revenue(),
        vocab::increased_revenue(),
        "Increased Revenue in the Center",
    );
    individual(
        store,
        vocab::coque_social_dignity(),
        vocab::social_dignity(),
        "Social Dignity in Coque",
    );
}

fn connect_narrative(store: &mut FactStore) {
    // Who does what. City Hall both builds and undermines, which is
    // exactly what the ambiguous-actor query looks for.
    edge(
        store,
        vocab::city_council(),
        vocab::performs_action(),
        vocab::enact_social_zone_law(),
    );
    edge(
        store,
        vocab::city_hall(),
        vocab::performs_action(),
        vocab::sanction_lot_merging_law(),
    );
    edge(
        store,
        vocab::city_hall(),
        vocab::performs_action(),
        vocab::neglect_social_zone_oversight(),
    );
    edge(
        store,
        vocab::city_hall(),
        vocab::performs_action(),
        vocab::apply_compulsory_utilization(),
    );
    edge(
        store,
        vocab::public_prosecutor(),
        vocab::recommends_action(),
        vocab::contest_bill_12(),
    );

    edge(
        store,
        vocab::sanction_lot_merging_law(),
        vocab::uses_instrument(),
        vocab::lot_merging_instrument(),
    );
    edge(
        store,
        vocab::apply_compulsory_utilization(),
        vocab::uses_instrument(),
        vocab::compulsory_utilization_order(),
    );

    // Causal chains toward harm.
    edge(
        store,
        vocab::sanction_lot_merging_law(),
        vocab::directly_causes(),
        vocab::gentrification_risk(),
    );
    edge(
        store,
        vocab::neglect_social_zone_oversight(),
        vocab::directly_causes(),
        vocab::gentrification_risk(),
    );

    // Causal chains toward benefit.
    edge(
        store,
        vocab::enact_social_zone_law(),
        vocab::generates_benefit(),
        vocab::housing_rights(),
    );
    edge(
        store,
        vocab::enact_social_zone_law(),
        vocab::generates_benefit(),
        vocab::coque_social_dignity(),
    );
    edge(
        store,
        vocab::apply_compulsory_utilization(),
        vocab::generates_benefit(),
        vocab::center_functional_order(),
    );
    edge(
        store,
        vocab::apply_compulsory_utilization(),
        vocab::generates_benefit(),
        vocab::center_increased_revenue(),
    );

    // Benefits that undo specific harms.
    edge(
        store,
        vocab::center_functional_order(),
        vocab::reverses_harm(),
        vocab::center_functional_chaos(),
    );
    edge(
        store,
        vocab::center_increased_revenue(),
        vocab::reverses_harm(),
        vocab::center_lost_revenue(),
    );

    // Antagonism is asserted one way; symmetry closes the other.
    edge(
        store,
        vocab::speculative_market(),
        vocab::in_antagonism_with(),
        vocab::coque_community(),
    );
    edge(
        store,
        vocab::coque_social_zone(),
        vocab::under_market_pressure_from(),
        vocab::speculative_market(),
    );
}

fn connect_normative_conflict(store: &mut FactStore) {
    // The central contradiction.
    edge(
        store,
        vocab::social_zone_law_1995(),
        vocab::conflicts_with(),
        vocab::lot_merging_law_2020(),
    );

    edge(
        store,
        vocab::social_zone_law_1995(),
        vocab::establishes(),
        vocab::social_zone_category_concept(),
    );
    edge(
        store,
        vocab::lot_merging_law_2020(),
        vocab::establishes(),
        vocab::lot_merging_instrument(),
    );
    edge(
        store,
        vocab::center_revival_law_2020(),
        vocab::establishes(),
        vocab::center_tax_incentive(),
    );
    edge(
        store,
        vocab::social_zone_category_concept(),
        vocab::designates(),
        vocab::coque_social_zone(),
    );

    // The legal loophole: a norm sanctioning an action that causes harm.
    edge(
        store,
        vocab::lot_merging_law_2020(),
        vocab::permits_exception(),
        vocab::sanction_lot_merging_law(),
    );

    // Institutional response.
    edge(
        store,
        vocab::bill_12_2024(),
        vocab::contested_by(),
        vocab::public_prosecutor(),
    );

    // Guardianship and cross-agency coordination.
    edge(
        store,
        vocab::heritage_office(),
        vocab::oversees_space(),
        vocab::old_town_heritage_zone(),
    );
    edge(
        store,
        vocab::city_hall(),
        vocab::coordinates_with(),
        vocab::heritage_office(),
    );

    datum(
        store,
        vocab::city_council(),
        vocab::has_legal_mandate(),
        Literal::string("Deliberate on the master plan and urban legislation"),
    );
    datum(
        store,
        vocab::public_prosecutor(),
        vocab::has_legal_mandate(),
        Literal::string("Oversee and contest acts that harm the public interest"),
    );
}
