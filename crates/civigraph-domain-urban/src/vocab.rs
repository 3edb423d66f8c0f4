//! Domain vocabulary
//!
//! Every class, relation and named individual of the urban-conflict
//! ontology, as typed `Resource` constructors under the domain
//! namespace.

use civigraph_core::model::Resource;

/// Domain namespace prefix.
pub const NS: &str = "http://civigraph.dev/urban-conflict#";

macro_rules! terms {
    ($($name:ident => $local:literal),* $(,)?) => {
        $(
            pub fn $name() -> Resource {
                Resource::new(concat!("http://civigraph.dev/urban-conflict#", $local))
            }
        )*
    };
}

// Classes: urban agents.
terms! {
    urban_agent => "UrbanAgent",
    community => "Community",
    market_agent => "MarketAgent",
    developer_investor => "DeveloperInvestor",
    speculative_agent => "SpeculativeAgent",
    public_authority => "PublicAuthority",
    executive_agency => "ExecutiveAgency",
    legislative_agency => "LegislativeAgency",
    preservation_agency => "PreservationAgency",
    oversight_agency => "OversightAgency",
    participatory_council => "ParticipatoryCouncil",
}

// Classes: urban actions.
terms! {
    urban_action => "UrbanAction",
    propositive_action => "PropositiveAction",
    impeditive_action => "ImpeditiveAction",
}

// Classes: conflict spaces.
terms! {
    conflict_space => "ConflictSpace",
    social_interest_zone => "SocialInterestZone",
    idle_center => "IdleCenter",
    preservation_zone => "PreservationZone",
    heritage_zone => "HeritageZone",
    protected_landmark => "ProtectedLandmark",
    strict_preservation_sector => "StrictPreservationSector",
    instrument_application_zone => "InstrumentApplicationZone",
    revival_incentive_area => "RevivalIncentiveArea",
    rights_ceding_area => "RightsCedingArea",
    rights_receiving_area => "RightsReceivingArea",
    bonus_receiving_area => "BonusReceivingArea",
}

// Classes: policy instruments.
terms! {
    policy_instrument => "PolicyInstrument",
    compulsory_utilization => "CompulsoryUtilization",
    onerous_grant => "OnerousGrant",
    fiscal_instrument => "FiscalInstrument",
    tax_incentive => "TaxIncentive",
    revival_tax_incentive => "RevivalTaxIncentive",
    development_rights_transfer => "DevelopmentRightsTransfer",
    construction_bonus => "ConstructionBonus",
    physical_ordering_instrument => "PhysicalOrderingInstrument",
    lot_merging => "LotMerging",
}

// Classes: urban consequences.
terms! {
    urban_consequence => "UrbanConsequence",
    urban_harm => "UrbanHarm",
    functional_chaos => "FunctionalChaos",
    lost_revenue => "LostRevenue",
    disease_and_death => "DiseaseAndDeath",
    urban_benefit => "UrbanBenefit",
    functional_order => "FunctionalOrder",
    increased_revenue => "IncreasedRevenue",
    social_dignity => "SocialDignity",
}

// Classes: norms.
terms! {
    norm => "Norm",
    urban_legislation => "UrbanLegislation",
    bill => "Bill",
    law_article => "LawArticle",
    legislative_process => "LegislativeProcess",
    normative_category => "NormativeCategory",
    social_zone_category => "SocialZoneCategory",
}

// Object relations.
terms! {
    performs_action => "performsAction",
    uses_instrument => "usesInstrument",
    produces_consequence => "producesConsequence",
    directly_causes => "directlyCauses",
    generates_benefit => "generatesBenefit",
    reverses_harm => "reversesHarm",
    in_antagonism_with => "inAntagonismWith",
    oversees_space => "overseesSpace",
    recommends_action => "recommendsAction",
    coordinates_with => "coordinatesWith",
    coincides_with => "coincidesWith",
    under_market_pressure_from => "underMarketPressureFrom",
    applies_incentive_to => "appliesIncentiveTo",
    transfers_rights_from => "transfersRightsFrom",
    transfers_rights_to => "transfersRightsTo",
    grants_bonus_to => "grantsBonusTo",
    establishes => "establishes",
    conflicts_with => "conflictsWith",
    permits_exception => "permitsException",
    bypasses_process_of => "bypassesProcessOf",
    contested_by => "contestedBy",
    designates => "designates",
}

// Datatype relations.
terms! {
    has_legal_mandate => "hasLegalMandate",
    allows_lot_merging => "allowsLotMerging",
    bonus_multiplier => "bonusMultiplier",
}

// Named individuals: agents.
terms! {
    city_hall => "CityHall",
    city_council => "CityCouncil",
    coque_community => "CoqueCommunity",
    speculative_market => "SpeculativeMarket",
    heritage_office => "HeritageOffice",
    public_prosecutor => "PublicProsecutor",
    city_assembly => "CityAssembly",
}

// Named individuals: norms and laws.
terms! {
    social_zone_law_1995 => "SocialZoneLaw1995",
    lot_merging_law_2020 => "LotMergingLaw2020",
    center_revival_law_2020 => "CenterRevivalLaw2020",
    bill_12_2024 => "Bill12_2024",
    social_zone_category_concept => "SocialZoneCategoryConcept",
}

// Named individuals: spaces.
terms! {
    coque_social_zone => "CoqueSocialZone",
    historic_center => "HistoricCenter",
    old_town_heritage_zone => "OldTownHeritageZone",
    water_tower_landmark => "WaterTowerLandmark",
    center_incentive_area => "CenterIncentiveArea",
}

// Named individuals: instruments.
terms! {
    compulsory_utilization_order => "CompulsoryUtilizationOrder",
    center_rights_transfer => "CenterRightsTransfer",
    lot_merging_instrument => "LotMergingInstrument",
    center_tax_incentive => "CenterTaxIncentive",
}

// Named individuals: actions.
terms! {
    enact_social_zone_law => "EnactSocialZoneLaw",
    sanction_lot_merging_law => "SanctionLotMergingLaw",
    neglect_social_zone_oversight => "NeglectSocialZoneOversight",
    apply_compulsory_utilization => "ApplyCompulsoryUtilization",
    contest_bill_12 => "ContestBill12",
}

// Named individuals: harms and benefits.
terms! {
    gentrification_risk => "GentrificationRisk",
    center_functional_chaos => "CenterFunctionalChaos",
    center_lost_revenue => "CenterLostRevenue",
    housing_rights => "HousingRights",
    center_functional_order => "CenterFunctionalOrder",
    center_increased_revenue => "CenterIncreasedRevenue",
    coque_social_dignity => "CoqueSocialDignity",
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terms_live_under_the_domain_namespace() {
        assert_eq!(
            urban_agent().as_str(),
            "http://civigraph.dev/urban-conflict#UrbanAgent"
        );
        assert!(coincides_with().as_str().starts_with(NS));
        assert_eq!(city_hall().local_name(), "CityHall");
    }
}
