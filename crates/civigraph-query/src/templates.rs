//! Analytical query templates
//!
//! The named questions the urban-conflict knowledge base is built to
//! answer, expressed as query plans over the closed store. Each
//! function returns binding rows; label resolution and rendering are a
//! caller concern.
//!
//! The templates assume the deductive closure has been computed: most
//! of them lean on inferred typing, symmetric pairs or transitive
//! overlap edges.

use crate::evaluator::{Bindings, QueryEngine};
use crate::pattern::{pattern, res, var, Constraint, Plan};
use civigraph_core::model::{Resource, Term};
use civigraph_core::vocabulary as v;
use civigraph_domain_urban::vocab;
use civigraph_schema::SchemaRegistry;
use civigraph_store::FactStore;
use itertools::Itertools;
use std::collections::{HashMap, HashSet};

/// Norm pairs declared (or inferred) to be in conflict, one row per
/// unordered pair. Binds `norm1`, `norm2`.
pub fn normative_conflicts(store: &FactStore) -> Vec<Bindings> {
    let plan = Plan::bgp(vec![pattern(
        var("norm1"),
        res(vocab::conflicts_with()),
        var("norm2"),
    )])
    .filter(Constraint::vars_lt("norm1", "norm2"))
    .distinct();
    QueryEngine::new(store).evaluate(&plan)
}

/// Agents that perform both a propositive and an impeditive action.
/// Binds `actor`, `propositive`, `impeditive`.
pub fn ambiguous_actors(store: &FactStore) -> Vec<Bindings> {
    let plan = Plan::bgp(vec![
        pattern(var("actor"), res(v::rdf_type()), res(vocab::urban_agent())),
        pattern(var("actor"), res(vocab::performs_action()), var("propositive")),
        pattern(
            var("propositive"),
            res(v::rdf_type()),
            res(vocab::propositive_action()),
        ),
        pattern(var("actor"), res(vocab::performs_action()), var("impeditive")),
        pattern(
            var("impeditive"),
            res(v::rdf_type()),
            res(vocab::impeditive_action()),
        ),
    ])
    .distinct();
    QueryEngine::new(store).evaluate(&plan)
}

/// Agent → impeditive action → harm chains, optionally focused on one
/// harm. Binds `agent`, `action`, `harm`.
pub fn causal_chains(store: &FactStore, focus: Option<&Resource>) -> Vec<Bindings> {
    let mut plan = Plan::bgp(vec![
        pattern(
            var("action"),
            res(v::rdf_type()),
            res(vocab::impeditive_action()),
        ),
        pattern(var("action"), res(vocab::directly_causes()), var("harm")),
        pattern(var("agent"), res(vocab::performs_action()), var("action")),
    ]);
    if let Some(harm) = focus {
        plan = plan.filter(Constraint::var_eq("harm", harm.clone()));
    }
    QueryEngine::new(store).evaluate(&plan.distinct())
}

/// Harms reached from both sides at once: a propositive action whose
/// benefit reverses the harm an impeditive action directly causes.
/// Binds `harm`, `benefit`, `positive`, `negative`.
pub fn conflicting_instruments(store: &FactStore) -> Vec<Bindings> {
    let plan = Plan::bgp(vec![
        pattern(var("harm"), res(v::rdf_type()), res(vocab::urban_harm())),
        pattern(var("positive"), res(vocab::generates_benefit()), var("benefit")),
        pattern(var("benefit"), res(vocab::reverses_harm()), var("harm")),
        pattern(var("negative"), res(vocab::directly_causes()), var("harm")),
        pattern(
            var("positive"),
            res(v::rdf_type()),
            res(vocab::propositive_action()),
        ),
        pattern(
            var("negative"),
            res(v::rdf_type()),
            res(vocab::impeditive_action()),
        ),
    ])
    .distinct();
    QueryEngine::new(store).evaluate(&plan)
}

/// Legally coinciding space pairs, one row per unordered pair. Binds
/// `space1`, `space2`.
pub fn spatial_overlaps(store: &FactStore) -> Vec<Bindings> {
    let plan = Plan::bgp(vec![pattern(
        var("space1"),
        res(vocab::coincides_with()),
        var("space2"),
    )])
    .filter(Constraint::vars_lt("space1", "space2"))
    .distinct();
    QueryEngine::new(store).evaluate(&plan)
}

/// Norms whose exception clause sanctions an action that causes harm.
/// Binds `norm`, `action`, `harm`.
pub fn legal_breaches(store: &FactStore) -> Vec<Bindings> {
    let plan = Plan::bgp(vec![
        pattern(var("norm"), res(vocab::permits_exception()), var("action")),
        pattern(var("action"), res(vocab::directly_causes()), var("harm")),
    ])
    .distinct();
    QueryEngine::new(store).evaluate(&plan)
}

/// Public-authority agencies grouped by their most specific declared
/// type, with the legal mandate when one is recorded. Binds `agency`,
/// `type`, and optionally `mandate`. Rows are sorted by type, then
/// agency.
pub fn institutional_fragmentation(
    store: &FactStore,
    schema: &SchemaRegistry,
) -> Vec<Bindings> {
    let authority_classes: HashSet<Resource> = schema
        .declared_classes()
        .filter(|class| {
            **class == vocab::public_authority()
                || schema.ancestors(class).contains(&vocab::public_authority())
        })
        .cloned()
        .collect();

    let mut types_by_agency: HashMap<Resource, HashSet<Resource>> = HashMap::new();
    for fact in store.matching(None, Some(&v::rdf_type()), None) {
        let Some(class) = fact.object.as_resource() else {
            continue;
        };
        if authority_classes.contains(class) {
            types_by_agency
                .entry(fact.subject.clone())
                .or_default()
                .insert(class.clone());
        }
    }

    let mut rows: Vec<Bindings> = Vec::new();
    for (agency, types) in types_by_agency {
        // Most specific type: the one with the deepest ancestry, ties
        // broken by name for determinism.
        let Some(specific) = types
            .iter()
            .sorted_by_key(|class| class.as_str().to_string())
            .max_by_key(|class| schema.ancestors(class).len())
            .cloned()
        else {
            continue;
        };

        let mut row = Bindings::new();
        row.insert("agency".to_string(), Term::Resource(agency.clone()));
        row.insert("type".to_string(), Term::Resource(specific));
        if let Some(fact) = store
            .matching(Some(&agency), Some(&vocab::has_legal_mandate()), None)
            .next()
        {
            row.insert("mandate".to_string(), fact.object.clone());
        }
        rows.push(row);
    }

    rows.into_iter()
        .sorted_by_key(|row| {
            (
                row["type"].lexical_form(),
                row["agency"].lexical_form(),
            )
        })
        .collect()
}

/// Benefit → harm reversal pairs, annotated with the producing actions
/// where they exist. Binds `benefit`, `harm`, optionally `positive`
/// and `negative`.
pub fn benefit_harm_reversals(store: &FactStore) -> Vec<Bindings> {
    let plan = Plan::bgp(vec![pattern(
        var("benefit"),
        res(vocab::reverses_harm()),
        var("harm"),
    )])
    .optional(Plan::bgp(vec![pattern(
        var("positive"),
        res(vocab::generates_benefit()),
        var("benefit"),
    )]))
    .optional(Plan::bgp(vec![pattern(
        var("negative"),
        res(vocab::directly_causes()),
        var("harm"),
    )]))
    .distinct();
    QueryEngine::new(store).evaluate(&plan)
}

/// Social-interest zones with their pressure source and lot-merging
/// switch where recorded. Binds `zone`, optionally `pressure` and
/// `allows`.
pub fn market_pressure(store: &FactStore) -> Vec<Bindings> {
    let plan = Plan::bgp(vec![pattern(
        var("zone"),
        res(v::rdf_type()),
        res(vocab::social_interest_zone()),
    )])
    .optional(Plan::bgp(vec![pattern(
        var("zone"),
        res(vocab::under_market_pressure_from()),
        var("pressure"),
    )]))
    .optional(Plan::bgp(vec![pattern(
        var("zone"),
        res(vocab::allows_lot_merging()),
        var("allows"),
    )]))
    .distinct();
    QueryEngine::new(store).evaluate(&plan)
}

/// Authority pairs whose guardianships collide, either over the same
/// space or over legally coinciding spaces. Binds `authority1`,
/// `authority2`, `space` (and `overlapping` for coincidence hits).
pub fn jurisdiction_conflicts(store: &FactStore) -> Vec<Bindings> {
    let same_space = Plan::bgp(vec![
        pattern(var("authority1"), res(vocab::oversees_space()), var("space")),
        pattern(var("authority2"), res(vocab::oversees_space()), var("space")),
    ])
    .filter(Constraint::vars_lt("authority1", "authority2"));

    let coinciding = Plan::bgp(vec![
        pattern(var("authority1"), res(vocab::oversees_space()), var("space")),
        pattern(var("space"), res(vocab::coincides_with()), var("overlapping")),
        pattern(
            var("authority2"),
            res(vocab::oversees_space()),
            var("overlapping"),
        ),
    ])
    .filter(Constraint::vars_lt("authority1", "authority2"));

    QueryEngine::new(store).evaluate(&same_space.union(coinciding).distinct())
}

/// The full conflict narrative: every agent → action pair joined to its
/// outcome (benefit or harm branch), with the instrument used and the
/// sanctioning norm where they exist. Binds `agent`, `action`, exactly
/// one of `benefit` / `harm`, and optionally `instrument` and `norm`.
pub fn full_narrative(store: &FactStore) -> Vec<Bindings> {
    let base = Plan::bgp(vec![pattern(
        var("agent"),
        res(vocab::performs_action()),
        var("action"),
    )]);
    let benefit_branch = Plan::bgp(vec![pattern(
        var("action"),
        res(vocab::generates_benefit()),
        var("benefit"),
    )]);
    let harm_branch = Plan::bgp(vec![pattern(
        var("action"),
        res(vocab::directly_causes()),
        var("harm"),
    )]);

    let plan = base
        .join(benefit_branch.union(harm_branch))
        .optional(Plan::bgp(vec![pattern(
            var("action"),
            res(vocab::uses_instrument()),
            var("instrument"),
        )]))
        .optional(Plan::bgp(vec![pattern(
            var("norm"),
            res(vocab::permits_exception()),
            var("action"),
        )]))
        .distinct();
    QueryEngine::new(store).evaluate(&plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use civigraph_core::model::Fact;
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
    fn conflicting_norms_appear_as_one_unordered_pair() {
        let store = closed_domain_store();
        let rows = normative_conflicts(&store);
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0]["norm1"],
            Term::Resource(vocab::lot_merging_law_2020())
        );
        assert_eq!(
            rows[0]["norm2"],
            Term::Resource(vocab::social_zone_law_1995())
        );
    }

    #[test]
    fn city_hall_is_the_only_ambiguous_actor() {
        let store = closed_domain_store();
        let rows = ambiguous_actors(&store);
        // One propositive action crossed with two impeditive ones.
        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert_eq!(row["actor"], Term::Resource(vocab::city_hall()));
            assert_eq!(
                row["propositive"],
                Term::Resource(vocab::apply_compulsory_utilization())
            );
        }
    }

    #[test]
    fn causal_chains_trace_both_harmful_actions() {
        let store = closed_domain_store();
        let rows = causal_chains(&store, None);
        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert_eq!(row["agent"], Term::Resource(vocab::city_hall()));
            assert_eq!(row["harm"], Term::Resource(vocab::gentrification_risk()));
        }

        let focused = causal_chains(&store, Some(&vocab::gentrification_risk()));
        assert_eq!(focused.len(), 2);
        let elsewhere = causal_chains(&store, Some(&vocab::center_functional_chaos()));
        assert!(elsewhere.is_empty());
    }

    #[test]
    fn spatial_overlaps_include_the_transitive_pair() {
        let store = closed_domain_store();
        let rows = spatial_overlaps(&store);
        assert_eq!(rows.len(), 3);

        let transitive = rows.iter().any(|row| {
            row["space1"] == Term::Resource(vocab::center_incentive_area())
                && row["space2"] == Term::Resource(vocab::water_tower_landmark())
        });
        assert!(transitive, "missing inferred overlap pair");
    }

    #[test]
    fn legal_breach_links_norm_action_and_harm() {
        let store = closed_domain_store();
        let rows = legal_breaches(&store);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["norm"], Term::Resource(vocab::lot_merging_law_2020()));
        assert_eq!(
            rows[0]["action"],
            Term::Resource(vocab::sanction_lot_merging_law())
        );
        assert_eq!(rows[0]["harm"], Term::Resource(vocab::gentrification_risk()));
    }

    #[test]
    fn fragmentation_maps_each_agency_to_its_most_specific_type() {
        let store = closed_domain_store();
        let schema = SchemaRegistry::from_store(&store);
        let rows = institutional_fragmentation(&store, &schema);
        assert_eq!(rows.len(), 5);

        let by_agency: HashMap<_, _> = rows
            .iter()
            .map(|row| (row["agency"].clone(), row.clone()))
            .collect();

        let city_hall = &by_agency[&Term::Resource(vocab::city_hall())];
        assert_eq!(
            city_hall["type"],
            Term::Resource(vocab::executive_agency())
        );
        assert!(!city_hall.contains_key("mandate"));

        let prosecutor = &by_agency[&Term::Resource(vocab::public_prosecutor())];
        assert_eq!(
            prosecutor["type"],
            Term::Resource(vocab::oversight_agency())
        );
        assert!(prosecutor.contains_key("mandate"));
    }

    #[test]
    fn reversals_report_missing_counterpart_actions_as_unbound() {
        let store = closed_domain_store();
        let rows = benefit_harm_reversals(&store);
        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert_eq!(
                row["positive"],
                Term::Resource(vocab::apply_compulsory_utilization())
            );
            // Nothing in the case study directly causes the reversed
            // harms, so the negative side stays unbound.
            assert!(!row.contains_key("negative"));
        }
    }

    #[test]
    fn market_pressure_reports_source_and_merge_switch() {
        let store = closed_domain_store();
        let rows = market_pressure(&store);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row["zone"], Term::Resource(vocab::coque_social_zone()));
        assert_eq!(row["pressure"], Term::Resource(vocab::speculative_market()));
        assert_eq!(
            row["allows"].as_literal().and_then(|l| l.as_boolean()),
            Some(false)
        );
    }

    #[test]
    fn single_guardian_yields_no_jurisdiction_conflict() {
        let store = closed_domain_store();
        assert!(jurisdiction_conflicts(&store).is_empty());
    }

    #[test]
    fn jurisdiction_conflicts_join_through_inferred_overlap() {
        let mut store = FactStore::new();
        civigraph_domain_urban::build_schema(&mut store);
        let a1 = Resource::new("http://example.org/AuthorityOne");
        let a2 = Resource::new("http://example.org/AuthorityTwo");
        let x = Resource::new("http://example.org/ZoneX");
        let y = Resource::new("http://example.org/ZoneY");
        let z = Resource::new("http://example.org/ZoneZ");
        store.assert_fact(Fact::new(a1.clone(), vocab::oversees_space(), x.clone()));
        store.assert_fact(Fact::new(a2.clone(), vocab::oversees_space(), z.clone()));
        store.assert_fact(Fact::new(x.clone(), vocab::coincides_with(), y.clone()));
        store.assert_fact(Fact::new(y, vocab::coincides_with(), z));

        let schema = SchemaRegistry::from_store(&store);
        InferenceEngine::new(&schema)
            .compute_closure(&mut store)
            .unwrap();

        let rows = jurisdiction_conflicts(&store);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["authority1"], Term::Resource(a1));
        assert_eq!(rows[0]["authority2"], Term::Resource(a2));
    }

    #[test]
    fn conflicting_instruments_require_both_edges() {
        let positive = Resource::new("http://example.org/Build");
        let negative = Resource::new("http://example.org/Demolish");
        let benefit = Resource::new("http://example.org/Order");
        let harm = Resource::new("http://example.org/Chaos");

        let full = |skip_reversal: bool, skip_cause: bool| {
            let mut store = FactStore::new();
            store.assert_fact(Fact::new(
                positive.clone(),
                v::rdf_type(),
                vocab::propositive_action(),
            ));
            store.assert_fact(Fact::new(
                negative.clone(),
                v::rdf_type(),
                vocab::impeditive_action(),
            ));
            store.assert_fact(Fact::new(harm.clone(), v::rdf_type(), vocab::urban_harm()));
            store.assert_fact(Fact::new(
                positive.clone(),
                vocab::generates_benefit(),
                benefit.clone(),
            ));
            if !skip_reversal {
                store.assert_fact(Fact::new(
                    benefit.clone(),
                    vocab::reverses_harm(),
                    harm.clone(),
                ));
            }
            if !skip_cause {
                store.assert_fact(Fact::new(
                    negative.clone(),
                    vocab::directly_causes(),
                    harm.clone(),
                ));
            }
            store
        };

        let complete = conflicting_instruments(&full(false, false));
        assert_eq!(complete.len(), 1);
        assert_eq!(complete[0]["positive"], Term::Resource(positive.clone()));
        assert_eq!(complete[0]["negative"], Term::Resource(negative.clone()));

        assert!(conflicting_instruments(&full(true, false)).is_empty());
        assert!(conflicting_instruments(&full(false, true)).is_empty());
    }

    #[test]
    fn narrative_unions_benefit_and_harm_branches() {
        let store = closed_domain_store();
        let rows = full_narrative(&store);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows.iter().filter(|row| row.contains_key("benefit")).count(), 4);
        assert_eq!(rows.iter().filter(|row| row.contains_key("harm")).count(), 2);

        let sanction = rows
            .iter()
            .find(|row| row["action"] == Term::Resource(vocab::sanction_lot_merging_law()))
            .unwrap();
        assert_eq!(
            sanction["instrument"],
            Term::Resource(vocab::lot_merging_instrument())
        );
        assert_eq!(
            sanction["norm"],
            Term::Resource(vocab::lot_merging_law_2020())
        );
    }
}
