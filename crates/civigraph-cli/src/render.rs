//! Human-readable rendering of binding rows and validation reports.
//!
//! This is the only place in the workspace that turns engine output
//! into display text; everything below it works with resources and
//! terms.

use civigraph::core::vocabulary;
use civigraph::prelude::*;
use civigraph::query::Bindings;

/// Row entries sorted by variable name for stable output.
fn sorted_pairs(row: &Bindings) -> Vec<(&String, &Term)> {
    let mut pairs: Vec<_> = row.iter().collect();
    pairs.sort_by_key(|(name, _)| name.as_str());
    pairs
}

/// Display form of a term: the rdfs:label when the store has one, the
/// local name otherwise, and the plain value for literals.
pub fn display_term(store: &FactStore, term: &Term) -> String {
    match term {
        Term::Resource(resource) => store
            .matching(Some(resource), Some(&vocabulary::rdfs_label()), None)
            .find_map(|fact| fact.object.as_literal().map(Literal::lexical_form))
            .unwrap_or_else(|| resource.local_name().to_string()),
        Term::Literal(literal) => literal.lexical_form(),
    }
}

/// Render query rows, one block per row.
pub fn render_rows(store: &FactStore, rows: &[Bindings]) -> String {
    if rows.is_empty() {
        return "no results\n".to_string();
    }

    let mut out = String::new();
    for (index, row) in rows.iter().enumerate() {
        out.push_str(&format!("[{}]\n", index + 1));
        for (name, term) in sorted_pairs(row) {
            out.push_str(&format!("  {name}: {}\n", display_term(store, term)));
        }
    }
    out.push_str(&format!("{} result(s)\n", rows.len()));
    out
}

/// Render a validation report with its verdict.
pub fn render_report(report: &ValidationReport) -> String {
    let mut out = String::new();
    out.push_str("validation report\n");
    out.push_str(&format!("  errors:   {}\n", report.errors.len()));
    for error in &report.errors {
        out.push_str(&format!("    - {error}\n"));
    }
    out.push_str(&format!("  warnings: {}\n", report.warnings.len()));
    for warning in &report.warnings {
        out.push_str(&format!("    - {warning}\n"));
    }
    if let Some(pairs) = report.details.get("disjoint_pairs") {
        out.push_str(&format!("  disjoint pairs: {pairs}\n"));
    }
    out.push_str(if report.is_valid() {
        "verdict: PASS\n"
    } else {
        "verdict: FAIL\n"
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use civigraph::domain_urban::vocab;

    #[test]
    fn labels_win_over_local_names() {
        let mut store = FactStore::new();
        civigraph::domain_urban::populate_instances(&mut store);

        let labeled = display_term(&store, &Term::Resource(vocab::city_hall()));
        assert_eq!(labeled, "City Hall");

        let unlabeled = display_term(
            &store,
            &Term::Resource(Resource::new("http://example.org/Mystery")),
        );
        assert_eq!(unlabeled, "Mystery");

        let literal = display_term(&store, &Term::Literal(Literal::boolean(false)));
        assert_eq!(literal, "false");
    }

    #[test]
    fn rows_render_sorted_and_counted() {
        let store = FactStore::new();
        let mut row = Bindings::new();
        row.insert(
            "zone".to_string(),
            Term::Resource(Resource::new("http://example.org/ZoneA")),
        );
        row.insert("allows".to_string(), Term::Literal(Literal::boolean(true)));

        let text = render_rows(&store, &[row]);
        let allows = text.find("allows:").unwrap();
        let zone = text.find("zone:").unwrap();
        assert!(allows < zone, "variables are sorted");
        assert!(text.ends_with("1 result(s)\n"));
    }

    #[test]
    fn empty_rows_say_so() {
        assert_eq!(render_rows(&FactStore::new(), &[]), "no results\n");
    }

    #[test]
    fn report_verdict_follows_errors() {
        let mut report = ValidationReport::default();
        assert!(render_report(&report).contains("PASS"));
        report.errors.push("the store holds no facts".to_string());
        assert!(render_report(&report).contains("FAIL"));
    }
}
