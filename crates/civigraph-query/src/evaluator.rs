//! Plan evaluation
//!
//! Nested-loop evaluation over the store's posting-list indices. The
//! evaluator is strictly read-only and never fails: unmatched patterns
//! produce zero rows, and constraints over unbound variables reject the
//! row.

use crate::pattern::{Constraint, Operand, Plan, PatternTerm, TriplePattern};
use civigraph_core::model::{Fact, Resource, Term};
use civigraph_store::FactStore;
use itertools::Itertools;
use std::collections::{HashMap, HashSet};

/// One result row: variable name to bound term.
pub type Bindings = HashMap<String, Term>;

/// Read-only query engine over a fact store.
pub struct QueryEngine<'a> {
    store: &'a FactStore,
}

/// Resolution of a subject/relation position against a partial row.
enum Position {
    Bound(Resource),
    Unbound,
    /// A literal can never occupy this position.
    Impossible,
}

impl<'a> QueryEngine<'a> {
    pub fn new(store: &'a FactStore) -> Self {
        QueryEngine { store }
    }

    pub fn evaluate(&self, plan: &Plan) -> Vec<Bindings> {
        match plan {
            Plan::Bgp(patterns) => self.evaluate_bgp(patterns),
            Plan::Join(left, right) => {
                let left_rows = self.evaluate(left);
                let right_rows = self.evaluate(right);
                let mut rows = Vec::new();
                for left_row in &left_rows {
                    for right_row in &right_rows {
                        if let Some(merged) = merge(left_row, right_row) {
                            rows.push(merged);
                        }
                    }
                }
                rows
            }
            Plan::LeftJoin { left, right } => {
                let left_rows = self.evaluate(left);
                let right_rows = self.evaluate(right);
                let mut rows = Vec::new();
                for left_row in &left_rows {
                    let mut matched = false;
                    for right_row in &right_rows {
                        if let Some(merged) = merge(left_row, right_row) {
                            rows.push(merged);
                            matched = true;
                        }
                    }
                    if !matched {
                        rows.push(left_row.clone());
                    }
                }
                rows
            }
            Plan::Union(left, right) => {
                let mut rows = self.evaluate(left);
                rows.extend(self.evaluate(right));
                rows
            }
            Plan::Filter(inner, constraint) => {
                let mut rows = self.evaluate(inner);
                rows.retain(|row| satisfied(constraint, row));
                rows
            }
            Plan::Distinct(inner) => {
                let rows = self.evaluate(inner);
                let mut seen: HashSet<Vec<(String, Term)>> = HashSet::new();
                rows.into_iter()
                    .filter(|row| {
                        let key: Vec<_> = row
                            .iter()
                            .map(|(k, v)| (k.clone(), v.clone()))
                            .sorted()
                            .collect();
                        seen.insert(key)
                    })
                    .collect()
            }
        }
    }

    fn evaluate_bgp(&self, patterns: &[TriplePattern]) -> Vec<Bindings> {
        let mut rows = vec![Bindings::new()];
        for pattern in patterns {
            let mut next = Vec::new();
            for row in &rows {
                self.extend_row(row, pattern, &mut next);
            }
            rows = next;
            if rows.is_empty() {
                break;
            }
        }
        rows
    }

    fn extend_row(&self, row: &Bindings, pattern: &TriplePattern, out: &mut Vec<Bindings>) {
        let subject = match resolve_resource(&pattern.subject, row) {
            Position::Bound(r) => Some(r),
            Position::Unbound => None,
            Position::Impossible => return,
        };
        let relation = match resolve_resource(&pattern.relation, row) {
            Position::Bound(r) => Some(r),
            Position::Unbound => None,
            Position::Impossible => return,
        };
        let object = resolve_term(&pattern.object, row);

        for fact in self
            .store
            .matching(subject.as_ref(), relation.as_ref(), object.as_ref())
        {
            if let Some(extended) = bind(row, pattern, fact) {
                out.push(extended);
            }
        }
    }
}

fn resolve_resource(position: &PatternTerm, row: &Bindings) -> Position {
    let term = match position {
        PatternTerm::Bound(term) => Some(term),
        PatternTerm::Var(name) => row.get(name),
    };
    match term {
        Some(Term::Resource(r)) => Position::Bound(r.clone()),
        Some(Term::Literal(_)) => Position::Impossible,
        None => Position::Unbound,
    }
}

fn resolve_term(position: &PatternTerm, row: &Bindings) -> Option<Term> {
    match position {
        PatternTerm::Bound(term) => Some(term.clone()),
        PatternTerm::Var(name) => row.get(name).cloned(),
    }
}

/// Extend `row` with the variables `pattern` binds against `fact`,
/// checking consistency when a variable occurs more than once.
fn bind(row: &Bindings, pattern: &TriplePattern, fact: &Fact) -> Option<Bindings> {
    let mut extended = row.clone();
    let positions = [
        (&pattern.subject, Term::Resource(fact.subject.clone())),
        (&pattern.relation, Term::Resource(fact.relation.clone())),
        (&pattern.object, fact.object.clone()),
    ];
    for (position, value) in positions {
        if let PatternTerm::Var(name) = position {
            match extended.get(name) {
                Some(existing) if existing != &value => return None,
                Some(_) => {}
                None => {
                    extended.insert(name.clone(), value);
                }
            }
        }
    }
    Some(extended)
}

/// Merge two rows when their shared variables agree.
fn merge(left: &Bindings, right: &Bindings) -> Option<Bindings> {
    for (name, value) in right {
        if let Some(existing) = left.get(name) {
            if existing != value {
                return None;
            }
        }
    }
    let mut merged = left.clone();
    for (name, value) in right {
        merged.entry(name.clone()).or_insert_with(|| value.clone());
    }
    Some(merged)
}

fn satisfied(constraint: &Constraint, row: &Bindings) -> bool {
    let resolve = |operand: &Operand| -> Option<Term> {
        match operand {
            Operand::Var(name) => row.get(name).cloned(),
            Operand::Value(term) => Some(term.clone()),
        }
    };

    match constraint {
        Constraint::Eq(a, b) => match (resolve(a), resolve(b)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
        Constraint::Ne(a, b) => match (resolve(a), resolve(b)) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        },
        Constraint::Lt(a, b) => match (resolve(a), resolve(b)) {
            (Some(a), Some(b)) => a.lexical_form() < b.lexical_form(),
            _ => false,
        },
        Constraint::Gt(a, b) => match (resolve(a), resolve(b)) {
            (Some(a), Some(b)) => a.lexical_form() > b.lexical_form(),
            _ => false,
        },
        Constraint::Contains { var, needle } => row
            .get(var)
            .map_or(false, |term| term.lexical_form().contains(needle)),
    }
}
