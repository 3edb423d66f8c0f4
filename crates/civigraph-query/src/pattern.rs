//! Query plan algebra
//!
//! Queries are built programmatically: a basic graph pattern is a list
//! of triple patterns sharing variables, and plans compose through
//! join, union, left join (optional) and filter nodes.

use civigraph_core::model::{Resource, Term};

/// One position of a triple pattern: a named variable or a bound term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternTerm {
    Var(String),
    Bound(Term),
}

/// Variable position shorthand.
pub fn var(name: &str) -> PatternTerm {
    PatternTerm::Var(name.to_string())
}

/// Bound resource position shorthand.
pub fn res(resource: Resource) -> PatternTerm {
    PatternTerm::Bound(Term::Resource(resource))
}

impl From<Resource> for PatternTerm {
    fn from(r: Resource) -> Self {
        PatternTerm::Bound(Term::Resource(r))
    }
}

impl From<Term> for PatternTerm {
    fn from(t: Term) -> Self {
        PatternTerm::Bound(t)
    }
}

/// Triple pattern with variables shared across a basic graph pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriplePattern {
    pub subject: PatternTerm,
    pub relation: PatternTerm,
    pub object: PatternTerm,
}

/// Triple pattern shorthand.
pub fn pattern(
    subject: impl Into<PatternTerm>,
    relation: impl Into<PatternTerm>,
    object: impl Into<PatternTerm>,
) -> TriplePattern {
    TriplePattern {
        subject: subject.into(),
        relation: relation.into(),
        object: object.into(),
    }
}

/// Filter operand: a row variable or a constant term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Var(String),
    Value(Term),
}

/// Row constraint evaluated against bound variables. A constraint over
/// an unbound variable rejects the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    Eq(Operand, Operand),
    Ne(Operand, Operand),
    /// Lexicographic order over lexical forms.
    Lt(Operand, Operand),
    Gt(Operand, Operand),
    /// Substring containment over the lexical form of a variable.
    Contains { var: String, needle: String },
}

impl Constraint {
    pub fn vars_eq(a: &str, b: &str) -> Self {
        Constraint::Eq(Operand::Var(a.to_string()), Operand::Var(b.to_string()))
    }

    pub fn vars_ne(a: &str, b: &str) -> Self {
        Constraint::Ne(Operand::Var(a.to_string()), Operand::Var(b.to_string()))
    }

    pub fn vars_lt(a: &str, b: &str) -> Self {
        Constraint::Lt(Operand::Var(a.to_string()), Operand::Var(b.to_string()))
    }

    pub fn vars_gt(a: &str, b: &str) -> Self {
        Constraint::Gt(Operand::Var(a.to_string()), Operand::Var(b.to_string()))
    }

    pub fn var_eq(name: &str, value: impl Into<Term>) -> Self {
        Constraint::Eq(Operand::Var(name.to_string()), Operand::Value(value.into()))
    }

    pub fn contains(name: &str, needle: &str) -> Self {
        Constraint::Contains {
            var: name.to_string(),
            needle: needle.to_string(),
        }
    }
}

/// Composable query plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// Basic graph pattern: conjunction of triple patterns joined on
    /// shared variables, in pattern order.
    Bgp(Vec<TriplePattern>),
    /// Inner join on shared variables.
    Join(Box<Plan>, Box<Plan>),
    /// Left outer join: rows of `left` survive even without a match.
    LeftJoin { left: Box<Plan>, right: Box<Plan> },
    /// Row concatenation; branches may bind different variable sets.
    Union(Box<Plan>, Box<Plan>),
    Filter(Box<Plan>, Constraint),
    /// Order-preserving duplicate removal.
    Distinct(Box<Plan>),
}

impl Plan {
    pub fn bgp(patterns: Vec<TriplePattern>) -> Self {
        Plan::Bgp(patterns)
    }

    pub fn join(self, other: Plan) -> Self {
        Plan::Join(Box::new(self), Box::new(other))
    }

    pub fn optional(self, right: Plan) -> Self {
        Plan::LeftJoin {
            left: Box::new(self),
            right: Box::new(right),
        }
    }

    pub fn union(self, other: Plan) -> Self {
        Plan::Union(Box::new(self), Box::new(other))
    }

    pub fn filter(self, constraint: Constraint) -> Self {
        Plan::Filter(Box::new(self), constraint)
    }

    pub fn distinct(self) -> Self {
        Plan::Distinct(Box::new(self))
    }
}
