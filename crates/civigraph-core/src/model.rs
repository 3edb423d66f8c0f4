//! Fact-graph data model

use serde::{Deserialize, Serialize};

/// IRI-like identifier naming an entity, class or relation.
///
/// Identity is value equality of the identifier string. Resources are
/// cheap to clone and never destroyed once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resource(String);

impl Resource {
    pub fn new<S: Into<String>>(iri: S) -> Self {
        Resource(iri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fragment after the last `#` or `/`, or the full IRI when there is none.
    pub fn local_name(&self) -> &str {
        match self.0.rfind(['#', '/']) {
            Some(pos) => &self.0[pos + 1..],
            None => &self.0,
        }
    }
}

impl From<String> for Resource {
    fn from(s: String) -> Self {
        Resource(s)
    }
}

impl From<&str> for Resource {
    fn from(s: &str) -> Self {
        Resource(s.to_string())
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Resource {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Typed scalar value. Only ever the object of a fact, never subject or
/// relation.
///
/// Decimals keep their lexical form so snapshots round-trip without
/// floating-point drift.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "datatype", content = "value")]
pub enum Literal {
    String(String),
    Boolean(bool),
    Decimal(String),
}

impl Literal {
    pub fn string<S: Into<String>>(value: S) -> Self {
        Literal::String(value.into())
    }

    pub fn boolean(value: bool) -> Self {
        Literal::Boolean(value)
    }

    /// Decimal from its lexical form, e.g. `Literal::decimal("2.0")`.
    pub fn decimal<S: Into<String>>(lexical: S) -> Self {
        Literal::Decimal(lexical.into())
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Literal::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            Literal::Decimal(lex) => lex.parse().ok(),
            _ => None,
        }
    }

    /// Lexical form used for display and filter comparisons.
    pub fn lexical_form(&self) -> String {
        match self {
            Literal::String(s) => s.clone(),
            Literal::Boolean(b) => b.to_string(),
            Literal::Decimal(lex) => lex.clone(),
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::String(s) => write!(f, "\"{}\"", s),
            Literal::Boolean(b) => write!(f, "{}", b),
            Literal::Decimal(lex) => write!(f, "{}", lex),
        }
    }
}

/// Object position of a fact: a resource or a literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Term {
    Resource(Resource),
    Literal(Literal),
}

impl Term {
    pub fn as_resource(&self) -> Option<&Resource> {
        match self {
            Term::Resource(r) => Some(r),
            Term::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(l) => Some(l),
            Term::Resource(_) => None,
        }
    }

    pub fn is_resource(&self) -> bool {
        matches!(self, Term::Resource(_))
    }

    /// Lexical form: the IRI for resources, the value for literals.
    pub fn lexical_form(&self) -> String {
        match self {
            Term::Resource(r) => r.as_str().to_string(),
            Term::Literal(l) => l.lexical_form(),
        }
    }
}

impl From<Resource> for Term {
    fn from(r: Resource) -> Self {
        Term::Resource(r)
    }
}

impl From<&Resource> for Term {
    fn from(r: &Resource) -> Self {
        Term::Resource(r.clone())
    }
}

impl From<Literal> for Term {
    fn from(l: Literal) -> Self {
        Term::Literal(l)
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Resource(r) => write!(f, "{}", r),
            Term::Literal(l) => write!(f, "{}", l),
        }
    }
}

/// Atomic (subject, relation, object) unit of the knowledge graph.
///
/// Facts are immutable once created; the store gives them set semantics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fact {
    pub subject: Resource,
    pub relation: Resource,
    pub object: Term,
}

impl Fact {
    pub fn new<S, R, O>(subject: S, relation: R, object: O) -> Self
    where
        S: Into<Resource>,
        R: Into<Resource>,
        O: Into<Term>,
    {
        Fact {
            subject: subject.into(),
            relation: relation.into(),
            object: object.into(),
        }
    }
}

impl std::fmt::Display for Fact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.subject, self.relation, self.object)
    }
}
