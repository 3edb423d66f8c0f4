//! Provenance tags for stored facts

use serde::{Deserialize, Serialize};

/// Origin of a fact.
///
/// The distinction is load-bearing: a closure must be recomputable from
/// the asserted subset alone, so the tag survives every store operation
/// and the snapshot round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provenance {
    /// Entered during schema or instance construction.
    Asserted,
    /// Produced by the inference engine.
    Inferred {
        /// Closure rule that derived the fact (e.g. "subclass-propagation").
        rule: String,
    },
}

impl Provenance {
    pub fn inferred<S: Into<String>>(rule: S) -> Self {
        Provenance::Inferred { rule: rule.into() }
    }

    pub fn is_asserted(&self) -> bool {
        matches!(self, Provenance::Asserted)
    }

    pub fn is_inferred(&self) -> bool {
        matches!(self, Provenance::Inferred { .. })
    }
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provenance::Asserted => write!(f, "asserted"),
            Provenance::Inferred { rule } => write!(f, "inferred:{}", rule),
        }
    }
}
