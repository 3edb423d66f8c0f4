//! Fact store implementation with provenance

use crate::provenance::Provenance;
use chrono::{DateTime, Utc};
use civigraph_core::model::{Fact, Resource, Term};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::{HashMap, HashSet};

type PostingList = SmallVec<[usize; 8]>;

/// Stored fact with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredFact {
    /// The fact itself
    pub fact: Fact,
    /// Whether the fact was asserted or inferred
    pub provenance: Provenance,
    /// When this fact entered the store
    pub asserted_at: DateTime<Utc>,
}

/// In-memory fact store with set semantics and per-position indices.
///
/// Adding an existing fact is a no-op regardless of provenance, so the
/// asserted tag of a fact can never be overwritten by a later inference
/// of the same triple.
#[derive(Debug, Clone, Default)]
pub struct FactStore {
    facts: Vec<StoredFact>,
    /// Set view for `contains` and duplicate suppression
    seen: HashSet<Fact>,
    subject_index: HashMap<Resource, PostingList>,
    relation_index: HashMap<Resource, PostingList>,
    object_index: HashMap<Term, PostingList>,
}

impl FactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fact with the given provenance. Returns `false` when the
    /// fact was already present (duplicates are ignored).
    pub fn add(&mut self, fact: Fact, provenance: Provenance) -> bool {
        if self.seen.contains(&fact) {
            return false;
        }

        let index = self.facts.len();
        self.subject_index
            .entry(fact.subject.clone())
            .or_default()
            .push(index);
        self.relation_index
            .entry(fact.relation.clone())
            .or_default()
            .push(index);
        self.object_index
            .entry(fact.object.clone())
            .or_default()
            .push(index);
        self.seen.insert(fact.clone());
        self.facts.push(StoredFact {
            fact,
            provenance,
            asserted_at: Utc::now(),
        });
        true
    }

    /// Insert an asserted fact (construction-phase shorthand).
    pub fn assert_fact(&mut self, fact: Fact) -> bool {
        self.add(fact, Provenance::Asserted)
    }

    pub fn contains(&self, fact: &Fact) -> bool {
        self.seen.contains(fact)
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// All facts matching the bound positions; `None` is a wildcard.
    ///
    /// The returned iterator is lazy and restartable (it is `Clone`).
    /// Candidates come from the smallest posting list among the bound
    /// positions, so a match never scans the whole store unless every
    /// position is a wildcard. Absence yields an empty iterator, never
    /// an error.
    pub fn matching(
        &self,
        subject: Option<&Resource>,
        relation: Option<&Resource>,
        object: Option<&Term>,
    ) -> Matches<'_> {
        let mut best: Option<&PostingList> = None;
        let mut miss = false;

        let lookups = [
            subject.map(|s| self.subject_index.get(s)),
            relation.map(|r| self.relation_index.get(r)),
            object.map(|o| self.object_index.get(o)),
        ];
        for lookup in lookups {
            match lookup {
                Some(Some(list)) => {
                    if best.map_or(true, |b| list.len() < b.len()) {
                        best = Some(list);
                    }
                }
                // A bound position with no posting list cannot match anything.
                Some(None) => miss = true,
                None => {}
            }
        }

        let candidates = if miss {
            Candidates::Empty
        } else {
            match best {
                Some(list) => Candidates::Posting(list.iter()),
                None => Candidates::All(0..self.facts.len()),
            }
        };

        Matches {
            store: self,
            candidates,
            subject: subject.cloned(),
            relation: relation.cloned(),
            object: object.cloned(),
        }
    }

    /// All facts, in insertion order.
    pub fn facts(&self) -> impl Iterator<Item = &Fact> {
        self.facts.iter().map(|stored| &stored.fact)
    }

    /// All stored facts with their metadata.
    pub fn stored_facts(&self) -> &[StoredFact] {
        &self.facts
    }

    /// The asserted subset, in insertion order.
    pub fn asserted_facts(&self) -> impl Iterator<Item = &Fact> {
        self.facts
            .iter()
            .filter(|stored| stored.provenance.is_asserted())
            .map(|stored| &stored.fact)
    }

    /// Drop every inferred fact, keeping the asserted subset and its
    /// timestamps. Used to recompute a closure after schema edits.
    pub fn retain_asserted(&mut self) {
        let asserted: Vec<StoredFact> = self
            .facts
            .drain(..)
            .filter(|stored| stored.provenance.is_asserted())
            .collect();

        self.seen.clear();
        self.subject_index.clear();
        self.relation_index.clear();
        self.object_index.clear();

        for stored in asserted {
            let index = self.facts.len();
            self.subject_index
                .entry(stored.fact.subject.clone())
                .or_default()
                .push(index);
            self.relation_index
                .entry(stored.fact.relation.clone())
                .or_default()
                .push(index);
            self.object_index
                .entry(stored.fact.object.clone())
                .or_default()
                .push(index);
            self.seen.insert(stored.fact.clone());
            self.facts.push(stored);
        }
    }

    pub fn statistics(&self) -> StoreStatistics {
        let inferred = self
            .facts
            .iter()
            .filter(|stored| stored.provenance.is_inferred())
            .count();
        StoreStatistics {
            total_facts: self.facts.len(),
            asserted_facts: self.facts.len() - inferred,
            inferred_facts: inferred,
        }
    }
}

/// Store statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStatistics {
    pub total_facts: usize,
    pub asserted_facts: usize,
    pub inferred_facts: usize,
}

#[derive(Debug, Clone)]
enum Candidates<'a> {
    Posting(std::slice::Iter<'a, usize>),
    All(std::ops::Range<usize>),
    Empty,
}

impl Iterator for Candidates<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self {
            Candidates::Posting(iter) => iter.next().copied(),
            Candidates::All(range) => range.next(),
            Candidates::Empty => None,
        }
    }
}

/// Lazy pattern-match iterator over a [`FactStore`].
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    store: &'a FactStore,
    candidates: Candidates<'a>,
    subject: Option<Resource>,
    relation: Option<Resource>,
    object: Option<Term>,
}

impl<'a> Iterator for Matches<'a> {
    type Item = &'a Fact;

    fn next(&mut self) -> Option<&'a Fact> {
        for index in self.candidates.by_ref() {
            let fact = &self.store.facts[index].fact;
            if let Some(s) = &self.subject {
                if &fact.subject != s {
                    continue;
                }
            }
            if let Some(r) = &self.relation {
                if &fact.relation != r {
                    continue;
                }
            }
            if let Some(o) = &self.object {
                if &fact.object != o {
                    continue;
                }
            }
            return Some(fact);
        }
        None
    }
}
