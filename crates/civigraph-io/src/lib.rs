//! # Civigraph IO
//!
//! The exchange boundary of the pipeline: a versioned JSON snapshot of
//! the fact set, preserving literal datatypes and provenance tags
//! losslessly. Loading a snapshot is the one place where the pipeline
//! is allowed to fail hard; every later stage treats bad data as
//! report material instead.

use civigraph_core::model::Fact;
use civigraph_store::{FactStore, Provenance};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Current snapshot format version.
pub const FORMAT_VERSION: u32 = 1;

/// Snapshot boundary errors. These are fatal to the pipeline.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("cannot access snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed snapshot {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("snapshot version {found} is not supported (expected {FORMAT_VERSION})")]
    UnsupportedVersion { found: u32 },
}

/// One serialized fact with its provenance tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotFact {
    #[serde(flatten)]
    pub fact: Fact,
    pub provenance: Provenance,
}

/// On-disk snapshot document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub format_version: u32,
    pub facts: Vec<SnapshotFact>,
}

impl Snapshot {
    /// Capture every fact of the store.
    pub fn full(store: &FactStore) -> Self {
        Snapshot {
            format_version: FORMAT_VERSION,
            facts: store
                .stored_facts()
                .iter()
                .map(|stored| SnapshotFact {
                    fact: stored.fact.clone(),
                    provenance: stored.provenance.clone(),
                })
                .collect(),
        }
    }

    /// Capture the asserted subset only; a reload then recomputes the
    /// closure instead of trusting stale inferences.
    pub fn asserted(store: &FactStore) -> Self {
        Snapshot {
            format_version: FORMAT_VERSION,
            facts: store
                .stored_facts()
                .iter()
                .filter(|stored| stored.provenance.is_asserted())
                .map(|stored| SnapshotFact {
                    fact: stored.fact.clone(),
                    provenance: Provenance::Asserted,
                })
                .collect(),
        }
    }

    /// Rebuild a store, replaying facts in snapshot order.
    pub fn into_store(self) -> FactStore {
        let mut store = FactStore::new();
        for entry in self.facts {
            store.add(entry.fact, entry.provenance);
        }
        store
    }
}

/// Write a snapshot to `path` as pretty-printed JSON.
pub fn save(snapshot: &Snapshot, path: &Path) -> Result<(), SnapshotError> {
    let json = serde_json::to_string_pretty(snapshot).map_err(|source| {
        SnapshotError::Malformed {
            path: path.to_path_buf(),
            source,
        }
    })?;
    fs::write(path, json).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), facts = snapshot.facts.len(), "snapshot written");
    Ok(())
}

/// Load a snapshot and rebuild the store it describes.
pub fn load(path: &Path) -> Result<FactStore, SnapshotError> {
    let json = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot: Snapshot =
        serde_json::from_str(&json).map_err(|source| SnapshotError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
    if snapshot.format_version != FORMAT_VERSION {
        return Err(SnapshotError::UnsupportedVersion {
            found: snapshot.format_version,
        });
    }
    tracing::info!(path = %path.display(), facts = snapshot.facts.len(), "snapshot loaded");
    Ok(snapshot.into_store())
}
