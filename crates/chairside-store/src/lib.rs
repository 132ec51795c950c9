//! Chairside Store
//!
//! Entity-store collaborator for the chairside engine: loads the static JSON
//! datasets (materials, procedures), fingerprints them, and offers a
//! TTL-gated key-value cache plus saved comparison sessions.
//!
//! The engine never reaches in here on its own; callers load a
//! [`DatasetStore`] and pass plain slices into the scoring functions.
//!
//! # Modules
//!
//! - [`cache`]: TTL key-value cache with caller-supplied timestamps
//! - [`fingerprint`]: SHA-256 dataset fingerprints for cache versioning
//! - [`session`]: Saved comparison sessions

pub mod cache;
pub mod fingerprint;
pub mod session;

pub use cache::TtlCache;
pub use fingerprint::{dataset_fingerprint, fingerprint};
pub use session::{ComparisonSession, SessionStore};

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use chairside_core::models::{Material, Procedure};

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dataset not found: {0}")]
    MissingDataset(String),

    #[error("Duplicate entity id: {0}")]
    DuplicateId(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Materials dataset file name inside a dataset directory.
const MATERIALS_FILE: &str = "materials.json";
/// Procedures dataset file name inside a dataset directory.
const PROCEDURES_FILE: &str = "procedures.json";

/// Immutable collections of materials and procedures loaded from JSON.
pub struct DatasetStore {
    materials: Vec<Material>,
    procedures: Vec<Procedure>,
    fingerprint: String,
}

impl DatasetStore {
    /// Parse both datasets from JSON documents.
    ///
    /// Rejects duplicate ids within either collection; the engine's ranking
    /// contract assumes unique ids per candidate set.
    pub fn from_json(materials_json: &str, procedures_json: &str) -> StoreResult<Self> {
        let materials: Vec<Material> = serde_json::from_str(materials_json)?;
        let procedures: Vec<Procedure> = serde_json::from_str(procedures_json)?;

        check_unique_ids(materials.iter().map(|m| m.id.as_str()))?;
        check_unique_ids(procedures.iter().map(|p| p.id.as_str()))?;

        let fingerprint = dataset_fingerprint(materials_json, procedures_json);
        debug!(
            materials = materials.len(),
            procedures = procedures.len(),
            fingerprint = %fingerprint,
            "loaded datasets"
        );

        Ok(Self {
            materials,
            procedures,
            fingerprint,
        })
    }

    /// Load `materials.json` and `procedures.json` from a dataset directory.
    pub fn load(dir: &Path) -> StoreResult<Self> {
        let materials_path = dir.join(MATERIALS_FILE);
        let procedures_path = dir.join(PROCEDURES_FILE);

        for path in [&materials_path, &procedures_path] {
            if !path.exists() {
                return Err(StoreError::MissingDataset(path.display().to_string()));
            }
        }

        let materials_json = fs::read_to_string(&materials_path)?;
        let procedures_json = fs::read_to_string(&procedures_path)?;
        Self::from_json(&materials_json, &procedures_json)
    }

    /// All materials, load order preserved.
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// All procedures, load order preserved.
    pub fn procedures(&self) -> &[Procedure] {
        &self.procedures
    }

    /// Look up a material by id.
    pub fn material(&self, id: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    /// Look up a procedure by id.
    pub fn procedure(&self, id: &str) -> Option<&Procedure> {
        self.procedures.iter().find(|p| p.id == id)
    }

    /// Fingerprint of the loaded dataset bytes, for cache versioning.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

fn check_unique_ids<'a>(ids: impl Iterator<Item = &'a str>) -> StoreResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(StoreError::DuplicateId(id.to_string()));
        }
    }
    Ok(())
}
