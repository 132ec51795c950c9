//! Dataset fingerprints.
//!
//! A fingerprint is the SHA-256 hex digest of dataset bytes. Cached
//! derivations key on it, so edits to the underlying JSON invalidate them
//! without any timestamp bookkeeping.

use sha2::{Digest, Sha256};

/// SHA-256 hex digest of one byte payload.
pub fn fingerprint(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Combined digest of both dataset documents.
///
/// The documents are hashed in order with a separator so swapped or
/// concatenated inputs cannot collide.
pub fn dataset_fingerprint(materials_json: &str, procedures_json: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(materials_json.as_bytes());
    hasher.update(b"\n--\n");
    hasher.update(procedures_json.as_bytes());
    hex::encode(hasher.finalize())
}
