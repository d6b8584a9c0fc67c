//! Checksum calculation for dataset change detection.

use sha2::{Digest, Sha256};

/// Calculate SHA-256 checksum of the raw movie list content.
///
/// Reloading a dataset with an unchanged checksum is a no-op in the service
/// layer, so restarts against the same file do not rewrite the store.
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn dataset_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}
