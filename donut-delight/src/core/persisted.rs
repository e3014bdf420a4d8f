//! Persisted state codec
//!
//! Display order and selection are stored as JSON arrays of item ids under
//! two independent session keys.

use super::session_store::{SessionStore, StoreError};
use thiserror::Error;

/// Session key of the serialized display order
pub const ORDER_KEY: &str = "donutOrder";
/// Session key of the serialized selection
pub const SELECTION_KEY: &str = "chompedDonuts";

#[derive(Debug, Error)]
pub enum PersistedStateError {
    #[error("persisted state corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Encode ids as a JSON array
pub fn encode_ids(ids: &[u64]) -> Result<String, serde_json::Error> {
    serde_json::to_string(ids)
}

/// Decode a JSON array of ids
///
/// Anything other than an array of non-negative integers is corrupt.
pub fn decode_ids(raw: &str) -> Result<Vec<u64>, PersistedStateError> {
    Ok(serde_json::from_str(raw)?)
}

/// Read and decode the ids stored under `key`
///
/// `Ok(None)` when the key is absent.
pub fn read_ids(
    store: &impl SessionStore,
    key: &str,
) -> Result<Option<Vec<u64>>, PersistedStateError> {
    store.get(key).map(|raw| decode_ids(&raw)).transpose()
}

/// Encode and store ids under `key`
pub fn write_ids(store: &mut impl SessionStore, key: &str, ids: &[u64]) -> Result<(), StoreError> {
    store.set(key, &encode_ids(ids)?)
}
