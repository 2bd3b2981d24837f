//! Drop registry.
//!
//! Maps a single-use public key to its funded drop. A key moves through
//! `absent -> funded -> spent` and never leaves `spent`: [`take`] removes the
//! drop and leaves a tombstone behind, so a key exposed by one claim can never
//! be funded and claimed again.

use soroban_sdk::{BytesN, Env};

use crate::storage::{LinkdropKey, DROP_TTL_EXTEND, DROP_TTL_THRESHOLD};
use crate::types::DropRecord;
use crate::LinkdropError;

/// Register a new drop for `key`.
///
/// Fails with `DuplicateKey` if `key` is already funded or has been spent.
pub fn fund(env: &Env, key: &BytesN<32>, record: &DropRecord) -> Result<(), LinkdropError> {
    let storage = env.storage().persistent();
    let drop_key = LinkdropKey::Drop(key.clone());

    if storage.has(&drop_key) || storage.has(&LinkdropKey::SpentKey(key.clone())) {
        return Err(LinkdropError::DuplicateKey);
    }

    storage.set(&drop_key, record);
    storage.extend_ttl(&drop_key, DROP_TTL_THRESHOLD, DROP_TTL_EXTEND);

    set_count(env, count(env) + 1);
    Ok(())
}

/// Remove and return the drop for `key`, marking the key spent.
///
/// This is the only way a drop leaves the registry.
pub fn take(env: &Env, key: &BytesN<32>) -> Result<DropRecord, LinkdropError> {
    let storage = env.storage().persistent();
    let drop_key = LinkdropKey::Drop(key.clone());

    let record: DropRecord = storage
        .get(&drop_key)
        .ok_or(LinkdropError::UnknownOrClaimedKey)?;

    storage.remove(&drop_key);

    let spent_key = LinkdropKey::SpentKey(key.clone());
    storage.set(&spent_key, &true);
    storage.extend_ttl(&spent_key, DROP_TTL_THRESHOLD, DROP_TTL_EXTEND);

    set_count(env, count(env).saturating_sub(1));
    Ok(record)
}

/// Look at the drop for `key` without touching it.
pub fn peek(env: &Env, key: &BytesN<32>) -> Option<DropRecord> {
    env.storage()
        .persistent()
        .get(&LinkdropKey::Drop(key.clone()))
}

/// Check if `key` has already been claimed.
pub fn is_spent(env: &Env, key: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&LinkdropKey::SpentKey(key.clone()))
}

/// Number of drops currently waiting to be claimed.
pub fn count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&LinkdropKey::DropCount)
        .unwrap_or(0)
}

fn set_count(env: &Env, count: u64) {
    env.storage().instance().set(&LinkdropKey::DropCount, &count);
}
