//! Pending account creations and their settlement.
//!
//! An entry point that asks the factory for a new account parks the funds in
//! a [`PendingCreation`] keyed by a fresh request id. When the factory reports
//! back, [`close`] removes that record and [`settle`] decides where the escrow
//! goes. Once closed, a request id can never be settled again.

use soroban_sdk::Env;

use crate::storage::{LinkdropKey, DROP_TTL_EXTEND, DROP_TTL_THRESHOLD};
use crate::types::{CreationOutcome, PendingCreation, Settlement};
use crate::LinkdropError;

/// First id handed out by a fresh contract.
pub const FIRST_REQUEST_ID: u64 = 1;

/// Store `pending` under a new request id and return the id.
pub fn open(env: &Env, pending: &PendingCreation) -> u64 {
    let request_id: u64 = env
        .storage()
        .instance()
        .get(&LinkdropKey::NextRequestId)
        .unwrap_or(FIRST_REQUEST_ID);

    let key = LinkdropKey::Pending(request_id);
    env.storage().persistent().set(&key, pending);
    env.storage()
        .persistent()
        .extend_ttl(&key, DROP_TTL_THRESHOLD, DROP_TTL_EXTEND);

    env.storage()
        .instance()
        .set(&LinkdropKey::NextRequestId, &(request_id + 1));

    request_id
}

/// Get the escrow for an unresolved request.
pub fn get(env: &Env, request_id: u64) -> Option<PendingCreation> {
    env.storage()
        .persistent()
        .get(&LinkdropKey::Pending(request_id))
}

/// Remove and return the escrow for `request_id`.
///
/// Fails with `UnknownRequest` if the id was never issued or is already closed.
pub fn close(env: &Env, request_id: u64) -> Result<PendingCreation, LinkdropError> {
    let key = LinkdropKey::Pending(request_id);
    let pending: PendingCreation = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(LinkdropError::UnknownRequest)?;

    env.storage().persistent().remove(&key);
    Ok(pending)
}

/// Decide where the escrow of a finished request goes.
///
/// A created account receives the full amount. Any failure, including one
/// where the account was partially set up, refunds the full amount.
pub fn settle(pending: &PendingCreation, outcome: &CreationOutcome) -> Settlement {
    match outcome {
        CreationOutcome::Created(account) => Settlement::Delivered(account.clone(), pending.amount),
        CreationOutcome::Failed(_) => {
            Settlement::Refunded(pending.refund_to.clone(), pending.amount)
        }
    }
}
