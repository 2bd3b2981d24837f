//! Event emission helpers for the linkdrop contract.
//!
//! The account factory watches `account_creation_requested` to learn what to
//! create; every request it picks up ends in exactly one of `account_created`
//! or `account_creation_refunded`.

use soroban_sdk::{Address, BytesN, Env, String, Symbol};

use crate::types::PendingCreation;

/// Emit an event when a drop is funded.
pub fn emit_drop_funded(env: &Env, key: &BytesN<32>, funder: &Address, amount: i128) {
    let topics = (Symbol::new(env, "drop_funded"), key.clone());
    env.events().publish(topics, (funder.clone(), amount));
}

/// Emit an event when a drop is claimed into an existing account.
pub fn emit_drop_claimed(env: &Env, key: &BytesN<32>, receiver: &Address, amount: i128) {
    let topics = (Symbol::new(env, "drop_claimed"), key.clone());
    env.events().publish(topics, (receiver.clone(), amount));
}

/// Emit an event asking the factory to create an account.
pub fn emit_account_creation_requested(env: &Env, request_id: u64, pending: &PendingCreation) {
    let topics = (Symbol::new(env, "account_creation_requested"), request_id);
    env.events().publish(topics, pending.clone());
}

/// Emit an event when an account was created and its escrow delivered.
pub fn emit_account_created(env: &Env, request_id: u64, account: &Address, amount: i128) {
    let topics = (Symbol::new(env, "account_created"), request_id);
    env.events().publish(topics, (account.clone(), amount));
}

/// Emit an event when an account creation failed and its escrow was refunded.
pub fn emit_account_creation_refunded(
    env: &Env,
    request_id: u64,
    refund_to: &Address,
    amount: i128,
    reason: &String,
) {
    let topics = (Symbol::new(env, "account_creation_refunded"), request_id);
    env.events()
        .publish(topics, (refund_to.clone(), amount, reason.clone()));
}

/// Emit an event when the admin hands factory duties to a new address.
pub fn emit_factory_changed(env: &Env, old: &Address, new: &Address) {
    let topics = (Symbol::new(env, "factory_changed"),);
    env.events().publish(topics, (old.clone(), new.clone()));
}
