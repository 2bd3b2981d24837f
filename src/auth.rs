//! Single-use key authorization.
//!
//! Whoever holds the private half of a drop key signs a payload naming this
//! contract, the operation, the key, and where the funds should go. Binding the
//! destination keeps a relayed signature from being redirected.

use soroban_sdk::{symbol_short, xdr::ToXdr, Address, Bytes, BytesN, Env, Symbol};

/// Payload signed to authorize `claim` into `receiver`.
pub fn claim_payload(
    env: &Env,
    contract: &Address,
    key: &BytesN<32>,
    receiver: &Address,
) -> Bytes {
    (
        contract.clone(),
        symbol_short!("claim"),
        key.clone(),
        receiver.clone(),
    )
        .to_xdr(env)
}

/// Payload signed to authorize `create_account_and_claim`.
pub fn create_and_claim_payload(
    env: &Env,
    contract: &Address,
    key: &BytesN<32>,
    new_account_id: &Bytes,
    new_public_key: &BytesN<32>,
) -> Bytes {
    (
        contract.clone(),
        Symbol::new(env, "create_and_claim"),
        key.clone(),
        new_account_id.clone(),
        new_public_key.clone(),
    )
        .to_xdr(env)
}

/// Verify `signature` over `payload` by `key`. Traps on mismatch.
pub fn require_key_signature(
    env: &Env,
    key: &BytesN<32>,
    payload: &Bytes,
    signature: &BytesN<64>,
) {
    env.crypto().ed25519_verify(key, payload, signature);
}
