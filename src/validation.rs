//! Account-creation request validation.
//!
//! Account names follow the named-account pattern:
//! - Length: 2-64 bytes
//! - Characters: lowercase letters, digits, and the separators `-`, `_`, `.`
//! - Starts and ends with a letter or digit
//! - No two separators next to each other
//! - Examples: alice, bob-smith.near, app_01.wallet
//!
//! Nothing in this module touches storage or moves funds. Every entry point
//! validates here before its first side effect.

use soroban_sdk::{vec, Bytes, BytesN, Env, Vec};

use crate::types::{
    AccountCreationRequest, ContractProvisioning, CreateAccountOptions, LimitedAccessKey,
};
use crate::LinkdropError;

/// Minimum account name length.
pub const MIN_ACCOUNT_ID_LENGTH: u32 = 2;

/// Maximum account name length.
pub const MAX_ACCOUNT_ID_LENGTH: u32 = 64;

/// Validate an account name according to the pattern.
///
/// Returns true if the name is valid, false otherwise.
pub fn validate_account_id(account_id: &Bytes) -> bool {
    let len = account_id.len();

    if len < MIN_ACCOUNT_ID_LENGTH || len > MAX_ACCOUNT_ID_LENGTH {
        return false;
    }

    // Starting "after a separator" rejects a leading one.
    let mut after_separator = true;
    for b in account_id.iter() {
        if is_separator(b) {
            if after_separator {
                return false;
            }
            after_separator = true;
        } else if is_lowercase_alphanumeric(b) {
            after_separator = false;
        } else {
            return false;
        }
    }

    !after_separator
}

/// Like [`validate_account_id`], but reports why the name was rejected.
pub fn check_account_id(account_id: &Bytes) -> Result<(), LinkdropError> {
    if account_id.is_empty() {
        return Err(LinkdropError::EmptyAccountName);
    }
    if !validate_account_id(account_id) {
        return Err(LinkdropError::InvalidAccountName);
    }
    Ok(())
}

/// Validate `create_account_advanced` input and fold it into a request.
///
/// Checks run in a fixed order so every input maps to exactly one outcome:
/// the new account name, then the contract options, then the global contract
/// account reference, then the limited access keys.
pub fn validate_request(
    env: &Env,
    new_account_id: Bytes,
    options: CreateAccountOptions,
) -> Result<AccountCreationRequest, LinkdropError> {
    check_account_id(&new_account_id)?;

    let contract = contract_provisioning(&options)?;
    if let ContractProvisioning::GlobalByAccount(account_id) = &contract {
        check_account_id(account_id)?;
    }

    let limited_access_keys = options
        .limited_access_keys
        .unwrap_or_else(|| Vec::new(env));
    for key in limited_access_keys.iter() {
        check_limited_access_key(&key)?;
    }

    Ok(AccountCreationRequest {
        new_account_id,
        full_access_keys: options.full_access_keys.unwrap_or_else(|| Vec::new(env)),
        limited_access_keys,
        contract,
    })
}

/// Build the request issued by `create_account_and_claim`: one full access
/// key and no contract.
pub fn claim_request(
    env: &Env,
    new_account_id: Bytes,
    new_public_key: BytesN<32>,
) -> Result<AccountCreationRequest, LinkdropError> {
    let options = CreateAccountOptions {
        full_access_keys: Some(vec![env, new_public_key]),
        limited_access_keys: None,
        contract_bytes: None,
        global_contract_code: None,
        global_code_by_account_id: None,
        use_global_contract_hash: None,
        use_global_contract_account_id: None,
    };
    validate_request(env, new_account_id, options)
}

/// Fold the contract fields into a single choice.
///
/// More than one populated field is `ConflictingContractOptions`.
fn contract_provisioning(
    options: &CreateAccountOptions,
) -> Result<ContractProvisioning, LinkdropError> {
    let mut populated = 0u32;
    let mut choice = ContractProvisioning::NoContract;

    if let Some(code) = &options.contract_bytes {
        populated += 1;
        choice = ContractProvisioning::Inline(code.clone());
    }
    if let Some(code) = &options.global_contract_code {
        populated += 1;
        choice = ContractProvisioning::DeployGlobal(code.clone());
    }
    if let Some(code) = &options.global_code_by_account_id {
        populated += 1;
        choice = ContractProvisioning::DeployGlobalByAccount(code.clone());
    }
    if let Some(hash) = &options.use_global_contract_hash {
        populated += 1;
        choice = ContractProvisioning::GlobalByHash(hash.clone());
    }
    if let Some(account_id) = &options.use_global_contract_account_id {
        populated += 1;
        choice = ContractProvisioning::GlobalByAccount(account_id.clone());
    }

    if populated > 1 {
        return Err(LinkdropError::ConflictingContractOptions);
    }
    Ok(choice)
}

fn check_limited_access_key(key: &LimitedAccessKey) -> Result<(), LinkdropError> {
    if matches!(key.allowance, Some(allowance) if allowance < 0) {
        return Err(LinkdropError::InvalidAmount);
    }
    check_account_id(&key.receiver_id)
}

#[inline]
fn is_lowercase_alphanumeric(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit()
}

#[inline]
fn is_separator(b: u8) -> bool {
    b == b'-' || b == b'_' || b == b'.'
}
