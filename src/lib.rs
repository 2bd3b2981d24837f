//! # Soroban Linkdrop
//!
//! Claimable transfers identified by single-use keys, plus on-demand account
//! creation for Soroban.
//!
//! A funder locks tokens under a fresh ed25519 public key and hands the
//! private half to someone else. Whoever holds it can:
//!
//! - Claim the funds into an existing account
//! - Claim the funds into a brand-new account created on demand
//!
//! Independently of drops, anyone can ask for a new account with custom full
//! and limited access keys and an optional contract, funded by a deposit.
//!
//! Account creation happens outside this contract. The contract escrows the
//! funds and emits an `account_creation_requested` event; the configured
//! account factory creates the account and reports the outcome through
//! `resolve_account_creation`, which either delivers the escrow to the new
//! account or refunds it in full.
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Fund a drop
//! client.fund(&funder, &drop_key, &amount);
//!
//! // Claim with a signature from the drop key
//! let payload = claim_payload(&env, &client.address, &drop_key, &receiver);
//! client.claim(&drop_key, &receiver, &sign(&payload));
//!
//! // Factory reports a finished account creation
//! client.resolve_account_creation(&request_id, &CreationOutcome::Created(account));
//! ```

#![no_std]

mod auth;
mod events;
mod registry;
mod settlement;
mod storage;
mod types;
mod validation;

pub use auth::{claim_payload, create_and_claim_payload};
pub use settlement::FIRST_REQUEST_ID;
pub use storage::LinkdropKey;
pub use types::{
    AccountCreationRequest, ContractProvisioning, CreateAccountOptions, CreationOutcome,
    CreationSource, DropRecord, KeyInfo, LimitedAccessKey, PendingCreation, Settlement,
};
pub use validation::{validate_account_id, MAX_ACCOUNT_ID_LENGTH, MIN_ACCOUNT_ID_LENGTH};

use soroban_sdk::{
    contract, contracterror, contractimpl, log, panic_with_error, token, Address, Bytes, BytesN,
    Env,
};

use crate::events::*;

/// Error codes for the linkdrop contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LinkdropError {
    /// Contract has already been initialized.
    AlreadyInitialized = 1,
    /// Contract has not been initialized.
    NotInitialized = 2,
    /// Caller is not authorized for this operation.
    NotAuthorized = 3,
    /// A drop already exists for this key, or the key was already used.
    DuplicateKey = 4,
    /// No drop exists for this key, or it has already been claimed.
    UnknownOrClaimedKey = 5,
    /// Account name is empty.
    EmptyAccountName = 6,
    /// Account name format is invalid.
    InvalidAccountName = 7,
    /// More than one contract option was supplied.
    ConflictingContractOptions = 8,
    /// Amount is negative.
    InvalidAmount = 9,
    /// No pending account creation has this request id.
    UnknownRequest = 10,
}

#[contract]
pub struct LinkdropContract;

#[contractimpl]
impl LinkdropContract {
    // ========== Initialization ==========

    /// Initialize the contract.
    ///
    /// # Arguments
    /// * `admin` - Address allowed to change the factory and upgrade the contract
    /// * `token` - Stellar asset contract every drop and deposit is paid in
    /// * `factory` - Address that creates accounts and reports their outcome
    pub fn init(env: Env, admin: Address, token: Address, factory: Address) {
        if env.storage().instance().has(&LinkdropKey::Admin) {
            panic_with_error!(&env, LinkdropError::AlreadyInitialized);
        }

        admin.require_auth();
        env.storage().instance().set(&LinkdropKey::Admin, &admin);
        env.storage().instance().set(&LinkdropKey::Token, &token);
        env.storage().instance().set(&LinkdropKey::Factory, &factory);
        env.storage()
            .instance()
            .set(&LinkdropKey::NextRequestId, &FIRST_REQUEST_ID);
        env.storage().instance().set(&LinkdropKey::DropCount, &0u64);
    }

    /// Get the admin address.
    pub fn admin(env: Env) -> Address {
        Self::config(&env, LinkdropKey::Admin)
    }

    /// Get the token address.
    pub fn token(env: Env) -> Address {
        Self::config(&env, LinkdropKey::Token)
    }

    /// Get the account factory address.
    pub fn factory(env: Env) -> Address {
        Self::config(&env, LinkdropKey::Factory)
    }

    // ========== Drops ==========

    /// Lock `amount` under `key` until someone holding its private half claims it.
    ///
    /// # Errors
    /// - `InvalidAmount` if `amount` is negative
    /// - `DuplicateKey` if `key` is already funded or was used before
    pub fn fund(
        env: Env,
        funder: Address,
        key: BytesN<32>,
        amount: i128,
    ) -> Result<(), LinkdropError> {
        funder.require_auth();

        if amount < 0 {
            return Err(LinkdropError::InvalidAmount);
        }

        let record = DropRecord {
            balance: amount,
            funder: funder.clone(),
        };
        registry::fund(&env, &key, &record)?;

        Self::token_client(&env).transfer(&funder, &env.current_contract_address(), &amount);

        log!(&env, "drop funded", key, amount);
        emit_drop_funded(&env, &key, &funder, amount);
        Ok(())
    }

    /// Claim the drop under `key` into `receiver`.
    ///
    /// `signature` is the drop key's signature over [`claim_payload`].
    /// Returns the amount transferred.
    ///
    /// # Errors
    /// - `UnknownOrClaimedKey` if there is no drop under `key`
    pub fn claim(
        env: Env,
        key: BytesN<32>,
        receiver: Address,
        signature: BytesN<64>,
    ) -> Result<i128, LinkdropError> {
        receiver.require_auth();

        let payload = auth::claim_payload(&env, &env.current_contract_address(), &key, &receiver);
        auth::require_key_signature(&env, &key, &payload, &signature);

        let record = registry::take(&env, &key)?;

        Self::token_client(&env).transfer(
            &env.current_contract_address(),
            &receiver,
            &record.balance,
        );

        log!(&env, "drop claimed", key, record.balance);
        emit_drop_claimed(&env, &key, &receiver, record.balance);
        Ok(record.balance)
    }

    /// Claim the drop under `key` into a new account.
    ///
    /// `signature` is the drop key's signature over [`create_and_claim_payload`].
    /// The drop is gone once this returns; if the factory later fails to create
    /// the account, the drop's funder is refunded. Returns the request id the
    /// factory resolves.
    ///
    /// # Errors
    /// - `EmptyAccountName` / `InvalidAccountName` for a bad `new_account_id`
    /// - `UnknownOrClaimedKey` if there is no drop under `key`
    pub fn create_account_and_claim(
        env: Env,
        key: BytesN<32>,
        new_account_id: Bytes,
        new_public_key: BytesN<32>,
        signature: BytesN<64>,
    ) -> Result<u64, LinkdropError> {
        let request =
            validation::claim_request(&env, new_account_id.clone(), new_public_key.clone())?;

        let payload = auth::create_and_claim_payload(
            &env,
            &env.current_contract_address(),
            &key,
            &new_account_id,
            &new_public_key,
        );
        auth::require_key_signature(&env, &key, &payload, &signature);

        let record = registry::take(&env, &key)?;

        let pending = PendingCreation {
            amount: record.balance,
            refund_to: record.funder,
            source: CreationSource::Drop(key.clone()),
            request,
        };
        let request_id = settlement::open(&env, &pending);

        log!(&env, "account creation requested from drop", request_id, key);
        emit_account_creation_requested(&env, request_id, &pending);
        Ok(request_id)
    }

    /// Get the balance of the drop under `key`.
    pub fn get_key_balance(env: Env, key: BytesN<32>) -> Result<i128, LinkdropError> {
        registry::peek(&env, &key)
            .map(|record| record.balance)
            .ok_or(LinkdropError::UnknownOrClaimedKey)
    }

    /// Get information about the drop under `key`, if it is still claimable.
    pub fn get_key_information(env: Env, key: BytesN<32>) -> Option<KeyInfo> {
        registry::peek(&env, &key).map(|record| KeyInfo {
            balance: record.balance,
        })
    }

    /// Check if `key` has already been used to claim a drop.
    pub fn is_key_spent(env: Env, key: BytesN<32>) -> bool {
        registry::is_spent(&env, &key)
    }

    /// Get the number of drops waiting to be claimed.
    pub fn drop_count(env: Env) -> u64 {
        registry::count(&env)
    }

    // ========== Account Creation ==========

    /// Ask the factory for a new account funded with `deposit`.
    ///
    /// Options are validated before the deposit moves. Duplicate public keys
    /// across `full_access_keys` and `limited_access_keys` are left to the
    /// factory, which reports them as a failed creation. Returns the request
    /// id the factory resolves.
    ///
    /// # Errors
    /// - `EmptyAccountName` / `InvalidAccountName` for a bad account name
    /// - `ConflictingContractOptions` if more than one contract option is set
    /// - `InvalidAmount` for a negative deposit or key allowance
    pub fn create_account_advanced(
        env: Env,
        caller: Address,
        new_account_id: Bytes,
        options: CreateAccountOptions,
        deposit: i128,
    ) -> Result<u64, LinkdropError> {
        caller.require_auth();

        let request = validation::validate_request(&env, new_account_id, options)?;

        if deposit < 0 {
            return Err(LinkdropError::InvalidAmount);
        }

        Self::token_client(&env).transfer(&caller, &env.current_contract_address(), &deposit);

        let pending = PendingCreation {
            amount: deposit,
            refund_to: caller,
            source: CreationSource::Advanced,
            request,
        };
        let request_id = settlement::open(&env, &pending);

        log!(&env, "account creation requested", request_id, deposit);
        emit_account_creation_requested(&env, request_id, &pending);
        Ok(request_id)
    }

    /// Report the outcome of an account creation (factory only).
    ///
    /// A created account receives the escrow; a failed creation refunds it in
    /// full. Each request id settles exactly once.
    ///
    /// # Errors
    /// - `UnknownRequest` if `request_id` is not pending
    pub fn resolve_account_creation(
        env: Env,
        request_id: u64,
        outcome: CreationOutcome,
    ) -> Result<Settlement, LinkdropError> {
        let factory = Self::config(&env, LinkdropKey::Factory);
        factory.require_auth();

        let pending = settlement::close(&env, request_id)?;
        let applied = settlement::settle(&pending, &outcome);

        let (to, amount) = applied.transfer();
        Self::token_client(&env).transfer(&env.current_contract_address(), to, &amount);

        match &outcome {
            CreationOutcome::Created(account) => {
                log!(&env, "account created", request_id);
                emit_account_created(&env, request_id, account, amount);
            }
            CreationOutcome::Failed(reason) => {
                log!(&env, "account creation failed", request_id, reason.clone());
                emit_account_creation_refunded(&env, request_id, to, amount, reason);
            }
        }

        Ok(applied)
    }

    /// Get the escrow of an unresolved account creation.
    pub fn get_pending_creation(env: Env, request_id: u64) -> Option<PendingCreation> {
        settlement::get(&env, request_id)
    }

    // ========== Admin Functions ==========

    /// Hand factory duties to a new address (admin only).
    ///
    /// Requests already pending are resolved by the new factory.
    pub fn set_factory(env: Env, new_factory: Address, caller: Address) {
        Self::require_admin(&env, &caller);

        let old = Self::config(&env, LinkdropKey::Factory);
        env.storage()
            .instance()
            .set(&LinkdropKey::Factory, &new_factory);

        emit_factory_changed(&env, &old, &new_factory);
    }

    /// Upgrade the contract WASM (admin only).
    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin = Self::config(&env, LinkdropKey::Admin);
        admin.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }

    // ========== Internal Helpers ==========

    fn config(env: &Env, key: LinkdropKey) -> Address {
        env.storage()
            .instance()
            .get(&key)
            .unwrap_or_else(|| panic_with_error!(env, LinkdropError::NotInitialized))
    }

    fn token_client(env: &Env) -> token::Client<'static> {
        token::Client::new(env, &Self::config(env, LinkdropKey::Token))
    }

    fn require_admin(env: &Env, caller: &Address) {
        let admin = Self::config(env, LinkdropKey::Admin);

        if *caller != admin {
            panic_with_error!(env, LinkdropError::NotAuthorized);
        }

        caller.require_auth();
    }
}
