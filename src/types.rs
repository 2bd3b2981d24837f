//! Contract data types shared by the drop registry, the option validator and
//! the settlement handler.

use soroban_sdk::{contracttype, Address, Bytes, BytesN, String, Symbol, Vec};

/// A funded, unclaimed transfer.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DropRecord {
    /// Amount, in stroops, that the claimer receives.
    pub balance: i128,

    /// Account that funded the drop. Refunded if a create-and-claim fails.
    pub funder: Address,
}

/// Public view of a pending drop.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyInfo {
    /// Amount that will be sent to the claiming account (new or existing).
    pub balance: i128,
}

/// A function-call key to be installed on a newly created account.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LimitedAccessKey {
    /// The public key of the limited access key.
    pub public_key: BytesN<32>,

    /// Spending cap for fees paid with this key. `None` means unlimited.
    pub allowance: Option<i128>,

    /// Which contract this key may call.
    pub receiver_id: Bytes,

    /// Which methods this key may call. Empty means any method.
    pub method_names: Vec<Symbol>,
}

/// Options accepted by `create_account_advanced`.
///
/// The five contract fields are independent on the wire; at most one may be
/// set. [`crate::validation::validate_request`] folds them into a
/// [`ContractProvisioning`].
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreateAccountOptions {
    pub full_access_keys: Option<Vec<BytesN<32>>>,
    pub limited_access_keys: Option<Vec<LimitedAccessKey>>,
    /// Deploy this code directly on the new account.
    pub contract_bytes: Option<Bytes>,
    /// Publish this code as a global contract identified by its hash.
    pub global_contract_code: Option<Bytes>,
    /// Publish this code as a global contract identified by the new account.
    pub global_code_by_account_id: Option<Bytes>,
    /// Use an existing global contract by code hash.
    pub use_global_contract_hash: Option<BytesN<32>>,
    /// Use an existing global contract by referencing the account that published it.
    pub use_global_contract_account_id: Option<Bytes>,
}

/// What code, if any, ends up on the new account.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ContractProvisioning {
    NoContract,
    Inline(Bytes),
    DeployGlobal(Bytes),
    DeployGlobalByAccount(Bytes),
    GlobalByAccount(Bytes),
    GlobalByHash(BytesN<32>),
}

/// A validated account-creation request, as handed to the account factory.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccountCreationRequest {
    pub new_account_id: Bytes,
    pub full_access_keys: Vec<BytesN<32>>,
    pub limited_access_keys: Vec<LimitedAccessKey>,
    pub contract: ContractProvisioning,
}

/// Which entry point opened a pending creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CreationSource {
    /// `create_account_and_claim` consumed this drop key.
    Drop(BytesN<32>),
    /// `create_account_advanced` was called directly.
    Advanced,
}

/// Escrow held while an account creation is in flight.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingCreation {
    pub amount: i128,
    pub refund_to: Address,
    pub source: CreationSource,
    pub request: AccountCreationRequest,
}

/// Outcome of an account creation, reported by the factory.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CreationOutcome {
    /// The account exists at this address with every requested key and contract.
    Created(Address),
    /// Creation failed, possibly after partially applying. The reason is opaque.
    Failed(String),
}

/// The single balance movement that closes a pending creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Settlement {
    /// Escrow handed to the new account.
    Delivered(Address, i128),
    /// Escrow returned to whoever funded the request.
    Refunded(Address, i128),
}

impl Settlement {
    /// The account receiving the escrow and the amount it receives.
    pub fn transfer(&self) -> (&Address, i128) {
        match self {
            Settlement::Delivered(to, amount) | Settlement::Refunded(to, amount) => (to, *amount),
        }
    }
}
