//! Storage key definitions for the linkdrop contract.

use soroban_sdk::{contracttype, BytesN};

/// Storage keys for the linkdrop contract.
///
/// Configuration lives in instance storage; drops, spent-key tombstones and
/// pending account creations live in persistent storage.
#[contracttype]
#[derive(Clone, Debug)]
pub enum LinkdropKey {
    /// Contract administrator address.
    Admin,

    /// Stellar asset contract used for every balance movement.
    Token,

    /// Address allowed to report account-creation outcomes.
    Factory,

    /// Next id handed out to an account-creation request.
    NextRequestId,

    /// Number of currently pending drops.
    DropCount,

    /// Maps a single-use public key to its funded, unclaimed drop.
    Drop(BytesN<32>),

    /// Tombstone for a key whose drop has been taken.
    /// Keys never leave this state.
    SpentKey(BytesN<32>),

    /// Maps a request id to the escrow awaiting its outcome.
    Pending(u64),
}

/// Time-to-live for persistent ledger entries.
pub const DROP_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const DROP_TTL_EXTEND: u32 = 2592000; // ~150 days
