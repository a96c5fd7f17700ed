//! Miner query protocol for the hashnet subnet
//!
//! One request/response pair, JSON over HTTP. The validator sends a nonce,
//! the miner answers with the SHA-256 digest of its decimal string form.
//! `hash_nonce` is the reference implementation both sides must agree on.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// HTTP route a miner axon serves the query on.
pub const QUERY_ROUTE: &str = "/to_hash";

/// Query sent to every axon: the validation key to hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashQuery {
    pub nonce: u64,
}

/// A miner's answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashReply {
    pub generated_hash: String,
}

/// Reference digest: SHA-256 over the ASCII decimal representation of the
/// nonce (`"42"`, not its little-endian bytes), lowercase hex.
pub fn hash_nonce(nonce: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(nonce.to_string().as_bytes());
    hex::encode(hasher.finalize())
}
