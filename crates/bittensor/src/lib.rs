//! Bittensor integration for the hashnet validator
//!
//! Everything that crosses the chain boundary lives here:
//! - `SubtensorClient` for metagraph reads and weight submission
//! - `Dendrite` for querying miner axons
//! - Weight conversion to the chain's u16 format
//!
//! Wallet cryptography, peer discovery, and the chain's submission semantics
//! belong to the far side of these clients; this crate only speaks to them.

mod client;
mod config;
mod dendrite;
mod metagraph;
mod weights;

pub use client::*;
pub use config::*;
pub use dendrite::*;
pub use metagraph::*;
pub use weights::*;

/// Chain client errors
#[derive(Debug, thiserror::Error)]
pub enum SubtensorError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}
