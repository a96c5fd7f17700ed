//! Validation set and scoring for the hashnet subnet
//!
//! Handles:
//! - Deterministic key -> digest test set, persisted across runs
//! - Regeneration when the configured seed changes
//! - Per-peer score vector with exponential updates and L1 normalization

mod scoring;
mod testset;

pub use scoring::*;
pub use testset::*;

/// Validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt validation set file: {0}")]
    Corrupt(String),
}
