//! Deterministic validation set
//!
//! A bounded set of (key, expected digest) pairs drawn from a seeded PRNG.
//! The set is written to a single JSON file and reused across runs, so every
//! restart of the validator asks the same questions. Changing the seed
//! regenerates the file.

use crate::ValidationError;
use hashnet_protocol::hash_nonce;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Keys are drawn from `0..=MAX_KEY`.
pub const MAX_KEY: u64 = 10_000;

/// Default file name inside the data directory.
pub const TEST_SET_FILENAME: &str = "validationset.json";

/// Persisted validation set: the seed it was generated from and the
/// key -> expected-digest mapping.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidationSet {
    pub seed: u64,
    pub pairs: BTreeMap<u64, String>,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Draw `count` keys from the seeded generator and map each to its digest.
///
/// Duplicate draws collapse into a single entry, so the map may hold fewer
/// than `count` pairs.
pub fn generate_pairs(seed: u64, count: usize) -> BTreeMap<u64, String> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut pairs = BTreeMap::new();
    for _ in 0..count {
        let key = rng.gen_range(0..=MAX_KEY);
        pairs.insert(key, hash_nonce(key));
    }
    pairs
}

impl ValidationSet {
    /// Generate a fresh set from a seed.
    pub fn generate(seed: u64, count: usize) -> Self {
        Self {
            seed,
            pairs: generate_pairs(seed, count),
            generated_at: chrono::Utc::now(),
        }
    }

    /// Load the persisted set, or build and persist a new one.
    ///
    /// - No file on disk: generate from `seed` (or an entropy-derived seed
    ///   when none is given), save, return.
    /// - File present, `seed` absent or equal to the stored one: reuse the
    ///   stored set untouched.
    /// - File present, `seed` differs: regenerate from the new seed and
    ///   overwrite the file.
    ///
    /// An unreadable or unparsable file is treated like a missing one.
    pub fn load_or_generate(
        path: &Path,
        seed: Option<u64>,
        count: usize,
    ) -> Result<Self, ValidationError> {
        match Self::load(path) {
            Some(saved) => {
                debug!("Saved seed: {}", saved.seed);
                match seed {
                    Some(seed) if seed != saved.seed => {
                        info!("Seed has changed, regenerating validation set");
                        let set = Self::generate(seed, count);
                        set.save(path)?;
                        Ok(set)
                    }
                    _ => Ok(saved),
                }
            }
            None => {
                let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
                info!("Generating validation set (seed={})", seed);
                let set = Self::generate(seed, count);
                set.save(path)?;
                Ok(set)
            }
        }
    }

    fn load(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match serde_json::from_str(&content) {
            Ok(set) => Some(set),
            Err(e) => {
                warn!("Failed to parse validation set file: {}", e);
                None
            }
        }
    }

    /// Save to file
    pub fn save(&self, path: &Path) -> Result<(), ValidationError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ValidationError::Corrupt(e.to_string()))?;
        std::fs::write(path, content)?;
        debug!("Saved validation set to {:?}", path);
        Ok(())
    }

    /// Number of pairs in the set.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
