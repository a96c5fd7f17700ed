//! Core types for the hashnet subnet
//!
//! Shared identity types and chain constants. Everything that talks to the
//! chain or to peers builds on the `Hotkey` / `Keypair` pair defined here.

mod keypair;

pub use keypair::*;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Block interval of the chain. The validator loop sleeps this long
/// between validation rounds.
pub const BLOCK_TIME: Duration = Duration::from_secs(12);

/// Account identity on the subnet (raw 32-byte public key).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Hotkey(pub [u8; 32]);

impl Hotkey {
    /// Hex form with `0x` prefix, as it appears on the wire and in logs.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parse from hex, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, CoreError> {
        let raw = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(raw).map_err(|_| CoreError::InvalidHotkey(s.to_string()))?;
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| CoreError::InvalidHotkey(s.to_string()))?;
        Ok(Hotkey(arr))
    }
}

impl std::fmt::Display for Hotkey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl std::fmt::Debug for Hotkey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hotkey({}..)", &self.to_hex()[..10])
    }
}

/// Core errors
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid secret key: {0}")]
    InvalidSecret(String),

    #[error("Invalid hotkey: {0}")]
    InvalidHotkey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotkey_hex_round_trip() {
        let hotkey = Hotkey([7u8; 32]);
        let hex = hotkey.to_hex();
        assert!(hex.starts_with("0x"));
        assert_eq!(Hotkey::from_hex(&hex).unwrap(), hotkey);

        // Unprefixed form parses too
        assert_eq!(Hotkey::from_hex(&hex[2..]).unwrap(), hotkey);
    }

    #[test]
    fn test_hotkey_rejects_wrong_length() {
        assert!(Hotkey::from_hex("0xdeadbeef").is_err());
        assert!(Hotkey::from_hex("not hex at all").is_err());
    }

    #[test]
    fn test_block_time() {
        assert_eq!(BLOCK_TIME, Duration::from_secs(12));
    }
}
