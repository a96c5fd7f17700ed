//! Signing identity for the validator
//!
//! Thin wrapper over ed25519-dalek. Key derivation and signature semantics
//! are the library's; this type only fixes the encodings used on our wire
//! (raw 32-byte seeds, hex addresses, detached 64-byte signatures).

use crate::{CoreError, Hotkey};
use ed25519_dalek::{Signer, SigningKey};

/// Validator keypair (hotkey identity)
#[derive(Clone)]
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Build from a raw 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Build from a hex-encoded secret key, with or without a `0x` prefix.
    ///
    /// Anything that is not exactly 32 bytes of hex is rejected.
    pub fn from_secret_hex(secret: &str) -> Result<Self, CoreError> {
        let raw = secret.trim();
        let raw = raw.strip_prefix("0x").unwrap_or(raw);

        let bytes =
            hex::decode(raw).map_err(|_| CoreError::InvalidSecret("not valid hex".into()))?;
        let seed: [u8; 32] = bytes
            .try_into()
            .map_err(|_| CoreError::InvalidSecret("expected a 32-byte seed".into()))?;

        Ok(Self::from_seed(&seed))
    }

    /// Public identity of this keypair.
    pub fn hotkey(&self) -> Hotkey {
        Hotkey(self.signing_key.verifying_key().to_bytes())
    }

    /// Hex address string, as the chain reports registered hotkeys.
    pub fn address(&self) -> String {
        self.hotkey().to_hex()
    }

    /// Detached signature over arbitrary bytes.
    pub fn sign_bytes(&self, message: &[u8]) -> Vec<u8> {
        self.signing_key.sign(message).to_bytes().to_vec()
    }
}

impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Keypair({})", self.address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_secret_hex() {
        let secret = format!("0x{}", hex::encode([3u8; 32]));
        let keypair = Keypair::from_secret_hex(&secret).unwrap();
        assert_eq!(keypair.hotkey(), Keypair::from_seed(&[3u8; 32]).hotkey());

        // Prefix and surrounding whitespace are tolerated
        let trimmed = Keypair::from_secret_hex(&format!("  {}  ", &secret[2..])).unwrap();
        assert_eq!(trimmed.address(), keypair.address());
    }

    #[test]
    fn test_bad_secrets_rejected() {
        assert!(Keypair::from_secret_hex("0xdead").is_err());
        assert!(Keypair::from_secret_hex("zz".repeat(32).as_str()).is_err());
    }

    #[test]
    fn test_signature_is_stable() {
        let keypair = Keypair::from_seed(&[9u8; 32]);
        let a = keypair.sign_bytes(b"hello");
        let b = keypair.sign_bytes(b"hello");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }
}
