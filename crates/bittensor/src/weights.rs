//! Weight conversion and submission payloads
//!
//! Normalized f64 scores become the chain's (uids, u16 weights) pair,
//! max-upscaled so the largest entry is 65535. The submission payload is
//! signed by the validator's keypair; the chain verifies on its side.

use hashnet_core::Keypair;
use serde::{Deserialize, Serialize};

/// Maximum weight value on the chain (u16 max).
pub const MAX_WEIGHT: u16 = 65535;

/// Outcome of a weight submission.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WeightResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub tx_hash: Option<String>,
}

/// Convert a normalized score vector to chain weights.
///
/// Every UID position gets an entry, zeros included, matching the full
/// weight-vector submission the subnet expects. Weights are max-upscaled so
/// the largest value is `MAX_WEIGHT`. An all-zero vector yields empty
/// vectors; callers skip the submission in that case.
pub fn to_chain_weights(normalized: &[f64]) -> (Vec<u16>, Vec<u16>) {
    let max = normalized.iter().cloned().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return (Vec::new(), Vec::new());
    }

    let uids = (0..normalized.len() as u16).collect();
    let weights = normalized
        .iter()
        .map(|w| ((w / max) * MAX_WEIGHT as f64).round() as u16)
        .collect();
    (uids, weights)
}

/// Signed weight-submission payload, as attached to the RPC params.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WeightsPayload {
    pub netuid: u16,
    pub hotkey: String,
    pub uids: Vec<u16>,
    pub weights: Vec<u16>,
    pub version_key: u64,
    pub signature: String,
}

/// Build and sign the canonical submission payload.
///
/// The signature covers `set_weights:{netuid}:{version_key}:{uids}:{weights}`
/// with both vectors in comma-separated decimal form.
pub fn sign_weights_payload(
    keypair: &Keypair,
    netuid: u16,
    uids: &[u16],
    weights: &[u16],
    version_key: u64,
) -> WeightsPayload {
    let join = |values: &[u16]| {
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",")
    };
    let message = format!(
        "set_weights:{}:{}:{}:{}",
        netuid,
        version_key,
        join(uids),
        join(weights)
    );
    let signature = format!("0x{}", hex::encode(keypair.sign_bytes(message.as_bytes())));

    WeightsPayload {
        netuid,
        hotkey: keypair.address(),
        uids: uids.to_vec(),
        weights: weights.to_vec(),
        version_key,
        signature,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_chain_weights_max_upscale() {
        let (uids, weights) = to_chain_weights(&[0.25, 0.0, 0.5, 0.25]);
        assert_eq!(uids, vec![0, 1, 2, 3]);
        assert_eq!(weights[2], MAX_WEIGHT);
        assert_eq!(weights[0], (0.5 * MAX_WEIGHT as f64).round() as u16);
        assert_eq!(weights[1], 0);
    }

    #[test]
    fn test_to_chain_weights_all_zero() {
        let (uids, weights) = to_chain_weights(&[0.0, 0.0]);
        assert!(uids.is_empty());
        assert!(weights.is_empty());
    }

    #[test]
    fn test_to_chain_weights_single_peer() {
        let (uids, weights) = to_chain_weights(&[1.0]);
        assert_eq!(uids, vec![0]);
        assert_eq!(weights, vec![MAX_WEIGHT]);
    }

    #[test]
    fn test_signed_payload_is_deterministic() {
        let keypair = Keypair::from_seed(&[1u8; 32]);
        let a = sign_weights_payload(&keypair, 1, &[0, 1], &[100, 65535], 1);
        let b = sign_weights_payload(&keypair, 1, &[0, 1], &[100, 65535], 1);
        assert_eq!(a.signature, b.signature);
        assert_eq!(a.hotkey, keypair.address());
        assert!(a.signature.starts_with("0x"));

        // Different weights, different signature
        let c = sign_weights_payload(&keypair, 1, &[0, 1], &[100, 65534], 1);
        assert_ne!(a.signature, c.signature);
    }
}
