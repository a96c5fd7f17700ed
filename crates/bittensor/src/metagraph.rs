//! Metagraph snapshot
//!
//! In-memory view of the subnet's peer state as reported by the chain.
//! The per-neuron vectors are parallel: index i describes the neuron at
//! UID position i.

use serde::{Deserialize, Serialize};

/// A miner's serving endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxonInfo {
    pub host: String,
    pub port: u16,
}

impl AxonInfo {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Snapshot of subnet peer state.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Metagraph {
    pub netuid: u16,
    /// Chain block the snapshot was taken at
    pub block: u64,
    pub uids: Vec<u16>,
    /// Hotkey addresses, index-aligned with `uids`
    pub hotkeys: Vec<String>,
    /// Serving endpoints, index-aligned with `uids`
    pub axons: Vec<AxonInfo>,
    /// Stake in RAO, index-aligned with `uids`
    pub stake: Vec<u64>,
}

impl Metagraph {
    /// Neuron count.
    pub fn n(&self) -> usize {
        self.uids.len()
    }

    /// UID of a registered hotkey, if present.
    pub fn uid_of_hotkey(&self, hotkey: &str) -> Option<u16> {
        self.hotkeys
            .iter()
            .position(|h| h == hotkey)
            .map(|i| self.uids[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Metagraph {
        Metagraph {
            netuid: 1,
            block: 1000,
            uids: vec![0, 1, 2],
            hotkeys: vec!["0xaa".into(), "0xbb".into(), "0xcc".into()],
            axons: vec![
                AxonInfo { host: "10.0.0.1".into(), port: 8091 },
                AxonInfo { host: "10.0.0.2".into(), port: 8091 },
                AxonInfo { host: "10.0.0.3".into(), port: 8092 },
            ],
            stake: vec![100, 200, 300],
        }
    }

    #[test]
    fn test_uid_lookup() {
        let mg = sample();
        assert_eq!(mg.n(), 3);
        assert_eq!(mg.uid_of_hotkey("0xbb"), Some(1));
        assert_eq!(mg.uid_of_hotkey("0xdd"), None);
    }

    #[test]
    fn test_axon_url() {
        let mg = sample();
        assert_eq!(mg.axons[2].url(), "http://10.0.0.3:8092");
    }
}
