//! Chain client configuration

use std::time::Duration;

/// Default Bittensor mainnet entrypoint.
pub const DEFAULT_ENDPOINT: &str = "https://entrypoint-finney.opentensor.ai:443";

/// Configuration for the subtensor client.
#[derive(Clone, Debug)]
pub struct BittensorConfig {
    /// Chain RPC endpoint
    pub endpoint: String,
    /// Subnet UID this validator operates on
    pub netuid: u16,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Weight version key attached to every submission
    pub version_key: u64,
}

impl Default for BittensorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            netuid: 1,
            request_timeout: Duration::from_secs(15),
            version_key: 1,
        }
    }
}
