//! Subtensor client
//!
//! JSON-RPC 2.0 over HTTP against the chain entrypoint. The chain's own
//! submission semantics (inclusion, finalization, consensus) are opaque to
//! us; we send signed payloads and report what the node answers.

use crate::{
    sign_weights_payload, BittensorConfig, Metagraph, SubtensorError, WeightResponse,
};
use async_trait::async_trait;
use hashnet_core::Keypair;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

/// Chain reads and writes the validator needs. `SubtensorClient` is the
/// real implementation; tests substitute their own.
#[async_trait]
pub trait Subtensor: Send + Sync {
    /// Fetch a fresh metagraph snapshot for the configured subnet.
    async fn metagraph(&self) -> Result<Metagraph, SubtensorError>;

    /// Submit a weight vector for the configured subnet.
    async fn set_weights(
        &self,
        keypair: &Keypair,
        uids: &[u16],
        weights: &[u16],
        wait_for_inclusion: bool,
    ) -> Result<WeightResponse, SubtensorError>;
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<Value>,
    error: Option<RpcError>,
}

/// HTTP JSON-RPC chain client.
pub struct SubtensorClient {
    http: reqwest::Client,
    config: BittensorConfig,
    next_id: AtomicU64,
}

impl SubtensorClient {
    /// Build the client and verify the endpoint answers.
    pub async fn connect(config: BittensorConfig) -> Result<Self, SubtensorError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        let client = Self {
            http,
            config,
            next_id: AtomicU64::new(1),
        };

        client.request("system_health", json!([])).await?;
        info!("Subtensor connected: {}", client.config.endpoint);
        Ok(client)
    }

    pub fn netuid(&self) -> u16 {
        self.config.netuid
    }

    pub fn version_key(&self) -> u64 {
        self.config.version_key
    }

    /// Current chain block number.
    pub async fn block_number(&self) -> Result<u64, SubtensorError> {
        let result = self.request("chain_blockNumber", json!([])).await?;
        result
            .as_u64()
            .ok_or_else(|| SubtensorError::UnexpectedResponse(result.to_string()))
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value, SubtensorError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        debug!("RPC {} (id={})", method, id);
        let response: RpcResponse = self
            .http
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        if let Some(err) = response.error {
            return Err(SubtensorError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        response
            .result
            .ok_or_else(|| SubtensorError::UnexpectedResponse("missing result".into()))
    }
}

#[async_trait]
impl Subtensor for SubtensorClient {
    async fn metagraph(&self) -> Result<Metagraph, SubtensorError> {
        let result = self
            .request("subnet_metagraph", json!([self.config.netuid]))
            .await?;
        let metagraph: Metagraph = serde_json::from_value(result)
            .map_err(|e| SubtensorError::UnexpectedResponse(e.to_string()))?;
        debug!(
            "Metagraph: {} neurons at block {}",
            metagraph.n(),
            metagraph.block
        );
        Ok(metagraph)
    }

    async fn set_weights(
        &self,
        keypair: &Keypair,
        uids: &[u16],
        weights: &[u16],
        wait_for_inclusion: bool,
    ) -> Result<WeightResponse, SubtensorError> {
        let payload = sign_weights_payload(
            keypair,
            self.config.netuid,
            uids,
            weights,
            self.config.version_key,
        );

        let result = self
            .request(
                "subnet_setWeights",
                json!([payload, { "wait_for_inclusion": wait_for_inclusion }]),
            )
            .await?;

        let response: WeightResponse = serde_json::from_value(result)
            .map_err(|e| SubtensorError::UnexpectedResponse(e.to_string()))?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_response_parsing() {
        let ok: RpcResponse =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":1,"result":42}"#).unwrap();
        assert_eq!(ok.result.unwrap().as_u64(), Some(42));
        assert!(ok.error.is_none());

        let err: RpcResponse = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":2,"error":{"code":-32601,"message":"Method not found"}}"#,
        )
        .unwrap();
        let body = err.error.unwrap();
        assert_eq!(body.code, -32601);
        assert_eq!(body.message, "Method not found");
    }

    #[test]
    fn test_weight_response_defaults() {
        let resp: WeightResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(resp.success);
        assert!(resp.message.is_empty());
        assert!(resp.tx_hash.is_none());
    }
}
