//! Dendrite: the peer-query primitive
//!
//! Sends one query to every axon and collects the replies in axon order.
//! Per-peer failures (unreachable, timeout, garbage body) become `None`
//! slots; the call itself never fails.

use crate::AxonInfo;
use async_trait::async_trait;
use futures_util::future::join_all;
use hashnet_protocol::{HashQuery, HashReply, QUERY_ROUTE};
use std::time::Duration;
use tracing::debug;

/// Peer query client. `HttpDendrite` is the real implementation; tests
/// substitute their own.
#[async_trait]
pub trait Dendrite: Send + Sync {
    /// Query every axon with the same request. The result is index-aligned
    /// with `axons`; a `None` slot means that peer gave no usable answer.
    async fn query(&self, axons: &[AxonInfo], query: HashQuery) -> Vec<Option<HashReply>>;
}

/// HTTP dendrite querying axons on their JSON route.
pub struct HttpDendrite {
    http: reqwest::Client,
}

impl HttpDendrite {
    pub fn new(timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("HTTP client"),
        }
    }

    async fn query_one(&self, axon: &AxonInfo, query: HashQuery) -> Option<HashReply> {
        let url = format!("{}{}", axon.url(), QUERY_ROUTE);
        match self.http.post(&url).json(&query).send().await {
            Ok(resp) if resp.status().is_success() => match resp.json::<HashReply>().await {
                Ok(reply) => Some(reply),
                Err(e) => {
                    debug!("Bad reply body from {}: {}", url, e);
                    None
                }
            },
            Ok(resp) => {
                debug!("Axon {} answered {}", url, resp.status());
                None
            }
            Err(e) => {
                debug!("Axon {} unreachable: {}", url, e);
                None
            }
        }
    }
}

impl Default for HttpDendrite {
    fn default() -> Self {
        Self::new(Duration::from_secs(12))
    }
}

#[async_trait]
impl Dendrite for HttpDendrite {
    async fn query(&self, axons: &[AxonInfo], query: HashQuery) -> Vec<Option<HashReply>> {
        join_all(axons.iter().map(|axon| self.query_one(axon, query))).await
    }
}
