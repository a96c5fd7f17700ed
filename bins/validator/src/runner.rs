//! Validation loop
//!
//! One round per validation pair: query every axon with the key, score the
//! replies by exact digest match, submit normalized weights on every other
//! reply slot, then refresh the metagraph and sleep one block interval.
//! Errors inside a round are logged and the loop moves on; only exhausting
//! the validation set (or an interrupt upstream) ends it.

use hashnet_bittensor::{to_chain_weights, Dendrite, Metagraph, Subtensor};
use hashnet_core::Keypair;
use hashnet_protocol::HashQuery;
use hashnet_validation::{ScoreVector, ValidationSet};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Counters for a completed loop, mostly of interest to tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoopSummary {
    pub rounds: usize,
    pub matches: usize,
    pub submissions: usize,
    pub successful_submissions: usize,
}

/// Run the validation loop over the whole set.
///
/// `block_time` is the pause between rounds; tests pass `Duration::ZERO`.
pub async fn run_validator<D: Dendrite + ?Sized, S: Subtensor + ?Sized>(
    dendrite: &D,
    subtensor: &S,
    keypair: &Keypair,
    validation_set: &ValidationSet,
    mut metagraph: Metagraph,
    block_time: Duration,
) -> LoopSummary {
    let mut scores = ScoreVector::ones(metagraph.n());
    let mut summary = LoopSummary::default();

    info!("Starting validator loop ({} pairs)", validation_set.len());

    for (&nonce, expected_hash) in &validation_set.pairs {
        summary.rounds += 1;
        info!("Sending {} to hash", nonce);

        let replies = dendrite.query(&metagraph.axons, HashQuery { nonce }).await;
        debug!("Received {} reply slots", replies.len());

        for (i, reply) in replies.iter().enumerate() {
            let matched = reply
                .as_ref()
                .map(|r| r.generated_hash == *expected_hash)
                .unwrap_or(false);
            if matched {
                summary.matches += 1;
            }
            scores.apply(i, matched);
            debug!("Score[{}] = {:?}", i, scores.get(i));

            if i % 2 == 0 {
                let (submitted, ok) =
                    submit_weights(subtensor, keypair, &scores).await;
                if submitted {
                    summary.submissions += 1;
                }
                if ok {
                    summary.successful_submissions += 1;
                }
            }
        }

        // Resync local peer state before the next key
        match subtensor.metagraph().await {
            Ok(refreshed) => {
                if refreshed.n() != metagraph.n() {
                    info!(
                        "Metagraph changed: {} -> {} neurons",
                        metagraph.n(),
                        refreshed.n()
                    );
                    scores.resize(refreshed.n());
                }
                metagraph = refreshed;
            }
            Err(e) => error!("Metagraph refresh failed: {}", e),
        }

        tokio::time::sleep(block_time).await;
    }

    info!(
        "Validation set exhausted after {} rounds ({} matches)",
        summary.rounds, summary.matches
    );
    summary
}

/// Normalize the score vector and push it on-chain.
///
/// Returns (submitted, succeeded). An all-zero vector is skipped with a
/// warning; submission errors are logged, never propagated.
async fn submit_weights<S: Subtensor + ?Sized>(
    subtensor: &S,
    keypair: &Keypair,
    scores: &ScoreVector,
) -> (bool, bool) {
    let normalized = scores.normalized();
    let (uids, weights) = to_chain_weights(&normalized);
    if uids.is_empty() {
        warn!("All scores are zero, skipping weight submission");
        return (false, false);
    }

    info!("Setting weights: {:?}", normalized);
    match subtensor.set_weights(keypair, &uids, &weights, true).await {
        Ok(resp) if resp.success => {
            info!("Successfully set weights (tx: {:?})", resp.tx_hash);
            (true, true)
        }
        Ok(resp) => {
            error!("Failed to set weights: {}", resp.message);
            (true, false)
        }
        Err(e) => {
            error!("Failed to set weights: {}", e);
            (true, false)
        }
    }
}
