//! Hashnet subnet validator
//!
//! Builds a deterministic key -> digest validation set, queries every miner
//! axon with each key, scores exact-match replies, and periodically submits
//! the normalized score vector as on-chain weights. Wallet, metagraph, and
//! chain submission are handled by the clients in hashnet-bittensor.

use anyhow::{Context, Result};
use clap::Parser;
use hashnet_bittensor::{BittensorConfig, HttpDendrite, Subtensor, SubtensorClient};
use hashnet_core::{Keypair, BLOCK_TIME};
use hashnet_validation::ValidationSet;
use hashnet_validator::{run_validator, Args};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,hashnet_validator=debug".into()),
        )
        .init();

    let args = Args::parse();
    args.validate()?;

    info!(
        "Running validator for subnet {} on network {}",
        args.netuid, args.subtensor_endpoint
    );

    std::fs::create_dir_all(args.full_path())
        .with_context(|| format!("creating {:?}", args.full_path()))?;
    std::fs::create_dir_all(&args.data_dir)?;

    let validation_set = ValidationSet::load_or_generate(
        &args.validation_set_path(),
        args.seed,
        args.validation_lot,
    )?;
    info!(
        "Validation set: {} pairs (seed={})",
        validation_set.len(),
        validation_set.seed
    );

    let keypair =
        Keypair::from_secret_hex(&args.secret_key).context("loading validator keypair")?;
    info!("Wallet hotkey: {}", keypair.address());

    let subtensor = SubtensorClient::connect(BittensorConfig {
        endpoint: args.subtensor_endpoint.clone(),
        netuid: args.netuid,
        version_key: args.version_key,
        ..Default::default()
    })
    .await
    .context("connecting to subtensor")?;

    let metagraph = subtensor.metagraph().await.context("syncing metagraph")?;
    info!("Metagraph: {} neurons at block {}", metagraph.n(), metagraph.block);

    let Some(uid) = metagraph.uid_of_hotkey(&keypair.address()) else {
        anyhow::bail!(
            "Hotkey {} is not registered on netuid {}. Register it and restart.",
            keypair.address(),
            args.netuid
        );
    };
    info!("Running validator on uid: {}", uid);

    let dendrite = HttpDendrite::default();

    tokio::select! {
        summary = run_validator(
            &dendrite,
            &subtensor,
            &keypair,
            &validation_set,
            metagraph,
            BLOCK_TIME,
        ) => {
            info!(
                "Validator finished: {} rounds, {}/{} submissions succeeded",
                summary.rounds, summary.successful_submissions, summary.submissions
            );
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Keyboard interrupt detected. Exiting validator.");
        }
    }

    Ok(())
}
