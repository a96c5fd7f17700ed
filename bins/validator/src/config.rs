//! CLI configuration

use clap::Parser;
use hashnet_bittensor::DEFAULT_ENDPOINT;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "hashnet-validator")]
#[command(about = "Hashnet subnet validator")]
pub struct Args {
    /// Seed for validation-set generation. Omit to keep the stored set.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Length of the validation set
    #[arg(long, default_value = "10")]
    pub validation_lot: usize,

    /// The chain subnet uid
    #[arg(long, env = "NETUID", default_value = "1")]
    pub netuid: u16,

    /// Secret key (hex seed)
    #[arg(short = 'k', long, env = "VALIDATOR_SECRET_KEY")]
    pub secret_key: String,

    /// Wallet name
    #[arg(long, default_value = "default")]
    pub wallet_name: String,

    /// Hotkey name
    #[arg(long, default_value = "default")]
    pub hotkey_name: String,

    /// Chain RPC endpoint
    #[arg(long, env = "SUBTENSOR_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub subtensor_endpoint: String,

    /// Logging directory
    #[arg(long, default_value = "./logs")]
    pub logging_dir: PathBuf,

    /// Data directory
    #[arg(short, long, default_value = "./data")]
    pub data_dir: PathBuf,

    /// Weight version key
    #[arg(long, env = "VERSION_KEY", default_value = "1")]
    pub version_key: u64,
}

impl Args {
    /// Per-wallet log directory:
    /// `{logging_dir}/{wallet_name}/{hotkey_name}/netuid{netuid}/validator`.
    pub fn full_path(&self) -> PathBuf {
        self.logging_dir
            .join(&self.wallet_name)
            .join(&self.hotkey_name)
            .join(format!("netuid{}", self.netuid))
            .join("validator")
    }

    /// Where the validation set is persisted.
    pub fn validation_set_path(&self) -> PathBuf {
        self.data_dir
            .join(hashnet_validation::TEST_SET_FILENAME)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.validation_lot == 0 {
            anyhow::bail!("validation_lot must be > 0");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_from(extra: &[&str]) -> Args {
        let mut argv = vec!["hashnet-validator", "--secret-key", "00"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let args = args_from(&[]);
        assert_eq!(args.netuid, 1);
        assert_eq!(args.validation_lot, 10);
        assert_eq!(args.seed, None);
        assert_eq!(args.subtensor_endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_full_path_layout() {
        let args = args_from(&["--wallet-name", "w", "--hotkey-name", "h", "--netuid", "7"]);
        assert_eq!(
            args.full_path(),
            PathBuf::from("./logs/w/h/netuid7/validator")
        );
    }

    #[test]
    fn test_validate_rejects_empty_lot() {
        let args = args_from(&["--validation-lot", "0"]);
        assert!(args.validate().is_err());
    }
}
