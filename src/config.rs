use std::env;
use std::str::FromStr;

use alloy_primitives::Address;
use anyhow::{Context, Result};
use ethers::signers::LocalWallet;

/// Where a `ValSetDriver` is deployed and how to reach it.
#[derive(Clone)]
pub struct DriverConfig {
    pub address: Address,
    pub rpc_url: String,
    /// Websocket endpoint, only needed for live event subscriptions.
    pub ws_rpc_url: Option<String>,
    /// Chain ID used to sign transactions. Queried from the node when unset.
    pub chain_id: Option<u64>,
    private_key: Option<String>,
}

impl DriverConfig {
    /// Loads the config from the process environment. Binaries load `.env` before calling this.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let rpc_url = lookup("RPC_URL").context("RPC_URL must be set")?;
        let address = lookup("CONTRACT_ADDRESS")
            .context("CONTRACT_ADDRESS must be set")?
            .parse::<Address>()
            .context("invalid CONTRACT_ADDRESS")?;
        let chain_id = lookup("CHAIN_ID")
            .map(|chain_id| chain_id.parse::<u64>())
            .transpose()
            .context("invalid CHAIN_ID")?;

        Ok(Self {
            address,
            rpc_url,
            ws_rpc_url: lookup("WS_RPC_URL"),
            chain_id,
            private_key: lookup("PRIVATE_KEY"),
        })
    }

    /// The contract address in the representation the bindings take.
    pub fn contract_address(&self) -> ethers::types::Address {
        self.address.0 .0.into()
    }

    /// The signing wallet. Only transactions need one.
    pub fn wallet(&self) -> Result<LocalWallet> {
        let private_key = self
            .private_key
            .as_deref()
            .context("PRIVATE_KEY must be set")?;
        LocalWallet::from_str(private_key).context("invalid private key")
    }
}

impl std::fmt::Debug for DriverConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriverConfig")
            .field("address", &self.address)
            .field("rpc_url", &self.rpc_url)
            .field("ws_rpc_url", &self.ws_rpc_url)
            .field("chain_id", &self.chain_id)
            .field("has_private_key", &self.private_key.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use ethers::signers::Signer;

    use super::*;

    // Well-known anvil/hardhat dev account #0.
    const DEV_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const DEV_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_minimal_config() {
        let config = DriverConfig::from_lookup(lookup(&[
            ("RPC_URL", "http://localhost:8545"),
            ("CONTRACT_ADDRESS", "0x5FbDB2315678afecb367f032d93F642f64180aa3"),
        ]))
        .unwrap();

        assert_eq!(config.rpc_url, "http://localhost:8545");
        assert_eq!(config.ws_rpc_url, None);
        assert_eq!(config.chain_id, None);
        assert_eq!(
            config.contract_address(),
            "0x5FbDB2315678afecb367f032d93F642f64180aa3"
                .parse::<ethers::types::Address>()
                .unwrap()
        );
        assert!(config.wallet().is_err());
    }

    #[test]
    fn test_full_config() {
        let config = DriverConfig::from_lookup(lookup(&[
            ("RPC_URL", "http://localhost:8545"),
            ("WS_RPC_URL", "ws://localhost:8546"),
            ("CONTRACT_ADDRESS", "0x5FbDB2315678afecb367f032d93F642f64180aa3"),
            ("CHAIN_ID", "31337"),
            ("PRIVATE_KEY", DEV_KEY),
        ]))
        .unwrap();

        assert_eq!(config.ws_rpc_url.as_deref(), Some("ws://localhost:8546"));
        assert_eq!(config.chain_id, Some(31337));
        let wallet = config.wallet().unwrap();
        assert_eq!(
            wallet.address(),
            DEV_ADDRESS.parse::<ethers::types::Address>().unwrap()
        );
        assert!(!format!("{:?}", config).contains(DEV_KEY));
    }

    #[test]
    fn test_from_env_reads_process_environment() {
        env::set_var("RPC_URL", "http://localhost:8545");
        env::set_var("CONTRACT_ADDRESS", "0x5FbDB2315678afecb367f032d93F642f64180aa3");
        env::remove_var("CHAIN_ID");

        let config = DriverConfig::from_env().unwrap();
        assert_eq!(config.rpc_url, "http://localhost:8545");
        assert_eq!(config.chain_id, None);
    }

    #[test]
    fn test_missing_or_invalid_values() {
        let missing_rpc = DriverConfig::from_lookup(lookup(&[(
            "CONTRACT_ADDRESS",
            "0x5FbDB2315678afecb367f032d93F642f64180aa3",
        )]));
        assert!(missing_rpc.is_err());

        let bad_address = DriverConfig::from_lookup(lookup(&[
            ("RPC_URL", "http://localhost:8545"),
            ("CONTRACT_ADDRESS", "0x1234"),
        ]));
        assert!(bad_address.is_err());

        let bad_chain_id = DriverConfig::from_lookup(lookup(&[
            ("RPC_URL", "http://localhost:8545"),
            ("CONTRACT_ADDRESS", "0x5FbDB2315678afecb367f032d93F642f64180aa3"),
            ("CHAIN_ID", "mainnet"),
        ]));
        assert!(bad_chain_id.is_err());
    }
}
