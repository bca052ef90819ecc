//! Reads and updates the validator-set parameters of a deployed `ValSetDriver`.
//!
//!     `cargo run --bin valset -- config --at 1700000000`
//!     `cargo run --bin valset -- set-epoch-duration --duration 3600`
//!
//! Connection settings are read from the environment (or `.env`): `RPC_URL`,
//! `CONTRACT_ADDRESS`, and `PRIVATE_KEY` / `CHAIN_ID` for transactions.

use std::env;
use std::sync::Arc;

use alloy_primitives::Address;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ethers::contract::ContractCall;
use ethers::middleware::SignerMiddleware;
use ethers::providers::{Http, Middleware, Provider};
use ethers::signers::Signer;
use log::{info, warn};
use serde_json::{json, Value};
use valset_driver::config::DriverConfig;
use valset_driver::{CrossChainAddress, ValSetDriver};

#[derive(Parser, Debug, Clone)]
#[command(about = "Inspect and update a ValSetDriver contract.")]
pub struct ValSetArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the validator-set config as JSON.
    Config {
        /// Read the config as of this timestamp instead of now.
        #[arg(long)]
        at: Option<u64>,
    },
    /// Print the current and next epoch as JSON.
    Epoch,
    /// Set the duration of the epochs following the next one.
    SetEpochDuration {
        #[arg(long)]
        duration: u64,
    },
    /// Register a settlement contract.
    AddSettlement {
        #[arg(long)]
        chain_id: u64,
        #[arg(long)]
        addr: Address,
    },
}

async fn print_config(driver: &ValSetDriver<Provider<Http>>, at: Option<u64>) -> Result<()> {
    let config = match at {
        Some(timestamp) => driver.get_config_at(timestamp).call().await,
        None => driver.get_config().call().await,
    }
    .context("failed to read config")?;

    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// Epoch `current` and the one after it, each as `(start, duration)`.
fn epochs_json(current: u64, current_epoch: (u64, u64), next_epoch: (u64, u64)) -> Value {
    json!({
        "current": {
            "epoch": current,
            "start": current_epoch.0,
            "duration": current_epoch.1,
        },
        "next": {
            "epoch": current + 1,
            "start": next_epoch.0,
            "duration": next_epoch.1,
        },
    })
}

async fn print_epoch(driver: &ValSetDriver<Provider<Http>>) -> Result<()> {
    let current_epoch = driver.get_current_epoch().call().await?;
    let current_start = driver.get_current_epoch_start().call().await?;
    let current_duration = driver.get_current_epoch_duration().call().await?;
    let next_start = driver.get_next_epoch_start().call().await?;
    let next_duration = driver.get_next_epoch_duration().call().await?;

    let epochs = epochs_json(
        current_epoch,
        (current_start, current_duration),
        (next_start, next_duration),
    );
    println!("{}", serde_json::to_string_pretty(&epochs)?);
    Ok(())
}

/// Sends `call` and waits until it is included.
async fn submit<M>(call: ContractCall<M, ()>) -> Result<()>
where
    M: Middleware + 'static,
{
    let pending = call.send().await.context("failed to send transaction")?;
    info!("Transaction submitted: {:?}", *pending);

    match pending.await.context("failed to fetch receipt")? {
        Some(receipt) => info!(
            "Transaction {:?} included in block {:?}",
            receipt.transaction_hash, receipt.block_number
        ),
        None => warn!("Transaction was dropped from the mempool"),
    }
    Ok(())
}

async fn signing_driver(
    config: &DriverConfig,
    provider: Provider<Http>,
) -> Result<ValSetDriver<SignerMiddleware<Provider<Http>, ethers::signers::LocalWallet>>> {
    let chain_id = match config.chain_id {
        Some(chain_id) => chain_id,
        None => provider.get_chainid().await?.as_u64(),
    };
    let wallet = config.wallet()?.with_chain_id(chain_id);
    info!("Signing as {:?} on chain {}", wallet.address(), chain_id);

    let client = Arc::new(SignerMiddleware::new(provider, wallet));
    Ok(ValSetDriver::new(config.contract_address(), client))
}

#[tokio::main]
async fn main() -> Result<()> {
    env::set_var("RUST_LOG", "info");
    dotenv::dotenv().ok();
    env_logger::init();
    let config = DriverConfig::from_env()?;
    let args = ValSetArgs::parse();

    let provider = Provider::<Http>::try_from(config.rpc_url.as_str())
        .context("could not connect to client")?;

    match args.command {
        Command::Config { at } => {
            let driver = ValSetDriver::new(config.contract_address(), Arc::new(provider));
            print_config(&driver, at).await
        }
        Command::Epoch => {
            let driver = ValSetDriver::new(config.contract_address(), Arc::new(provider));
            print_epoch(&driver).await
        }
        Command::SetEpochDuration { duration } => {
            let driver = signing_driver(&config, provider).await?;
            submit(driver.set_epoch_duration(duration)).await
        }
        Command::AddSettlement { chain_id, addr } => {
            let driver = signing_driver(&config, provider).await?;
            let settlement = CrossChainAddress {
                chain_id,
                addr: addr.0 .0.into(),
            };
            submit(driver.add_settlement(settlement)).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epochs_json() {
        let epochs = epochs_json(41, (1_700_000_000, 3600), (1_700_003_600, 7200));

        assert_eq!(epochs["current"]["epoch"], 41);
        assert_eq!(epochs["current"]["start"], 1_700_000_000u64);
        assert_eq!(epochs["current"]["duration"], 3600);
        assert_eq!(epochs["next"]["epoch"], 42);
        assert_eq!(epochs["next"]["start"], 1_700_003_600u64);
        assert_eq!(epochs["next"]["duration"], 7200);
    }

    #[test]
    fn test_parse_commands() {
        let args = ValSetArgs::try_parse_from(["valset", "epoch"]).unwrap();
        assert!(matches!(args.command, Command::Epoch));

        let args = ValSetArgs::try_parse_from(["valset", "config", "--at", "1700000000"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Config {
                at: Some(1_700_000_000)
            }
        ));

        let args = ValSetArgs::try_parse_from([
            "valset",
            "add-settlement",
            "--chain-id",
            "8453",
            "--addr",
            "0x5FbDB2315678afecb367f032d93F642f64180aa3",
        ])
        .unwrap();
        assert!(matches!(
            args.command,
            Command::AddSettlement { chain_id: 8453, .. }
        ));
    }
}
