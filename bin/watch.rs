//! Logs every event emitted by a `ValSetDriver` until interrupted.
//!
//!     `cargo run --bin watch -- --from-block 19000000`
//!
//! Requires `WS_RPC_URL` and `CONTRACT_ADDRESS`.

use std::env;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use ethers::contract::{ContractError, LogMeta};
use ethers::providers::{Middleware, Provider, Ws};
use log::{debug, error, info};
use valset_driver::config::DriverConfig;
use valset_driver::subscription::EventSubscription;
use valset_driver::{ValSetDriver, ValSetDriverEvents};

#[derive(Parser, Debug, Clone)]
#[command(about = "Watch the events of a ValSetDriver contract.")]
pub struct WatchArgs {
    /// Replay the events emitted since this block before going live.
    #[arg(long)]
    pub from_block: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env::set_var("RUST_LOG", "info");
    dotenv::dotenv().ok();
    env_logger::init();
    let config = DriverConfig::from_env()?;
    let args = WatchArgs::parse();

    let ws_rpc_url = config
        .ws_rpc_url
        .as_deref()
        .context("WS_RPC_URL must be set")?;
    let provider = Provider::<Ws>::connect(ws_rpc_url)
        .await
        .context("could not connect to client")?;
    let driver = ValSetDriver::new(config.contract_address(), Arc::new(provider));

    info!("Watching {:?}", driver.address());

    match args.from_block {
        Some(from_block) => {
            let replay = driver.watch_from(driver.events(), from_block).await?;
            for (event, meta) in &replay.history {
                info!("[block {}] {:?}", meta.block_number, event);
            }
            info!("Replayed events up to block {}", replay.replayed_to);
            follow(replay.live, Some(replay.replayed_to)).await;
        }
        None => follow(driver.watch_with_meta(driver.events()), None).await,
    }
    Ok(())
}

/// Logs live events until Ctrl-C or until the node ends the subscription. Events at or below
/// `replayed_to` were already printed from history.
async fn follow<M>(
    mut live: EventSubscription<(ValSetDriverEvents, LogMeta), ContractError<M>>,
    replayed_to: Option<u64>,
) where
    M: Middleware + 'static,
{
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, unsubscribing");
                break;
            }
            event = live.recv() => match event {
                Some(Ok((event, meta))) => {
                    if replayed_to.map_or(false, |block| meta.block_number.as_u64() <= block) {
                        debug!("Skipping replayed event at block {}", meta.block_number);
                        continue;
                    }
                    info!("[block {}] {:?}", meta.block_number, event);
                }
                Some(Err(e)) => error!("Failed to receive event: {}", e),
                None => {
                    info!("Subscription closed by the node");
                    break;
                }
            },
        }
    }

    live.unsubscribe().await;
}
