use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::info;
use url::Url;

use crate::api::{router, AppState};
use crate::builders::BuilderRegistry;
use crate::cache::SlotCache;
use crate::config::SlotscanConfig;
use crate::consensus::BeaconClient;
use crate::duties::SyncDutiesService;
use crate::execution::EthClient;
use crate::reward::RewardCalculator;

/// Main entry point for the application.
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = config_from_env()?;

    // The registry is required to serve reward queries; failing to load it
    // aborts startup.
    let registry = Arc::new(BuilderRegistry::from_json_file(&config.builders_path)?);

    let consensus = Arc::new(BeaconClient::new(config.consensus_url.clone()));
    let execution = Arc::new(
        EthClient::from_url(config.execution_rpc_url.clone())
            .with_call_timeout(config.receipt_timeout),
    );

    let calculator = RewardCalculator::new(
        Arc::clone(&consensus),
        Arc::clone(&execution),
        registry,
        Arc::new(SlotCache::new()),
    )
    .with_fee_batch_size(config.fee_batch_size);

    let duties = SyncDutiesService::new(
        Arc::clone(&consensus),
        Arc::new(SlotCache::new()),
        Arc::new(SlotCache::new()),
    );

    let state = Arc::new(AppState {
        calculator,
        duties,
        consensus,
    });

    let listener = TcpListener::bind(format!("0.0.0.0:{}", config.api_port)).await?;
    let addr = listener.local_addr()?;
    info!(address = ?addr, "Starting server");

    axum::serve(listener, router(state)).await?;

    Ok(())
}

/// Assemble the configuration from environment variables.
///
/// `CONSENSUS_URL` and `EXECUTION_RPC_URL` are required; `BUILDERS_PATH`
/// and `API_PORT` fall back to their defaults.
fn config_from_env() -> anyhow::Result<SlotscanConfig> {
    let consensus_url = dotenvy::var("CONSENSUS_URL")
        .map_err(|_| anyhow::anyhow!("CONSENSUS_URL must be set"))?
        .parse::<Url>()?;

    let execution_rpc_url = dotenvy::var("EXECUTION_RPC_URL")
        .map_err(|_| anyhow::anyhow!("EXECUTION_RPC_URL must be set"))?
        .parse::<Url>()?;

    let mut config = SlotscanConfig::new(consensus_url, execution_rpc_url);

    if let Ok(path) = dotenvy::var("BUILDERS_PATH") {
        config = config.with_builders_path(path);
    }

    if let Ok(port) = dotenvy::var("API_PORT") {
        config = config.with_api_port(port.parse::<u16>()?);
    }

    Ok(config)
}
