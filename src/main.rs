use anyhow::{Context, Result};
use inkpot::server::AppState;
use inkpot::{Config, Store};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let store = Store::open(&config.db)
        .with_context(|| format!("Cannot open database at {}", config.db.display()))?;

    let state = AppState::new(store);
    inkpot::server::run(state, &config.addr).await
}
