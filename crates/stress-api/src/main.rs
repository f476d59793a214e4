//! Binary entrypoint for the stress API server.
use stress_api::{run, ApiConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stress_api=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ApiConfig::from_env()?;
    run(config).await
}
