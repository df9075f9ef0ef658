//! Binary crate for the weather dashboard.
//!
//! Runs the full fetch-and-archive pass once:
//! - Loads configuration from the environment
//! - Ensures the destination bucket exists
//! - Fetches, prints and archives each configured city in order

use dashboard_core::{Archiver, Config, Dashboard, OpenWeatherClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dashboard_core=info,dashboard_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!(
        "Starting dashboard run: {} cities, bucket {}",
        config.cities.len(),
        config.bucket_name
    );

    let archiver = Archiver::connect(&config).await;
    archiver.ensure_bucket().await;

    let weather = OpenWeatherClient::new(config.api_key, config.api_url);
    let dashboard = Dashboard::new(weather, archiver, config.cities);
    dashboard.run().await?;

    Ok(())
}
