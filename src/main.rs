use anyhow::Result;
use tracing::info;

use circular_flow::{config::Config, server};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("circular_flow=info".parse()?),
        )
        .init();

    info!("Starting CircularFlow");

    let config = Config::from_env()?;
    info!(
        "Default language: {}, redirect delay: {}s",
        config.default_language.code(),
        config.redirect_delay_secs
    );

    server::run(config).await
}
