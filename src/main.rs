use anyhow::Context;
use tracing_subscriber::EnvFilter;

use sheet_ranker::api;
use sheet_ranker::config::Config;
use sheet_ranker::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    config.validate().context("Invalid configuration")?;
    tracing::info!(
        "Sheet source: {} (timeout {}s)",
        config.sheet.csv_url.as_deref().unwrap_or_default(),
        config.sheet.timeout_secs
    );
    tracing::info!(
        "Rank columns: magic={}, physical={}, value={}",
        config.fields.magic_attack,
        config.fields.physical_attack,
        config.fields.value
    );

    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(config)?;
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;
    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
