use std::sync::Arc;

use anyhow::Context;
use client::CodeforcesSource;
use server::config::AppConfig;
use server::state::AppState;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let config = AppConfig::load().context("Failed to load config")?;
    let source = CodeforcesSource::new(&config.source).context("Failed to build HTTP client")?;
    info!(
        base_url = %source.base_url(),
        timeout_secs = config.source.timeout_secs,
        "Submission source ready"
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = server::build_router(AppState::new(Arc::new(source), config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
