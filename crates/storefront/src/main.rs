use anyhow::{Context, Result};
use dotenv::dotenv;
use shared::{
    config::{Config, ConnectionManager, run_migrations},
    utils::init_logger,
};
use std::time::Duration;
use storefront::{handler::AppRouter, state::AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    init_logger("storefront", is_dev, is_enable_file);

    let config = Config::init().context("Failed to load configuration")?;

    let pool = ConnectionManager::new_pool(&config.database_url, config.db_max_conn)
        .await
        .context("Failed to initialize database pool")?;

    if config.run_migrations {
        info!("Running migrations...");
        run_migrations(&pool).await?;
        info!("Migrations completed successfully");
    }

    let port = config.port;
    let request_timeout = Duration::from_secs(config.request_timeout_secs);

    let state = AppState::new(pool.clone(), &config)
        .await
        .context("Failed to create AppState")?;

    info!("🚀 Server started successfully");

    AppRouter::serve(port, state, request_timeout)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");

    pool.close().await;

    Ok(())
}
