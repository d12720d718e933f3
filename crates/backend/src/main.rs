use anyhow::{Context, Result};
use backend::{handler::AppRouter, state::AppState};
use dotenv::dotenv;
use shared::{
    config::{Config, ConnectionManager},
    utils::init_logger,
};
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

    init_logger("backend", is_dev, is_enable_file);

    let config = Config::init().context("Failed to load configuration")?;

    let pool = ConnectionManager::new_pool(&config.database)
        .await
        .context("Failed to initialize the database pool")?;

    if config.prepare_schema {
        ConnectionManager::prepare_schema(&pool)
            .await
            .context("Failed to prepare the database schema")?;
    }

    let state = AppState::new(pool);

    println!("🚀 Server started successfully");

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down server...");

    Ok(())
}
