mod admin;
mod app;
mod chat_form;
mod config;
mod error;
mod home;
mod templates;
mod upload_utils;

use anyhow::Context;
use app::AppState;
use config::AppConfig;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env()?;
    config.ensure_upload_dir()?;
    log::info!("Storing uploads in {}", config.upload_dir.display());

    let state = Arc::new(AppState::new(&config)?);
    let app = app::router(state, config.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    log::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
