use crate::config::AppConfig;
use crate::templates::Templates;
use crate::{admin, home};
use anyhow::Result;
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use chat_relay::RelayService;
use std::path::PathBuf;
use std::sync::Arc;

pub struct AppState {
    pub upload_dir: PathBuf,
    pub relay: RelayService,
    pub templates: Templates,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            upload_dir: config.upload_dir.clone(),
            relay: RelayService::new(config.relay.clone())?,
            templates: Templates::new()?,
        })
    }
}

pub fn router(state: Arc<AppState>, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(home::chat_page).post(home::chat))
        .route(
            "/admin",
            get(admin::upload_page)
                .post(admin::upload)
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use axum_test::TestServer;
    use chat_relay::RelayConfig;
    use std::path::Path;

    pub fn test_config(upload_dir: &Path, relay_url: &str) -> AppConfig {
        AppConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            upload_dir: upload_dir.to_path_buf(),
            max_upload_bytes: 1024 * 1024,
            relay: RelayConfig::new(relay_url, "test-key"),
        }
    }

    pub fn test_server(config: &AppConfig) -> TestServer {
        let state = Arc::new(AppState::new(config).unwrap());
        TestServer::new(router(state, config.max_upload_bytes)).unwrap()
    }
}
