use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_SERVICE_NAME: &str = "Gemini API";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub api_url: String,
    pub api_key: String,
    /// Name shown to users when the relay fails.
    pub service_name: String,
    pub timeout: Duration,
}

impl RelayConfig {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn from_env() -> Result<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| anyhow::anyhow!("GEMINI_API_KEY environment variable not set"))?;
        let api_url = env::var("RELAY_API_URL")
            .map_err(|_| anyhow::anyhow!("RELAY_API_URL environment variable not set"))?;

        let mut config = Self::new(api_url, api_key);

        if let Ok(name) = env::var("RELAY_SERVICE_NAME") {
            config.service_name = name;
        }

        if let Ok(secs) = env::var("RELAY_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .with_context(|| format!("RELAY_TIMEOUT_SECS is not a number: {secs}"))?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
