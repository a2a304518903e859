use anyhow::{Context, Result};
use chat_relay::RelayConfig;
use std::env;
use std::path::PathBuf;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_MAX_UPLOAD_MB: usize = 100;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub relay: RelayConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let relay = RelayConfig::from_env()?;

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let upload_dir = env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_UPLOAD_DIR));

        let max_upload_mb = match env::var("MAX_UPLOAD_MB") {
            Ok(value) => value
                .parse::<usize>()
                .with_context(|| format!("MAX_UPLOAD_MB is not a number: {value}"))?,
            Err(_) => DEFAULT_MAX_UPLOAD_MB,
        };

        Ok(Self {
            bind_addr,
            upload_dir,
            max_upload_bytes: upload_limit_bytes(max_upload_mb)?,
            relay,
        })
    }

    /// Creates the upload directory if it does not exist yet.
    pub fn ensure_upload_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.upload_dir).with_context(|| {
            format!("failed to create upload directory {}", self.upload_dir.display())
        })
    }
}

fn upload_limit_bytes(megabytes: usize) -> Result<usize> {
    megabytes
        .checked_mul(1024 * 1024)
        .ok_or_else(|| anyhow::anyhow!("MAX_UPLOAD_MB is too large: {megabytes}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_limit_converts_megabytes() {
        assert_eq!(upload_limit_bytes(100).unwrap(), 100 * 1024 * 1024);
        assert_eq!(upload_limit_bytes(0).unwrap(), 0);
    }

    #[test]
    fn upload_limit_overflow_is_an_error() {
        let err = upload_limit_bytes(usize::MAX).unwrap_err();
        assert!(err.to_string().contains("MAX_UPLOAD_MB"));
    }

    #[test]
    fn ensure_upload_dir_creates_nested_directories() {
        let root = tempfile::tempdir().unwrap();
        let config = AppConfig {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            upload_dir: root.path().join("nested").join("uploads"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
            relay: RelayConfig::new("http://127.0.0.1:9", "key"),
        };

        config.ensure_upload_dir().unwrap();
        assert!(config.upload_dir.is_dir());

        // Calling it again on an existing directory is fine.
        config.ensure_upload_dir().unwrap();
    }
}
