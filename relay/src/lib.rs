pub mod config;
pub mod error;
pub mod models;
pub mod relay_service;

pub use config::RelayConfig;
pub use error::RelayError;
pub use models::*;
pub use relay_service::RelayService;
