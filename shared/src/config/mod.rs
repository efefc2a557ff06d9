//! Configuration module with business-specific sub-modules
//!
//! - `environment` - Environment detection and logging defaults
//! - `server` - HTTP server and CORS configuration
//! - `vendor` - Caisson API endpoint and credentials

pub mod environment;
pub mod server;
pub mod vendor;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use environment::{Environment, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};
pub use vendor::VendorConfig;

/// Errors raised while loading configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing {0} environment variable")]
    MissingVar(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Vendor API configuration
    pub vendor: VendorConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment
    ///
    /// Fails when either Caisson API key is absent, which must abort startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("ENV"))
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Ok(Self {
            environment,
            server: ServerConfig::from_lookup(&lookup)?,
            vendor: VendorConfig::from_lookup(&lookup)?,
            cors: CorsConfig::from_lookup(&lookup),
            logging: LoggingConfig::for_environment(environment),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
