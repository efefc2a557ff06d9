//! Caisson API configuration

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ConfigError;

/// Default Caisson API server
pub const DEFAULT_API_SERVER: &str = "https://api-noam.caisson.dev";

/// Vendor endpoint and credentials
///
/// Both keys are required. The secret key is only ever sent to the vendor in
/// the `Authorization` header; the public key is handed to the browser widget.
#[derive(Clone, Deserialize, Serialize)]
pub struct VendorConfig {
    /// Base URL of the Caisson API, without trailing slash
    pub base_url: String,

    /// Server-side secret API key
    pub secret_api_key: String,

    /// Public API key exposed to the client-side widget
    pub public_api_key: String,

    /// Optional timeout for vendor requests in seconds
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl VendorConfig {
    pub fn new(
        base_url: impl Into<String>,
        secret_api_key: impl Into<String>,
        public_api_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            secret_api_key: secret_api_key.into(),
            public_api_key: public_api_key.into(),
            request_timeout_secs: None,
        }
    }

    /// Read `CAISSON_SECRET_API_KEY`, `CAISSON_PUBLIC_API_KEY`,
    /// `CAISSON_API_SERVER` and `CAISSON_REQUEST_TIMEOUT_SECS`
    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secret_api_key = required(lookup, "CAISSON_SECRET_API_KEY")?;
        let public_api_key = required(lookup, "CAISSON_PUBLIC_API_KEY")?;
        let base_url = lookup("CAISSON_API_SERVER").unwrap_or_else(|| DEFAULT_API_SERVER.to_string());

        let request_timeout_secs = match lookup("CAISSON_REQUEST_TIMEOUT_SECS") {
            Some(value) => Some(value.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                name: "CAISSON_REQUEST_TIMEOUT_SECS".to_string(),
                value,
            })?),
            None => None,
        };

        Ok(Self {
            request_timeout_secs,
            ..Self::new(base_url, secret_api_key, public_api_key)
        })
    }

    /// Value of the `Authorization` header for vendor calls
    pub fn authorization_header(&self) -> String {
        format!("Caisson {}", self.secret_api_key)
    }
}

fn required(lookup: &dyn Fn(&str) -> Option<String>, name: &str) -> Result<String, ConfigError> {
    lookup(name)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingVar(name.to_string()))
}

// Keeps the secret key out of logs.
impl fmt::Debug for VendorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VendorConfig")
            .field("base_url", &self.base_url)
            .field("secret_api_key", &"<redacted>")
            .field("public_api_key", &self.public_api_key)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}
