//! Trait for identity verification vendor integration

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Failures below the application protocol
///
/// A vendor reply that parsed but carries an `error` field is not a
/// `VendorError`; the adapters classify those themselves.
#[derive(Debug, Error)]
pub enum VendorError {
    #[error("vendor unreachable: {0}")]
    Unavailable(String),

    #[error("vendor returned HTTP status {status}")]
    Http { status: u16 },

    #[error("vendor returned an unreadable body: {0}")]
    InvalidBody(String),
}

/// Parsed JSON body of a successful (2xx) vendor response
#[derive(Debug, Clone, PartialEq)]
pub struct VendorReply {
    body: Value,
}

impl VendorReply {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    /// The `error` field, if present and meaningful
    ///
    /// Null, `false` and empty strings do not count as errors.
    pub fn error(&self) -> Option<String> {
        match self.body.get("error") {
            None | Some(Value::Null) | Some(Value::Bool(false)) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        }
    }

    /// The `error_message` field, or an empty string
    pub fn error_message(&self) -> String {
        self.body
            .get("error_message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }

    /// The `check_id` field of an exchange reply
    pub fn check_id(&self) -> Option<&str> {
        self.body
            .get("check_id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn into_body(self) -> Value {
        self.body
    }
}

/// Trait for identity verification vendor integration
#[async_trait]
pub trait IdCheckVendor: Send + Sync {
    /// Redeem a single-use exchange token for a permanent check id
    async fn exchange_token(&self, exchange_token: &str) -> Result<VendorReply, VendorError>;

    /// Fetch the verification result for a check id
    async fn fetch_result(&self, check_id: &str) -> Result<VendorReply, VendorError>;
}
