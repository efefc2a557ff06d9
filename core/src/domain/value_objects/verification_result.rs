//! Verification result returned by the vendor and the projection relayed to clients.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name fields projected from a verification result
///
/// This is the only part of a verification result that ever leaves the
/// server. Absent names are omitted from the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdCheckData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl IdCheckData {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }
}

/// Vendor verification result, stored verbatim
///
/// The wrapped body is guaranteed to carry an `info` object. Everything else
/// the vendor returned is kept as-is but never projected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerificationResult(Value);

impl VerificationResult {
    /// Wrap a vendor body, rejecting bodies without an `info` object
    pub fn from_vendor_body(body: Value) -> Option<Self> {
        if body.get("info").map_or(false, Value::is_object) {
            Some(Self(body))
        } else {
            None
        }
    }

    /// Project the first and last name out of `info`
    pub fn id_check_data(&self) -> IdCheckData {
        let info = &self.0["info"];
        let name = |key: &str| info.get(key).and_then(Value::as_str).map(str::to_string);

        IdCheckData {
            first_name: name("first_name"),
            last_name: name("last_name"),
        }
    }

    /// The full vendor body
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}
