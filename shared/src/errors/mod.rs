//! Shared error envelope returned by every endpoint

use serde::{Deserialize, Serialize};

/// Error response structure used across all API endpoints
///
/// ```json
/// { "error_kind": "MISSING_CHECK_ID", "message": "Missing Caisson check ID" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error kind for programmatic handling
    pub error_kind: String,

    /// Human-readable message, never containing raw vendor detail
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error_kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_kind: error_kind.into(),
            message: message.into(),
        }
    }
}

/// Error kinds used across the application
pub mod error_kinds {
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const MISSING_CHECK_ID: &str = "MISSING_CHECK_ID";
    pub const UPSTREAM_UNAVAILABLE: &str = "UPSTREAM_UNAVAILABLE";
    pub const UPSTREAM_HTTP_ERROR: &str = "UPSTREAM_HTTP_ERROR";
    pub const NOT_VERIFIED: &str = "NOT_VERIFIED";
    pub const PENDING_REVIEW: &str = "PENDING_REVIEW";
    pub const UNEXPECTED_ERROR: &str = "UNEXPECTED_ERROR";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const NOT_FOUND: &str = "NOT_FOUND";
}
