//! Domain-specific error types and error handling.

use ir_shared::error_kinds;
use thiserror::Error;

use crate::services::idcheck::VendorError;

/// Core domain errors
///
/// Upstream variants keep the vendor detail for server-side logging. The API
/// layer decides what reaches the caller.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid request: {field} is required")]
    InvalidRequest { field: String },

    #[error("Invalid user record: id is empty")]
    InvalidRecord,

    #[error("Missing Caisson check ID")]
    MissingCheckId,

    #[error("Caisson API unavailable: {reason}")]
    UpstreamUnavailable { reason: String },

    #[error("Caisson API returned HTTP status {status}")]
    UpstreamHttpError { status: u16 },

    #[error("Caisson API error '{error}': {message}")]
    UpstreamRejected { error: String, message: String },

    #[error("Caisson API returned an unexpected response: {reason}")]
    UpstreamMalformed { reason: String },

    #[error("User '{user_id}' has not yet verified their ID")]
    NotYetVerified { user_id: String },

    #[error("ID check for user '{user_id}' is pending review")]
    PendingReview { user_id: String },
}

impl DomainError {
    pub fn invalid_request(field: impl Into<String>) -> Self {
        DomainError::InvalidRequest { field: field.into() }
    }

    /// Stable error kind used in the response envelope
    pub fn error_kind(&self) -> &'static str {
        match self {
            DomainError::InvalidRequest { .. } => error_kinds::INVALID_REQUEST,
            DomainError::InvalidRecord => error_kinds::INTERNAL_ERROR,
            DomainError::MissingCheckId => error_kinds::MISSING_CHECK_ID,
            DomainError::UpstreamUnavailable { .. } => error_kinds::UPSTREAM_UNAVAILABLE,
            DomainError::UpstreamHttpError { .. } => error_kinds::UPSTREAM_HTTP_ERROR,
            DomainError::UpstreamRejected { .. } | DomainError::UpstreamMalformed { .. } => {
                error_kinds::UNEXPECTED_ERROR
            }
            DomainError::NotYetVerified { .. } => error_kinds::NOT_VERIFIED,
            DomainError::PendingReview { .. } => error_kinds::PENDING_REVIEW,
        }
    }
}

impl From<VendorError> for DomainError {
    fn from(err: VendorError) -> Self {
        match err {
            VendorError::Unavailable(reason) => DomainError::UpstreamUnavailable { reason },
            VendorError::Http { status } => DomainError::UpstreamHttpError { status },
            VendorError::InvalidBody(reason) => DomainError::UpstreamMalformed { reason },
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
