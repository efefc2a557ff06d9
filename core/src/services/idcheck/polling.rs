//! Result polling adapter

use std::sync::Arc;

use ir_shared::mask_identifier;

use crate::domain::value_objects::VerificationResult;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;

use super::traits::IdCheckVendor;
use super::types::{vendor_errors, IdCheckOutcome};

/// Fetches verification results and caches them on the user record
///
/// A cached result is reused forever; there is no refresh or expiry.
pub struct ResultPollingService<U: UserRepository, V: IdCheckVendor> {
    /// User record store
    users: Arc<U>,
    /// Vendor API client
    vendor: Arc<V>,
}

impl<U: UserRepository, V: IdCheckVendor> ResultPollingService<U, V> {
    pub fn new(users: Arc<U>, vendor: Arc<V>) -> Self {
        Self { users, vendor }
    }

    /// Return the projected ID check data for `user_id`
    ///
    /// Order of evaluation:
    /// 1. Cached result: returned without a vendor call
    /// 2. No check id on file: `MissingCheckId`
    /// 3. Vendor call, classified as transport failure, HTTP status,
    ///    `NOT_VERIFIED`, `PENDING_REVIEW`, any other `error`, then success
    ///
    /// Only a successful poll mutates the record.
    pub async fn get_result(&self, user_id: &str) -> DomainResult<IdCheckOutcome> {
        if user_id.is_empty() {
            return Err(DomainError::invalid_request("user_id"));
        }

        let mut record = self.users.get_or_create(user_id).await?;

        if let Some(id_check_data) = record.cached_id_check_data() {
            tracing::debug!(
                user_id = %mask_identifier(user_id),
                event = "id_check_cache_hit",
                "Returning cached ID check result"
            );
            return Ok(IdCheckOutcome {
                user_id: user_id.to_string(),
                id_check_data,
                from_cache: true,
            });
        }

        let check_id = match record.check_id.clone() {
            Some(check_id) => check_id,
            None => {
                tracing::warn!(
                    user_id = %mask_identifier(user_id),
                    event = "missing_check_id",
                    "ID check result requested before token exchange"
                );
                return Err(DomainError::MissingCheckId);
            }
        };

        let reply = self.vendor.fetch_result(&check_id).await.map_err(|e| {
            tracing::error!(
                user_id = %mask_identifier(user_id),
                error = %e,
                event = "id_check_fetch_failed",
                "Error fetching Caisson ID check result"
            );
            DomainError::from(e)
        })?;

        if let Some(error) = reply.error() {
            return Err(self.classify_vendor_error(user_id, error, reply.error_message()));
        }

        let result = VerificationResult::from_vendor_body(reply.into_body()).ok_or_else(|| {
            tracing::error!(
                user_id = %mask_identifier(user_id),
                event = "id_check_malformed",
                "Caisson ID check result has no info section"
            );
            DomainError::UpstreamMalformed {
                reason: "result has no info object".to_string(),
            }
        })?;

        let id_check_data = result.id_check_data();
        record.cache_result(result)?;
        self.users.save(record).await?;

        tracing::info!(
            user_id = %mask_identifier(user_id),
            check_id = %mask_identifier(&check_id),
            event = "id_check_cached",
            "Stored Caisson ID check result"
        );

        Ok(IdCheckOutcome {
            user_id: user_id.to_string(),
            id_check_data,
            from_cache: false,
        })
    }

    fn classify_vendor_error(&self, user_id: &str, error: String, message: String) -> DomainError {
        match error.as_str() {
            vendor_errors::NOT_VERIFIED => {
                tracing::warn!(
                    user_id = %mask_identifier(user_id),
                    event = "id_not_verified",
                    "User has not yet verified their ID"
                );
                DomainError::NotYetVerified {
                    user_id: user_id.to_string(),
                }
            }
            vendor_errors::PENDING_REVIEW => {
                tracing::warn!(
                    user_id = %mask_identifier(user_id),
                    event = "id_pending_review",
                    "User ID check is pending review"
                );
                DomainError::PendingReview {
                    user_id: user_id.to_string(),
                }
            }
            _ => {
                tracing::error!(
                    user_id = %mask_identifier(user_id),
                    vendor_error = %error,
                    vendor_message = %message,
                    event = "id_check_rejected",
                    "Error fetching Caisson ID check result"
                );
                DomainError::UpstreamRejected { error, message }
            }
        }
    }
}
