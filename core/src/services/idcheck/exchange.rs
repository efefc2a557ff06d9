//! Token exchange adapter

use std::sync::Arc;

use ir_shared::mask_identifier;

use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;

use super::traits::IdCheckVendor;
use super::types::ExchangeOutcome;

/// Redeems client exchange tokens for permanent check ids
pub struct TokenExchangeService<U: UserRepository, V: IdCheckVendor> {
    /// User record store
    users: Arc<U>,
    /// Vendor API client
    vendor: Arc<V>,
}

impl<U: UserRepository, V: IdCheckVendor> TokenExchangeService<U, V> {
    pub fn new(users: Arc<U>, vendor: Arc<V>) -> Self {
        Self { users, vendor }
    }

    /// Exchange `exchange_token` for a check id and store it on the user record
    ///
    /// This method:
    /// 1. Rejects an empty user id or token without calling the vendor
    /// 2. Calls the vendor exchange endpoint exactly once
    /// 3. Classifies the reply (transport, HTTP status, `error` field)
    /// 4. Stores the returned check id, replacing any previous one
    ///
    /// # Returns
    ///
    /// * `Ok(ExchangeOutcome)` - The check id was stored
    /// * `Err(DomainError)` - Validation failed or the vendor call failed
    pub async fn exchange(&self, user_id: &str, exchange_token: &str) -> DomainResult<ExchangeOutcome> {
        if user_id.is_empty() {
            return Err(DomainError::invalid_request("user_id"));
        }
        if exchange_token.is_empty() {
            return Err(DomainError::invalid_request("caisson_exchange_token"));
        }

        let reply = self.vendor.exchange_token(exchange_token).await.map_err(|e| {
            tracing::error!(
                user_id = %mask_identifier(user_id),
                error = %e,
                event = "token_exchange_failed",
                "Error exchanging Caisson token"
            );
            DomainError::from(e)
        })?;

        if let Some(error) = reply.error() {
            let message = reply.error_message();
            tracing::error!(
                user_id = %mask_identifier(user_id),
                vendor_error = %error,
                vendor_message = %message,
                event = "token_exchange_rejected",
                "Caisson rejected token exchange"
            );
            return Err(DomainError::UpstreamRejected { error, message });
        }

        let check_id = reply.check_id().ok_or_else(|| {
            tracing::error!(
                user_id = %mask_identifier(user_id),
                event = "token_exchange_malformed",
                "Caisson exchange reply has no check_id"
            );
            DomainError::UpstreamMalformed {
                reason: "exchange reply has no check_id".to_string(),
            }
        })?;

        let mut record = self.users.get_or_create(user_id).await?;
        if record.has_check_id() {
            tracing::warn!(
                user_id = %mask_identifier(user_id),
                event = "check_id_replaced",
                "Replacing existing check id after repeated exchange"
            );
        }
        record.set_check_id(check_id);
        self.users.save(record).await?;

        tracing::info!(
            user_id = %mask_identifier(user_id),
            check_id = %mask_identifier(check_id),
            event = "token_exchanged",
            "Exchanged Caisson token for check id"
        );

        Ok(ExchangeOutcome {
            user_id: user_id.to_string(),
        })
    }
}
