//! ID check route handlers
//!
//! This module contains the two endpoints the registration page talks to:
//! - Exchanging the widget's single-use token for a check id
//! - Polling the verification result

pub mod exchange_token;
pub mod id_check_result;

use std::sync::Arc;

use ir_core::repositories::UserRepository;
use ir_core::services::idcheck::{IdCheckVendor, ResultPollingService, TokenExchangeService};

/// Application state that holds shared services
pub struct AppState<U, V>
where
    U: UserRepository,
    V: IdCheckVendor,
{
    pub exchange_service: Arc<TokenExchangeService<U, V>>,
    pub polling_service: Arc<ResultPollingService<U, V>>,
    /// Publishable key embedded in the registration page
    pub public_api_key: String,
}

impl<U, V> AppState<U, V>
where
    U: UserRepository,
    V: IdCheckVendor,
{
    /// Build both services over the same store and vendor client
    pub fn new(users: Arc<U>, vendor: Arc<V>, public_api_key: impl Into<String>) -> Self {
        Self {
            exchange_service: Arc::new(TokenExchangeService::new(users.clone(), vendor.clone())),
            polling_service: Arc::new(ResultPollingService::new(users, vendor)),
            public_api_key: public_api_key.into(),
        }
    }
}
