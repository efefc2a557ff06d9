//! Types for ID check service results

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::IdCheckData;

/// Vendor `error` values with a dedicated meaning
pub mod vendor_errors {
    /// The user has not completed verification yet
    pub const NOT_VERIFIED: &str = "NOT_VERIFIED";
    /// Verification is waiting on manual review
    pub const PENDING_REVIEW: &str = "PENDING_REVIEW";
}

/// Result of a successful token exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeOutcome {
    /// The user the check id was stored for
    pub user_id: String,
}

/// Result of a successful result poll
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdCheckOutcome {
    pub user_id: String,
    pub id_check_data: IdCheckData,
    /// Whether the data came from the cached result
    #[serde(skip)]
    pub from_cache: bool,
}
