use serde::{Deserialize, Serialize};
use validator::Validate;

use ir_core::domain::value_objects::IdCheckData;
use ir_core::services::idcheck::{ExchangeOutcome, IdCheckOutcome};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ExchangeTokenRequest {
    /// Caller-chosen user identifier
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub user_id: Option<String>,

    /// Single-use token issued by the Caisson widget
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub caisson_exchange_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeTokenResponse {
    pub user_id: String,
}

impl From<ExchangeOutcome> for ExchangeTokenResponse {
    fn from(outcome: ExchangeOutcome) -> Self {
        Self {
            user_id: outcome.user_id,
        }
    }
}

/// Query string of `GET /idcheckresult`
///
/// The `X-Example-UserID` header takes priority over this parameter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdCheckResultQuery {
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdCheckResultResponse {
    pub user_id: String,
    pub id_check_data: IdCheckData,
}

impl From<IdCheckOutcome> for IdCheckResultResponse {
    fn from(outcome: IdCheckOutcome) -> Self {
        Self {
            user_id: outcome.user_id,
            id_check_data: outcome.id_check_data,
        }
    }
}
