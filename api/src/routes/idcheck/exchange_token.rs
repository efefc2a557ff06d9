use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::dto::{ExchangeTokenRequest, ExchangeTokenResponse};
use crate::handlers::error::{request_id, to_error_response};

use ir_core::errors::DomainError;
use ir_core::repositories::UserRepository;
use ir_core::services::idcheck::IdCheckVendor;

use super::AppState;

/// Handler for POST /exchangetoken
///
/// Redeems the widget's single-use exchange token for a permanent check id
/// and stores it on the user's record.
///
/// # Request Body
///
/// ```json
/// {
///     "user_id": "9b2f6c1e-...",
///     "caisson_exchange_token": "xchg_..."
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "user_id": "9b2f6c1e-..." }
/// ```
///
/// ## Errors
/// - 400 `INVALID_REQUEST` when either field is missing or empty
/// - 4xx/5xx `UPSTREAM_HTTP_ERROR` relaying the vendor's status
/// - 500 for any other vendor failure
pub async fn exchange_token<U, V>(
    req: HttpRequest,
    state: web::Data<AppState<U, V>>,
    request: web::Json<ExchangeTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    V: IdCheckVendor + 'static,
{
    let request_id = request_id(&req);

    if let Err(validation_errors) = request.validate() {
        let field = if validation_errors.field_errors().contains_key("user_id") {
            "user_id"
        } else {
            "caisson_exchange_token"
        };

        log::warn!(
            "[{}] Validation failed for exchange_token request: {:?}",
            request_id,
            validation_errors.field_errors().keys().collect::<Vec<_>>()
        );

        return to_error_response(&DomainError::invalid_request(field), &req);
    }

    let request = request.into_inner();
    let user_id = request.user_id.unwrap_or_default();
    let token = request.caisson_exchange_token.unwrap_or_default();

    match state.exchange_service.exchange(&user_id, &token).await {
        Ok(outcome) => {
            log::info!("[{}] Exchange token redeemed", request_id);
            HttpResponse::Ok().json(ExchangeTokenResponse::from(outcome))
        }
        Err(error) => to_error_response(&error, &req),
    }
}
