use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::{IdCheckResultQuery, IdCheckResultResponse};
use crate::handlers::error::{request_id, to_error_response};
use crate::middleware::cors::USER_ID_HEADER;

use ir_core::repositories::UserRepository;
use ir_core::services::idcheck::IdCheckVendor;
use ir_shared::mask_identifier;

use super::AppState;

/// Handler for GET /idcheckresult
///
/// The user id is read from the `X-Example-UserID` header, falling back to
/// the `user_id` query parameter. Only the user's first and last name are
/// returned; the rest of the vendor payload stays server-side.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "user_id": "9b2f6c1e-...",
///     "id_check_data": { "first_name": "Ada", "last_name": "Lovelace" }
/// }
/// ```
///
/// ## Errors
/// - 400 `MISSING_CHECK_ID` before any token was exchanged for this user
/// - 500 `NOT_VERIFIED` / `PENDING_REVIEW` while verification is in progress
pub async fn id_check_result<U, V>(
    req: HttpRequest,
    state: web::Data<AppState<U, V>>,
    query: web::Query<IdCheckResultQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    V: IdCheckVendor + 'static,
{
    let request_id = request_id(&req);
    let user_id = resolve_user_id(&req, query.into_inner());

    log::info!(
        "[{}] Processing id_check_result request for user: {}",
        request_id,
        mask_identifier(&user_id)
    );

    match state.polling_service.get_result(&user_id).await {
        Ok(outcome) => {
            log::info!(
                "[{}] ID check result returned (cached: {})",
                request_id,
                outcome.from_cache
            );
            HttpResponse::Ok().json(IdCheckResultResponse::from(outcome))
        }
        Err(error) => to_error_response(&error, &req),
    }
}

/// Header value wins over the query parameter; absent both yields ""
fn resolve_user_id(req: &HttpRequest, query: IdCheckResultQuery) -> String {
    req.headers()
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(String::from)
        .or(query.user_id)
        .unwrap_or_default()
}
