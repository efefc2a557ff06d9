use actix_web::{
    error::{InternalError, JsonPayloadError, QueryPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};
use uuid::Uuid;

use ir_core::errors::DomainError;
use ir_shared::{error_kinds, ErrorResponse};

/// Extract the request ID from `X-Request-ID`, or generate one
pub fn request_id(req: &HttpRequest) -> String {
    req.headers()
        .get("X-Request-ID")
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// HTTP status for a domain error
///
/// Vendor HTTP errors relay the vendor's status when it is a 4xx or 5xx.
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::InvalidRequest { .. } | DomainError::MissingCheckId => StatusCode::BAD_REQUEST,
        DomainError::UpstreamHttpError { status } => StatusCode::from_u16(*status)
            .ok()
            .filter(|s| s.is_client_error() || s.is_server_error())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Message safe to show the caller
///
/// Vendor `error`/`error_message` text and transport detail never appear here.
pub fn caller_message(error: &DomainError) -> String {
    match error {
        DomainError::InvalidRequest { field } => format!("invalid input: {} is missing or malformed", field),
        DomainError::MissingCheckId => "Missing Caisson check ID".to_string(),
        DomainError::InvalidRecord => "Internal server error".to_string(),
        DomainError::UpstreamUnavailable { .. } => "Caisson API is unavailable".to_string(),
        DomainError::UpstreamHttpError { .. } => "HTTP error from Caisson API".to_string(),
        DomainError::UpstreamRejected { .. } | DomainError::UpstreamMalformed { .. } => {
            "Unexpected error from Caisson API".to_string()
        }
        DomainError::NotYetVerified { .. } | DomainError::PendingReview { .. } => error.to_string(),
    }
}

/// Convert a domain error to the error envelope response
pub fn to_error_response(error: &DomainError, req: &HttpRequest) -> HttpResponse {
    let trace_id = request_id(req);
    let status = status_for(error);

    if status.is_server_error() {
        log::error!("Request {} {} {} - {:?}", trace_id, req.method(), req.path(), error);
    } else {
        log::warn!("Request {} {} {} - {}", trace_id, req.method(), req.path(), error);
    }

    HttpResponse::build(status).json(ErrorResponse::new(error.error_kind(), caller_message(error)))
}

/// Error handler for malformed JSON bodies
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected JSON payload on {}: {}", req.path(), err);
    let response = to_error_response(&DomainError::invalid_request("body"), req);
    InternalError::from_response(err, response).into()
}

/// Error handler for malformed query strings
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected query string on {}: {}", req.path(), err);
    let response = to_error_response(&DomainError::invalid_request("query"), req);
    InternalError::from_response(err, response).into()
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_kinds::NOT_FOUND,
        "The requested resource was not found",
    ))
}
