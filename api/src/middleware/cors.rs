//! CORS middleware configuration for cross-origin requests.
//!
//! The registration page may be served from a different origin than this
//! server, so the browser needs CORS to call `/exchangetoken` and
//! `/idcheckresult`. Development is permissive; production only allows the
//! configured origins.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use ir_shared::{CorsConfig, Environment};

/// Header the registration page uses to identify the user on result polls
pub const USER_ID_HEADER: &str = "x-example-userid";

/// Creates a CORS middleware instance configured for `environment`.
pub fn create_cors(config: &CorsConfig, environment: Environment) -> Cors {
    if environment.is_production() {
        create_production_cors(config)
    } else {
        create_development_cors(config)
    }
}

fn create_development_cors(config: &CorsConfig) -> Cors {
    log::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(allowed_headers())
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(config.max_age)
        .supports_credentials()
}

fn create_production_cors(config: &CorsConfig) -> Cors {
    log::info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(allowed_headers())
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(config.max_age);

    for origin in &config.allowed_origins {
        log::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    cors
}

fn allowed_headers() -> Vec<header::HeaderName> {
    vec![
        header::ACCEPT,
        header::CONTENT_TYPE,
        header::ORIGIN,
        header::HeaderName::from_static("x-request-id"),
        header::HeaderName::from_static(USER_ID_HEADER),
    ]
}
