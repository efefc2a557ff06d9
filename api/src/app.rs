//! Application factory
//!
//! This module wires the application state, middleware and routes into an
//! Actix-web `App`. Both `main` and the integration tests build the app here.

use actix_web::{body::MessageBody, middleware::Logger, web, App};

use crate::handlers::error::{json_error_handler, not_found, query_error_handler};
use crate::middleware::{cors::create_cors, security::SecurityMiddleware};
use crate::routes::health::health_check;
use crate::routes::idcheck::{
    exchange_token::exchange_token, id_check_result::id_check_result, AppState,
};
use crate::routes::index::index;

use ir_core::repositories::UserRepository;
use ir_core::services::idcheck::IdCheckVendor;
use ir_shared::{CorsConfig, Environment};

/// Create and configure the application with all dependencies
pub fn create_app<U, V>(
    app_state: web::Data<AppState<U, V>>,
    cors_config: &CorsConfig,
    environment: Environment,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    V: IdCheckVendor + 'static,
{
    let cors = create_cors(cors_config, environment);
    let security = SecurityMiddleware::new(environment);

    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        // Middleware (order matters: security first, then CORS, then logging)
        .wrap(Logger::default())
        .wrap(cors)
        .wrap(security)
        .route("/health", web::get().to(health_check))
        .route("/", web::get().to(index::<U, V>))
        .route("/exchangetoken", web::post().to(exchange_token::<U, V>))
        .route("/idcheckresult", web::get().to(id_check_result::<U, V>))
        .default_service(web::route().to(not_found))
}
