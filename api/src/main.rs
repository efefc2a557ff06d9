use std::sync::Arc;

use actix_web::{web, HttpServer};
use log::{error, info, warn};

use ir_api::{create_app, AppState};
use ir_core::repositories::InMemoryUserRepository;
use ir_infra::CaissonClient;
use ir_shared::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Logger is not configured yet; default to info so the reason is visible
            env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.logging.level.as_str()));

    info!("Starting ID check relay ({})", config.environment);

    if config.is_production() && config.cors.allowed_origins.is_empty() {
        warn!("ALLOWED_ORIGINS is empty; browsers on other origins will be refused");
    }

    let vendor = match CaissonClient::new(config.vendor.clone()) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!("Failed to initialize Caisson client: {}", e);
            std::process::exit(1);
        }
    };
    let users = Arc::new(InMemoryUserRepository::new());

    let app_state = web::Data::new(AppState::new(
        users,
        vendor,
        config.vendor.public_api_key.clone(),
    ));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let cors_config = config.cors.clone();
    let environment = config.environment;

    let mut server = HttpServer::new(move || create_app(app_state.clone(), &cors_config, environment));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await
}
