//! Shared utilities and common types for the ID check relay
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The error envelope returned by every endpoint
//! - Utility functions (identifier masking and generation)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, ConfigError, CorsConfig, Environment, LoggingConfig, ServerConfig, VendorConfig};
pub use errors::{error_kinds, ErrorResponse};
pub use utils::{generate_user_id, mask_identifier};
