//! # Infrastructure Layer
//!
//! Concrete implementations of the seams defined in `ir_core`.
//!
//! ## Architecture
//!
//! - **Vendor**: HTTP client for the Caisson identity verification API

// Re-export core types for convenience
pub use ir_core::errors::*;

/// Vendor module - Caisson API client
pub mod vendor;

pub use vendor::CaissonClient;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
