//! # ID Check Relay Core
//!
//! Domain layer for the ID check relay. This crate contains the user record
//! entity, the repository interface and its in-memory store, the seam to the
//! identity verification vendor, and the two adapters built on top of it:
//! token exchange and result polling.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::*;
pub use services::*;
pub use repositories::*;
pub use errors::*;
