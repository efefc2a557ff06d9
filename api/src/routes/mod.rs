//! Route handlers
//!
//! - `idcheck` - Token exchange and result polling endpoints
//! - `index` - Registration page
//! - `health` - Liveness probe

pub mod health;
pub mod idcheck;
pub mod index;
