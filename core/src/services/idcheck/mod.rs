//! ID check service module
//!
//! This module provides the two adapters between the web front-end and the
//! Caisson identity verification API:
//! - Token exchange: redeem a single-use exchange token for a check id
//! - Result polling: fetch, classify and cache the verification result

mod exchange;
mod polling;
mod traits;
mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;


pub use exchange::TokenExchangeService;
pub use polling::ResultPollingService;
pub use traits::{IdCheckVendor, VendorError, VendorReply};
pub use types::{vendor_errors, ExchangeOutcome, IdCheckOutcome};
