//! Business services containing domain logic and use cases.

pub mod idcheck;

// Re-export commonly used types
pub use idcheck::{
    ExchangeOutcome, IdCheckOutcome, IdCheckVendor, ResultPollingService,
    TokenExchangeService, VendorError, VendorReply,
};
