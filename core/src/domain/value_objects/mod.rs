//! Value objects carried between the vendor, the store and the API.

pub mod verification_result;

pub use verification_result::{IdCheckData, VerificationResult};
