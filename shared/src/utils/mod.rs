//! Utility functions

pub mod identifier;

pub use identifier::{generate_user_id, mask_identifier};
