pub mod idcheck;

pub use idcheck::*;
