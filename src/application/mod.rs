//! # Application Layer
//!
//! Use cases coordinating the domain models with an HTTP transport.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
