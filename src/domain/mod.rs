//! # Domain Layer
//!
//! Wire models, view state, URL composition and the error taxonomy.
//! This layer is independent of the HTTP client and the terminal surface.

pub mod error;
pub mod models;
pub mod url;

pub use error::*;
pub use models::*;
pub use url::*;
