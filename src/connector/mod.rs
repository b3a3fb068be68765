//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - HTTP transport (reqwest) and an offline mock backend
//! - The command surface: container, router and controllers

pub mod adapter;
pub mod api;

pub use adapter::*;
