//! Devbook Core Library
//!
//! Shared types for the Devbook SDK:
//! - Entry and extension data model
//! - Wire records for every API operation
//! - Client configuration

pub mod config;
pub mod models;

// Re-export commonly used types
pub use config::{ClientConfig, ConfigError, DEFAULT_BASE_URL};
pub use models::*;
