//! Shared utilities, configuration, and error handling for Chatline
//!
//! This crate provides common functionality used across the Chatline workspace:
//! - Configuration management following 12-factor principles
//! - Error types and their HTTP mapping
//! - Request extractors

pub mod config;
pub mod error;
pub mod extractors;

pub use config::{Config, DatabaseConfig};
pub use error::{Error, Result};
pub use extractors::{LimitQuery, ValidatedJson, ValidatedQuery, DEFAULT_LIMIT};
