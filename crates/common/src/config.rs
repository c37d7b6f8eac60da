//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables. Database settings
//! are optional: when they are missing the server still starts and reports the
//! document store as unavailable.

use serde::{Deserialize, Serialize};
use std::env;

/// Port used when `PORT` is unset or unparsable
pub const DEFAULT_PORT: u16 = 8000;

const DEFAULT_RUST_LOG: &str = "chatline=debug,tower_http=info";

/// Document store connection settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection string (`mongodb://...`, `mongodb+srv://...` or `memory://`)
    pub url: Option<String>,

    /// Database name inside the MongoDB deployment
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self {
            database: DatabaseConfig {
                url: non_empty_var("DATABASE_URL"),
                name: non_empty_var("DATABASE_NAME"),
            },
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_RUST_LOG.to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
