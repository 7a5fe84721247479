//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Default bearer token lifetime: one day, matching the token format the
/// API documents to its clients.
const DEFAULT_JWT_LIFETIME_SECS: u64 = 86_400;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (PostgreSQL)
    pub database_url: String,

    /// Secret used to sign and verify bearer tokens
    pub jwt_secret: String,

    /// Lifetime of issued bearer tokens, in seconds
    pub jwt_lifetime_secs: u64,

    /// Runtime configuration
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL is required"))?,

            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET is required"))?,

            jwt_lifetime_secs: env::var("JWT_LIFETIME_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_JWT_LIFETIME_SECS),

            port: env::var("PORT")
                .unwrap_or_else(|_| "4080".to_string())
                .parse()
                .unwrap_or(4080),
        };

        Ok(config)
    }
}
