// ABOUTME: Environment-based configuration loading for the booking server
// ABOUTME: Reads HTTP port, database URL and log level with sensible defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenithFit Studio

//! Server configuration loaded from environment variables.
//!
//! An optional `.env` file is loaded first; every setting has a default so the
//! server starts with no configuration at all.

use tracing::debug;

use crate::errors::{AppError, AppResult};

/// Default HTTP listen port
const DEFAULT_HTTP_PORT: &str = "8081";
/// Default SQLite database location
const DEFAULT_DATABASE_URL: &str = "sqlite:./data/zenith.db";
/// Default log level when RUST_LOG is unset
const DEFAULT_LOG_LEVEL: &str = "info";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// SQLite database URL
    pub database_url: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `AppError::ConfigError` if a variable is present but malformed.
    pub fn from_env() -> AppResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {e}");
        }

        let http_port = env_var_or("HTTP_PORT", DEFAULT_HTTP_PORT)
            .parse()
            .map_err(|e| AppError::config(format!("Invalid HTTP_PORT value: {e}")))?;

        Ok(Self {
            http_port,
            database_url: env_var_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            log_level: env_var_or("RUST_LOG", DEFAULT_LOG_LEVEL),
        })
    }

    /// Get a summary of the configuration for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "http_port={} database_url={} log_level={}",
            self.http_port, self.database_url, self.log_level
        )
    }
}

fn env_var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_owned())
}
