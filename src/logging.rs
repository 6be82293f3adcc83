// ABOUTME: Logging configuration and structured logging setup for observability
// ABOUTME: Configures log levels and output formats on top of tracing-subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenithFit Studio

//! Structured logging configuration.

use anyhow::{anyhow, Result};
use std::env;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON format for production logging
    Json,
    /// Full human-readable format for development
    Full,
    /// Compact format for space-constrained environments
    Compact,
}

impl LogFormat {
    fn from_env_str(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Full,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Full,
        }
    }
}

impl LoggingConfig {
    /// Build a logging configuration from `RUST_LOG` and `LOG_FORMAT`
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            format: LogFormat::from_env_str(&env::var("LOG_FORMAT").unwrap_or_default()),
        }
    }

    /// Replace the level with one resolved elsewhere (server config, CLI)
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Install the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if the level directive is malformed or a global
    /// subscriber is already installed.
    pub fn init(self) -> Result<()> {
        let filter = EnvFilter::try_new(&self.level)
            .map_err(|e| anyhow!("Invalid log level '{}': {e}", self.level))?;

        let registry = tracing_subscriber::registry().with(filter);

        let result = match self.format {
            LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
            LogFormat::Compact => registry.with(fmt::layer().compact()).try_init(),
            LogFormat::Full => registry.with(fmt::layer()).try_init(),
        };

        result.map_err(|e| anyhow!("Failed to initialize logging: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parsing_defaults_to_full() {
        assert_eq!(LogFormat::from_env_str("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_env_str("COMPACT"), LogFormat::Compact);
        assert_eq!(LogFormat::from_env_str(""), LogFormat::Full);
        assert_eq!(LogFormat::from_env_str("pretty"), LogFormat::Full);
    }

    #[test]
    fn level_override_replaces_the_env_level() {
        let config = LoggingConfig::default().with_level("warn");
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, LogFormat::Full);
    }
}
