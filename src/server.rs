// ABOUTME: Server assembly: shared resources and the axum serve loop
// ABOUTME: Binds the listener, wires the router and handles graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenithFit Studio

//! Server assembly.

use std::sync::Arc;

use tracing::info;

use crate::config::ServerConfig;
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::routes;

/// Shared resources handed to every route handler
pub struct ServerResources {
    /// Database manager (catalog, ledger, engine, analytics)
    pub database: Database,
    /// Loaded server configuration
    pub config: ServerConfig,
}

impl ServerResources {
    /// Bundle the database and configuration for handler state
    #[must_use]
    pub fn new(database: Database, config: ServerConfig) -> Self {
        Self { database, config }
    }
}

/// The booking API server
pub struct BookingApiServer {
    resources: Arc<ServerResources>,
}

impl BookingApiServer {
    /// Create a server over the shared resources
    #[must_use]
    pub fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Bind the listener and serve until shutdown
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind or the server loop fails.
    pub async fn run(self) -> AppResult<()> {
        let addr = format!("0.0.0.0:{}", self.resources.config.http_port);
        let app = routes::router(self.resources);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

        info!("HTTP server listening on {addr}");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::internal(format!("HTTP server error: {e}")))
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}
