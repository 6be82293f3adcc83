// ABOUTME: Server binary for the ZenithFit booking API
// ABOUTME: Loads configuration, initializes logging and the database, then serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenithFit Studio

//! # ZenithFit Booking API Server Binary
//!
//! Starts the booking API: schema initialization runs as part of database
//! startup, then the HTTP boundary serves until shutdown.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use zenith_booking::{
    config::ServerConfig,
    database::Database,
    logging::LoggingConfig,
    server::{BookingApiServer, ServerResources},
};

#[derive(Parser)]
#[command(name = "zenith-booking-server")]
#[command(about = "ZenithFit Studio booking API - fitness class scheduling and slot booking")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }

    LoggingConfig::from_env()
        .with_level(config.log_level.clone())
        .init()?;

    info!("Starting ZenithFit booking API");
    info!("{}", config.summary());

    let database = Database::new(&config.database_url).await?;
    info!("Database initialized, schema ready");

    let resources = Arc::new(ServerResources::new(database, config));
    BookingApiServer::new(resources).run().await?;

    Ok(())
}
