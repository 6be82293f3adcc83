// ABOUTME: Configuration module for the booking service
// ABOUTME: Environment-only configuration, no config files beyond optional .env
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenithFit Studio

/// Environment-based server configuration
pub mod environment;

pub use environment::ServerConfig;
