// ABOUTME: Configuration management module for centralized engine settings
// ABOUTME: Environment-based runtime configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen Intelligence

/// Environment-based configuration management
pub mod environment;

pub use environment::{LogLevel, ServerConfig};
