// ABOUTME: Configuration module root for environment-driven server settings
// ABOUTME: Exposes ServerConfig, ModelPaths and the typed environment enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stunting Predictor Contributors

/// Environment variable parsing and validation
pub mod environment;

pub use environment::{CorsConfig, Environment, LogLevel, ModelPaths, ServerConfig};
