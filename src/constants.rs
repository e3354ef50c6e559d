// ABOUTME: Service-level constants: environment variable names, defaults, and artifact file names
// ABOUTME: Domain constants (labels, thresholds, messages) live in stunting_core::constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stunting Predictor Contributors

//! Constants module

use std::env;

pub use stunting_core::constants::{class_labels, messages, sex_labels, thresholds};

/// Network defaults
pub mod ports {
    /// Default HTTP port, kept from the first deployment of the service
    pub const DEFAULT_HTTP_PORT: u16 = 5000;
}

/// Default values for optional settings
pub mod defaults {
    /// Bind address
    pub const HOST: &str = "0.0.0.0";
    /// Directory holding the model artifacts
    pub const MODEL_DIR: &str = "model";
    /// Allow any origin
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

/// Artifact file names inside the model directory
pub mod artifacts {
    /// Exported classifier weights
    pub const MODEL_FILE: &str = "stunting_model.json";
    /// Per-feature means
    pub const SCALER_MEAN_FILE: &str = "scaler_mean.npy";
    /// Per-feature standard deviations
    pub const SCALER_STD_FILE: &str = "scaler_std.npy";
    /// Normative height/weight table
    pub const NORMAL_VALUES_FILE: &str = "normal_values.csv";
}

/// Service names for structured logging
pub mod service_names {
    /// HTTP server binary
    pub const STUNTING_SERVER: &str = "stunting-server";
    /// Command-line tool
    pub const STUNTING_CLI: &str = "stunting-cli";
}

/// Environment-based configuration accessors
pub mod env_config {
    use super::{defaults, env, ports};

    /// Get `HTTP` server port from `HTTP_PORT`, then `PORT`, else the default
    #[must_use]
    pub fn http_port() -> u16 {
        env::var("HTTP_PORT")
            .or_else(|_| env::var("PORT"))
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(ports::DEFAULT_HTTP_PORT)
    }

    /// Get bind host from environment or default
    #[must_use]
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| defaults::HOST.into())
    }

    /// Get model artifact directory from environment or default
    #[must_use]
    pub fn model_dir() -> String {
        env::var("MODEL_DIR").unwrap_or_else(|_| defaults::MODEL_DIR.into())
    }

    /// Optional classifier path override
    #[must_use]
    pub fn model_path() -> Option<String> {
        env::var("MODEL_PATH").ok()
    }

    /// Optional scaler mean path override
    #[must_use]
    pub fn scaler_mean_path() -> Option<String> {
        env::var("SCALER_MEAN_PATH").ok()
    }

    /// Optional scaler std path override
    #[must_use]
    pub fn scaler_std_path() -> Option<String> {
        env::var("SCALER_STD_PATH").ok()
    }

    /// Optional normative table path override
    #[must_use]
    pub fn normal_values_path() -> Option<String> {
        env::var("NORMAL_VALUES_PATH").ok()
    }

    /// Get allowed CORS origins from environment or default
    #[must_use]
    pub fn cors_allowed_origins() -> String {
        env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| defaults::CORS_ALLOWED_ORIGINS.into())
    }

    /// Get deployment environment name
    #[must_use]
    pub fn environment() -> String {
        env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into())
    }

    /// Get log level from environment or default
    #[must_use]
    pub fn log_level() -> String {
        env::var("RUST_LOG").unwrap_or_else(|_| "info".into())
    }
}
