// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, artifact locations, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stunting Predictor Contributors

//! Environment-based configuration management for production deployment

use crate::constants::{artifacts, env_config};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational
    #[default]
    Info,
    /// Debug output, including raw classifier scores
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Locations of the four prediction artifacts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelPaths {
    /// Classifier weights (JSON)
    pub model: PathBuf,
    /// Feature means (`.npy`)
    pub scaler_mean: PathBuf,
    /// Feature standard deviations (`.npy`)
    pub scaler_std: PathBuf,
    /// Normative table (CSV)
    pub normal_values: PathBuf,
}

impl ModelPaths {
    /// Standard file names inside one directory
    #[must_use]
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            model: dir.join(artifacts::MODEL_FILE),
            scaler_mean: dir.join(artifacts::SCALER_MEAN_FILE),
            scaler_std: dir.join(artifacts::SCALER_STD_FILE),
            normal_values: dir.join(artifacts::NORMAL_VALUES_FILE),
        }
    }

    /// `MODEL_DIR` defaults, with per-artifact overrides
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::from_dir(env_config::model_dir());
        Self {
            model: env_config::model_path().map_or(defaults.model, PathBuf::from),
            scaler_mean: env_config::scaler_mean_path().map_or(defaults.scaler_mean, PathBuf::from),
            scaler_std: env_config::scaler_std_path().map_or(defaults.scaler_std, PathBuf::from),
            normal_values: env_config::normal_values_path()
                .map_or(defaults.normal_values, PathBuf::from),
        }
    }
}

impl Default for ModelPaths {
    fn default() -> Self {
        Self::from_dir(crate::constants::defaults::MODEL_DIR)
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsConfig {
    /// `*` or a comma-separated origin list
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: crate::constants::defaults::CORS_ALLOWED_ORIGINS.into(),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Log level applied to the server's tracing filter
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Artifact locations
    pub model: ModelPaths,
    /// CORS settings
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting configuration is invalid
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            host: env_config::host(),
            http_port: env_config::http_port(),
            log_level: LogLevel::from_str_or_default(&env_config::log_level()),
            environment: Environment::from_str_or_default(&env_config::environment()),
            model: ModelPaths::from_env(),
            cors: CorsConfig {
                allowed_origins: env_config::cors_allowed_origins(),
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the host is empty or the port is zero
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            bail!("HOST cannot be empty");
        }
        if self.http_port == 0 {
            bail!("HTTP_PORT must be a non-zero port");
        }
        Ok(())
    }

    /// `host:port` string for binding the listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Stunting Predictor Configuration:\n\
             - Bind: {}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Model: {}\n\
             - Scaler: {}, {}\n\
             - Normal Values: {}\n\
             - CORS Origins: {}",
            self.bind_address(),
            self.environment,
            self.log_level,
            self.model.model.display(),
            self.model.scaler_mean.display(),
            self.model.scaler_std.display(),
            self.model.normal_values.display(),
            self.cors.allowed_origins,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("nonsense"), LogLevel::Info);
        assert_eq!(LogLevel::Warn.to_string(), "warn");
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("prod"),
            Environment::Production
        );
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(
            Environment::from_str_or_default("staging"),
            Environment::Development
        );
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_model_paths_from_dir() {
        let paths = ModelPaths::from_dir("/srv/model");
        assert_eq!(paths.model, PathBuf::from("/srv/model/stunting_model.json"));
        assert_eq!(paths.scaler_mean, PathBuf::from("/srv/model/scaler_mean.npy"));
        assert_eq!(paths.scaler_std, PathBuf::from("/srv/model/scaler_std.npy"));
        assert_eq!(
            paths.normal_values,
            PathBuf::from("/srv/model/normal_values.csv")
        );
    }

    #[test]
    fn test_config_validation() {
        let mut config = ServerConfig {
            host: "127.0.0.1".into(),
            http_port: 5000,
            log_level: LogLevel::Info,
            environment: Environment::Testing,
            model: ModelPaths::default(),
            cors: CorsConfig::default(),
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_address(), "127.0.0.1:5000");

        config.http_port = 0;
        assert!(config.validate().is_err());
    }
}
