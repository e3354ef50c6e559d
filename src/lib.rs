// ABOUTME: Main library entry point for the child stunting prediction service
// ABOUTME: Wires configuration, logging, model resources, the pipeline, and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stunting Predictor Contributors

#![deny(unsafe_code)]

//! # Stunting Predictor
//!
//! Classifies a child's growth status (Severely Stunted, Stunted, Normal,
//! Tall) from age, sex, height and weight, then explains the result against
//! population-normal values and attaches nutrition guidance.
//!
//! ## Architecture
//!
//! - **stunting-core**: error types, domain models, labels and messages
//! - **stunting-intelligence**: normalization, classifier, confidence,
//!   normative lookup, explanations, recommendation catalog
//! - **this crate**: configuration, logging, the loaded model context, the
//!   pipeline orchestrator, and the HTTP boundary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use stunting_predictor::config::ModelPaths;
//! use stunting_predictor::prediction::predict;
//! use stunting_predictor::resources::PredictionResources;
//!
//! let resources = PredictionResources::load(&ModelPaths::from_dir("model"));
//! match predict(&resources, 24.0, "Laki-laki", 83.0, 10.5) {
//!     Ok(result) => println!("{} ({}%)", result.status, result.confidence),
//!     Err(error) => eprintln!("{}", error.message),
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Service constants and environment accessors
pub mod constants;

/// Unified error handling re-exports
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request tracing)
pub mod middleware;

/// Pipeline orchestrator
pub mod prediction;

/// Load-once model context and readiness status
pub mod resources;

/// HTTP routes
pub mod routes;

pub use prediction::{predict, predict_outcome, PredictionOutcome};
pub use resources::{ModelContext, PredictionResources, ResourceStatus};
pub use stunting_core::models::{ChildMeasurements, ClassLabel, PredictionResult, Sex};
