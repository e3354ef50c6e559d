// ABOUTME: Core types and constants for the stunting prediction service
// ABOUTME: Foundation crate with error handling, domain models, and user-facing constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stunting Predictor Contributors

#![deny(unsafe_code)]

//! # Stunting Core
//!
//! Foundation crate providing shared types and constants for the child growth
//! status prediction service. This crate is designed to change infrequently,
//! so the algorithm crate and the server can both depend on it cheaply.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the `{ "error": .. }` payload
//! - **models**: Child measurements, growth class labels, and prediction result records
//! - **constants**: Label names, user-facing messages, and numeric thresholds

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Domain models (`Sex`, `ChildMeasurements`, `ClassLabel`, `PredictionResult`)
pub mod models;

/// Application constants organized by domain
pub mod constants;
