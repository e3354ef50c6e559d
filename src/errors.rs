// ABOUTME: Re-exports the unified error system from stunting-core
// ABOUTME: Keeps crate::errors paths stable for binaries and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stunting Predictor Contributors

//! Unified error handling
//!
//! See [`stunting_core::errors`] for the error codes and their HTTP mapping.

pub use stunting_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
pub use stunting_intelligence::errors::{ClassifierError, ResourceError};
