// ABOUTME: Error types for artifact loading and classifier inference
// ABOUTME: Converted into AppError at the pipeline boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stunting Predictor Contributors

//! Artifact and inference error types.

use std::io;
use std::path::PathBuf;
use stunting_core::errors::AppError;
use thiserror::Error;

/// Failure to load the model, normalization stats, or reference table
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Artifact path does not exist
    #[error("File tidak ditemukan: {}", path.display())]
    NotFound {
        /// Missing path
        path: PathBuf,
    },

    /// Artifact exists but could not be opened
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Artifact path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// `.npy` array could not be decoded
    #[error("Failed to decode array {}: {source}", path.display())]
    Npy {
        /// Artifact path
        path: PathBuf,
        /// Underlying decode error
        #[source]
        source: ndarray_npy::ReadNpyError,
    },

    /// Reference table CSV could not be parsed
    #[error("Failed to parse reference table: {0}")]
    Csv(#[from] csv::Error),

    /// Model JSON could not be parsed
    #[error("Failed to parse model {}: {source}", path.display())]
    Json {
        /// Artifact path
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// Reference table has no rows
    #[error("File normal_values.csv kosong atau tidak valid.")]
    EmptyTable,

    /// Artifact parsed but violates a shape or value invariant
    #[error("Invalid artifact: {0}")]
    Invalid(String),
}

/// Failure while scoring a feature vector
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// Layer widths do not line up with the input
    #[error("Classifier expected {expected} inputs, got {actual}")]
    DimensionMismatch {
        /// Width the layer expects
        expected: usize,
        /// Width it received
        actual: usize,
    },

    /// The network produced NaN or infinite scores
    #[error("Classifier produced non-finite scores")]
    NonFiniteOutput,
}

impl From<ResourceError> for AppError {
    fn from(error: ResourceError) -> Self {
        Self::resource_unavailable(error.to_string()).with_source(error)
    }
}

impl From<ClassifierError> for AppError {
    fn from(error: ClassifierError) -> Self {
        Self::internal(error.to_string()).with_source(error)
    }
}
