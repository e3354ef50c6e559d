// ABOUTME: Growth intelligence algorithms for the stunting prediction pipeline
// ABOUTME: Normalization, inference, confidence, normative lookup, explanation, guidance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stunting Predictor Contributors

#![deny(unsafe_code)]

//! # Stunting Intelligence
//!
//! The pure parts of the prediction pipeline. Nothing here performs I/O after
//! load time: every artifact is read once into an immutable value, and every
//! per-request operation is a synchronous function of its inputs.

/// Errors raised while loading artifacts or running inference
pub mod errors;

/// Feature encoding and standardization
pub mod features;

/// Classifier trait and the dense network backend
pub mod classifier;

/// Damped confidence percentage
pub mod confidence;

/// Population-normal height/weight reference table
pub mod normative;

/// Percentage deviations and their explanations
pub mod explanation;

/// Nutrition guidance keyed by growth status
pub mod recommendation;

pub use classifier::{Activation, ClassScores, Classifier, DenseLayer, DenseNetwork};
pub use confidence::scale_confidence;
pub use errors::{ClassifierError, ResourceError};
pub use explanation::{compare_with_normative, Dimension};
pub use features::{FeatureVector, NormalizationStats, StandardizedFeatures};
pub use normative::{NormativeMatch, NormativeRow, NormativeTable, NormativeValues};
pub use recommendation::RecommendationCatalog;
