// ABOUTME: Core data models for child measurements, growth classes, and prediction results
// ABOUTME: Shared between the algorithm crate, the server routes, and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stunting Predictor Contributors

//! Domain models
//!
//! - `child`: validated raw inputs (`Sex`, `ChildMeasurements`)
//! - `growth`: the closed set of growth status labels in classifier order
//! - `prediction`: the records returned to callers

/// Child measurement inputs and the sex enum
pub mod child;
/// Growth status class labels
pub mod growth;
/// Prediction result records
pub mod prediction;

pub use child::{ChildMeasurements, Sex};
pub use growth::ClassLabel;
pub use prediction::{
    AdditionalInfo, ComparisonInfo, NotFoundInfo, PredictionResult, RecommendationRecord,
};
