// ABOUTME: Pipeline orchestrator turning four raw inputs into a complete prediction or one error
// ABOUTME: validate -> standardize -> classify -> confidence -> recommendation + normative comparison
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stunting Predictor Contributors

//! # Prediction Pipeline
//!
//! Inputs are validated before the model context is touched, so a malformed
//! request is reported as a validation error even when the artifacts are
//! unavailable. Callers receive either a complete [`PredictionResult`] or a
//! single [`AppError`]; no partial result is ever produced.

use crate::logging::PredictionLogger;
use crate::resources::{ModelContext, PredictionResources};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use stunting_core::errors::{AppResult, ErrorResponse};
use stunting_core::models::{ChildMeasurements, PredictionResult};
use stunting_intelligence::{compare_with_normative, scale_confidence, FeatureVector};
use tracing::debug;

/// Run one prediction from raw inputs.
///
/// # Errors
///
/// Returns a validation error for the first invalid input (age, sex, height,
/// weight in that order), `ResourceUnavailable` if the model context did not
/// load, or an internal error if the classifier misbehaves.
pub fn predict(
    resources: &PredictionResources,
    age: f64,
    sex: &str,
    height: f64,
    weight: f64,
) -> AppResult<PredictionResult> {
    let started = Instant::now();

    let result = ChildMeasurements::validate(age, sex, height, weight).and_then(|child| {
        let context = resources.context()?;
        predict_with_context(context, &child)
    });

    match &result {
        Ok(prediction) => PredictionLogger::log_prediction(
            prediction.status,
            prediction.confidence,
            prediction.additional_info.is_found(),
            u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
        ),
        Err(error) => PredictionLogger::log_prediction_failure(error),
    }

    result
}

/// Run the pipeline on already-validated measurements.
///
/// # Errors
///
/// Returns an internal error if the classifier cannot produce four finite scores.
pub fn predict_with_context(
    context: &ModelContext,
    child: &ChildMeasurements,
) -> AppResult<PredictionResult> {
    let features = FeatureVector::from_measurements(child).standardize(context.stats());
    let scores = context.classifier().score(&features)?;
    debug!(scores = ?scores.values(), "Classifier scores");

    let (status, raw_score) = scores.top();
    let confidence = scale_confidence(raw_score);

    let nutrition_recommendation = context.catalog().recommend(status, child.age_months);

    let normal = context
        .table()
        .lookup(child.age_months, child.sex)
        .map(|found| found.values);
    let additional_info = compare_with_normative(normal, child.height_cm, child.weight_kg);

    Ok(PredictionResult {
        status,
        confidence,
        nutrition_recommendation,
        additional_info,
    })
}

/// Serialized outcome: the full result, or `{"error": message}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictionOutcome {
    /// Prediction succeeded
    Success(Box<PredictionResult>),
    /// Prediction failed
    Failure(ErrorResponse),
}

impl PredictionOutcome {
    /// Whether the prediction succeeded
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl From<AppResult<PredictionResult>> for PredictionOutcome {
    fn from(result: AppResult<PredictionResult>) -> Self {
        match result {
            Ok(prediction) => Self::Success(Box::new(prediction)),
            Err(error) => Self::Failure(ErrorResponse::from(&error)),
        }
    }
}

/// [`predict`] rendered as the caller-facing outcome shape
#[must_use]
pub fn predict_outcome(
    resources: &PredictionResources,
    age: f64,
    sex: &str,
    height: f64,
    weight: f64,
) -> PredictionOutcome {
    predict(resources, age, sex, height, weight).into()
}
