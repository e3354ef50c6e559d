// ABOUTME: Prediction route: JSON body in, PredictionResult or {"error": message} out
// ABOUTME: Rejects missing, null, and malformed fields before the pipeline runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stunting Predictor Contributors

//! Prediction routes
//!
//! The handler only translates the request body into the four raw inputs; all
//! domain validation happens in [`crate::prediction::predict`].

use crate::prediction;
use crate::resources::PredictionResources;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde_json::{Map, Value};
use std::sync::Arc;
use stunting_core::constants::messages;
use stunting_core::errors::{AppError, AppResult};
use stunting_core::models::PredictionResult;

/// Raw prediction inputs extracted from a request body
#[derive(Debug, Clone, PartialEq)]
pub struct PredictRequest {
    /// Age in months
    pub age: f64,
    /// Sex label
    pub sex: String,
    /// Height (cm)
    pub height: f64,
    /// Weight (kg)
    pub weight: f64,
}

impl PredictRequest {
    /// Extract inputs from a JSON body.
    ///
    /// Numbers may be JSON numbers or numeric strings. A value of any other
    /// type is passed on as NaN (or an empty sex label) so that the pipeline
    /// reports it with the message for that field.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` if any field is absent or null, and
    /// `InvalidFormat` if the body is not a JSON object.
    pub fn from_json(body: &Value) -> AppResult<Self> {
        let Value::Object(fields) = body else {
            return Err(AppError::invalid_format("Request body must be a JSON object"));
        };

        let sex = required(fields, "sex")?;
        let age = required(fields, "age")?;
        let height = required(fields, "height")?;
        let weight = required(fields, "weight")?;

        Ok(Self {
            age: numeric(age),
            sex: sex.as_str().unwrap_or_default().to_owned(),
            height: numeric(height),
            weight: numeric(weight),
        })
    }
}

fn required<'a>(fields: &'a Map<String, Value>, name: &str) -> AppResult<&'a Value> {
    match fields.get(name) {
        None | Some(Value::Null) => Err(AppError::missing_field(messages::MISSING_FIELDS)),
        Some(value) => Ok(value),
    }
}

fn numeric(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::String(text) => text.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

/// Prediction routes implementation
pub struct PredictRoutes;

impl PredictRoutes {
    /// Create the prediction route
    pub fn routes(resources: Arc<PredictionResources>) -> Router {
        Router::new()
            .route("/predict", post(Self::handle_predict))
            .with_state(resources)
    }

    async fn handle_predict(
        State(resources): State<Arc<PredictionResources>>,
        payload: Result<Json<Value>, JsonRejection>,
    ) -> Result<Json<PredictionResult>, AppError> {
        let Json(body) =
            payload.map_err(|rejection| AppError::invalid_format(rejection.body_text()))?;
        let request = PredictRequest::from_json(&body)?;

        let result = prediction::predict(
            &resources,
            request.age,
            &request.sex,
            request.height,
            request.weight,
        )?;
        Ok(Json(result))
    }
}
