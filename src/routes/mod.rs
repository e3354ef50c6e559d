// ABOUTME: Route module organization for the stunting prediction HTTP endpoints
// ABOUTME: Assembles status, health, and prediction routes with CORS and request tracing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stunting Predictor Contributors

//! Route module for the prediction service
//!
//! Each domain module contains only route definitions and thin handlers that
//! delegate to the prediction pipeline.

/// Health check and artifact status routes
pub mod health;
/// Prediction routes
pub mod predict;

pub use health::HealthRoutes;
pub use predict::{PredictRequest, PredictRoutes};

use crate::config::CorsConfig;
use crate::middleware::{create_request_span, setup_cors};
use crate::resources::PredictionResources;
use axum::{body::Body, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the complete application router
pub fn router(resources: Arc<PredictionResources>, cors: &CorsConfig) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(PredictRoutes::routes(resources))
        .layer(TraceLayer::new_for_http().make_span_with(create_request_span::<Body>))
        .layer(setup_cors(cors))
}
