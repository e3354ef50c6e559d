// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Reports per-artifact load status, liveness, and readiness for load balancers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stunting Predictor Contributors

//! Health check routes for service monitoring
//!
//! `/` reports which artifacts loaded, `/health` is a liveness check, and
//! `/ready` answers 503 until the model context is usable.

use crate::resources::{PredictionResources, ResourceStatus};
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use stunting_core::constants::messages;

/// Root status payload
#[derive(Debug, Serialize)]
pub struct ApiStatus {
    /// Always "API is running" when the process answers
    pub status: &'static str,
    /// Per-artifact load flags and errors
    #[serde(flatten)]
    pub resources: ResourceStatus,
}

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<PredictionResources>) -> Router {
        async fn status_handler(
            State(resources): State<Arc<PredictionResources>>,
        ) -> Json<ApiStatus> {
            Json(ApiStatus {
                status: messages::API_RUNNING,
                resources: resources.status().clone(),
            })
        }

        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "healthy",
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        async fn ready_handler(
            State(resources): State<Arc<PredictionResources>>,
        ) -> (StatusCode, Json<serde_json::Value>) {
            let (code, status) = if resources.is_ready() {
                (StatusCode::OK, "ready")
            } else {
                (StatusCode::SERVICE_UNAVAILABLE, "not_ready")
            };
            (
                code,
                Json(serde_json::json!({
                    "status": status,
                    "timestamp": chrono::Utc::now().to_rfc3339()
                })),
            )
        }

        Router::new()
            .route("/", get(status_handler))
            .route("/health", get(health_handler))
            .route("/ready", get(ready_handler))
            .with_state(resources)
    }
}
