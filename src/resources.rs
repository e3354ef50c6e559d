// ABOUTME: Process-wide model context: classifier, normalization stats, normative table, catalog
// ABOUTME: Loaded once at startup; per-artifact failures are recorded and reported, never retried
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stunting Predictor Contributors

//! # Prediction Resources
//!
//! Every artifact is read exactly once when the process starts. A failure is
//! kept in [`ResourceStatus`] for the lifetime of the process so that the
//! status endpoint can report it and every prediction fails the same way until
//! the process is restarted with corrected artifacts.

use crate::config::ModelPaths;
use crate::logging::PredictionLogger;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use stunting_core::constants::messages;
use stunting_core::errors::{AppError, AppResult};
use stunting_intelligence::{
    Classifier, DenseNetwork, NormalizationStats, NormativeTable, RecommendationCatalog,
    ResourceError,
};
use tracing::info;

/// Everything a prediction reads; immutable and shareable across threads
#[derive(Clone)]
pub struct ModelContext {
    classifier: Arc<dyn Classifier>,
    stats: NormalizationStats,
    table: NormativeTable,
    catalog: RecommendationCatalog,
}

impl ModelContext {
    /// Assemble a context with the standard recommendation catalog
    #[must_use]
    pub fn new(
        classifier: Arc<dyn Classifier>,
        stats: NormalizationStats,
        table: NormativeTable,
    ) -> Self {
        Self {
            classifier,
            stats,
            table,
            catalog: RecommendationCatalog::standard(),
        }
    }

    /// Frozen classifier
    #[must_use]
    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    /// Feature normalization statistics
    #[must_use]
    pub const fn stats(&self) -> &NormalizationStats {
        &self.stats
    }

    /// Normative height/weight table
    #[must_use]
    pub const fn table(&self) -> &NormativeTable {
        &self.table
    }

    /// Nutrition guidance catalog
    #[must_use]
    pub const fn catalog(&self) -> &RecommendationCatalog {
        &self.catalog
    }
}

impl std::fmt::Debug for ModelContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelContext")
            .field("classifier", &self.classifier.describe())
            .field("stats", &self.stats)
            .field("table_rows", &self.table.len())
            .finish_non_exhaustive()
    }
}

/// Load outcome of each artifact, as reported by the status endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceStatus {
    /// Classifier loaded
    pub model_loaded: bool,
    /// Both normalization arrays loaded
    pub scaler_loaded: bool,
    /// Normative table loaded
    pub normal_values_loaded: bool,
    /// Classifier load error, `None` when loaded
    pub model_error: Option<String>,
    /// Normalization load error, `None` when loaded
    pub scaler_error: Option<String>,
    /// Normative table load error, `None` when loaded
    pub normal_values_error: Option<String>,
}

impl ResourceStatus {
    /// Whether predictions can be served
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.model_loaded && self.scaler_loaded && self.normal_values_loaded
    }

    const fn all_loaded() -> Self {
        Self {
            model_loaded: true,
            scaler_loaded: true,
            normal_values_loaded: true,
            model_error: None,
            scaler_error: None,
            normal_values_error: None,
        }
    }
}

/// Model context plus the load status that produced it
#[derive(Debug, Clone)]
pub struct PredictionResources {
    context: Option<ModelContext>,
    status: ResourceStatus,
}

impl PredictionResources {
    /// Load every artifact, recording each failure independently.
    ///
    /// Never fails: an unusable context is reported through [`Self::status`]
    /// and by every later call to [`Self::context`].
    #[must_use]
    pub fn load(paths: &ModelPaths) -> Self {
        let started = Instant::now();

        let classifier = record(
            "model",
            &paths.model,
            DenseNetwork::from_json_file(&paths.model),
        );
        let stats = record(
            "scaler",
            &paths.scaler_mean,
            NormalizationStats::from_npy_files(&paths.scaler_mean, &paths.scaler_std),
        );
        let table = record(
            "normal_values",
            &paths.normal_values,
            NormativeTable::from_csv_path(&paths.normal_values),
        );

        let status = ResourceStatus {
            model_loaded: classifier.is_ok(),
            scaler_loaded: stats.is_ok(),
            normal_values_loaded: table.is_ok(),
            model_error: classifier.as_ref().err().cloned(),
            scaler_error: stats.as_ref().err().cloned(),
            normal_values_error: table.as_ref().err().cloned(),
        };

        let context = match (classifier, stats, table) {
            (Ok(classifier), Ok(stats), Ok(table)) => {
                Some(ModelContext::new(Arc::new(classifier), stats, table))
            }
            _ => None,
        };

        info!(
            ready = status.is_ready(),
            duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Prediction resources initialized"
        );

        Self { context, status }
    }

    /// Wrap an already-assembled context
    #[must_use]
    pub fn from_context(context: ModelContext) -> Self {
        Self {
            context: Some(context),
            status: ResourceStatus::all_loaded(),
        }
    }

    /// Whether all artifacts loaded
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.context.is_some()
    }

    /// Per-artifact load status
    #[must_use]
    pub const fn status(&self) -> &ResourceStatus {
        &self.status
    }

    /// The usable context.
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` if any artifact failed to load.
    pub fn context(&self) -> AppResult<&ModelContext> {
        self.context
            .as_ref()
            .ok_or_else(|| AppError::resource_unavailable(messages::RESOURCES_NOT_LOADED))
    }
}

fn record<T>(
    artifact: &str,
    path: &Path,
    result: Result<T, ResourceError>,
) -> Result<T, String> {
    match result {
        Ok(value) => {
            PredictionLogger::log_artifact_load(artifact, path, None);
            Ok(value)
        }
        Err(error) => {
            let message = error.to_string();
            PredictionLogger::log_artifact_load(artifact, path, Some(&message));
            Err(message)
        }
    }
}
