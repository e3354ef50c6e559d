// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Writes model, scaler, and normative table fixtures into a temporary directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stunting Predictor Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `stunting_predictor`
//!
//! The fixture network is a single identity layer followed by softmax, and the
//! fixture scaler is mean 0 / std 1, so the predicted class is simply the
//! index of the largest raw input: height dominates for any realistic child,
//! which makes every realistic prediction "Normal" with confidence 90.

use ndarray::Array1;
use serde_json::json;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Once};
use stunting_intelligence::{
    ClassScores, Classifier, ClassifierError, NormalizationStats, NormativeTable,
    StandardizedFeatures,
};
use stunting_predictor::config::ModelPaths;
use stunting_predictor::resources::{ModelContext, PredictionResources};
use tempfile::TempDir;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Reference rows: two male ages around 25 months and two female ages
pub const NORMAL_VALUES_CSV: &str = "Umur (bulan),Jenis Kelamin,Tinggi Badan (cm),Berat Badan (kg)\n\
24,0,87.0,12.5\n\
26,0,88.8,12.9\n\
3,1,60.0,6.0\n\
24,1,85.7,11.9\n";

/// Reference rows for boys only
pub const MALE_ONLY_CSV: &str = "Umur (bulan),Jenis Kelamin,Tinggi Badan (cm),Berat Badan (kg)\n\
24,0,87.0,12.5\n";

/// Artifacts written into a temporary model directory
pub struct ModelFixture {
    pub dir: TempDir,
    pub paths: ModelPaths,
}

impl ModelFixture {
    /// All four artifacts with the standard reference table
    pub fn new() -> Self {
        Self::with_table(NORMAL_VALUES_CSV)
    }

    /// All four artifacts with a custom reference table
    pub fn with_table(csv: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let paths = ModelPaths::from_dir(dir.path());

        write_identity_network(&paths.model);
        write_vector(&paths.scaler_mean, &[0.0, 0.0, 0.0, 0.0]);
        write_vector(&paths.scaler_std, &[1.0, 1.0, 1.0, 1.0]);
        fs::write(&paths.normal_values, csv).expect("write normal values");

        Self { dir, paths }
    }

    /// Load resources from the fixture directory
    pub fn load(&self) -> PredictionResources {
        init_test_logging();
        PredictionResources::load(&self.paths)
    }
}

impl Default for ModelFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn identity_kernel() -> Vec<Vec<f64>> {
    (0..4)
        .map(|i| (0..4).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
        .collect()
}

/// Identity layer followed by softmax, exported in the JSON weight format
pub fn write_identity_network(path: &Path) {
    let network = json!({
        "layers": [
            { "kernel": identity_kernel(), "bias": [0.0, 0.0, 0.0, 0.0], "activation": "linear" },
            { "kernel": identity_kernel(), "bias": [0.0, 0.0, 0.0, 0.0], "activation": "softmax" }
        ]
    });
    fs::write(path, serde_json::to_vec_pretty(&network).unwrap()).expect("write model");
}

/// Write a float64 `.npy` vector
pub fn write_vector(path: &Path, values: &[f64]) {
    ndarray_npy::write_npy(path, &Array1::from(values.to_vec())).expect("write npy");
}

/// Classifier that ignores its input and returns fixed scores
pub struct FixedClassifier(pub [f64; 4]);

impl Classifier for FixedClassifier {
    fn score(&self, _features: &StandardizedFeatures) -> Result<ClassScores, ClassifierError> {
        ClassScores::from_slice(&self.0)
    }

    fn describe(&self) -> String {
        "fixed scores".into()
    }
}

/// Resources backed by a fixed-score classifier and the standard reference table
pub fn fixed_resources(scores: [f64; 4]) -> PredictionResources {
    init_test_logging();
    let stats = NormalizationStats::new(&[0.0; 4], &[1.0; 4]).unwrap();
    let table = NormativeTable::from_reader(NORMAL_VALUES_CSV.as_bytes()).unwrap();
    PredictionResources::from_context(ModelContext::new(
        Arc::new(FixedClassifier(scores)),
        stats,
        table,
    ))
}
