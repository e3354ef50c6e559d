// ABOUTME: Feature encoding and z-score standardization for classifier input
// ABOUTME: Fixed column order [age, sex_code, height, weight] matching the scaler arrays
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stunting Predictor Contributors

//! Feature Normalizer
//!
//! The classifier was trained on standardized features, so every input vector is
//! shifted and scaled by the per-column mean and standard deviation stored next
//! to the model. Column order is load-bearing and must match the stats arrays.

use crate::errors::ResourceError;
use ndarray::{Array1, ArrayD};
use ndarray_npy::{ReadNpyError, ReadNpyExt};
use std::fs::File;
use std::path::Path;
use stunting_core::constants::thresholds::FEATURE_COUNT;
use stunting_core::models::ChildMeasurements;
use tracing::debug;

/// Per-feature mean and standard deviation, immutable after load
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizationStats {
    mean: Array1<f64>,
    std: Array1<f64>,
}

impl NormalizationStats {
    /// Build stats from mean and std columns.
    ///
    /// # Errors
    ///
    /// Returns an error if either slice is not of length 4, any value is not
    /// finite, or any standard deviation is zero.
    pub fn new(mean: &[f64], std: &[f64]) -> Result<Self, ResourceError> {
        let mean = to_feature_array(mean, "mean")?;
        let std = to_feature_array(std, "std")?;

        if let Some(index) = std.iter().position(|s| *s == 0.0) {
            return Err(ResourceError::Invalid(format!(
                "scaler std for feature {index} is zero"
            )));
        }

        Ok(Self {
            mean: Array1::from(mean.to_vec()),
            std: Array1::from(std.to_vec()),
        })
    }

    /// Load stats from the two `.npy` arrays saved alongside the model.
    ///
    /// Accepts float64 or float32 arrays of any shape holding exactly four values.
    ///
    /// # Errors
    ///
    /// Returns an error if either file is missing, undecodable, or invalid.
    pub fn from_npy_files(mean_path: &Path, std_path: &Path) -> Result<Self, ResourceError> {
        let mean = read_npy_vector(mean_path)?;
        let std = read_npy_vector(std_path)?;
        debug!(?mean, ?std, "Loaded normalization stats");
        Self::new(&mean, &std)
    }

    /// Per-feature means
    #[must_use]
    pub const fn mean(&self) -> &Array1<f64> {
        &self.mean
    }

    /// Per-feature standard deviations
    #[must_use]
    pub const fn std(&self) -> &Array1<f64> {
        &self.std
    }
}

fn to_feature_array(values: &[f64], name: &str) -> Result<[f64; FEATURE_COUNT], ResourceError> {
    let array: [f64; FEATURE_COUNT] = values.try_into().map_err(|_| {
        ResourceError::Invalid(format!(
            "scaler {name} has {} values, expected {FEATURE_COUNT}",
            values.len()
        ))
    })?;
    if array.iter().any(|v| !v.is_finite()) {
        return Err(ResourceError::Invalid(format!(
            "scaler {name} contains non-finite values"
        )));
    }
    Ok(array)
}

fn read_npy_vector(path: &Path) -> Result<Vec<f64>, ResourceError> {
    if !path.exists() {
        return Err(ResourceError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let open = || {
        File::open(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })
    };

    match ArrayD::<f64>::read_npy(open()?) {
        Ok(array) => Ok(array.iter().copied().collect()),
        Err(ReadNpyError::WrongDescriptor(_)) => ArrayD::<f32>::read_npy(open()?)
            .map(|array| array.iter().copied().map(f64::from).collect())
            .map_err(|source| ResourceError::Npy {
                path: path.to_path_buf(),
                source,
            }),
        Err(source) => Err(ResourceError::Npy {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Raw feature vector in training column order
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Array1<f64>);

impl FeatureVector {
    /// Encode validated measurements as `[age, sex_code, height, weight]`
    #[must_use]
    pub fn from_measurements(child: &ChildMeasurements) -> Self {
        Self(Array1::from(vec![
            child.age_months,
            f64::from(child.sex.code()),
            child.height_cm,
            child.weight_kg,
        ]))
    }

    /// Raw feature values
    #[must_use]
    pub const fn values(&self) -> &Array1<f64> {
        &self.0
    }

    /// Apply `(x - mean) / std` elementwise
    #[must_use]
    pub fn standardize(&self, stats: &NormalizationStats) -> StandardizedFeatures {
        StandardizedFeatures((&self.0 - &stats.mean) / &stats.std)
    }
}

/// Feature vector after standardization, ready for the classifier
#[derive(Debug, Clone, PartialEq)]
pub struct StandardizedFeatures(Array1<f64>);

impl StandardizedFeatures {
    /// Wrap already-standardized values
    #[must_use]
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(Array1::from(values.to_vec()))
    }

    /// Standardized values
    #[must_use]
    pub const fn values(&self) -> &Array1<f64> {
        &self.0
    }
}
