// ABOUTME: Classifier abstraction over a frozen multi-class growth status model
// ABOUTME: Ships a dense feed-forward backend loaded from exported JSON weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stunting Predictor Contributors

//! Classifier Adapter
//!
//! A classifier maps a standardized feature vector to four relative class
//! scores. Scores are not required to sum to one; only their order and the
//! magnitude of the top score matter downstream.

use crate::errors::{ClassifierError, ResourceError};
use crate::features::StandardizedFeatures;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use stunting_core::constants::thresholds::{CLASS_COUNT, FEATURE_COUNT};
use stunting_core::models::ClassLabel;

/// A frozen classifier. Implementations must be deterministic and read-only.
pub trait Classifier: Send + Sync {
    /// Score one standardized feature vector
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot produce four finite scores
    fn score(&self, features: &StandardizedFeatures) -> Result<ClassScores, ClassifierError>;

    /// Short backend description for status reporting
    fn describe(&self) -> String;
}

/// Per-class scores in `ClassLabel` index order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassScores([f64; CLASS_COUNT]);

impl ClassScores {
    /// Wrap four scores
    #[must_use]
    pub const fn new(scores: [f64; CLASS_COUNT]) -> Self {
        Self(scores)
    }

    /// Build from a model output slice.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice does not hold four finite values
    pub fn from_slice(scores: &[f64]) -> Result<Self, ClassifierError> {
        let array: [f64; CLASS_COUNT] =
            scores
                .try_into()
                .map_err(|_| ClassifierError::DimensionMismatch {
                    expected: CLASS_COUNT,
                    actual: scores.len(),
                })?;
        if array.iter().any(|s| !s.is_finite()) {
            return Err(ClassifierError::NonFiniteOutput);
        }
        Ok(Self(array))
    }

    /// Raw scores
    #[must_use]
    pub const fn values(&self) -> &[f64; CLASS_COUNT] {
        &self.0
    }

    /// Argmax label and its score; ties go to the lowest index
    #[must_use]
    pub fn top(&self) -> (ClassLabel, f64) {
        let mut best = ClassLabel::SeverelyStunted;
        let mut best_score = self.0[0];
        for label in ClassLabel::ALL.into_iter().skip(1) {
            let score = self.0[label.index()];
            if score > best_score {
                best = label;
                best_score = score;
            }
        }
        (best, best_score)
    }
}

/// Layer activation function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    /// Identity
    #[default]
    Linear,
    /// `max(0, x)`
    Relu,
    /// Logistic function
    Sigmoid,
    /// Hyperbolic tangent
    Tanh,
    /// Normalized exponential over the whole layer
    Softmax,
}

impl Activation {
    fn apply(self, values: &mut Array1<f64>) {
        match self {
            Self::Linear => {}
            Self::Relu => values.mapv_inplace(|v| v.max(0.0)),
            Self::Sigmoid => values.mapv_inplace(|v| 1.0 / (1.0 + (-v).exp())),
            Self::Tanh => values.mapv_inplace(f64::tanh),
            Self::Softmax => {
                let max = values.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
                values.mapv_inplace(|v| (v - max).exp());
                let sum = values.sum();
                if sum > 0.0 {
                    *values /= sum;
                }
            }
        }
    }
}

/// Layer weights as exported: `kernel` is a list of `inputs` rows of `units` columns
#[derive(Deserialize)]
struct LayerWeights {
    kernel: Vec<Vec<f64>>,
    bias: Vec<f64>,
    #[serde(default)]
    activation: Activation,
}

impl TryFrom<LayerWeights> for DenseLayer {
    type Error = ResourceError;

    fn try_from(raw: LayerWeights) -> Result<Self, Self::Error> {
        let inputs = raw.kernel.len();
        let units = raw.bias.len();
        if let Some((index, row)) = raw
            .kernel
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != units)
        {
            return Err(ResourceError::Invalid(format!(
                "kernel row {index} has {} columns, expected {units}",
                row.len()
            )));
        }
        let kernel = Array2::from_shape_vec((inputs, units), raw.kernel.concat())
            .map_err(|e| ResourceError::Invalid(format!("kernel shape: {e}")))?;
        Ok(Self::new(kernel, Array1::from(raw.bias), raw.activation))
    }
}

/// Fully connected layer; `kernel` is shaped `(inputs, units)`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "LayerWeights")]
pub struct DenseLayer {
    kernel: Array2<f64>,
    bias: Array1<f64>,
    activation: Activation,
}

impl DenseLayer {
    /// Create a layer from its weights
    #[must_use]
    pub const fn new(kernel: Array2<f64>, bias: Array1<f64>, activation: Activation) -> Self {
        Self {
            kernel,
            bias,
            activation,
        }
    }

    fn inputs(&self) -> usize {
        self.kernel.nrows()
    }

    fn units(&self) -> usize {
        self.bias.len()
    }

    fn forward(&self, input: &Array1<f64>) -> Array1<f64> {
        let mut output = input.dot(&self.kernel) + &self.bias;
        self.activation.apply(&mut output);
        output
    }
}

/// Frozen dense feed-forward network
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DenseNetwork {
    layers: Vec<DenseLayer>,
}

impl DenseNetwork {
    /// Build a network, checking that layer shapes chain from 4 inputs to 4 classes.
    ///
    /// # Errors
    ///
    /// Returns an error if the network is empty, shapes do not line up, or any
    /// weight is not finite.
    pub fn new(layers: Vec<DenseLayer>) -> Result<Self, ResourceError> {
        let network = Self { layers };
        network.validate()?;
        Ok(network)
    }

    /// Load a network exported as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unparsable, or fails validation.
    pub fn from_json_file(path: &Path) -> Result<Self, ResourceError> {
        if !path.exists() {
            return Err(ResourceError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = fs::read_to_string(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let network: Self =
            serde_json::from_str(&contents).map_err(|source| ResourceError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        network.validate()?;
        Ok(network)
    }

    fn validate(&self) -> Result<(), ResourceError> {
        if self.layers.is_empty() {
            return Err(ResourceError::Invalid("model has no layers".into()));
        }

        let mut expected_inputs = FEATURE_COUNT;
        for (index, layer) in self.layers.iter().enumerate() {
            if layer.inputs() != expected_inputs {
                return Err(ResourceError::Invalid(format!(
                    "layer {index} takes {} inputs, expected {expected_inputs}",
                    layer.inputs()
                )));
            }
            if layer.units() == 0 {
                return Err(ResourceError::Invalid(format!("layer {index} has no units")));
            }
            if layer.kernel.ncols() != layer.units() {
                return Err(ResourceError::Invalid(format!(
                    "layer {index} kernel has {} columns, bias has {}",
                    layer.kernel.ncols(),
                    layer.units()
                )));
            }
            let finite = layer.bias.iter().all(|b| b.is_finite())
                && layer.kernel.iter().all(|w| w.is_finite());
            if !finite {
                return Err(ResourceError::Invalid(format!(
                    "layer {index} contains non-finite weights"
                )));
            }
            expected_inputs = layer.units();
        }

        if expected_inputs != CLASS_COUNT {
            return Err(ResourceError::Invalid(format!(
                "model outputs {expected_inputs} classes, expected {CLASS_COUNT}"
            )));
        }
        Ok(())
    }
}

impl Classifier for DenseNetwork {
    fn score(&self, features: &StandardizedFeatures) -> Result<ClassScores, ClassifierError> {
        let mut activations = features.values().clone();
        for layer in &self.layers {
            if activations.len() != layer.inputs() {
                return Err(ClassifierError::DimensionMismatch {
                    expected: layer.inputs(),
                    actual: activations.len(),
                });
            }
            activations = layer.forward(&activations);
        }
        ClassScores::from_slice(&activations.to_vec())
    }

    fn describe(&self) -> String {
        format!("dense network ({} layers)", self.layers.len())
    }
}
