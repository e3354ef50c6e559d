// ABOUTME: Prediction result records returned to callers of the pipeline
// ABOUTME: Recommendation record plus all-or-nothing normative comparison info
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stunting Predictor Contributors

use super::growth::ClassLabel;
use crate::constants::messages;
use serde::{Deserialize, Serialize};

/// Complete result of one prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted growth status
    pub status: ClassLabel,
    /// Damped confidence percentage in `[0, 90]`
    pub confidence: u8,
    /// Nutrition guidance for the status (and infancy)
    pub nutrition_recommendation: RecommendationRecord,
    /// Comparison against population-normal height and weight
    pub additional_info: AdditionalInfo,
}

/// Structured nutrition guidance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    /// Summary of the child's situation
    pub description: String,
    /// Suggested foods, in order of priority
    pub food: Vec<String>,
    /// Feeding frequency and portion size
    pub frequency: String,
    /// Supplement guidance
    pub supplements: String,
    /// Monitoring notes
    pub notes: String,
}

impl RecommendationRecord {
    /// Record returned for a status the catalog does not know
    #[must_use]
    pub fn unrecognized() -> Self {
        Self {
            description: messages::UNKNOWN_STATUS.to_owned(),
            food: Vec::new(),
            frequency: String::new(),
            supplements: String::new(),
            notes: String::new(),
        }
    }
}

/// Normative comparison; either fully populated or fully null
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdditionalInfo {
    /// A reference row was found for the child's sex
    Comparison(ComparisonInfo),
    /// No reference row exists for the child's sex
    NotFound(NotFoundInfo),
}

impl AdditionalInfo {
    /// Whether normative values were available
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Comparison(_))
    }
}

/// Deviation of the child's measurements from the normative values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonInfo {
    /// Normal height (cm) for the matched age and sex
    pub normal_height: f64,
    /// Normal weight (kg) for the matched age and sex
    pub normal_weight: f64,
    /// `(normal - actual) / normal * 100`, rounded to 2 decimals; positive means shorter
    pub height_diff_percentage: f64,
    /// `(normal - actual) / normal * 100`, rounded to 2 decimals; positive means lighter
    pub weight_diff_percentage: f64,
    /// Human-readable height deviation
    pub height_explanation: String,
    /// Human-readable weight deviation
    pub weight_explanation: String,
}

/// Serialized shape of a missing comparison: null numbers, placeholder explanations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotFoundInfo {
    normal_height: Option<()>,
    normal_weight: Option<()>,
    height_diff_percentage: Option<()>,
    weight_diff_percentage: Option<()>,
    /// Placeholder height explanation
    pub height_explanation: String,
    /// Placeholder weight explanation
    pub weight_explanation: String,
}

impl Default for NotFoundInfo {
    fn default() -> Self {
        Self {
            normal_height: None,
            normal_weight: None,
            height_diff_percentage: None,
            weight_diff_percentage: None,
            height_explanation: messages::NORMAL_DATA_NOT_FOUND.to_owned(),
            weight_explanation: messages::NORMAL_DATA_NOT_FOUND.to_owned(),
        }
    }
}
