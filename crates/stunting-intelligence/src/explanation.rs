// ABOUTME: Signed percentage deviation from normal values and its human-readable explanation
// ABOUTME: Positive deviation means the child measures below the population normal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stunting Predictor Contributors

use crate::normative::NormativeValues;
use stunting_core::constants::thresholds::DEVIATION_THRESHOLD;
use stunting_core::models::{AdditionalInfo, ComparisonInfo, NotFoundInfo};

/// Measured dimension being explained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Height in centimetres
    Height,
    /// Weight in kilograms
    Weight,
}

impl Dimension {
    const fn subject(self) -> &'static str {
        match self {
            Self::Height => "Tinggi badan anak",
            Self::Weight => "Berat badan anak",
        }
    }
}

/// `(normal - actual) / normal * 100`, rounded half to even at 2 decimals
#[must_use]
pub fn diff_percentage(normal: f64, actual: f64) -> f64 {
    (((normal - actual) / normal) * 100.0 * 100.0).round_ties_even() / 100.0
}

/// Render a deviation for one dimension
#[must_use]
pub fn explain(dimension: Dimension, diff: f64) -> String {
    let subject = dimension.subject();
    if diff.abs() < DEVIATION_THRESHOLD {
        format!("{subject} sesuai dengan rata-rata untuk usianya.")
    } else if diff > 0.0 {
        format!(
            "{subject} {}% lebih rendah dari rata-rata normal.",
            format_percentage(diff)
        )
    } else {
        format!(
            "{subject} {}% lebih tinggi dari rata-rata normal.",
            format_percentage(diff.abs())
        )
    }
}

// Whole numbers keep one decimal ("5.0%"), everything else prints as its shortest form.
fn format_percentage(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Compare measurements against normal values; all fields are filled or none are.
#[must_use]
pub fn compare_with_normative(
    normal: Option<NormativeValues>,
    height_cm: f64,
    weight_kg: f64,
) -> AdditionalInfo {
    let Some(normal) = normal else {
        return AdditionalInfo::NotFound(NotFoundInfo::default());
    };

    let height_diff = diff_percentage(normal.height_cm, height_cm);
    let weight_diff = diff_percentage(normal.weight_kg, weight_kg);

    AdditionalInfo::Comparison(ComparisonInfo {
        normal_height: normal.height_cm,
        normal_weight: normal.weight_kg,
        height_diff_percentage: height_diff,
        weight_diff_percentage: weight_diff,
        height_explanation: explain(Dimension::Height, height_diff),
        weight_explanation: explain(Dimension::Weight, weight_diff),
    })
}
