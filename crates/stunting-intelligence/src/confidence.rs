// ABOUTME: Converts the top class score into a damped, capped confidence percentage
// ABOUTME: confidence = round(min(score * 100 * 0.9, 90))
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stunting Predictor Contributors

use stunting_core::constants::thresholds::{CONFIDENCE_CAP, CONFIDENCE_DAMPING};

/// Scale a raw top-class score (expected in `[0, 1]`) to a percentage in `[0, 90]`.
///
/// Scores above 1 saturate at the cap, negative or NaN scores yield 0. Halves
/// round to the nearest even integer.
#[must_use]
pub fn scale_confidence(raw_score: f64) -> u8 {
    if raw_score.is_nan() {
        return 0;
    }
    let damped = (raw_score * 100.0 * CONFIDENCE_DAMPING).clamp(0.0, CONFIDENCE_CAP);
    damped.round_ties_even() as u8
}
