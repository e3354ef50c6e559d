// ABOUTME: Child measurement inputs with strict validation at the pipeline boundary
// ABOUTME: Sex is a closed enum parsed from the two accepted Indonesian labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stunting Predictor Contributors

use crate::constants::{messages, sex_labels, thresholds};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex of the child, as used by the classifier and reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// "Laki-laki", feature code 0
    #[serde(rename = "Laki-laki")]
    Male,
    /// "Perempuan", feature code 1
    #[serde(rename = "Perempuan")]
    Female,
}

impl Sex {
    /// Numeric feature encoding (male 0, female 1)
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Male => sex_labels::MALE_CODE,
            Self::Female => sex_labels::FEMALE_CODE,
        }
    }

    /// Decode a reference-table sex code
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            sex_labels::MALE_CODE => Some(Self::Male),
            sex_labels::FEMALE_CODE => Some(Self::Female),
            _ => None,
        }
    }

    /// The accepted input label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => sex_labels::MALE,
            Self::Female => sex_labels::FEMALE,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sex {
    type Err = AppError;

    /// Exact, case-sensitive match against the two accepted labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            sex_labels::MALE => Ok(Self::Male),
            sex_labels::FEMALE => Ok(Self::Female),
            _ => Err(AppError::invalid_input(messages::INVALID_SEX)),
        }
    }
}

/// Validated prediction inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChildMeasurements {
    /// Age in months, finite and >= 0
    pub age_months: f64,
    /// Sex of the child
    pub sex: Sex,
    /// Height in centimetres, finite and > 0
    pub height_cm: f64,
    /// Weight in kilograms, finite and > 0
    pub weight_kg: f64,
}

impl ChildMeasurements {
    /// Validate raw inputs in field order: age, sex, height, weight.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first violated field. Non-finite
    /// numbers are treated as non-numeric input.
    pub fn validate(age: f64, sex: &str, height: f64, weight: f64) -> AppResult<Self> {
        let age_months = check_numeric(age, messages::INVALID_AGE, |v| v >= 0.0)?;
        let sex = sex.parse::<Sex>()?;
        let height_cm = check_numeric(height, messages::INVALID_HEIGHT, |v| v > 0.0)?;
        let weight_kg = check_numeric(weight, messages::INVALID_WEIGHT, |v| v > 0.0)?;

        Ok(Self {
            age_months,
            sex,
            height_cm,
            weight_kg,
        })
    }

    /// Younger than six months
    #[must_use]
    pub fn is_infant(&self) -> bool {
        self.age_months < thresholds::INFANT_AGE_MONTHS
    }
}

fn check_numeric(value: f64, message: &str, in_range: impl Fn(f64) -> bool) -> AppResult<f64> {
    if !value.is_finite() {
        return Err(AppError::invalid_format(message));
    }
    if !in_range(value) {
        return Err(AppError::out_of_range(message));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_sex_parsing_is_exact() {
        assert_eq!("Laki-laki".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!("Perempuan".parse::<Sex>().unwrap(), Sex::Female);
        assert!("laki-laki".parse::<Sex>().is_err());
        assert!("Unknown".parse::<Sex>().is_err());
        assert!("".parse::<Sex>().is_err());
    }

    #[test]
    fn test_sex_codes_round_trip() {
        assert_eq!(Sex::Male.code(), 0);
        assert_eq!(Sex::Female.code(), 1);
        assert_eq!(Sex::from_code(1), Some(Sex::Female));
        assert_eq!(Sex::from_code(2), None);
    }

    #[test]
    fn test_validation_reports_first_violated_field() {
        let err = ChildMeasurements::validate(-1.0, "Unknown", 0.0, 0.0).unwrap_err();
        assert_eq!(err.message, messages::INVALID_AGE);
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);

        let err = ChildMeasurements::validate(24.0, "Unknown", 83.0, 10.5).unwrap_err();
        assert_eq!(err.message, messages::INVALID_SEX);

        let err = ChildMeasurements::validate(24.0, "Perempuan", 0.0, 10.5).unwrap_err();
        assert_eq!(err.message, messages::INVALID_HEIGHT);

        let err = ChildMeasurements::validate(24.0, "Perempuan", 83.0, f64::NAN).unwrap_err();
        assert_eq!(err.message, messages::INVALID_WEIGHT);
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_zero_age_is_valid() {
        let child = ChildMeasurements::validate(0.0, "Laki-laki", 50.0, 3.3).unwrap();
        assert!(child.is_infant());
    }
}
