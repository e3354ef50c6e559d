// ABOUTME: Population-normal height/weight reference table with nearest-age fallback
// ABOUTME: Exact (age, sex) match first, else the closest age among rows of that sex
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stunting Predictor Contributors

//! Normative Lookup
//!
//! The reference table holds one row per (age in months, sex) with the
//! population-normal height and weight. Rows are validated at load time and
//! invalid ones are dropped, so a lookup never fails: it either finds a row or
//! reports that the sex has none.

use crate::errors::ResourceError;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use stunting_core::models::Sex;
use tracing::{debug, warn};

/// One validated reference row
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormativeRow {
    /// Age in whole months
    pub age_months: u32,
    /// Sex the row applies to
    pub sex: Sex,
    /// Normal height (cm)
    pub normal_height_cm: f64,
    /// Normal weight (kg)
    pub normal_weight_kg: f64,
}

/// CSV record as exported by the data team; numbers may be written as floats
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(rename = "Umur (bulan)")]
    age_months: f64,
    #[serde(rename = "Jenis Kelamin")]
    sex_code: f64,
    #[serde(rename = "Tinggi Badan (cm)")]
    normal_height_cm: f64,
    #[serde(rename = "Berat Badan (kg)")]
    normal_weight_kg: f64,
}

impl CsvRecord {
    fn into_row(self, line: usize) -> Result<NormativeRow, ResourceError> {
        let invalid = |what: &str| ResourceError::Invalid(format!("reference row {line}: {what}"));

        if !(self.age_months >= 0.0 && self.age_months.fract() == 0.0) {
            return Err(invalid("age must be a whole number of months"));
        }
        let sex = if self.sex_code.fract() == 0.0 && (0.0..=1.0).contains(&self.sex_code) {
            Sex::from_code(self.sex_code as u8)
        } else {
            None
        }
        .ok_or_else(|| invalid("sex code must be 0 or 1"))?;

        NormativeRow::new(
            self.age_months as u32,
            sex,
            self.normal_height_cm,
            self.normal_weight_kg,
        )
        .map_err(|_| invalid("normal height and weight must be positive"))
    }
}

impl NormativeRow {
    /// Create a row, requiring positive finite normal values.
    ///
    /// # Errors
    ///
    /// Returns an error if either normal value is not a positive finite number.
    pub fn new(
        age_months: u32,
        sex: Sex,
        normal_height_cm: f64,
        normal_weight_kg: f64,
    ) -> Result<Self, ResourceError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(normal_height_cm) || !positive(normal_weight_kg) {
            return Err(ResourceError::Invalid(format!(
                "normal values for age {age_months} must be positive"
            )));
        }
        Ok(Self {
            age_months,
            sex,
            normal_height_cm,
            normal_weight_kg,
        })
    }
}

/// Normal height and weight for some age and sex
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormativeValues {
    /// Normal height (cm)
    pub height_cm: f64,
    /// Normal weight (kg)
    pub weight_kg: f64,
}

/// Result of a lookup, with the age that actually matched
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormativeMatch {
    /// Matched normal values
    pub values: NormativeValues,
    /// Age of the row used
    pub matched_age_months: u32,
    /// Whether the row's age equals the requested age
    pub exact: bool,
}

/// Read-only reference table
#[derive(Debug, Clone, PartialEq)]
pub struct NormativeTable {
    rows: Vec<NormativeRow>,
}

impl NormativeTable {
    /// Build a table from rows, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::EmptyTable` if there are no rows.
    pub fn from_rows(rows: Vec<NormativeRow>) -> Result<Self, ResourceError> {
        if rows.is_empty() {
            return Err(ResourceError::EmptyTable);
        }
        Ok(Self { rows })
    }

    /// Load the reference CSV (`Umur (bulan)`, `Jenis Kelamin`, `Tinggi Badan (cm)`, `Berat Badan (kg)`).
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or has no valid rows.
    pub fn from_csv_path(path: &Path) -> Result<Self, ResourceError> {
        if !path.exists() {
            return Err(ResourceError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let reader = csv::Reader::from_path(path)?;
        let table = Self::from_csv(reader)?;
        debug!(rows = table.len(), path = %path.display(), "Loaded normative table");
        Ok(table)
    }

    /// Parse the reference CSV from any reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the CSV cannot be read or has no valid rows.
    pub fn from_reader(reader: impl Read) -> Result<Self, ResourceError> {
        Self::from_csv(csv::Reader::from_reader(reader))
    }

    /// Rows that fail to deserialize or validate are skipped with a warning;
    /// only I/O or encoding errors, or a table with no valid rows, fail the load.
    fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, ResourceError> {
        let mut rows = Vec::new();
        for (index, record) in reader.deserialize::<CsvRecord>().enumerate() {
            let line = index + 2;
            let row = match record {
                Ok(record) => record.into_row(line),
                Err(error) if matches!(error.kind(), csv::ErrorKind::Deserialize { .. }) => {
                    Err(ResourceError::Invalid(format!("reference row {line}: {error}")))
                }
                Err(error) => return Err(error.into()),
            };
            match row {
                Ok(row) => rows.push(row),
                Err(error) => warn!(line, %error, "Skipping invalid reference row"),
            }
        }
        Self::from_rows(rows)
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false for a constructed table
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in table order
    #[must_use]
    pub fn rows(&self) -> &[NormativeRow] {
        &self.rows
    }

    /// Find normal values for an age (truncated to whole months) and sex.
    ///
    /// An exact row wins. Otherwise the row of the same sex with the smallest
    /// absolute age difference is used; among equally near rows the one that
    /// appears first in the table wins. Returns `None` when the table has no
    /// row for the sex or the age is not a finite number.
    #[must_use]
    pub fn lookup(&self, age_months: f64, sex: Sex) -> Option<NormativeMatch> {
        if !age_months.is_finite() {
            warn!(age_months, "Normative lookup skipped for non-finite age");
            return None;
        }
        let target = age_months.trunc() as i64;
        let same_sex = || self.rows.iter().filter(move |row| row.sex == sex);

        if let Some(row) = same_sex().find(|row| i64::from(row.age_months) == target) {
            return Some(Self::to_match(row, true));
        }

        let Some(row) = same_sex().min_by_key(|row| (i64::from(row.age_months) - target).abs())
        else {
            warn!(%sex, "No normative data for sex");
            return None;
        };

        warn!(
            requested_age = target,
            matched_age = row.age_months,
            %sex,
            "Using nearest available age for normative data"
        );
        Some(Self::to_match(row, false))
    }

    const fn to_match(row: &NormativeRow, exact: bool) -> NormativeMatch {
        NormativeMatch {
            values: NormativeValues {
                height_cm: row.normal_height_cm,
                weight_kg: row.normal_weight_kg,
            },
            matched_age_months: row.age_months,
            exact,
        }
    }
}
