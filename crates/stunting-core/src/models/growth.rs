// ABOUTME: Growth status labels ordered to match the classifier output indices
// ABOUTME: Index 0 is always Severely Stunted, 1 Stunted, 2 Normal, 3 Tall
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stunting Predictor Contributors

use crate::constants::class_labels;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Growth status predicted by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClassLabel {
    /// Output index 0
    #[serde(rename = "Severely Stunted")]
    SeverelyStunted,
    /// Output index 1
    #[serde(rename = "Stunted")]
    Stunted,
    /// Output index 2
    #[serde(rename = "Normal")]
    Normal,
    /// Output index 3
    #[serde(rename = "Tall")]
    Tall,
}

impl ClassLabel {
    /// All labels in classifier output order
    pub const ALL: [Self; 4] = [Self::SeverelyStunted, Self::Stunted, Self::Normal, Self::Tall];

    /// Label for a classifier output index
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Classifier output index of this label
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display name, also the serialized form
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SeverelyStunted => class_labels::SEVERELY_STUNTED,
            Self::Stunted => class_labels::STUNTED,
            Self::Normal => class_labels::NORMAL,
            Self::Tall => class_labels::TALL,
        }
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ClassLabel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|label| label.name() == s)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown growth status: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_order_is_fixed() {
        assert_eq!(ClassLabel::from_index(0), Some(ClassLabel::SeverelyStunted));
        assert_eq!(ClassLabel::from_index(1), Some(ClassLabel::Stunted));
        assert_eq!(ClassLabel::from_index(2), Some(ClassLabel::Normal));
        assert_eq!(ClassLabel::from_index(3), Some(ClassLabel::Tall));
        assert_eq!(ClassLabel::from_index(4), None);

        for label in ClassLabel::ALL {
            assert_eq!(ClassLabel::from_index(label.index()), Some(label));
        }
    }

    #[test]
    fn test_serialized_name_matches_display() {
        let json = serde_json::to_string(&ClassLabel::SeverelyStunted).unwrap();
        assert_eq!(json, "\"Severely Stunted\"");
        assert_eq!("Tall".parse::<ClassLabel>().unwrap(), ClassLabel::Tall);
        assert!("tall".parse::<ClassLabel>().is_err());
    }
}
