// ABOUTME: Static nutrition guidance catalog keyed by predicted growth status
// ABOUTME: Infants under six months get exclusive-feeding guidance for every status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stunting Predictor Contributors

//! Recommendation Catalog
//!
//! The catalog is built once and never mutated. The infant rule is applied to
//! a copy of the looked-up record, so a request for an infant can never leak
//! its override into later requests.

use std::collections::HashMap;
use stunting_core::constants::thresholds::INFANT_AGE_MONTHS;
use stunting_core::models::{ClassLabel, RecommendationRecord};

const INFANT_FOOD: &str = "ASI eksklusif atau susu formula khusus";
const INFANT_FREQUENCY: &str = "7-12 kali/hari (sesuai kebutuhan)";

/// Immutable status → guidance mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationCatalog {
    records: HashMap<ClassLabel, RecommendationRecord>,
}

impl Default for RecommendationCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn record(
    description: &str,
    food: &[&str],
    frequency: &str,
    supplements: &str,
    notes: &str,
) -> RecommendationRecord {
    RecommendationRecord {
        description: description.to_owned(),
        food: food.iter().map(|item| (*item).to_owned()).collect(),
        frequency: frequency.to_owned(),
        supplements: supplements.to_owned(),
        notes: notes.to_owned(),
    }
}

impl RecommendationCatalog {
    /// Guidance used by the deployed service
    #[must_use]
    pub fn standard() -> Self {
        let records = HashMap::from([
            (
                ClassLabel::SeverelyStunted,
                record(
                    "Anak mengalami stunting berat. Perlu intervensi gizi intensif dan konsultasi medis.",
                    &[
                        "Susu tinggi protein (sesuai usia)",
                        "Bubur kacang hijau",
                        "Telur rebus",
                        "Ikan salmon/teri",
                        "Sayur bayam",
                    ],
                    "6-8 kali/hari (porsi kecil, 50-100g per porsi)",
                    "Konsultasi dokter untuk suplemen zat besi, zinc, dan vitamin A.",
                    "Pantau berat dan tinggi setiap 2 minggu. Libatkan puskesmas.",
                ),
            ),
            (
                ClassLabel::Stunted,
                record(
                    "Anak mengalami stunting ringan. Perbaikan gizi diperlukan untuk pertumbuhan optimal.",
                    &[
                        "Susu full cream",
                        "Nasi tim dengan ayam",
                        "Tempe goreng",
                        "Brokoli kukus",
                        "Pisang",
                    ],
                    "5-6 kali/hari (porsi sedang, 100-150g per porsi)",
                    "Multivitamin anak (dosis sesuai usia).",
                    "Tingkatkan asupan protein dan kalori. Konsultasi gizi jika tidak membaik dalam 1 bulan.",
                ),
            ),
            (
                ClassLabel::Normal,
                record(
                    "Pertumbuhan anak normal. Pertahankan pola makan seimbang.",
                    &["Nasi/ubi", "Ayam/daging sapi", "Sayur kolplay", "Tahu", "Buah apel"],
                    "4-5 kali/hari (porsi sesuai usia, 150-200g per porsi)",
                    "Tidak diperlukan kecuali defisiensi spesifik.",
                    "Pastikan variasi makanan dan aktivitas fisik cukup.",
                ),
            ),
            (
                ClassLabel::Tall,
                record(
                    "Anak memiliki pertumbuhan di atas rata-rata. Pastikan gizi seimbang untuk mendukung perkembangan.",
                    &["Roti gandum", "Ikan tuna", "Kacang almond", "Wortel", "Mangga"],
                    "4-5 kali/hari (porsi sesuai usia, 150-200g per porsi)",
                    "Tidak diperlukan kecuali aktivitas fisik tinggi.",
                    "Monitor BMI untuk mencegah obesitas.",
                ),
            ),
        ]);
        Self { records }
    }

    /// Base record for a status, without the infant rule
    #[must_use]
    pub fn record(&self, label: ClassLabel) -> Option<&RecommendationRecord> {
        self.records.get(&label)
    }

    /// Guidance for a status at an age (months)
    #[must_use]
    pub fn recommend(&self, label: ClassLabel, age_months: f64) -> RecommendationRecord {
        let Some(base) = self.record(label) else {
            return RecommendationRecord::unrecognized();
        };
        if age_months < INFANT_AGE_MONTHS {
            Self::infant_override(base.clone())
        } else {
            base.clone()
        }
    }

    /// Guidance for a status given by name; unknown names yield the placeholder record
    #[must_use]
    pub fn recommend_by_name(&self, status: &str, age_months: f64) -> RecommendationRecord {
        status.parse::<ClassLabel>().map_or_else(
            |_| RecommendationRecord::unrecognized(),
            |label| self.recommend(label, age_months),
        )
    }

    /// Replace food and frequency with exclusive breast or formula feeding
    #[must_use]
    pub fn infant_override(mut record: RecommendationRecord) -> RecommendationRecord {
        record.food = vec![INFANT_FOOD.to_owned()];
        record.frequency = INFANT_FREQUENCY.to_owned();
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stunting_core::constants::messages;

    #[test]
    fn test_every_label_has_a_record() {
        let catalog = RecommendationCatalog::standard();
        for label in ClassLabel::ALL {
            let record = catalog.record(label).unwrap();
            assert_eq!(record.food.len(), 5);
            assert!(!record.description.is_empty());
        }
    }

    #[test]
    fn test_infant_override_applies_to_every_label() {
        let catalog = RecommendationCatalog::standard();
        for label in ClassLabel::ALL {
            let record = catalog.recommend(label, 3.0);
            assert_eq!(record.food, vec![INFANT_FOOD.to_owned()]);
            assert_eq!(record.frequency, INFANT_FREQUENCY);
            assert_eq!(
                record.description,
                catalog.record(label).unwrap().description
            );
        }
    }

    #[test]
    fn test_override_does_not_mutate_catalog() {
        let catalog = RecommendationCatalog::standard();
        let _ = catalog.recommend(ClassLabel::Normal, 2.0);
        let older = catalog.recommend(ClassLabel::Normal, 24.0);

        assert_eq!(older.food.len(), 5);
        assert_eq!(older.frequency, "4-5 kali/hari (porsi sesuai usia, 150-200g per porsi)");
    }

    #[test]
    fn test_six_months_is_not_infant() {
        let catalog = RecommendationCatalog::standard();
        let record = catalog.recommend(ClassLabel::Stunted, 6.0);
        assert_ne!(record.frequency, INFANT_FREQUENCY);
    }

    #[test]
    fn test_unknown_status_placeholder() {
        let catalog = RecommendationCatalog::standard();
        let record = catalog.recommend_by_name("Obese", 2.0);

        assert_eq!(record.description, messages::UNKNOWN_STATUS);
        assert!(record.food.is_empty());
        assert!(record.frequency.is_empty());
    }
}
