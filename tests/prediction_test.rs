// ABOUTME: End-to-end tests for the prediction pipeline against fixture artifacts
// ABOUTME: Covers validation order, confidence bounds, infant guidance, comparison, and readiness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stunting Predictor Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{fixed_resources, ModelFixture, MALE_ONLY_CSV};
use stunting_core::constants::messages;
use stunting_core::errors::ErrorCode;
use stunting_core::models::{AdditionalInfo, ClassLabel};
use stunting_predictor::config::ModelPaths;
use stunting_predictor::{predict, predict_outcome, PredictionOutcome, PredictionResources};

// ============================================================================
// Successful predictions
// ============================================================================

#[test]
fn test_predict_complete_result() {
    let resources = ModelFixture::new().load();
    assert!(resources.is_ready());

    let result = predict(&resources, 24.0, "Laki-laki", 83.0, 10.5).unwrap();

    assert_eq!(result.status, ClassLabel::Normal);
    assert_eq!(result.confidence, 90);
    assert_eq!(result.nutrition_recommendation.food.len(), 5);

    let AdditionalInfo::Comparison(info) = result.additional_info else {
        panic!("expected a normative comparison");
    };
    assert_eq!(info.normal_height, 87.0);
    assert_eq!(info.normal_weight, 12.5);
    assert_eq!(info.height_diff_percentage, 4.6);
    assert_eq!(info.weight_diff_percentage, 16.0);
    assert_eq!(
        info.height_explanation,
        "Tinggi badan anak 4.6% lebih rendah dari rata-rata normal."
    );
    assert_eq!(
        info.weight_explanation,
        "Berat badan anak 16.0% lebih rendah dari rata-rata normal."
    );
}

#[test]
fn test_predict_is_idempotent() {
    let resources = ModelFixture::new().load();

    let first = predict(&resources, 24.0, "Perempuan", 83.0, 10.5).unwrap();
    let second = predict(&resources, 24.0, "Perempuan", 83.0, 10.5).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_confidence_and_status_bounds() {
    let resources = ModelFixture::new().load();

    for (age, sex, height, weight) in [
        (0.0, "Laki-laki", 45.0, 2.5),
        (3.0, "Perempuan", 60.0, 6.0),
        (24.0, "Laki-laki", 83.0, 10.5),
        (59.0, "Perempuan", 120.0, 25.0),
    ] {
        let result = predict(&resources, age, sex, height, weight).unwrap();
        assert!(result.confidence <= 90);
        assert!(ClassLabel::ALL.contains(&result.status));
    }
}

#[test]
fn test_confidence_follows_top_score() {
    let resources = fixed_resources([0.1, 0.5, 0.3, 0.1]);
    let result = predict(&resources, 24.0, "Laki-laki", 83.0, 10.5).unwrap();

    assert_eq!(result.status, ClassLabel::Stunted);
    assert_eq!(result.confidence, 45);
}

#[test]
fn test_scores_above_one_are_capped() {
    let resources = fixed_resources([0.0, 0.0, 0.0, 7.5]);
    let result = predict(&resources, 24.0, "Laki-laki", 83.0, 10.5).unwrap();

    assert_eq!(result.status, ClassLabel::Tall);
    assert_eq!(result.confidence, 90);
}

#[test]
fn test_tied_scores_pick_lowest_index() {
    let resources = fixed_resources([0.4, 0.4, 0.1, 0.1]);
    let result = predict(&resources, 24.0, "Laki-laki", 83.0, 10.5).unwrap();

    assert_eq!(result.status, ClassLabel::SeverelyStunted);
}

// ============================================================================
// Recommendations and normative comparison
// ============================================================================

#[test]
fn test_infant_gets_exclusive_feeding_for_every_label() {
    for index in 0..4 {
        let mut scores = [0.0; 4];
        scores[index] = 1.0;
        let resources = fixed_resources(scores);

        let result = predict(&resources, 3.0, "Perempuan", 60.0, 6.0).unwrap();
        assert_eq!(result.status.index(), index);
        assert_eq!(
            result.nutrition_recommendation.food,
            vec!["ASI eksklusif atau susu formula khusus".to_owned()]
        );
        assert_eq!(
            result.nutrition_recommendation.frequency,
            "7-12 kali/hari (sesuai kebutuhan)"
        );
    }
}

#[test]
fn test_infant_override_does_not_leak() {
    let resources = fixed_resources([0.0, 0.0, 1.0, 0.0]);

    let infant = predict(&resources, 2.0, "Perempuan", 58.0, 5.0).unwrap();
    let toddler = predict(&resources, 24.0, "Perempuan", 85.7, 11.9).unwrap();

    assert_eq!(infant.nutrition_recommendation.food.len(), 1);
    assert_eq!(toddler.nutrition_recommendation.food.len(), 5);
}

#[test]
fn test_measurements_at_normal_are_within_average() {
    let resources = ModelFixture::new().load();
    let result = predict(&resources, 24.0, "Perempuan", 85.7, 11.9).unwrap();

    let AdditionalInfo::Comparison(info) = result.additional_info else {
        panic!("expected a normative comparison");
    };
    assert_eq!(info.height_diff_percentage, 0.0);
    assert_eq!(
        info.height_explanation,
        "Tinggi badan anak sesuai dengan rata-rata untuk usianya."
    );
}

#[test]
fn test_missing_sex_rows_give_null_comparison() {
    let resources = ModelFixture::with_table(MALE_ONLY_CSV).load();
    let result = predict(&resources, 24.0, "Perempuan", 83.0, 10.5).unwrap();

    let json = serde_json::to_value(&result.additional_info).unwrap();
    assert!(json["normal_height"].is_null());
    assert!(json["normal_weight"].is_null());
    assert!(json["height_diff_percentage"].is_null());
    assert!(json["weight_diff_percentage"].is_null());
    assert_eq!(json["height_explanation"], messages::NORMAL_DATA_NOT_FOUND);
    assert_eq!(json["weight_explanation"], messages::NORMAL_DATA_NOT_FOUND);
}

#[test]
fn test_malformed_reference_row_does_not_block_predictions() {
    let csv = "Umur (bulan),Jenis Kelamin,Tinggi Badan (cm),Berat Badan (kg)\n\
               24,0,87.0,12.5\n\
               24,2,80.0,11.0\n";
    let resources = ModelFixture::with_table(csv).load();

    assert!(resources.is_ready());
    assert!(resources.status().normal_values_error.is_none());

    let male = predict(&resources, 24.0, "Laki-laki", 83.0, 10.5).unwrap();
    let AdditionalInfo::Comparison(info) = male.additional_info else {
        panic!("expected a normative comparison");
    };
    assert_eq!(info.normal_height, 87.0);

    let female = predict(&resources, 24.0, "Perempuan", 83.0, 10.5).unwrap();
    assert!(!female.additional_info.is_found());
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_unknown_sex_is_rejected() {
    let resources = ModelFixture::new().load();
    let err = predict(&resources, 24.0, "Unknown", 83.0, 10.5).unwrap_err();

    assert!(err.code.is_validation());
    assert_eq!(err.message, messages::INVALID_SEX);
    assert_eq!(err.http_status(), 400);
}

#[test]
fn test_sex_match_is_case_sensitive() {
    let resources = ModelFixture::new().load();
    assert!(predict(&resources, 24.0, "laki-laki", 83.0, 10.5).is_err());
    assert!(predict(&resources, 24.0, "PEREMPUAN", 83.0, 10.5).is_err());
}

#[test]
fn test_each_field_has_its_own_message() {
    let resources = ModelFixture::new().load();

    let age = predict(&resources, -1.0, "Laki-laki", 83.0, 10.5).unwrap_err();
    assert_eq!(age.message, messages::INVALID_AGE);

    let height = predict(&resources, 24.0, "Laki-laki", 0.0, 10.5).unwrap_err();
    assert_eq!(height.message, messages::INVALID_HEIGHT);

    let weight = predict(&resources, 24.0, "Laki-laki", 83.0, -2.0).unwrap_err();
    assert_eq!(weight.message, messages::INVALID_WEIGHT);

    let nan = predict(&resources, f64::NAN, "Laki-laki", 83.0, 10.5).unwrap_err();
    assert_eq!(nan.code, ErrorCode::InvalidFormat);
    assert_eq!(nan.message, messages::INVALID_AGE);
}

#[test]
fn test_first_invalid_field_wins() {
    let resources = ModelFixture::new().load();
    let err = predict(&resources, -1.0, "Unknown", 0.0, 0.0).unwrap_err();
    assert_eq!(err.message, messages::INVALID_AGE);
}

#[test]
fn test_age_zero_is_accepted() {
    let resources = ModelFixture::new().load();
    assert!(predict(&resources, 0.0, "Laki-laki", 50.0, 3.3).is_ok());
}

// ============================================================================
// Resource availability
// ============================================================================

#[test]
fn test_missing_artifacts_fail_with_resource_unavailable() {
    let fixture = ModelFixture::new();
    std::fs::remove_file(&fixture.paths.model).unwrap();
    let resources = fixture.load();

    assert!(!resources.is_ready());
    assert!(!resources.status().model_loaded);
    assert!(resources.status().scaler_loaded);

    let err = predict(&resources, 24.0, "Laki-laki", 83.0, 10.5).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceUnavailable);
    assert_eq!(err.message, messages::RESOURCES_NOT_LOADED);
}

#[test]
fn test_validation_precedes_resource_check() {
    let dir = tempfile::tempdir().unwrap();
    let resources = PredictionResources::load(&ModelPaths::from_dir(dir.path()));

    let err = predict(&resources, 24.0, "Unknown", 83.0, 10.5).unwrap_err();
    assert_eq!(err.message, messages::INVALID_SEX);
}

#[test]
fn test_outcome_shape() {
    let resources = ModelFixture::new().load();

    let success = predict_outcome(&resources, 24.0, "Laki-laki", 83.0, 10.5);
    assert!(success.is_success());
    let json = serde_json::to_value(&success).unwrap();
    assert_eq!(json["status"], "Normal");
    assert!(json.get("error").is_none());

    let failure = predict_outcome(&resources, 24.0, "Unknown", 83.0, 10.5);
    let PredictionOutcome::Failure(body) = &failure else {
        panic!("expected failure");
    };
    assert_eq!(body.error, messages::INVALID_SEX);
    let json = serde_json::to_value(&failure).unwrap();
    assert_eq!(json.as_object().unwrap().len(), 1);
}
