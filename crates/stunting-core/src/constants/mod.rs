// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Sex and class labels, scaling thresholds, and user-facing messages

//! Constants module
//!
//! Constants are grouped by domain. User-facing strings are Indonesian because
//! the consuming client application and its users are.

/// Accepted sex labels and their numeric feature encoding
pub mod sex_labels {
    /// Label for male children
    pub const MALE: &str = "Laki-laki";
    /// Label for female children
    pub const FEMALE: &str = "Perempuan";
    /// Feature code for male
    pub const MALE_CODE: u8 = 0;
    /// Feature code for female
    pub const FEMALE_CODE: u8 = 1;
}

/// Growth status label names, in classifier output order
pub mod class_labels {
    /// Index 0
    pub const SEVERELY_STUNTED: &str = "Severely Stunted";
    /// Index 1
    pub const STUNTED: &str = "Stunted";
    /// Index 2
    pub const NORMAL: &str = "Normal";
    /// Index 3
    pub const TALL: &str = "Tall";
}

/// Numeric thresholds used by the prediction pipeline
pub mod thresholds {
    /// Number of input features: `[age, sex, height, weight]`
    pub const FEATURE_COUNT: usize = 4;
    /// Number of growth classes produced by the classifier
    pub const CLASS_COUNT: usize = 4;
    /// Damping factor applied to the raw top-class score percentage
    pub const CONFIDENCE_DAMPING: f64 = 0.9;
    /// Maximum displayed confidence percentage
    pub const CONFIDENCE_CAP: f64 = 90.0;
    /// Deviations smaller than this (in percentage points) count as "within average"
    pub const DEVIATION_THRESHOLD: f64 = 0.1;
    /// Children younger than this (months) get the exclusive-feeding recommendation
    pub const INFANT_AGE_MONTHS: f64 = 6.0;
}

/// Validation and status messages returned to callers
pub mod messages {
    /// Age missing, non-numeric, or negative
    pub const INVALID_AGE: &str = "Umur harus berupa angka positif.";
    /// Sex label not one of the two accepted values
    pub const INVALID_SEX: &str = "Jenis kelamin harus 'Laki-laki' atau 'Perempuan'.";
    /// Height missing, non-numeric, or not positive
    pub const INVALID_HEIGHT: &str = "Tinggi badan harus berupa angka positif.";
    /// Weight missing, non-numeric, or not positive
    pub const INVALID_WEIGHT: &str = "Berat badan harus berupa angka positif.";
    /// Request body lacks one of the four inputs
    pub const MISSING_FIELDS: &str = "All fields (sex, age, height, weight) are required";
    /// Prediction requested before the model context loaded
    pub const RESOURCES_NOT_LOADED: &str = "Model or scaler not loaded properly";
    /// Placeholder explanation when no normative row exists
    pub const NORMAL_DATA_NOT_FOUND: &str = "Data normal tidak ditemukan.";
    /// Placeholder description for an unrecognized status
    pub const UNKNOWN_STATUS: &str = "Status tidak dikenali.";
    /// Status line reported by the root endpoint
    pub const API_RUNNING: &str = "API is running";
}
