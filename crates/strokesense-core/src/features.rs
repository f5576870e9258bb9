//! The fixed-order feature row consumed by the model.
//!
//! Column names and categorical vocabulary here are training-frame data and
//! must match the deployed preprocessor artifact byte for byte, including the
//! Vietnamese-named derived columns.

use serde::Serialize;

/// Number of columns in the feature row.
pub const FEATURE_COUNT: usize = 14;

/// Column names of the training frame, in row order.
pub const FEATURE_COLUMNS: [&str; FEATURE_COUNT] = [
    "gender",
    "age",
    "hypertension",
    "heart_disease",
    "ever_married",
    "work_type",
    "Residence_type",
    "avg_glucose_level",
    "bmi",
    "smoking_status",
    "nhomTuoi",
    "nhomBMI",
    "nhomGlucose",
    "diemNguyCo",
];

/// Columns the row builder fills with categorical strings; every other column
/// is numeric.
pub const CATEGORICAL_COLUMNS: [&str; 5] = [
    "gender",
    "ever_married",
    "work_type",
    "Residence_type",
    "smoking_status",
];

// Categorical vocabulary of the training frame.
pub const OCCUPATION_PRIVATE: &str = "Private";
pub const OCCUPATION_SELF_EMPLOYED: &str = "Self-employed";
pub const OCCUPATION_GOVERNMENT: &str = "Govt_job";
pub const RESIDENCE_URBAN: &str = "Urban";
pub const MARRIED_YES: &str = "Yes";
pub const MARRIED_NO: &str = "No";
pub const SMOKING_FORMER: &str = "formerly smoked";
pub const SMOKING_NEVER: &str = "never smoked";

/// One cell of the feature row.
///
/// The row mixes categorical strings and numerics the same way the training
/// frame did; the preprocessor turns the whole row numeric before inference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Text(&'static str),
    Number(f64),
}

impl FeatureValue {
    pub fn as_text(&self) -> Option<&'static str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Text(_) => None,
            Self::Number(n) => Some(*n),
        }
    }
}

impl From<f64> for FeatureValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&'static str> for FeatureValue {
    fn from(s: &'static str) -> Self {
        Self::Text(s)
    }
}

/// A complete fourteen-column feature row in training-frame order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRow {
    values: [FeatureValue; FEATURE_COUNT],
}

impl FeatureRow {
    pub fn new(values: [FeatureValue; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[FeatureValue] {
        &self.values
    }

    /// Looks a cell up by its training-frame column name.
    pub fn get(&self, column: &str) -> Option<&FeatureValue> {
        FEATURE_COLUMNS
            .iter()
            .position(|c| *c == column)
            .map(|i| &self.values[i])
    }

    /// Iterates `(column name, value)` pairs in row order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FeatureValue)> {
        FEATURE_COLUMNS.iter().copied().zip(self.values.iter())
    }
}
