//! Deployed model artifacts.
//!
//! The service never touches the pickled estimator from training. Deployment
//! ships two JSON artifacts distilled from it: [`ModelWeights`] (the
//! standardized-logistic form of the classifier) and [`Preprocessor`] (the
//! category lists and scaler statistics of the fitted column transformer).
//! Both are validated at load time so a bad export degrades the service to
//! rule-based scoring instead of failing per request.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use strokesense_core::{FeatureRow, FeatureValue, CATEGORICAL_COLUMNS, FEATURE_COLUMNS, FEATURE_COUNT};

use crate::error::ModelError;

/// Platt-style correction fitted against held-out data, applied to the raw
/// logistic output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Calibration {
    pub a: f64,
    pub b: f64,
}

impl Calibration {
    /// Maps a raw probability through the fitted sigmoid correction.
    pub fn transform(&self, p: f64) -> f64 {
        1.0 / (1.0 + (self.a * p + self.b).exp())
    }
}

/// Trained classifier weights in their deployed, distilled form.
///
/// `classes` records the label order of the training run; the positive
/// (stroke) class is last, and the predicted probability refers to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelWeights {
    pub name: String,
    pub model_type: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trained_at: Option<DateTime<Utc>>,
    pub n_features: usize,
    pub classes: Vec<u8>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calibration: Option<Calibration>,
}

impl ModelWeights {
    /// Loads and validates weights from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ModelError::io(path.display().to_string(), e))?;
        Self::from_json(&content)
    }

    /// Parses and validates weights from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let weights: Self = serde_json::from_str(json)?;
        weights.validate()?;
        Ok(weights)
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.n_features != FEATURE_COUNT {
            return Err(ModelError::schema(
                &self.name,
                format!(
                    "expects {} features, this service builds {}",
                    self.n_features, FEATURE_COUNT
                ),
            ));
        }
        if self.coefficients.len() != self.n_features {
            return Err(ModelError::schema(
                &self.name,
                format!(
                    "{} coefficients for {} features",
                    self.coefficients.len(),
                    self.n_features
                ),
            ));
        }
        if self.classes.len() != 2 {
            return Err(ModelError::schema(
                &self.name,
                format!("{} classes, binary classifier expected", self.classes.len()),
            ));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ModelError::schema(&self.name, "non-finite weight"));
        }
        Ok(())
    }
}

/// Preprocessor statistics: per-column category lists and the scaler fitted on
/// the training frame.
///
/// A category's index in its list is its ordinal code. `mean` and `scale`
/// apply to the fully encoded row, in [`FEATURE_COLUMNS`] order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preprocessor {
    pub feature_names: Vec<String>,
    pub categorical: HashMap<String, Vec<String>>,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl Preprocessor {
    /// Loads and validates preprocessor statistics from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ModelError::io(path.display().to_string(), e))?;
        Self::from_json(&content)
    }

    /// Parses and validates preprocessor statistics from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let preprocessor: Self = serde_json::from_str(json)?;
        preprocessor.validate()?;
        Ok(preprocessor)
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.feature_names.len() != FEATURE_COUNT {
            return Err(ModelError::schema(
                "preprocessor",
                format!(
                    "{} feature names, {} expected",
                    self.feature_names.len(),
                    FEATURE_COUNT
                ),
            ));
        }
        for (i, (ours, theirs)) in FEATURE_COLUMNS.iter().zip(&self.feature_names).enumerate() {
            if ours != theirs {
                return Err(ModelError::schema(
                    "preprocessor",
                    format!("column {} is '{}', expected '{}'", i, theirs, ours),
                ));
            }
        }
        if self.mean.len() != FEATURE_COUNT || self.scale.len() != FEATURE_COUNT {
            return Err(ModelError::schema(
                "preprocessor",
                format!(
                    "scaler has {} means and {} scales, {} expected",
                    self.mean.len(),
                    self.scale.len(),
                    FEATURE_COUNT
                ),
            ));
        }
        if self.mean.iter().any(|m| !m.is_finite()) {
            return Err(ModelError::schema("preprocessor", "non-finite scaler mean"));
        }
        if self.scale.iter().any(|s| !s.is_finite() || *s == 0.0) {
            return Err(ModelError::schema(
                "preprocessor",
                "scaler scale must be finite and non-zero",
            ));
        }
        for column in CATEGORICAL_COLUMNS {
            match self.categorical.get(column) {
                Some(values) if !values.is_empty() => {}
                Some(_) => {
                    return Err(ModelError::schema(
                        "preprocessor",
                        format!("empty category list for column '{}'", column),
                    ));
                }
                None => {
                    return Err(ModelError::schema(
                        "preprocessor",
                        format!("no category list for column '{}'", column),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Ordinal code for one categorical cell.
    pub fn encode_category(&self, column: &str, value: &str) -> Result<f64, ModelError> {
        let values = self.categorical.get(column).ok_or_else(|| {
            ModelError::schema(
                "preprocessor",
                format!("no category list for column '{}'", column),
            )
        })?;
        values
            .iter()
            .position(|v| v == value)
            .map(|i| i as f64)
            .ok_or_else(|| ModelError::UnknownCategory {
                column: column.to_string(),
                value: value.to_string(),
            })
    }

    /// Turns the mixed feature row fully numeric: ordinal-encodes categorical
    /// cells, then standardizes every column with the fitted mean and scale.
    pub fn transform(&self, row: &FeatureRow) -> Result<Vec<f64>, ModelError> {
        let mut out = Vec::with_capacity(FEATURE_COUNT);
        for (i, (column, value)) in row.iter().enumerate() {
            let raw = match value {
                FeatureValue::Number(n) => *n,
                FeatureValue::Text(s) => self.encode_category(column, s)?,
            };
            out.push((raw - self.mean[i]) / self.scale[i]);
        }
        Ok(out)
    }
}
