//! Inference over the distilled classifier.

use strokesense_core::FeatureRow;

use crate::artifact::{ModelWeights, Preprocessor};
use crate::error::ModelError;

/// The trained scoring path: preprocessor plus logistic weights.
///
/// Both artifacts validate themselves against the fourteen-column row shape at
/// load time, so a constructed scorer is always internally consistent.
pub struct TrainedScorer {
    weights: ModelWeights,
    preprocessor: Preprocessor,
}

impl TrainedScorer {
    pub fn new(weights: ModelWeights, preprocessor: Preprocessor) -> Self {
        Self { weights, preprocessor }
    }

    /// Name of the deployed model, from the weights artifact.
    pub fn name(&self) -> &str {
        &self.weights.name
    }

    pub fn weights(&self) -> &ModelWeights {
        &self.weights
    }

    pub fn preprocessor(&self) -> &Preprocessor {
        &self.preprocessor
    }

    /// Probability of the positive (stroke) class for one feature row.
    pub fn predict(&self, row: &FeatureRow) -> Result<f64, ModelError> {
        let x = self.preprocessor.transform(row)?;
        let z: f64 = self
            .weights
            .coefficients
            .iter()
            .zip(&x)
            .map(|(w, v)| w * v)
            .sum::<f64>()
            + self.weights.intercept;
        let raw = sigmoid(z);
        let probability = match self.weights.calibration {
            Some(calibration) => calibration.transform(raw),
            None => raw,
        };
        if !probability.is_finite() {
            return Err(ModelError::Inference(
                "probability is not finite".to_string(),
            ));
        }
        Ok(probability)
    }
}

pub(crate) fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
