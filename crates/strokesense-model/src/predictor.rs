//! Routes each assessment to the trained scorer or the rule-based fallback.

use std::path::Path;

use tracing::{info, warn};

use strokesense_core::{FeatureRow, HealthProfile};

use crate::artifact::{ModelWeights, Preprocessor};
use crate::error::ModelError;
use crate::rules::rule_based_score;
use crate::scorer::TrainedScorer;

/// How a probability was produced. The string forms go to clients verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionMethod {
    Model,
    Rules,
}

impl PredictionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "AI",
            Self::Rules => "Rule-based",
        }
    }
}

impl std::fmt::Display for PredictionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Owns whichever scoring paths are available and routes each request.
///
/// Loading never fails: a missing or invalid artifact demotes the service to
/// rule-based scoring, and the per-artifact load flags keep `/health` honest
/// about which files were actually usable.
pub struct Predictor {
    trained: Option<TrainedScorer>,
    weights_loaded: bool,
    preprocessor_loaded: bool,
}

impl Predictor {
    /// Loads both artifacts from disk, degrading on any failure.
    pub fn load(weights_path: &Path, preprocessor_path: &Path) -> Self {
        let weights = match ModelWeights::from_file(weights_path) {
            Ok(weights) => {
                info!(
                    "Loaded model weights '{}' ({}) from {}",
                    weights.name,
                    weights.model_type,
                    weights_path.display()
                );
                Some(weights)
            }
            Err(e) => {
                warn!("Model weights unavailable: {}", e);
                None
            }
        };

        let preprocessor = match Preprocessor::from_file(preprocessor_path) {
            Ok(preprocessor) => {
                info!("Loaded preprocessor from {}", preprocessor_path.display());
                Some(preprocessor)
            }
            Err(e) => {
                warn!("Preprocessor unavailable: {}", e);
                None
            }
        };

        let weights_loaded = weights.is_some();
        let preprocessor_loaded = preprocessor.is_some();
        let trained = match (weights, preprocessor) {
            (Some(w), Some(p)) => Some(TrainedScorer::new(w, p)),
            _ => {
                warn!("Falling back to rule-based scoring");
                None
            }
        };

        Self {
            trained,
            weights_loaded,
            preprocessor_loaded,
        }
    }

    /// Wraps an already-constructed scorer; both load flags read true.
    pub fn with_scorer(scorer: TrainedScorer) -> Self {
        Self {
            trained: Some(scorer),
            weights_loaded: true,
            preprocessor_loaded: true,
        }
    }

    /// A predictor with no trained path at all.
    pub fn rule_based() -> Self {
        Self {
            trained: None,
            weights_loaded: false,
            preprocessor_loaded: false,
        }
    }

    pub fn weights_loaded(&self) -> bool {
        self.weights_loaded
    }

    pub fn preprocessor_loaded(&self) -> bool {
        self.preprocessor_loaded
    }

    /// `true` when assessments run through the trained model.
    pub fn is_trained(&self) -> bool {
        self.trained.is_some()
    }

    /// Name of the deployed model, when one is loaded.
    pub fn model_name(&self) -> Option<&str> {
        self.trained.as_ref().map(|s| s.name())
    }

    /// Probability of stroke plus the method that produced it.
    ///
    /// The trained path consumes the feature row; the fallback scores the raw
    /// profile and reports its 0-100 total as a probability.
    pub fn predict(
        &self,
        profile: &HealthProfile,
        row: &FeatureRow,
    ) -> Result<(f64, PredictionMethod), ModelError> {
        match &self.trained {
            Some(scorer) => {
                let probability = scorer.predict(row)?;
                Ok((probability, PredictionMethod::Model))
            }
            None => {
                let score = rule_based_score(profile);
                Ok((f64::from(score) / 100.0, PredictionMethod::Rules))
            }
        }
    }
}
