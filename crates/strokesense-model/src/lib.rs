//! Model artifacts and scoring backends for strokesense.
//!
//! This crate owns everything between a feature row and a probability:
//!
//! - [`Predictor`] — Recommended entry point: routes to the trained model,
//!   falls back to rules when artifacts are missing
//! - [`TrainedScorer`] — Distilled-logistic inference over validated artifacts
//! - [`ModelWeights`], [`Preprocessor`], [`Calibration`] — The deployed
//!   artifact pair and its optional output correction
//! - [`rule_based_score`] — The additive fallback point system
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use strokesense_model::Predictor;
//!
//! // Never fails: missing artifacts degrade to rule-based scoring.
//! let predictor = Predictor::load(
//!     Path::new("models/stroke_model.json"),
//!     Path::new("models/preprocessor.json"),
//! );
//! let (probability, method) = predictor.predict(&profile, &row)?;
//! ```

mod artifact;
mod error;
mod predictor;
mod rules;
mod scorer;

pub use artifact::{Calibration, ModelWeights, Preprocessor};
pub use error::ModelError;
pub use predictor::{PredictionMethod, Predictor};
pub use rules::rule_based_score;
pub use scorer::TrainedScorer;
