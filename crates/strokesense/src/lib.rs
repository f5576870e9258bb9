//! # Strokesense — Stroke risk assessment
//!
//! Strokesense scores a patient's stroke risk from twelve routine health
//! inputs. Predictions come from a **trained logistic-regression model** when
//! its JSON artifacts are available, and from a transparent rule-based score
//! when they are not, so an assessment is always produced.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use strokesense::prelude::*;
//! use std::path::Path;
//!
//! let predictor = Predictor::load(
//!     Path::new("models/stroke_model.json"),
//!     Path::new("models/preprocessor.json"),
//! );
//!
//! let profile = HealthProfile::from_json(&request_body)?;
//! let assessment = assess(&profile, &predictor)?;
//!
//! println!(
//!     "score {} ({}), via {}",
//!     assessment.risk_score, assessment.risk_level, assessment.method
//! );
//! ```
//!
//! ## Crate Structure
//!
//! | Crate | Description |
//! |-------|-------------|
//! | [`strokesense_core`] | Patient profiles, feature schema, clinical categories |
//! | [`strokesense_model`] | Model artifacts, trained scorer, rule-based fallback |
//! | [`strokesense_engine`] | Feature encoding and the assessment pipeline |
//!
//! The HTTP server lives in the separate `strokesense-server` binary crate.

// Re-export core types
pub use strokesense_core::{
    AgeBand, BmiCategory, BpCategory, CholesterolCategory, FeatureRow, FeatureValue, Gender,
    GlucoseBand, HealthProfile, ProfileError, RiskLevel, WorkType,
};

// Re-export the model layer
pub use strokesense_model::{
    rule_based_score, Calibration, ModelError, ModelWeights, PredictionMethod, Predictor,
    Preprocessor, TrainedScorer,
};

// Re-export the assessment engine
pub use strokesense_engine::{assess, build_feature_row, risk_factor_count, Assessment};

// Feature schema constants (rarely needed outside artifact validation)
#[doc(hidden)]
pub use strokesense_core::{CATEGORICAL_COLUMNS, FEATURE_COLUMNS, FEATURE_COUNT};

/// Prelude module for convenient imports.
///
/// Import everything you need with a single use statement:
///
/// ```rust,ignore
/// use strokesense::prelude::*;
/// ```
pub mod prelude {
    // Profiles and categories
    pub use crate::{
        BmiCategory, BpCategory, CholesterolCategory, HealthProfile, ProfileError, RiskLevel,
    };

    // Prediction
    pub use crate::{ModelError, PredictionMethod, Predictor};

    // Assessment
    pub use crate::{assess, Assessment};
}
