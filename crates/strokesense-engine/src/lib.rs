//! Assessment pipeline for strokesense.
//!
//! This crate runs one profile through the full scoring path:
//!
//! - [`assess`] — Feature construction, prediction, and categorization
//! - [`Assessment`] — The complete result of one run
//! - [`build_feature_row`] — The training-frame row for a profile
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use strokesense_engine::assess;
//!
//! let assessment = assess(&profile, &predictor)?;
//! println!(
//!     "{} ({}) via {}",
//!     assessment.risk_score, assessment.risk_level, assessment.method
//! );
//! ```
//!
//! # Execution Model
//!
//! 1. Build the fourteen-column feature row (unit conversions, categorical
//!    encodings, threshold bands).
//! 2. Ask the [`Predictor`] for a stroke probability; it decides between the
//!    trained model and the rule-based fallback.
//! 3. Truncate `probability * 100` to the integer risk score and derive the
//!    display categories from the raw inputs.

mod features;

pub use features::{build_feature_row, risk_factor_count};

use tracing::debug;

use strokesense_core::{
    BmiCategory, BpCategory, CholesterolCategory, HealthProfile, RiskLevel,
};
use strokesense_model::{ModelError, PredictionMethod, Predictor};

/// Complete result of one risk assessment.
#[derive(Debug, Clone)]
pub struct Assessment {
    /// Integer risk score, 0 to 100.
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    /// Probability of the positive (stroke) class.
    pub probability: f64,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bp_category: BpCategory,
    pub cholesterol_category: CholesterolCategory,
    /// Which scoring path produced the probability.
    pub method: PredictionMethod,
}

/// Runs one profile through feature construction, prediction, and
/// categorization.
pub fn assess(profile: &HealthProfile, predictor: &Predictor) -> Result<Assessment, ModelError> {
    let row = build_feature_row(profile);
    let (probability, method) = predictor.predict(profile, &row)?;
    let risk_score = (probability * 100.0).floor() as u8;
    let bmi = profile.bmi();

    debug!(
        "Assessed profile: score={} probability={:.4} method={}",
        risk_score, probability, method
    );

    Ok(Assessment {
        risk_score,
        risk_level: RiskLevel::from_score(risk_score),
        probability,
        bmi,
        bmi_category: BmiCategory::from_bmi(bmi),
        bp_category: BpCategory::from_reading(profile.systolic_bp, profile.diastolic_bp),
        cholesterol_category: CholesterolCategory::from_level(profile.cholesterol),
        method,
    })
}
