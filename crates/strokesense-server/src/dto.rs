//! Data transfer objects for HTTP message serialization.

use serde::Serialize;
use strokesense_core::RiskLevel;
use strokesense_engine::Assessment;

// === Health Types ===

/// Response from the health probe, reporting which model artifacts loaded.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_loaded: bool,
    pub preprocessor_loaded: bool,
}

// === Prediction Types ===

/// Complete assessment payload returned to clients.
///
/// Field casing and types follow the mobile client's contract: camelCase
/// keys, Vietnamese category labels, and BMI pre-formatted as a string.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictResponse {
    pub success: bool,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub risk_level_vi: &'static str,
    pub stroke_probability: f64,
    /// BMI rounded to one decimal place, ready for display.
    pub bmi: String,
    pub bmi_category: &'static str,
    pub bp_category: &'static str,
    pub cholesterol_category: &'static str,
    pub prediction_method: &'static str,
}

impl From<Assessment> for PredictResponse {
    fn from(assessment: Assessment) -> Self {
        Self {
            success: true,
            risk_score: assessment.risk_score,
            risk_level: assessment.risk_level,
            risk_level_vi: assessment.risk_level.label_vi(),
            stroke_probability: assessment.probability,
            bmi: format!("{:.1}", assessment.bmi),
            bmi_category: assessment.bmi_category.label_vi(),
            bp_category: assessment.bp_category.label_vi(),
            cholesterol_category: assessment.cholesterol_category.label_vi(),
            prediction_method: assessment.method.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strokesense_core::{BmiCategory, BpCategory, CholesterolCategory, RiskLevel};
    use strokesense_model::PredictionMethod;

    #[test]
    fn response_serializes_with_camel_case_keys() {
        let assessment = Assessment {
            risk_score: 28,
            risk_level: RiskLevel::Low,
            probability: 0.28,
            bmi: 24.221453287197235,
            bmi_category: BmiCategory::MildlyOverweight,
            bp_category: BpCategory::Stage1,
            cholesterol_category: CholesterolCategory::High,
            method: PredictionMethod::Rules,
        };

        let value = serde_json::to_value(PredictResponse::from(assessment)).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["riskScore"], 28);
        assert_eq!(value["riskLevel"], "low");
        assert_eq!(value["riskLevelVi"], "Nguy cơ thấp");
        assert_eq!(value["strokeProbability"], 0.28);
        assert_eq!(value["bmi"], "24.2");
        assert_eq!(value["bmiCategory"], "Thừa cân nhẹ");
        assert_eq!(value["bpCategory"], "Tăng huyết áp độ 1");
        assert_eq!(value["cholesterolCategory"], "Cao");
        assert_eq!(value["predictionMethod"], "Rule-based");
    }
}
