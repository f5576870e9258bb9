//! Threshold-based clinical categories.
//!
//! Every type here is a total function of one or two numeric inputs with fixed
//! cutoffs. The Vietnamese labels are part of the response contract and match
//! the strings the mobile client displays; the English forms are used for the
//! `riskLevel` field and for logs.
//!
//! BMI cutoffs follow the Asian-population scale (23/25/30, not 25/30/35).

use serde::Serialize;

/// Overall risk bucket derived from the integer risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Buckets a 0-100 risk score: 65 and above is high, 35 and above medium.
    pub fn from_score(score: u8) -> Self {
        if score >= 65 {
            Self::High
        } else if score >= 35 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn label_vi(&self) -> &'static str {
        match self {
            Self::Low => "Nguy cơ thấp",
            Self::Medium => "Nguy cơ trung bình",
            Self::High => "Nguy cơ cao",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// BMI category on the Asian-population scale.
///
/// | Range | Category |
/// |-------|----------|
/// | below 18.5 | `Underweight` |
/// | 18.5 to below 23 | `Normal` |
/// | 23 to below 25 | `MildlyOverweight` |
/// | 25 to below 30 | `Overweight` |
/// | 30 and above | `Obese` |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    MildlyOverweight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 23.0 {
            Self::Normal
        } else if bmi < 25.0 {
            Self::MildlyOverweight
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Ordinal code of the category, used as the model's BMI band feature.
    pub fn band(&self) -> u8 {
        match self {
            Self::Underweight => 0,
            Self::Normal => 1,
            Self::MildlyOverweight => 2,
            Self::Overweight => 3,
            Self::Obese => 4,
        }
    }

    pub fn label_vi(&self) -> &'static str {
        match self {
            Self::Underweight => "Thiếu cân",
            Self::Normal => "Bình thường",
            Self::MildlyOverweight => "Thừa cân nhẹ",
            Self::Overweight => "Thừa cân",
            Self::Obese => "Béo phì",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::MildlyOverweight => "mildly overweight",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        };
        write!(f, "{}", s)
    }
}

/// Blood-pressure category; either bound crossing a cutoff elevates the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BpCategory {
    Normal,
    PreHypertension,
    Stage1,
    Stage2,
    Stage3,
}

impl BpCategory {
    pub fn from_reading(systolic: f64, diastolic: f64) -> Self {
        if systolic >= 180.0 || diastolic >= 110.0 {
            Self::Stage3
        } else if systolic >= 160.0 || diastolic >= 100.0 {
            Self::Stage2
        } else if systolic >= 140.0 || diastolic >= 90.0 {
            Self::Stage1
        } else if systolic >= 130.0 || diastolic >= 85.0 {
            Self::PreHypertension
        } else {
            Self::Normal
        }
    }

    pub fn label_vi(&self) -> &'static str {
        match self {
            Self::Normal => "Bình thường",
            Self::PreHypertension => "Tiền tăng huyết áp",
            Self::Stage1 => "Tăng huyết áp độ 1",
            Self::Stage2 => "Tăng huyết áp độ 2",
            Self::Stage3 => "Tăng huyết áp độ 3",
        }
    }
}

impl std::fmt::Display for BpCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Normal => "normal",
            Self::PreHypertension => "pre-hypertension",
            Self::Stage1 => "stage 1 hypertension",
            Self::Stage2 => "stage 2 hypertension",
            Self::Stage3 => "stage 3 hypertension",
        };
        write!(f, "{}", s)
    }
}

/// Total cholesterol category in mg/dL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CholesterolCategory {
    Normal,
    BorderlineHigh,
    High,
}

impl CholesterolCategory {
    pub fn from_level(mg_dl: f64) -> Self {
        if mg_dl >= 240.0 {
            Self::High
        } else if mg_dl >= 200.0 {
            Self::BorderlineHigh
        } else {
            Self::Normal
        }
    }

    pub fn label_vi(&self) -> &'static str {
        match self {
            Self::Normal => "Bình thường",
            Self::BorderlineHigh => "Biên cao",
            Self::High => "Cao",
        }
    }
}

impl std::fmt::Display for CholesterolCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Normal => "normal",
            Self::BorderlineHigh => "borderline high",
            Self::High => "high",
        };
        write!(f, "{}", s)
    }
}

/// Age band fed to the model as an ordinal feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBand {
    Young,
    Adult,
    MiddleAged,
    Senior,
}

impl AgeBand {
    pub fn from_age(age: f64) -> Self {
        if age < 30.0 {
            Self::Young
        } else if age < 45.0 {
            Self::Adult
        } else if age < 60.0 {
            Self::MiddleAged
        } else {
            Self::Senior
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Self::Young => 0,
            Self::Adult => 1,
            Self::MiddleAged => 2,
            Self::Senior => 3,
        }
    }
}

/// Average glucose band on the ADA fasting cutoffs (100 and 126 mg/dL).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlucoseBand {
    Normal,
    Prediabetic,
    Diabetic,
}

impl GlucoseBand {
    pub fn from_level(mg_dl: f64) -> Self {
        if mg_dl < 100.0 {
            Self::Normal
        } else if mg_dl < 126.0 {
            Self::Prediabetic
        } else {
            Self::Diabetic
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Prediabetic => 1,
            Self::Diabetic => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_boundaries() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(34), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(35), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(64), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(65), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(100), RiskLevel::High);
    }

    #[test]
    fn risk_level_serializes_lowercase() {
        assert_eq!(serde_json::to_value(RiskLevel::Low).unwrap(), "low");
        assert_eq!(serde_json::to_value(RiskLevel::Medium).unwrap(), "medium");
        assert_eq!(serde_json::to_value(RiskLevel::High).unwrap(), "high");
    }

    #[test]
    fn bmi_exactly_25_is_overweight_not_normal() {
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
    }

    #[test]
    fn bmi_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(22.9), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(23.0), BmiCategory::MildlyOverweight);
        assert_eq!(BmiCategory::from_bmi(24.9), BmiCategory::MildlyOverweight);
        assert_eq!(BmiCategory::from_bmi(29.9), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn bmi_band_tracks_category() {
        assert_eq!(BmiCategory::from_bmi(17.0).band(), 0);
        assert_eq!(BmiCategory::from_bmi(20.0).band(), 1);
        assert_eq!(BmiCategory::from_bmi(24.0).band(), 2);
        assert_eq!(BmiCategory::from_bmi(27.0).band(), 3);
        assert_eq!(BmiCategory::from_bmi(31.0).band(), 4);
    }

    #[test]
    fn bp_either_bound_elevates_stage() {
        assert_eq!(BpCategory::from_reading(120.0, 80.0), BpCategory::Normal);
        assert_eq!(
            BpCategory::from_reading(130.0, 80.0),
            BpCategory::PreHypertension
        );
        assert_eq!(
            BpCategory::from_reading(120.0, 85.0),
            BpCategory::PreHypertension
        );
        assert_eq!(BpCategory::from_reading(140.0, 80.0), BpCategory::Stage1);
        assert_eq!(BpCategory::from_reading(120.0, 90.0), BpCategory::Stage1);
        assert_eq!(BpCategory::from_reading(160.0, 80.0), BpCategory::Stage2);
        assert_eq!(BpCategory::from_reading(120.0, 100.0), BpCategory::Stage2);
        assert_eq!(BpCategory::from_reading(180.0, 80.0), BpCategory::Stage3);
        assert_eq!(BpCategory::from_reading(120.0, 110.0), BpCategory::Stage3);
    }

    #[test]
    fn bp_boundary_just_below_cutoff_stays_lower_stage() {
        assert_eq!(BpCategory::from_reading(139.9, 89.9), BpCategory::PreHypertension);
        assert_eq!(BpCategory::from_reading(179.9, 109.9), BpCategory::Stage2);
    }

    #[test]
    fn cholesterol_boundaries() {
        assert_eq!(
            CholesterolCategory::from_level(199.9),
            CholesterolCategory::Normal
        );
        assert_eq!(
            CholesterolCategory::from_level(200.0),
            CholesterolCategory::BorderlineHigh
        );
        assert_eq!(
            CholesterolCategory::from_level(239.9),
            CholesterolCategory::BorderlineHigh
        );
        assert_eq!(
            CholesterolCategory::from_level(240.0),
            CholesterolCategory::High
        );
    }

    #[test]
    fn age_band_boundaries() {
        assert_eq!(AgeBand::from_age(29.9).code(), 0);
        assert_eq!(AgeBand::from_age(30.0).code(), 1);
        assert_eq!(AgeBand::from_age(44.9).code(), 1);
        assert_eq!(AgeBand::from_age(45.0).code(), 2);
        assert_eq!(AgeBand::from_age(59.9).code(), 2);
        assert_eq!(AgeBand::from_age(60.0).code(), 3);
    }

    #[test]
    fn glucose_band_boundaries() {
        assert_eq!(GlucoseBand::from_level(99.9), GlucoseBand::Normal);
        assert_eq!(GlucoseBand::from_level(100.0), GlucoseBand::Prediabetic);
        assert_eq!(GlucoseBand::from_level(125.9), GlucoseBand::Prediabetic);
        assert_eq!(GlucoseBand::from_level(126.0), GlucoseBand::Diabetic);
    }

    #[test]
    fn vietnamese_labels_match_client_strings() {
        assert_eq!(RiskLevel::Medium.label_vi(), "Nguy cơ trung bình");
        assert_eq!(BmiCategory::Overweight.label_vi(), "Thừa cân");
        assert_eq!(BpCategory::Stage1.label_vi(), "Tăng huyết áp độ 1");
        assert_eq!(CholesterolCategory::High.label_vi(), "Cao");
    }
}
