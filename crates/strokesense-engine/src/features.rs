//! Feature row construction.
//!
//! Reproduces the training frame's derived columns exactly: encodings that
//! look odd here (marriage inferred from age, a constant residence) are what
//! the model was fitted on and must not drift.

use strokesense_core::features::{
    MARRIED_NO, MARRIED_YES, OCCUPATION_PRIVATE, RESIDENCE_URBAN, SMOKING_FORMER, SMOKING_NEVER,
};
use strokesense_core::{AgeBand, BmiCategory, FeatureRow, FeatureValue, GlucoseBand, HealthProfile};

/// Age at which the training frame's marriage proxy flips to `"Yes"`.
const MARRIAGE_AGE: f64 = 25.0;

/// Builds the fourteen-column row for one profile, in training-frame order.
pub fn build_feature_row(profile: &HealthProfile) -> FeatureRow {
    let bmi = profile.bmi();
    let ever_married = if profile.age >= MARRIAGE_AGE {
        MARRIED_YES
    } else {
        MARRIED_NO
    };
    let occupation = profile
        .work_type
        .map(|wt| wt.occupation())
        .unwrap_or(OCCUPATION_PRIVATE);
    let smoking_status = if profile.smoking {
        SMOKING_FORMER
    } else {
        SMOKING_NEVER
    };

    FeatureRow::new([
        profile.gender.as_str().into(),
        profile.age.into(),
        flag(profile.hypertension),
        flag(profile.heart_disease),
        ever_married.into(),
        occupation.into(),
        RESIDENCE_URBAN.into(),
        profile.glucose.into(),
        bmi.into(),
        smoking_status.into(),
        f64::from(AgeBand::from_age(profile.age).code()).into(),
        f64::from(BmiCategory::from_bmi(bmi).band()).into(),
        f64::from(GlucoseBand::from_level(profile.glucose).code()).into(),
        f64::from(risk_factor_count(profile)).into(),
    ])
}

/// Count of the five major risk factors present in a profile, 0 to 5.
pub fn risk_factor_count(profile: &HealthProfile) -> u8 {
    let mut count = 0;
    if profile.hypertension {
        count += 1;
    }
    if profile.heart_disease {
        count += 1;
    }
    if profile.smoking {
        count += 1;
    }
    if profile.bmi() >= 30.0 {
        count += 1;
    }
    if profile.glucose >= 126.0 {
        count += 1;
    }
    count
}

fn flag(value: bool) -> FeatureValue {
    FeatureValue::Number(if value { 1.0 } else { 0.0 })
}
