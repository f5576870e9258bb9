//! Rule-based fallback scoring.
//!
//! Used whenever the trained artifacts are unavailable. An additive point
//! system over the raw inputs: each factor contributes a fixed number of
//! points and the total is capped at 100. The point table matches the
//! clinical screening sheet the mobile client documents, so degraded-mode
//! scores stay explainable to users.

use strokesense_core::{Gender, HealthProfile, WorkType};

/// Fallback risk score on the 0-100 scale.
pub fn rule_based_score(profile: &HealthProfile) -> u8 {
    let mut score: u32 = 0;

    let age = profile.age;
    if age >= 75.0 {
        score += 25;
    } else if age >= 65.0 {
        score += 20;
    } else if age >= 55.0 {
        score += 15;
    } else if age >= 45.0 {
        score += 10;
    } else if age >= 35.0 {
        score += 5;
    }

    if profile.gender == Gender::Male {
        score += 3;
    }

    let bmi = profile.bmi();
    if bmi >= 30.0 {
        score += 10;
    } else if bmi >= 25.0 {
        score += 6;
    } else if bmi >= 23.0 {
        score += 3;
    }

    let (sys, dia) = (profile.systolic_bp, profile.diastolic_bp);
    if sys >= 180.0 || dia >= 110.0 {
        score += 20;
    } else if sys >= 160.0 || dia >= 100.0 {
        score += 15;
    } else if sys >= 140.0 || dia >= 90.0 {
        score += 10;
    } else if sys >= 130.0 || dia >= 85.0 {
        score += 5;
    }

    let cholesterol = profile.cholesterol;
    if cholesterol >= 240.0 {
        score += 10;
    } else if cholesterol >= 200.0 {
        score += 6;
    } else if cholesterol >= 180.0 {
        score += 3;
    }

    let glucose = profile.glucose;
    if glucose >= 126.0 {
        score += 8;
    } else if glucose >= 100.0 {
        score += 5;
    }

    if profile.hypertension {
        score += 10;
    }
    if profile.heart_disease {
        score += 12;
    }
    if profile.smoking {
        score += 10;
    }

    match profile.work_type {
        Some(WorkType::Sedentary) => score += 5,
        Some(WorkType::Moderate) => score += 2,
        _ => {}
    }

    score.min(100) as u8
}
