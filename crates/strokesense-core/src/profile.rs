//! Patient input parsing.
//!
//! `POST /predict` bodies arrive as loosely-typed JSON from mobile and web
//! clients: numbers may be integers or floats, flags may be booleans or 0/1,
//! and enum-like strings are not guaranteed to match the documented values.
//! [`HealthProfile::from_json`] normalizes all of that into one typed record.

use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;

/// Errors raised while reading a profile out of a request body.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// A required field is absent from the request body.
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// A field is present but its value cannot be used.
    #[error("Invalid value for {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },
}

/// Patient gender as reported by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            _ => Ok(Self::Female),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Male => "male",
            Self::Female => "female",
        };
        write!(f, "{}", s)
    }
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Self-reported activity level of the patient's daily work.
///
/// | Value | Occupation encoding |
/// |-------|---------------------|
/// | `sedentary` | `Private` |
/// | `moderate` | `Self-employed` |
/// | `active` | `Govt_job` |
///
/// Unrecognized strings keep the `Private` occupation encoding but earn no
/// points in the rule-based score, so the profile stores them as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkType {
    Sedentary,
    Moderate,
    Active,
}

impl FromStr for WorkType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sedentary" => Ok(Self::Sedentary),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for WorkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Sedentary => "sedentary",
            Self::Moderate => "moderate",
            Self::Active => "active",
        };
        write!(f, "{}", s)
    }
}

impl WorkType {
    /// The occupation category the training frame used for this work style.
    pub fn occupation(&self) -> &'static str {
        match self {
            Self::Sedentary => crate::features::OCCUPATION_PRIVATE,
            Self::Moderate => crate::features::OCCUPATION_SELF_EMPLOYED,
            Self::Active => crate::features::OCCUPATION_GOVERNMENT,
        }
    }
}

/// Request body fields, in the order missing-field errors report them.
pub const REQUIRED_FIELDS: [&str; 12] = [
    "age",
    "gender",
    "heightCm",
    "weightKg",
    "systolicBP",
    "diastolicBP",
    "cholesterol",
    "glucose",
    "hypertension",
    "heartDisease",
    "smoking",
    "workType",
];

/// One patient's inputs for a single assessment.
///
/// Transient: built per request, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthProfile {
    pub age: f64,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub systolic_bp: f64,
    pub diastolic_bp: f64,
    pub cholesterol: f64,
    pub glucose: f64,
    pub hypertension: bool,
    pub heart_disease: bool,
    pub smoking: bool,
    /// `None` when the client sent a string outside the documented values.
    pub work_type: Option<WorkType>,
}

impl HealthProfile {
    /// Parses a profile out of a request body.
    ///
    /// All fields in [`REQUIRED_FIELDS`] must be present; the first absent one
    /// is reported as [`ProfileError::MissingField`]. Type coercion is loose:
    /// any JSON number works for numeric fields, flags accept booleans or
    /// numbers (non-zero reads as true), and `gender` strings other than
    /// `"male"` read as female.
    pub fn from_json(data: &Value) -> Result<Self, ProfileError> {
        for field in REQUIRED_FIELDS {
            if data.get(field).is_none() {
                return Err(ProfileError::MissingField(field));
            }
        }

        let height_cm = number(data, "heightCm")?;
        if height_cm == 0.0 {
            return Err(ProfileError::InvalidField {
                field: "heightCm",
                reason: "height of zero makes BMI undefined".to_string(),
            });
        }

        Ok(Self {
            age: number(data, "age")?,
            gender: text(data, "gender")?.parse().unwrap_or(Gender::Female),
            height_cm,
            weight_kg: number(data, "weightKg")?,
            systolic_bp: number(data, "systolicBP")?,
            diastolic_bp: number(data, "diastolicBP")?,
            cholesterol: number(data, "cholesterol")?,
            glucose: number(data, "glucose")?,
            hypertension: flag(data, "hypertension")?,
            heart_disease: flag(data, "heartDisease")?,
            smoking: flag(data, "smoking")?,
            work_type: text(data, "workType")?.parse().ok(),
        })
    }

    /// Body mass index in kg/m², converting height from centimetres.
    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm / 100.0;
        self.weight_kg / (height_m * height_m)
    }
}

fn number(data: &Value, field: &'static str) -> Result<f64, ProfileError> {
    data[field].as_f64().ok_or_else(|| ProfileError::InvalidField {
        field,
        reason: format!("expected a number, got {}", kind(&data[field])),
    })
}

fn text<'a>(data: &'a Value, field: &'static str) -> Result<&'a str, ProfileError> {
    data[field].as_str().ok_or_else(|| ProfileError::InvalidField {
        field,
        reason: format!("expected a string, got {}", kind(&data[field])),
    })
}

fn flag(data: &Value, field: &'static str) -> Result<bool, ProfileError> {
    match &data[field] {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => Ok(n.as_f64().is_some_and(|v| v != 0.0)),
        other => Err(ProfileError::InvalidField {
            field,
            reason: format!("expected a boolean, got {}", kind(other)),
        }),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
