//! Core domain types for strokesense.
//!
//! This crate provides the fundamental types shared across the strokesense
//! workspace:
//!
//! - [`HealthProfile`] — One patient's inputs, parsed from loosely-typed JSON
//! - [`ProfileError`] — Validation errors raised while reading a profile
//! - [`RiskLevel`], [`BmiCategory`], [`BpCategory`], [`CholesterolCategory`] —
//!   Threshold-based clinical categories with bilingual labels
//! - [`FeatureRow`] and [`FeatureValue`] — The fixed-order row fed to the model
//!
//! # Example
//!
//! ```rust
//! use strokesense_core::{BmiCategory, RiskLevel};
//!
//! let category = BmiCategory::from_bmi(25.0);
//! assert_eq!(category, BmiCategory::Overweight);
//!
//! let level = RiskLevel::from_score(42);
//! assert_eq!(level.as_str(), "medium");
//! ```

pub mod categories;
pub mod features;
pub mod profile;

pub use categories::{
    AgeBand, BmiCategory, BpCategory, CholesterolCategory, GlucoseBand, RiskLevel,
};
pub use features::{
    FeatureRow, FeatureValue, CATEGORICAL_COLUMNS, FEATURE_COLUMNS, FEATURE_COUNT,
};
pub use profile::{Gender, HealthProfile, ProfileError, WorkType};
