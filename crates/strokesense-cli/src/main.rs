//! Command-line companion for the assessment service.
//!
//! `inspect` reports what the deployed model artifacts contain; `score` runs
//! one assessment over a profile JSON file without starting the server.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use strokesense::{
    assess, HealthProfile, ModelWeights, PredictionMethod, Predictor, Preprocessor,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report what the model artifacts contain and how predictions will run
    Inspect {
        /// Path to the model weights JSON
        #[arg(long, default_value = "models/stroke_model.json")]
        model: PathBuf,
        /// Path to the preprocessor JSON
        #[arg(long, default_value = "models/preprocessor.json")]
        preprocessor: PathBuf,
    },
    /// Score one patient profile from a JSON file
    Score {
        /// Path to the profile JSON, in request-body format
        #[arg(long)]
        input: PathBuf,
        /// Path to the model weights JSON
        #[arg(long, default_value = "models/stroke_model.json")]
        model: PathBuf,
        /// Path to the preprocessor JSON
        #[arg(long, default_value = "models/preprocessor.json")]
        preprocessor: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    tracing::debug!("strokesense v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    match cli.command {
        Commands::Inspect {
            model,
            preprocessor,
        } => inspect(&model, &preprocessor),
        Commands::Score {
            input,
            model,
            preprocessor,
        } => score(&input, &model, &preprocessor),
    }
}

fn inspect(model: &Path, preprocessor: &Path) -> Result<()> {
    let weights = ModelWeights::from_file(model);
    let preprocessor = Preprocessor::from_file(preprocessor);

    let model_report = match &weights {
        Ok(w) => {
            // Validation guarantees a full, finite coefficient vector.
            let lo = w.coefficients.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = w
                .coefficients
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max);
            serde_json::json!({
                "loaded": true,
                "name": w.name,
                "model_type": w.model_type,
                "version": w.version,
                "trained_at": w.trained_at,
                "n_features": w.n_features,
                "intercept": w.intercept,
                "coefficient_range": [lo, hi],
                "calibrated": w.calibration.is_some(),
            })
        }
        Err(e) => serde_json::json!({ "loaded": false, "error": e.to_string() }),
    };

    let preprocessor_report = match &preprocessor {
        Ok(p) => serde_json::json!({
            "loaded": true,
            "feature_names": p.feature_names,
            "categorical": p.categorical,
            "scaler": { "mean": p.mean, "scale": p.scale },
        }),
        Err(e) => serde_json::json!({ "loaded": false, "error": e.to_string() }),
    };

    let method = if weights.is_ok() && preprocessor.is_ok() {
        PredictionMethod::Model
    } else {
        PredictionMethod::Rules
    };

    let report = serde_json::json!({
        "model": model_report,
        "preprocessor": preprocessor_report,
        "prediction_method": method.as_str(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn score(input: &Path, model: &Path, preprocessor: &Path) -> Result<()> {
    let body = std::fs::read_to_string(input)
        .with_context(|| format!("reading profile from {}", input.display()))?;
    let body: serde_json::Value = serde_json::from_str(&body)
        .with_context(|| format!("parsing profile JSON from {}", input.display()))?;
    let profile = HealthProfile::from_json(&body)?;

    let predictor = Predictor::load(model, preprocessor);
    let assessment = assess(&profile, &predictor)?;

    let report = serde_json::json!({
        "riskScore": assessment.risk_score,
        "riskLevel": assessment.risk_level,
        "riskLevelVi": assessment.risk_level.label_vi(),
        "strokeProbability": assessment.probability,
        "bmi": format!("{:.1}", assessment.bmi),
        "bmiCategory": assessment.bmi_category.label_vi(),
        "bpCategory": assessment.bp_category.label_vi(),
        "cholesterolCategory": assessment.cholesterol_category.label_vi(),
        "predictionMethod": assessment.method.as_str(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
