//! Risk prediction HTTP handler.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::{error, info};

use strokesense_core::HealthProfile;
use strokesense_engine::assess;

use crate::dto::PredictResponse;
use crate::error::AppError;
use crate::ServerState;

/// Runs one assessment over the posted health profile.
///
/// The body is taken as loose JSON so that field validation happens in
/// [`HealthProfile::from_json`], which knows the client's conventions. A body
/// that is not JSON at all is reported through the same error envelope.
pub async fn predict(
    State(state): State<Arc<ServerState>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<PredictResponse>, AppError> {
    let Json(body) = body?;
    let profile = HealthProfile::from_json(&body)?;

    let assessment = assess(&profile, &state.predictor).map_err(|e| {
        error!("Assessment failed: {}", e);
        AppError::from(e)
    })?;

    info!(
        "Assessment complete: score={} level={} method={}",
        assessment.risk_score, assessment.risk_level, assessment.method
    );

    Ok(Json(assessment.into()))
}
