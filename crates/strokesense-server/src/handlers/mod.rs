//! HTTP route handlers for the assessment server.

pub mod predict;

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::dto::HealthResponse;
use crate::ServerState;

/// Health check endpoint.
///
/// Always reports `healthy`; the artifact flags tell operators whether
/// predictions run on the trained model or the rule-based fallback.
pub async fn health(State(state): State<Arc<ServerState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        model_loaded: state.predictor.weights_loaded(),
        preprocessor_loaded: state.predictor.preprocessor_loaded(),
    })
}
