//! HTTP server entry point and Axum router setup.
//!
//! Loads the model artifacts into shared state, configures the two routes,
//! and starts the Axum server on the configured port (5000 by default).

mod dto;
mod error;
mod handlers;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use strokesense_model::Predictor;

/// Shared server state accessible from all handlers.
///
/// The predictor is immutable after startup, so handlers share it without
/// locking.
pub struct ServerState {
    pub predictor: Predictor,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let state = Arc::new(init_server_state());

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(5000);
    let addr = format!("0.0.0.0:{}", port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}

/// Builds the router: `/predict` behind request tracing, `/health` outside it
/// so probe traffic stays out of the logs.
fn app(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let logged_routes = Router::new()
        .route("/predict", post(handlers::predict::predict))
        .layer(trace_layer);

    Router::new()
        .merge(logged_routes)
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}

/// Initializes the server state: loads the trained model artifacts, falling
/// back to rule-based scoring when either one is unavailable.
fn init_server_state() -> ServerState {
    let weights_path =
        std::env::var("STROKESENSE_MODEL").unwrap_or_else(|_| "models/stroke_model.json".into());
    let preprocessor_path = std::env::var("STROKESENSE_PREPROCESSOR")
        .unwrap_or_else(|_| "models/preprocessor.json".into());

    let predictor = Predictor::load(Path::new(&weights_path), Path::new(&preprocessor_path));
    match predictor.model_name() {
        Some(name) => info!("Serving predictions from model '{}'", name),
        None => info!("Serving predictions from the rule-based fallback"),
    }

    ServerState { predictor }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn rule_based_app() -> Router {
        app(Arc::new(ServerState {
            predictor: Predictor::rule_based(),
        }))
    }

    // Artifacts in the deployed JSON form, weighting only the age column.
    fn trained_app() -> Router {
        use strokesense_model::{ModelWeights, Preprocessor, TrainedScorer};

        let mut coefficients = vec![0.0; 14];
        coefficients[1] = 0.05;
        let weights = ModelWeights::from_json(
            &json!({
                "name": "stroke-logistic",
                "model_type": "logistic_regression",
                "version": "1.0.0",
                "n_features": 14,
                "classes": [0, 1],
                "coefficients": coefficients,
                "intercept": -3.0
            })
            .to_string(),
        )
        .unwrap();

        let preprocessor = Preprocessor::from_json(
            &json!({
                "feature_names": [
                    "gender", "age", "hypertension", "heart_disease", "ever_married",
                    "work_type", "Residence_type", "avg_glucose_level", "bmi",
                    "smoking_status", "nhomTuoi", "nhomBMI", "nhomGlucose", "diemNguyCo"
                ],
                "categorical": {
                    "gender": ["female", "male"],
                    "ever_married": ["No", "Yes"],
                    "work_type": ["Govt_job", "Private", "Self-employed"],
                    "Residence_type": ["Rural", "Urban"],
                    "smoking_status": ["formerly smoked", "never smoked"]
                },
                "mean": vec![0.0; 14],
                "scale": vec![1.0; 14]
            })
            .to_string(),
        )
        .unwrap();

        app(Arc::new(ServerState {
            predictor: Predictor::with_scorer(TrainedScorer::new(weights, preprocessor)),
        }))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    fn predict_request(body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/predict")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn patient() -> Value {
        json!({
            "age": 75,
            "gender": "male",
            "heightCm": 170,
            "weightKg": 60,
            "systolicBP": 185,
            "diastolicBP": 70,
            "cholesterol": 150,
            "glucose": 90,
            "hypertension": true,
            "heartDisease": true,
            "smoking": false,
            "workType": "sedentary"
        })
    }

    #[tokio::test]
    async fn health_reports_fallback_state() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(rule_based_app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "status": "healthy",
                "model_loaded": false,
                "preprocessor_loaded": false
            })
        );
    }

    #[tokio::test]
    async fn health_reports_loaded_state() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(trained_app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "status": "healthy",
                "model_loaded": true,
                "preprocessor_loaded": true
            })
        );
    }

    #[tokio::test]
    async fn predict_uses_the_trained_model_when_loaded() {
        let (status, body) = send(trained_app(), predict_request(&patient())).await;

        // Age is the only weighted column: sigmoid(0.05 * 75 - 3.0).
        let expected = 1.0 / (1.0 + (-0.75_f64).exp());
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["predictionMethod"], "AI");
        assert_eq!(body["riskScore"], 67);
        assert!((body["strokeProbability"].as_f64().unwrap() - expected).abs() < 1e-9);
    }

    #[tokio::test]
    async fn predict_returns_complete_assessment() {
        let (status, body) = send(rule_based_app(), predict_request(&patient())).await;

        // Age 75 (+25), male (+3), systolic 185 (+20), hypertension (+10),
        // heart disease (+12), sedentary work (+5): 75 points.
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "riskScore": 75,
                "riskLevel": "high",
                "riskLevelVi": "Nguy cơ cao",
                "strokeProbability": 0.75,
                "bmi": "20.8",
                "bmiCategory": "Bình thường",
                "bpCategory": "Tăng huyết áp độ 3",
                "cholesterolCategory": "Bình thường",
                "predictionMethod": "Rule-based"
            })
        );
    }

    #[tokio::test]
    async fn missing_field_is_a_bad_request() {
        let mut body = patient();
        body.as_object_mut().unwrap().remove("glucose");

        let (status, body) = send(rule_based_app(), predict_request(&body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "success": false, "error": "Missing field: glucose" })
        );
    }

    #[tokio::test]
    async fn unusable_field_is_an_internal_error() {
        let mut body = patient();
        body["age"] = json!("seventy-five");

        let (status, body) = send(rule_based_app(), predict_request(&body)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(
            body["error"],
            "Invalid value for age: expected a number, got a string"
        );
    }

    #[tokio::test]
    async fn non_json_body_is_an_internal_error() {
        let request = Request::builder()
            .method("POST")
            .uri("/predict")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let (status, body) = send(rule_based_app(), request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert!(body["error"]
            .as_str()
            .is_some_and(|msg| msg.starts_with("Failed to parse the request body as JSON")));
    }
}
