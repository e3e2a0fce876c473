//! API route handlers
//!
//! Two deliberately separate contracts:
//!
//! - `/predict` takes a raw EDA series plus horizon and returns the full
//!   forecast-and-classification payload. When an upstream `BACKEND_URL`
//!   is configured the request is forwarded once; any upstream failure
//!   falls back to the local pipeline.
//! - `/classify` takes the fixed 14-feature vector and returns only the
//!   injected model's discrete level.

use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use stress_core::{EdaSeries, Error, MIN_SAMPLES};
use stress_model::FeatureVector;
use stress_pipeline::{Provenance, StressLevel};
use stress_remote::DEFAULT_HORIZON;

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub eda: Vec<f64>,
    /// Defaults to 15 when omitted
    pub horizon: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub forecast: Vec<f64>,
    pub prob: f64,
    pub label: StressLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub provenance: Provenance,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub features: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub predicted_level: u8,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error wrapper mapping the core taxonomy onto HTTP statuses
#[derive(Debug)]
pub struct ApiError(pub Error);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            Error::InsufficientData { .. }
            | Error::InvalidHorizon { .. }
            | Error::InvalidParameter(_)
            | Error::MalformedInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::RemoteUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Error::Io(_) | Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

/// Liveness endpoint
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "message": "stress backend alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Forecast contract: EDA series in, forecast + score + label out
pub async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    let horizon = req.horizon.unwrap_or(DEFAULT_HORIZON as i64);
    if horizon <= 0 {
        return Err(Error::invalid_horizon(horizon).into());
    }

    let series = EdaSeries::new(req.eda)?;
    series.require_min_samples(MIN_SAMPLES)?;

    // The selector makes a blocking HTTP attempt, keep it off the runtime
    let selector = state.selector.clone();
    let horizon = horizon as usize;
    let result = tokio::task::spawn_blocking(move || selector.forecast(&series, horizon))
        .await
        .map_err(|e| Error::Other(anyhow::anyhow!("forecast task failed: {e}")))??;

    Ok(Json(PredictResponse {
        forecast: result.forecast,
        prob: result.score,
        label: result.level,
        message: result.message,
        provenance: result.provenance,
    }))
}

/// Classifier contract: 14-feature vector in, discrete level out
pub async fn classify(
    State(state): State<AppState>,
    Json(req): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let model = state
        .model
        .as_ref()
        .ok_or_else(|| Error::RemoteUnavailable("no classifier artifact configured".to_string()))?;

    let features = FeatureVector::from_slice(&req.features)?;
    let predicted_level = model.predict(&features)?;
    Ok(Json(ClassifyResponse { predicted_level }))
}
