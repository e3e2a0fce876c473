//! # stress-server
//!
//! HTTP backend for the stress dashboard. Exposes the forecast contract
//! (`POST /predict`) and the classifier-only contract (`POST /classify`)
//! as explicitly separate endpoints.
//!
//! Configuration is environment-driven (a `.env` file is honored):
//!
//! - `HOST` / `PORT` — bind address, default `0.0.0.0:8000`
//! - `MODEL_PATH` — JSON classifier artifact; `/classify` returns 503
//!   without it
//! - `BACKEND_URL` / `BACKEND_TIMEOUT_SECS` — optional upstream forecast
//!   service; on any upstream failure `/predict` falls back to the local
//!   pipeline

use axum::routing::{get, post};
use axum::Router;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use stress_model::{LinearStressModel, StressModel};
use stress_pipeline::ForecastPipeline;
use stress_remote::{ForecastSelector, HttpForecaster};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod routes;

/// Application state shared across handlers
///
/// Everything in here is read-only after startup, so handlers share it
/// without synchronization.
#[derive(Clone)]
pub struct AppState {
    pub selector: ForecastSelector<HttpForecaster>,
    pub model: Option<Arc<dyn StressModel>>,
}

fn load_model() -> anyhow::Result<Option<Arc<dyn StressModel>>> {
    match env::var("MODEL_PATH") {
        Ok(path) => {
            let model = LinearStressModel::from_path(&path)?;
            tracing::info!(path = %path, model = model.name(), "classifier artifact loaded");
            Ok(Some(Arc::new(model)))
        }
        Err(_) => {
            tracing::info!("MODEL_PATH not set, /classify disabled");
            Ok(None)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stress_server=info,tower_http=info".into()),
        )
        .init();

    let remote = HttpForecaster::from_env()?;
    if let Some(remote) = &remote {
        tracing::info!(endpoint = remote.endpoint(), "upstream forecaster configured");
    }

    let state = AppState {
        selector: ForecastSelector::with_optional(remote, ForecastPipeline::default()),
        model: load_model()?,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(routes::root))
        .route("/predict", post(routes::predict))
        .route("/classify", post(routes::classify))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse()
        .map_err(|e| anyhow::anyhow!("PORT must be a valid number: {e}"))?;
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid HOST:PORT configuration: {e}"))?;

    tracing::info!(
        "stress-server v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
