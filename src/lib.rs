//! Stress forecasting toolkit
//!
//! Facade crate re-exporting the workspace members:
//!
//! - [`stress_core`] — error taxonomy and the validated [`EdaSeries`]
//! - [`stress_pipeline`] — trend, projection, scoring, classification
//! - [`stress_model`] — the injectable classifier capability
//! - [`stress_ingest`] — CSV ingestion heuristics
//! - [`stress_remote`] — remote prediction with local fallback
//!
//! The HTTP backend lives in the `stress-server` binary crate.

pub use stress_core::{EdaSeries, Error, Result, MIN_SAMPLES};

pub use stress_pipeline::{
    BaselineScorer, ForecastPipeline, ForecastProjector, PipelineParameters, Provenance,
    ScorerParameters, StressForecast, StressLevel, TrendEstimator, TrendParameters,
};

pub use stress_model::{FeatureScaler, FeatureVector, LinearStressModel, StressModel};

pub use stress_ingest::{read_eda_csv, read_eda_csv_path};

pub use stress_remote::{
    ForecastReply, ForecastRequest, ForecastSelector, HttpForecaster, RemoteForecaster,
    RemoteParameters,
};
