//! EDA stress forecasting pipeline
//!
//! This crate holds the canonical, parameterized implementation of the
//! forecast-and-classification computation:
//!
//! - **Trend estimation**: a two-point linear slope over a trailing window
//! - **Forecast projection**: a damped linear ramp anchored at the latest
//!   sample
//! - **Baseline scoring**: min-max normalization of the latest sample with
//!   threshold classification into `Low` / `Moderate` / `High`
//!
//! All constants that drifted between the observed dashboard variants
//! (window cap, damping, epsilon, thresholds) are named parameters with the
//! live-path defaults.
//!
//! # Example
//!
//! ```rust
//! use stress_core::EdaSeries;
//! use stress_pipeline::ForecastPipeline;
//!
//! let series = EdaSeries::new((0..30).map(|i| 0.4 + i as f64 * 0.01).collect()).unwrap();
//! let pipeline = ForecastPipeline::default();
//! let result = pipeline.run(&series, 15).unwrap();
//!
//! assert_eq!(result.forecast.len(), 15);
//! assert_eq!(result.forecast[0], series.last());
//! ```

pub mod pipeline;
pub mod project;
pub mod score;
pub mod trend;
pub mod types;

pub use pipeline::{ForecastPipeline, PipelineParameters};
pub use project::{ForecastProjector, ProjectorParameters};
pub use score::{BaselineScorer, ScorerParameters};
pub use trend::{TrendEstimator, TrendParameters};
pub use types::{Provenance, StressForecast, StressLevel};
