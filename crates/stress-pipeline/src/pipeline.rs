//! The combined forecasting pipeline
//!
//! Ties the trend estimator, forecast projector and baseline scorer
//! together into the single canonical computation that both the local
//! fallback path and the server endpoint share. The observed dashboards
//! carried four drifting copies of this logic; this is the one
//! parameterized version.

use crate::project::{ForecastProjector, ProjectorParameters};
use crate::score::{BaselineScorer, ScorerParameters};
use crate::trend::{TrendEstimator, TrendParameters};
use crate::types::{Provenance, StressForecast};
use serde::{Deserialize, Serialize};
use stress_core::{EdaSeries, Result};

/// Parameters for the whole pipeline
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PipelineParameters {
    pub trend: TrendParameters,
    pub projector: ProjectorParameters,
    pub scorer: ScorerParameters,
}

/// Canonical forecast-and-classify pipeline
#[derive(Debug, Clone, Copy, Default)]
pub struct ForecastPipeline {
    trend: TrendEstimator,
    projector: ForecastProjector,
    scorer: BaselineScorer,
}

impl ForecastPipeline {
    /// Create a pipeline from parameters
    pub fn new(params: PipelineParameters) -> Result<Self> {
        Ok(Self {
            trend: TrendEstimator::with_params(params.trend),
            projector: ForecastProjector::with_params(params.projector)?,
            scorer: BaselineScorer::new(params.scorer)?,
        })
    }

    /// Run the full pipeline on a series
    ///
    /// Provenance is always `Local`; the remote selector overrides it when
    /// it hands back a remote result instead.
    pub fn run(&self, series: &EdaSeries, horizon: usize) -> Result<StressForecast> {
        let trend = self.trend.slope(series);
        let forecast = self.projector.project(series.last(), trend, horizon)?;
        let score = self.scorer.score(series);
        let level = self.scorer.classify(score);
        Ok(StressForecast {
            forecast,
            score,
            level,
            message: None,
            provenance: Provenance::Local,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StressLevel;
    use approx::assert_relative_eq;

    fn series(values: &[f64]) -> EdaSeries {
        EdaSeries::new(values.to_vec()).unwrap()
    }

    #[test]
    fn test_constant_series_scenario() {
        // Flat series: forecast stays flat, score near 0, level Low
        let pipeline = ForecastPipeline::default();
        let result = pipeline.run(&series(&[0.5; 5]), 5).unwrap();

        assert_eq!(result.forecast, vec![0.5; 5]);
        assert!(result.score.abs() < 1e-9);
        assert_eq!(result.level, StressLevel::Low);
        assert_eq!(result.provenance, Provenance::Local);
        assert!(result.message.is_none());
    }

    #[test]
    fn test_rising_ramp_scenario() {
        // 30 points rising by 0.1 per step: slope 0.1, damped reach 0.08
        let values: Vec<f64> = (0..30).map(|i| i as f64 * 0.1).collect();
        let pipeline = ForecastPipeline::default();
        let result = pipeline.run(&series(&values), 3).unwrap();

        assert_eq!(result.horizon(), 3);
        assert_relative_eq!(result.forecast[0], 2.9, epsilon = 1e-12);
        assert_relative_eq!(result.forecast[1], 2.94, epsilon = 1e-3);
        assert_relative_eq!(result.forecast[2], 2.98, epsilon = 1e-3);
        assert_relative_eq!(result.score, 1.0, epsilon = 1e-5);
        assert_eq!(result.level, StressLevel::High);
    }

    #[test]
    fn test_zero_horizon_propagates_error() {
        let pipeline = ForecastPipeline::default();
        assert!(pipeline.run(&series(&[0.1, 0.2, 0.3]), 0).is_err());
    }

    #[test]
    fn test_single_sample_series_is_flat() {
        let pipeline = ForecastPipeline::default();
        let result = pipeline.run(&series(&[1.2]), 4).unwrap();
        assert_eq!(result.forecast, vec![1.2; 4]);
    }
}
