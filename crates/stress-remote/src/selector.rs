//! Remote/local forecast selection
//!
//! One attempt against the remote collaborator; on any recoverable failure
//! the local pipeline produces the result instead. The fallback is
//! deterministic: its numeric payload is exactly what the local pipeline
//! would have produced directly with the same inputs. The only trace of a
//! failed remote attempt is the provenance tag, an informational message
//! and a warning log line.

use crate::RemoteForecaster;
use stress_core::{EdaSeries, Result, MIN_SAMPLES};
use stress_pipeline::{ForecastPipeline, Provenance, StressForecast};
use tracing::warn;

/// Message attached to fallback results
pub const FALLBACK_MESSAGE: &str = "local baseline forecast (remote unavailable)";

/// A remote forecaster that can never be called
///
/// Used as the type parameter for selectors configured without a backend.
#[derive(Debug, Clone, Copy)]
pub enum NoRemote {}

impl RemoteForecaster for NoRemote {
    fn forecast(&self, _eda: &[f64], _horizon: usize) -> Result<crate::wire::ForecastReply> {
        match *self {}
    }
}

/// Chooses between the remote collaborator and the local pipeline
#[derive(Debug, Clone)]
pub struct ForecastSelector<R> {
    remote: Option<R>,
    pipeline: ForecastPipeline,
}

impl ForecastSelector<NoRemote> {
    /// A selector that always computes locally
    pub fn local_only(pipeline: ForecastPipeline) -> Self {
        Self {
            remote: None,
            pipeline,
        }
    }
}

impl<R: RemoteForecaster> ForecastSelector<R> {
    /// A selector that tries `remote` first
    pub fn new(remote: R, pipeline: ForecastPipeline) -> Self {
        Self {
            remote: Some(remote),
            pipeline,
        }
    }

    /// A selector with an optionally configured remote
    ///
    /// `None` behaves like [`ForecastSelector::local_only`] but keeps the
    /// concrete remote type, which is convenient for state built from
    /// runtime configuration.
    pub fn with_optional(remote: Option<R>, pipeline: ForecastPipeline) -> Self {
        Self { remote, pipeline }
    }

    /// Obtain a forecast, remotely if possible, locally otherwise
    ///
    /// Input validation (minimum history, positive horizon) is a hard
    /// error either way; remote failure never is.
    pub fn forecast(&self, series: &EdaSeries, horizon: usize) -> Result<StressForecast> {
        series.require_min_samples(MIN_SAMPLES)?;
        if horizon == 0 {
            return Err(stress_core::Error::invalid_horizon(0));
        }

        if let Some(remote) = &self.remote {
            match remote.forecast(series.as_slice(), horizon) {
                Ok(reply) => {
                    return Ok(StressForecast {
                        forecast: reply.forecast,
                        score: reply.prob,
                        level: reply.label,
                        message: reply.message,
                        provenance: Provenance::Remote,
                    });
                }
                Err(e) => {
                    warn!(error = %e, "remote prediction failed, falling back to local pipeline");
                }
            }
        }

        let mut result = self.pipeline.run(series, horizon)?;
        if self.remote.is_some() {
            result.message = Some(FALLBACK_MESSAGE.to_string());
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::ForecastReply;
    use stress_core::Error;
    use stress_pipeline::StressLevel;

    /// Remote double that always fails
    struct FailingRemote;

    impl RemoteForecaster for FailingRemote {
        fn forecast(&self, _eda: &[f64], _horizon: usize) -> Result<ForecastReply> {
            Err(Error::RemoteUnavailable("HTTP 500".to_string()))
        }
    }

    /// Remote double that returns a canned reply
    struct CannedRemote(ForecastReply);

    impl RemoteForecaster for CannedRemote {
        fn forecast(&self, _eda: &[f64], _horizon: usize) -> Result<ForecastReply> {
            Ok(self.0.clone())
        }
    }

    fn series() -> EdaSeries {
        EdaSeries::new((0..30).map(|i| 0.3 + i as f64 * 0.02).collect()).unwrap()
    }

    #[test]
    fn test_fallback_is_numerically_identical_to_local() {
        let pipeline = ForecastPipeline::default();
        let selector = ForecastSelector::new(FailingRemote, pipeline);

        let fallback = selector.forecast(&series(), 7).unwrap();
        let direct = pipeline.run(&series(), 7).unwrap();

        assert_eq!(fallback.forecast, direct.forecast);
        assert_eq!(fallback.score, direct.score);
        assert_eq!(fallback.level, direct.level);
        assert_eq!(fallback.provenance, Provenance::Local);
        // The only additions are observability: the fallback note
        assert_eq!(fallback.message.as_deref(), Some(FALLBACK_MESSAGE));
    }

    #[test]
    fn test_remote_success_is_passed_through() {
        let reply = ForecastReply {
            forecast: vec![0.9, 0.95, 1.0],
            prob: 0.72,
            label: StressLevel::High,
            message: Some("model v3".to_string()),
        };
        let selector = ForecastSelector::new(CannedRemote(reply.clone()), ForecastPipeline::default());

        let result = selector.forecast(&series(), 3).unwrap();
        assert_eq!(result.forecast, reply.forecast);
        assert_eq!(result.score, reply.prob);
        assert_eq!(result.level, StressLevel::High);
        assert_eq!(result.message.as_deref(), Some("model v3"));
        assert_eq!(result.provenance, Provenance::Remote);
    }

    #[test]
    fn test_local_only_has_no_fallback_note() {
        let selector = ForecastSelector::local_only(ForecastPipeline::default());
        let result = selector.forecast(&series(), 5).unwrap();
        assert_eq!(result.provenance, Provenance::Local);
        assert!(result.message.is_none());
    }

    #[test]
    fn test_short_series_is_a_hard_error() {
        let selector = ForecastSelector::local_only(ForecastPipeline::default());
        let short = EdaSeries::new(vec![0.4; 5]).unwrap();
        match selector.forecast(&short, 5) {
            Err(Error::InsufficientData { expected, actual }) => {
                assert_eq!(expected, MIN_SAMPLES);
                assert_eq!(actual, 5);
            }
            other => panic!("expected InsufficientData, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_horizon_is_a_hard_error_before_remote_attempt() {
        // A remote double that panics if called proves the boundary check
        // happens first.
        struct PanickingRemote;
        impl RemoteForecaster for PanickingRemote {
            fn forecast(&self, _eda: &[f64], _horizon: usize) -> Result<ForecastReply> {
                panic!("remote must not be called for an invalid horizon");
            }
        }

        let selector = ForecastSelector::new(PanickingRemote, ForecastPipeline::default());
        assert!(matches!(
            selector.forecast(&series(), 0),
            Err(Error::InvalidHorizon { horizon: 0 })
        ));
    }
}
