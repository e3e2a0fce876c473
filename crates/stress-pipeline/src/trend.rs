//! Linear trend estimation over a trailing window
//!
//! The slope is anchored on two points: the most recent sample and the
//! sample at the start of the trailing window. For short series the window
//! silently shrinks to whatever history exists; no error is raised.

use serde::{Deserialize, Serialize};
use stress_core::EdaSeries;

/// Parameters for trend estimation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendParameters {
    /// Maximum number of trailing steps the slope window spans
    ///
    /// The observed dashboards disagreed on this constant (30 in the live
    /// path, 60 in the offline simulation), so it is a parameter rather
    /// than a fixed value.
    pub window_cap: usize,
}

impl Default for TrendParameters {
    fn default() -> Self {
        Self { window_cap: 30 }
    }
}

/// Two-point linear slope estimator
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrendEstimator {
    params: TrendParameters,
}

impl TrendEstimator {
    /// Create an estimator with the given window cap
    pub fn new(window_cap: usize) -> Self {
        Self {
            params: TrendParameters { window_cap },
        }
    }

    /// Create an estimator from parameters
    pub fn with_params(params: TrendParameters) -> Self {
        Self { params }
    }

    /// Current parameters
    pub fn parameters(&self) -> &TrendParameters {
        &self.params
    }

    /// Per-step slope of the trailing window
    ///
    /// The denominator is clamped to at least 1, so a single-sample series
    /// yields a slope of exactly 0 rather than a division by zero.
    pub fn slope(&self, series: &EdaSeries) -> f64 {
        let samples = series.as_slice();
        let n = samples.len();
        let start = n.saturating_sub(self.params.window_cap + 1);
        let denom = self.params.window_cap.min(n - 1).max(1);
        (samples[n - 1] - samples[start]) / denom as f64
    }
}
