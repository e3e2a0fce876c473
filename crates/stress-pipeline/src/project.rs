//! Forecast projection along a damped linear ramp

use serde::{Deserialize, Serialize};
use stress_core::{Error, Result};

/// Parameters for forecast projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectorParameters {
    /// Attenuation applied to the trend before projecting
    ///
    /// The raw two-point slope overshoots on noisy series; the projection
    /// only ever commits to this fraction of it.
    pub damping: f64,
}

impl Default for ProjectorParameters {
    fn default() -> Self {
        Self { damping: 0.8 }
    }
}

/// Projects a trend forward over a requested horizon
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ForecastProjector {
    params: ProjectorParameters,
}

impl ForecastProjector {
    /// Create a projector with the given damping factor
    pub fn new(damping: f64) -> Result<Self> {
        if !damping.is_finite() || damping < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "damping {damping} must be finite and non-negative"
            )));
        }
        Ok(Self {
            params: ProjectorParameters { damping },
        })
    }

    /// Create a projector from parameters
    pub fn with_params(params: ProjectorParameters) -> Result<Self> {
        Self::new(params.damping)
    }

    /// Current parameters
    pub fn parameters(&self) -> &ProjectorParameters {
        &self.params
    }

    /// Produce `horizon` evenly spaced points starting exactly at `last`
    ///
    /// The ramp ends at `last + trend * damping`; a horizon of 1 yields
    /// just the anchor point. A horizon of 0 is rejected.
    pub fn project(&self, last: f64, trend: f64, horizon: usize) -> Result<Vec<f64>> {
        if horizon == 0 {
            return Err(Error::invalid_horizon(0));
        }
        let reach = trend * self.params.damping;
        if horizon == 1 {
            return Ok(vec![last]);
        }
        let step = reach / (horizon - 1) as f64;
        Ok((0..horizon).map(|i| last + step * i as f64).collect())
    }
}
