//! Wire types for the remote forecast endpoint
//!
//! The reply carries the probability under either `prob` or `mean_prob`
//! depending on the backend revision; both spellings are accepted.

use serde::{Deserialize, Serialize};
use stress_core::{Error, Result};
use stress_pipeline::StressLevel;

/// Default horizon when the request omits one
pub const DEFAULT_HORIZON: usize = 15;

/// Request body sent to the remote forecast endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub eda: Vec<f64>,
    pub horizon: usize,
}

/// Successful reply from the remote forecast endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReply {
    pub forecast: Vec<f64>,
    #[serde(alias = "mean_prob")]
    pub prob: f64,
    pub label: StressLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ForecastReply {
    /// Shape checks beyond what serde enforces
    ///
    /// A reply that parses but carries an empty or non-finite forecast, or
    /// a probability outside [0, 1], is treated as malformed and triggers
    /// the local fallback.
    pub fn validate(&self) -> Result<()> {
        if self.forecast.is_empty() {
            return Err(Error::RemoteUnavailable(
                "reply contains an empty forecast".to_string(),
            ));
        }
        if self.forecast.iter().any(|v| !v.is_finite()) {
            return Err(Error::RemoteUnavailable(
                "reply forecast contains non-finite values".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.prob) {
            return Err(Error::RemoteUnavailable(format!(
                "reply probability {} outside [0, 1]",
                self.prob
            )));
        }
        Ok(())
    }
}
