//! Types produced by the forecasting pipeline

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete stress classification, ordered from calm to stressed
///
/// The wire encoding is lowercase (`low` / `medium` / `high`) to stay
/// compatible with the prediction endpoint; `Display` uses the title-case
/// dashboard wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StressLevel {
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "medium")]
    Moderate,
    #[serde(rename = "high")]
    High,
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StressLevel::Low => write!(f, "Low"),
            StressLevel::Moderate => write!(f, "Moderate"),
            StressLevel::High => write!(f, "High"),
        }
    }
}

/// Where a forecast result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Produced by the remote prediction collaborator
    Remote,
    /// Computed by the local pipeline
    Local,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Remote => write!(f, "remote"),
            Provenance::Local => write!(f, "local"),
        }
    }
}

/// Combined result of one forecast computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressForecast {
    /// Projected future samples, one per horizon step
    pub forecast: Vec<f64>,
    /// Min-max normalized stress score in [0, 1]
    pub score: f64,
    /// Discrete classification of the score
    pub level: StressLevel,
    /// Optional free-text note (e.g. the fallback warning)
    pub message: Option<String>,
    /// Remote or local origin
    pub provenance: Provenance,
}

impl StressForecast {
    /// Horizon this forecast was computed for
    pub fn horizon(&self) -> usize {
        self.forecast.len()
    }
}
