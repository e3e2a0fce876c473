//! The fixed 14-feature input contract
//!
//! The classifier consumes 8 continuous sensor readings followed by 6
//! binary missing-value indicators, in a fixed order persisted at training
//! time. Callers send the vector flat; this module validates shape and
//! finiteness.

use serde::{Deserialize, Serialize};
use stress_core::{Error, Result};

/// Number of continuous sensor readings (pre-scaled by the artifact scaler)
pub const CONTINUOUS_FEATURES: usize = 8;

/// Number of trailing binary missing-value indicators
pub const MISSING_FLAGS: usize = 6;

/// Total feature-vector length
pub const FEATURE_COUNT: usize = CONTINUOUS_FEATURES + MISSING_FLAGS;

/// Feature names in wire order
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "snoring_range",
    "respiration_rate",
    "body_temperature",
    "limb_movement",
    "blood_oxygen",
    "eye_movement",
    "hours_of_sleep",
    "heart_rate",
    "body_temperature_missing",
    "limb_movement_missing",
    "blood_oxygen_missing",
    "eye_movement_missing",
    "hours_of_sleep_missing",
    "heart_rate_missing",
];

/// A validated classifier input vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Build from a flat slice of exactly [`FEATURE_COUNT`] finite values
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        if values.len() != FEATURE_COUNT {
            return Err(Error::MalformedInput(format!(
                "expected {FEATURE_COUNT} features, got {}",
                values.len()
            )));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("feature vector"));
        }
        let mut buf = [0.0; FEATURE_COUNT];
        buf.copy_from_slice(values);
        Ok(Self { values: buf })
    }

    /// The continuous sensor readings (unscaled)
    pub fn continuous(&self) -> &[f64] {
        &self.values[..CONTINUOUS_FEATURES]
    }

    /// The binary missing-value indicators
    pub fn missing_flags(&self) -> &[f64] {
        &self.values[CONTINUOUS_FEATURES..]
    }

    /// The whole vector in wire order
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

impl TryFrom<Vec<f64>> for FeatureVector {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::from_slice(&values)
    }
}

impl From<FeatureVector> for Vec<f64> {
    fn from(v: FeatureVector) -> Self {
        v.values.to_vec()
    }
}
