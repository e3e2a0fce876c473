//! Fixed affine feature scaling
//!
//! The scaler parameters (per-feature center and scale) are fitted at
//! training time and persisted alongside the classifier artifact. Only the
//! 8 continuous readings are scaled; the missing-value indicators pass
//! through verbatim.

use crate::features::{FeatureVector, CONTINUOUS_FEATURES, FEATURE_COUNT};
use serde::{Deserialize, Serialize};
use stress_core::{Error, Result};

/// Per-feature affine transform `(x - center) / scale`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureScaler {
    center: [f64; CONTINUOUS_FEATURES],
    scale: [f64; CONTINUOUS_FEATURES],
}

impl FeatureScaler {
    /// Create a scaler, rejecting zero or non-finite scale entries
    pub fn new(center: [f64; CONTINUOUS_FEATURES], scale: [f64; CONTINUOUS_FEATURES]) -> Result<Self> {
        if center.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidParameter(
                "scaler center contains non-finite values".to_string(),
            ));
        }
        if scale.iter().any(|v| !v.is_finite() || *v == 0.0) {
            return Err(Error::InvalidParameter(
                "scaler scale entries must be finite and non-zero".to_string(),
            ));
        }
        Ok(Self { center, scale })
    }

    /// Identity transform, useful for tests and unscaled models
    pub fn identity() -> Self {
        Self {
            center: [0.0; CONTINUOUS_FEATURES],
            scale: [1.0; CONTINUOUS_FEATURES],
        }
    }

    /// Scale the continuous readings and concatenate the indicators
    pub fn transform(&self, features: &FeatureVector) -> [f64; FEATURE_COUNT] {
        let mut out = [0.0; FEATURE_COUNT];
        for (i, (&x, o)) in features
            .continuous()
            .iter()
            .zip(out.iter_mut())
            .enumerate()
        {
            *o = (x - self.center[i]) / self.scale[i];
        }
        out[CONTINUOUS_FEATURES..].copy_from_slice(features.missing_flags());
        out
    }

    /// Re-validate after deserialization from an artifact
    pub fn validate(&self) -> Result<()> {
        Self::new(self.center, self.scale).map(|_| ())
    }
}
