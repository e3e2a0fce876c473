//! Validated EDA sample series
//!
//! An [`EdaSeries`] is an ordered sequence of finite samples indexed by an
//! implicit integer timestamp `0..n-1`. Construction applies
//! coercion-with-drop: non-finite values are silently removed rather than
//! rejected, matching how uploaded sensor data is cleaned at the boundary.

use crate::error::{Error, Result};

/// Minimum number of samples required before the forecasting pipeline is
/// invoked. Enforced at the caller boundary (server, selector), not by the
/// math itself, which works down to a single sample.
pub const MIN_SAMPLES: usize = 10;

/// An ordered, validated electrodermal-activity sample series
#[derive(Debug, Clone, PartialEq)]
pub struct EdaSeries {
    samples: Vec<f64>,
}

impl EdaSeries {
    /// Create a series, dropping non-finite samples
    ///
    /// Returns [`Error::InsufficientData`] when no finite sample remains.
    pub fn new(samples: Vec<f64>) -> Result<Self> {
        let samples: Vec<f64> = samples.into_iter().filter(|v| v.is_finite()).collect();
        if samples.is_empty() {
            return Err(Error::empty_input());
        }
        Ok(Self { samples })
    }

    /// Create a series without dropping anything
    ///
    /// Rejects the whole input if any sample is NaN or infinite. Used where
    /// silent dropping would hide a caller bug (e.g. internally generated
    /// data).
    pub fn new_strict(samples: Vec<f64>) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::empty_input());
        }
        if samples.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("sample series"));
        }
        Ok(Self { samples })
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false: construction guarantees at least one sample
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The most recent sample
    pub fn last(&self) -> f64 {
        // Invariant: samples is non-empty
        *self.samples.last().unwrap()
    }

    /// Smallest observed sample
    pub fn min(&self) -> f64 {
        self.samples.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest observed sample
    pub fn max(&self) -> f64 {
        self.samples
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// The underlying samples in temporal order
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    /// Check the caller-boundary minimum length requirement
    pub fn require_min_samples(&self, min: usize) -> Result<()> {
        if self.samples.len() < min {
            return Err(Error::InsufficientData {
                expected: min,
                actual: self.samples.len(),
            });
        }
        Ok(())
    }
}

impl TryFrom<Vec<f64>> for EdaSeries {
    type Error = Error;

    fn try_from(samples: Vec<f64>) -> Result<Self> {
        Self::new(samples)
    }
}

impl TryFrom<&[f64]> for EdaSeries {
    type Error = Error;

    fn try_from(samples: &[f64]) -> Result<Self> {
        Self::new(samples.to_vec())
    }
}
