//! Baseline normalization and stress classification
//!
//! The stress score is the min-max normalized position of the most recent
//! sample within the observed range of the whole series. A small epsilon in
//! the denominator keeps the score finite for constant series; that choice
//! biases constant series toward `Low` (score near 0), which is an
//! edge-case policy inherited from the observed dashboards and kept
//! configurable here.

use crate::types::StressLevel;
use serde::{Deserialize, Serialize};
use stress_core::{EdaSeries, Error, Result};

/// Parameters for scoring and classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScorerParameters {
    /// Denominator guard for constant series
    pub epsilon: f64,
    /// Scores below this are `Low`
    pub low_cut: f64,
    /// Scores from `low_cut` up to this are `Moderate`; above, `High`
    pub high_cut: f64,
}

impl Default for ScorerParameters {
    fn default() -> Self {
        Self {
            epsilon: 1e-6,
            low_cut: 0.33,
            high_cut: 0.66,
        }
    }
}

/// Min-max baseline scorer with threshold classification
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BaselineScorer {
    params: ScorerParameters,
}

impl BaselineScorer {
    /// Create a scorer, validating the threshold ordering
    pub fn new(params: ScorerParameters) -> Result<Self> {
        if !(params.epsilon > 0.0 && params.epsilon.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "epsilon {} must be a positive finite number",
                params.epsilon
            )));
        }
        if !(0.0 < params.low_cut && params.low_cut < params.high_cut && params.high_cut < 1.0) {
            return Err(Error::InvalidParameter(format!(
                "thresholds must satisfy 0 < low_cut ({}) < high_cut ({}) < 1",
                params.low_cut, params.high_cut
            )));
        }
        Ok(Self { params })
    }

    /// Current parameters
    pub fn parameters(&self) -> &ScorerParameters {
        &self.params
    }

    /// Min-max normalized stress score of the latest sample
    ///
    /// Always finite; in [0, 1] up to the epsilon bias for non-constant
    /// series, near 0 for constant ones.
    pub fn score(&self, series: &EdaSeries) -> f64 {
        let min = series.min();
        let max = series.max();
        (series.last() - min) / (max - min + self.params.epsilon)
    }

    /// Threshold the score into a discrete level
    pub fn classify(&self, score: f64) -> StressLevel {
        if score < self.params.low_cut {
            StressLevel::Low
        } else if score < self.params.high_cut {
            StressLevel::Moderate
        } else {
            StressLevel::High
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn series(values: &[f64]) -> EdaSeries {
        EdaSeries::new(values.to_vec()).unwrap()
    }

    #[test]
    fn test_constant_series_scores_near_zero() {
        let scorer = BaselineScorer::default();
        let score = scorer.score(&series(&[0.5; 20]));
        assert!(score.is_finite());
        assert!(score.abs() < 1e-9);
        assert_eq!(scorer.classify(score), StressLevel::Low);
    }

    #[test]
    fn test_last_at_max_scores_one() {
        let scorer = BaselineScorer::default();
        let values: Vec<f64> = (0..30).map(|i| i as f64 * 0.1).collect();
        let score = scorer.score(&series(&values));
        assert_relative_eq!(score, 1.0, epsilon = 1e-5);
        assert_eq!(scorer.classify(score), StressLevel::High);
    }

    #[test]
    fn test_last_at_min_scores_zero() {
        let scorer = BaselineScorer::default();
        let score = scorer.score(&series(&[3.0, 2.0, 1.0]));
        assert_relative_eq!(score, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_score_bounded_for_non_constant_series() {
        let scorer = BaselineScorer::default();
        for values in [
            vec![0.1, 0.9, 0.4],
            vec![-5.0, 3.0, 2.0, -1.0],
            vec![100.0, 101.0, 100.5],
        ] {
            let score = scorer.score(&series(&values));
            assert!((0.0..=1.0).contains(&score), "score {score} out of bounds");
        }
    }

    #[test]
    fn test_threshold_boundaries() {
        let scorer = BaselineScorer::default();
        assert_eq!(scorer.classify(0.0), StressLevel::Low);
        assert_eq!(scorer.classify(0.32), StressLevel::Low);
        assert_eq!(scorer.classify(0.33), StressLevel::Moderate);
        assert_eq!(scorer.classify(0.65), StressLevel::Moderate);
        assert_eq!(scorer.classify(0.66), StressLevel::High);
        assert_eq!(scorer.classify(1.0), StressLevel::High);
    }

    #[test]
    fn test_custom_thresholds() {
        let scorer = BaselineScorer::new(ScorerParameters {
            epsilon: 1e-6,
            low_cut: 0.2,
            high_cut: 0.8,
        })
        .unwrap();
        assert_eq!(scorer.classify(0.5), StressLevel::Moderate);
        assert_eq!(scorer.classify(0.85), StressLevel::High);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let bad_order = ScorerParameters {
            epsilon: 1e-6,
            low_cut: 0.7,
            high_cut: 0.3,
        };
        assert!(BaselineScorer::new(bad_order).is_err());

        let bad_epsilon = ScorerParameters {
            epsilon: 0.0,
            ..Default::default()
        };
        assert!(BaselineScorer::new(bad_epsilon).is_err());
    }
}
