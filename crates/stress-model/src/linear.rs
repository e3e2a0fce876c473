//! JSON-artifact-backed linear classifier
//!
//! The externally trained model is exported as a JSON artifact holding the
//! fitted scaler, one weight row per class and per-class intercepts.
//! Prediction scales the continuous readings, scores every class linearly
//! and returns the argmax class label. The artifact is loaded once at
//! construction and the handle is read-only afterwards, so it can be shared
//! across request handlers without synchronization.

use crate::features::{FeatureVector, FEATURE_COUNT};
use crate::scaler::FeatureScaler;
use crate::StressModel;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use stress_core::{Error, Result};

/// On-disk artifact layout
#[derive(Debug, Clone, Deserialize)]
struct ModelArtifact {
    scaler: FeatureScaler,
    /// Class labels in weight-row order
    classes: Vec<u8>,
    /// One weight row of length [`FEATURE_COUNT`] per class
    weights: Vec<Vec<f64>>,
    /// One intercept per class
    intercepts: Vec<f64>,
}

/// Multiclass linear stress classifier loaded from a JSON artifact
#[derive(Debug, Clone)]
pub struct LinearStressModel {
    scaler: FeatureScaler,
    classes: Vec<u8>,
    weights: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

impl LinearStressModel {
    /// Load and validate an artifact from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let artifact: ModelArtifact = serde_json::from_reader(reader)
            .map_err(|e| Error::MalformedInput(format!("model artifact: {e}")))?;
        Self::from_artifact(artifact)
    }

    /// Load and validate an artifact from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        artifact.scaler.validate()?;
        let n_classes = artifact.classes.len();
        if n_classes < 2 {
            return Err(Error::MalformedInput(
                "model artifact must define at least 2 classes".to_string(),
            ));
        }
        if artifact.weights.len() != n_classes || artifact.intercepts.len() != n_classes {
            return Err(Error::MalformedInput(format!(
                "model artifact defines {} classes but {} weight rows and {} intercepts",
                n_classes,
                artifact.weights.len(),
                artifact.intercepts.len()
            )));
        }
        for row in &artifact.weights {
            if row.len() != FEATURE_COUNT {
                return Err(Error::MalformedInput(format!(
                    "weight row has {} entries, expected {FEATURE_COUNT}",
                    row.len()
                )));
            }
        }
        Ok(Self {
            scaler: artifact.scaler,
            classes: artifact.classes,
            weights: artifact.weights,
            intercepts: artifact.intercepts,
        })
    }

    /// Build directly from parts (tests, in-memory models)
    pub fn from_parts(
        scaler: FeatureScaler,
        classes: Vec<u8>,
        weights: Vec<Vec<f64>>,
        intercepts: Vec<f64>,
    ) -> Result<Self> {
        Self::from_artifact(ModelArtifact {
            scaler,
            classes,
            weights,
            intercepts,
        })
    }

    /// Class labels this model can produce
    pub fn classes(&self) -> &[u8] {
        &self.classes
    }
}

impl StressModel for LinearStressModel {
    fn name(&self) -> &str {
        "linear"
    }

    fn predict(&self, features: &FeatureVector) -> Result<u8> {
        let scaled = self.scaler.transform(features);

        let mut best = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (i, (row, intercept)) in self.weights.iter().zip(&self.intercepts).enumerate() {
            let score: f64 = row.iter().zip(&scaled).map(|(w, x)| w * x).sum::<f64>() + intercept;
            if score > best_score {
                best_score = score;
                best = i;
            }
        }
        Ok(self.classes[best])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(first: f64) -> FeatureVector {
        let mut values = vec![first];
        values.extend(std::iter::repeat(0.0).take(FEATURE_COUNT - 1));
        FeatureVector::from_slice(&values).unwrap()
    }

    /// Three classes keyed off the first feature: weight rows score
    /// negative, zero and positive values of it.
    fn toy_model() -> LinearStressModel {
        let mut w_low = vec![0.0; FEATURE_COUNT];
        w_low[0] = -1.0;
        let w_mid = vec![0.0; FEATURE_COUNT];
        let mut w_high = vec![0.0; FEATURE_COUNT];
        w_high[0] = 1.0;

        LinearStressModel::from_parts(
            FeatureScaler::identity(),
            vec![0, 1, 2],
            vec![w_low, w_mid, w_high],
            vec![0.0, 0.5, 0.0],
        )
        .unwrap()
    }

    #[test]
    fn test_argmax_prediction() {
        let model = toy_model();
        assert_eq!(model.predict(&vector(-3.0)).unwrap(), 0);
        assert_eq!(model.predict(&vector(0.0)).unwrap(), 1);
        assert_eq!(model.predict(&vector(3.0)).unwrap(), 2);
    }

    #[test]
    fn test_artifact_parsing() {
        let json = r#"{
            "scaler": {"center": [0,0,0,0,0,0,0,0], "scale": [1,1,1,1,1,1,1,1]},
            "classes": [0, 1],
            "weights": [
                [1,0,0,0,0,0,0,0,0,0,0,0,0,0],
                [-1,0,0,0,0,0,0,0,0,0,0,0,0,0]
            ],
            "intercepts": [0.0, 0.0]
        }"#;
        let model = LinearStressModel::from_reader(json.as_bytes()).unwrap();
        assert_eq!(model.classes(), &[0, 1]);
        assert_eq!(model.predict(&vector(2.0)).unwrap(), 0);
        assert_eq!(model.predict(&vector(-2.0)).unwrap(), 1);
    }

    #[test]
    fn test_mismatched_artifact_rejected() {
        let err = LinearStressModel::from_parts(
            FeatureScaler::identity(),
            vec![0, 1, 2],
            vec![vec![0.0; FEATURE_COUNT]; 2],
            vec![0.0; 3],
        )
        .unwrap_err();
        assert!(err.to_string().contains("weight rows"));
    }

    #[test]
    fn test_short_weight_row_rejected() {
        let err = LinearStressModel::from_parts(
            FeatureScaler::identity(),
            vec![0, 1],
            vec![vec![0.0; 3], vec![0.0; 3]],
            vec![0.0; 2],
        )
        .unwrap_err();
        assert!(err.to_string().contains("expected 14"));
    }

    #[test]
    fn test_garbage_json_rejected() {
        assert!(LinearStressModel::from_reader("not json".as_bytes()).is_err());
    }
}
