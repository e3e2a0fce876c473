//! Injectable stress-classifier capability
//!
//! The externally trained classifier is modeled as a capability trait
//! rather than a process-global artifact: anything that can map the fixed
//! 14-feature vector to a discrete stress level satisfies [`StressModel`],
//! including test doubles. The concrete [`LinearStressModel`] loads a JSON
//! artifact (fitted scaler + per-class linear weights) once and is
//! read-only afterwards.

pub mod features;
pub mod linear;
pub mod scaler;

pub use features::{
    FeatureVector, CONTINUOUS_FEATURES, FEATURE_COUNT, FEATURE_NAMES, MISSING_FLAGS,
};
pub use linear::LinearStressModel;
pub use scaler::FeatureScaler;

use stress_core::Result;

/// A black-box classifier over the fixed feature contract
///
/// Implementations must be safe to share read-only across request
/// handlers.
pub trait StressModel: Send + Sync {
    /// Short implementation name for logs
    fn name(&self) -> &str;

    /// Map a feature vector to a discrete stress level
    fn predict(&self, features: &FeatureVector) -> Result<u8>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Trait-object usability: the capability must be usable behind `dyn`
    /// and shareable via `Arc`, which is how the server holds it.
    #[test]
    fn test_model_is_object_safe_and_shareable() {
        use std::sync::Arc;

        struct Fixed(u8);
        impl StressModel for Fixed {
            fn name(&self) -> &str {
                "fixed"
            }
            fn predict(&self, _features: &FeatureVector) -> Result<u8> {
                Ok(self.0)
            }
        }

        let model: Arc<dyn StressModel> = Arc::new(Fixed(2));
        let v = FeatureVector::from_slice(&[0.0; FEATURE_COUNT]).unwrap();
        assert_eq!(model.predict(&v).unwrap(), 2);
        assert_eq!(model.name(), "fixed");
    }
}
