//! Classify one feature vector with an in-memory linear model.
//!
//! ```bash
//! cargo run --example classify -p stress-model
//! ```

use stress_core::Result;
use stress_model::{
    FeatureScaler, FeatureVector, LinearStressModel, StressModel, FEATURE_COUNT,
};

fn main() -> Result<()> {
    // Two classes keyed off the heart-rate reading (feature index 7)
    let mut calm = vec![0.0; FEATURE_COUNT];
    calm[7] = -1.0;
    let mut stressed = vec![0.0; FEATURE_COUNT];
    stressed[7] = 1.0;

    let model = LinearStressModel::from_parts(
        FeatureScaler::new([85.0, 20.0, 91.0, 10.0, 90.0, 85.0, 5.0, 70.0], [10.0; 8])?,
        vec![0, 2],
        vec![calm, stressed],
        vec![0.0, 0.0],
    )?;

    let features = FeatureVector::from_slice(&[
        85.76, 23.54, 90.77, 13.92, 88.77, 96.92, 0.77, 68.84, // readings
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0, // missing flags
    ])?;

    let level = model.predict(&features)?;
    println!("predicted stress level: {level}");
    Ok(())
}
