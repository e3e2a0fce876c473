//! Run the local pipeline over a synthetic random-walk EDA trace.
//!
//! ```bash
//! cargo run --example basic_forecast -p stress-pipeline
//! ```

use stress_core::EdaSeries;
use stress_pipeline::ForecastPipeline;

fn main() -> anyhow::Result<()> {
    // Deterministic pseudo random walk, no RNG dependency needed here
    let mut value = 0.5;
    let mut state = 42u64;
    let samples: Vec<f64> = (0..300)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let noise = ((state >> 33) as f64 / (1u64 << 31) as f64) - 1.0;
            value += noise * 0.08;
            value
        })
        .collect();

    let series = EdaSeries::new(samples)?;
    let pipeline = ForecastPipeline::default();
    let result = pipeline.run(&series, 15)?;

    println!("current EDA:  {:.3}", series.last());
    println!("stress score: {:.3}", result.score);
    println!("stress level: {}", result.level);
    println!("forecast ({} steps):", result.horizon());
    for (i, v) in result.forecast.iter().enumerate() {
        println!("  t+{:<2} {:.3}", i + 1, v);
    }
    Ok(())
}
