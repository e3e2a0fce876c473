//! Core types for the stress-forecast workspace
//!
//! This crate provides the unified error taxonomy and the validated
//! sample-series type that every other crate in the workspace builds on.
//! Nothing here performs any signal processing; the math lives in
//! `stress-pipeline`.

pub mod error;
pub mod series;

pub use error::{Error, Result};
pub use series::{EdaSeries, MIN_SAMPLES};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
