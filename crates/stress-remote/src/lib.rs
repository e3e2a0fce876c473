//! Remote prediction client and remote/local selection
//!
//! The remote collaborator is a capability trait ([`RemoteForecaster`])
//! with one HTTP implementation, so the selection logic can be exercised
//! against test doubles. The contract is single-attempt: no retries, no
//! backoff; any failure is absorbed into a deterministic local fallback.

pub mod http;
pub mod selector;
pub mod wire;

pub use http::{HttpForecaster, RemoteParameters, DEFAULT_TIMEOUT};
pub use selector::{ForecastSelector, NoRemote, FALLBACK_MESSAGE};
pub use wire::{ForecastReply, ForecastRequest, DEFAULT_HORIZON};

use stress_core::Result;

/// A remote forecast collaborator
///
/// Implementations make exactly one attempt and map every failure mode to
/// [`stress_core::Error::RemoteUnavailable`].
pub trait RemoteForecaster {
    /// Request a forecast for the given series and horizon
    fn forecast(&self, eda: &[f64], horizon: usize) -> Result<ForecastReply>;
}
