//! Blocking HTTP client for the remote forecast endpoint
//!
//! One request, one fixed timeout, no retries. Every failure mode
//! (connect error, timeout, non-2xx status, unparseable body, malformed
//! shape) collapses into [`Error::RemoteUnavailable`] so the selector can
//! fall back uniformly.

use crate::wire::{ForecastReply, ForecastRequest};
use crate::RemoteForecaster;
use std::env;
use std::time::Duration;
use stress_core::{Error, Result};

/// Environment variable naming the remote endpoint, e.g.
/// `http://127.0.0.1:8000/predict`
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";

/// Environment variable overriding the request timeout in seconds
pub const BACKEND_TIMEOUT_VAR: &str = "BACKEND_TIMEOUT_SECS";

/// Default single-attempt timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

/// Connection parameters for the remote endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteParameters {
    /// Full URL of the forecast endpoint
    pub endpoint: String,
    /// Timeout for the single attempt
    pub timeout: Duration,
}

impl RemoteParameters {
    /// Read parameters from the environment
    ///
    /// Returns `None` when `BACKEND_URL` is unset, which callers treat as
    /// "local pipeline only".
    pub fn from_env() -> Option<Self> {
        let endpoint = env::var(BACKEND_URL_VAR).ok()?;
        if endpoint.trim().is_empty() {
            return None;
        }
        let timeout = env::var(BACKEND_TIMEOUT_VAR)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);
        Some(Self { endpoint, timeout })
    }
}

/// Blocking reqwest-based remote forecaster
#[derive(Debug, Clone)]
pub struct HttpForecaster {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpForecaster {
    /// Build a client for the given endpoint parameters
    pub fn new(params: RemoteParameters) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(params.timeout)
            .build()
            .map_err(|e| Error::RemoteUnavailable(format!("client setup: {e}")))?;
        Ok(Self {
            client,
            endpoint: params.endpoint,
        })
    }

    /// Build a client from `BACKEND_URL` / `BACKEND_TIMEOUT_SECS`
    pub fn from_env() -> Result<Option<Self>> {
        match RemoteParameters::from_env() {
            Some(params) => Ok(Some(Self::new(params)?)),
            None => Ok(None),
        }
    }

    /// The configured endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RemoteForecaster for HttpForecaster {
    fn forecast(&self, eda: &[f64], horizon: usize) -> Result<ForecastReply> {
        let request = ForecastRequest {
            eda: eda.to_vec(),
            horizon,
        };
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .map_err(|e| Error::RemoteUnavailable(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::RemoteUnavailable(e.to_string()))?;

        let reply: ForecastReply = response
            .json()
            .map_err(|e| Error::RemoteUnavailable(format!("reply body: {e}")))?;
        reply.validate()?;
        Ok(reply)
    }
}
