use std::time::Duration;

use anyhow::Result;
use serde_json::json;
use thiserror::Error;

use crate::config::DeviceConfig;

/// Failure modes of a device round trip.
///
/// Everything transport-level (refused connection, timeout, malformed
/// body) collapses into `Unreachable`; callers cannot and should not
/// distinguish further. A reachable device answering with a non-success
/// status stays a distinct case so the proxy can pass the status through.
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("device unreachable: {0}")]
    Unreachable(String),

    #[error("device returned status {status}: {message}")]
    Upstream { status: u16, message: String },
}

/// Status payload of the irrigation controller. All fields are optional
/// on the wire; presence is checked explicitly so a genuine 0% moisture
/// reading survives the trip.
#[derive(Debug, Default, serde::Deserialize)]
pub struct RawStatus {
    pub moisture: Option<f64>,    // percent
    pub pumping: Option<bool>,
    pub temperature: Option<f32>, // °C
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct RawAck {
    pub message: Option<String>,
}

/// HTTP client for the irrigation controller. Cheap to clone; the inner
/// reqwest client pools connections and carries the configured hard
/// timeout on every request.
#[derive(Clone)]
pub struct DeviceClient {
    http: reqwest::Client,
    base: String,
}

impl DeviceClient {
    pub fn new(cfg: &DeviceConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(cfg.request_timeout_ms))
            .build()?;

        Ok(Self {
            http,
            base: cfg.device_address.trim_end_matches('/').to_owned(),
        })
    }

    pub async fn fetch_status(&self) -> Result<RawStatus, DeviceError> {
        let resp = self
            .http
            .get(format!("{}/status", self.base))
            .send()
            .await
            .map_err(|e| DeviceError::Unreachable(e.to_string()))?;

        let resp = check_status(resp)?;
        resp.json::<RawStatus>()
            .await
            .map_err(|e| DeviceError::Unreachable(format!("bad status body: {e}")))
    }

    pub async fn trigger_water(&self, duration_ms: u64) -> Result<RawAck, DeviceError> {
        let resp = self
            .http
            .post(format!("{}/water", self.base))
            .json(&json!({ "duration": duration_ms }))
            .send()
            .await
            .map_err(|e| DeviceError::Unreachable(e.to_string()))?;

        let resp = check_status(resp)?;
        resp.json::<RawAck>()
            .await
            .map_err(|e| DeviceError::Unreachable(format!("bad water body: {e}")))
    }
}

fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, DeviceError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    Err(DeviceError::Upstream {
        status: status.as_u16(),
        message: format!(
            "device error: {}",
            status.canonical_reason().unwrap_or("unknown status")
        ),
    })
}
