use std::time::Duration;

use anyhow::{anyhow, Result};
use futures::future::{select, Either};
use futures::pin_mut;
use reqwest::header::ACCEPT;
use yew::platform::time::sleep;

use common::req::{StatusReading, WaterCommand, WaterResult};

/// Hard ceiling on every request the dashboard makes; nothing the view
/// awaits may hang past this.
const REQUEST_TIMEOUT_MS: u64 = 5000;

fn api_url(endpoint: &str) -> String {
    let host_url = host_url();
    format!("{host_url}/{endpoint}")
}

fn host_url() -> String {
    let location = web_sys::window().unwrap().location();
    format!(
        "{}//{}:8081",
        location.protocol().unwrap(),
        location.hostname().unwrap()
    )
}

async fn with_timeout<T>(fut: impl std::future::Future<Output = Result<T>>) -> Result<T> {
    let timeout = sleep(Duration::from_millis(REQUEST_TIMEOUT_MS));
    pin_mut!(fut);
    pin_mut!(timeout);

    match select(fut, timeout).await {
        Either::Left((res, _)) => res,
        Either::Right(_) => Err(anyhow!("request timed out")),
    }
}

pub async fn soil_status() -> Result<StatusReading> {
    let client = reqwest::Client::new();

    with_timeout(async move {
        Ok(client
            .get(api_url("api/soil-status"))
            .header(ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?
            .json::<StatusReading>()
            .await?)
    })
    .await
}

/// Ask the proxy to run the pump. `duration_ms: None` lets the backend
/// pick its configured default.
pub async fn trigger_water(duration_ms: Option<u64>) -> Result<WaterResult> {
    let client = reqwest::Client::new();

    with_timeout(async move {
        Ok(client
            .post(api_url("api/water"))
            .header(ACCEPT, "application/json")
            .json(&WaterCommand {
                duration: duration_ms,
            })
            .send()
            .await?
            .error_for_status()?
            .json::<WaterResult>()
            .await?)
    })
    .await
}
