use anyhow::Result;
use log::info;

mod config;
mod device;
mod sim;
mod utils;
mod web;

#[actix_web::main]
async fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cfg = config::DeviceConfig::from_env();
    info!(
        "proxying device at {} (timeout {} ms, demo mode {})",
        cfg.device_address, cfg.request_timeout_ms, cfg.demo_mode
    );

    let client = device::DeviceClient::new(&cfg)?;
    web::new_http_server(client, cfg).await?;

    Ok(())
}
