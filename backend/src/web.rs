use actix_cors::Cors;
use actix_web::{
    get,
    http::{header, StatusCode},
    post,
    web::{self, Data},
    App, HttpResponse, HttpServer, Responder,
};
use log::{info, warn};

use common::req::{ErrorResponse, StatusReading, WaterCommand, WaterErrorResponse, WaterResult};

use crate::config::DeviceConfig;
use crate::device::{DeviceClient, DeviceError};
use crate::{sim, utils};

/// Moisture reported when the device answers without the field at all.
/// A real reading of 0 is kept as 0.
const MOISTURE_FALLBACK: u8 = 50;

#[get("/")]
async fn hello() -> impl Responder {
    HttpResponse::Ok().body("soil proxy")
}

#[get("/api/soil-status")]
pub(crate) async fn api_soil_status(
    client: Data<DeviceClient>,
    cfg: Data<DeviceConfig>,
) -> impl Responder {
    match client.fetch_status().await {
        Ok(raw) => HttpResponse::Ok().json(StatusReading {
            moisture: raw.moisture.map_or(MOISTURE_FALLBACK, |m| m as u8),
            is_pumping: raw.pumping.unwrap_or(false),
            temperature: raw.temperature,
            timestamp: utils::iso_now(),
            simulated: false,
        }),
        Err(DeviceError::Upstream { status, message }) => {
            passthrough_status(status).json(ErrorResponse { error: message })
        }
        Err(DeviceError::Unreachable(reason)) => {
            if cfg.demo_mode {
                warn!("device unreachable ({reason}), serving simulated reading");
                HttpResponse::Ok().json(sim::simulated_reading())
            } else {
                HttpResponse::BadGateway().json(ErrorResponse {
                    error: format!("device unreachable: {reason}"),
                })
            }
        }
    }
}

#[post("/api/water")]
pub(crate) async fn api_water(
    body: web::Bytes,
    client: Data<DeviceClient>,
    cfg: Data<DeviceConfig>,
) -> impl Responder {
    // An absent or unparsable body is a plain "water now" click.
    let duration = serde_json::from_slice::<WaterCommand>(&body)
        .ok()
        .and_then(|cmd| cmd.duration)
        .unwrap_or(cfg.default_pump_duration_ms);

    match client.trigger_water(duration).await {
        Ok(ack) => {
            info!("pump activated for {duration} ms");
            HttpResponse::Ok().json(WaterResult {
                success: true,
                message: ack.message.unwrap_or_else(|| "Pump activated".to_owned()),
                pump_duration: duration,
                simulated: false,
            })
        }
        Err(DeviceError::Upstream { status, message }) => {
            passthrough_status(status).json(WaterErrorResponse {
                success: false,
                error: message,
                message: "Failed to activate pump".to_owned(),
            })
        }
        Err(DeviceError::Unreachable(reason)) => {
            if cfg.demo_mode {
                warn!("device unreachable ({reason}), simulating pump activation");
                HttpResponse::Ok().json(WaterResult {
                    success: true,
                    message: "Pump activated (simulated)".to_owned(),
                    pump_duration: duration,
                    simulated: true,
                })
            } else {
                HttpResponse::BadGateway().json(WaterErrorResponse {
                    success: false,
                    error: format!("device unreachable: {reason}"),
                    message: "Failed to activate pump".to_owned(),
                })
            }
        }
    }
}

/// Mirror the device's own status code on the proxy response.
fn passthrough_status(status: u16) -> actix_web::HttpResponseBuilder {
    HttpResponse::build(StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY))
}

pub async fn new_http_server(client: DeviceClient, cfg: DeviceConfig) -> std::io::Result<()> {
    let port = cfg.listen_port;

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(client.clone()))
            .app_data(Data::new(cfg.clone()))
            .service(hello)
            .service(api_soil_status)
            .service(api_water)
            .wrap(
                Cors::default()
                    .allowed_origin("http://127.0.0.1:8080") // frontend
                    .allowed_methods(vec!["GET", "POST"])
                    .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT])
                    .allowed_header(header::CONTENT_TYPE)
                    .supports_credentials()
                    .max_age(3600),
            )
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await
}
