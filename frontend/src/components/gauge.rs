use std::time::Duration;

use log::error;
use wasm_bindgen_futures::spawn_local;
use yew::platform::time::sleep;
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::req;
use crate::state::{DashboardAction, DashboardState, Phase};
use crate::utils::{self, MoistureZone};

const POLL_INTERVAL_MS: u32 = 2000;
/// Delay before the one-shot status check after a water click, long
/// enough for a default pump run to finish.
const REPOLL_DELAY_MS: u64 = 3000;

/// Where the sensor lives, for the footer. Display only; all calls go
/// through the proxy.
const DEVICE_ADDRESS: &str = match option_env!("PUBLIC_DEVICE_ADDRESS") {
    Some(addr) => addr,
    None => "localhost:8080",
};

async fn poll_once(state: UseReducerHandle<DashboardState>) {
    match req::soil_status().await {
        Ok(reading) => state.dispatch(DashboardAction::StatusFetched(reading)),
        Err(err) => {
            error!("status poll failed: {err}");
            state.dispatch(DashboardAction::StatusFailed(
                "Failed to fetch soil status".to_owned(),
            ));
        }
    }
}

#[function_component(SoilGauge)]
pub fn soil_gauge() -> Html {
    let state = use_reducer(DashboardState::default);

    // one fetch right away, so the gauge is not stuck at its initial 50%
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(poll_once(state));
            || ()
        });
    }

    // recurring poll; dropped with the component
    {
        let state = state.clone();
        use_interval(
            move || spawn_local(poll_once(state.clone())),
            POLL_INTERVAL_MS,
        );
    }

    let on_water = {
        let state = state.clone();
        Callback::from(move |_| {
            if !state.can_water() {
                return;
            }
            state.dispatch(DashboardAction::WaterRequested);

            let state = state.clone();
            spawn_local(async move {
                match req::trigger_water(None).await {
                    Ok(res) if res.success => {
                        state.dispatch(DashboardAction::WaterSucceeded(res));
                        // give the pump time to run, then let a fresh
                        // reading decide whether it is still on
                        sleep(Duration::from_millis(REPOLL_DELAY_MS)).await;
                        poll_once(state).await;
                    }
                    Ok(res) => state.dispatch(DashboardAction::WaterFailed(res.message)),
                    Err(err) => {
                        error!("water request failed: {err}");
                        state.dispatch(DashboardAction::WaterFailed(
                            "Failed to activate pump".to_owned(),
                        ));
                    }
                }
            });
        })
    };

    let droplet_style = format!("top: {}%;", utils::droplet_position(state.moisture));
    let droplet_class = if state.is_pumping {
        "droplet bouncing"
    } else {
        "droplet"
    };
    let droplet_icon = if state.moisture > 70 { "✨" } else { "💧" };

    let zone_badge = match utils::moisture_zone(state.moisture) {
        MoistureZone::Dry => html! { <span class="zone-badge label label-danger">{"DRY!"}</span> },
        MoistureZone::Wet => html! { <span class="zone-badge label label-success">{"WET"}</span> },
        MoistureZone::Normal => html! {},
    };

    let last_update = state
        .last_update
        .map_or("N/A".to_owned(), utils::local_clock);

    let button_label = match state.phase {
        Phase::Requesting => "⏳ Watering...",
        _ if state.is_pumping => "💨 Pump Active",
        _ => "💧 Water Now",
    };

    html! {
        <div class="panel panel-default gauge-panel">
            <div class="panel-heading text-center">
                <h2>{"Gravity Meter"}</h2>
                <p>{"Soil Moisture Monitor"}</p>
                if state.simulated {
                    <span class="label label-warning">{"simulated data"}</span>
                }
            </div>
            <div class="panel-body">
                <div class="gauge-box">
                    <div class={droplet_class} style={droplet_style}>
                        {droplet_icon}
                    </div>
                    {zone_badge}
                    <div class="ground">{"🌱"}</div>
                </div>

                <div class="moisture-row">
                    <span>{"Moisture Level"}</span>
                    <strong>{format!("{}%", state.moisture)}</strong>
                </div>
                <div class="progress">
                    <div
                        class="progress-bar"
                        style={format!("width: {}%;", state.moisture)}
                    />
                </div>

                <table class="table table-hover">
                    <tbody>
                        <tr>
                            <td>{"Pump"}</td>
                            <td>{ if state.is_pumping { "🔵 ON" } else { "⚫ OFF" } }</td>
                        </tr>
                        if let Some(temperature) = state.temperature {
                            <tr>
                                <td>{"Temperature"}</td>
                                <td>{format!("{temperature:.1}°C")}</td>
                            </tr>
                        }
                        <tr>
                            <td>{"Last Update"}</td>
                            <td>{last_update}</td>
                        </tr>
                    </tbody>
                </table>

                if let Some(err) = state.error.as_ref() {
                    <div class="alert alert-danger">
                        <strong>{"Error: "}</strong>{err.clone()}
                    </div>
                }

                <button
                    class="btn btn-primary btn-lg btn-block"
                    onclick={on_water}
                    disabled={!state.can_water()}
                >
                    {button_label}
                </button>

                if let Some(pump_ms) = state.last_pump_ms {
                    <p class="pump-note">
                        {format!(
                            "Last run: {}",
                            humantime::format_duration(Duration::from_millis(pump_ms))
                        )}
                    </p>
                }

                <div class="info-box">
                    <p>
                        {"💡 Click \"Water Now\" to activate the pump. The droplet floats back up as soil moisture rises."}
                    </p>
                    <p class="device-line">{format!("Device: {DEVICE_ADDRESS}")}</p>
                </div>
            </div>
        </div>
    }
}
