//! Dashboard state, hardware- and DOM-independent.
//!
//! Every mutation of the view state goes through [`DashboardState::reduce`];
//! the poll loop, the water button, and the post-activation re-poll only
//! enqueue [`DashboardAction`]s. Interleaved responses therefore cannot
//! corrupt the state, they just apply in arrival order.

use std::rc::Rc;

use chrono::{DateTime, Utc};
use yew::Reducible;

use common::req::{StatusReading, WaterResult};

/// Where the view sits between "nothing going on" and "water flowing".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No activation in flight, pump believed off.
    Idle,
    /// A water request is in flight.
    Requesting,
    /// Pump believed on; waiting for a status fetch to say otherwise.
    Pumping,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub moisture: u8, // percent
    pub is_pumping: bool,
    pub temperature: Option<f32>, // °C
    pub simulated: bool,
    pub last_update: Option<DateTime<Utc>>,
    /// Run time of the most recent accepted activation, for the
    /// confirmation line under the button.
    pub last_pump_ms: Option<u64>,
    pub error: Option<String>,
    pub phase: Phase,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            moisture: 50,
            is_pumping: false,
            temperature: None,
            simulated: false,
            last_update: None,
            last_pump_ms: None,
            error: None,
            phase: Phase::Idle,
        }
    }
}

pub enum DashboardAction {
    StatusFetched(StatusReading),
    StatusFailed(String),
    WaterRequested,
    WaterSucceeded(WaterResult),
    WaterFailed(String),
}

impl DashboardState {
    /// The water button is live only while idle with the pump off.
    pub fn can_water(&self) -> bool {
        self.phase == Phase::Idle && !self.is_pumping
    }
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            DashboardAction::StatusFetched(reading) => {
                next.moisture = reading.moisture;
                next.is_pumping = reading.is_pumping;
                next.temperature = reading.temperature;
                next.simulated = reading.simulated;
                next.last_update = Some(Utc::now());
                next.error = None;
                // A periodic poll must not re-enable the button while a
                // water request is still in flight.
                if next.phase != Phase::Requesting {
                    next.phase = if reading.is_pumping {
                        Phase::Pumping
                    } else {
                        Phase::Idle
                    };
                }
            }
            DashboardAction::StatusFailed(msg) => {
                // stale readings stay on screen, only the banner changes
                next.error = Some(msg);
            }
            DashboardAction::WaterRequested => {
                if next.phase == Phase::Idle {
                    next.phase = Phase::Requesting;
                }
            }
            DashboardAction::WaterSucceeded(result) => {
                next.is_pumping = true;
                next.simulated = result.simulated;
                next.last_pump_ms = Some(result.pump_duration);
                next.error = None;
                next.phase = Phase::Pumping;
            }
            DashboardAction::WaterFailed(msg) => {
                next.error = Some(msg);
                next.phase = Phase::Idle;
            }
        }

        Rc::new(next)
    }
}
