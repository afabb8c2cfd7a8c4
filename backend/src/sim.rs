use rand::Rng;

use common::req::StatusReading;

use crate::utils;

/// Temperature reported while simulating; the mock greenhouse is
/// comfortably tempered.
const SIM_TEMPERATURE: f32 = 22.5;

/// Plausible stand-in reading served while the device is unreachable.
/// Moisture stays inside [0,100] and the pump always reads idle.
pub fn simulated_reading() -> StatusReading {
    let moisture = rand::thread_rng().gen_range(0..100);

    StatusReading {
        moisture,
        is_pumping: false,
        temperature: Some(SIM_TEMPERATURE),
        timestamp: utils::iso_now(),
        simulated: true,
    }
}
