use chrono::{DateTime, Local, Utc};

/// Soil wetness bands used for the gauge badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoistureZone {
    Dry,
    Normal,
    Wet,
}

pub fn moisture_zone(moisture: u8) -> MoistureZone {
    match moisture {
        0..=39 => MoistureZone::Dry,
        40..=80 => MoistureZone::Normal,
        _ => MoistureZone::Wet,
    }
}

/// Vertical position of the droplet in percent from the container top.
/// Wet soil floats the droplet up, dry soil lets it fall.
pub fn droplet_position(moisture: u8) -> u8 {
    100 - moisture.min(100)
}

pub fn local_clock(stamp: DateTime<Utc>) -> String {
    stamp.with_timezone(&Local).format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_boundaries_match_the_badges() {
        assert_eq!(moisture_zone(0), MoistureZone::Dry);
        assert_eq!(moisture_zone(39), MoistureZone::Dry);
        assert_eq!(moisture_zone(40), MoistureZone::Normal);
        assert_eq!(moisture_zone(80), MoistureZone::Normal);
        assert_eq!(moisture_zone(81), MoistureZone::Wet);
        assert_eq!(moisture_zone(100), MoistureZone::Wet);
    }

    #[test]
    fn droplet_falls_as_soil_dries() {
        assert_eq!(droplet_position(100), 0);
        assert_eq!(droplet_position(0), 100);
        assert!(droplet_position(20) > droplet_position(70));
    }
}
