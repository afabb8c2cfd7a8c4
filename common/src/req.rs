// keep in sync with the proxy handlers in web.rs of backend

/// One soil reading as served by `GET /api/soil-status`.
///
/// `timestamp` is stamped by the proxy when the reading passes through,
/// not by the device. `simulated` marks demo-mode fallback data.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReading {
    pub moisture: u8, // percent, 0-100
    pub is_pumping: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>, // °C
    pub timestamp: String, // ISO-8601
    #[serde(default)]
    pub simulated: bool,
}

/// Body of `POST /api/water`. A missing duration means "use the
/// configured default".
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WaterCommand {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>, // ms
}

/// Outcome of a pump activation request.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterResult {
    pub success: bool,
    pub message: String,
    pub pump_duration: u64, // ms
    #[serde(default)]
    pub simulated: bool,
}

/// Error payload passed through when the device answers with a
/// non-success status.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WaterErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_reading_uses_dashboard_field_names() {
        let reading = StatusReading {
            moisture: 42,
            is_pumping: true,
            temperature: None,
            timestamp: "2026-01-01T00:00:00Z".to_owned(),
            simulated: false,
        };

        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["isPumping"], true);
        assert_eq!(json["moisture"], 42);
        // absent temperature must not serialize as null
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn water_command_tolerates_empty_object() {
        let cmd: WaterCommand = serde_json::from_str("{}").unwrap();
        assert_eq!(cmd.duration, None);

        let cmd: WaterCommand = serde_json::from_str(r#"{"duration": 5000}"#).unwrap();
        assert_eq!(cmd.duration, Some(5000));
    }

    #[test]
    fn water_result_reports_pump_duration_in_camel_case() {
        let res = WaterResult {
            success: true,
            message: "Pump activated".to_owned(),
            pump_duration: 3000,
            simulated: true,
        };

        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["pumpDuration"], 3000);
        assert_eq!(json["simulated"], true);
    }
}
