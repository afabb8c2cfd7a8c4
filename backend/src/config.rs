use std::env;
use std::str::FromStr;

use dotenvy::dotenv;

/// Process-wide device configuration, read once at startup and passed
/// explicitly to whatever needs it. Never re-read after that.
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Base URL of the irrigation controller.
    pub device_address: String,
    /// Hard timeout for every outbound device request.
    pub request_timeout_ms: u64,
    /// Pump run time used when an activation request carries none.
    pub default_pump_duration_ms: u64,
    /// Serve simulated readings while the device is unreachable.
    /// With this off, unreachability surfaces as 502 instead.
    pub demo_mode: bool,
    /// Port the proxy listens on (127.0.0.1).
    pub listen_port: u16,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            device_address: "http://192.168.1.100:8080".to_owned(),
            request_timeout_ms: 5000,
            default_pump_duration_ms: 3000,
            demo_mode: true,
            listen_port: 8081,
        }
    }
}

impl DeviceConfig {
    pub fn from_env() -> Self {
        dotenv().ok();

        let defaults = Self::default();
        Self {
            device_address: env::var("DEVICE_ADDRESS").unwrap_or(defaults.device_address),
            request_timeout_ms: env_or("REQUEST_TIMEOUT_MS", defaults.request_timeout_ms),
            default_pump_duration_ms: env_or("PUMP_DURATION_MS", defaults.default_pump_duration_ms),
            demo_mode: env::var("DEMO_MODE")
                .map(|v| parse_bool(&v))
                .unwrap_or(defaults.demo_mode),
            listen_port: env_or("HTTP_PORT", defaults.listen_port),
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn parse_bool(v: &str) -> bool {
    !matches!(
        v.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_device_contract() {
        let cfg = DeviceConfig::default();
        assert_eq!(cfg.device_address, "http://192.168.1.100:8080");
        assert_eq!(cfg.request_timeout_ms, 5000);
        assert_eq!(cfg.default_pump_duration_ms, 3000);
        assert!(cfg.demo_mode);
        assert_eq!(cfg.listen_port, 8081);
    }

    #[test]
    fn bool_parsing_accepts_common_spellings() {
        for off in ["0", "false", "False", "no", "off", " false "] {
            assert!(!parse_bool(off), "{off:?} should disable");
        }
        for on in ["1", "true", "yes", "anything-else"] {
            assert!(parse_bool(on), "{on:?} should enable");
        }
    }
}
