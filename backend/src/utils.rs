use chrono::{SecondsFormat, Utc};

/// Current proxy time as an ISO-8601 string, millisecond precision.
pub fn iso_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
