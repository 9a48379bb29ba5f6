//! Prayer-timings data interface.
//!
//! The surrounding system exposes five named prayer times over HTTP, either
//! hard-coded or proxied from a third-party provider. None of the calendar
//! core consumes this; it is carried here as the data shape plus an optional
//! fetch client behind the `network` feature.

use serde::{Serialize, Deserialize};

/// Five named daily prayer times, as "HH:MM" strings (the wire format).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerTimings {
    #[serde(rename = "Fajr")]
    pub fajr: String,
    #[serde(rename = "Dhuhr")]
    pub dhuhr: String,
    #[serde(rename = "Asr")]
    pub asr: String,
    #[serde(rename = "Maghrib")]
    pub maghrib: String,
    #[serde(rename = "Isha")]
    pub isha: String,
}

/// The static timings table served by the reference backend.
pub fn static_timings() -> PrayerTimings {
    PrayerTimings {
        fajr: "04:30".to_string(),
        dhuhr: "12:15".to_string(),
        asr: "15:45".to_string(),
        maghrib: "18:20".to_string(),
        isha: "19:45".to_string(),
    }
}

/// Fetches timings from a backend's `/timings` endpoint.
///
/// # Errors
/// Any upstream failure (connect, status, body shape) surfaces as
/// `TaqwimError::Network`; the caller treats it as a generic 500-class
/// upstream error.
#[cfg(feature = "network")]
pub async fn fetch_timings(base_url: &str) -> Result<PrayerTimings, crate::types::TaqwimError> {
    use crate::types::TaqwimError;

    let url = format!("{}/timings", base_url.trim_end_matches('/'));
    let response = reqwest::get(&url)
        .await
        .map_err(|e| TaqwimError::Network(format!("timings request failed: {e}")))?;
    let response = response
        .error_for_status()
        .map_err(|e| TaqwimError::Network(format!("timings upstream error: {e}")))?;
    response
        .json()
        .await
        .map_err(|e| TaqwimError::Network(format!("timings response malformed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_table() {
        let t = static_timings();
        assert_eq!(t.fajr, "04:30");
        assert_eq!(t.maghrib, "18:20");
    }

    #[test]
    fn test_wire_format_field_names() {
        let json = serde_json::to_value(static_timings()).unwrap();
        assert_eq!(json["Fajr"], "04:30");
        assert_eq!(json["Dhuhr"], "12:15");
        assert_eq!(json["Asr"], "15:45");
        assert_eq!(json["Maghrib"], "18:20");
        assert_eq!(json["Isha"], "19:45");
    }

    #[test]
    fn test_roundtrip() {
        let t = static_timings();
        let back: PrayerTimings =
            serde_json::from_str(&serde_json::to_string(&t).unwrap()).unwrap();
        assert_eq!(back, t);
    }
}
