use serde::{Serialize, Deserialize};
use thiserror::Error;
use std::fmt;

/// Errors from taqwim operations.
#[derive(Debug, Error, Clone, Serialize, Deserialize)]
pub enum TaqwimError {
    /// Month index outside the 0-based 0..=11 range.
    #[error("Month index {month} is out of range (expected 0..=11)")]
    InvalidMonth { month: u32 },

    /// Coordinate outside the valid latitude/longitude ranges.
    #[error("Coordinate ({lat}, {lng}) is out of range (lat -90..=90, lng -180..=180)")]
    InvalidCoordinate { lat: f64, lng: f64 },

    /// Geolocation denied, unsupported, or timed out. Non-fatal: the
    /// calendar still renders without coordinates.
    #[error("Location unavailable: {reason}")]
    LocationUnavailable { reason: String },

    /// Upstream prayer-timings fetch failure.
    #[cfg(feature = "network")]
    #[error("Network error: {0}")]
    Network(String),
}

impl TaqwimError {
    /// Creates a `LocationUnavailable` error.
    pub fn location_unavailable(reason: impl Into<String>) -> Self {
        Self::LocationUnavailable { reason: reason.into() }
    }
}

/// Geographic coordinates of the observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Latitude in degrees, -90..=90.
    pub lat: f64,
    /// Longitude in degrees, -180..=180.
    pub lng: f64,
}

impl GeoCoordinate {
    /// Creates a validated coordinate.
    ///
    /// # Errors
    /// Returns `InvalidCoordinate` if either component is out of range.
    pub fn new(lat: f64, lng: f64) -> Result<Self, TaqwimError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(TaqwimError::InvalidCoordinate { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    /// Creates a coordinate without range validation.
    pub fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A tabular (arithmetic) Hijri date.
///
/// Produced by [`crate::hijri::to_hijri`]; the day component may be
/// overridden to 1 by the moon-age adjustment, in which case month and year
/// still reflect the unadjusted arithmetic conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HijriDate {
    pub year: i64,
    /// 1-based month, 1..=12.
    pub month: u32,
    /// 1..=30.
    pub day: u32,
}

impl HijriDate {
    pub fn new(year: i64, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Returns a copy with the day forced to 1, month and year untouched.
    pub fn with_day_one(self) -> Self {
        Self { day: 1, ..self }
    }

    /// Month name from the fixed 12-entry table.
    pub fn month_name(&self) -> &'static str {
        crate::hijri::month_name(self.month)
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_name(), self.year)
    }
}

/// One day cell of the rendered month grid. Ephemeral: rebuilt fully on
/// every render, never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarCell {
    /// Gregorian day of month, 1..=31.
    pub civil_day: u32,
    /// Short weekday name ("Sun".."Sat").
    pub weekday_short: &'static str,
    /// Possibly moon-adjusted Hijri date for this civil day.
    pub hijri: HijriDate,
    pub is_today: bool,
}

/// Full month grid handed to the render sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    /// 0-based month index, 0..=11.
    pub month0: u32,
    /// Blank cells before day 1, equal to its weekday (0 = Sunday).
    pub leading_blanks: u32,
    /// Gregorian label, e.g. "February 2024".
    pub gregorian_label: String,
    /// Hijri label for the 1st of the viewed month, e.g. "Rajab 1445".
    pub hijri_label: String,
    pub cells: Vec<CalendarCell>,
}

/// Navigation and adjustment state for one calendar session.
///
/// Mutated only through [`crate::controller::CalendarViewController`]
/// transitions; every rebuild is a pure function of this value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub viewed_year: i32,
    /// 0-based month index, kept normalized to 0..=11 by navigation.
    pub viewed_month: u32,
    pub location_enabled: bool,
    /// Set once per successful geolocation grant; replaced wholesale,
    /// never mutated. Retained (but unused) while location is disabled.
    pub coords: Option<GeoCoordinate>,
    pub adjust_by_moon: bool,
}

impl ViewState {
    pub fn new(viewed_year: i32, viewed_month: u32) -> Self {
        Self {
            viewed_year,
            viewed_month,
            location_enabled: false,
            coords: None,
            adjust_by_moon: false,
        }
    }

    /// Coordinates to use for sunset estimation: present only while the
    /// location flag is set.
    pub fn effective_coords(&self) -> Option<GeoCoordinate> {
        if self.location_enabled { self.coords } else { None }
    }
}
