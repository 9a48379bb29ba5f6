//! Extension trait for `NaiveDate`.

use chrono::{NaiveDate, TimeZone, Utc};
use crate::astronomy::moon_age;
use crate::hijri;
use crate::julian::to_julian_day;
use crate::types::HijriDate;

/// Extends `NaiveDate` with Hijri and astronomical accessors.
pub trait TaqwimDateExt {
    /// Tabular Hijri equivalent (noon-UTC conversion convention).
    fn to_hijri(&self) -> HijriDate;

    /// Julian Day at noon UTC on this date.
    fn julian_day_noon(&self) -> f64;

    /// Mean moon age in days at noon UTC on this date.
    fn moon_age_at_noon(&self) -> f64;
}

impl TaqwimDateExt for NaiveDate {
    fn to_hijri(&self) -> HijriDate {
        hijri::to_hijri(*self)
    }

    fn julian_day_noon(&self) -> f64 {
        let noon = self.and_hms_opt(12, 0, 0).expect("noon is a valid time");
        to_julian_day(Utc.from_utc_datetime(&noon))
    }

    fn moon_age_at_noon(&self) -> f64 {
        moon_age(self.julian_day_noon())
    }
}
