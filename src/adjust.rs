//! Moon-age day-boundary adjustment.
//!
//! An approximate proxy for "a new Hijri month began near this sunset": when
//! the estimated moon age at the day's sunset is under one day, the tabular
//! day is overridden to 1. Non-authoritative; for observational accuracy use
//! local sighting or official Umm al-Qura data.

use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use crate::astronomy::{estimate_sunset, moon_age};
use crate::julian::to_julian_day;
use crate::types::{GeoCoordinate, HijriDate};

/// Moon age below which the day is treated as the first of a Hijri month.
pub const NEW_MONTH_AGE_THRESHOLD: f64 = 1.0;

/// Fallback sunset proxy: 18:00 local civil time.
const FALLBACK_SUNSET_HOUR: u32 = 18;

/// Applies the optional moon-age override to a tabular Hijri date.
///
/// Pure function of its arguments. With `adjust_by_moon` off the input is
/// returned untouched. Otherwise the age instant is the estimated sunset for
/// `date` when coordinates are present and the estimator yields one, else
/// 18:00 local on `date` converted to UTC through `local_offset`.
///
/// The override forces the day to 1 but keeps the month and year computed
/// for the unadjusted day — so a tabular 29 Shaʻban becomes 1 Shaʻban, not
/// 1 Ramadan. That is inherited source behavior, preserved observably.
pub fn adjust_day_boundary(
    hijri: HijriDate,
    date: NaiveDate,
    coords: Option<GeoCoordinate>,
    local_offset: FixedOffset,
    adjust_by_moon: bool,
) -> HijriDate {
    if !adjust_by_moon {
        return hijri;
    }

    let jd_sunset = coords
        .and_then(|c| estimate_sunset(date, c))
        .map(to_julian_day)
        .unwrap_or_else(|| fallback_sunset_jd(date, local_offset));

    if moon_age(jd_sunset) < NEW_MONTH_AGE_THRESHOLD {
        hijri.with_day_one()
    } else {
        hijri
    }
}

/// Julian Day of 18:00 local on the given date, via the local-to-UTC offset.
fn fallback_sunset_jd(date: NaiveDate, local_offset: FixedOffset) -> f64 {
    let local_evening = date
        .and_hms_opt(FALLBACK_SUNSET_HOUR, 0, 0)
        .expect("18:00 is a valid time");
    let utc = Utc.from_utc_datetime(&(local_evening - local_offset));
    to_julian_day(utc)
}
