//! Approximate sunset time (NOAA solar calculation).
//!
//! Based on the NOAA approximate solar position equations
//! (<https://gml.noaa.gov/grad/solcalc/solareqns.PDF>). Typical error is one
//! to two minutes; this is not a full ephemeris and is never presented as
//! one.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use crate::types::GeoCoordinate;

/// Official zenith angle at apparent sunset: 90° plus atmospheric
/// refraction and the solar disc radius.
const ZENITH_OFFICIAL: f64 = 90.833;
/// Anchor hour for the sunset approximation (6 would be sunrise).
const SUNSET_ANCHOR_HOUR: f64 = 18.0;

fn fix_angle(mut a: f64) -> f64 {
    a %= 360.0;
    if a < 0.0 {
        a += 360.0;
    }
    a
}

/// Estimates the UTC hour of sunset on the given calendar date, or `None`
/// when the sun never sets or never rises there (polar day/night).
///
/// The `None` case is a signal, not an error; callers fall back to a
/// heuristic sunset proxy.
pub fn sunset_utc_hours(date: NaiveDate, coords: GeoCoordinate) -> Option<f64> {
    let n = date.ordinal() as f64;
    let lng_hour = coords.lng / 15.0;
    let t = n + (SUNSET_ANCHOR_HOUR - lng_hour) / 24.0;

    // Sun's mean anomaly and true longitude.
    let m = 0.9856 * t - 3.289;
    let l = fix_angle(
        m + 1.916 * m.to_radians().sin() + 0.020 * (2.0 * m).to_radians().sin() + 282.634,
    );

    // Right ascension, quadrant-matched to L, in hours.
    let mut ra = fix_angle(
        (0.91764 * l.to_radians().sin())
            .atan2(l.to_radians().cos())
            .to_degrees(),
    );
    let l_quadrant = (l / 90.0).floor() * 90.0;
    let ra_quadrant = (ra / 90.0).floor() * 90.0;
    ra = (ra + (l_quadrant - ra_quadrant)) / 15.0;

    // Declination and local hour angle.
    let sin_dec = 0.39782 * l.to_radians().sin();
    let cos_dec = sin_dec.asin().cos();
    let cos_h = (ZENITH_OFFICIAL.to_radians().cos() - sin_dec * coords.lat.to_radians().sin())
        / (cos_dec * coords.lat.to_radians().cos());
    if cos_h > 1.0 {
        return None; // sun never sets
    }
    if cos_h < -1.0 {
        return None; // sun never rises
    }
    let h = cos_h.acos().to_degrees() / 15.0;

    // Local mean time of setting, then UTC normalized to [0, 24).
    let t_local = h + ra - 0.06571 * t - 6.622;
    let mut ut = (t_local - lng_hour) % 24.0;
    if ut < 0.0 {
        ut += 24.0;
    }
    Some(ut)
}

/// Sunset as a UTC instant on the given calendar date, truncating the
/// fractional hour to whole hours/minutes/seconds.
pub fn estimate_sunset(date: NaiveDate, coords: GeoCoordinate) -> Option<DateTime<Utc>> {
    let ut_hours = sunset_utc_hours(date, coords)?;
    let hour = ut_hours.floor();
    let minute = ((ut_hours - hour) * 60.0).floor();
    let second = (((ut_hours - hour) * 60.0 - minute) * 60.0).floor();
    Utc.with_ymd_and_hms(
        date.year(),
        date.month(),
        date.day(),
        hour as u32,
        minute as u32,
        second as u32,
    )
    .single()
}
