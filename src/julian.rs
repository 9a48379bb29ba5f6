//! Julian Day conversion.
//!
//! The Julian Day Number is a continuous day count used as the neutral time
//! axis for every astronomical computation in this crate. The formula is the
//! standard Meeus-style one; floor semantics are `f64::floor` throughout so
//! results stay bit-for-bit reproducible for the downstream lunar and solar
//! math, which is sensitive to small offsets.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Converts a UTC instant to a Julian Day Number.
///
/// Defined for any proleptic Gregorian date chrono can represent; no error
/// outcomes. The day fraction uses whole hours, minutes and seconds.
pub fn to_julian_day(t: DateTime<Utc>) -> f64 {
    let mut y = t.year() as f64;
    let mut m = t.month() as f64;
    let day = t.day() as f64
        + t.hour() as f64 / 24.0
        + t.minute() as f64 / 1440.0
        + t.second() as f64 / 86400.0;
    // January and February count as months 13 and 14 of the prior year.
    if m <= 2.0 {
        y -= 1.0;
        m += 12.0;
    }
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Floored integer Julian Day, the input to the tabular Hijri arithmetic.
pub fn julian_day_number(jd: f64) -> i64 {
    jd.floor() as i64
}
