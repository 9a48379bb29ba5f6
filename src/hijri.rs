//! Tabular Gregorian-to-Hijri conversion.
//!
//! This is the Kuwaiti-algorithm arithmetic calendar: a fixed 30-year leap
//! cycle over the integer Julian Day, with no lunar observation involved.
//! It is an approximation, deliberately so — it is not the Umm al-Qura civil
//! calendar and can differ from observed dates by a day or two.

use chrono::{NaiveDate, TimeZone, Utc};
use crate::julian::{julian_day_number, to_julian_day};
use crate::types::HijriDate;

/// Epoch offset of the Islamic calendar on the Julian Day axis.
const HIJRI_JD_EPOCH: i64 = 1948440;
/// Days in one 30-year arithmetic cycle.
const CYCLE_DAYS: i64 = 10631;

/// Converts a Gregorian date to its tabular Hijri equivalent.
///
/// Conversion happens at noon UTC on the given date. Callers conventionally
/// convert at noon to keep the floored Julian Day away from the midnight
/// boundary; that convention is load-bearing, not incidental.
pub fn to_hijri(date: NaiveDate) -> HijriDate {
    let noon = Utc
        .from_utc_datetime(&date.and_hms_opt(12, 0, 0).expect("noon is a valid time"));
    to_hijri_at(noon)
}

/// Converts the Gregorian calendar day containing the given UTC instant.
///
/// Total function: every integer Julian Day maps to exactly one Hijri date.
/// All divisions are floor divisions to match the reference arithmetic for
/// any sign of the intermediates.
pub fn to_hijri_at(t: chrono::DateTime<Utc>) -> HijriDate {
    let jd = julian_day_number(to_julian_day(t));

    let mut l = jd - HIJRI_JD_EPOCH + 10632;
    let n = (l - 1).div_euclid(CYCLE_DAYS);
    l = l - CYCLE_DAYS * n + 354;
    // Leap-year correction within the 30-year cycle.
    let j = (10985 - l).div_euclid(5316) * (50 * l).div_euclid(17719)
        + l.div_euclid(5670) * (43 * l).div_euclid(15238);
    l = l
        - (30 - j).div_euclid(15) * (17719 * j).div_euclid(50)
        - j.div_euclid(16) * (15238 * j).div_euclid(43)
        + 29;
    let month = (24 * l).div_euclid(709);
    let day = l - (709 * month).div_euclid(24);
    let year = 30 * n + j - 30;

    HijriDate::new(year, month as u32, day as u32)
}

/// Hijri month name from the fixed table; index 0 is unused.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Muharram",
        2 => "Safar",
        3 => "Rabiʻ I",
        4 => "Rabiʻ II",
        5 => "Jumada I",
        6 => "Jumada II",
        7 => "Rajab",
        8 => "Shaʻban",
        9 => "Ramadan",
        10 => "Shawwal",
        11 => "Dhuʻl-Qiʻdah",
        12 => "Dhuʻl-Hijjah",
        _ => "Unknown",
    }
}
