//! Month grid construction.

use chrono::{Datelike, FixedOffset, NaiveDate};
use crate::adjust::adjust_day_boundary;
use crate::hijri::{month_name, to_hijri};
use crate::types::{CalendarCell, MonthGrid, TaqwimError, ViewState};

const WEEKDAYS_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Days in a Gregorian month, via the day-0-of-next-month trick.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let (next_year, next_month) = if month0 >= 11 {
        (year + 1, 1)
    } else {
        (year, month0 + 2)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

/// Builds the ordered cell sequence for one Gregorian month.
///
/// Produces exactly `days_in_month` cells, each pairing the civil day with
/// its (possibly moon-adjusted) Hijri date, short weekday name and an
/// `is_today` flag compared by calendar date. The Hijri label comes from the
/// unadjusted conversion of the 1st.
///
/// # Errors
/// Returns `InvalidMonth` for a month index above 11; navigation keeps the
/// index normalized, so hitting this indicates a caller bug.
pub fn build_month_grid(
    year: i32,
    month0: u32,
    view: &ViewState,
    today: NaiveDate,
    local_offset: FixedOffset,
) -> Result<MonthGrid, TaqwimError> {
    if month0 > 11 {
        return Err(TaqwimError::InvalidMonth { month: month0 });
    }
    let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .ok_or(TaqwimError::InvalidMonth { month: month0 })?;

    let leading_blanks = first.weekday().num_days_from_sunday();
    let days = days_in_month(year, month0);
    let coords = view.effective_coords();

    let mut cells = Vec::with_capacity(days as usize);
    for day in 1..=days {
        let date = first.with_day(day).ok_or(TaqwimError::InvalidMonth { month: month0 })?;
        let hijri = adjust_day_boundary(
            to_hijri(date),
            date,
            coords,
            local_offset,
            view.adjust_by_moon,
        );
        cells.push(CalendarCell {
            civil_day: day,
            weekday_short: WEEKDAYS_SHORT[date.weekday().num_days_from_sunday() as usize],
            hijri,
            is_today: date == today,
        });
    }

    let first_hijri = to_hijri(first);
    Ok(MonthGrid {
        year,
        month0,
        leading_blanks,
        gregorian_label: first.format("%B %Y").to_string(),
        hijri_label: format!("{} {}", month_name(first_hijri.month), first_hijri.year),
        cells,
    })
}
