use chrono::{Duration, FixedOffset, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use taqwim::prelude::*;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()
}

proptest! {
    /// Invariant: moon age stays in [0, synodic month) for any instant.
    #[test]
    fn moon_age_in_range(jd in 2_300_000.0f64..2_600_000.0) {
        let age = moon_age(jd);
        prop_assert!((0.0..taqwim::astronomy::SYNODIC_MONTH).contains(&age));
    }

    /// Invariant: Julian Day grows by exactly one per civil day.
    #[test]
    fn julian_day_monotonic(days in 0i64..73000) {
        let d0 = base_date() + Duration::days(days);
        let d1 = d0.succ_opt().unwrap();
        let noon0 = Utc.from_utc_datetime(&d0.and_hms_opt(12, 0, 0).unwrap());
        let noon1 = Utc.from_utc_datetime(&d1.and_hms_opt(12, 0, 0).unwrap());
        prop_assert!((to_julian_day(noon1) - to_julian_day(noon0) - 1.0).abs() < 1e-9);
    }

    /// Invariant: the tabular conversion always yields in-range components.
    #[test]
    fn hijri_components_in_range(days in 0i64..73000) {
        let d = base_date() + Duration::days(days);
        let h = to_hijri(d);
        prop_assert!((1..=12).contains(&h.month));
        prop_assert!((1..=30).contains(&h.day));
    }

    /// Invariant: with the moon flag off the adjuster is the identity,
    /// whatever the coordinates.
    #[test]
    fn adjuster_identity_when_disabled(
        days in 0i64..73000,
        lat in -90.0f64..90.0,
        lng in -180.0f64..180.0,
    ) {
        let d = base_date() + Duration::days(days);
        let h = to_hijri(d);
        let coords = Some(GeoCoordinate::new_unchecked(lat, lng));
        let offset = FixedOffset::east_opt(0).unwrap();
        prop_assert_eq!(adjust_day_boundary(h, d, coords, offset, false), h);
    }

    /// Invariant: adjustment only ever forces the day to 1; month and year
    /// never move.
    #[test]
    fn adjuster_touches_day_only(days in 0i64..73000, lng in -180.0f64..180.0) {
        let d = base_date() + Duration::days(days);
        let h = to_hijri(d);
        let coords = Some(GeoCoordinate::new_unchecked(0.0, lng));
        let offset = FixedOffset::east_opt(0).unwrap();
        let adjusted = adjust_day_boundary(h, d, coords, offset, true);
        prop_assert_eq!(adjusted.month, h.month);
        prop_assert_eq!(adjusted.year, h.year);
        prop_assert!(adjusted.day == h.day || adjusted.day == 1);
    }

    /// Invariant: an equatorial observer always has a sunset.
    #[test]
    fn equator_always_sets(days in 0i64..73000, lng in -180.0f64..180.0) {
        let d = base_date() + Duration::days(days);
        let coords = GeoCoordinate::new_unchecked(0.0, lng);
        let hours = taqwim::astronomy::sunset_utc_hours(d, coords);
        prop_assert!(hours.is_some());
        let hours = hours.unwrap();
        prop_assert!((0.0..24.0).contains(&hours));
    }

    /// Invariant: the grid always has exactly days-in-month cells and at
    /// most six leading blanks.
    #[test]
    fn grid_cell_count(year in 1950i32..2100, month0 in 0u32..12) {
        let view = ViewState::new(year, month0);
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let offset = FixedOffset::east_opt(0).unwrap();
        let grid = build_month_grid(year, month0, &view, today, offset).unwrap();
        prop_assert_eq!(grid.cells.len() as u32, taqwim::grid::days_in_month(year, month0));
        prop_assert!(grid.leading_blanks <= 6);
    }
}
