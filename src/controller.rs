//! Calendar view state machine.
//!
//! Holds the session's [`ViewState`] and reacts to navigation, location and
//! adjustment events by rebuilding the month grid and handing it to the
//! render sink. Single logical thread of control; the only suspension point
//! is the one-shot geolocation request, modelled as a begin/complete pair so
//! a stale late result can be detected and ignored.

use chrono::{Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime};
use crate::grid::build_month_grid;
use crate::types::{GeoCoordinate, MonthGrid, TaqwimError, ViewState};

/// Output sink for rendered grids and status lines. The core assumes
/// nothing about the presentation format.
pub trait RenderSink {
    fn render(&mut self, grid: &MonthGrid);
    fn status(&mut self, message: &str);
}

/// Current-time source, consulted once per render for the today flag and
/// once for the initial view state.
pub trait Clock {
    fn now_local(&self) -> NaiveDateTime;
    /// Local-to-UTC offset, used by the 18:00 fallback sunset proxy.
    fn local_offset(&self) -> FixedOffset;

    fn today(&self) -> NaiveDate {
        self.now_local().date()
    }
}

/// System clock backed by `chrono::Local`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_local(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn local_offset(&self) -> FixedOffset {
        *Local::now().offset()
    }
}

/// One-shot geolocation capability.
pub trait GeoProvider {
    /// Requests the observer position exactly once; failure is non-fatal
    /// and downgrades to the location-disabled state.
    fn request_once(&mut self) -> Result<GeoCoordinate, TaqwimError>;
}

/// Always yields the same coordinates.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub GeoCoordinate);

impl GeoProvider for FixedLocation {
    fn request_once(&mut self) -> Result<GeoCoordinate, TaqwimError> {
        Ok(self.0)
    }
}

/// Geolocation unsupported: every request fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

impl GeoProvider for NoLocation {
    fn request_once(&mut self) -> Result<GeoCoordinate, TaqwimError> {
        Err(TaqwimError::location_unavailable("geolocation not available"))
    }
}

/// Token for an in-flight location request. A completion whose token no
/// longer matches the controller's epoch is stale and gets dropped, so an
/// enable followed by a disable cannot be re-enabled by a late callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationRequest {
    epoch: u64,
}

pub struct CalendarViewController<R: RenderSink, C: Clock> {
    view: ViewState,
    sink: R,
    clock: C,
    location_epoch: u64,
}

impl<R: RenderSink, C: Clock> CalendarViewController<R, C> {
    /// Starts at the clock's current month, location and adjustment off.
    pub fn new(sink: R, clock: C) -> Self {
        let today = clock.today();
        let view = ViewState::new(today.year(), today.month0());
        Self { view, sink, clock, location_epoch: 0 }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    /// Rebuilds the grid from current state and pushes it to the sink,
    /// followed by the mode-appropriate informational status line.
    pub fn render(&mut self) -> Result<(), TaqwimError> {
        let grid = build_month_grid(
            self.view.viewed_year,
            self.view.viewed_month,
            &self.view,
            self.clock.today(),
            self.clock.local_offset(),
        )?;
        self.sink.render(&grid);
        if self.view.adjust_by_moon {
            self.sink.status(
                "Moon-age adjustment enabled (approximate). Uses a simplified moon-age test \
                 at local sunset (approx 18:00). For strict observational accuracy use local \
                 sighting or official Umm al-Qura data.",
            );
        } else {
            self.sink.status(
                "Showing arithmetic (tabular) Hijri dates. Enable \"Adjust by moon\" for a \
                 simple location-based approximation.",
            );
        }
        Ok(())
    }

    pub fn navigate_previous(&mut self) -> Result<(), TaqwimError> {
        if self.view.viewed_month == 0 {
            self.view.viewed_month = 11;
            self.view.viewed_year -= 1;
        } else {
            self.view.viewed_month -= 1;
        }
        self.render()
    }

    pub fn navigate_next(&mut self) -> Result<(), TaqwimError> {
        if self.view.viewed_month == 11 {
            self.view.viewed_month = 0;
            self.view.viewed_year += 1;
        } else {
            self.view.viewed_month += 1;
        }
        self.render()
    }

    pub fn toggle_adjust_by_moon(&mut self) -> Result<(), TaqwimError> {
        self.view.adjust_by_moon = !self.view.adjust_by_moon;
        self.render()
    }

    /// First half of the enable-location transition: announces the pending
    /// request and returns the token its completion must carry.
    pub fn begin_location_request(&mut self) -> LocationRequest {
        // A newer request supersedes any still in flight.
        self.location_epoch += 1;
        self.sink.status("Requesting location...");
        LocationRequest { epoch: self.location_epoch }
    }

    /// Second half: applies a delivered-once geolocation outcome. Stale
    /// completions (an intervening disable or newer request) are ignored
    /// without touching state.
    pub fn complete_location_request(
        &mut self,
        request: LocationRequest,
        outcome: Result<GeoCoordinate, TaqwimError>,
    ) -> Result<(), TaqwimError> {
        if request.epoch != self.location_epoch {
            return Ok(());
        }
        match outcome {
            Ok(coords) => {
                self.view.coords = Some(coords);
                self.view.location_enabled = true;
                let msg = format!("Location set: {:.4}, {:.4}.", coords.lat, coords.lng);
                self.sink.status(&msg);
            }
            Err(_) => {
                self.view.location_enabled = false;
                self.sink.status("Location permission denied or unavailable.");
            }
        }
        self.render()
    }

    /// Synchronous convenience wrapper around begin/complete.
    pub fn enable_location(&mut self, provider: &mut dyn GeoProvider) -> Result<(), TaqwimError> {
        let request = self.begin_location_request();
        let outcome = provider.request_once();
        self.complete_location_request(request, outcome)
    }

    /// Clears the location flag; coordinates are retained but unused.
    pub fn disable_location(&mut self) -> Result<(), TaqwimError> {
        self.location_epoch += 1;
        self.view.location_enabled = false;
        self.sink.status("Location disabled.");
        self.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    /// Fixed clock for deterministic tests.
    struct TestClock(NaiveDate);

    impl Clock for TestClock {
        fn now_local(&self) -> NaiveDateTime {
            self.0.and_time(NaiveTime::from_hms_opt(9, 30, 0).unwrap())
        }

        fn local_offset(&self) -> FixedOffset {
            FixedOffset::east_opt(0).unwrap()
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        grids: Vec<MonthGrid>,
        statuses: Vec<String>,
    }

    impl RenderSink for RecordingSink {
        fn render(&mut self, grid: &MonthGrid) {
            self.grids.push(grid.clone());
        }

        fn status(&mut self, message: &str) {
            self.statuses.push(message.to_string());
        }
    }

    fn controller(
        year: i32,
        month: u32,
        day: u32,
    ) -> CalendarViewController<RecordingSink, TestClock> {
        let clock = TestClock(NaiveDate::from_ymd_opt(year, month, day).unwrap());
        CalendarViewController::new(RecordingSink::default(), clock)
    }

    #[test]
    fn test_initial_state_from_clock() {
        let ctl = controller(2024, 6, 15);
        assert_eq!(ctl.view().viewed_year, 2024);
        assert_eq!(ctl.view().viewed_month, 5);
        assert!(!ctl.view().location_enabled);
        assert!(!ctl.view().adjust_by_moon);
    }

    #[test]
    fn test_navigation_year_rollover() {
        let mut ctl = controller(2024, 12, 15);
        ctl.navigate_next().unwrap();
        assert_eq!((ctl.view().viewed_year, ctl.view().viewed_month), (2025, 0));
        ctl.navigate_previous().unwrap();
        assert_eq!((ctl.view().viewed_year, ctl.view().viewed_month), (2024, 11));
    }

    #[test]
    fn test_navigation_backward_rollover() {
        let mut ctl = controller(2024, 1, 15);
        ctl.navigate_previous().unwrap();
        assert_eq!((ctl.view().viewed_year, ctl.view().viewed_month), (2023, 11));
    }

    #[test]
    fn test_render_pushes_grid_and_info() {
        let mut ctl = controller(2024, 2, 10);
        ctl.render().unwrap();
        let grid = ctl.sink.grids.last().unwrap();
        assert_eq!(grid.cells.len(), 29);
        assert!(grid.cells[9].is_today);
        assert!(ctl.sink.statuses.last().unwrap().contains("tabular"));
    }

    #[test]
    fn test_toggle_adjust_changes_info_line() {
        let mut ctl = controller(2024, 2, 10);
        ctl.toggle_adjust_by_moon().unwrap();
        assert!(ctl.view().adjust_by_moon);
        assert!(ctl.sink.statuses.last().unwrap().contains("Moon-age adjustment"));
        ctl.toggle_adjust_by_moon().unwrap();
        assert!(!ctl.view().adjust_by_moon);
    }

    #[test]
    fn test_enable_location_success() {
        let mut ctl = controller(2024, 2, 10);
        let mut provider = FixedLocation(GeoCoordinate::new_unchecked(-6.2088, 106.8456));
        ctl.enable_location(&mut provider).unwrap();
        assert!(ctl.view().location_enabled);
        assert!(ctl.view().coords.is_some());
        assert!(ctl.sink.statuses.iter().any(|s| s.starts_with("Location set: -6.2088")));
    }

    #[test]
    fn test_enable_location_failure_is_nonfatal() {
        let mut ctl = controller(2024, 2, 10);
        ctl.enable_location(&mut NoLocation).unwrap();
        assert!(!ctl.view().location_enabled);
        assert!(ctl.sink.statuses.iter().any(|s| s.contains("denied or unavailable")));
        // Calendar still rendered without coordinates.
        assert!(!ctl.sink.grids.is_empty());
    }

    #[test]
    fn test_stale_completion_after_disable_is_ignored() {
        let mut ctl = controller(2024, 2, 10);
        let request = ctl.begin_location_request();
        ctl.disable_location().unwrap();
        let coords = GeoCoordinate::new_unchecked(21.4225, 39.8262);
        ctl.complete_location_request(request, Ok(coords)).unwrap();
        assert!(!ctl.view().location_enabled, "stale grant must not re-enable location");
        assert_eq!(ctl.view().coords, None);
    }

    #[test]
    fn test_disable_keeps_coords_but_unused() {
        let mut ctl = controller(2024, 2, 10);
        let mut provider = FixedLocation(GeoCoordinate::new_unchecked(0.0, 0.0));
        ctl.enable_location(&mut provider).unwrap();
        ctl.disable_location().unwrap();
        assert!(!ctl.view().location_enabled);
        assert!(ctl.view().coords.is_some());
        assert_eq!(ctl.view().effective_coords(), None);
    }
}
