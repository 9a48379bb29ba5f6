//! Approximate Gregorian-to-Hijri calendar engine.
//!
//! taqwim converts civil dates to tabular (arithmetic) Hijri dates, renders
//! month grids, and optionally nudges the Hijri day boundary using a
//! moon-age test at the estimated local sunset. Everything astronomical here
//! is an approximation by design: the Kuwaiti-style arithmetic calendar (not
//! Umm al-Qura), the NOAA approximate sunset, and a mean-synodic moon age.
//! None of it is observation-grade and the crate never pretends otherwise.

pub mod adjust;
pub mod astronomy;
pub mod controller;
pub mod extension;
pub mod grid;
pub mod hijri;
pub mod julian;
pub mod timings;
pub mod types;

pub use adjust::adjust_day_boundary;
pub use controller::{CalendarViewController, Clock, GeoProvider, RenderSink, SystemClock};
pub use extension::TaqwimDateExt;
pub use grid::build_month_grid;
pub use hijri::to_hijri;
pub use julian::to_julian_day;
pub use types::{CalendarCell, GeoCoordinate, HijriDate, MonthGrid, TaqwimError, ViewState};

pub mod prelude {
    pub use crate::adjust::adjust_day_boundary;
    pub use crate::astronomy::{estimate_sunset, moon_age};
    pub use crate::controller::{CalendarViewController, Clock, GeoProvider, RenderSink};
    pub use crate::extension::TaqwimDateExt;
    pub use crate::grid::build_month_grid;
    pub use crate::hijri::to_hijri;
    pub use crate::julian::to_julian_day;
    pub use crate::types::*;
}
