//! Approximate solar and lunar computations.
//!
//! Both submodules are deliberately simplified: the sunset estimator is the
//! NOAA approximate solar position (1-2 minute typical error) and the moon
//! age is a mean-synodic-cycle offset from a fixed reference new moon. They
//! are good enough for the calendar's heuristic day-boundary adjustment and
//! must not be mistaken for ephemeris- or sighting-grade results.

pub mod moon;
pub mod sunset;

pub use moon::{moon_age, NEW_MOON_EPOCH_JD, SYNODIC_MONTH};
pub use sunset::{estimate_sunset, sunset_utc_hours};
