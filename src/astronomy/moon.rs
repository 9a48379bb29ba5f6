//! Mean-synodic moon age.

/// Mean synodic month length in days.
pub const SYNODIC_MONTH: f64 = 29.530588853;

/// Julian Day of the reference new moon (6 Jan 2000).
pub const NEW_MOON_EPOCH_JD: f64 = 2451550.1;

/// Elapsed days since the most recent mean new moon, in [0, SYNODIC_MONTH).
///
/// A fixed-epoch mean-cycle approximation: it drifts from the true lunar
/// phase by up to roughly ±14 hours over the years and ignores orbital
/// eccentricity. Acceptable for the approximate day-boundary adjustment,
/// not for sighting-grade work.
pub fn moon_age(jd: f64) -> f64 {
    let mut age = (jd - NEW_MOON_EPOCH_JD) % SYNODIC_MONTH;
    if age < 0.0 {
        age += SYNODIC_MONTH;
    }
    age
}
