//! Greenwich hour angle for the TEME → pseudo-fixed rotation.
//!
//! This is the low-fidelity Earth model: IAU 1982 GMST at 0h plus the WGS84
//! precessing rotation rate, with UTC standing in for UT1. It ignores nutation
//! and polar motion, so the "fixed" frame it produces drifts from ITRS by a few
//! tens of metres at the surface, but it needs no external data.

use crate::{JulianDate, TimeError, TimeResult};
use celestial_core::constants::{
    DAYS_PER_JULIAN_CENTURY, EARTH_PRECESSING_ROTATION_RATE, J2000_JD, SECONDS_PER_DAY_F64,
    TWOPI,
};
use celestial_core::math::fmod;

const GMST0_SECONDS: [f64; 4] = [24110.54841, 8640184.812866, 0.093104, -6.2e-6];

/// Drift of the rotation rate per day since J2000.5.
const ROTATION_RATE_DRIFT: f64 = 1.1772758384668e-19;

/// Greenwich hour angle (radians) of the mean equinox for a UTC date.
pub fn pseudo_fixed_hour_angle(utc: &JulianDate) -> TimeResult<f64> {
    if !utc.is_finite() {
        return Err(TimeError::CalculationError(format!(
            "Greenwich hour angle requested for non-finite date {}",
            utc
        )));
    }

    let (day_number, seconds_of_day) = utc.day_number_and_seconds();
    let days_from_j2000 = day_number - J2000_JD;

    // Centuries to 0h UTC of the civil day containing the instant.
    let t = if seconds_of_day >= 0.5 * SECONDS_PER_DAY_F64 {
        (days_from_j2000 + 0.5) / DAYS_PER_JULIAN_CENTURY
    } else {
        (days_from_j2000 - 0.5) / DAYS_PER_JULIAN_CENTURY
    };

    let [c0, c1, c2, c3] = GMST0_SECONDS;
    let gmst0 = c0 + t * (c1 + t * (c2 + t * c3));
    let angle = fmod(gmst0 * TWOPI / SECONDS_PER_DAY_F64, TWOPI);

    let rate = EARTH_PRECESSING_ROTATION_RATE + ROTATION_RATE_DRIFT * (days_from_j2000 - 0.5);
    let seconds_since_midnight = fmod(
        seconds_of_day + 0.5 * SECONDS_PER_DAY_F64,
        SECONDS_PER_DAY_F64,
    );

    Ok(angle + rate * seconds_since_midnight)
}
