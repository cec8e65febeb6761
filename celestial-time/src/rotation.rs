use crate::{JulianDate, TimeError, TimeResult};
use celestial_core::constants::{J2000_JD, TWOPI};
use celestial_core::math::{fmod, wrap_0_2pi};

/// Earth Rotation Angle (IAU 2000) for a UT1 date, in `[0, 2π)`.
pub fn earth_rotation_angle(ut1: &JulianDate) -> TimeResult<f64> {
    if !ut1.is_finite() {
        return Err(TimeError::CalculationError(format!(
            "Earth rotation angle requested for non-finite date {}",
            ut1
        )));
    }

    let (d1, d2) = if ut1.jd1() < ut1.jd2() {
        (ut1.jd1(), ut1.jd2())
    } else {
        (ut1.jd2(), ut1.jd1())
    };

    let t = d1 + (d2 - J2000_JD);
    let f = fmod(d1, 1.0) + fmod(d2, 1.0);

    Ok(wrap_0_2pi(
        TWOPI * (f + 0.7790572732640 + 0.00273781191135448 * t),
    ))
}
