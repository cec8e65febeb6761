pub const J2000_JD: f64 = 2451545.0;

pub const MJD_ZERO_POINT: f64 = 2_400_000.5;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

/// TT - TAI, exact by definition.
pub const TT_MINUS_TAI_SECONDS: f64 = 32.184;

#[allow(clippy::excessive_precision)]
pub const ARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-6;

#[allow(clippy::excessive_precision)]
pub const MILLIARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-9;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

/// Nominal mean angular velocity of the Earth including precession (rad/s), WGS84.
pub const EARTH_PRECESSING_ROTATION_RATE: f64 = 7.2921158553e-5;
