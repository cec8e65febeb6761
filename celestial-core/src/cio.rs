//! CIO-based celestial-to-terrestrial building blocks (IAU 2006).
//!
//! The full chain from the celestial (GCRS/ICRF) frame to the terrestrial (ITRS)
//! frame is
//!
//! ```text
//! ITRS = W · R3(ERA) · C(X, Y, s) · GCRS
//! ```
//!
//! where `C` moves the pole to the Celestial Intermediate Pole and the origin to
//! the CIO, `R3(ERA)` is Earth rotation and `W` is polar motion. This module
//! provides `C` and `W`; ERA lives with the time scales.

use crate::matrix::RotationMatrix3;

/// GCRS → CIRS matrix from CIP coordinates `x`, `y` and CIO locator `s` (radians).
///
/// `R3(-(E+s)) · R2(d) · R3(E)` with `E = atan2(Y, X)` and
/// `d = atan(sqrt((X²+Y²) / (1-X²-Y²)))`.
pub fn gcrs_to_cirs_matrix(x: f64, y: f64, s: f64) -> RotationMatrix3 {
    let r2 = x * x + y * y;
    let e = if r2 > 0.0 { libm::atan2(y, x) } else { 0.0 };
    let d = libm::atan(libm::sqrt(r2 / (1.0 - r2)));

    let mut matrix = RotationMatrix3::identity();
    matrix.rotate_z(e);
    matrix.rotate_y(d);
    matrix.rotate_z(-(e + s));

    matrix
}

/// TIRS → ITRS polar motion matrix `R1(-yp) · R2(-xp) · R3(s')`.
///
/// `x_p`, `y_p` are the pole coordinates and `s_prime` the TIO locator, all in
/// radians.
pub fn polar_motion_matrix(x_p: f64, y_p: f64, s_prime: f64) -> RotationMatrix3 {
    let mut matrix = RotationMatrix3::identity();
    matrix.rotate_z(s_prime);
    matrix.rotate_y(-x_p);
    matrix.rotate_x(-y_p);
    matrix
}
