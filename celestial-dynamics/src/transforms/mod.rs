//! Sources of the rotation between the inertial and Earth-fixed frames.

pub mod earth;

pub use earth::{EarthTransforms, EarthTransformsBuilder};

use celestial_core::RotationMatrix3;
use celestial_time::JulianDate;
use std::fmt;

/// Supplies inertial-to-fixed rotation matrices for UTC dates.
///
/// Both methods return `None` when the data they need does not cover the date.
/// Callers try [`icrf_to_fixed_matrix`](Self::icrf_to_fixed_matrix) first and
/// drop to [`teme_to_pseudo_fixed_matrix`](Self::teme_to_pseudo_fixed_matrix)
/// when it is unavailable.
pub trait TransformProvider: Send + Sync + fmt::Debug {
    /// Full ICRF → ITRF rotation (precession, nutation, Earth rotation, polar motion).
    fn icrf_to_fixed_matrix(&self, time: &JulianDate) -> Option<RotationMatrix3>;

    /// TEME → pseudo-fixed rotation: Earth rotation about Z only.
    fn teme_to_pseudo_fixed_matrix(&self, time: &JulianDate) -> Option<RotationMatrix3>;
}
