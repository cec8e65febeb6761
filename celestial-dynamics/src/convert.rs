//! Re-expressing a position between the inertial and Earth-fixed frames.
//!
//! The rotation comes from a [`TransformProvider`]: the full ICRF → fixed
//! matrix when available, else the TEME → pseudo-fixed approximation. Going
//! from fixed back to inertial applies the transpose, which is the inverse of
//! a rotation.
//!
//! ```
//! use celestial_core::Vector3;
//! use celestial_dynamics::convert::convert_to_reference_frame;
//! use celestial_dynamics::transforms::EarthTransforms;
//! use celestial_dynamics::ReferenceFrame;
//! use celestial_time::JulianDate;
//!
//! let provider = EarthTransforms::fallback_only();
//! let t = JulianDate::j2000();
//! let v = Vector3::new(6378137.0, 0.0, 0.0);
//!
//! let fixed = convert_to_reference_frame(&provider, &t, &v, ReferenceFrame::Inertial, ReferenceFrame::Fixed)?;
//! let back = convert_to_reference_frame(&provider, &t, &fixed, ReferenceFrame::Fixed, ReferenceFrame::Inertial)?;
//! assert!(back.max_difference(&v) < 1e-8);
//! # Ok::<(), celestial_dynamics::DynamicsError>(())
//! ```

use crate::errors::require_time;
use crate::transforms::TransformProvider;
use crate::{DynamicsError, DynamicsResult, ReferenceFrame};
use celestial_core::{RotationMatrix3, Vector3};
use celestial_time::JulianDate;
use tracing::{debug, warn};

/// Converts `value` from `input` to `output` at `time`, returning a new vector.
pub fn convert_to_reference_frame(
    provider: &dyn TransformProvider,
    time: &JulianDate,
    value: &Vector3,
    input: ReferenceFrame,
    output: ReferenceFrame,
) -> DynamicsResult<Vector3> {
    let mut result = Vector3::zeros();
    convert_to_reference_frame_into(provider, time, value, input, output, &mut result)?;
    Ok(result)
}

/// Converts `value` from `input` to `output` at `time`, writing into `result`.
///
/// When the frames match the value is copied exactly and `provider` is not
/// consulted. `result` is left untouched on error.
pub fn convert_to_reference_frame_into(
    provider: &dyn TransformProvider,
    time: &JulianDate,
    value: &Vector3,
    input: ReferenceFrame,
    output: ReferenceFrame,
    result: &mut Vector3,
) -> DynamicsResult<()> {
    require_time(time, "time")?;
    if !value.is_finite() {
        return Err(DynamicsError::invalid_argument(format!(
            "value must be finite (got {})",
            value
        )));
    }

    if input == output {
        value.copy_into(result);
        return Ok(());
    }

    let matrix = inertial_to_fixed_matrix(provider, time)?;

    match input {
        ReferenceFrame::Inertial => matrix.multiply_vector_into(value, result),
        ReferenceFrame::Fixed => {
            let mut transposed = RotationMatrix3::identity();
            matrix.transpose_into(&mut transposed);
            transposed.multiply_vector_into(value, result);
        }
    }

    Ok(())
}

/// Primary matrix from `provider`, or its fallback.
pub fn inertial_to_fixed_matrix(
    provider: &dyn TransformProvider,
    time: &JulianDate,
) -> DynamicsResult<RotationMatrix3> {
    if let Some(matrix) = provider.icrf_to_fixed_matrix(time) {
        return Ok(matrix);
    }

    debug!(%time, "ICRF to fixed matrix unavailable, using TEME pseudo-fixed");
    provider.teme_to_pseudo_fixed_matrix(time).ok_or_else(|| {
        warn!(%time, "no inertial to fixed transform available");
        DynamicsError::TransformUnavailable { julian_date: *time }
    })
}
