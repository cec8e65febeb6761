//! Time-varying positions and the contract they share.
//!
//! Every position source implements [`PositionProperty`]: it names the frame
//! its values are stored in and answers "where at time `t`", either in that
//! native frame or converted into another one.
//!
//! | Type | Storage |
//! |------|---------|
//! | [`ConstantPositionProperty`] | one vector |
//! | [`SampledPositionProperty`] | time-tagged samples, interpolated |
//! | [`TimeIntervalCollectionPositionProperty`] | one vector per time interval |
//! | [`CompositePositionProperty`] | one sub-property per time interval |

mod composite;
mod constant;
mod interval;
mod sampled;

pub use composite::CompositePositionProperty;
pub use constant::ConstantPositionProperty;
pub use interval::TimeIntervalCollectionPositionProperty;
pub use sampled::{ExtrapolationType, InterpolationAlgorithm, SampledPositionProperty};

use crate::convert::convert_to_reference_frame_into;
use crate::transforms::{EarthTransforms, TransformProvider};
use crate::{DynamicsResult, ReferenceFrame};
use celestial_core::Vector3;
use celestial_time::JulianDate;
use std::fmt;
use std::sync::Arc;

/// A position that may vary with time, expressed in a known reference frame.
///
/// The trait only describes the contract; a type must supply every accessor
/// to be usable as a position:
///
/// ```compile_fail
/// use celestial_dynamics::property::PositionProperty;
///
/// #[derive(Debug)]
/// struct Bare;
///
/// impl PositionProperty for Bare {}
/// ```
///
/// All accessors reject a non-finite `time` with
/// [`DynamicsError::InvalidArgument`](crate::DynamicsError::InvalidArgument)
/// before doing any work.
pub trait PositionProperty: Send + Sync + fmt::Debug {
    /// Frame the stored values are expressed in.
    fn reference_frame(&self) -> ReferenceFrame;

    /// `true` when the value cannot change with time.
    fn is_constant(&self) -> bool;

    /// Value at `time` in [`reference_frame`](Self::reference_frame),
    /// written into `result`.
    fn get_value_into(&self, time: &JulianDate, result: &mut Vector3) -> DynamicsResult<()>;

    /// Value at `time` in `frame`, written into `result`.
    fn get_value_in_reference_frame_into(
        &self,
        time: &JulianDate,
        frame: ReferenceFrame,
        result: &mut Vector3,
    ) -> DynamicsResult<()>;

    /// Value at `time` in the native frame, as a new vector.
    fn get_value(&self, time: &JulianDate) -> DynamicsResult<Vector3> {
        let mut result = Vector3::zeros();
        self.get_value_into(time, &mut result)?;
        Ok(result)
    }

    /// Value at `time` converted into `frame`, as a new vector.
    fn get_value_in_reference_frame(
        &self,
        time: &JulianDate,
        frame: ReferenceFrame,
    ) -> DynamicsResult<Vector3> {
        let mut result = Vector3::zeros();
        self.get_value_in_reference_frame_into(time, frame, &mut result)?;
        Ok(result)
    }
}

/// Provider used by properties built without an explicit one.
pub(crate) fn default_transforms() -> Arc<dyn TransformProvider> {
    Arc::new(EarthTransforms::fallback_only())
}

/// Native value of `property` at `time`, converted into `frame`.
pub(crate) fn native_value_in_frame<P: PositionProperty + ?Sized>(
    property: &P,
    transforms: &dyn TransformProvider,
    time: &JulianDate,
    frame: ReferenceFrame,
    result: &mut Vector3,
) -> DynamicsResult<()> {
    let mut native = Vector3::zeros();
    property.get_value_into(time, &mut native)?;
    convert_to_reference_frame_into(
        transforms,
        time,
        &native,
        property.reference_frame(),
        frame,
        result,
    )
}
