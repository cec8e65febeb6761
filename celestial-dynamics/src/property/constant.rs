use super::{default_transforms, native_value_in_frame, PositionProperty};
use crate::errors::require_time;
use crate::transforms::TransformProvider;
use crate::{DynamicsResult, ReferenceFrame};
use celestial_core::Vector3;
use celestial_time::JulianDate;
use std::sync::Arc;

/// A position that never changes in its own frame.
///
/// A point fixed on the ground is constant in [`ReferenceFrame::Fixed`] but
/// still moves when viewed in [`ReferenceFrame::Inertial`].
#[derive(Debug, Clone)]
pub struct ConstantPositionProperty {
    value: Vector3,
    frame: ReferenceFrame,
    transforms: Arc<dyn TransformProvider>,
}

impl ConstantPositionProperty {
    pub fn new(value: Vector3, frame: ReferenceFrame) -> Self {
        Self {
            value,
            frame,
            transforms: default_transforms(),
        }
    }

    pub fn with_transforms(mut self, transforms: Arc<dyn TransformProvider>) -> Self {
        self.transforms = transforms;
        self
    }

    pub fn value(&self) -> Vector3 {
        self.value
    }

    pub fn set_value(&mut self, value: Vector3) {
        self.value = value;
    }

    pub fn set_reference_frame(&mut self, frame: ReferenceFrame) {
        self.frame = frame;
    }
}

impl PositionProperty for ConstantPositionProperty {
    fn reference_frame(&self) -> ReferenceFrame {
        self.frame
    }

    fn is_constant(&self) -> bool {
        true
    }

    fn get_value_into(&self, time: &JulianDate, result: &mut Vector3) -> DynamicsResult<()> {
        require_time(time, "time")?;
        self.value.copy_into(result);
        Ok(())
    }

    fn get_value_in_reference_frame_into(
        &self,
        time: &JulianDate,
        frame: ReferenceFrame,
        result: &mut Vector3,
    ) -> DynamicsResult<()> {
        native_value_in_frame(self, self.transforms.as_ref(), time, frame, result)
    }
}
