use super::{default_transforms, native_value_in_frame, PositionProperty};
use crate::errors::require_time;
use crate::transforms::TransformProvider;
use crate::{DynamicsError, DynamicsResult, ReferenceFrame};
use celestial_core::Vector3;
use celestial_time::{JulianDate, TimeInterval, TimeIntervalCollection};
use std::sync::Arc;
use tracing::trace;

/// A position that holds a fixed value over each of a set of time intervals.
#[derive(Debug, Clone)]
pub struct TimeIntervalCollectionPositionProperty {
    intervals: TimeIntervalCollection<Vector3>,
    frame: ReferenceFrame,
    transforms: Arc<dyn TransformProvider>,
}

impl TimeIntervalCollectionPositionProperty {
    pub fn new(frame: ReferenceFrame) -> Self {
        Self {
            intervals: TimeIntervalCollection::new(),
            frame,
            transforms: default_transforms(),
        }
    }

    pub fn with_transforms(mut self, transforms: Arc<dyn TransformProvider>) -> Self {
        self.transforms = transforms;
        self
    }

    pub fn intervals(&self) -> &TimeIntervalCollection<Vector3> {
        &self.intervals
    }

    /// Sets `value` over `interval`, replacing whatever it overlaps.
    pub fn add_interval(&mut self, interval: TimeInterval, value: Vector3) -> DynamicsResult<()> {
        if !value.is_finite() {
            return Err(DynamicsError::invalid_argument(format!(
                "interval value must be finite (got {})",
                value
            )));
        }
        self.intervals.add_interval(interval, value);
        Ok(())
    }
}

impl PositionProperty for TimeIntervalCollectionPositionProperty {
    fn reference_frame(&self) -> ReferenceFrame {
        self.frame
    }

    fn is_constant(&self) -> bool {
        self.intervals.is_empty()
    }

    fn get_value_into(&self, time: &JulianDate, result: &mut Vector3) -> DynamicsResult<()> {
        require_time(time, "time")?;

        match self.intervals.find_data_for_interval_containing(time) {
            Some(value) => {
                value.copy_into(result);
                Ok(())
            }
            None => {
                trace!(%time, intervals = self.intervals.len(), "no interval contains time");
                Err(DynamicsError::data_unavailable(format!(
                    "no interval contains {}",
                    time
                )))
            }
        }
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
