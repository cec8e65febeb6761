use super::PositionProperty;
use crate::errors::require_time;
use crate::{DynamicsError, DynamicsResult, ReferenceFrame};
use celestial_core::Vector3;
use celestial_time::{JulianDate, TimeInterval, TimeIntervalCollection};
use std::sync::Arc;
use tracing::trace;

/// A position assembled from other position properties, one per interval.
///
/// Values are reported in the composite's own frame. Each sub-property is
/// asked for its value directly in the requested frame, so sub-properties
/// stored in different frames convert with their own transform providers.
#[derive(Debug, Clone, Default)]
pub struct CompositePositionProperty {
    intervals: TimeIntervalCollection<Arc<dyn PositionProperty>>,
    frame: ReferenceFrame,
}

impl CompositePositionProperty {
    pub fn new(frame: ReferenceFrame) -> Self {
        Self {
            intervals: TimeIntervalCollection::new(),
            frame,
        }
    }

    pub fn intervals(&self) -> &TimeIntervalCollection<Arc<dyn PositionProperty>> {
        &self.intervals
    }

    /// Uses `property` over `interval`, replacing whatever it overlaps.
    pub fn add_interval(&mut self, interval: TimeInterval, property: Arc<dyn PositionProperty>) {
        self.intervals.add_interval(interval, property);
    }

    pub fn set_reference_frame(&mut self, frame: ReferenceFrame) {
        self.frame = frame;
    }

    fn property_at(&self, time: &JulianDate) -> DynamicsResult<&Arc<dyn PositionProperty>> {
        require_time(time, "time")?;

        self.intervals
            .find_data_for_interval_containing(time)
            .ok_or_else(|| {
                trace!(%time, intervals = self.intervals.len(), "no sub-property at time");
                DynamicsError::data_unavailable(format!("no sub-property covers {}", time))
            })
    }
}

impl PositionProperty for CompositePositionProperty {
    fn reference_frame(&self) -> ReferenceFrame {
        self.frame
    }

    fn is_constant(&self) -> bool {
        self.intervals.is_empty()
    }

    fn get_value_into(&self, time: &JulianDate, result: &mut Vector3) -> DynamicsResult<()> {
        self.get_value_in_reference_frame_into(time, self.frame, result)
    }

    fn get_value_in_reference_frame_into(
        &self,
        time: &JulianDate,
        frame: ReferenceFrame,
        result: &mut Vector3,
    ) -> DynamicsResult<()> {
        self.property_at(time)?
            .get_value_in_reference_frame_into(time, frame, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{ConstantPositionProperty, SampledPositionProperty};
    use crate::transforms::TransformProvider;
    use celestial_core::RotationMatrix3;
    use std::f64::consts::FRAC_PI_2;

    #[derive(Debug)]
    struct QuarterTurn;

    impl TransformProvider for QuarterTurn {
        fn icrf_to_fixed_matrix(&self, _time: &JulianDate) -> Option<RotationMatrix3> {
            Some(RotationMatrix3::from_rotation_z(FRAC_PI_2))
        }

        fn teme_to_pseudo_fixed_matrix(&self, _time: &JulianDate) -> Option<RotationMatrix3> {
            None
        }
    }

    fn day(offset: f64) -> JulianDate {
        JulianDate::j2000().add_days(offset)
    }

    #[test]
    fn test_delegates_across_frames() {
        let fixed = ConstantPositionProperty::new(Vector3::x_axis(), ReferenceFrame::Fixed)
            .with_transforms(Arc::new(QuarterTurn));
        let inertial = ConstantPositionProperty::new(Vector3::z_axis(), ReferenceFrame::Inertial)
            .with_transforms(Arc::new(QuarterTurn));

        let mut composite = CompositePositionProperty::new(ReferenceFrame::Inertial);
        composite.add_interval(
            TimeInterval::new(day(0.0), day(1.0)).with_stop_included(false),
            Arc::new(fixed),
        );
        composite.add_interval(TimeInterval::new(day(1.0), day(2.0)), Arc::new(inertial));

        // Fixed (1, 0, 0) seen from the inertial frame through the transpose.
        let first = composite.get_value(&day(0.5)).unwrap();
        assert!(first.max_difference(&Vector3::y_axis()) < 1e-15);

        let second = composite.get_value(&day(1.5)).unwrap();
        assert_eq!(second, Vector3::z_axis());

        let first_fixed = composite
            .get_value_in_reference_frame(&day(0.5), ReferenceFrame::Fixed)
            .unwrap();
        assert_eq!(first_fixed, Vector3::x_axis());
    }

    #[test]
    fn test_nested_composite() {
        let mut sampled = SampledPositionProperty::new(ReferenceFrame::Fixed);
        sampled.add_sample(day(0.0), Vector3::zeros()).unwrap();
        sampled.add_sample(day(1.0), Vector3::new(2.0, 0.0, 0.0)).unwrap();

        let mut inner = CompositePositionProperty::new(ReferenceFrame::Fixed);
        inner.add_interval(TimeInterval::new(day(0.0), day(1.0)), Arc::new(sampled));

        let mut outer = CompositePositionProperty::default();
        outer.add_interval(TimeInterval::new(day(-5.0), day(5.0)), Arc::new(inner));

        let v = outer.get_value(&day(0.5)).unwrap();
        assert!(v.max_difference(&Vector3::x_axis()) < 1e-9);
        assert!(matches!(
            outer.get_value(&day(3.0)),
            Err(DynamicsError::DataUnavailable { .. })
        ));
    }

    #[test]
    fn test_empty_composite() {
        let composite = CompositePositionProperty::new(ReferenceFrame::Fixed);
        assert!(composite.is_constant());
        assert!(matches!(
            composite.get_value(&day(0.0)),
            Err(DynamicsError::DataUnavailable { .. })
        ));
        assert!(matches!(
            composite.get_value(&JulianDate::new(f64::NAN, 0.0)),
            Err(DynamicsError::InvalidArgument { .. })
        ));
    }
}
