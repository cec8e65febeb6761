use super::{default_transforms, native_value_in_frame, PositionProperty};
use crate::errors::require_time;
use crate::transforms::TransformProvider;
use crate::{DynamicsError, DynamicsResult, ReferenceFrame};
use celestial_core::math::lagrange_basis;
use celestial_core::Vector3;
use celestial_time::JulianDate;
use std::sync::Arc;
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InterpolationAlgorithm {
    #[default]
    Linear,
    /// Lagrange polynomial through `degree + 1` samples around the query.
    Lagrange { degree: usize },
}

/// What to report for times outside the sampled span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExtrapolationType {
    /// No value.
    #[default]
    None,
    /// The nearest sample's value.
    Hold,
    /// Continue the interpolating polynomial past the end.
    Extrapolate,
}

/// A position known at discrete times and interpolated in between.
///
/// Samples are kept sorted by time; adding a sample at an existing time
/// replaces it. Outside the sampled span the forward and backward
/// [`ExtrapolationType`]s decide the answer, optionally limited to a duration
/// in seconds past the last (or before the first) sample. A duration of zero
/// means no limit.
#[derive(Debug, Clone)]
pub struct SampledPositionProperty {
    frame: ReferenceFrame,
    times: Vec<JulianDate>,
    values: Vec<Vector3>,
    interpolation: InterpolationAlgorithm,
    forward_extrapolation: ExtrapolationType,
    forward_extrapolation_duration: f64,
    backward_extrapolation: ExtrapolationType,
    backward_extrapolation_duration: f64,
    transforms: Arc<dyn TransformProvider>,
}

impl SampledPositionProperty {
    pub fn new(frame: ReferenceFrame) -> Self {
        Self {
            frame,
            times: Vec::new(),
            values: Vec::new(),
            interpolation: InterpolationAlgorithm::Linear,
            forward_extrapolation: ExtrapolationType::None,
            forward_extrapolation_duration: 0.0,
            backward_extrapolation: ExtrapolationType::None,
            backward_extrapolation_duration: 0.0,
            transforms: default_transforms(),
        }
    }

    pub fn with_transforms(mut self, transforms: Arc<dyn TransformProvider>) -> Self {
        self.transforms = transforms;
        self
    }

    pub fn with_interpolation(mut self, algorithm: InterpolationAlgorithm) -> Self {
        self.interpolation = algorithm;
        self
    }

    pub fn with_forward_extrapolation(mut self, kind: ExtrapolationType, duration_seconds: f64) -> Self {
        self.forward_extrapolation = kind;
        self.forward_extrapolation_duration = duration_seconds;
        self
    }

    pub fn with_backward_extrapolation(
        mut self,
        kind: ExtrapolationType,
        duration_seconds: f64,
    ) -> Self {
        self.backward_extrapolation = kind;
        self.backward_extrapolation_duration = duration_seconds;
        self
    }

    pub fn interpolation(&self) -> InterpolationAlgorithm {
        self.interpolation
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[JulianDate] {
        &self.times
    }

    pub fn add_sample(&mut self, time: JulianDate, value: Vector3) -> DynamicsResult<()> {
        require_time(&time, "sample time")?;
        if !value.is_finite() {
            return Err(DynamicsError::invalid_argument(format!(
                "sample value must be finite (got {})",
                value
            )));
        }

        let idx = self.times.partition_point(|t| *t < time);
        if idx < self.times.len() && self.times[idx] == time {
            self.values[idx] = value;
        } else {
            self.times.insert(idx, time);
            self.values.insert(idx, value);
        }
        Ok(())
    }

    /// Adds paired samples. Nothing is added unless every pair is valid.
    pub fn add_samples(&mut self, times: &[JulianDate], values: &[Vector3]) -> DynamicsResult<()> {
        if times.len() != values.len() {
            return Err(DynamicsError::invalid_argument(format!(
                "{} sample times but {} values",
                times.len(),
                values.len()
            )));
        }

        for (time, value) in times.iter().zip(values) {
            require_time(time, "sample time")?;
            if !value.is_finite() {
                return Err(DynamicsError::invalid_argument(format!(
                    "sample value must be finite (got {})",
                    value
                )));
            }
        }

        for (time, value) in times.iter().zip(values) {
            self.add_sample(*time, *value)?;
        }
        Ok(())
    }

    /// Value outside the sampled span, or `None` when extrapolation is off or
    /// `time` is further out than the allowed duration.
    fn extrapolate(&self, time: &JulianDate, forward: bool) -> Option<Vector3> {
        let (kind, duration, edge) = if forward {
            (
                self.forward_extrapolation,
                self.forward_extrapolation_duration,
                self.times.len() - 1,
            )
        } else {
            (
                self.backward_extrapolation,
                self.backward_extrapolation_duration,
                0,
            )
        };

        let distance = time.seconds_difference(&self.times[edge]).abs();
        if duration > 0.0 && distance > duration {
            return None;
        }

        match kind {
            ExtrapolationType::None => None,
            ExtrapolationType::Hold => Some(self.values[edge]),
            ExtrapolationType::Extrapolate if self.times.len() < 2 => Some(self.values[edge]),
            ExtrapolationType::Extrapolate => {
                let lower = if forward { self.times.len() - 2 } else { 0 };
                Some(self.interpolate(time, lower))
            }
        }
    }

    /// Interpolates around the pair `(lower, lower + 1)`.
    fn interpolate(&self, time: &JulianDate, lower: usize) -> Vector3 {
        match self.interpolation {
            InterpolationAlgorithm::Linear => {
                let t0 = &self.times[lower];
                let span = self.times[lower + 1].seconds_difference(t0);
                let fraction = time.seconds_difference(t0) / span;
                self.values[lower].lerp(&self.values[lower + 1], fraction)
            }
            InterpolationAlgorithm::Lagrange { degree } => {
                let points = degree.saturating_add(1).clamp(2, self.times.len());
                let first = lower
                    .saturating_sub((points - 1) / 2)
                    .min(self.times.len() - points);

                // Seconds from the window's first sample keep the nodes small.
                let origin = self.times[first];
                let nodes: Vec<f64> = self.times[first..first + points]
                    .iter()
                    .map(|t| t.seconds_difference(&origin))
                    .collect();
                let x = time.seconds_difference(&origin);

                self.values[first..first + points]
                    .iter()
                    .enumerate()
                    .fold(Vector3::zeros(), |acc, (k, value)| {
                        acc + *value * lagrange_basis(&nodes, k, x)
                    })
            }
        }
    }
}

impl PositionProperty for SampledPositionProperty {
    fn reference_frame(&self) -> ReferenceFrame {
        self.frame
    }

    fn is_constant(&self) -> bool {
        self.times.is_empty()
    }

    fn get_value_into(&self, time: &JulianDate, result: &mut Vector3) -> DynamicsResult<()> {
        require_time(time, "time")?;

        if self.times.is_empty() {
            return Err(DynamicsError::data_unavailable("no samples"));
        }

        let idx = self.times.partition_point(|t| t < time);
        let value = if idx < self.times.len() && self.times[idx] == *time {
            Some(self.values[idx])
        } else if idx == 0 {
            self.extrapolate(time, false)
        } else if idx == self.times.len() {
            self.extrapolate(time, true)
        } else {
            Some(self.interpolate(time, idx - 1))
        };

        match value {
            Some(value) => {
                value.copy_into(result);
                Ok(())
            }
            None => {
                trace!(%time, samples = self.times.len(), "no sampled position");
                Err(DynamicsError::data_unavailable(format!(
                    "{} is outside the sampled span {} to {}",
                    time,
                    self.times[0],
                    self.times[self.times.len() - 1]
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

#[cfg(test)]
mod tests {
    use super::*;

    fn day(offset: f64) -> JulianDate {
        JulianDate::j2000().add_days(offset)
    }

    fn linear_track() -> SampledPositionProperty {
        let mut property = SampledPositionProperty::new(ReferenceFrame::Fixed);
        property
            .add_samples(
                &[day(0.0), day(1.0), day(2.0)],
                &[
                    Vector3::new(0.0, 0.0, 0.0),
                    Vector3::new(10.0, 20.0, 30.0),
                    Vector3::new(20.0, 40.0, 60.0),
                ],
            )
            .unwrap();
        property
    }

    #[test]
    fn test_linear_interpolation_is_exact_on_linear_data() {
        let property = linear_track();
        let v = property.get_value(&day(1.25)).unwrap();
        assert!(v.max_difference(&Vector3::new(12.5, 25.0, 37.5)) < 1e-9);
        assert_eq!(property.get_value(&day(2.0)).unwrap(), Vector3::new(20.0, 40.0, 60.0));
        assert!(!property.is_constant());
    }

    #[test]
    fn test_samples_are_sorted_and_replaced() {
        let mut property = SampledPositionProperty::new(ReferenceFrame::Inertial);
        property.add_sample(day(2.0), Vector3::x_axis()).unwrap();
        property.add_sample(day(0.0), Vector3::y_axis()).unwrap();
        property.add_sample(day(2.0), Vector3::z_axis()).unwrap();

        assert_eq!(property.len(), 2);
        assert_eq!(property.times(), &[day(0.0), day(2.0)]);
        assert_eq!(property.get_value(&day(2.0)).unwrap(), Vector3::z_axis());
    }

    #[test]
    fn test_add_samples_rejects_mismatch_and_bad_values() {
        let mut property = SampledPositionProperty::new(ReferenceFrame::Fixed);
        assert!(property.add_samples(&[day(0.0)], &[]).is_err());

        let err = property
            .add_samples(
                &[day(0.0), day(1.0)],
                &[Vector3::zeros(), Vector3::new(f64::NAN, 0.0, 0.0)],
            )
            .unwrap_err();
        assert!(matches!(err, DynamicsError::InvalidArgument { .. }));
        assert!(property.is_empty());
        assert!(property.is_constant());
    }

    #[test]
    fn test_lagrange_reproduces_quadratic_track() {
        let f = |d: f64| Vector3::new(d * d, 3.0 * d - 1.0, -0.5 * d * d + d);
        let mut property = SampledPositionProperty::new(ReferenceFrame::Fixed)
            .with_interpolation(InterpolationAlgorithm::Lagrange { degree: 2 });
        for d in 0..6 {
            property.add_sample(day(d as f64), f(d as f64)).unwrap();
        }

        for d in [0.5, 2.3, 4.9] {
            let v = property.get_value(&day(d)).unwrap();
            assert!(v.max_difference(&f(d)) < 1e-6);
        }
    }

    #[test]
    fn test_lagrange_degree_larger_than_sample_count() {
        let property = linear_track()
            .with_interpolation(InterpolationAlgorithm::Lagrange { degree: usize::MAX });
        let v = property.get_value(&day(0.5)).unwrap();
        assert!(v.max_difference(&Vector3::new(5.0, 10.0, 15.0)) < 1e-9);
    }

    #[test]
    fn test_no_value_outside_span_by_default() {
        let property = linear_track();
        assert!(matches!(
            property.get_value(&day(-0.5)),
            Err(DynamicsError::DataUnavailable { .. })
        ));
        assert!(matches!(
            property.get_value(&day(2.5)),
            Err(DynamicsError::DataUnavailable { .. })
        ));
        assert!(matches!(
            SampledPositionProperty::new(ReferenceFrame::Fixed).get_value(&day(0.0)),
            Err(DynamicsError::DataUnavailable { .. })
        ));
    }

    #[test]
    fn test_hold_and_extrapolate() {
        let property = linear_track()
            .with_backward_extrapolation(ExtrapolationType::Hold, 0.0)
            .with_forward_extrapolation(ExtrapolationType::Extrapolate, 0.0);

        assert_eq!(property.get_value(&day(-3.0)).unwrap(), Vector3::zeros());
        let ahead = property.get_value(&day(3.0)).unwrap();
        assert!(ahead.max_difference(&Vector3::new(30.0, 60.0, 90.0)) < 1e-9);
    }

    #[test]
    fn test_extrapolation_duration_limit() {
        let property =
            linear_track().with_forward_extrapolation(ExtrapolationType::Hold, 3600.0);

        assert!(property.get_value(&day(2.0).add_seconds(1800.0)).is_ok());
        assert!(matches!(
            property.get_value(&day(2.0).add_seconds(7200.0)),
            Err(DynamicsError::DataUnavailable { .. })
        ));
    }

    #[test]
    fn test_single_sample_extrapolate_holds() {
        let mut property = SampledPositionProperty::new(ReferenceFrame::Fixed)
            .with_forward_extrapolation(ExtrapolationType::Extrapolate, 0.0);
        property.add_sample(day(0.0), Vector3::x_axis()).unwrap();
        assert_eq!(property.get_value(&day(1.0)).unwrap(), Vector3::x_axis());
    }

    #[test]
    fn test_absent_time() {
        let property = linear_track();
        let err = property.get_value(&JulianDate::new(f64::NAN, 0.0)).unwrap_err();
        assert!(matches!(err, DynamicsError::InvalidArgument { .. }));

        let mut fresh = SampledPositionProperty::new(ReferenceFrame::Fixed);
        let err = fresh
            .add_sample(JulianDate::new(0.0, f64::INFINITY), Vector3::zeros())
            .unwrap_err();
        assert!(matches!(err, DynamicsError::InvalidArgument { .. }));
    }
}
