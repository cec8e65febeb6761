use super::TransformProvider;
use crate::eop::{EopInterpolator, EopParameters, EopRecord, InterpolationMethod};
use crate::errors::require_time;
use crate::xys::XysTable;
use crate::{DynamicsError, DynamicsResult};
use celestial_core::cio::{gcrs_to_cirs_matrix, polar_motion_matrix};
use celestial_core::RotationMatrix3;
use celestial_time::scales::{utc_to_tt, utc_to_ut1};
use celestial_time::{earth_rotation_angle, pseudo_fixed_hour_angle, JulianDate};
use tracing::trace;

/// Earth orientation from tabulated CIP coordinates and optional EOP.
///
/// The inertial-to-fixed matrix follows the IAU 2006 CIO-based chain
///
/// ```text
/// ITRS = W(xp, yp, s') · R3(ERA) · C(X + dX, Y + dY, s) · GCRS
/// ```
///
/// and needs an XYS table covering the date. Without an EOP table, polar
/// motion, UT1-UTC and the pole offsets are taken as zero; with one, a date
/// outside its span makes the matrix unavailable.
///
/// The pseudo-fixed matrix is a single Z rotation by the GMST 1982 hour angle
/// and is available for every finite date.
///
/// ```
/// use celestial_dynamics::transforms::{EarthTransforms, TransformProvider};
/// use celestial_time::JulianDate;
///
/// let transforms = EarthTransforms::fallback_only();
/// let t = JulianDate::j2000();
/// assert!(transforms.icrf_to_fixed_matrix(&t).is_none());
/// assert!(transforms.teme_to_pseudo_fixed_matrix(&t).is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EarthTransforms {
    xys: Option<XysTable>,
    eop: Option<EopInterpolator>,
}

impl EarthTransforms {
    pub fn builder() -> EarthTransformsBuilder {
        EarthTransformsBuilder::default()
    }

    /// Only the pseudo-fixed matrix is ever available.
    pub fn fallback_only() -> Self {
        Self::default()
    }

    pub fn xys(&self) -> Option<&XysTable> {
        self.xys.as_ref()
    }

    pub fn eop(&self) -> Option<&EopInterpolator> {
        self.eop.as_ref()
    }

    /// EOP in effect at `utc`: interpolated from the table, or zero without one.
    pub fn eop_parameters(&self, utc: &JulianDate) -> DynamicsResult<EopParameters> {
        let mjd = utc.to_mjd();
        match &self.eop {
            Some(interpolator) => interpolator.get(mjd),
            None => Ok(EopParameters::zero(mjd)),
        }
    }

    /// ICRF → ITRF at UTC date `utc`, with the reason when it cannot be built.
    pub fn icrf_to_fixed(&self, utc: &JulianDate) -> DynamicsResult<RotationMatrix3> {
        require_time(utc, "time")?;

        let table = self
            .xys
            .as_ref()
            .ok_or_else(|| DynamicsError::data_unavailable("No XYS table configured"))?;

        let tt = utc_to_tt(utc);
        let xys = table.compute(&tt).ok_or_else(|| {
            DynamicsError::data_unavailable(format!(
                "{} is outside the XYS table ({} to {})",
                tt,
                table.start(),
                table.stop()
            ))
        })?;

        let eop = self.eop_parameters(utc)?;

        let mut matrix = gcrs_to_cirs_matrix(
            eop.corrected_cip_x(xys.x),
            eop.corrected_cip_y(xys.y),
            xys.s,
        );

        let era = earth_rotation_angle(&utc_to_ut1(utc, eop.ut1_utc))?;
        matrix.rotate_z(era);

        let (x_p, y_p) = eop.pole_radians();
        Ok(polar_motion_matrix(x_p, y_p, eop.s_prime()).multiply(&matrix))
    }

    /// TEME → pseudo-fixed at UTC date `utc`.
    pub fn teme_to_pseudo_fixed(&self, utc: &JulianDate) -> DynamicsResult<RotationMatrix3> {
        require_time(utc, "time")?;
        let gha = pseudo_fixed_hour_angle(utc)?;
        Ok(RotationMatrix3::from_rotation_z(gha))
    }
}

impl TransformProvider for EarthTransforms {
    fn icrf_to_fixed_matrix(&self, time: &JulianDate) -> Option<RotationMatrix3> {
        self.icrf_to_fixed(time)
            .map_err(|e| trace!(%time, error = %e, "ICRF to fixed matrix unavailable"))
            .ok()
    }

    fn teme_to_pseudo_fixed_matrix(&self, time: &JulianDate) -> Option<RotationMatrix3> {
        self.teme_to_pseudo_fixed(time)
            .map_err(|e| trace!(%time, error = %e, "pseudo-fixed matrix unavailable"))
            .ok()
    }
}

#[derive(Debug, Default)]
pub struct EarthTransformsBuilder {
    xys: Option<XysTable>,
    eop_records: Option<Vec<EopRecord>>,
    eop_method: InterpolationMethod,
    eop_max_gap_days: Option<f64>,
}

impl EarthTransformsBuilder {
    pub fn with_xys(mut self, table: XysTable) -> Self {
        self.xys = Some(table);
        self
    }

    pub fn with_eop(mut self, records: Vec<EopRecord>) -> Self {
        self.eop_records = Some(records);
        self
    }

    pub fn with_eop_interpolation(mut self, method: InterpolationMethod) -> Self {
        self.eop_method = method;
        self
    }

    pub fn with_eop_max_gap(mut self, days: f64) -> Self {
        self.eop_max_gap_days = Some(days);
        self
    }

    pub fn build(self) -> EarthTransforms {
        let eop = self.eop_records.map(|records| {
            let interpolator = EopInterpolator::new(records).with_method(self.eop_method);
            match self.eop_max_gap_days {
                Some(days) => interpolator.with_max_gap(days),
                None => interpolator,
            }
        });

        EarthTransforms { xys: self.xys, eop }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::Vector3;

    const START: f64 = 2451540.0;

    fn zero_xys(days: usize) -> XysTable {
        XysTable::new(START, 1.0, 5, &vec![[0.0; 3]; days]).unwrap()
    }

    fn utc(offset_days: f64) -> JulianDate {
        JulianDate::j2000().add_days(offset_days)
    }

    #[test]
    fn test_zero_xys_and_eop_reduce_to_earth_rotation() {
        let transforms = EarthTransforms::builder().with_xys(zero_xys(30)).build();

        for offset in [0.0, 3.25, 10.6] {
            let t = utc(offset);
            let matrix = transforms.icrf_to_fixed_matrix(&t).unwrap();
            let era = earth_rotation_angle(&t).unwrap();
            let expected = RotationMatrix3::from_rotation_z(era);
            // s' is tens of picoradians near J2000.
            assert!(matrix.max_difference(&expected) < 1e-10);
            assert!(matrix.is_rotation_matrix(1e-12));
        }
    }

    #[test]
    fn test_ut1_offset_advances_rotation() {
        let t = utc(1.0);
        let mut records = Vec::new();
        for day in -2..=2 {
            let mjd = t.to_mjd().floor() + day as f64;
            records.push(EopRecord::new(mjd, 0.0, 0.0, 0.5, 0.0).unwrap());
        }
        let transforms = EarthTransforms::builder()
            .with_xys(zero_xys(30))
            .with_eop(records)
            .build();

        let matrix = transforms.icrf_to_fixed(&t).unwrap();
        let era = earth_rotation_angle(&t.add_seconds(0.5)).unwrap();
        assert!(matrix.max_difference(&RotationMatrix3::from_rotation_z(era)) < 1e-10);
    }

    #[test]
    fn test_polar_motion_tilts_the_pole() {
        let t = utc(1.0);
        let mjd = t.to_mjd().floor();
        let records = vec![
            EopRecord::new(mjd, 0.2, 0.3, 0.0, 0.0).unwrap(),
            EopRecord::new(mjd + 1.0, 0.2, 0.3, 0.0, 0.0).unwrap(),
        ];
        let transforms = EarthTransforms::builder()
            .with_xys(zero_xys(30))
            .with_eop(records)
            .build();

        let pole = transforms
            .icrf_to_fixed(&t)
            .unwrap()
            .multiply_vector(&Vector3::z_axis());
        let tilt = libm::hypot(pole.x, pole.y);
        let expected = libm::hypot(0.2, 0.3) * celestial_core::constants::ARCSEC_TO_RAD;
        assert!((tilt - expected).abs() < 1e-15);
    }

    #[test]
    fn test_outside_xys_coverage_is_unavailable() {
        let transforms = EarthTransforms::builder().with_xys(zero_xys(10)).build();
        assert!(transforms.icrf_to_fixed_matrix(&utc(100.0)).is_none());
        assert!(transforms.teme_to_pseudo_fixed_matrix(&utc(100.0)).is_some());

        let err = transforms.icrf_to_fixed(&utc(100.0)).unwrap_err();
        assert!(err.to_string().contains("outside the XYS table"));
    }

    #[test]
    fn test_outside_eop_coverage_is_unavailable() {
        let records = vec![
            EopRecord::new(51544.0, 0.0, 0.0, 0.0, 0.0).unwrap(),
            EopRecord::new(51545.0, 0.0, 0.0, 0.0, 0.0).unwrap(),
        ];
        let transforms = EarthTransforms::builder()
            .with_xys(zero_xys(30))
            .with_eop(records)
            .with_eop_interpolation(InterpolationMethod::Lagrange5)
            .build();

        assert!(transforms.icrf_to_fixed_matrix(&utc(0.0)).is_some());
        assert!(matches!(
            transforms.icrf_to_fixed(&utc(10.0)),
            Err(DynamicsError::DataUnavailable { .. })
        ));
    }

    #[test]
    fn test_pseudo_fixed_is_gmst_rotation() {
        let transforms = EarthTransforms::fallback_only();
        let t = utc(12.3);
        let matrix = transforms.teme_to_pseudo_fixed_matrix(&t).unwrap();
        let gha = pseudo_fixed_hour_angle(&t).unwrap();
        assert_eq!(matrix, RotationMatrix3::from_rotation_z(gha));
    }

    #[test]
    fn test_absent_time_yields_no_matrix() {
        let transforms = EarthTransforms::builder().with_xys(zero_xys(30)).build();
        let nan = JulianDate::new(f64::NAN, 0.0);
        assert!(transforms.icrf_to_fixed_matrix(&nan).is_none());
        assert!(transforms.teme_to_pseudo_fixed_matrix(&nan).is_none());
        assert!(matches!(
            transforms.teme_to_pseudo_fixed(&nan),
            Err(DynamicsError::InvalidArgument { .. })
        ));
    }
}
