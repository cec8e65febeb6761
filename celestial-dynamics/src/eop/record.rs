use crate::{DynamicsError, DynamicsResult};
use celestial_core::constants::{
    ARCSEC_TO_RAD, DAYS_PER_JULIAN_CENTURY, J2000_JD, MILLIARCSEC_TO_RAD, MJD_ZERO_POINT,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EopSource {
    IersFinals,
    UserData,
    Interpolated,
}

/// One tabulated day of Earth Orientation Parameters.
///
/// Units follow the IERS bulletins: pole coordinates in arcseconds, UT1-UTC and
/// LOD in seconds, celestial pole offsets in milliarcseconds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EopRecord {
    pub mjd: f64,
    pub x_p: f64,
    pub y_p: f64,
    pub ut1_utc: f64,
    pub lod: f64,
    pub dx: Option<f64>,
    pub dy: Option<f64>,
    pub source: EopSource,
}

impl EopRecord {
    pub fn new(
        mjd: f64,
        x_p_arcsec: f64,
        y_p_arcsec: f64,
        ut1_utc_sec: f64,
        lod_sec: f64,
    ) -> DynamicsResult<Self> {
        if !mjd.is_finite() {
            return Err(DynamicsError::invalid_coordinate(format!(
                "EOP epoch must be finite, got MJD {}",
                mjd
            )));
        }

        if !(x_p_arcsec.is_finite() && x_p_arcsec.abs() <= 6.0) {
            return Err(DynamicsError::invalid_coordinate(format!(
                "X polar motion out of range: {} arcsec",
                x_p_arcsec
            )));
        }

        if !(y_p_arcsec.is_finite() && y_p_arcsec.abs() <= 6.0) {
            return Err(DynamicsError::invalid_coordinate(format!(
                "Y polar motion out of range: {} arcsec",
                y_p_arcsec
            )));
        }

        if !(ut1_utc_sec.is_finite() && ut1_utc_sec.abs() <= 1.0) {
            return Err(DynamicsError::invalid_coordinate(format!(
                "UT1-UTC out of range: {} sec",
                ut1_utc_sec
            )));
        }

        if !(lod_sec.is_finite() && lod_sec.abs() <= 0.01) {
            return Err(DynamicsError::invalid_coordinate(format!(
                "LOD out of range: {} sec",
                lod_sec
            )));
        }

        Ok(Self {
            mjd,
            x_p: x_p_arcsec,
            y_p: y_p_arcsec,
            ut1_utc: ut1_utc_sec,
            lod: lod_sec,
            dx: None,
            dy: None,
            source: EopSource::UserData,
        })
    }

    pub fn with_cip_offsets(mut self, dx_mas: f64, dy_mas: f64) -> DynamicsResult<Self> {
        let in_range = |v: f64| v.is_finite() && v.abs() <= 1000.0;
        if !(in_range(dx_mas) && in_range(dy_mas)) {
            return Err(DynamicsError::invalid_coordinate(format!(
                "CIP offsets out of range: dX={} mas, dY={} mas",
                dx_mas, dy_mas
            )));
        }

        self.dx = Some(dx_mas);
        self.dy = Some(dy_mas);
        Ok(self)
    }

    pub fn with_source(mut self, source: EopSource) -> Self {
        self.source = source;
        self
    }

    pub fn to_parameters(&self) -> EopParameters {
        EopParameters {
            mjd: self.mjd,
            x_p: self.x_p,
            y_p: self.y_p,
            ut1_utc: self.ut1_utc,
            lod: self.lod,
            dx: self.dx,
            dy: self.dy,
            source: self.source,
        }
    }
}

/// Earth Orientation Parameters at one instant, usually interpolated.
#[derive(Debug, Clone, PartialEq)]
pub struct EopParameters {
    pub mjd: f64,
    pub x_p: f64,
    pub y_p: f64,
    pub ut1_utc: f64,
    pub lod: f64,
    pub dx: Option<f64>,
    pub dy: Option<f64>,
    pub source: EopSource,
}

impl EopParameters {
    /// All-zero parameters, used when no EOP table is configured.
    pub fn zero(mjd: f64) -> Self {
        Self {
            mjd,
            x_p: 0.0,
            y_p: 0.0,
            ut1_utc: 0.0,
            lod: 0.0,
            dx: None,
            dy: None,
            source: EopSource::UserData,
        }
    }

    /// Pole coordinates `(x_p, y_p)` in radians.
    pub fn pole_radians(&self) -> (f64, f64) {
        (self.x_p * ARCSEC_TO_RAD, self.y_p * ARCSEC_TO_RAD)
    }

    /// TIO locator s' ≈ -47 µas × t (t in Julian centuries from J2000), radians.
    pub fn s_prime(&self) -> f64 {
        let t = ((self.mjd + MJD_ZERO_POINT) - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
        -47e-6 * t * ARCSEC_TO_RAD
    }

    /// CIP X corrected by dX, radians.
    pub fn corrected_cip_x(&self, x_iau: f64) -> f64 {
        x_iau + self.dx.unwrap_or(0.0) * MILLIARCSEC_TO_RAD
    }

    /// CIP Y corrected by dY, radians.
    pub fn corrected_cip_y(&self, y_iau: f64) -> f64 {
        y_iau + self.dy.unwrap_or(0.0) * MILLIARCSEC_TO_RAD
    }
}

impl std::fmt::Display for EopParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "EOP(MJD={:.1}, xp={:.6}\", yp={:.6}\", UT1-UTC={:.7}s)",
            self.mjd, self.x_p, self.y_p, self.ut1_utc
        )
    }
}
