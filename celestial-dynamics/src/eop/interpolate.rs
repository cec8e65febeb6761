use super::record::{EopParameters, EopRecord, EopSource};
use crate::{DynamicsError, DynamicsResult};
use celestial_core::math::lagrange_interpolate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InterpolationMethod {
    #[default]
    Linear,

    Lagrange5,
}

/// Daily EOP records with interpolation to arbitrary MJDs.
///
/// Queries outside the tabulated span, or across a gap wider than
/// `max_gap_days`, fail with [`DynamicsError::DataUnavailable`]; nothing is
/// extrapolated.
#[derive(Debug, Clone)]
pub struct EopInterpolator {
    records: Vec<EopRecord>,

    method: InterpolationMethod,

    max_gap_days: f64,
}

impl EopInterpolator {
    pub fn new(mut records: Vec<EopRecord>) -> Self {
        records.sort_by(|a, b| a.mjd.total_cmp(&b.mjd));

        Self {
            records,
            method: InterpolationMethod::Linear,
            max_gap_days: 5.0,
        }
    }

    pub fn with_method(mut self, method: InterpolationMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_max_gap(mut self, max_gap_days: f64) -> Self {
        self.max_gap_days = max_gap_days;
        self
    }

    pub fn method(&self) -> InterpolationMethod {
        self.method
    }

    pub fn get(&self, mjd: f64) -> DynamicsResult<EopParameters> {
        let (first, last) = self.time_span().ok_or_else(|| {
            DynamicsError::data_unavailable("No EOP records available for interpolation")
        })?;

        if !mjd.is_finite() {
            return Err(DynamicsError::invalid_argument(format!(
                "EOP lookup needs a finite MJD, got {}",
                mjd
            )));
        }

        if mjd < first {
            return Err(DynamicsError::data_unavailable(format!(
                "MJD {:.1} is before first available record (MJD {:.1})",
                mjd, first
            )));
        }

        if mjd > last {
            return Err(DynamicsError::data_unavailable(format!(
                "MJD {:.1} is after last available record (MJD {:.1})",
                mjd, last
            )));
        }

        // Index of the first record strictly after `mjd`.
        let after = self.records.partition_point(|r| r.mjd <= mjd);
        let before = after - 1;

        if self.records[before].mjd == mjd {
            return Ok(self.records[before].to_parameters());
        }

        let gap = self.records[after].mjd - self.records[before].mjd;
        if gap > self.max_gap_days {
            return Err(DynamicsError::data_unavailable(format!(
                "Gap of {:.1} days exceeds maximum interpolation gap of {:.1} days",
                gap, self.max_gap_days
            )));
        }

        match self.method {
            InterpolationMethod::Linear => Ok(self.linear_interpolate(mjd, before, after)),
            InterpolationMethod::Lagrange5 if self.records.len() >= 5 => {
                Ok(self.lagrange_interpolate(mjd, before, 5))
            }
            // Short tables cannot feed five points.
            InterpolationMethod::Lagrange5 => Ok(self.linear_interpolate(mjd, before, after)),
        }
    }

    fn linear_interpolate(&self, mjd: f64, before: usize, after: usize) -> EopParameters {
        let p1 = &self.records[before];
        let p2 = &self.records[after];

        let t = (mjd - p1.mjd) / (p2.mjd - p1.mjd);
        let lerp = |a: f64, b: f64| a + t * (b - a);

        let dx = match (p1.dx, p2.dx) {
            (Some(dx1), Some(dx2)) => Some(lerp(dx1, dx2)),
            _ => None,
        };

        let dy = match (p1.dy, p2.dy) {
            (Some(dy1), Some(dy2)) => Some(lerp(dy1, dy2)),
            _ => None,
        };

        EopParameters {
            mjd,
            x_p: lerp(p1.x_p, p2.x_p),
            y_p: lerp(p1.y_p, p2.y_p),
            ut1_utc: lerp(p1.ut1_utc, p2.ut1_utc),
            lod: lerp(p1.lod, p2.lod),
            dx,
            dy,
            source: EopSource::Interpolated,
        }
    }

    /// `n`-point Lagrange fit centred on `before` and clamped to the table ends.
    fn lagrange_interpolate(&self, mjd: f64, before: usize, n: usize) -> EopParameters {
        let start = before
            .saturating_sub((n - 1) / 2)
            .min(self.records.len() - n);
        let points = &self.records[start..start + n];

        let xs: Vec<f64> = points.iter().map(|r| r.mjd).collect();
        let fit = |extract: fn(&EopRecord) -> f64| {
            let ys: Vec<f64> = points.iter().map(extract).collect();
            lagrange_interpolate(&xs, &ys, mjd)
        };

        let optional_fit = |extract: fn(&EopRecord) -> Option<f64>| {
            let ys: Option<Vec<f64>> = points.iter().map(extract).collect();
            ys.map(|ys| lagrange_interpolate(&xs, &ys, mjd))
        };

        EopParameters {
            mjd,
            x_p: fit(|r| r.x_p),
            y_p: fit(|r| r.y_p),
            ut1_utc: fit(|r| r.ut1_utc),
            lod: fit(|r| r.lod),
            dx: optional_fit(|r| r.dx),
            dy: optional_fit(|r| r.dy),
            source: EopSource::Interpolated,
        }
    }

    pub fn time_span(&self) -> Option<(f64, f64)> {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => Some((first.mjd, last.mjd)),
            _ => None,
        }
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}
