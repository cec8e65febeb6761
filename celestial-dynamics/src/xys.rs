//! Tabulated IAU 2006/2000A CIP coordinates and CIO locator.
//!
//! Evaluating the full precession-nutation series for every query is costly,
//! so the Earth transform reads X, Y and s from an evenly spaced table and
//! interpolates with a Lagrange polynomial of the table's order.

use crate::{DynamicsError, DynamicsResult};
use celestial_core::constants::ARCSEC_TO_RAD;
use celestial_core::math::lagrange_basis;
use celestial_time::JulianDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// CIP X, Y and CIO locator s at one instant, radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct XysSample {
    pub x: f64,
    pub y: f64,
    pub s: f64,
}

#[derive(Debug, Clone)]
pub struct XysTable {
    start: JulianDate,
    step_days: f64,
    order: usize,
    samples: Vec<XysSample>,
}

impl XysTable {
    /// Builds a table from `[X, Y, s]` samples in arcseconds.
    ///
    /// Sample `k` is at TT date `start_jd_tt + k * step_days`. `order` is the
    /// Lagrange polynomial degree, so each evaluation reads `order + 1`
    /// samples.
    pub fn new(
        start_jd_tt: f64,
        step_days: f64,
        order: usize,
        samples: &[[f64; 3]],
    ) -> DynamicsResult<Self> {
        if !start_jd_tt.is_finite() {
            return Err(DynamicsError::invalid_argument(
                "XYS table start date must be finite",
            ));
        }

        if !(step_days.is_finite() && step_days > 0.0) {
            return Err(DynamicsError::invalid_argument(format!(
                "XYS step must be positive, got {} days",
                step_days
            )));
        }

        if order >= samples.len() {
            return Err(DynamicsError::invalid_argument(format!(
                "{} XYS samples cannot support order {} interpolation",
                samples.len(),
                order
            )));
        }

        let samples = samples
            .iter()
            .map(|&[x, y, s]| XysSample {
                x: x * ARCSEC_TO_RAD,
                y: y * ARCSEC_TO_RAD,
                s: s * ARCSEC_TO_RAD,
            })
            .collect();

        Ok(Self {
            start: JulianDate::from_f64(start_jd_tt),
            step_days,
            order,
            samples,
        })
    }

    /// Parses the JSON layout IERS-derived XYS files are distributed in:
    /// `interpolationOrder`, `sampleZeroJulianEphemerisDate`, `stepSizeDays`
    /// and a flat `samples` array of `X, Y, s` triples in arcseconds.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> DynamicsResult<Self> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct XysFile {
            interpolation_order: usize,
            sample_zero_julian_ephemeris_date: f64,
            step_size_days: f64,
            samples: Vec<f64>,
        }

        let file: XysFile = serde_json::from_str(json)
            .map_err(|e| DynamicsError::parsing_error(format!("XYS JSON: {}", e)))?;

        if file.samples.len() % 3 != 0 {
            return Err(DynamicsError::parsing_error(format!(
                "XYS sample array length {} is not a multiple of 3",
                file.samples.len()
            )));
        }

        let triples: Vec<[f64; 3]> = file
            .samples
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();

        Self::new(
            file.sample_zero_julian_ephemeris_date,
            file.step_size_days,
            file.interpolation_order,
            &triples,
        )
    }

    pub fn start(&self) -> JulianDate {
        self.start
    }

    pub fn stop(&self) -> JulianDate {
        self.start
            .add_days((self.samples.len() - 1) as f64 * self.step_days)
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Interpolated X, Y, s at TT date `tt`, or `None` outside the table.
    pub fn compute(&self, tt: &JulianDate) -> Option<XysSample> {
        let position = tt.days_difference(&self.start) / self.step_days;
        let last = (self.samples.len() - 1) as f64;
        if !(0.0..=last).contains(&position) {
            return None;
        }

        // `order < samples.len()` is checked on construction.
        let points = self.order + 1;
        let first = (position.floor() as usize)
            .saturating_sub(self.order / 2)
            .min(self.samples.len() - points);

        let nodes: Vec<f64> = (first..first + points).map(|i| i as f64).collect();
        let mut result = XysSample::default();
        for (k, sample) in self.samples[first..first + points].iter().enumerate() {
            let weight = lagrange_basis(&nodes, k, position);
            result.x += weight * sample.x;
            result.y += weight * sample.y;
            result.s += weight * sample.s;
        }

        Some(result)
    }
}
