//! Two-part Julian dates.
//!
//! A [`JulianDate`] keeps the date as `jd1 + jd2` so that sub-millisecond
//! resolution survives at modern epochs (a single `f64` JD only resolves ~20 µs).
//! The split is arbitrary: `(2451545.0, 0.25)` and `(2451545.25, 0.0)` are the same
//! instant, and equality and ordering compare the instant, not the fields.
//!
//! The scale a date lives on is set by context. Positions and properties in this
//! workspace take UTC dates; [`crate::scales`] converts to TT and UT1 where the
//! Earth orientation models need them.

use crate::constants::SECONDS_TO_DAYS;
use celestial_core::constants::{J2000_JD, MJD_ZERO_POINT, SECONDS_PER_DAY_F64};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    pub jd1: f64,
    pub jd2: f64,
}

impl JulianDate {
    pub fn new(jd1: f64, jd2: f64) -> Self {
        Self { jd1, jd2 }
    }

    pub fn from_f64(jd: f64) -> Self {
        Self::new(jd, 0.0)
    }

    pub fn from_mjd(mjd: f64) -> Self {
        Self::new(MJD_ZERO_POINT, mjd)
    }

    pub fn j2000() -> Self {
        Self::new(J2000_JD, 0.0)
    }

    pub fn jd1(&self) -> f64 {
        self.jd1
    }

    pub fn jd2(&self) -> f64 {
        self.jd2
    }

    pub fn to_f64(&self) -> f64 {
        self.jd1 + self.jd2
    }

    pub fn to_mjd(&self) -> f64 {
        (self.jd1 - MJD_ZERO_POINT) + self.jd2
    }

    /// `false` for NaN or infinite parts. A non-finite date stands for "no time
    /// given" and every time-taking entry point rejects it.
    pub fn is_finite(&self) -> bool {
        self.jd1.is_finite() && self.jd2.is_finite()
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self::new(self.jd1, self.jd2 + days)
    }

    pub fn add_seconds(&self, seconds: f64) -> Self {
        self.add_days(seconds * SECONDS_TO_DAYS)
    }

    /// `self - other` in days, differencing the large parts first.
    pub fn days_difference(&self, other: &Self) -> f64 {
        (self.jd1 - other.jd1) + (self.jd2 - other.jd2)
    }

    /// `self - other` in seconds.
    pub fn seconds_difference(&self, other: &Self) -> f64 {
        self.days_difference(other) * SECONDS_PER_DAY_F64
    }

    /// Splits the date into a whole Julian day number and seconds into that day.
    ///
    /// Julian days begin at noon, so `seconds_of_day < 43200` is the afternoon
    /// of the civil day before midnight.
    pub fn day_number_and_seconds(&self) -> (f64, f64) {
        let whole = self.jd1.floor();
        let fraction = (self.jd1 - whole) + self.jd2;
        let carry = fraction.floor();
        (whole + carry, (fraction - carry) * SECONDS_PER_DAY_F64)
    }

    /// Builds a date from calendar fields (ERFA `cal2jd` + `dtf2d` convention).
    ///
    /// `jd1` holds the JD at 0h of the day and `jd2` the day fraction.
    pub fn from_calendar(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> Self {
        let my = (month as i32 - 14) / 12;
        let iypmy = year + my;

        let mjd = ((1461 * (iypmy + 4800)) / 4 + (367 * (month as i32 - 2 - 12 * my)) / 12
            - (3 * ((iypmy + 4900) / 100)) / 4
            + day as i32
            - 2432076) as f64;

        let jd1 = MJD_ZERO_POINT + mjd;
        let jd2 = (60.0 * (60 * hour as i32 + minute as i32) as f64 + second) / SECONDS_PER_DAY_F64;

        Self::new(jd1, jd2)
    }
}

impl PartialEq for JulianDate {
    fn eq(&self, other: &Self) -> bool {
        self.days_difference(other) == 0.0
    }
}

impl PartialOrd for JulianDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.days_difference(other).partial_cmp(&0.0)
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.to_f64())
    }
}

impl From<f64> for JulianDate {
    fn from(jd: f64) -> Self {
        Self::from_f64(jd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_does_not_affect_equality_or_order() {
        let a = JulianDate::new(J2000_JD, 0.25);
        let b = JulianDate::new(J2000_JD + 0.25, 0.0);
        assert_eq!(a, b);
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Equal));

        let later = b.add_seconds(1.0);
        assert!(later > a);
        assert!(a < later);
    }

    #[test]
    fn test_nan_is_unordered_and_not_finite() {
        let nan = JulianDate::new(f64::NAN, 0.0);
        assert!(!nan.is_finite());
        assert!(nan.partial_cmp(&JulianDate::j2000()).is_none());
        assert!(JulianDate::j2000().is_finite());
    }

    #[test]
    fn test_seconds_difference() {
        let start = JulianDate::j2000();
        let end = start.add_seconds(90.0);
        assert!((end.seconds_difference(&start) - 90.0).abs() < 1e-9);
        assert!((start.seconds_difference(&end) + 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_mjd_round_trip() {
        let jd = JulianDate::from_mjd(60000.5);
        assert_eq!(jd.to_mjd(), 60000.5);
        assert_eq!(jd.to_f64(), 2460001.0);
    }

    #[test]
    fn test_day_number_and_seconds() {
        let (day, seconds) = JulianDate::new(J2000_JD, 0.75).day_number_and_seconds();
        assert_eq!(day, 2451545.0);
        assert!((seconds - 64800.0).abs() < 1e-6);

        // A fraction spilling over a whole day carries into the day number.
        let (day, seconds) = JulianDate::new(2451545.5, 0.75).day_number_and_seconds();
        assert_eq!(day, 2451546.0);
        assert!((seconds - 21600.0).abs() < 1e-6);

        let (day, seconds) = JulianDate::new(2451545.0, -0.25).day_number_and_seconds();
        assert_eq!(day, 2451544.0);
        assert!((seconds - 64800.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_calendar_j2000() {
        let jd = JulianDate::from_calendar(2000, 1, 1, 12, 0, 0.0);
        assert_eq!(jd.jd1(), 2451544.5);
        assert_eq!(jd.jd2(), 0.5);
        assert_eq!(jd, JulianDate::j2000());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let original = JulianDate::new(2451545.5, 0.123456789);
        let json = serde_json::to_string(&original).unwrap();
        let restored: JulianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(original.jd1(), restored.jd1());
        assert_eq!(original.jd2(), restored.jd2());
    }
}
