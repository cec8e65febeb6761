//! Offsets from UTC to the scales the Earth orientation models run on.
//!
//! ```text
//! TAI = UTC + (TAI - UTC)          leap-second table
//! TT  = TAI + 32.184 s
//! UT1 = UTC + (UT1 - UTC)          from Earth Orientation Parameters
//! ```
//!
//! Dates before 1972 use the 1972 offset of 10 s; the pre-1972 rubber-second
//! drift is not modelled.

use crate::constants::TAI_UTC_OFFSETS;
use crate::JulianDate;
use celestial_core::constants::TT_MINUS_TAI_SECONDS;

/// TAI - UTC in seconds in effect at the given UTC date.
pub fn tai_minus_utc(utc: &JulianDate) -> f64 {
    let mjd = utc.to_mjd();
    let idx = TAI_UTC_OFFSETS.partition_point(|&(start, _)| start <= mjd);
    match idx {
        0 => TAI_UTC_OFFSETS[0].1,
        i => TAI_UTC_OFFSETS[i - 1].1,
    }
}

pub fn utc_to_tai(utc: &JulianDate) -> JulianDate {
    utc.add_seconds(tai_minus_utc(utc))
}

pub fn utc_to_tt(utc: &JulianDate) -> JulianDate {
    utc.add_seconds(tai_minus_utc(utc) + TT_MINUS_TAI_SECONDS)
}

/// Applies an observed or interpolated UT1 - UTC (seconds).
pub fn utc_to_ut1(utc: &JulianDate, ut1_minus_utc: f64) -> JulianDate {
    utc.add_seconds(ut1_minus_utc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::constants::J2000_JD;

    #[test]
    fn test_offset_at_j2000_is_32_seconds() {
        assert_eq!(tai_minus_utc(&JulianDate::j2000()), 32.0);
    }

    #[test]
    fn test_offset_changes_exactly_at_leap_second() {
        let before = JulianDate::from_mjd(57753.999);
        let after = JulianDate::from_mjd(57754.0);
        assert_eq!(tai_minus_utc(&before), 36.0);
        assert_eq!(tai_minus_utc(&after), 37.0);
    }

    #[test]
    fn test_offset_clamps_before_1972() {
        assert_eq!(tai_minus_utc(&JulianDate::from_mjd(40000.0)), 10.0);
        assert_eq!(tai_minus_utc(&JulianDate::from_mjd(70000.0)), 37.0);
    }

    #[test]
    fn test_utc_to_tt_at_j2000() {
        let tt = utc_to_tt(&JulianDate::new(J2000_JD, 0.0));
        let offset = tt.seconds_difference(&JulianDate::j2000());
        assert!((offset - 64.184).abs() < 1e-6);
    }

    #[test]
    fn test_utc_to_tai_and_ut1() {
        let utc = JulianDate::from_mjd(60000.0);
        assert!((utc_to_tai(&utc).seconds_difference(&utc) - 37.0).abs() < 1e-5);
        assert!((utc_to_ut1(&utc, -0.05).seconds_difference(&utc) + 0.05).abs() < 1e-5);
    }
}
