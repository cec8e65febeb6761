//! Julian dates, UTC offsets, Earth rotation and time intervals.

pub mod constants;
pub mod interval;
pub mod julian;
pub mod rotation;
pub mod scales;
pub mod sidereal;

pub use interval::{TimeInterval, TimeIntervalCollection};
pub use julian::JulianDate;
pub use rotation::earth_rotation_angle;
pub use sidereal::pseudo_fixed_hour_angle;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimeError {
    #[error("Calculation error: {0}")]
    CalculationError(String),
}

pub type TimeResult<T> = Result<T, TimeError>;
