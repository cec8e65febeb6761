use celestial_time::{JulianDate, TimeError};
use thiserror::Error;

pub type DynamicsResult<T> = Result<T, DynamicsError>;

#[derive(Debug, Error)]
pub enum DynamicsError {
    /// A required argument was missing or not a finite number. Fix the caller.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Neither the inertial-to-fixed nor the pseudo-fixed matrix could be
    /// computed for this date.
    #[error("No inertial-to-fixed transform available at {julian_date}")]
    TransformUnavailable { julian_date: JulianDate },

    #[error("Data not available: {message}")]
    DataUnavailable { message: String },

    #[error("Invalid coordinate: {message}")]
    InvalidCoordinate { message: String },

    #[error("Data parsing failed: {message}")]
    ParsingError { message: String },

    #[error("Time computation failed: {source}")]
    TimeError {
        #[from]
        source: TimeError,
    },
}

impl DynamicsError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn data_unavailable(message: impl Into<String>) -> Self {
        Self::DataUnavailable {
            message: message.into(),
        }
    }

    pub fn invalid_coordinate(message: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            message: message.into(),
        }
    }

    pub fn parsing_error(message: impl Into<String>) -> Self {
        Self::ParsingError {
            message: message.into(),
        }
    }
}

/// Rejects a non-finite date, the stand-in for "no time given".
pub(crate) fn require_time(time: &JulianDate, argument: &str) -> DynamicsResult<()> {
    if time.is_finite() {
        Ok(())
    } else {
        Err(DynamicsError::invalid_argument(format!(
            "{} is required (got {})",
            argument, time
        )))
    }
}
