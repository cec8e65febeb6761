use crate::{DynamicsError, DynamicsResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The frame a position vector is expressed in.
///
/// A bare vector has no frame; every stored or returned position is paired with
/// one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ReferenceFrame {
    /// Earth-centred frame rotating with the planet (ITRF, or pseudo-fixed).
    #[default]
    Fixed,
    /// Earth-centred quasi-inertial frame (ICRF/GCRS axes).
    Inertial,
}

impl ReferenceFrame {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "FIXED",
            Self::Inertial => "INERTIAL",
        }
    }
}

impl fmt::Display for ReferenceFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReferenceFrame {
    type Err = DynamicsError;

    fn from_str(s: &str) -> DynamicsResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FIXED" => Ok(Self::Fixed),
            "INERTIAL" => Ok(Self::Inertial),
            other => Err(DynamicsError::parsing_error(format!(
                "unknown reference frame '{}', expected FIXED or INERTIAL",
                other
            ))),
        }
    }
}
