//! Earth Orientation Parameters: polar motion, UT1-UTC and celestial pole
//! offsets published by the IERS.

pub mod interpolate;
pub mod parse;
pub mod record;

pub use interpolate::{EopInterpolator, InterpolationMethod};
pub use parse::{parse_finals, parse_finals_line};
pub use record::{EopParameters, EopRecord, EopSource};
