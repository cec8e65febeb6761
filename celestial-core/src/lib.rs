//! Numeric primitives shared by the celestial crates: Cartesian vectors,
//! rotation matrices, the CIO-based frame rotation helpers and common constants.

pub mod cio;
pub mod constants;
pub mod errors;
pub mod math;
pub mod matrix;

pub use errors::{AstroError, AstroResult, MathErrorKind};
pub use matrix::{RotationMatrix3, Vector3};
