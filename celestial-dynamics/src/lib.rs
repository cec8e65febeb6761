//! Time-varying positions in the inertial and Earth-fixed reference frames.
//!
//! A [`PositionProperty`](property::PositionProperty) answers "where is this at
//! time `t`" in the frame it stores values in, or converted into the other
//! frame. Conversion rotates by the inertial-to-fixed matrix of a
//! [`TransformProvider`](transforms::TransformProvider); the default
//! [`EarthTransforms`](transforms::EarthTransforms) builds it from tabulated
//! CIP coordinates and Earth Orientation Parameters, falling back to a GMST
//! rotation when the tables do not cover the date.
//!
//! ```
//! use celestial_core::Vector3;
//! use celestial_dynamics::property::{ConstantPositionProperty, PositionProperty};
//! use celestial_dynamics::ReferenceFrame;
//! use celestial_time::JulianDate;
//!
//! let site = ConstantPositionProperty::new(Vector3::new(6378137.0, 0.0, 0.0), ReferenceFrame::Fixed);
//! let inertial = site.get_value_in_reference_frame(&JulianDate::j2000(), ReferenceFrame::Inertial)?;
//! assert!((inertial.magnitude() - 6378137.0).abs() < 1e-6);
//! # Ok::<(), celestial_dynamics::DynamicsError>(())
//! ```

pub mod convert;
pub mod eop;
pub mod errors;
pub mod frames;
pub mod property;
pub mod transforms;
pub mod xys;

pub use convert::{convert_to_reference_frame, convert_to_reference_frame_into};
pub use errors::{DynamicsError, DynamicsResult};
pub use frames::ReferenceFrame;
