//! Stereonet: structural-geology orientation calculations
//!
//! This crate converts orientation measurements of planes and lines
//! (dip/dip-direction and trend/plunge notation) into 3-D unit direction
//! vectors, and projects those vectors onto the unit disk under the two
//! projections used to draw stereonets: equal-angle (stereographic) and
//! equal-area (Lambert azimuthal). All conversions are bidirectional and
//! round-trip within floating tolerance.
//!
//! The rendering of projected coordinates (points, circle collections,
//! density contours) is the job of a plotting client and is not part of
//! this crate.

use thiserror::Error;

pub mod circle;
pub mod coordinates;
pub mod projection;

// Re-export commonly used types
pub use coordinates::attitude::{Line, Plane};
pub use coordinates::vector::Vec3;
pub use projection::{EqualAngle, EqualArea, SphericalProjection};

/// Main error type for the stereonet library
#[derive(Debug, Error)]
pub enum StereonetError {
    #[error("Degenerate vector: {0}")]
    DegenerateVector(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for stereonet operations
pub type Result<T> = std::result::Result<T, StereonetError>;
