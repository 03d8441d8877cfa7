//! # Sphere-to-Disk Projection Module
//!
//! This module maps unit direction-cosine vectors onto the unit disk and
//! back, under the two projection families used to draw stereonets:
//!
//! - **Equal-angle (stereographic)**: conformal, preserves angles. Used for
//!   geometrical constructions.
//! - **Equal-area (Lambert azimuthal)**: preserves area, rescaled here so
//!   the projected disk radius is 1 instead of the natural √2. Used for
//!   unbiased density analysis.
//!
//! ## Hemisphere folding
//!
//! Both projections carry an `invert_positive` flag (default true): any
//! input vector with z > 0 is negated before projecting, folding the whole
//! sphere onto the lower-hemisphere disk. This is the standard stereonet
//! convention of always plotting poles and lines on the same hemisphere
//! regardless of which way they point. Folding is applied per element of a
//! batch, never globally.
//!
//! Disable folding (e.g. when projecting circle traces that legitimately
//! cross the horizon) and the equal-angle map becomes unbounded as z → 1;
//! the rendering collaborator is responsible for clipping such output.
//!
//! ## Numeric policy
//!
//! The inverse maps carry no domain guards beyond what the algebra already
//! provides. Input outside the unit disk is caller error and propagates as
//! out-of-range results (NaN from a negative radicand in the equal-area
//! inverse); it is deliberately not clamped.

use crate::coordinates::vector::Vec3;
use std::f64::consts::SQRT_2;

/// A bidirectional map between the unit sphere and the projection disk
///
/// This trait is the seam the rendering collaborator parameterizes over:
/// plotting code takes any `SphericalProjection` and is agnostic to which
/// family it is. Forward maps fold the hemisphere per the implementation's
/// `invert_positive` flag; inverse maps always land on the folded (z ≤ 0)
/// hemisphere since the original hemisphere is not recoverable.
pub trait SphericalProjection {
    /// Projects a single direction onto the disk
    fn project(&self, v: Vec3) -> (f64, f64);

    /// Inverts a disk coordinate back to a unit direction on the folded
    /// hemisphere
    fn unproject(&self, x: f64, y: f64) -> Vec3;

    /// Projects a batch of directions, elementwise and order-preserving
    fn project_batch(&self, vectors: &[Vec3]) -> Vec<(f64, f64)> {
        vectors.iter().map(|&v| self.project(v)).collect()
    }

    /// Inverts a batch of disk coordinates
    fn unproject_batch(&self, points: &[(f64, f64)]) -> Vec<Vec3> {
        points.iter().map(|&(x, y)| self.unproject(x, y)).collect()
    }
}

/// Equal-angle (stereographic) projection
///
/// Conformal map from the sphere to the disk, projecting from the zenith
/// onto the equatorial plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EqualAngle {
    /// Fold upper-hemisphere input onto the lower hemisphere before
    /// projecting
    pub invert_positive: bool,
}

impl EqualAngle {
    /// Creates the projection with hemisphere folding enabled
    pub fn new() -> Self {
        EqualAngle {
            invert_positive: true,
        }
    }

    /// Creates the projection without hemisphere folding
    ///
    /// Used for circle traces that legitimately span both hemispheres. The
    /// forward map is unbounded as z → 1 in this mode; callers clip
    /// downstream.
    pub fn without_folding() -> Self {
        EqualAngle {
            invert_positive: false,
        }
    }
}

impl Default for EqualAngle {
    fn default() -> Self {
        Self::new()
    }
}

impl SphericalProjection for EqualAngle {
    fn project(&self, v: Vec3) -> (f64, f64) {
        let v = if self.invert_positive && v.z > 0.0 {
            -v
        } else {
            v
        };
        (v.x / (1.0 - v.z), v.y / (1.0 - v.z))
    }

    fn unproject(&self, x: f64, y: f64) -> Vec3 {
        let r2 = x * x + y * y;
        Vec3::new(
            2.0 * x / (1.0 + r2),
            2.0 * y / (1.0 + r2),
            (r2 - 1.0) / (1.0 + r2),
        )
    }
}

/// Equal-area (Lambert azimuthal) projection
///
/// Area-preserving map from the sphere to the disk, rescaled so the
/// projected sphere radius is 1 instead of the natural √2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EqualArea {
    /// Fold upper-hemisphere input onto the lower hemisphere before
    /// projecting
    pub invert_positive: bool,
}

impl EqualArea {
    /// Creates the projection with hemisphere folding enabled
    pub fn new() -> Self {
        EqualArea {
            invert_positive: true,
        }
    }

    /// Creates the projection without hemisphere folding
    pub fn without_folding() -> Self {
        EqualArea {
            invert_positive: false,
        }
    }
}

impl Default for EqualArea {
    fn default() -> Self {
        Self::new()
    }
}

impl SphericalProjection for EqualArea {
    fn project(&self, v: Vec3) -> (f64, f64) {
        // Normalize before projecting; tolerates slightly non-unit input
        let d = 1.0 / v.magnitude();
        let c = if self.invert_positive && v.z > 0.0 {
            -d
        } else {
            d
        };
        let (x, y, z) = (c * v.x, c * v.y, c * v.z);
        (x * (1.0 / (1.0 - z)).sqrt(), y * (1.0 / (1.0 - z)).sqrt())
    }

    fn unproject(&self, x: f64, y: f64) -> Vec3 {
        // Undo the disk-radius shrink from sqrt(2) to 1
        let (x, y) = (x * SQRT_2, y * SQRT_2);
        let r2 = x * x + y * y;
        Vec3::new(
            (1.0 - r2 / 4.0).sqrt() * x,
            (1.0 - r2 / 4.0).sqrt() * y,
            r2 / 2.0 - 1.0,
        )
    }
}
