//! Great- and small-circle trace generation on the unit sphere
//!
//! Builds ordered polylines of unit vectors for the circle geometry drawn
//! on stereonets: great circles (the trace of a plane, perpendicular to its
//! pole) and small circles (cones about an axis). The rendering collaborator
//! projects these with hemisphere folding disabled and clips segments that
//! leave the plot primitive.

use crate::coordinates::vector::Vec3;
use crate::{Result, StereonetError};
use log::warn;
use std::f64::consts::TAU;

/// Builds an orthonormal in-circle basis perpendicular to `axis`
///
/// The first basis vector is tied to north so traces start at a repeatable
/// azimuth; when the axis itself points north the east reference is used
/// instead.
fn circle_basis(axis: Vec3) -> Result<(Vec3, Vec3, Vec3)> {
    let axis = axis.normalize().ok_or_else(|| {
        StereonetError::DegenerateVector("circle axis has zero length".to_string())
    })?;

    let mut u = axis.normalized_cross(&Vec3::new(0.0, 1.0, 0.0));
    if u.magnitude() == 0.0 {
        warn!("circle axis is parallel to north, using east reference");
        u = axis.normalized_cross(&Vec3::new(1.0, 0.0, 0.0));
    }
    let v = axis.normalized_cross(&u);
    Ok((axis, u, v))
}

/// Generates the great-circle trace of the plane whose pole is `pole`
///
/// Returns `n` unit vectors forming a closed polyline (first and last
/// points coincide) in the plane perpendicular to the pole. The trace spans
/// both hemispheres; project it with folding disabled.
///
/// # Errors
///
/// `DegenerateVector` if the pole has zero length, `InvalidArgument` if
/// fewer than two points are requested.
///
/// # Examples
///
/// ```rust
/// use stereonet::circle::great_circle;
/// use stereonet::coordinates::attitude::Plane;
///
/// let trace = great_circle(Plane::new(90.0, 30.0).pole(), 181).unwrap();
/// assert_eq!(trace.len(), 181);
/// ```
pub fn great_circle(pole: Vec3, n: usize) -> Result<Vec<Vec3>> {
    if n < 2 {
        return Err(StereonetError::InvalidArgument(format!(
            "great circle needs at least 2 points, got {}",
            n
        )));
    }
    let (_, u, v) = circle_basis(pole)?;
    Ok((0..n)
        .map(|i| {
            let theta = TAU * i as f64 / (n - 1) as f64;
            u * theta.cos() + v * theta.sin()
        })
        .collect())
}

/// Generates the small-circle trace at `aperture` degrees about `axis`
///
/// Returns `n` unit vectors forming a closed polyline on the cone of
/// half-apical angle `aperture` around the (normalized) axis. An aperture
/// of 90° degenerates to the great circle perpendicular to the axis.
///
/// # Errors
///
/// `DegenerateVector` if the axis has zero length, `InvalidArgument` if
/// fewer than two points are requested.
pub fn small_circle(axis: Vec3, aperture: f64, n: usize) -> Result<Vec<Vec3>> {
    if n < 2 {
        return Err(StereonetError::InvalidArgument(format!(
            "small circle needs at least 2 points, got {}",
            n
        )));
    }
    let (axis, u, v) = circle_basis(axis)?;
    let (sin_ap, cos_ap) = aperture.to_radians().sin_cos();
    Ok((0..n)
        .map(|i| {
            let theta = TAU * i as f64 / (n - 1) as f64;
            axis * cos_ap + (u * theta.cos() + v * theta.sin()) * sin_ap
        })
        .collect())
}
