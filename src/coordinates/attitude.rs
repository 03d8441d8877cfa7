//! # Attitude Notation Module
//!
//! This module provides the angular attitude types used in structural
//! geology field notation and their conversions to and from direction
//! cosines.
//!
//! ## Conventions
//!
//! - **Plane**: recorded as dip direction / dip, both in degrees. The
//!   direction-cosine representation is the plane's pole (normal), pointing
//!   into the lower hemisphere (z ≤ 0).
//! - **Line**: recorded as trend / plunge, both in degrees. The
//!   direction-cosine representation points down-plunge for positive plunge.
//!
//! Azimuths are measured clockwise from north, so trend/dip direction 000°
//! is +y and 090° is +x in the east/north/up frame of
//! [`Vec3`](crate::coordinates::vector::Vec3).
//!
//! ## Hemisphere folding on recovery
//!
//! Converting a direction cosine vector back to an attitude folds both
//! hemispheres onto the same angular pair, so only the acute dip (≤ 90°) is
//! ever reported regardless of which side of the plane the input pole
//! pointed to. Planes and lines use opposite fold signs: a plane's pole
//! points downward by convention while a line may point either way. The two
//! conventions are deliberate and must not be unified.
//!
//! ## Validation policy
//!
//! Attitudes are not range-checked. Out-of-range angles propagate through
//! the periodic trigonometric identities without failure; recovered azimuths
//! are reduced modulo 360.

use crate::coordinates::vector::Vec3;
use serde::{Deserialize, Serialize};

/// Planar attitude in dip direction / dip notation (degrees)
///
/// `dip_direction` is the compass azimuth of steepest descent in [0, 360),
/// `dip` the angle of steepest descent below horizontal in [0, 90].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Azimuth of steepest descent, degrees clockwise from north
    pub dip_direction: f64,
    /// Angle of steepest descent below horizontal, degrees
    pub dip: f64,
}

/// Linear attitude in trend / plunge notation (degrees)
///
/// `trend` is the compass azimuth of the line in [0, 360), `plunge` the
/// angle below horizontal in [-90, 90].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Compass azimuth, degrees clockwise from north
    pub trend: f64,
    /// Angle below horizontal, degrees
    pub plunge: f64,
}

impl Plane {
    /// Creates a plane attitude from dip direction and dip in degrees
    pub fn new(dip_direction: f64, dip: f64) -> Self {
        Plane { dip_direction, dip }
    }

    /// Converts this plane into its pole direction cosines
    ///
    /// The pole points into the lower hemisphere (z ≤ 0) and is unit length
    /// by construction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stereonet::coordinates::attitude::Plane;
    ///
    /// let pole = Plane::new(90.0, 30.0).pole();
    /// assert!((pole.x - (-0.5)).abs() < 1e-9);
    /// assert!((pole.z - (-0.866025403784)).abs() < 1e-9);
    /// ```
    pub fn pole(&self) -> Vec3 {
        let dd = self.dip_direction.to_radians();
        let d = self.dip.to_radians();
        Vec3::new(-d.sin() * dd.sin(), -d.sin() * dd.cos(), -d.cos())
    }

    /// Recovers a plane attitude from pole direction cosines
    ///
    /// Works regardless of which hemisphere the pole lies in: both
    /// hemispheres fold onto the same dip direction / dip pair, with the
    /// dip always acute. z is clamped to [-1, 1] before the arc-cosine so
    /// floating round-off on analytically-unit input cannot leave the
    /// domain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stereonet::coordinates::attitude::Plane;
    /// use stereonet::coordinates::vector::Vec3;
    ///
    /// let plane = Plane::from_pole(Vec3::new(-0.5, 0.0, -0.866025403784439));
    /// assert!((plane.dip_direction - 90.0).abs() < 1e-9);
    /// assert!((plane.dip - 30.0).abs() < 1e-9);
    /// ```
    pub fn from_pole(pole: Vec3) -> Self {
        // Poles point down by convention; z = 0 takes the downward arm.
        let sign_z = if pole.z > 0.0 { 1.0 } else { -1.0 };
        let z = pole.z.clamp(-1.0, 1.0);
        Plane {
            dip_direction: (sign_z * pole.x)
                .atan2(sign_z * pole.y)
                .to_degrees()
                .rem_euclid(360.0),
            dip: z.abs().acos().to_degrees(),
        }
    }
}

impl Line {
    /// Creates a line attitude from trend and plunge in degrees
    pub fn new(trend: f64, plunge: f64) -> Self {
        Line { trend, plunge }
    }

    /// Converts this line into direction cosines
    ///
    /// Points down-plunge (z ≤ 0) for positive plunge; unit length by
    /// construction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stereonet::coordinates::attitude::Line;
    ///
    /// let v = Line::new(0.0, 90.0).direction();
    /// assert!((v.z - (-1.0)).abs() < 1e-15);
    /// ```
    pub fn direction(&self) -> Vec3 {
        let tr = self.trend.to_radians();
        let pl = self.plunge.to_radians();
        Vec3::new(pl.cos() * tr.sin(), pl.cos() * tr.cos(), -pl.sin())
    }

    /// Recovers a line attitude from direction cosines
    ///
    /// Folds both hemispheres onto a single trend / plunge pair with
    /// non-negative plunge. The fold sign is opposite to the plane
    /// convention: lines point up when z > 0 while plane poles point down.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stereonet::coordinates::attitude::Line;
    /// use stereonet::coordinates::vector::Vec3;
    ///
    /// let line = Line::from_direction(Vec3::new(0.0, 0.0, -1.0));
    /// assert!((line.plunge - 90.0).abs() < 1e-9);
    /// ```
    pub fn from_direction(direction: Vec3) -> Self {
        // Opposite fold sign to Plane::from_pole; z = 0 takes the else arm.
        let sign_z = if direction.z > 0.0 { -1.0 } else { 1.0 };
        let z = direction.z.clamp(-1.0, 1.0);
        Line {
            trend: (sign_z * direction.x)
                .atan2(sign_z * direction.y)
                .to_degrees()
                .rem_euclid(360.0),
            plunge: z.abs().asin().to_degrees(),
        }
    }
}

/// Converts a batch of plane attitudes into pole direction cosines
///
/// Elementwise and order-preserving over the input slice.
pub fn poles_of(planes: &[Plane]) -> Vec<Vec3> {
    planes.iter().map(Plane::pole).collect()
}

/// Recovers plane attitudes from a batch of pole direction cosines
pub fn planes_from_poles(poles: &[Vec3]) -> Vec<Plane> {
    poles.iter().copied().map(Plane::from_pole).collect()
}

/// Converts a batch of line attitudes into direction cosines
pub fn directions_of(lines: &[Line]) -> Vec<Vec3> {
    lines.iter().map(Line::direction).collect()
}

/// Recovers line attitudes from a batch of direction cosines
pub fn lines_from_directions(directions: &[Vec3]) -> Vec<Line> {
    directions.iter().copied().map(Line::from_direction).collect()
}
