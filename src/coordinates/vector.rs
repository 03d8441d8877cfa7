//! # Direction Cosine Vector Module
//!
//! This module provides the 3D Cartesian direction-cosine representation that
//! serves as the intermediate format between angular attitude notation and the
//! stereonet projections.
//!
//! ## Design Philosophy
//!
//! The `Vec3` struct stores coordinates in a right-handed Cartesian system,
//! providing exact representation of orientations without the azimuth
//! degeneracies that spherical notation has at vertical and horizontal
//! attitudes.
//!
//! ## Coordinate System Convention
//!
//! This implementation follows the structural-geology convention:
//! - **X-axis**: Points east (azimuth 090°)
//! - **Y-axis**: Points north (azimuth 000°)
//! - **Z-axis**: Points up (so downward-pointing poles and plunging lines
//!   have negative z)
//!
//! ## Internal Storage
//!
//! Components are stored as three `f64` values. Vectors built from attitudes
//! are unit length by construction of the trigonometric identities and are
//! never re-normalized afterwards.
//!
//! ## Examples
//!
//! ```rust
//! use stereonet::coordinates::vector::Vec3;
//!
//! // Unit vector pointing east
//! let east = Vec3::new(1.0, 0.0, 0.0);
//!
//! // Unit vector pointing straight down (pole of a horizontal plane)
//! let down = Vec3::new(0.0, 0.0, -1.0);
//!
//! assert_eq!(east.dot(&down), 0.0); // Perpendicular vectors
//! ```

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Three-dimensional direction-cosine vector
///
/// Represents a direction in 3D space using Cartesian coordinates in the
/// east/north/up convention. This struct is the fundamental building block
/// for attitude conversions and stereonet projections.
///
/// # Coordinate System
///
/// - **X**: East (azimuth 090°)
/// - **Y**: North (azimuth 000°)
/// - **Z**: Up
///
/// # Unit Vectors vs General Vectors
///
/// Outputs of the attitude conversions are unit length analytically; general
/// vectors (e.g. raw cross products) may have any magnitude. Interpretation
/// depends on context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// X-component (east)
    pub x: f64,
    /// Y-component (north)
    pub y: f64,
    /// Z-component (up)
    pub z: f64,
}

impl Vec3 {
    /// Creates a new direction vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stereonet::coordinates::vector::Vec3;
    ///
    /// let v = Vec3::new(1.0, 0.0, 0.0);
    /// assert_eq!(v.x, 1.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3 { x, y, z }
    }

    /// Calculates the magnitude (length) of the vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stereonet::coordinates::vector::Vec3;
    ///
    /// let v = Vec3::new(3.0, 4.0, 0.0);
    /// assert_eq!(v.magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns a normalized (unit) vector in the same direction
    ///
    /// Returns `None` if the magnitude is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stereonet::coordinates::vector::Vec3;
    ///
    /// let unit = Vec3::new(3.0, 4.0, 0.0).normalize().unwrap();
    /// assert!((unit.magnitude() - 1.0).abs() < 1e-15);
    /// ```
    pub fn normalize(&self) -> Option<Vec3> {
        let mag = self.magnitude();
        if mag == 0.0 {
            None
        } else {
            Some(Vec3 {
                x: self.x / mag,
                y: self.y / mag,
                z: self.z / mag,
            })
        }
    }

    /// Calculates the dot product with another vector
    ///
    /// For unit vectors this is the cosine of the angle between them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stereonet::coordinates::vector::Vec3;
    ///
    /// let east = Vec3::new(1.0, 0.0, 0.0);
    /// let north = Vec3::new(0.0, 1.0, 0.0);
    /// assert_eq!(east.dot(&north), 0.0);
    /// ```
    pub fn dot(&self, other: &Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the cross product with another vector
    ///
    /// Produces a vector perpendicular to both inputs following the
    /// right-hand rule.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stereonet::coordinates::vector::Vec3;
    ///
    /// let east = Vec3::new(1.0, 0.0, 0.0);
    /// let north = Vec3::new(0.0, 1.0, 0.0);
    /// let up = east.cross(&north);
    /// assert!((up.z - 1.0).abs() < 1e-15);
    /// ```
    pub fn cross(&self, other: &Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Calculates the cross product with another vector, normalized to unit
    /// length
    ///
    /// If the cross product has zero length (parallel or antiparallel
    /// inputs) the zero vector is returned unchanged rather than failing,
    /// so batch callers building great-circle poles need not special-case
    /// collinear inputs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stereonet::coordinates::vector::Vec3;
    ///
    /// let east = Vec3::new(1.0, 0.0, 0.0);
    /// let north = Vec3::new(0.0, 1.0, 0.0);
    /// assert_eq!(east.normalized_cross(&north), Vec3::new(0.0, 0.0, 1.0));
    ///
    /// let parallel = Vec3::new(2.0, 0.0, 0.0);
    /// assert_eq!(east.normalized_cross(&parallel), Vec3::new(0.0, 0.0, 0.0));
    /// ```
    pub fn normalized_cross(&self, other: &Vec3) -> Vec3 {
        let c = self.cross(other);
        let length = c.magnitude();
        if length > 0.0 {
            c / length
        } else {
            c
        }
    }

    /// Calculates the angle to another direction in radians
    ///
    /// Both vectors are treated as directions from the origin. Returns a
    /// value in [0, π].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stereonet::coordinates::vector::Vec3;
    /// use std::f64::consts::PI;
    ///
    /// let east = Vec3::new(1.0, 0.0, 0.0);
    /// let north = Vec3::new(0.0, 1.0, 0.0);
    /// assert!((east.angle_with(&north) - PI / 2.0).abs() < 1e-15);
    /// ```
    pub fn angle_with(&self, other: &Vec3) -> f64 {
        let dot_product = self.dot(other);
        let mag_product = self.magnitude() * other.magnitude();

        if mag_product == 0.0 {
            return 0.0;
        }

        let cos_angle = dot_product / mag_product;

        // Handle numerical precision issues
        if cos_angle >= 1.0 {
            0.0
        } else if cos_angle <= -1.0 {
            PI
        } else {
            cos_angle.acos()
        }
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stereonet::coordinates::vector::Vec3;
    /// use nalgebra::Vector3;
    ///
    /// let v: Vector3<f64> = Vec3::new(1.0, 2.0, 3.0).to_vector3();
    /// assert_eq!(v.y, 2.0);
    /// ```
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stereonet::coordinates::vector::Vec3;
    /// use nalgebra::Vector3;
    ///
    /// let v = Vec3::from_vector3(Vector3::new(1.0, 2.0, 3.0));
    /// assert_eq!(v.z, 3.0);
    /// ```
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Vec3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

// Arithmetic operations for convenience
impl std::ops::Add for Vec3 {
    type Output = Vec3;

    fn add(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::ops::Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl std::ops::Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, scalar: f64) -> Vec3 {
        Vec3 {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl std::ops::Div<f64> for Vec3 {
    type Output = Vec3;

    fn div(self, scalar: f64) -> Vec3 {
        Vec3 {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_vector_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_magnitude_calculation() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert_eq!(v.magnitude(), 5.0);

        let unit = Vec3::new(1.0, 0.0, 0.0);
        assert_eq!(unit.magnitude(), 1.0);

        let zero = Vec3::new(0.0, 0.0, 0.0);
        assert_eq!(zero.magnitude(), 0.0);
    }

    #[test]
    fn test_normalize() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        let normalized = v.normalize().unwrap();

        assert!((normalized.magnitude() - 1.0).abs() < 1e-15);
        assert!((normalized.x - 0.6).abs() < 1e-15);
        assert!((normalized.y - 0.8).abs() < 1e-15);
        assert_eq!(normalized.z, 0.0);

        // Zero vector has no direction
        let zero = Vec3::new(0.0, 0.0, 0.0);
        assert!(zero.normalize().is_none());
    }

    #[test]
    fn test_dot_product() {
        let east = Vec3::new(1.0, 0.0, 0.0);
        let north = Vec3::new(0.0, 1.0, 0.0);
        let up = Vec3::new(0.0, 0.0, 1.0);

        // Orthogonal vectors have dot product of 0
        assert_eq!(east.dot(&north), 0.0);
        assert_eq!(east.dot(&up), 0.0);
        assert_eq!(north.dot(&up), 0.0);

        // Parallel and antiparallel
        assert_eq!(east.dot(&Vec3::new(2.0, 0.0, 0.0)), 2.0);
        assert_eq!(east.dot(&Vec3::new(-1.0, 0.0, 0.0)), -1.0);
    }

    #[test]
    fn test_cross_product() {
        let east = Vec3::new(1.0, 0.0, 0.0);
        let north = Vec3::new(0.0, 1.0, 0.0);
        let up = Vec3::new(0.0, 0.0, 1.0);

        // Right-hand rule: east x north = up
        let cross_en = east.cross(&north);
        assert!((cross_en.x - 0.0).abs() < 1e-15);
        assert!((cross_en.y - 0.0).abs() < 1e-15);
        assert!((cross_en.z - 1.0).abs() < 1e-15);

        // north x up = east
        let cross_nu = north.cross(&up);
        assert!((cross_nu.x - 1.0).abs() < 1e-15);
        assert!((cross_nu.y - 0.0).abs() < 1e-15);
        assert!((cross_nu.z - 0.0).abs() < 1e-15);

        // up x east = north
        let cross_ue = up.cross(&east);
        assert!((cross_ue.x - 0.0).abs() < 1e-15);
        assert!((cross_ue.y - 1.0).abs() < 1e-15);
        assert!((cross_ue.z - 0.0).abs() < 1e-15);
    }

    #[test]
    fn test_normalized_cross() {
        let east = Vec3::new(1.0, 0.0, 0.0);
        let north = Vec3::new(0.0, 1.0, 0.0);

        assert_eq!(east.normalized_cross(&north), Vec3::new(0.0, 0.0, 1.0));

        // Non-unit inputs still give a unit result
        let a = Vec3::new(3.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 0.5, 0.0);
        let c = a.normalized_cross(&b);
        assert!((c.magnitude() - 1.0).abs() < 1e-15);
        assert!((c.z - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_normalized_cross_degenerate() {
        // Parallel inputs give a zero-length cross product, which passes
        // through unchanged
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(2.0, 0.0, 0.0);
        assert_eq!(a.normalized_cross(&b), Vec3::new(0.0, 0.0, 0.0));

        // Antiparallel likewise
        let c = Vec3::new(-1.0, 0.0, 0.0);
        assert_eq!(a.normalized_cross(&c), Vec3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_angle_with() {
        let east = Vec3::new(1.0, 0.0, 0.0);
        let north = Vec3::new(0.0, 1.0, 0.0);
        let up = Vec3::new(0.0, 0.0, 1.0);

        assert!((east.angle_with(&north) - PI / 2.0).abs() < 1e-15);
        assert!((east.angle_with(&up) - PI / 2.0).abs() < 1e-15);

        let west = Vec3::new(-1.0, 0.0, 0.0);
        assert!((east.angle_with(&west) - PI).abs() < 1e-15);

        let same = Vec3::new(2.0, 0.0, 0.0);
        assert!((east.angle_with(&same) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn test_arithmetic_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        let sum = a + b;
        assert_eq!(sum, Vec3::new(5.0, 7.0, 9.0));

        let diff = b - a;
        assert_eq!(diff, Vec3::new(3.0, 3.0, 3.0));

        let neg = -a;
        assert_eq!(neg, Vec3::new(-1.0, -2.0, -3.0));

        let scaled = a * 2.0;
        assert_eq!(scaled, Vec3::new(2.0, 4.0, 6.0));

        let divided = a / 2.0;
        assert_eq!(divided, Vec3::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn test_vector3_conversions() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let nv = v.to_vector3();

        assert_eq!(nv.x, 1.0);
        assert_eq!(nv.y, 2.0);
        assert_eq!(nv.z, 3.0);

        let back = Vec3::from_vector3(nv);
        assert_eq!(v, back);
    }

    #[test]
    fn test_tiny_vectors() {
        let tiny = Vec3::new(1e-15, 1e-15, 1e-15);
        assert!(tiny.magnitude() > 0.0);
        let normalized = tiny.normalize().unwrap();
        assert!((normalized.magnitude() - 1.0).abs() < 1e-14);
    }
}
