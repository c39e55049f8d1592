//! Joint angle computation from three landmark positions.

use crate::constants::{DEGENERATE_ANGLE, EPSILON};
use nalgebra::Point3;

/// Landmark position in pixel-comparable units
pub type Position = Point3<f64>;

/// Which coordinates take part in an angle computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Image plane only (x, y)
    Planar,
    /// Full 3D position (x, y, z)
    Spatial,
}

/// Angle at vertex `b` formed by `a` and `c`, in degrees.
///
/// The cosine ratio is clamped to [-1, 1] before `acos`. If either arm
/// vector has (near) zero length the angle is undefined and
/// [`DEGENERATE_ANGLE`] is returned instead.
#[must_use]
pub fn joint_angle(a: &Position, b: &Position, c: &Position, projection: Projection) -> f64 {
    let v1 = a - b;
    let v2 = c - b;

    match projection {
        Projection::Planar => {
            let (p1, p2) = (v1.xy(), v2.xy());
            angle_from_parts(p1.dot(&p2), p1.norm(), p2.norm())
        }
        Projection::Spatial => angle_from_parts(v1.dot(&v2), v1.norm(), v2.norm()),
    }
}

fn angle_from_parts(dot: f64, norm_a: f64, norm_b: f64) -> f64 {
    if norm_a < EPSILON || norm_b < EPSILON {
        return DEGENERATE_ANGLE;
    }

    (dot / (norm_a * norm_b)).clamp(-1.0, 1.0).acos().to_degrees()
}
