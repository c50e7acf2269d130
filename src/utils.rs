//! Shared planar vector and angle utilities.

use crate::constants::EPSILON;
use crate::keypoint::Position;
use nalgebra::Vector2;

/// Angle at vertex `p2` subtended by the segments toward `p1` and `p3`,
/// computed via the law of cosines.
///
/// The cosine ratio is clamped to [-1, 1] so that floating-point overshoot
/// on near-collinear points yields exactly 0 or PI instead of NaN. Returns
/// `None` when either bounding segment is shorter than `EPSILON`; the angle
/// is undefined for a collapsed triangle.
#[must_use]
pub fn angle_between(p1: Position, p2: Position, p3: Position) -> Option<f64> {
    let a = p2.distance_to(p1);
    let b = p2.distance_to(p3);
    if a < EPSILON || b < EPSILON {
        return None;
    }
    let c = p1.distance_to(p3);
    let cos = ((a * a + b * b - c * c) / (2.0 * a * b)).clamp(-1.0, 1.0);
    Some(cos.acos())
}

/// Express `v` in the orthonormal basis `{basis[0], basis[1]}`
#[must_use]
pub fn project(basis: &[Vector2<f64>; 2], v: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(basis[0].dot(&v), basis[1].dot(&v))
}

/// Affine conversion of `value` from [`in_min`, `in_max`] to
/// [`out_min`, `out_max`]
#[must_use]
pub fn linear_remap(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}
