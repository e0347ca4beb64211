//! Distance and orientation primitives shared by every stage of hull construction.

use glam::DVec2;

use crate::HullError;

/// Returns the Euclidean distance between `p` and `q`.
#[inline]
pub fn distance(p: DVec2, q: DVec2) -> f64 {
    (p - q).length()
}

/// Normalizes `v` to unit length.
///
/// # Errors
///
/// Returns [`HullError::DegenerateLine`] if `v` has zero or non-finite length.
#[inline]
pub fn normalize(v: DVec2) -> Result<DVec2, HullError> {
    v.try_normalize().ok_or(HullError::DegenerateLine)
}

/// Computes the perpendicular distance from `point` to the line through `base`
/// with the given `direction`.
///
/// If `line_wise` is `true`, the line is bounded to the segment from `base` to
/// `base + direction`. A point whose projection falls outside of the segment is
/// not facing it, and [`f64::INFINITY`] is returned.
///
/// # Errors
///
/// Returns [`HullError::DegenerateLine`] if `direction` has zero length,
/// unless `point` is exactly `base + direction`.
pub fn distance_from_line(
    base: DVec2,
    direction: DVec2,
    point: DVec2,
    line_wise: bool,
) -> Result<f64, HullError> {
    if base + direction == point {
        return Ok(0.0);
    }

    let unit = normalize(direction)?;
    let to_point = point - base;
    let projection = to_point.dot(unit);

    if line_wise && (projection < 0.0 || projection > direction.length()) {
        return Ok(f64::INFINITY);
    }

    // Round-off near collinearity can push this slightly below zero.
    let squared = to_point.length_squared() - projection * projection;
    Ok(squared.max(0.0).sqrt())
}

/// Computes the signed distance of `point` from the directed line `a -> b`.
///
/// The distance is positive on the right of the line, which is the outside of a
/// counterclockwise boundary, and negative on the left. The sign comes from the
/// robust [`orient2d`] predicate, so points exactly on the line yield exactly zero.
///
/// # Errors
///
/// Returns [`HullError::DegenerateLine`] if `a == b`.
#[inline]
pub fn outward_distance(a: DVec2, b: DVec2, point: DVec2) -> Result<f64, HullError> {
    let length = (b - a).length();
    if length == 0.0 || !length.is_finite() {
        return Err(HullError::DegenerateLine);
    }

    let orientation = orient2d(a, b, point);
    if orientation == 0.0 {
        return Ok(0.0);
    }

    Ok(-orientation / length)
}

/// Gives the orientation of the triangle formed by `a`, `b`, `c`.
///
/// - `orientation > 0`: counterclockwise
/// - `orientation < 0`: clockwise
/// - `orientation == 0`: collinear
///
/// The magnitude is twice the signed area of the triangle.
#[inline]
pub fn orient2d(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    use robust::Coord;
    robust::orient2d(
        Coord { x: a.x, y: a.y },
        Coord { x: b.x, y: b.y },
        Coord { x: c.x, y: c.y },
    )
}
