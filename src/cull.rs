use glam::{DMat2, DVec2};

use crate::HullError;

/// Removes the points that lie inside or on the boundary of `triangle`.
///
/// Each point is expressed in barycentric coordinates `(β, γ)` relative to the
/// edges `triangle[2] - triangle[0]` and `triangle[1] - triangle[0]`. A point is
/// kept if any of `β`, `γ`, or `1 - β - γ` falls outside of `[0, 1]`.
/// Points equal to a corner of the triangle are always removed.
///
/// The returned points keep their input order.
///
/// # Errors
///
/// Returns [`HullError::SingularTriangle`] if the triangle has zero area.
pub fn cull(
    points: impl IntoIterator<Item = DVec2>,
    triangle: [DVec2; 3],
) -> Result<Vec<DVec2>, HullError> {
    let [origin, v_end, u_end] = triangle;
    let basis = DMat2::from_cols(u_end - origin, v_end - origin);

    let determinant = basis.determinant();
    if determinant == 0.0 || !determinant.is_finite() {
        return Err(HullError::SingularTriangle);
    }
    let inverse = basis.inverse();

    let exterior = points
        .into_iter()
        .filter(|point| !triangle.contains(point))
        .filter(|&point| {
            let barycentric = inverse * (point - origin);
            let (beta, gamma) = (barycentric.x, barycentric.y);
            beta < 0.0 || beta > 1.0 || gamma < 0.0 || gamma > 1.0 || 1.0 - beta - gamma < 0.0
        })
        .collect();

    Ok(exterior)
}
