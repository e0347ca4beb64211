//! The extremal triangle that seeds hull refinement.

use glam::DVec2;

use crate::{
    geometry::{distance, distance_from_line, orient2d},
    HullError,
};

/// Finds the two points that are farthest apart, the diameter of the point set.
///
/// This is an exhaustive scan over all unordered pairs. On ties, the first pair
/// encountered is kept.
///
/// # Errors
///
/// Returns [`HullError::InsufficientPoints`] if the points contain fewer than
/// two distinct positions.
pub fn find_diameter_pair(points: &[DVec2]) -> Result<(DVec2, DVec2), HullError> {
    let mut best: Option<(DVec2, DVec2)> = None;
    let mut best_distance = 0.0;

    for (i, &p) in points.iter().enumerate() {
        for &q in &points[i + 1..] {
            let d = distance(p, q);
            if d > best_distance {
                best_distance = d;
                best = Some((p, q));
            }
        }
    }

    best.ok_or_else(|| HullError::InsufficientPoints {
        distinct: if points.is_empty() { 0 } else { 1 },
    })
}

/// Finds the point farthest from the unbounded line through `base0` and `base1`.
///
/// Only a strictly greater distance replaces the current best, so the first
/// point reaching the maximum wins.
///
/// # Errors
///
/// Returns [`HullError::DegenerateSimplex`] if every point lies on the line, and
/// [`HullError::DegenerateLine`] if `base0 == base1`.
pub fn find_apex(points: &[DVec2], base0: DVec2, base1: DVec2) -> Result<DVec2, HullError> {
    let direction = base1 - base0;
    let mut apex = None;
    let mut best_distance = 0.0;

    for &point in points {
        let d = distance_from_line(base0, direction, point, false)?;
        if d > best_distance {
            best_distance = d;
            apex = Some(point);
        }
    }

    apex.ok_or(HullError::DegenerateSimplex)
}

/// The initial hull: a triangle spanned by the diameter pair and the point
/// farthest from it, with its corners in counterclockwise order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExtremalTriangle {
    /// The corners of the triangle in counterclockwise order.
    pub corners: [DVec2; 3],
}

impl ExtremalTriangle {
    /// Computes the extremal triangle of the given points.
    ///
    /// # Errors
    ///
    /// Returns [`HullError::InsufficientPoints`] for fewer than two distinct points,
    /// and [`HullError::DegenerateSimplex`] if all points are collinear.
    pub fn from_points(points: &[DVec2]) -> Result<Self, HullError> {
        let (base0, base1) = find_diameter_pair(points)?;
        let apex = find_apex(points, base0, base1)?;

        let orientation = orient2d(base0, base1, apex);
        let corners = if orientation > 0.0 {
            [base0, base1, apex]
        } else if orientation < 0.0 {
            [base1, base0, apex]
        } else {
            return Err(HullError::DegenerateSimplex);
        };

        tracing::debug!(?corners, "found extremal triangle");

        Ok(Self { corners })
    }

    /// Returns the three boundary segments `(a, b)` of the triangle, with the
    /// interior on the left of each.
    #[inline]
    pub fn sides(&self) -> [(DVec2, DVec2); 3] {
        let [a, b, c] = self.corners;
        [(a, b), (b, c), (c, a)]
    }
}
