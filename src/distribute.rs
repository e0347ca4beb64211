use glam::DVec2;

use crate::{
    edge::Edge,
    geometry::{distance_from_line, outward_distance},
    HullError,
};

/// The rule used to assign points to the conflict lists of hull edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Distribution {
    /// Assign each point to the edge it lies farthest outside of, measured by
    /// signed perpendicular distance. Points that are not outside of any edge
    /// are dropped.
    ///
    /// This is the classic quickhull assignment and always produces a correct hull.
    #[default]
    Outward,
    /// Assign each point to the edge with the smallest segment-bounded
    /// perpendicular distance, even if that distance is infinite because the
    /// point does not face any edge.
    ///
    /// Points are never dropped by this rule. It can select apexes that are not
    /// hull vertices when a point sits beyond the corner shared by two edges.
    NearestSegment,
}

/// Assigns each point to the conflict list of one of `edges` according to `rule`.
///
/// Ties go to the first edge in `edges`.
///
/// # Errors
///
/// Returns [`HullError::DegenerateLine`] if one of the edges has zero length.
pub fn distribute(
    points: impl IntoIterator<Item = DVec2>,
    edges: &mut [Edge],
    rule: Distribution,
) -> Result<(), HullError> {
    if edges.is_empty() {
        return Ok(());
    }

    for point in points {
        let assignment = match rule {
            Distribution::Outward => farthest_outside(point, edges)?,
            Distribution::NearestSegment => Some(nearest_segment(point, edges)?),
        };

        if let Some((index, distance)) = assignment {
            edges[index].conflicts_mut().insert(distance, point);
        }
    }

    Ok(())
}

/// Finds the edge that `point` lies farthest outside of, if any.
fn farthest_outside(point: DVec2, edges: &[Edge]) -> Result<Option<(usize, f64)>, HullError> {
    let mut best: Option<(usize, f64)> = None;

    for (i, edge) in edges.iter().enumerate() {
        let distance = outward_distance(edge.a(), edge.b(), point)?;
        if distance <= 0.0 {
            continue;
        }
        match best {
            Some((_, best_distance)) if distance <= best_distance => {}
            _ => best = Some((i, distance)),
        }
    }

    Ok(best)
}

/// Finds the edge with the smallest segment-bounded distance to `point`.
///
/// `edges` must not be empty.
fn nearest_segment(point: DVec2, edges: &[Edge]) -> Result<(usize, f64), HullError> {
    let mut best = (0, f64::INFINITY);

    for (i, edge) in edges.iter().enumerate() {
        let distance = distance_from_line(edge.a(), edge.direction(), point, true)?;
        if i == 0 || distance < best.1 {
            best = (i, distance);
        }
    }

    Ok(best)
}
