use glam::DVec2;

use crate::{
    geometry::orient2d, point_set::PreparedPoints, simplex::ExtremalTriangle, HullConfig,
    HullError, HullRefiner, RoundObserver,
};

/// A 2D [convex hull] representing the smallest convex set containing
/// all input points in a given point set.
///
/// This can be thought of as a shrink wrapping of a 2D object.
///
/// [convex hull]: https://en.wikipedia.org/wiki/Convex_hull
///
/// # Example
///
/// ```
/// use quickhull2d::ConvexHull2d;
/// use glam::DVec2;
///
/// let points = vec![
///     DVec2::new(0.0, 0.0),
///     DVec2::new(4.0, 0.0),
///     DVec2::new(0.0, 4.0),
///     DVec2::new(4.0, 4.0),
///     DVec2::new(2.0, 2.0),
/// ];
///
/// // Create the convex hull.
/// let hull = ConvexHull2d::try_from_points(&points).unwrap();
///
/// // Get the points of the convex hull in counterclockwise order,
/// // starting from the lexicographically smallest one.
/// assert_eq!(
///     hull.points(),
///     vec![
///         DVec2::new(0.0, 0.0),
///         DVec2::new(4.0, 0.0),
///         DVec2::new(4.0, 4.0),
///         DVec2::new(0.0, 4.0),
///     ],
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexHull2d {
    /// The hull vertices in counterclockwise order.
    points: Vec<DVec2>,
    /// The number of refinement rounds that were performed.
    rounds: usize,
    /// Whether refinement ran to completion.
    complete: bool,
}

impl ConvexHull2d {
    /// Attempts to compute a [`ConvexHull2d`] for the given set of points
    /// using the default [`HullConfig`].
    ///
    /// # Errors
    ///
    /// Returns a [`HullError`] if the points have fewer than two distinct
    /// positions, are all collinear, or contain non-finite coordinates.
    #[inline]
    pub fn try_from_points(points: &[DVec2]) -> Result<Self, HullError> {
        Self::try_from_points_with(points, HullConfig::default(), &mut ())
    }

    /// Attempts to compute a [`ConvexHull2d`] with the given `config`,
    /// reporting the boundary to `observer` after every refinement round.
    ///
    /// Inputs with coordinates beyond `2^500` are refined in coordinates scaled
    /// by a power of two, and `observer` sees those scaled coordinates. The
    /// resulting hull always consists of input points.
    ///
    /// # Errors
    ///
    /// Returns a [`HullError`] if hull construction fails.
    pub fn try_from_points_with(
        points: &[DVec2],
        config: HullConfig,
        observer: &mut impl RoundObserver,
    ) -> Result<Self, HullError> {
        let prepared = PreparedPoints::new(points)?;
        let triangle = ExtremalTriangle::from_points(prepared.points())?;

        let mut refiner = HullRefiner::new(
            &triangle,
            prepared.points().iter().copied(),
            config.distribution,
        )?;
        refiner.run(config.max_rounds, observer)?;

        let rounds = refiner.round();
        let complete = refiner.is_complete();
        let vertices: Vec<DVec2> = refiner.into_edges().iter().map(|edge| edge.a()).collect();
        let mut points: Vec<DVec2> = remove_straight_angles(vertices)
            .into_iter()
            .map(|vertex| prepared.restore(vertex))
            .collect();

        // Start from the lexicographically smallest vertex for a stable output.
        let first = points
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| lexicographic_cmp(a, b))
            .map_or(0, |(i, _)| i);
        points.rotate_left(first);

        Ok(Self {
            points,
            rounds,
            complete,
        })
    }

    /// Returns the points of the convex hull in counterclockwise order.
    ///
    /// This consumes the convex hull. If you want a reference to the points,
    /// consider using [`points_ref`](Self::points_ref) instead.
    #[inline]
    pub fn points(self) -> Vec<DVec2> {
        self.points
    }

    /// Returns a reference to the points of the convex hull in counterclockwise order.
    #[inline]
    pub fn points_ref(&self) -> &[DVec2] {
        &self.points
    }

    /// Returns an iterator over the boundary edges `(a, b)` in counterclockwise order.
    ///
    /// The `b` of each edge is the `a` of the next, and the last edge ends at the
    /// first point.
    pub fn edges(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Returns the number of refinement rounds performed after the initial triangle.
    #[inline]
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Returns `false` if refinement was stopped by
    /// [`HullConfig::max_rounds`] before every edge was complete.
    ///
    /// An incomplete hull is the convex hull of a subset of the true hull vertices.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Computes the area enclosed by the hull.
    pub fn area(&self) -> f64 {
        0.5 * self.edges().map(|(a, b)| a.perp_dot(b)).sum::<f64>()
    }

    /// Returns `true` if `point` is inside or on the boundary of the hull.
    pub fn contains(&self, point: DVec2) -> bool {
        self.edges().all(|(a, b)| orient2d(a, b, point) >= 0.0)
    }

    /// Returns `true` if every vertex makes a strict counterclockwise turn.
    pub fn is_convex(&self) -> bool {
        let n = self.points.len();
        (0..n).all(|i| {
            let prev = self.points[(i + n - 1) % n];
            let next = self.points[(i + 1) % n];
            orient2d(prev, self.points[i], next) > 0.0
        })
    }

    /// Computes the hull vertex that is the farthest along the given `direction`.
    ///
    /// Among equally far vertices, the first one in counterclockwise order is returned.
    pub fn support_point(&self, direction: DVec2) -> DVec2 {
        let mut max_dot = f64::NEG_INFINITY;
        let mut max_index = 0;

        for (i, point) in self.points.iter().enumerate() {
            let dot = point.dot(direction);
            if dot > max_dot {
                max_dot = dot;
                max_index = i;
            }
        }

        self.points[max_index]
    }
}

/// Removes the vertices of a closed counterclockwise chain that lie on the line
/// through their neighbors.
///
/// Chains that would be left with fewer than three vertices are returned unchanged.
fn remove_straight_angles(vertices: Vec<DVec2>) -> Vec<DVec2> {
    let n = vertices.len();
    let kept: Vec<DVec2> = (0..n)
        .filter(|&i| {
            let prev = vertices[(i + n - 1) % n];
            let next = vertices[(i + 1) % n];
            orient2d(prev, vertices[i], next) != 0.0
        })
        .map(|i| vertices[i])
        .collect();

    if kept.len() < 3 {
        return vertices;
    }
    kept
}

/// Compares two 2D points first by `x`, then by `y`.
#[inline]
fn lexicographic_cmp(a: &DVec2, b: &DVec2) -> core::cmp::Ordering {
    a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
}
