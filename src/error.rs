use thiserror::Error;

/// An error returned during [`ConvexHull2d`](crate::ConvexHull2d) construction.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HullError {
    /// Fewer than two distinct points were given, so no hull diameter exists.
    #[error("Need at least 2 distinct points, got {distinct}.")]
    InsufficientPoints {
        /// The number of distinct input points.
        distinct: usize,
    },
    /// All input points lie on a single line, so no triangle with positive area exists.
    #[error("Input points are collinear.")]
    DegenerateSimplex,
    /// A line was given by a zero-length direction vector.
    #[error("Line direction has zero length.")]
    DegenerateLine,
    /// The barycentric matrix of a triangle is not invertible.
    #[error("Triangle is singular and cannot be used for culling.")]
    SingularTriangle,
    /// An input point has a NaN or infinite coordinate.
    #[error("Input point at index {index} is not finite.")]
    NonFinitePoint {
        /// The index of the offending point in the input slice.
        index: usize,
    },
}
