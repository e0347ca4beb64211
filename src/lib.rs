//! # Quickhull2d
//!
//! An incremental, quickhull-style algorithm for computing 2D convex hulls.
//!
//! Construction starts from the extremal triangle of the point set: the two points
//! farthest apart and the point farthest from the line through them. Points inside
//! the triangle are culled, and the rest are distributed to the conflict lists of
//! its three edges. Every refinement round then splits each edge that still has
//! conflict points at the farthest of them, until no edge has points outside of it.
//!
//! The stages are exposed individually, so intermediate states can be inspected
//! with a [`RoundObserver`] or driven step by step through a [`HullRefiner`].
//!
//! ## References
//!
//! - C. Bradford Barber et al. 1996. [The Quickhull Algorithm for Convex Hulls](https://www.cise.ufl.edu/~ungor/courses/fall06/papers/QuickHull.pdf) (the original paper)
//! - Dirk Gregorius. GDC 2014. [Physics for Game Programmers: Implementing Quickhull](https://archive.org/details/GDC2014Gregorius)

#![warn(missing_docs)]

mod config;
mod cull;
mod dim2;
mod distribute;
mod edge;
mod error;
pub mod geometry;
mod point_set;
mod refine;
mod simplex;

pub use config::HullConfig;
pub use cull::cull;
pub use dim2::ConvexHull2d;
pub use distribute::{distribute, Distribution};
pub use edge::{ConflictList, Edge, EdgeState};
pub use error::HullError;
pub use point_set::distinct_points;
pub use refine::{HullRefiner, RoundObserver, RoundSnapshot};
pub use simplex::{find_apex, find_diameter_pair, ExtremalTriangle};

/// A 2D point or vector.
pub type Point2 = glam::DVec2;
