use crate::Distribution;

/// Options for [`ConvexHull2d`](crate::ConvexHull2d) construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HullConfig {
    /// How points are assigned to edge conflict lists.
    pub distribution: Distribution,
    /// The maximum number of refinement rounds to perform.
    /// If `None`, refinement runs until the hull is complete.
    pub max_rounds: Option<usize>,
}

impl HullConfig {
    /// Sets the rule used to assign points to edges.
    #[inline]
    pub fn with_distribution(mut self, distribution: Distribution) -> Self {
        self.distribution = distribution;
        self
    }

    /// Limits the number of refinement rounds.
    #[inline]
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }
}
