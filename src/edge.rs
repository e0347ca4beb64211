use glam::DVec2;

/// The refinement state of an [`Edge`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeState {
    /// The edge may still have points outside of it.
    #[default]
    Active,
    /// The edge is final and belongs to the hull boundary.
    Complete,
}

/// The points currently believed to lie beyond an [`Edge`], each with the
/// distance it was assigned with.
///
/// Entries are kept in insertion order. Equal distances never replace each other.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConflictList {
    entries: Vec<(f64, DVec2)>,
}

impl ConflictList {
    /// Creates an empty conflict list.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a point with the given distance key.
    #[inline]
    pub fn insert(&mut self, distance: f64, point: DVec2) {
        self.entries.push((distance, point));
    }

    /// Returns the number of points in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the list has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the index of the entry with the largest distance.
    ///
    /// Among equal distances, the entry that reaches farthest along `along` wins,
    /// and the earliest entry wins after that.
    fn farthest_index(&self, along: DVec2) -> Option<usize> {
        let mut best: Option<(usize, f64, f64)> = None;
        for (i, &(distance, point)) in self.entries.iter().enumerate() {
            let offset = point.dot(along);
            match best {
                Some((_, best_distance, best_offset))
                    if distance < best_distance
                        || (distance == best_distance && offset <= best_offset) => {}
                _ => best = Some((i, distance, offset)),
            }
        }
        best.map(|(i, _, _)| i)
    }

    /// Returns the entry with the largest distance.
    /// The earliest entry wins among equal distances.
    #[inline]
    pub fn farthest(&self) -> Option<(f64, DVec2)> {
        self.farthest_index(DVec2::ZERO).map(|i| self.entries[i])
    }

    /// Returns the entry with the largest distance. Among equal distances, the
    /// point with the largest projection onto `along` is returned.
    #[inline]
    pub fn farthest_along(&self, along: DVec2) -> Option<(f64, DVec2)> {
        self.farthest_index(along).map(|i| self.entries[i])
    }

    /// Removes and returns the entry with the largest distance.
    /// The earliest entry wins among equal distances.
    ///
    /// The order of the remaining entries is preserved.
    #[inline]
    pub fn take_farthest(&mut self) -> Option<(f64, DVec2)> {
        let index = self.farthest_index(DVec2::ZERO)?;
        Some(self.entries.remove(index))
    }

    /// Returns an iterator over the `(distance, point)` entries.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &(f64, DVec2)> {
        self.entries.iter()
    }

    /// Returns an iterator over the points, without their distances.
    #[inline]
    pub fn points(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.entries.iter().map(|&(_, point)| point)
    }

    /// Consumes the list, returning its points in insertion order.
    #[inline]
    pub fn into_points(self) -> Vec<DVec2> {
        self.entries.into_iter().map(|(_, point)| point).collect()
    }
}

/// One side of the current hull polygon.
///
/// Edges are directed so that the hull interior is on the left, which makes
/// [`b`](Self::b) of one edge the [`a`](Self::a) of the next.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    a: DVec2,
    b: DVec2,
    conflicts: ConflictList,
    state: EdgeState,
}

impl Edge {
    /// Creates an active edge from `a` to `b` with an empty conflict list.
    #[inline]
    pub fn new(a: DVec2, b: DVec2) -> Self {
        Self {
            a,
            b,
            conflicts: ConflictList::new(),
            state: EdgeState::Active,
        }
    }

    /// Returns the start vertex of the edge.
    #[inline]
    pub fn a(&self) -> DVec2 {
        self.a
    }

    /// Returns the end vertex of the edge.
    #[inline]
    pub fn b(&self) -> DVec2 {
        self.b
    }

    /// Returns the direction vector `b - a`.
    #[inline]
    pub fn direction(&self) -> DVec2 {
        self.b - self.a
    }

    /// Returns the edge as an `(a, b)` pair.
    #[inline]
    pub fn segment(&self) -> (DVec2, DVec2) {
        (self.a, self.b)
    }

    /// Returns the refinement state of the edge.
    #[inline]
    pub fn state(&self) -> EdgeState {
        self.state
    }

    /// Returns `true` if the edge is final.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.state == EdgeState::Complete
    }

    /// Returns a reference to the conflict list of the edge.
    #[inline]
    pub fn conflicts(&self) -> &ConflictList {
        &self.conflicts
    }

    #[inline]
    pub(crate) fn conflicts_mut(&mut self) -> &mut ConflictList {
        &mut self.conflicts
    }

    /// Returns the conflict point that this edge is split at: the farthest one,
    /// or among equally far points the one closest to [`b`](Self::b).
    ///
    /// Picking the end of a run of equally far points keeps points in the middle
    /// of a boundary segment from becoming hull vertices.
    #[inline]
    pub fn apex(&self) -> Option<DVec2> {
        self.conflicts
            .farthest_along(self.direction())
            .map(|(_, point)| point)
    }

    /// Marks the edge complete if its conflict list is empty.
    /// Returns `true` if the edge is complete afterwards.
    #[inline]
    pub(crate) fn settle(&mut self) -> bool {
        if self.conflicts.is_empty() {
            self.state = EdgeState::Complete;
        }
        self.is_complete()
    }
}
