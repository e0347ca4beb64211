//! The round-based edge-splitting loop.
//!
//! Every round replaces each active edge that still has conflict points with two
//! daughter edges meeting at the farthest of those points. Daughters take the
//! place of their parent in the edge list, so the list always describes the
//! current boundary in counterclockwise order.

use glam::DVec2;

use crate::{
    cull::cull,
    distribute::{distribute, Distribution},
    edge::Edge,
    simplex::ExtremalTriangle,
    HullError,
};

/// A view of the edge list after a refinement round.
#[derive(Clone, Copy, Debug)]
pub struct RoundSnapshot<'a> {
    /// The number of refinement rounds performed so far.
    /// Round 0 is the seeded extremal triangle.
    pub round: usize,
    /// The current boundary, in counterclockwise order.
    pub edges: &'a [Edge],
}

impl<'a> RoundSnapshot<'a> {
    /// Returns an iterator over the edges that still have conflict points.
    pub fn active_edges(&self) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(|edge| !edge.is_complete())
    }

    /// Returns an iterator over the final edges.
    pub fn complete_edges(&self) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(|edge| edge.is_complete())
    }

    /// Returns the total number of points in all conflict lists.
    pub fn pending_points(&self) -> usize {
        self.edges.iter().map(|edge| edge.conflicts().len()).sum()
    }
}

/// Receives a [`RoundSnapshot`] whenever a refinement round finishes.
///
/// Any `FnMut(&RoundSnapshot)` closure is an observer. Use `()` to observe nothing.
pub trait RoundObserver {
    /// Called after the initial distribution and after every refinement round.
    fn round_completed(&mut self, snapshot: &RoundSnapshot<'_>);
}

impl<F> RoundObserver for F
where
    F: FnMut(&RoundSnapshot<'_>),
{
    #[inline]
    fn round_completed(&mut self, snapshot: &RoundSnapshot<'_>) {
        self(snapshot)
    }
}

impl RoundObserver for () {
    #[inline]
    fn round_completed(&mut self, _snapshot: &RoundSnapshot<'_>) {}
}

/// Refines an extremal triangle into the convex hull of a point set.
#[derive(Clone, Debug)]
pub struct HullRefiner {
    edges: Vec<Edge>,
    rule: Distribution,
    round: usize,
}

impl HullRefiner {
    /// Seeds the refiner with the sides of `triangle`.
    ///
    /// Points inside the triangle are culled, and the rest are distributed to
    /// the three sides according to `rule`. Sides without conflict points are
    /// complete immediately.
    ///
    /// # Errors
    ///
    /// Returns a [`HullError`] if the triangle is degenerate.
    pub fn new(
        triangle: &ExtremalTriangle,
        points: impl IntoIterator<Item = DVec2>,
        rule: Distribution,
    ) -> Result<Self, HullError> {
        let exterior = cull(points, triangle.corners)?;

        let mut edges: Vec<Edge> = triangle
            .sides()
            .into_iter()
            .map(|(a, b)| Edge::new(a, b))
            .collect();
        distribute(exterior.iter().copied(), &mut edges, rule)?;
        for edge in &mut edges {
            edge.settle();
        }

        tracing::debug!(
            exterior = exterior.len(),
            active = edges.iter().filter(|edge| !edge.is_complete()).count(),
            "seeded hull refinement"
        );

        Ok(Self {
            edges,
            rule,
            round: 0,
        })
    }

    /// Returns the current boundary, in counterclockwise order.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of refinement rounds performed so far.
    #[inline]
    pub fn round(&self) -> usize {
        self.round
    }

    /// Returns `true` if every edge is complete.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.edges.iter().all(Edge::is_complete)
    }

    /// Returns a snapshot of the current state.
    #[inline]
    pub fn snapshot(&self) -> RoundSnapshot<'_> {
        RoundSnapshot {
            round: self.round,
            edges: &self.edges,
        }
    }

    /// Consumes the refiner, returning the current boundary.
    #[inline]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }

    /// Performs a single refinement round.
    ///
    /// Returns `false` without doing anything if every edge is already complete.
    ///
    /// # Errors
    ///
    /// Returns a [`HullError`] if a split produces a degenerate triangle or edge.
    /// The edges are left as they were before the failed round.
    pub fn step(&mut self) -> Result<bool, HullError> {
        if self.is_complete() {
            return Ok(false);
        }

        let mut next = Vec::with_capacity(self.edges.len() * 2);

        for edge in &self.edges {
            let Some(apex) = edge.apex() else {
                let mut edge = edge.clone();
                edge.settle();
                next.push(edge);
                continue;
            };

            // The apex is a corner of the split triangle, so the cull drops it.
            let (a, b) = edge.segment();
            let survivors = cull(edge.conflicts().points(), [a, b, apex])?;

            let mut daughters = [Edge::new(a, apex), Edge::new(apex, b)];
            distribute(survivors.iter().copied(), &mut daughters, self.rule)?;
            for daughter in &mut daughters {
                daughter.settle();
            }

            tracing::trace!(
                ?apex,
                survivors = survivors.len(),
                left = daughters[0].conflicts().len(),
                right = daughters[1].conflicts().len(),
                "split edge"
            );

            next.extend(daughters);
        }

        self.edges = next;
        self.round += 1;

        tracing::debug!(
            round = self.round,
            edges = self.edges.len(),
            active = self.edges.iter().filter(|edge| !edge.is_complete()).count(),
            pending = self.snapshot().pending_points(),
            "finished refinement round"
        );

        Ok(true)
    }

    /// Runs refinement rounds until every edge is complete or `max_rounds`
    /// rounds have been performed.
    ///
    /// `observer` sees the seeded state before the first round, then every round.
    ///
    /// # Errors
    ///
    /// Returns a [`HullError`] if a round fails.
    pub fn run(
        &mut self,
        max_rounds: Option<usize>,
        observer: &mut impl RoundObserver,
    ) -> Result<(), HullError> {
        if self.round == 0 {
            observer.round_completed(&self.snapshot());
        }

        while !self.is_complete() {
            if max_rounds.is_some_and(|max| self.round >= max) {
                tracing::warn!(
                    rounds = self.round,
                    pending = self.snapshot().pending_points(),
                    "round limit reached before the hull was complete"
                );
                break;
            }

            self.step()?;
            observer.round_completed(&self.snapshot());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use glam::dvec2;

    use super::*;
    use crate::edge::EdgeState;

    fn triangle() -> ExtremalTriangle {
        ExtremalTriangle {
            corners: [dvec2(0.0, 0.0), dvec2(8.0, 0.0), dvec2(4.0, 8.0)],
        }
    }

    #[test]
    fn seeding_culls_and_settles() {
        let points = vec![dvec2(4.0, 2.0), dvec2(4.0, -2.0), dvec2(0.0, 0.0)];
        let refiner = HullRefiner::new(&triangle(), points, Distribution::Outward).unwrap();

        let states: Vec<_> = refiner.edges().iter().map(Edge::state).collect();
        assert_eq!(
            states,
            vec![EdgeState::Active, EdgeState::Complete, EdgeState::Complete]
        );
        assert_eq!(refiner.snapshot().pending_points(), 1);
        assert!(!refiner.is_complete());
    }

    #[test]
    fn step_replaces_parent_with_daughters() {
        let points = vec![dvec2(4.0, -2.0), dvec2(1.0, -1.0), dvec2(4.0, -1.0)];
        let mut refiner = HullRefiner::new(&triangle(), points, Distribution::Outward).unwrap();

        assert!(refiner.step().unwrap());
        assert_eq!(refiner.round(), 1);

        let segments: Vec<_> = refiner.edges().iter().map(Edge::segment).collect();
        assert_eq!(
            segments,
            vec![
                (dvec2(0.0, 0.0), dvec2(4.0, -2.0)),
                (dvec2(4.0, -2.0), dvec2(8.0, 0.0)),
                (dvec2(8.0, 0.0), dvec2(4.0, 8.0)),
                (dvec2(4.0, 8.0), dvec2(0.0, 0.0)),
            ]
        );
        // (4, -1) is inside the split triangle, (1, -1) is outside the left daughter.
        assert_eq!(
            refiner.edges()[0].conflicts().points().collect::<Vec<_>>(),
            vec![dvec2(1.0, -1.0)]
        );
        assert!(refiner.edges()[1].is_complete());

        assert!(refiner.step().unwrap());
        assert!(refiner.is_complete());
        assert!(!refiner.step().unwrap());
        assert_eq!(refiner.round(), 2);
        assert_eq!(refiner.edges().len(), 5);
    }

    #[test]
    fn run_reports_every_round() {
        let points = vec![dvec2(4.0, -2.0), dvec2(1.0, -1.0), dvec2(-1.0, 4.0)];
        let mut refiner = HullRefiner::new(&triangle(), points, Distribution::Outward).unwrap();

        let mut rounds = Vec::new();
        refiner
            .run(None, &mut |snapshot: &RoundSnapshot<'_>| {
                rounds.push((snapshot.round, snapshot.active_edges().count()))
            })
            .unwrap();

        assert_eq!(rounds, vec![(0, 2), (1, 1), (2, 0)]);
        assert!(refiner.is_complete());
    }

    #[test]
    fn run_stops_at_round_limit() {
        let points = vec![dvec2(4.0, -2.0), dvec2(1.0, -1.0)];
        let mut refiner = HullRefiner::new(&triangle(), points, Distribution::Outward).unwrap();
        refiner.run(Some(1), &mut ()).unwrap();
        assert_eq!(refiner.round(), 1);
        assert!(!refiner.is_complete());
    }

    #[test]
    fn chain_stays_closed() {
        let points = vec![
            dvec2(4.0, -2.0),
            dvec2(1.0, -1.0),
            dvec2(7.0, -1.5),
            dvec2(9.0, 3.0),
            dvec2(-1.0, 4.0),
            dvec2(3.0, 9.0),
        ];
        let mut refiner = HullRefiner::new(&triangle(), points, Distribution::Outward).unwrap();
        refiner.run(None, &mut ()).unwrap();

        let edges = refiner.into_edges();
        for (i, edge) in edges.iter().enumerate() {
            assert!(edge.is_complete());
            assert_eq!(edge.b(), edges[(i + 1) % edges.len()].a());
        }
    }

    #[test]
    fn failed_step_keeps_edges() {
        // A conflict point on the extension of its edge gives a flat split triangle.
        let mut edge = Edge::new(dvec2(0.0, 0.0), dvec2(1.0, 0.0));
        edge.conflicts_mut().insert(1.0, dvec2(2.0, 0.0));
        let mut refiner = HullRefiner {
            edges: vec![edge.clone()],
            rule: Distribution::Outward,
            round: 0,
        };

        assert_eq!(refiner.step(), Err(HullError::SingularTriangle));
        assert_eq!(refiner.round(), 0);
        assert!(!refiner.is_complete());
        assert_eq!(refiner.into_edges(), vec![edge]);
    }

    #[test]
    fn split_uses_end_of_equally_far_points() {
        let points = vec![dvec2(4.0, -2.0), dvec2(6.0, -2.0), dvec2(2.0, -2.0)];
        let mut refiner = HullRefiner::new(&triangle(), points, Distribution::Outward).unwrap();
        refiner.run(None, &mut ()).unwrap();

        let vertices: Vec<_> = refiner.edges().iter().map(Edge::a).collect();
        assert_eq!(
            vertices,
            vec![
                dvec2(0.0, 0.0),
                dvec2(2.0, -2.0),
                dvec2(6.0, -2.0),
                dvec2(8.0, 0.0),
                dvec2(4.0, 8.0),
            ]
        );
    }
}
