//! Input validation and deterministic de-duplication of point sets.

use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};
use glam::DVec2;
use hashbrown::{HashMap, HashSet};

use crate::HullError;

/// Inputs whose largest coordinate needs a binary exponent above this are scaled
/// down to it, so that squared lengths and orientation products stay finite.
const SCALED_EXPONENT: i32 = 500;

/// Seed for [`FixedHasher`]. Any fixed value works; it only has to stay the same
/// between runs so that hashing is reproducible.
const FIXED_HASHER: FixedState =
    FixedState::with_seed(0b1001010111101110000001001100010000000011001001101011001001111000);

/// Deterministic hasher based upon a random but fixed state.
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHasher;

impl BuildHasher for FixedHasher {
    type Hasher = FoldHasher<'static>;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASHER.build_hasher()
    }
}

/// The exact bit pattern of a point, with `-0.0` folded into `0.0`.
#[inline]
fn point_key(point: DVec2) -> (u64, u64) {
    // Adding zero turns `-0.0` into `0.0` and leaves every other value unchanged.
    ((point.x + 0.0).to_bits(), (point.y + 0.0).to_bits())
}

/// Returns the distinct points of `points` in order of first occurrence.
///
/// # Errors
///
/// Returns [`HullError::NonFinitePoint`] for the first point with a NaN or
/// infinite coordinate.
pub fn distinct_points(points: &[DVec2]) -> Result<Vec<DVec2>, HullError> {
    let mut seen = HashSet::with_capacity_and_hasher(points.len(), FixedHasher);
    let mut distinct = Vec::with_capacity(points.len());

    for (index, &point) in points.iter().enumerate() {
        if !point.is_finite() {
            return Err(HullError::NonFinitePoint { index });
        }
        if seen.insert(point_key(point)) {
            distinct.push(point);
        }
    }

    if distinct.len() < points.len() {
        tracing::debug!(
            removed = points.len() - distinct.len(),
            "removed duplicate input points"
        );
    }

    Ok(distinct)
}

/// The distinct input points, ready for hull construction.
///
/// Points with coordinates beyond `2^500` are multiplied by a power of two.
/// Scaling by a power of two is exact unless a coordinate underflows, in which
/// case points that collapse together are de-duplicated again.
#[derive(Clone, Debug)]
pub(crate) struct PreparedPoints {
    points: Vec<DVec2>,
    /// Maps the key of every scaled point to its first original point.
    originals: Option<HashMap<(u64, u64), DVec2, FixedHasher>>,
}

impl PreparedPoints {
    /// Validates and de-duplicates `points`, rescaling them if they are too large.
    ///
    /// # Errors
    ///
    /// Returns [`HullError::NonFinitePoint`] for the first point with a NaN or
    /// infinite coordinate.
    pub(crate) fn new(points: &[DVec2]) -> Result<Self, HullError> {
        let distinct = distinct_points(points)?;

        let max = distinct
            .iter()
            .map(|point| point.abs().max_element())
            .fold(0.0, f64::max);
        // `log2(0)` is `-inf`, which saturates to `i32::MIN`.
        let exponent = max.log2().ceil() as i32;
        if exponent <= SCALED_EXPONENT {
            return Ok(Self {
                points: distinct,
                originals: None,
            });
        }

        let scale = 2.0_f64.powi(SCALED_EXPONENT - exponent);
        let distinct_len = distinct.len();
        let mut originals = HashMap::with_capacity_and_hasher(distinct.len(), FixedHasher);
        let mut scaled = Vec::with_capacity(distinct.len());

        for point in distinct {
            let scaled_point = point * scale;
            let key = point_key(scaled_point);
            if !originals.contains_key(&key) {
                originals.insert(key, point);
                scaled.push(scaled_point);
            }
        }

        tracing::debug!(
            exponent = SCALED_EXPONENT - exponent,
            collapsed = distinct_len - scaled.len(),
            "rescaled input points by a power of two"
        );

        Ok(Self {
            points: scaled,
            originals: Some(originals),
        })
    }

    /// Returns the points in the coordinates used for hull construction.
    #[inline]
    pub(crate) fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Maps a point produced from [`points`](Self::points) back to the input point
    /// it came from.
    #[inline]
    pub(crate) fn restore(&self, point: DVec2) -> DVec2 {
        self.originals
            .as_ref()
            .and_then(|originals| originals.get(&point_key(point)).copied())
            .unwrap_or(point)
    }
}

#[cfg(test)]
mod tests {
    use glam::dvec2;

    use super::*;

    #[test]
    fn keeps_first_occurrence_order() {
        let points = vec![
            dvec2(1.0, 1.0),
            dvec2(0.0, 0.0),
            dvec2(1.0, 1.0),
            dvec2(2.0, 0.0),
            dvec2(0.0, 0.0),
        ];
        let distinct = distinct_points(&points).unwrap();
        assert_eq!(
            distinct,
            vec![dvec2(1.0, 1.0), dvec2(0.0, 0.0), dvec2(2.0, 0.0)]
        );
    }

    #[test]
    fn negative_zero_is_zero() {
        let points = vec![dvec2(0.0, 0.0), dvec2(-0.0, 0.0), dvec2(0.0, -0.0)];
        assert_eq!(distinct_points(&points).unwrap().len(), 1);
    }

    #[test]
    fn rejects_non_finite() {
        let points = vec![dvec2(0.0, 0.0), dvec2(1.0, f64::NAN)];
        assert_eq!(
            distinct_points(&points),
            Err(HullError::NonFinitePoint { index: 1 })
        );
        let points = vec![dvec2(f64::INFINITY, 0.0)];
        assert_eq!(
            distinct_points(&points),
            Err(HullError::NonFinitePoint { index: 0 })
        );
    }

    #[test]
    fn hashing_is_deterministic() {
        let a = FixedHasher.hash_one(point_key(dvec2(3.0, -7.5)));
        let b = FixedHasher.hash_one(point_key(dvec2(3.0, -7.5)));
        assert_eq!(a, b);
    }

    #[test]
    fn small_points_are_not_scaled() {
        let points = vec![dvec2(1e150, 0.0), dvec2(-3.0, 2.0)];
        let prepared = PreparedPoints::new(&points).unwrap();
        assert_eq!(prepared.points(), points.as_slice());
        assert_eq!(prepared.restore(dvec2(-3.0, 2.0)), dvec2(-3.0, 2.0));
    }

    #[test]
    fn huge_points_are_scaled_exactly() {
        let points = vec![dvec2(-1e308, 0.0), dvec2(1e308, 0.0), dvec2(0.0, 1e308)];
        let prepared = PreparedPoints::new(&points).unwrap();

        // 1e308 needs 1024 bits of exponent, so everything is scaled by 2^-524.
        let scale = 2.0_f64.powi(-524);
        for (scaled, original) in prepared.points().iter().zip(&points) {
            assert_eq!(*scaled, *original * scale);
            assert!(scaled.length().is_finite());
            assert_eq!(prepared.restore(*scaled), *original);
        }
    }

    #[test]
    fn underflowing_points_collapse_to_first() {
        let points = vec![
            dvec2(1e308, 0.0),
            dvec2(1e-320, 0.0),
            dvec2(0.0, 0.0),
            dvec2(0.0, 1e308),
        ];
        let prepared = PreparedPoints::new(&points).unwrap();
        assert_eq!(prepared.points().len(), 3);
        assert_eq!(prepared.restore(prepared.points()[1]), dvec2(1e-320, 0.0));
    }
}
