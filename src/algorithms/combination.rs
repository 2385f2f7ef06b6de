//! Neighbor price combination strategies.
//!
//! ## Purpose
//!
//! This module turns a ranked [`Neighborhood`] into a single price estimate.
//!
//! ## Key concepts
//!
//! * **Local correction**: Each neighbor's price is multiplied, for every
//!   other neighbor `j`, by the projection of the query's offset from `x_j`
//!   onto the axis `x_i - x_j`. With exact coordinates this is a multivariate
//!   Lagrange-style interpolation through the neighbors; the corrected
//!   contributions are summed, not averaged.
//! * **Inverse-distance weighting**: Weighted mean of neighbor prices with
//!   weight `1 / (1 + d)` (or `1 / (1 + d²)`).
//!
//! ## Invariants
//!
//! * An empty neighborhood always yields zero.
//! * A single neighbor always yields its own price.
//! * A projection whose denominator is not strictly positive (coincident
//!   neighbors, or all differing dimensions disabled by the scale) has the
//!   neutral ratio one.
//!
//! ## Non-goals
//!
//! * Prices are never log-transformed, whatever the coordinate transform.

use num_traits::Float;

use crate::algorithms::neighborhood::Neighborhood;
use crate::math::distance::scalar;
use crate::math::scaling::FeatureScale;
use crate::primitives::sample::{FEATURE_DIM, HistoricalSample};

/// Strategy used to combine neighbor prices into one estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CombinationStrategy {
    /// Sum of neighbor prices corrected by pairwise projection ratios (default).
    #[default]
    LocalCorrection,

    /// Weighted mean with weight `1 / (1 + d)`.
    InverseDistance,

    /// Weighted mean with weight `1 / (1 + d²)`, `d²` being the squared
    /// distance summed before the root.
    InverseSquaredDistance,
}

impl CombinationStrategy {
    /// Combine the prices of `neighborhood` into an estimate for `query`.
    ///
    /// `points` holds the transformed coordinates of `samples`, index for index.
    pub fn combine<T: Float>(
        &self,
        query: &[T; FEATURE_DIM],
        points: &[[T; FEATURE_DIM]],
        samples: &[HistoricalSample<T>],
        neighborhood: &Neighborhood<T>,
        scale: &FeatureScale<T>,
    ) -> T {
        if neighborhood.is_empty() {
            return T::zero();
        }

        match self {
            CombinationStrategy::LocalCorrection => {
                Self::local_correction(query, points, samples, neighborhood, scale)
            }
            CombinationStrategy::InverseDistance => {
                Self::inverse_distance(samples, &neighborhood.indices, &neighborhood.distances)
            }
            CombinationStrategy::InverseSquaredDistance => Self::inverse_distance(
                samples,
                &neighborhood.indices,
                &neighborhood.squared_distances,
            ),
        }
    }

    fn local_correction<T: Float>(
        query: &[T; FEATURE_DIM],
        points: &[[T; FEATURE_DIM]],
        samples: &[HistoricalSample<T>],
        neighborhood: &Neighborhood<T>,
        scale: &FeatureScale<T>,
    ) -> T {
        let mut total = T::zero();

        for &i in &neighborhood.indices {
            let mut corrected = samples[i].price;
            for &j in &neighborhood.indices {
                if i == j {
                    continue;
                }
                corrected = corrected * projection_ratio(query, &points[i], &points[j], scale);
            }
            total = total + corrected;
        }

        total
    }

    /// Weighted mean of prices with weight `1 / (1 + d)` per neighbor.
    fn inverse_distance<T: Float>(
        samples: &[HistoricalSample<T>],
        indices: &[usize],
        distances: &[T],
    ) -> T {
        let mut sum_weighted = T::zero();
        let mut sum_weights = T::zero();

        for (&idx, &dist) in indices.iter().zip(distances) {
            let w = T::one() / (T::one() + dist);
            sum_weighted = sum_weighted + samples[idx].price * w;
            sum_weights = sum_weights + w;
        }

        sum_weighted / sum_weights
    }
}

/// Projection of `query - x_j` onto the axis `x_i - x_j`, relative to that
/// axis' squared length.
///
/// Returns one when the axis has no positive scaled length.
#[inline]
pub fn projection_ratio<T: Float>(
    query: &[T; FEATURE_DIM],
    xi: &[T; FEATURE_DIM],
    xj: &[T; FEATURE_DIM],
    scale: &FeatureScale<T>,
) -> T {
    let mut offset = [T::zero(); FEATURE_DIM];
    let mut axis = [T::zero(); FEATURE_DIM];
    for d in 0..FEATURE_DIM {
        offset[d] = query[d] - xj[d];
        axis[d] = xi[d] - xj[d];
    }

    let denominator = scalar(&axis, &axis, scale.as_slice());
    if denominator.is_nan() || denominator <= T::zero() {
        return T::one();
    }

    scalar(&offset, &axis, scale.as_slice()) / denominator
}
