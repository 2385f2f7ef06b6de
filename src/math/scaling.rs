//! Per-dimension feature scale estimation.
//!
//! ## Purpose
//!
//! Context values and tunables live on very different ranges (a block size of
//! 1024 next to a grid size of 4). This module derives one scale per feature
//! dimension from the history so that distance comparisons are fair across
//! dimensions.
//!
//! ## Design notes
//!
//! * **Linear**: Every method is linear in the number of samples and runs
//!   once per fit, never per candidate.
//! * **Empty history**: All methods return the unit scale.
//!
//! ## Key concepts
//!
//! * **Variance**: Population variance `Σ (x - mean)² / n`, two passes. A
//!   feature that is constant across the history gets exactly scale 0 and is
//!   ignored by the metrics.
//! * **Unit**: No normalization.
//! * **MaxValue**: Per-dimension maximum, floored at zero.
//!
//! ## Invariants
//!
//! * The scale always has exactly [`FEATURE_DIM`] entries.

use num_traits::Float;

use crate::primitives::sample::{FEATURE_DIM, cast};

// ============================================================================
// Feature Scale
// ============================================================================

/// Per-dimension divisor used by the distance metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureScale<T> {
    values: [T; FEATURE_DIM],
}

impl<T: Float> FeatureScale<T> {
    /// Scale of one in every dimension (no normalization).
    pub fn unit() -> Self {
        Self {
            values: [T::one(); FEATURE_DIM],
        }
    }

    /// Wrap precomputed per-dimension values.
    pub fn from_values(values: [T; FEATURE_DIM]) -> Self {
        Self { values }
    }

    /// Scale values as a slice, in feature order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Number of dimensions that take part in distance computations.
    pub fn active_dimensions(&self) -> usize {
        self.values.iter().filter(|&&s| s > T::zero()).count()
    }
}

impl<T: Float> Default for FeatureScale<T> {
    fn default() -> Self {
        Self::unit()
    }
}

// ============================================================================
// Scaling Method
// ============================================================================

/// Method used to derive a [`FeatureScale`] from the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScalingMethod {
    /// Population variance of each dimension (default).
    #[default]
    Variance,

    /// No normalization: every dimension has scale one.
    Unit,

    /// Largest value of each dimension, floored at zero.
    MaxValue,
}

impl ScalingMethod {
    /// Compute the feature scale of a set of (already transformed) points.
    pub fn compute<T: Float>(&self, points: &[[T; FEATURE_DIM]]) -> FeatureScale<T> {
        if points.is_empty() {
            return FeatureScale::unit();
        }

        match self {
            ScalingMethod::Variance => Self::variance(points),
            ScalingMethod::Unit => FeatureScale::unit(),
            ScalingMethod::MaxValue => Self::max_value(points),
        }
    }

    /// Population variance per dimension, `Σ (x - mean)² / n`.
    ///
    /// Mean first, then squared deviations. A dimension whose values are all
    /// equal gets exactly zero, whatever rounding the mean carries.
    fn variance<T: Float>(points: &[[T; FEATURE_DIM]]) -> FeatureScale<T> {
        let n: T = cast(points.len());
        let first = points[0];

        let mut sum = [T::zero(); FEATURE_DIM];
        let mut constant = [true; FEATURE_DIM];
        for point in points {
            for d in 0..FEATURE_DIM {
                sum[d] = sum[d] + point[d];
                constant[d] = constant[d] && point[d] == first[d];
            }
        }
        let mean = sum.map(|s| s / n);

        let mut values = [T::zero(); FEATURE_DIM];
        for point in points {
            for d in 0..FEATURE_DIM {
                let diff = point[d] - mean[d];
                values[d] = values[d] + diff * diff;
            }
        }
        for d in 0..FEATURE_DIM {
            values[d] = if constant[d] {
                T::zero()
            } else {
                values[d] / n
            };
        }

        FeatureScale { values }
    }

    /// Largest observed value per dimension, starting from zero.
    fn max_value<T: Float>(points: &[[T; FEATURE_DIM]]) -> FeatureScale<T> {
        let mut values = [T::zero(); FEATURE_DIM];
        for point in points {
            for d in 0..FEATURE_DIM {
                values[d] = values[d].max(point[d]);
            }
        }
        FeatureScale { values }
    }
}
