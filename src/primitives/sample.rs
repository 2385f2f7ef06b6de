//! Historical samples and query points.
//!
//! ## Purpose
//!
//! This module defines the observation record consumed by the estimator
//! ([`HistoricalSample`]) and the fixed context values ([`Context`]) used to
//! build query points for candidate configurations.
//!
//! ## Key concepts
//!
//! * **Feature vector**: `[m, n, grid_size, block_size]`, always
//!   [`FEATURE_DIM`] long.
//! * **Price**: the observed, non-negative cost of one configuration.
//!
//! ## Invariants
//!
//! * Samples are immutable once constructed.
//! * Feature order is fixed: context values first, tunables last.

use num_traits::Float;

/// Number of features per sample: two context values and two tunables.
pub const FEATURE_DIM: usize = 4;

/// Index of the grid size within a feature vector.
pub const GRID_SIZE_INDEX: usize = 2;

/// Index of the block size within a feature vector.
pub const BLOCK_SIZE_INDEX: usize = 3;

/// One past observation of a configuration and its price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoricalSample<T> {
    /// Feature vector `[m, n, grid_size, block_size]`.
    pub features: [T; FEATURE_DIM],

    /// Observed price.
    pub price: T,
}

impl<T: Float> HistoricalSample<T> {
    /// Create a sample from its four features and observed price.
    pub fn new(m: T, n: T, grid_size: T, block_size: T, price: T) -> Self {
        Self::from_features([m, n, grid_size, block_size], price)
    }

    /// Create a sample from a ready-made feature vector.
    pub fn from_features(features: [T; FEATURE_DIM], price: T) -> Self {
        Self { features, price }
    }

    /// First context feature.
    #[inline]
    pub fn m(&self) -> T {
        self.features[0]
    }

    /// Second context feature.
    #[inline]
    pub fn n(&self) -> T {
        self.features[1]
    }

    /// Recorded grid size.
    #[inline]
    pub fn grid_size(&self) -> T {
        self.features[GRID_SIZE_INDEX]
    }

    /// Recorded block size.
    #[inline]
    pub fn block_size(&self) -> T {
        self.features[BLOCK_SIZE_INDEX]
    }
}

/// Fixed context values shared by every candidate of one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Context<T> {
    /// First context feature.
    pub m: T,

    /// Second context feature.
    pub n: T,
}

impl<T: Float> Context<T> {
    /// Create a context from its two values.
    pub fn new(m: T, n: T) -> Self {
        Self { m, n }
    }

    /// Build the untransformed feature vector for a candidate configuration.
    #[inline]
    pub fn query_point(&self, grid_size: usize, block_size: usize) -> [T; FEATURE_DIM] {
        [self.m, self.n, cast(grid_size), cast(block_size)]
    }
}

impl<T: Float> Default for Context<T> {
    fn default() -> Self {
        let two = T::one() + T::one();
        Self { m: two, n: two }
    }
}

/// Convert an integer tunable to the float type.
#[inline]
pub(crate) fn cast<T: Float>(value: usize) -> T {
    T::from(value).unwrap_or_else(T::nan)
}
