//! Coordinate transforms applied before any distance is measured.
//!
//! Both the history and every query point go through the same transform.
//! Prices are never transformed.

use num_traits::Float;

use crate::primitives::sample::FEATURE_DIM;

/// Transform applied to every feature coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeatureTransform {
    /// Use coordinates as observed (default).
    #[default]
    Raw,

    /// Natural logarithm of every coordinate. Inputs must be positive.
    Log,
}

impl FeatureTransform {
    /// Transform a single coordinate.
    #[inline]
    pub fn apply<T: Float>(&self, value: T) -> T {
        match self {
            FeatureTransform::Raw => value,
            FeatureTransform::Log => value.ln(),
        }
    }

    /// Transform a whole feature vector.
    #[inline]
    pub fn apply_point<T: Float>(&self, point: [T; FEATURE_DIM]) -> [T; FEATURE_DIM] {
        match self {
            FeatureTransform::Raw => point,
            FeatureTransform::Log => point.map(|v| v.ln()),
        }
    }

    /// Whether inputs must be strictly positive for this transform.
    #[inline]
    pub const fn requires_positive(&self) -> bool {
        matches!(self, FeatureTransform::Log)
    }
}
