//! Scale-weighted distance and similarity between feature vectors.
//!
//! ## Purpose
//!
//! This module provides the two metrics the predictor is built on: a
//! normalized Euclidean distance ([`delta`]) used to rank neighbors, and a
//! normalized inner product ([`scalar`]) used by the local correction.
//!
//! ## Design notes
//!
//! * **Scale as divisor**: Each squared term is divided by the dimension's
//!   scale (typically its variance over the history).
//! * **Positivity guard**: A dimension whose scale is not strictly positive
//!   contributes nothing, in every loop.
//! * **Ragged inputs**: Vectors of different lengths are accepted. `delta`
//!   sums the matched prefix, then the unmatched tail of the longer vector;
//!   `scalar` only sums the matched prefix. Nothing beyond `scale.len()` is
//!   ever read.
//!
//! ## Invariants
//!
//! * `delta(x, x, s) == 0` for every `x` and `s`.
//! * `scalar(x, y, s) == scalar(y, x, s)`.
//! * Results are bitwise reproducible for identical inputs.
//!
//! ## Non-goals
//!
//! * This module does not estimate the scale (see `math::scaling`).

use num_traits::Float;

/// Squared scale-weighted distance between `x` and `y`.
///
/// ```text
/// Σ (x_i - y_i)² / s_i          over the matched prefix
/// + Σ x_i² / s_i  (or y_i² / s_i) over the longer vector's tail
/// ```
///
/// Every term requires `s_i > 0`.
#[inline]
pub fn delta_squared<T: Float>(x: &[T], y: &[T], scale: &[T]) -> T {
    let matched = x.len().min(y.len()).min(scale.len());

    let head = x
        .iter()
        .zip(y.iter())
        .zip(scale.iter())
        .filter(|&(_, &s)| s > T::zero())
        .map(|((&xi, &yi), &s)| {
            let diff = xi - yi;
            diff * diff / s
        })
        .fold(T::zero(), |acc, v| acc + v);

    let longer = if x.len() >= y.len() { x } else { y };
    let tail = longer
        .iter()
        .zip(scale.iter())
        .skip(matched)
        .filter(|&(_, &s)| s > T::zero())
        .map(|(&v, &s)| v * v / s)
        .fold(T::zero(), |acc, v| acc + v);

    head + tail
}

/// Scale-weighted Euclidean distance: the square root of [`delta_squared`].
#[inline]
pub fn delta<T: Float>(x: &[T], y: &[T], scale: &[T]) -> T {
    delta_squared(x, y, scale).sqrt()
}

/// Scale-weighted inner product `Σ x_i · y_i / s_i` over the matched prefix.
#[inline]
pub fn scalar<T: Float>(x: &[T], y: &[T], scale: &[T]) -> T {
    x.iter()
        .zip(y.iter())
        .zip(scale.iter())
        .filter(|&(_, &s)| s > T::zero())
        .map(|((&xi, &yi), &s)| xi * yi / s)
        .fold(T::zero(), |acc, v| acc + v)
}
