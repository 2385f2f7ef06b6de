//! Input validation for estimator configuration and history.
//!
//! ## Purpose
//!
//! This module checks every configuration value and every historical sample
//! before a prediction or search starts, so that no failure can surface in
//! the middle of a grid search.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not correct or filter invalid samples.
//! * An empty history is valid (predictions fall back to zero).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

use num_traits::Float;

use crate::math::transform::FeatureTransform;
use crate::primitives::errors::GridPriceError;
use crate::primitives::sample::{Context, HistoricalSample};

const FEATURE_NAMES: [&str; 4] = ["m", "n", "grid_size", "block_size"];

/// Validation utility for estimator configuration and history.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the neighbor count `p`.
    pub fn validate_neighbors(neighbors: usize) -> Result<(), GridPriceError> {
        if neighbors < 1 {
            return Err(GridPriceError::InvalidNeighborCount(neighbors));
        }
        Ok(())
    }

    /// Validate the upper bound of the grid size search range.
    pub fn validate_grid_max(grid_max: usize) -> Result<(), GridPriceError> {
        if grid_max < 1 {
            return Err(GridPriceError::InvalidGridBound(grid_max));
        }
        Ok(())
    }

    /// Validate the upper bound of the block size search range.
    pub fn validate_block_max(block_max: usize) -> Result<(), GridPriceError> {
        if block_max < 1 {
            return Err(GridPriceError::InvalidBlockBound(block_max));
        }
        Ok(())
    }

    /// Validate a single candidate configuration.
    pub fn validate_candidate(grid_size: usize, block_size: usize) -> Result<(), GridPriceError> {
        if grid_size < 1 || block_size < 1 {
            return Err(GridPriceError::InvalidCandidate {
                grid_size,
                block_size,
            });
        }
        Ok(())
    }

    /// Validate the context values against the active transform.
    pub fn validate_context<T: Float>(
        context: &Context<T>,
        transform: FeatureTransform,
    ) -> Result<(), GridPriceError> {
        for (name, value) in [("m", context.m), ("n", context.n)] {
            Self::validate_scalar(value, name)?;
            if transform.requires_positive() && value <= T::zero() {
                return Err(GridPriceError::NonPositiveLogInput(format!(
                    "{}={}",
                    name,
                    value.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), GridPriceError> {
        if !val.is_finite() {
            return Err(GridPriceError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), GridPriceError> {
        if let Some(param) = duplicate_param {
            return Err(GridPriceError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }

    // ========================================================================
    // History Validation
    // ========================================================================

    /// Validate every historical sample.
    ///
    /// Features and prices must be finite, prices non-negative, and features
    /// strictly positive when `transform` is logarithmic.
    pub fn validate_history<T: Float>(
        samples: &[HistoricalSample<T>],
        transform: FeatureTransform,
    ) -> Result<(), GridPriceError> {
        for (i, sample) in samples.iter().enumerate() {
            for (d, &value) in sample.features.iter().enumerate() {
                if !value.is_finite() {
                    return Err(GridPriceError::InvalidNumericValue(format!(
                        "history[{}].{}={}",
                        i,
                        FEATURE_NAMES[d],
                        value.to_f64().unwrap_or(f64::NAN)
                    )));
                }
                if transform.requires_positive() && value <= T::zero() {
                    return Err(GridPriceError::NonPositiveLogInput(format!(
                        "history[{}].{}={}",
                        i,
                        FEATURE_NAMES[d],
                        value.to_f64().unwrap_or(f64::NAN)
                    )));
                }
            }

            if !sample.price.is_finite() {
                return Err(GridPriceError::InvalidNumericValue(format!(
                    "history[{}].price={}",
                    i,
                    sample.price.to_f64().unwrap_or(f64::NAN)
                )));
            }
            if sample.price < T::zero() {
                return Err(GridPriceError::NegativePrice {
                    index: i,
                    price: sample.price.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(())
    }
}
