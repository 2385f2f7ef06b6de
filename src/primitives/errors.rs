//! Error types for price estimation.
//!
//! ## Purpose
//!
//! This module defines [`GridPriceError`], the single error type returned by
//! every fallible operation in the crate.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Errors are raised during `build()` or `fit()`, never in
//!   the middle of a grid search.
//! * **no_std**: `Display` is implemented by hand; `std::error::Error` is only
//!   implemented when the `std` feature is enabled.
//!
//! ## Non-goals
//!
//! * Degenerate numerical situations (empty history, coincident neighbors)
//!   are not errors; they resolve to documented neutral values.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

/// Errors raised while configuring or fitting a price estimator.
#[derive(Debug, Clone, PartialEq)]
pub enum GridPriceError {
    /// Neighbor count `p` must be at least 1.
    InvalidNeighborCount(usize),

    /// Maximum grid size must be at least 1.
    InvalidGridBound(usize),

    /// Maximum block size must be at least 1.
    InvalidBlockBound(usize),

    /// A candidate configuration had a zero coordinate.
    InvalidCandidate {
        /// Requested grid size.
        grid_size: usize,
        /// Requested block size.
        block_size: usize,
    },

    /// A NaN or infinite value was found in the context or history.
    InvalidNumericValue(String),

    /// A historical price was below zero.
    NegativePrice {
        /// Position of the offending sample in the history.
        index: usize,
        /// The rejected price.
        price: f64,
    },

    /// A value that must be log-transformed was zero or negative.
    NonPositiveLogInput(String),

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for GridPriceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridPriceError::InvalidNeighborCount(p) => {
                write!(f, "Invalid neighbor count: {} (must be at least 1)", p)
            }
            GridPriceError::InvalidGridBound(g) => {
                write!(f, "Invalid grid_max: {} (must be at least 1)", g)
            }
            GridPriceError::InvalidBlockBound(b) => {
                write!(f, "Invalid block_max: {} (must be at least 1)", b)
            }
            GridPriceError::InvalidCandidate {
                grid_size,
                block_size,
            } => write!(
                f,
                "Invalid candidate: grid_size={}, block_size={} (both must be at least 1)",
                grid_size, block_size
            ),
            GridPriceError::InvalidNumericValue(what) => {
                write!(f, "Invalid numeric value: {}", what)
            }
            GridPriceError::NegativePrice { index, price } => {
                write!(f, "Negative price at sample {}: {}", index, price)
            }
            GridPriceError::NonPositiveLogInput(what) => {
                write!(f, "Log transform requires positive values: {}", what)
            }
            GridPriceError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridPriceError {}
