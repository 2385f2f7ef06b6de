//! Result type for predictions and grid searches.

use core::fmt::{self, Display};
use num_traits::Float;

/// A configuration together with its estimated price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult<T> {
    /// Grid size of the configuration.
    pub grid_size: usize,

    /// Block size of the configuration.
    pub block_size: usize,

    /// Estimated price.
    pub price: T,
}

impl<T: Float> PredictionResult<T> {
    /// Keep `self` unless `other` is strictly cheaper.
    ///
    /// Folding candidates in enumeration order with this rule keeps the first
    /// optimum encountered.
    #[inline]
    pub fn min_first(self, other: Self) -> Self {
        if other.price < self.price { other } else { self }
    }
}

impl<T: Float + Display> Display for PredictionResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Prediction:")?;
        writeln!(f, "  Grid size:  {}", self.grid_size)?;
        writeln!(f, "  Block size: {}", self.block_size)?;
        write!(f, "  Price:      {}", self.price)
    }
}
