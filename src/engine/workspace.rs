//! Workspace for reusable prediction buffers.
//!
//! A grid search evaluates thousands of candidates against the same history;
//! one workspace per worker keeps the ranking allocation-free after the first
//! candidate.

use num_traits::Float;

use crate::algorithms::neighborhood::Neighborhood;
use crate::primitives::buffer::RankingBuffer;

/// Pre-allocated buffers for one prediction at a time.
#[derive(Debug, Clone)]
pub struct PredictionWorkspace<T: Float> {
    /// Buffer for ranking the full history.
    pub ranking: RankingBuffer<T>,
    /// Buffer for the retained neighbors.
    pub neighborhood: Neighborhood<T>,
}

impl<T: Float> PredictionWorkspace<T> {
    /// Create a workspace for a history of `n` samples and `k` neighbors.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            ranking: RankingBuffer::new(n),
            neighborhood: Neighborhood::with_capacity(k.min(n)),
        }
    }
}
