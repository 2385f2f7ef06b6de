//! Nearest-neighbor selection over the history.
//!
//! ## Purpose
//!
//! This module ranks every historical point by its scale-weighted distance to
//! a query and retains the closest `p`.
//!
//! ## Design notes
//!
//! * **Exhaustive**: Every sample is measured; histories are small and the
//!   metric tolerates disabled dimensions, which rules out spatial pruning.
//! * **Stable**: Ranking uses a stable sort, so samples at equal distance
//!   keep their history order.
//! * **Allocation-free**: Callers pass a [`RankingBuffer`] and a
//!   [`Neighborhood`] that are reused across queries.
//!
//! ## Invariants
//!
//! * The neighborhood holds `min(p, N)` entries, closest first.
//! * An empty history yields an empty neighborhood.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::cmp::Ordering::Equal;
use num_traits::Float;

use crate::math::distance::delta_squared;
use crate::math::scaling::FeatureScale;
use crate::primitives::buffer::RankingBuffer;
use crate::primitives::sample::FEATURE_DIM;

// ============================================================================
// Neighborhood Structure
// ============================================================================

/// Ranked neighbors of one query point.
#[derive(Debug, Clone)]
pub struct Neighborhood<T> {
    /// History indices of the retained neighbors, closest first.
    pub indices: Vec<usize>,
    /// Distance of each retained neighbor (aligned with `indices`).
    pub distances: Vec<T>,
    /// Squared distance of each retained neighbor, as summed before the root.
    pub squared_distances: Vec<T>,
}

impl<T: Float> Neighborhood<T> {
    /// Create a new empty neighborhood.
    pub fn new() -> Self {
        Self {
            indices: Vec::new(),
            distances: Vec::new(),
            squared_distances: Vec::new(),
        }
    }

    /// Pre-allocate buffers for a neighborhood of size k.
    pub fn with_capacity(k: usize) -> Self {
        Self {
            indices: Vec::with_capacity(k),
            distances: Vec::with_capacity(k),
            squared_distances: Vec::with_capacity(k),
        }
    }

    /// Returns true if no neighbors are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    fn clear(&mut self) {
        self.indices.clear();
        self.distances.clear();
        self.squared_distances.clear();
    }
}

impl<T: Float> Default for Neighborhood<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Neighbor Selector
// ============================================================================

/// Selects the `p` historical points closest to a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborSelector {
    neighbors: usize,
}

impl NeighborSelector {
    /// Create a selector that retains at most `neighbors` points.
    pub fn new(neighbors: usize) -> Self {
        Self { neighbors }
    }

    /// Maximum number of neighbors retained.
    #[inline]
    pub fn neighbors(&self) -> usize {
        self.neighbors
    }

    /// Rank `points` by distance to `query` and store the closest in `out`.
    pub fn select<T: Float>(
        &self,
        query: &[T],
        points: &[[T; FEATURE_DIM]],
        scale: &FeatureScale<T>,
        buffer: &mut RankingBuffer<T>,
        out: &mut Neighborhood<T>,
    ) {
        out.clear();
        if self.neighbors == 0 || points.is_empty() {
            return;
        }

        buffer.clear();
        buffer.entries.ensure_capacity(points.len());
        buffer.entries.extend(
            points
                .iter()
                .enumerate()
                .map(|(i, point)| {
                    let squared = delta_squared(query, point, scale.as_slice());
                    (i, squared.sqrt(), squared)
                }),
        );

        // Stable: equal distances keep history order.
        buffer
            .entries
            .sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Equal));

        let keep = self.neighbors.min(buffer.entries.len());
        for &(idx, dist, squared) in buffer.entries.iter().take(keep) {
            out.indices.push(idx);
            out.distances.push(dist);
            out.squared_distances.push(squared);
        }
    }
}
