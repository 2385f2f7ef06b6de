//! Buffer recycling for repeated neighbor ranking.
//!
//! ## Purpose
//!
//! A grid search ranks the full history once per candidate. This module
//! provides the scratch storage reused across those rankings so that the
//! search allocates once per worker instead of once per cell.
//!
//! ## Design notes
//!
//! * **Lazy Expansion**: Buffers grow on demand via `ensure_capacity` but never
//!   shrink.
//! * **Explicit Ownership**: Buffers are passed explicitly, one per worker.
//!
//! ## Invariants
//!
//! * Buffers are only logically cleared between candidates, never deallocated.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::ops::{Deref, DerefMut};

// ============================================================================
// Slot - Unified Vector Abstraction
// ============================================================================

/// A reusable vector slot with automatic capacity management.
#[derive(Debug, Clone)]
pub struct Slot<T>(Vec<T>);

impl<T> Slot<T> {
    /// Create a new slot with the given initial capacity.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Ensure the slot has at least the given capacity. Never shrinks.
    #[inline]
    pub fn ensure_capacity(&mut self, capacity: usize) {
        if self.0.capacity() < capacity {
            self.0.reserve(capacity - self.0.len());
        }
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for Slot<T> {
    type Target = Vec<T>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// ============================================================================
// Ranking Buffer
// ============================================================================

/// Scratch space holding `(sample index, distance, squared distance)` while
/// ranking.
#[derive(Debug, Clone, Default)]
pub struct RankingBuffer<T> {
    /// Candidate neighbors in insertion order before sorting.
    pub entries: Slot<(usize, T, T)>,
}

impl<T> RankingBuffer<T> {
    /// Create a buffer sized for a history of `n` samples.
    pub fn new(n: usize) -> Self {
        Self {
            entries: Slot::new(n),
        }
    }

    /// Reset the buffer for the next ranking, keeping its capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
