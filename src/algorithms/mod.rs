//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the prediction algorithms:
//! - Ranking the history by distance to a query and keeping the closest `p`
//! - Combining the retained neighbors' prices into one estimate
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Nearest-neighbor selection.
pub mod neighborhood;

/// Neighbor price combination strategies.
pub mod combination;
