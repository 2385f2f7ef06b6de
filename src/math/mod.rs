//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numerical building blocks of the estimator:
//! - Scale-weighted distance and inner product between feature vectors
//! - Per-dimension scale estimation over the history
//! - Coordinate transforms (raw or logarithmic)
//!
//! These functions carry no algorithm-specific state.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Scale-weighted distance and inner product.
pub mod distance;

/// Per-dimension feature scale estimation.
pub mod scaling;

/// Feature coordinate transforms.
pub mod transform;
