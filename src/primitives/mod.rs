//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental data structures shared by every other
//! layer:
//! - The crate error type
//! - Historical samples, context values and query points
//! - Reusable scratch buffers for neighbor ranking
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error type for configuration and history validation.
pub mod errors;

/// Historical samples, context values and query points.
pub mod sample;

/// Reusable buffers for per-candidate neighbor ranking.
pub mod buffer;
