//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the algorithms:
//! - Validation of configuration and history
//! - The fitted executor (single prediction and grid search)
//! - Reusable per-worker workspaces
//! - The result type
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Prediction and grid search execution.
pub mod executor;

/// Prediction results.
pub mod output;

/// Configuration and history validation.
pub mod validator;

/// Reusable prediction buffers.
pub mod workspace;
