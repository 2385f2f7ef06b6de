//! # gridprice - nearest-neighbor price estimation for launch configurations
//!
//! Estimates the cost ("price") of a configuration made of two tunable
//! integers (`grid_size`, `block_size`) and two fixed context values
//! (`m`, `n`) from a table of previously observed prices, then searches the
//! tunable space for the cheapest configuration. No analytic cost model is
//! needed: every estimate is a local regression over the closest historical
//! samples.
//!
//! ## How it works
//!
//! 1. A per-dimension scale (the population variance by default) is derived
//!    once from the history, so that a block size of 1024 and a grid size of 4
//!    weigh comparably in distance computations.
//! 2. For a candidate configuration, every historical sample is ranked by its
//!    scale-weighted distance to the candidate and the closest `p` are kept.
//! 3. The neighbors' prices are combined into one estimate, either by local
//!    multivariate correction or by inverse-distance weighting.
//! 4. The grid search repeats steps 2–3 for every pair in `[1, G] × [1, B]`
//!    and reports the first cheapest one in row-major order.
//!
//! ## Quick Start
//!
//! ```rust
//! use gridprice::prelude::*;
//!
//! let history = vec![
//!     HistoricalSample::new(2.0, 2.0, 1.0, 255.0, 10.0),
//!     HistoricalSample::new(2.0, 2.0, 2.0, 255.0, 12.0),
//!     HistoricalSample::new(2.0, 2.0, 4.0, 255.0, 9.0),
//! ];
//!
//! let model = GridPrice::new()
//!     .context(2.0, 2.0)       // Fixed m, n
//!     .neighbors(3)            // p
//!     .grid_max(8)             // G
//!     .block_max(256)          // B
//!     .strategy(InverseDistance)
//!     .build()?;
//!
//! let fitted = model.fit(&history)?;
//!
//! // Single configuration
//! let one = fitted.predict(1, 255)?;
//! assert!(one.price > 9.0 && one.price < 12.0);
//!
//! // Cheapest configuration
//! let best = fitted.search();
//! assert!(best.grid_size >= 1 && best.grid_size <= 8);
//! assert!(best.block_size >= 1 && best.block_size <= 256);
//! # Result::<(), GridPriceError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! | Parameter            | Default           | Range/Options                   | Description                          |
//! |----------------------|-------------------|---------------------------------|--------------------------------------|
//! | **context**          | `(2, 2)`          | finite (positive under `Log`)   | Fixed context values `m`, `n`        |
//! | **neighbors**        | 3                 | [1, ∞)                          | Neighbors `p` retained per estimate  |
//! | **grid_max**         | 16                | [1, ∞)                          | Largest grid size searched           |
//! | **block_max**        | 1024              | [1, ∞)                          | Largest block size searched          |
//! | **strategy**         | `LocalCorrection` | 3 strategies                    | Neighbor price combination           |
//! | **transform**        | `Raw`             | `Raw`, `Log`                    | Coordinate transform                 |
//! | **scaling_method**   | `Variance`        | `Variance`, `Unit`, `MaxValue`  | Per-dimension scale                  |
//! | **mode**             | `Search`          | `Search`, `Predict { .. }`      | What `run()` computes                |
//! | **parallel**         | false             | true/false                      | Row-parallel search (`parallel`)     |
//!
//! ### Presets
//!
//! * `GridPrice::normalized()` - the defaults above.
//! * `GridPrice::log_space()` - `Log` coordinates, `Unit` scale,
//!   `InverseSquaredDistance` weighting, `p = 6`, `G = 31`, `B = 1023`.
//!
//! ```rust
//! use gridprice::prelude::*;
//!
//! let history = vec![
//!     HistoricalSample::new(4.0, 8.0, 2.0, 128.0, 3.5),
//!     HistoricalSample::new(4.0, 8.0, 4.0, 256.0, 2.0),
//! ];
//!
//! let best = GridPrice::log_space()
//!     .context(4.0, 8.0)
//!     .grid_max(4)         // Presets can still be overridden once
//!     .block_max(64)
//!     .build()?
//!     .fit(&history)?
//!     .run();
//!
//! assert!(best.price >= 2.0 && best.price <= 3.5);
//! # Result::<(), GridPriceError>::Ok(())
//! ```
//!
//! ## Degenerate inputs
//!
//! * **Empty history**: every estimate is `0` and the search returns `(1, 1)`.
//! * **Constant feature**: a dimension with zero variance is ignored by every
//!   distance and inner product.
//! * **Coincident neighbors**: a local correction ratio whose denominator is
//!   zero is treated as the neutral `1`.
//!
//! ## Result and Error Handling
//!
//! Configuration errors are reported by `build()`, history errors by `fit()`,
//! both as [`prelude::GridPriceError`]. Once fitted, `run()` and `search()`
//! cannot fail.
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to remove the standard library dependency; an
//! allocator is still required.
//!
//! ```toml
//! [dependencies]
//! gridprice = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - errors, samples and reusable buffers.
mod primitives;

// Layer 2: Math - distance, scaling and coordinate transforms.
mod math;

// Layer 3: Algorithms - neighbor selection and price combination.
mod algorithms;

// Layer 4: Engine - validation, execution and results.
mod engine;

// High-level fluent API.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use gridprice::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        CombinationStrategy::{InverseDistance, InverseSquaredDistance, LocalCorrection},
        Context, EstimatorConfig, FEATURE_DIM, FeatureScale,
        FeatureTransform::{Log, Raw},
        FittedGridPrice, GridPriceBuilder as GridPrice, GridPriceError, GridPriceModel,
        HistoricalSample, Mode,
        Mode::{Predict, Search},
        PredictionResult,
        ScalingMethod::{MaxValue, Unit, Variance},
        delta, scalar,
    };
}

pub use api::{
    CombinationStrategy, Context, DEFAULT_BLOCK_MAX, DEFAULT_BLOCK_SIZE, DEFAULT_GRID_MAX,
    DEFAULT_GRID_SIZE, DEFAULT_NEIGHBORS, EstimatorConfig, FEATURE_DIM, FeatureScale,
    FeatureTransform, FittedGridPrice, GridPriceBuilder, GridPriceError, GridPriceModel,
    HistoricalSample, Mode, PredictionResult, ScalingMethod, delta, scalar,
};

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// Only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
