//! High-level API for price estimation and configuration search.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring the estimator, a validated model, and the
//! fitted estimator that answers predictions and grid searches.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Presets**: `normalized()` and `log_space()` seed the two classic
//!   configurations; individual setters still override them.
//! * **Validated**: Parameters are validated when `.build()` is called; the
//!   history is validated when `.fit()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`GridPriceBuilder`] via `GridPrice::new()` (or a preset).
//! 2. Chain configuration methods (`.context()`, `.neighbors()`, etc.).
//! 3. Call `.build()` to obtain a [`GridPriceModel`].
//! 4. Call `.fit(&history)` to obtain a [`FittedGridPrice`].
//! 5. Call `.run()`, `.predict()` or `.search()`.

use core::fmt::Debug;
use num_traits::Float;

use crate::engine::executor::PriceExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::combination::CombinationStrategy;
pub use crate::engine::executor::{
    DEFAULT_BLOCK_MAX, DEFAULT_BLOCK_SIZE, DEFAULT_GRID_MAX, DEFAULT_GRID_SIZE, DEFAULT_NEIGHBORS,
    EstimatorConfig, Mode,
};
pub use crate::engine::output::PredictionResult;
pub use crate::math::distance::{delta, scalar};
pub use crate::math::scaling::{FeatureScale, ScalingMethod};
pub use crate::math::transform::FeatureTransform;
pub use crate::primitives::errors::GridPriceError;
pub use crate::primitives::sample::{Context, FEATURE_DIM, HistoricalSample};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a price estimator.
#[derive(Debug, Clone)]
pub struct GridPriceBuilder<T> {
    /// Values used for every parameter that is not set explicitly.
    base: EstimatorConfig<T>,

    /// Fixed context values `(m, n)`.
    pub context: Option<Context<T>>,

    /// Number of neighbors `p`.
    pub neighbors: Option<usize>,

    /// Upper bound of the grid size search range.
    pub grid_max: Option<usize>,

    /// Upper bound of the block size search range.
    pub block_max: Option<usize>,

    /// Neighbor price combination strategy.
    pub strategy: Option<CombinationStrategy>,

    /// Coordinate transform.
    pub transform: Option<FeatureTransform>,

    /// Feature scale estimation method.
    pub scaling_method: Option<ScalingMethod>,

    /// Single prediction or grid search.
    pub mode: Option<Mode>,

    /// Parallel search hint.
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float + Debug + Send + Sync> Default for GridPriceBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Debug + Send + Sync> GridPriceBuilder<T> {
    /// Create a new builder with default settings.
    ///
    /// Defaults: raw coordinates, variance scaling, local correction, `p = 3`,
    /// `G = 16`, `B = 1024`, context `(2, 2)`, search mode.
    pub fn new() -> Self {
        Self::from_base(EstimatorConfig::default())
    }

    /// Preset: variance-normalized raw coordinates with local correction.
    ///
    /// Identical to [`GridPriceBuilder::new`].
    pub fn normalized() -> Self {
        Self::new()
    }

    /// Preset: log-space coordinates, no scaling, inverse squared-distance
    /// weighting over 6 neighbors, searching `G = 31`, `B = 1023`.
    pub fn log_space() -> Self {
        Self::from_base(EstimatorConfig {
            neighbors: 6,
            grid_max: 31,
            block_max: 1023,
            strategy: CombinationStrategy::InverseSquaredDistance,
            transform: FeatureTransform::Log,
            scaling_method: ScalingMethod::Unit,
            ..EstimatorConfig::default()
        })
    }

    fn from_base(base: EstimatorConfig<T>) -> Self {
        Self {
            base,
            context: None,
            neighbors: None,
            grid_max: None,
            block_max: None,
            strategy: None,
            transform: None,
            scaling_method: None,
            mode: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the fixed context values `(m, n)`.
    pub fn context(mut self, m: T, n: T) -> Self {
        if self.context.is_some() {
            self.duplicate_param = Some("context");
        }
        self.context = Some(Context::new(m, n));
        self
    }

    /// Set the number of neighbors retained per prediction.
    pub fn neighbors(mut self, p: usize) -> Self {
        if self.neighbors.is_some() {
            self.duplicate_param = Some("neighbors");
        }
        self.neighbors = Some(p);
        self
    }

    /// Set the largest grid size searched (inclusive).
    pub fn grid_max(mut self, grid_max: usize) -> Self {
        if self.grid_max.is_some() {
            self.duplicate_param = Some("grid_max");
        }
        self.grid_max = Some(grid_max);
        self
    }

    /// Set the largest block size searched (inclusive).
    pub fn block_max(mut self, block_max: usize) -> Self {
        if self.block_max.is_some() {
            self.duplicate_param = Some("block_max");
        }
        self.block_max = Some(block_max);
        self
    }

    /// Set the neighbor price combination strategy.
    pub fn strategy(mut self, strategy: CombinationStrategy) -> Self {
        if self.strategy.is_some() {
            self.duplicate_param = Some("strategy");
        }
        self.strategy = Some(strategy);
        self
    }

    /// Set the coordinate transform.
    pub fn transform(mut self, transform: FeatureTransform) -> Self {
        if self.transform.is_some() {
            self.duplicate_param = Some("transform");
        }
        self.transform = Some(transform);
        self
    }

    /// Set the feature scale estimation method.
    pub fn scaling_method(mut self, method: ScalingMethod) -> Self {
        if self.scaling_method.is_some() {
            self.duplicate_param = Some("scaling_method");
        }
        self.scaling_method = Some(method);
        self
    }

    /// Choose between a single prediction and a grid search.
    pub fn mode(mut self, mode: Mode) -> Self {
        if self.mode.is_some() {
            self.duplicate_param = Some("mode");
        }
        self.mode = Some(mode);
        self
    }

    /// Search grid rows in parallel (effective with the `parallel` feature).
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<GridPriceModel<T>, GridPriceError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let base = self.base;
        let config = EstimatorConfig {
            context: self.context.unwrap_or(base.context),
            neighbors: self.neighbors.unwrap_or(base.neighbors),
            grid_max: self.grid_max.unwrap_or(base.grid_max),
            block_max: self.block_max.unwrap_or(base.block_max),
            strategy: self.strategy.unwrap_or(base.strategy),
            transform: self.transform.unwrap_or(base.transform),
            scaling_method: self.scaling_method.unwrap_or(base.scaling_method),
            mode: self.mode.unwrap_or(base.mode),
            parallel: self.parallel.unwrap_or(base.parallel),
        };

        Validator::validate_neighbors(config.neighbors)?;
        Validator::validate_grid_max(config.grid_max)?;
        Validator::validate_block_max(config.block_max)?;
        Validator::validate_context(&config.context, config.transform)?;
        if let Mode::Predict {
            grid_size,
            block_size,
        } = config.mode
        {
            Validator::validate_candidate(grid_size, block_size)?;
        }

        Ok(GridPriceModel { config })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A validated estimator configuration, ready to be fitted to a history.
#[derive(Debug, Clone, PartialEq)]
pub struct GridPriceModel<T> {
    config: EstimatorConfig<T>,
}

impl<T: Float + Debug + Send + Sync> GridPriceModel<T> {
    /// The validated configuration.
    pub fn config(&self) -> &EstimatorConfig<T> {
        &self.config
    }

    /// Validate `history`, transform it and compute its feature scale.
    ///
    /// The returned estimator borrows `history`; the scale is computed here,
    /// once, and shared by every subsequent prediction.
    pub fn fit<'a>(
        &self,
        history: &'a [HistoricalSample<T>],
    ) -> Result<FittedGridPrice<'a, T>, GridPriceError> {
        Validator::validate_history(history, self.config.transform)?;
        Ok(FittedGridPrice {
            executor: PriceExecutor::new(self.config.clone(), history),
        })
    }
}

// ============================================================================
// Fitted Estimator
// ============================================================================

/// An estimator fitted to a borrowed history.
#[derive(Debug, Clone)]
pub struct FittedGridPrice<'a, T: Float> {
    executor: PriceExecutor<'a, T>,
}

impl<'a, T: Float + Debug + Send + Sync> FittedGridPrice<'a, T> {
    /// Run the configured mode: one prediction or a full grid search.
    pub fn run(&self) -> PredictionResult<T> {
        self.executor.run()
    }

    /// Estimate the price of one configuration.
    pub fn predict(
        &self,
        grid_size: usize,
        block_size: usize,
    ) -> Result<PredictionResult<T>, GridPriceError> {
        Validator::validate_candidate(grid_size, block_size)?;
        Ok(self.executor.predict(grid_size, block_size))
    }

    /// Find the cheapest configuration in `[1, G] × [1, B]`.
    pub fn search(&self) -> PredictionResult<T> {
        self.executor.search()
    }

    /// Feature scale derived from the history.
    pub fn scale(&self) -> &FeatureScale<T> {
        self.executor.scale()
    }

    /// Configuration in use.
    pub fn config(&self) -> &EstimatorConfig<T> {
        self.executor.config()
    }

    /// Number of historical samples.
    pub fn len(&self) -> usize {
        self.executor.samples().len()
    }

    /// Returns true if the history is empty.
    pub fn is_empty(&self) -> bool {
        self.executor.samples().is_empty()
    }
}
