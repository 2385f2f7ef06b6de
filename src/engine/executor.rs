//! Execution engine for price prediction and grid search.
//!
//! ## Purpose
//!
//! This module owns the fitted state of an estimator (transformed history
//! coordinates and feature scale) and drives the algorithms layer to answer
//! single predictions and exhaustive grid searches.
//!
//! ## Design notes
//!
//! * **Fit once**: The feature transform and scale are computed when the
//!   executor is created, before any candidate is evaluated.
//! * **Row-major search**: Candidates are enumerated `g = 1..=G`, then
//!   `b = 1..=B`; a candidate replaces the incumbent only when strictly
//!   cheaper, so the first optimum wins.
//! * **Deterministic parallelism**: With the `parallel` feature, rows are
//!   searched on the rayon pool and row minima are merged in row order with
//!   the same rule, giving the sequential answer.
//!
//! ## Invariants
//!
//! * Search results always lie in `[1, G] × [1, B]`.
//! * The history is borrowed immutably for the executor's lifetime.
//!
//! ## Non-goals
//!
//! * This module does not validate configuration or history (handled by
//!   `validator`).
//! * This module does not prune or cache candidates across the search.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt::Debug;
use num_traits::Float;
use tracing::{debug, trace, warn};

use crate::algorithms::combination::CombinationStrategy;
use crate::algorithms::neighborhood::NeighborSelector;
use crate::engine::output::PredictionResult;
use crate::engine::workspace::PredictionWorkspace;
use crate::math::scaling::{FeatureScale, ScalingMethod};
use crate::math::transform::FeatureTransform;
use crate::primitives::sample::{Context, FEATURE_DIM, HistoricalSample};

// ============================================================================
// Defaults
// ============================================================================

/// Default number of neighbors.
pub const DEFAULT_NEIGHBORS: usize = 3;

/// Default upper bound of the grid size search range.
pub const DEFAULT_GRID_MAX: usize = 16;

/// Default upper bound of the block size search range.
pub const DEFAULT_BLOCK_MAX: usize = 1024;

/// Default grid size for single predictions.
pub const DEFAULT_GRID_SIZE: usize = 1;

/// Default block size for single predictions.
pub const DEFAULT_BLOCK_SIZE: usize = 255;

// ============================================================================
// Mode
// ============================================================================

/// What a run computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Estimate the price of one given configuration.
    ///
    /// The classic candidate is `(DEFAULT_GRID_SIZE, DEFAULT_BLOCK_SIZE)`.
    Predict {
        /// Candidate grid size.
        grid_size: usize,
        /// Candidate block size.
        block_size: usize,
    },

    /// Search the full grid for the cheapest configuration (default).
    #[default]
    Search,
}

// ============================================================================
// Configuration
// ============================================================================

/// Immutable configuration of one estimator.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorConfig<T> {
    /// Fixed context values of the query.
    pub context: Context<T>,

    /// Number of neighbors retained per prediction.
    pub neighbors: usize,

    /// Upper bound (inclusive) of grid sizes searched.
    pub grid_max: usize,

    /// Upper bound (inclusive) of block sizes searched.
    pub block_max: usize,

    /// Neighbor price combination strategy.
    pub strategy: CombinationStrategy,

    /// Coordinate transform applied to history and queries.
    pub transform: FeatureTransform,

    /// Method deriving the feature scale from the history.
    pub scaling_method: ScalingMethod,

    /// Single prediction or grid search.
    pub mode: Mode,

    /// Whether to search rows in parallel (requires the `parallel` feature).
    pub parallel: bool,
}

impl<T: Float> Default for EstimatorConfig<T> {
    fn default() -> Self {
        Self {
            context: Context::default(),
            neighbors: DEFAULT_NEIGHBORS,
            grid_max: DEFAULT_GRID_MAX,
            block_max: DEFAULT_BLOCK_MAX,
            strategy: CombinationStrategy::default(),
            transform: FeatureTransform::default(),
            scaling_method: ScalingMethod::default(),
            mode: Mode::default(),
            parallel: false,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Fitted estimator state over a borrowed history.
#[derive(Debug, Clone)]
pub struct PriceExecutor<'a, T: Float> {
    config: EstimatorConfig<T>,
    samples: &'a [HistoricalSample<T>],
    points: Vec<[T; FEATURE_DIM]>,
    scale: FeatureScale<T>,
    selector: NeighborSelector,
}

impl<'a, T: Float + Debug + Send + Sync> PriceExecutor<'a, T> {
    /// Transform the history and compute its feature scale.
    pub fn new(config: EstimatorConfig<T>, samples: &'a [HistoricalSample<T>]) -> Self {
        let points: Vec<[T; FEATURE_DIM]> = samples
            .iter()
            .map(|s| config.transform.apply_point(s.features))
            .collect();
        let scale = config.scaling_method.compute(&points);
        let selector = NeighborSelector::new(config.neighbors);

        if samples.is_empty() {
            warn!("empty history; every prediction falls back to zero");
        } else {
            debug!(
                samples = samples.len(),
                scale = ?scale.as_slice(),
                active_dimensions = scale.active_dimensions(),
                "computed feature scale"
            );
        }

        Self {
            config,
            samples,
            points,
            scale,
            selector,
        }
    }

    /// Configuration this executor was built with.
    #[inline]
    pub fn config(&self) -> &EstimatorConfig<T> {
        &self.config
    }

    /// Feature scale derived from the history.
    #[inline]
    pub fn scale(&self) -> &FeatureScale<T> {
        &self.scale
    }

    /// Borrowed history.
    #[inline]
    pub fn samples(&self) -> &'a [HistoricalSample<T>] {
        self.samples
    }

    /// Allocate a workspace sized for this history.
    pub fn workspace(&self) -> PredictionWorkspace<T> {
        PredictionWorkspace::new(self.samples.len(), self.selector.neighbors())
    }

    /// Estimate the price of one candidate using caller-provided buffers.
    pub fn evaluate(
        &self,
        grid_size: usize,
        block_size: usize,
        workspace: &mut PredictionWorkspace<T>,
    ) -> T {
        let query = self
            .config
            .transform
            .apply_point(self.config.context.query_point(grid_size, block_size));

        self.selector.select(
            &query,
            &self.points,
            &self.scale,
            &mut workspace.ranking,
            &mut workspace.neighborhood,
        );

        self.config.strategy.combine(
            &query,
            &self.points,
            self.samples,
            &workspace.neighborhood,
            &self.scale,
        )
    }

    /// Estimate the price of one candidate.
    pub fn predict(&self, grid_size: usize, block_size: usize) -> PredictionResult<T> {
        let mut workspace = self.workspace();
        PredictionResult {
            grid_size,
            block_size,
            price: self.evaluate(grid_size, block_size, &mut workspace),
        }
    }

    /// Exhaustively search `[1, G] × [1, B]` for the cheapest configuration.
    pub fn search(&self) -> PredictionResult<T> {
        let grid_max = self.config.grid_max.max(1);
        debug!(
            grid_max,
            block_max = self.config.block_max,
            parallel = self.config.parallel,
            "starting grid search"
        );

        let best = self.search_rows(grid_max);

        debug!(
            grid_size = best.grid_size,
            block_size = best.block_size,
            price = ?best.price,
            "grid search finished"
        );
        best
    }

    /// Run the configured mode.
    pub fn run(&self) -> PredictionResult<T> {
        match self.config.mode {
            Mode::Predict {
                grid_size,
                block_size,
            } => self.predict(grid_size, block_size),
            Mode::Search => self.search(),
        }
    }

    #[cfg(feature = "parallel")]
    fn search_rows(&self, grid_max: usize) -> PredictionResult<T> {
        use rayon::prelude::*;

        if !self.config.parallel {
            return self.search_rows_sequential(grid_max);
        }

        // Indexed collect keeps row order for the merge.
        let rows: Vec<PredictionResult<T>> = (1..=grid_max)
            .into_par_iter()
            .map_init(|| self.workspace(), |ws, g| self.search_row(g, ws))
            .collect();

        rows.into_iter()
            .reduce(PredictionResult::min_first)
            .unwrap_or_else(|| self.predict(1, 1))
    }

    #[cfg(not(feature = "parallel"))]
    fn search_rows(&self, grid_max: usize) -> PredictionResult<T> {
        self.search_rows_sequential(grid_max)
    }

    fn search_rows_sequential(&self, grid_max: usize) -> PredictionResult<T> {
        let mut workspace = self.workspace();
        let mut best = self.search_row(1, &mut workspace);
        for g in 2..=grid_max {
            best = best.min_first(self.search_row(g, &mut workspace));
        }
        best
    }

    /// Cheapest block size for a fixed grid size.
    fn search_row(
        &self,
        grid_size: usize,
        workspace: &mut PredictionWorkspace<T>,
    ) -> PredictionResult<T> {
        let block_max = self.config.block_max.max(1);

        let mut best = PredictionResult {
            grid_size,
            block_size: 1,
            price: self.evaluate(grid_size, 1, workspace),
        };
        for b in 2..=block_max {
            let price = self.evaluate(grid_size, b, workspace);
            if price < best.price {
                best = PredictionResult {
                    grid_size,
                    block_size: b,
                    price,
                };
            }
        }

        trace!(grid_size, block_size = best.block_size, price = ?best.price, "row minimum");
        best
    }
}
